//! HTTP tests for the `/api/v1` routes.

#[cfg(test)]
mod tests {
    use actix_web::http::Method;
    use actix_web::{test, web, App};
    use anyhow::Result;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::Arc;

    use crate::api::models::{ErrorResponse, HealthResponse, LabelsResponse};
    use crate::api::server::{configure, cors};
    use crate::data::AnnotatedDoc;
    use crate::engine::{Annotator, ExtractionEngine};

    fn hamburger_doc() -> Value {
        json!({
            "words": ["John", "ate", "the", "worst", "hamburger"],
            "lemmas": ["John", "eat", "the", "bad", "hamburger"],
            "pos": [11, 15, 5, 0, 7],
            "dep": ["nsubj", "ROOT", "det", "amod", "dobj"],
            "lefts": {"1": [0], "4": [2, 3]},
            "rights": {"1": [4]}
        })
    }

    struct StubAnnotator;

    #[async_trait]
    impl Annotator for StubAnnotator {
        async fn annotate(&self, texts: &[String]) -> Result<Vec<AnnotatedDoc>> {
            let doc: AnnotatedDoc = serde_json::from_value(hamburger_doc())?;
            Ok(texts.iter().map(|_| doc.clone()).collect())
        }
    }

    macro_rules! app {
        ($engine:expr) => {
            test::init_service(
                App::new()
                    .wrap(cors())
                    .app_data(web::Data::new($engine))
                    .configure(configure),
            )
            .await
        };
    }

    // ==================== Health and labels ====================

    #[actix_web::test]
    async fn test_health_reports_annotator() {
        let app = app!(ExtractionEngine::default());
        let req = test::TestRequest::get()
            .uri("/api/v1/health")
            .insert_header(("Origin", "http://localhost:3000"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        assert!(resp.headers().contains_key("access-control-allow-origin"));

        let body: HealthResponse = test::read_body_json(resp).await;
        assert_eq!(body.status, "healthy");
        assert!(!body.annotator);
    }

    #[actix_web::test]
    async fn test_labels() {
        let app = app!(ExtractionEngine::default());
        let req = test::TestRequest::get().uri("/api/v1/labels").to_request();
        let body: LabelsResponse = test::call_and_read_body_json(&app, req).await;

        assert!(body.subjects.contains(&"nsubj".to_string()));
        assert!(body.objects.contains(&"dobj".to_string()));
        assert_eq!(body.prepositions, vec!["prep"]);
        assert!(body.negations.contains(&"n't".to_string()));
    }

    #[actix_web::test]
    async fn test_cross_origin_preflight() {
        let app = app!(ExtractionEngine::default());
        for uri in ["/api/v1/extract", "/api/v1/process"] {
            let req = test::TestRequest::default()
                .method(Method::OPTIONS)
                .uri(uri)
                .insert_header(("Origin", "http://localhost:3000"))
                .insert_header(("Access-Control-Request-Method", "POST"))
                .insert_header(("Access-Control-Request-Headers", "content-type"))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert!(resp.status().is_success(), "{} preflight answered {}", uri, resp.status());
            assert!(resp.headers().contains_key("access-control-allow-origin"));
            assert!(resp.headers().contains_key("access-control-allow-methods"));
        }
    }

    // ==================== Extract ====================

    #[actix_web::test]
    async fn test_extract_svao() {
        let app = app!(ExtractionEngine::default());
        let req = test::TestRequest::post()
            .uri("/api/v1/extract")
            .set_json(json!({"pattern": "svao", "documents": [hamburger_doc()]}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["pattern"], "svao");
        assert_eq!(body["result_count"], 1);
        assert_eq!(body["results"][0]["document"], 0);
        assert_eq!(
            body["results"][0]["relations"],
            json!([{"subject": "john", "verb": "ate", "object": "worst hamburger"}])
        );
    }

    #[actix_web::test]
    async fn test_extract_with_filters() {
        let app = app!(ExtractionEngine::default());

        let req = test::TestRequest::post()
            .uri("/api/v1/extract")
            .set_json(json!({"pattern": "sv", "documents": [hamburger_doc()], "subjects": ["John"]}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["results"][0]["relations"], json!([{"subject": "john", "verb": "ate"}]));

        let req = test::TestRequest::post()
            .uri("/api/v1/extract")
            .set_json(json!({"pattern": "sv", "documents": [hamburger_doc()], "verbs": ["drink"]}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["result_count"], 0);
        assert_eq!(body["results"][0]["relations"], json!([]));
    }

    #[actix_web::test]
    async fn test_extract_rejects_invalid_tree() {
        let app = app!(ExtractionEngine::default());
        let mut doc = hamburger_doc();
        doc["rights"] = json!({"1": [4, 9]});

        let req = test::TestRequest::post()
            .uri("/api/v1/extract")
            .set_json(json!({"pattern": "svo", "documents": [doc]}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error_type, "ValidationError");
    }

    #[actix_web::test]
    async fn test_extract_rejects_unknown_pattern() {
        let app = app!(ExtractionEngine::default());
        let req = test::TestRequest::post()
            .uri("/api/v1/extract")
            .set_json(json!({"pattern": "ovs", "documents": []}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    // ==================== Process ====================

    #[actix_web::test]
    async fn test_process_without_annotator() {
        let app = app!(ExtractionEngine::default());
        let req = test::TestRequest::post()
            .uri("/api/v1/process")
            .set_json(json!({"pattern": "svo", "articles": ["John ate the worst hamburger"]}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 503);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error_type, "AnnotatorUnavailable");
    }

    #[actix_web::test]
    async fn test_process_with_annotator() {
        let engine = ExtractionEngine::default().with_annotator(Arc::new(StubAnnotator));
        let app = app!(engine);
        let req = test::TestRequest::post()
            .uri("/api/v1/process")
            .set_json(json!({"pattern": "svo", "articles": ["one", "two"]}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["result_count"], 2);
        assert_eq!(body["results"][1]["document"], 1);
        assert_eq!(
            body["results"][1]["relations"],
            json!([{"subject": "john", "verb": "ate", "object": "hamburger"}])
        );
    }
}
