pub mod server;
pub mod handlers;
pub mod models;

#[cfg(test)]
mod tests;

pub use server::{start_server, ApiConfig};
pub use handlers::*;
pub use models::*;
