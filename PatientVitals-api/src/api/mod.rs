// HTTP surface: routing, handlers and path parsing
pub mod handlers;
pub mod path;
pub mod routes;

pub use routes::{create_app, AppState};
