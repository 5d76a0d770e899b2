//! HTTP front end for wordgate
//!
//! - `GET /translate/{word}` → `200 {"result": ...}` or `500 {"error": ...}`
//! - `GET /ping` → `200 {"message": "pong"}`
//! - `GET /hello` → `200 {"message": "world!"}`

pub mod config;
pub mod routes;

pub use config::Config;
pub use routes::{AppState, router};
