pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod geo;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod validate;

pub use routes::app;
