pub mod handlers;
pub mod hub;
pub mod routes;
pub mod services;
