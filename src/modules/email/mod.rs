pub mod campaign;
pub mod controller;
pub mod crud;
pub mod model;
pub mod routes;
pub mod schema;
