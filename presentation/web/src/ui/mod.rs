pub mod region;
pub mod routes;
pub mod session;
pub mod templates;
