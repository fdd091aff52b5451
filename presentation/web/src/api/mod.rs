pub mod error;
pub mod favorite {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod health {
    pub mod routes;
}
pub mod tags;
