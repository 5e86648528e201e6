pub mod config;
pub mod dto;
pub mod error;
pub mod intake;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;
