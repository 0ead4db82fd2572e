pub mod connection_manager;
pub mod postgres;
pub mod repositories;
