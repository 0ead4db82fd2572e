pub mod clients;
pub mod services;
