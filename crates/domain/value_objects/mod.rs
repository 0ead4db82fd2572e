pub mod clients;
pub mod enums;
pub mod services;
pub mod validation;
