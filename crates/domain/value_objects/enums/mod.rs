pub mod client_plans;
pub mod service_categories;
