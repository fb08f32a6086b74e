// Services module for business logic
pub mod generator;
pub mod license_resolver;
