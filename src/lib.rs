// cobra-scaffold - Cobra application generator
// Core library functionality

pub mod cli;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use models::license::{License, LicenseRegistry};
pub use services::license_resolver::{copyright_line, LicenseResolver, LicenseSources};
pub use utils::error::{Result, ScaffoldError};
pub use utils::identifier::normalize_command_name;
