// Models module for data structures
pub mod license;
pub mod license_texts;
pub mod project;
