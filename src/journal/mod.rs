pub mod error;
pub mod learning;
pub mod project;
pub mod stats;
pub mod types;
