pub mod config;
pub mod logging;

// Upload pipeline, leaf-first.
pub mod checksum;
pub mod description;
pub mod file_name;
pub mod request;
pub mod upload;
