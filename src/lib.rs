pub mod asset;
pub mod config;
pub mod error;
pub mod filters;
pub mod grid;
pub mod logger;
pub mod notion;
pub mod post;
pub mod property_reader;
pub mod server;
mod test_data;
pub mod text_utils;
