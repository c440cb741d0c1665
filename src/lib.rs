pub mod engine;
pub mod loader;
pub mod models;
pub mod report;
pub mod storage;
pub mod types;
