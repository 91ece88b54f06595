pub mod db;
pub mod domain;
pub mod models;
pub mod processing;
pub mod recognition;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod storage;

/// Shared confidence threshold: recognized lines at or below it are ignored
/// by the nameplate classifier.
pub const CONFIDENCE_THRESHOLD: f32 = 0.3;
