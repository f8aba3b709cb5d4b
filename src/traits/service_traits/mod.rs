pub mod artifact_service;
pub mod chart_service;
pub mod display_service;
pub mod query_service;
pub mod series_service;
