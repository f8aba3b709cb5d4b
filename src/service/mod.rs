pub mod artifact_service_impl;
pub mod chart_service_impl;
pub mod display_service_impl;
pub mod query_service_impl;
pub mod series_service_impl;
