pub mod aggregation_request;
pub mod time_window;
