pub mod metric_kind;
pub mod pipeline_error;
