pub mod chart_spec;
pub mod rendered_chart;
pub mod series_point;
