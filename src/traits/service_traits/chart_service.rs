use crate::model::chart::{chart_spec::*, rendered_chart::*};

pub trait ChartService {
    #[doc = "
        Render a labeled line chart (one series, point markers, grid) into an
        in-memory SVG document. Performs no file I/O.
        # Arguments
        * `spec` - Axis labels, title and the date-ordered series
    "]
    fn render_line_chart(&self, spec: &ChartSpec) -> anyhow::Result<RenderedChart>;
}
