use crate::dto::histogram_bucket::*;
use crate::enums::metric_kind::*;
use crate::model::chart::series_point::*;

pub trait SeriesService {
    fn normalize(
        &self,
        buckets: &[HistogramBucket],
        metric: &MetricKind,
    ) -> anyhow::Result<Vec<SeriesPoint>>;
}
