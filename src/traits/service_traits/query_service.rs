use crate::common::*;

use crate::dto::histogram_bucket::*;
use crate::model::query::aggregation_request::*;

#[async_trait]
pub trait QueryService {
    #[doc = "
        Submit a day-histogram aggregation (no hits) and return its buckets in the
        order the store produced them (ascending by key).
        Any failure carries `PipelineError::Execution` as context.
    "]
    async fn get_daily_histogram_buckets(
        &self,
        index_name: &str,
        request: &AggregationRequest,
    ) -> anyhow::Result<Vec<HistogramBucket>>;
}
