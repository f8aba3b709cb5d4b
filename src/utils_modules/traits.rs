use crate::common::*;

/* Elasticsearch aggregation bucket → 도메인 타입 변환을 위한 공통 트레이트 */
pub trait FromAggBucket
where
    Self: Sized,
{
    fn from_agg_bucket(bucket: &Value) -> Result<Self, anyhow::Error>;
}
