use crate::common::*;

use crate::enums::metric_kind::*;
use crate::utils_modules::traits::*;

#[doc = r#"
    date_histogram 응답의 버킷 하나

    # Fields
    * `key_ms` - 버킷 시작 시각 (epoch milliseconds, UTC)
    * `doc_count` - 버킷 내 문서 수
    * `metric_value` - 하위 cardinality 집계 값 (요청하지 않았으면 None)
"#]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct HistogramBucket {
    pub key_ms: i64,
    pub doc_count: u64,
    pub metric_value: Option<f64>,
}

impl FromAggBucket for HistogramBucket {
    fn from_agg_bucket(bucket: &Value) -> Result<Self, anyhow::Error> {
        /* 1) key (epoch millis) */
        let key_ms: i64 = bucket
            .get("key")
            .and_then(|v| v.as_i64())
            .ok_or_else(|| anyhow!("[HistogramBucket->from_agg_bucket] Missing or invalid 'key'"))?;

        /* 2) doc_count */
        let doc_count: u64 = bucket
            .get("doc_count")
            .and_then(|v| v.as_u64())
            .ok_or_else(|| {
                anyhow!("[HistogramBucket->from_agg_bucket] Missing or invalid 'doc_count'")
            })?;

        /* 3) 하위 cardinality 값 - COUNT 요청이면 없다 */
        let metric_value: Option<f64> = match bucket.get(DISTINCT_AGG_NAME) {
            Some(sub_agg) => Some(
                sub_agg
                    .get("value")
                    .and_then(|v| v.as_f64())
                    .ok_or_else(|| {
                        anyhow!(
                            "[HistogramBucket->from_agg_bucket] Missing or invalid '{}.value'",
                            DISTINCT_AGG_NAME
                        )
                    })?,
            ),
            None => None,
        };

        Ok(HistogramBucket::new(key_ms, doc_count, metric_value))
    }
}
