use crate::common::*;

use crate::enums::metric_kind::*;
use crate::model::query::time_window::*;
use crate::utils_modules::time_utils::*;

/* 조회 구간은 최근 30일, 일 단위 버킷으로 고정 */
pub const WINDOW_DAYS: i64 = 30;
pub const HISTOGRAM_INTERVAL: &str = "day";

#[doc = r#"
    기간 한정 date_histogram 집계 요청.

    `to_search_body()` 로 Elasticsearch `_search` 본문을 만든다.
    - `size: 0` (hit 은 받지 않고 집계만)
    - `time_field` 기준 range 필터
    - 일 단위 date_histogram, 문서가 없는 날은 버킷을 만들지 않음 (`min_doc_count: 1`)
    - Cardinality 지표면 histogram 하위에 cardinality 집계를 중첩
"#]
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct AggregationRequest {
    time_field: String,
    range: TimeWindow,
    interval: &'static str,
    metric: MetricKind,
}

impl AggregationRequest {
    pub fn build(
        now: DateTime<Utc>,
        time_field: &str,
        metric: &MetricKind,
    ) -> anyhow::Result<Self> {
        let range: TimeWindow = TimeWindow::last_days(now, WINDOW_DAYS)?;

        Ok(AggregationRequest {
            time_field: time_field.to_string(),
            range,
            interval: HISTOGRAM_INTERVAL,
            metric: metric.clone(),
        })
    }

    pub fn to_search_body(&self) -> Value {
        let mut histogram: Value = json!({
            "date_histogram": {
                "field": self.time_field,
                "calendar_interval": self.interval,
                "min_doc_count": 1
            }
        });

        if let MetricKind::Cardinality { field } = &self.metric {
            histogram["aggs"] = json!({
                DISTINCT_AGG_NAME: {
                    "cardinality": { "field": field }
                }
            });
        }

        json!({
            "size": 0,
            "query": {
                "range": {
                    self.time_field.as_str(): {
                        "gte": convert_date_to_str(self.range.start().to_owned()),
                        "lte": convert_date_to_str(self.range.end().to_owned()),
                        "format": "strict_date_optional_time||epoch_millis"
                    }
                }
            },
            "aggs": {
                self.metric.histogram_agg_name(): histogram
            }
        })
    }
}
