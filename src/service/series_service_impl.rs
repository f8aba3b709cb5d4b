use crate::common::*;

use crate::traits::service_traits::series_service::*;

use crate::dto::histogram_bucket::*;
use crate::enums::{metric_kind::*, pipeline_error::*};
use crate::model::chart::series_point::*;
use crate::utils_modules::time_utils::*;

#[derive(Debug, Clone, new)]
pub struct SeriesServiceImpl;

impl SeriesServiceImpl {
    #[doc = "지표 종류에 따라 버킷에서 그릴 값을 고른다."]
    fn select_value(bucket: &HistogramBucket, metric: &MetricKind) -> anyhow::Result<f64> {
        match metric {
            MetricKind::Count => Ok(bucket.doc_count as f64),
            MetricKind::Cardinality { field } => bucket.metric_value.ok_or_else(|| {
                anyhow!(
                    "[SeriesServiceImpl->select_value] bucket {} has no cardinality value for '{}'",
                    bucket.key_ms,
                    field
                )
            }),
        }
    }
}

impl SeriesService for SeriesServiceImpl {
    #[doc = r#"
        집계 버킷을 (날짜, 값) 시계열로 변환한다.

        1. 버킷 key (epoch ms, UTC) 를 달력 날짜로 변환
        2. Count 는 doc_count, Cardinality 는 하위 집계 값을 사용
        3. 받은 순서를 그대로 유지한다 (값 기준 재정렬 없음)
        4. 문서가 없는 날은 0 으로 채우지 않고 건너뛴다 (doc_count == 0 버킷 포함)

        # Errors
        * 사용할 버킷이 하나도 없으면 `PipelineError::EmptySeries`
        * key 가 날짜 범위를 벗어나거나 cardinality 값이 없는 경우
    "#]
    fn normalize(
        &self,
        buckets: &[HistogramBucket],
        metric: &MetricKind,
    ) -> anyhow::Result<Vec<SeriesPoint>> {
        let series: Vec<SeriesPoint> = buckets
            .iter()
            .filter(|bucket| bucket.doc_count > 0)
            .map(|bucket| {
                let date: NaiveDate = convert_epoch_millis_to_date(bucket.key_ms)?;
                let value: f64 = Self::select_value(bucket, metric)?;
                Ok(SeriesPoint::new(date, value))
            })
            .collect::<anyhow::Result<Vec<SeriesPoint>>>()?;

        if series.is_empty() {
            return Err(anyhow::Error::new(PipelineError::EmptySeries));
        }

        info!(
            "[SeriesServiceImpl] {} buckets -> {} series points",
            buckets.len(),
            series.len()
        );

        Ok(series)
    }
}
