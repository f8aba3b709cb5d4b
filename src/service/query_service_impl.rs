use crate::common::*;

use crate::traits::{repository_traits::es_repository::*, service_traits::query_service::*};

use crate::utils_modules::traits::*;

use crate::model::query::aggregation_request::*;

use crate::dto::histogram_bucket::*;

use crate::enums::pipeline_error::*;

#[derive(Debug, new)]
pub struct QueryServiceImpl<R: EsRepository> {
    es_conn: R,
}

impl<R: EsRepository> QueryServiceImpl<R> {
    #[doc = r#"
        Elasticsearch 집계 응답에서 `aggregations.{agg_name}.buckets` 배열을 꺼내
        각 버킷을 `FromAggBucket` 트레이트로 변환한다. 응답 순서를 그대로 유지한다.

        # Type Parameters
        * `T` - 버킷 하나를 표현하는 타입 (`FromAggBucket` 구현 필요)

        # Arguments
        * `response_body` - Elasticsearch 검색 응답 JSON
        * `agg_name` - 요청 시 사용한 집계 이름

        # Returns
        * `Vec<T>` - 변환된 버킷 목록
        * `anyhow::Error` - 집계 결과 누락, 배열 아님, 버킷 파싱 실패 시
    "#]
    fn get_agg_result_vec<T: FromAggBucket>(
        &self,
        response_body: &Value,
        agg_name: &str,
    ) -> Result<Vec<T>, anyhow::Error> {
        let buckets: &Vec<Value> = response_body
            .get("aggregations")
            .and_then(|aggs| aggs.get(agg_name))
            .and_then(|agg| agg.get("buckets"))
            .and_then(|b| b.as_array())
            .ok_or_else(|| {
                anyhow!(
                    "[QueryServiceImpl->get_agg_result_vec] Missing 'aggregations.{}.buckets' array",
                    agg_name
                )
            })?;

        buckets.iter().map(T::from_agg_bucket).collect()
    }
}

#[async_trait]
impl<R: EsRepository> QueryService for QueryServiceImpl<R> {
    #[doc = r#"
        일 단위 date_histogram 집계를 실행하여 버킷 목록을 반환한다.

        1. `AggregationRequest` 로부터 `size: 0` 검색 본문을 생성
        2. 로그 인덱스에 검색 요청 (노드 장애 시 다른 노드로 재시도, 타임아웃은 transport 설정)
        3. 응답의 버킷들을 `HistogramBucket` 으로 변환 (정렬하지 않는다)

        # Errors
        연결 실패, 타임아웃, 인덱스 없음, 매핑 오류, 응답 형식 오류 모두
        `PipelineError::Execution` context 를 달고 반환된다.
    "#]
    async fn get_daily_histogram_buckets(
        &self,
        index_name: &str,
        request: &AggregationRequest,
    ) -> anyhow::Result<Vec<HistogramBucket>> {
        let search_query: Value = request.to_search_body();

        info!(
            "[QueryServiceImpl] querying '{}' from {} to {} ({})",
            index_name,
            request.range().start(),
            request.range().end(),
            request.metric().histogram_agg_name()
        );

        let execution_error = || PipelineError::Execution {
            index: index_name.to_string(),
        };

        let response_body: Value = self
            .es_conn
            .get_search_query(&search_query, index_name)
            .await
            .with_context(execution_error)?;

        let buckets: Vec<HistogramBucket> = self
            .get_agg_result_vec::<HistogramBucket>(
                &response_body,
                request.metric().histogram_agg_name(),
            )
            .with_context(execution_error)?;

        info!(
            "[QueryServiceImpl] '{}' returned {} daily buckets",
            index_name,
            buckets.len()
        );

        Ok(buckets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::enums::metric_kind::*;

    #[doc = "정해진 응답을 돌려주고 받은 요청을 기록하는 가짜 저장소"]
    struct FakeEsRepository {
        response: Result<Value, String>,
        seen: std::sync::Mutex<Vec<(Value, String)>>,
    }

    impl FakeEsRepository {
        fn returning(response: Value) -> Self {
            FakeEsRepository {
                response: Ok(response),
                seen: std::sync::Mutex::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            FakeEsRepository {
                response: Err(message.to_string()),
                seen: std::sync::Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl EsRepository for FakeEsRepository {
        async fn get_search_query(
            &self,
            es_query: &Value,
            index_name: &str,
        ) -> Result<Value, anyhow::Error> {
            self.seen
                .lock()
                .expect("lock seen queries")
                .push((es_query.clone(), index_name.to_string()));

            self.response.clone().map_err(|e| anyhow!(e))
        }
    }

    fn count_request() -> AggregationRequest {
        let now: DateTime<Utc> = Utc.with_ymd_and_hms(2024, 3, 31, 0, 0, 0).unwrap();
        AggregationRequest::build(now, "time", &MetricKind::Count).expect("build request")
    }

    #[tokio::test]
    async fn returns_buckets_in_store_order() {
        let repo: FakeEsRepository = FakeEsRepository::returning(json!({
            "hits": { "hits": [] },
            "aggregations": {
                "documents_per_day": {
                    "buckets": [
                        { "key": 1_709_251_200_000_i64, "doc_count": 120 },
                        { "key": 1_709_337_600_000_i64, "doc_count": 95 }
                    ]
                }
            }
        }));
        let service: QueryServiceImpl<FakeEsRepository> = QueryServiceImpl::new(repo);
        let request: AggregationRequest = count_request();

        let buckets: Vec<HistogramBucket> = service
            .get_daily_histogram_buckets("logger", &request)
            .await
            .expect("query succeeds");

        assert_eq!(
            buckets,
            vec![
                HistogramBucket::new(1_709_251_200_000, 120, None),
                HistogramBucket::new(1_709_337_600_000, 95, None),
            ]
        );

        let seen = service.es_conn.seen.lock().expect("lock seen queries");
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, request.to_search_body());
        assert_eq!(seen[0].1, "logger");
    }

    #[tokio::test]
    async fn store_failure_is_an_execution_error() {
        let service: QueryServiceImpl<FakeEsRepository> =
            QueryServiceImpl::new(FakeEsRepository::failing("index_not_found_exception"));

        let err: anyhow::Error = service
            .get_daily_histogram_buckets("missing", &count_request())
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::Execution { index }) if index == "missing"
        ));
        assert!(format!("{:?}", err).contains("index_not_found_exception"));
    }

    #[tokio::test]
    async fn missing_aggregation_is_an_execution_error() {
        let service: QueryServiceImpl<FakeEsRepository> =
            QueryServiceImpl::new(FakeEsRepository::returning(json!({ "hits": {} })));

        let err: anyhow::Error = service
            .get_daily_histogram_buckets("logger", &count_request())
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::Execution { .. })
        ));
    }
}
