use crate::common::*;

use crate::model::{
    chart::{chart_spec::*, rendered_chart::*, series_point::*},
    configs::system_config::*,
    query::aggregation_request::*,
};

use crate::dto::histogram_bucket::*;

use crate::enums::metric_kind::*;

use crate::traits::service_traits::{
    artifact_service::*, chart_service::*, display_service::*, query_service::*,
    series_service::*,
};

const X_AXIS_LABEL: &str = "Date";

#[derive(Debug, new)]
pub struct MainController<
    Q: QueryService,
    S: SeriesService,
    C: ChartService,
    A: ArtifactService,
    D: DisplayService,
> {
    query_service: Q,
    series_service: S,
    chart_service: C,
    artifact_service: A,
    display_service: D,
}

impl<Q, S, C, A, D> MainController<Q, S, C, A, D>
where
    Q: QueryService + Sync,
    S: SeriesService,
    C: ChartService,
    A: ArtifactService,
    D: DisplayService,
{
    #[doc = r#"
        설정된 지표마다 차트 파이프라인을 한 번씩 순서대로 실행한다.

        하나라도 실패하면 즉시 중단하고 오류를 그대로 반환한다 (재시도 없음).

        # Returns
        * `Vec<PathBuf>` - 기록된 산출물들의 절대경로 (지표 순서)
    "#]
    pub async fn main_task(&self, system_config: &SystemConfig) -> anyhow::Result<Vec<PathBuf>> {
        let mut artifact_paths: Vec<PathBuf> = Vec::new();

        for metric in system_config.metrics() {
            let artifact_path: PathBuf = self
                .run_metric_pipeline(system_config, metric, Utc::now())
                .await?;

            artifact_paths.push(artifact_path);
        }

        Ok(artifact_paths)
    }

    #[doc = r#"
        지표 하나에 대한 전체 흐름.

        1. 최근 30일 date_histogram 집계 요청 생성
        2. Elasticsearch 집계 실행
        3. 버킷 → (날짜, 값) 시계열 변환 (비어있으면 여기서 중단)
        4. SVG 라인차트 렌더링 (메모리)
        5. 타임스탬프 파일명으로 기록 후 경로를 stdout 에 출력
        6. 주입된 DisplayService 로 표시 (show_chart 여부는 main 에서 구현체 선택으로 결정)
           실패해도 산출물은 이미 기록되었으므로 로그만 남긴다
    "#]
    async fn run_metric_pipeline(
        &self,
        system_config: &SystemConfig,
        metric: &MetricKind,
        now: DateTime<Utc>,
    ) -> anyhow::Result<PathBuf> {
        let request: AggregationRequest =
            AggregationRequest::build(now, system_config.time_field(), metric)?;

        let buckets: Vec<HistogramBucket> = self
            .query_service
            .get_daily_histogram_buckets(system_config.log_index_name(), &request)
            .await?;

        let series: Vec<SeriesPoint> = self.series_service.normalize(&buckets, metric)?;

        let spec: ChartSpec = ChartSpec::new(
            X_AXIS_LABEL.to_string(),
            metric.y_label(),
            metric.title(WINDOW_DAYS),
            series,
        );

        let chart: RenderedChart = self
            .chart_service
            .render_line_chart(&spec)
            .context("[ChartRenderer] failed to render chart")?;

        let artifact_path: PathBuf = self.artifact_service.write_artifact(
            &chart,
            &metric.base_name(),
            system_config.output_dir(),
        )?;

        println!("Plot saved as {}", artifact_path.display());

        if let Err(e) = self.display_service.display(&artifact_path) {
            warn!("[MainController->run_metric_pipeline] {:?}", e);
        }

        Ok(artifact_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::enums::pipeline_error::*;
    use crate::service::{
        artifact_service_impl::*, chart_service_impl::*, display_service_impl::*,
        series_service_impl::*,
    };

    const DAY_MS: i64 = 86_400_000;
    const DAY1_MS: i64 = 1_709_251_200_000;

    #[doc = "지표별로 정해진 버킷을 돌려주는 가짜 조회 서비스"]
    struct FakeQueryService {
        count_buckets: Vec<HistogramBucket>,
        unique_buckets: Vec<HistogramBucket>,
        fail: bool,
        calls: std::sync::Mutex<Vec<String>>,
    }

    impl FakeQueryService {
        fn new(count_buckets: Vec<HistogramBucket>, unique_buckets: Vec<HistogramBucket>) -> Self {
            FakeQueryService {
                count_buckets,
                unique_buckets,
                fail: false,
                calls: std::sync::Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl QueryService for FakeQueryService {
        async fn get_daily_histogram_buckets(
            &self,
            index_name: &str,
            request: &AggregationRequest,
        ) -> anyhow::Result<Vec<HistogramBucket>> {
            self.calls
                .lock()
                .expect("lock calls")
                .push(request.metric().histogram_agg_name().to_string());

            if self.fail {
                return Err(anyhow!("connection refused")).context(PipelineError::Execution {
                    index: index_name.to_string(),
                });
            }

            match request.metric() {
                MetricKind::Count => Ok(self.count_buckets.clone()),
                MetricKind::Cardinality { .. } => Ok(self.unique_buckets.clone()),
            }
        }
    }

    #[derive(Default)]
    struct RecordingDisplay {
        shown: std::sync::Mutex<Vec<PathBuf>>,
    }

    impl DisplayService for &RecordingDisplay {
        fn display(&self, artifact_path: &Path) -> anyhow::Result<()> {
            self.shown
                .lock()
                .expect("lock shown")
                .push(artifact_path.to_path_buf());
            Ok(())
        }
    }

    fn system_config(output_dir: &Path, show_chart: bool) -> SystemConfig {
        SystemConfig {
            log_index_name: String::from("logger"),
            time_field: String::from("time"),
            output_dir: output_dir.to_path_buf(),
            show_chart,
            metrics: vec![
                MetricKind::Count,
                MetricKind::Cardinality {
                    field: String::from("ip"),
                },
            ],
        }
    }

    fn sample_buckets() -> (Vec<HistogramBucket>, Vec<HistogramBucket>) {
        (
            vec![
                HistogramBucket::new(DAY1_MS, 120, None),
                HistogramBucket::new(DAY1_MS + DAY_MS, 95, None),
                HistogramBucket::new(DAY1_MS + 3 * DAY_MS, 60, None),
            ],
            vec![
                HistogramBucket::new(DAY1_MS, 500, Some(80.0)),
                HistogramBucket::new(DAY1_MS + DAY_MS, 300, Some(45.0)),
            ],
        )
    }

    #[tokio::test]
    async fn writes_one_chart_per_metric() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let (count, unique) = sample_buckets();
        let display: RecordingDisplay = RecordingDisplay::default();

        let controller = MainController::new(
            FakeQueryService::new(count, unique),
            SeriesServiceImpl::new(),
            ChartServiceImpl::new(),
            ArtifactServiceImpl::new(),
            &display,
        );

        let paths: Vec<PathBuf> = controller
            .main_task(&system_config(dir.path(), true))
            .await
            .expect("pipeline succeeds");

        assert_eq!(paths.len(), 2);
        let names: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().expect("file name").to_string_lossy().to_string())
            .collect();
        assert!(names[0].starts_with("plot_requests_per_day_"));
        assert!(names[1].starts_with("plot_unique_requests_per_day_"));
        assert!(names.iter().all(|n| n.ends_with(".svg")));

        let unique_svg: String = fs::read_to_string(&paths[1]).expect("read chart");
        assert!(unique_svg.contains("Unique IPs per Day for the Last 30 Days"));

        assert_eq!(*display.shown.lock().expect("lock shown"), paths);
    }

    #[tokio::test]
    async fn empty_window_aborts_before_writing() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let output_dir: PathBuf = dir.path().join("plots");

        let controller = MainController::new(
            FakeQueryService::new(Vec::new(), Vec::new()),
            SeriesServiceImpl::new(),
            ChartServiceImpl::new(),
            ArtifactServiceImpl::new(),
            NoDisplayImpl::new(),
        );

        let err: anyhow::Error = controller
            .main_task(&system_config(&output_dir, false))
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::EmptySeries)
        ));
        assert!(!output_dir.exists());
    }

    #[tokio::test]
    async fn execution_failure_stops_remaining_metrics() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let (count, unique) = sample_buckets();
        let mut query_service: FakeQueryService = FakeQueryService::new(count, unique);
        query_service.fail = true;

        let controller = MainController::new(
            query_service,
            SeriesServiceImpl::new(),
            ChartServiceImpl::new(),
            ArtifactServiceImpl::new(),
            NoDisplayImpl::new(),
        );

        let err: anyhow::Error = controller
            .main_task(&system_config(dir.path(), false))
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::Execution { .. })
        ));
        assert_eq!(
            *controller.query_service.calls.lock().expect("lock calls"),
            vec![String::from("documents_per_day")]
        );
        assert_eq!(fs::read_dir(dir.path()).expect("list dir").count(), 0);
    }

    #[tokio::test]
    async fn each_cardinality_field_gets_its_own_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let (count, unique) = sample_buckets();

        let controller = MainController::new(
            FakeQueryService::new(count, unique),
            SeriesServiceImpl::new(),
            ChartServiceImpl::new(),
            ArtifactServiceImpl::new(),
            NoDisplayImpl::new(),
        );

        let mut config: SystemConfig = system_config(dir.path(), false);
        config.metrics = vec![
            MetricKind::Cardinality {
                field: String::from("ip"),
            },
            MetricKind::Cardinality {
                field: String::from("user_agent"),
            },
        ];

        let paths: Vec<PathBuf> = controller
            .main_task(&config)
            .await
            .expect("pipeline succeeds");

        assert_eq!(paths.len(), 2);
        assert_ne!(paths[0], paths[1]);
        assert!(paths.iter().all(|p| p.exists()));

        let names: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().expect("file name").to_string_lossy().to_string())
            .collect();
        assert!(names[0].starts_with("plot_unique_requests_per_day_"));
        assert!(names[1].starts_with("plot_unique_user_agent_per_day_"));
    }
}
