use crate::common::*;

#[doc = r#"
    파이프라인 단계별 실패 분류.

    anyhow 오류에 context 로 붙여서 전파하며, 상위에서는
    `err.downcast_ref::<PipelineError>()` 로 어느 단계에서 실패했는지 확인할 수 있다.
    어떤 단계도 재시도하지 않는다.
"#]
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("[AggregationExecutor] aggregation query against index '{index}' failed")]
    Execution { index: String },

    #[error("[SeriesNormalizer] the time window returned no data; nothing to chart")]
    EmptySeries,

    #[error("[ArtifactWriter] failed to persist chart artifact '{}'", .path.display())]
    Write { path: PathBuf },

    #[error("[ArtifactWriter] artifact '{}' already exists; refusing to overwrite", .path.display())]
    ArtifactCollision { path: PathBuf },
}
