use crate::common::*;

use crate::model::chart::rendered_chart::*;

pub trait ArtifactService {
    #[doc = "
        Persist a rendered chart as `{base_name}_{YYYYMMDD_HHMMSS}.svg` under
        `output_dir` (created when missing) and return the absolute path.
        An existing file is never overwritten.
    "]
    fn write_artifact(
        &self,
        chart: &RenderedChart,
        base_name: &str,
        output_dir: &Path,
    ) -> anyhow::Result<PathBuf>;
}
