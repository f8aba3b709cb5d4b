use crate::common::*;

use crate::traits::service_traits::artifact_service::*;

use crate::enums::pipeline_error::*;
use crate::model::chart::rendered_chart::*;
use crate::utils_modules::time_utils::*;

#[derive(Debug, Clone, new)]
pub struct ArtifactServiceImpl;

impl ArtifactServiceImpl {
    #[doc = "`{base_name}_{YYYYMMDD_HHMMSS}.svg`"]
    pub fn artifact_file_name<Tz: TimeZone>(base_name: &str, written_at: &DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        format!("{}_{}.svg", base_name, format_file_timestamp(written_at))
    }

    #[doc = r#"
        지정된 시각을 파일명에 사용해 산출물을 기록한다.

        1. output_dir 생성 (이미 있으면 그대로 사용)
        2. `create_new` 로 파일을 열어 같은 초에 같은 이름이 이미 있으면 덮어쓰지 않고 실패
        3. SVG 본문 기록 후 fsync, 기록 도중 실패하면 불완전한 파일은 지운다
        4. 절대경로 반환
    "#]
    pub fn write_artifact_at<Tz: TimeZone>(
        &self,
        chart: &RenderedChart,
        base_name: &str,
        output_dir: &Path,
        written_at: &DateTime<Tz>,
    ) -> anyhow::Result<PathBuf>
    where
        Tz::Offset: std::fmt::Display,
    {
        fs::create_dir_all(output_dir).with_context(|| PipelineError::Write {
            path: output_dir.to_path_buf(),
        })?;

        let path: PathBuf = output_dir.join(Self::artifact_file_name(base_name, written_at));

        let mut file: fs::File = match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
        {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                return Err(anyhow::Error::new(e).context(PipelineError::ArtifactCollision { path }));
            }
            Err(e) => {
                return Err(anyhow::Error::new(e).context(PipelineError::Write { path }));
            }
        };

        if let Err(e) = file
            .write_all(chart.svg().as_bytes())
            .and_then(|_| file.sync_all())
        {
            drop(file);
            if let Err(remove_err) = fs::remove_file(&path) {
                error!(
                    "[ArtifactServiceImpl->write_artifact_at] failed to remove partial artifact {:?}: {:?}",
                    path, remove_err
                );
            }
            return Err(anyhow::Error::new(e).context(PipelineError::Write { path }));
        }

        let absolute_path: PathBuf = fs::canonicalize(&path)
            .with_context(|| PipelineError::Write { path: path.clone() })?;

        info!("[ArtifactServiceImpl] chart saved: {:?}", absolute_path);

        Ok(absolute_path)
    }
}

impl ArtifactService for ArtifactServiceImpl {
    fn write_artifact(
        &self,
        chart: &RenderedChart,
        base_name: &str,
        output_dir: &Path,
    ) -> anyhow::Result<PathBuf> {
        self.write_artifact_at(chart, base_name, output_dir, &Local::now())
    }
}
