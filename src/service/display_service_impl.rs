use crate::common::*;

use crate::traits::service_traits::display_service::*;

#[doc = "운영체제 기본 뷰어로 산출물을 연다. 실행만 하고 종료를 기다리지 않는다."]
#[derive(Debug, Clone, new)]
pub struct SystemViewerDisplayImpl;

impl SystemViewerDisplayImpl {
    fn viewer_command(artifact_path: &Path) -> std::process::Command {
        #[cfg(target_os = "macos")]
        let command: std::process::Command = {
            let mut cmd = std::process::Command::new("open");
            cmd.arg(artifact_path);
            cmd
        };

        #[cfg(target_os = "windows")]
        let command: std::process::Command = {
            let mut cmd = std::process::Command::new("cmd");
            cmd.args(["/C", "start", ""]).arg(artifact_path);
            cmd
        };

        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        let command: std::process::Command = {
            let mut cmd = std::process::Command::new("xdg-open");
            cmd.arg(artifact_path);
            cmd
        };

        command
    }
}

impl DisplayService for SystemViewerDisplayImpl {
    fn display(&self, artifact_path: &Path) -> anyhow::Result<()> {
        Self::viewer_command(artifact_path)
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .spawn()
            .with_context(|| {
                format!(
                    "[SystemViewerDisplayImpl->display] failed to open viewer for {:?}",
                    artifact_path
                )
            })?;

        Ok(())
    }
}

#[doc = "headless 실행 / 테스트용: 아무것도 하지 않는다."]
#[derive(Debug, Clone, new)]
pub struct NoDisplayImpl;

impl DisplayService for NoDisplayImpl {
    fn display(&self, _artifact_path: &Path) -> anyhow::Result<()> {
        Ok(())
    }
}
