use crate::common::*;

pub trait DisplayService {
    fn display(&self, artifact_path: &Path) -> anyhow::Result<()>;
}

impl<T: DisplayService + ?Sized> DisplayService for Box<T> {
    fn display(&self, artifact_path: &Path) -> anyhow::Result<()> {
        (**self).display(artifact_path)
    }
}
