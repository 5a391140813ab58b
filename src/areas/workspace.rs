use anyhow::Context;
use std::path::{Path, PathBuf};

/// Files the commands read and write, resolved against the working directory
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// Absolute paths are kept as they are.
    pub fn resolve(&self, file_path: &Path) -> PathBuf {
        self.path.join(file_path)
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Vec<u8>> {
        let file_path = self.resolve(file_path);

        std::fs::read(&file_path)
            .with_context(|| format!("unable to read {}", file_path.display()))
    }

    pub fn write_file(&self, file_path: &Path, data: &[u8]) -> anyhow::Result<()> {
        let file_path = self.resolve(file_path);

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("unable to create {}", parent.display()))?;
        }

        std::fs::write(&file_path, data)
            .with_context(|| format!("unable to write {}", file_path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn workspace_dir() -> TempDir {
        TempDir::new().expect("Failed to create temp dir")
    }

    #[rstest]
    fn written_files_read_back(workspace_dir: TempDir) -> anyhow::Result<()> {
        let workspace = Workspace::new(workspace_dir.path().into());

        workspace.write_file(Path::new("nested/out.bin"), b"\x00\xffbytes")?;

        assert_eq!(
            workspace.read_file(Path::new("nested/out.bin"))?,
            b"\x00\xffbytes".to_vec()
        );
        Ok(())
    }

    #[rstest]
    fn reading_a_missing_file_names_it(workspace_dir: TempDir) {
        let workspace = Workspace::new(workspace_dir.path().into());

        let error = workspace
            .read_file(Path::new("missing.txt"))
            .expect_err("missing file must fail");

        assert!(format!("{error:#}").contains("missing.txt"));
    }
}
