use crate::areas::workspace::Workspace;
use crate::artifacts::core::config::ScanConfig;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// State shared by every command: where inputs are resolved, where output
/// goes and how the scanner is tuned.
pub struct Session {
    workspace: Workspace,
    writer: RefCell<Box<dyn std::io::Write>>,
    config: ScanConfig,
}

impl Session {
    pub fn new(
        path: &str,
        writer: Box<dyn std::io::Write>,
        config: ScanConfig,
    ) -> anyhow::Result<Self> {
        let path = Path::new(path).canonicalize()?;

        Ok(Session {
            workspace: Workspace::new(path.into_boxed_path()),
            writer: RefCell::new(writer),
            config,
        })
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }
}
