use crate::areas::session::Session;
use crate::artifacts::diff::byte_matcher::{rev_same_len, same_len};
use std::path::Path;

impl Session {
    pub fn same_len(
        &mut self,
        a_path: &str,
        b_path: &str,
        a_offset: usize,
        b_offset: usize,
        utf8: bool,
    ) -> anyhow::Result<()> {
        let a = self.workspace().read_file(Path::new(a_path))?;
        let b = self.workspace().read_file(Path::new(b_path))?;

        writeln!(self.writer(), "{}", same_len(&a, &b, a_offset, b_offset, utf8))?;

        Ok(())
    }

    pub fn rev_same_len(&mut self, a_path: &str, b_path: &str, utf8: bool) -> anyhow::Result<()> {
        let a = self.workspace().read_file(Path::new(a_path))?;
        let b = self.workspace().read_file(Path::new(b_path))?;

        writeln!(self.writer(), "{}", rev_same_len(&a, &b, utf8))?;

        Ok(())
    }
}
