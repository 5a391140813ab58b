use crate::areas::session::Session;
use crate::artifacts::diff::diff_scanner::diff_len;
use std::path::Path;

impl Session {
    pub fn diff_len(
        &mut self,
        a_path: &str,
        b_path: &str,
        a_offset: usize,
        b_offset: usize,
        utf8: bool,
        coarse: bool,
    ) -> anyhow::Result<()> {
        let a = self.workspace().read_file(Path::new(a_path))?;
        let b = self.workspace().read_file(Path::new(b_path))?;

        let (a_move, b_move) = diff_len(&a, &b, a_offset, b_offset, utf8, coarse, self.config());

        writeln!(self.writer(), "{} {}", a_move, b_move)?;

        Ok(())
    }
}
