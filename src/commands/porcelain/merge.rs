use crate::areas::session::Session;
use crate::artifacts::diff::edit_list_builder::diff_with;
use crate::artifacts::merge::assemble::assemble_merge;
use crate::artifacts::merge::merge_left::merge_left;
use std::io::Write;
use std::path::Path;

impl Session {
    pub fn merge(
        &mut self,
        ancestor_path: &str,
        left_path: &str,
        right_path: &str,
        output: Option<&str>,
        utf8: bool,
        raw: bool,
    ) -> anyhow::Result<()> {
        let ancestor = self.workspace().read_file(Path::new(ancestor_path))?;
        let left = self.workspace().read_file(Path::new(left_path))?;
        let right = self.workspace().read_file(Path::new(right_path))?;

        let left_edits = diff_with(&ancestor, &left, utf8, self.config());
        let right_edits = diff_with(&ancestor, &right, utf8, self.config());
        let merge = merge_left(&left_edits, &right_edits);

        tracing::debug!(
            left = left_edits.len(),
            right = right_edits.len(),
            merged = merge.len(),
            "merge list built"
        );

        if raw {
            for edit in &merge {
                writeln!(
                    self.writer(),
                    "{} {} {} {} {} {} {}",
                    edit.source,
                    edit.a_offset,
                    edit.a_length,
                    edit.src_offset,
                    edit.src_length,
                    edit.x_offset,
                    edit.x_length
                )?;
            }
            return Ok(());
        }

        let merged = assemble_merge(&merge, &ancestor, &[left.as_slice(), right.as_slice()])?;

        match output {
            Some(output) => self.workspace().write_file(Path::new(output), &merged)?,
            None => self.writer().write_all(&merged)?,
        }

        Ok(())
    }
}
