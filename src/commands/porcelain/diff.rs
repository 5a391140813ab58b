use crate::areas::segment::Segment;
use crate::areas::session::Session;
use crate::artifacts::diff::edit::Edit;
use crate::artifacts::diff::edit_list_builder::diff_with;
use crate::artifacts::diff::file_diff::diff_files_with;
use crate::artifacts::merge::reverse::reverse;
use colored::Colorize;
use derive_new::new;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, new)]
pub struct DiffOptions {
    pub utf8: bool,
    /// Stream both files through read windows instead of loading them
    pub files: bool,
    /// Print the B→A edit list
    pub reverse: bool,
    pub raw: bool,
}

/// Where the bytes of one side of a diff are read from when printing
enum Side {
    Loaded(Vec<u8>),
    Streamed(Segment),
}

impl Side {
    fn bytes(&mut self, offset: usize, length: usize) -> anyhow::Result<Vec<u8>> {
        match self {
            Side::Loaded(data) => data
                .get(offset..offset + length)
                .map(<[u8]>::to_vec)
                .ok_or_else(|| anyhow::anyhow!("range {offset}+{length} is out of bounds")),
            Side::Streamed(segment) => segment.read_chunk(offset as u64, length),
        }
    }
}

impl Session {
    pub fn diff(&mut self, a_path: &str, b_path: &str, options: DiffOptions) -> anyhow::Result<()> {
        let a_path = self.workspace().resolve(Path::new(a_path));
        let b_path = self.workspace().resolve(Path::new(b_path));

        let (edits, mut a, mut b) = if options.files {
            let edits = diff_files_with(&a_path, &b_path, self.config())?;
            let window = self.config().window();
            (
                edits,
                Side::Streamed(Segment::open(&a_path, window)?),
                Side::Streamed(Segment::open(&b_path, window)?),
            )
        } else {
            let a = self.workspace().read_file(&a_path)?;
            let b = self.workspace().read_file(&b_path)?;
            (diff_with(&a, &b, options.utf8, self.config()), Side::Loaded(a), Side::Loaded(b))
        };

        tracing::debug!(edits = edits.len(), files = options.files, "diff complete");

        let edits = if options.reverse {
            std::mem::swap(&mut a, &mut b);
            reverse(&edits)
        } else {
            edits
        };

        for edit in &edits {
            if options.raw {
                writeln!(
                    self.writer(),
                    "{} {} {} {}",
                    edit.a_offset,
                    edit.a_length,
                    edit.b_offset,
                    edit.b_length
                )?;
            } else {
                self.print_edit(edit, &mut a, &mut b)?;
            }
        }

        Ok(())
    }

    fn print_edit(&self, edit: &Edit, a: &mut Side, b: &mut Side) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", edit.to_string().cyan())?;

        if edit.a_length > 0 {
            let removed = a.bytes(edit.a_offset, edit.a_length)?;
            writeln!(
                self.writer(),
                "{}",
                format!("-{}", String::from_utf8_lossy(&removed)).red()
            )?;
        }
        if edit.b_length > 0 {
            let added = b.bytes(edit.b_offset, edit.b_length)?;
            writeln!(
                self.writer(),
                "{}",
                format!("+{}", String::from_utf8_lossy(&added)).green()
            )?;
        }

        Ok(())
    }
}
