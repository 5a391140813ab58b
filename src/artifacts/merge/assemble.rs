use crate::artifacts::core::config::ScanConfig;
use crate::artifacts::diff::edit_list_builder::diff_with;
use crate::artifacts::merge::merge_edit::MergeEdit;
use crate::artifacts::merge::merge_left::merge_left;

/// Replay a merge list over the ancestor.
///
/// `sources[tag - 1]` supplies the bytes of source tag `tag`, so a two-way
/// merge passes `[b, c]`. Untouched ancestor spans are copied verbatim.
pub fn assemble_merge(
    merge: &[MergeEdit],
    ancestor: &[u8],
    sources: &[&[u8]],
) -> anyhow::Result<Vec<u8>> {
    let mut output = Vec::with_capacity(ancestor.len());
    let mut cursor = 0;

    for edit in merge {
        let source = edit
            .source
            .checked_sub(1)
            .and_then(|index| sources.get(index))
            .ok_or_else(|| {
                anyhow::anyhow!("merge edit {} names unknown source {}", edit, edit.source)
            })?;

        if edit.a_offset < cursor {
            anyhow::bail!("merge edit {} overlaps the previous edit (cursor at {})", edit, cursor);
        }
        if edit.a_end() > ancestor.len() {
            anyhow::bail!(
                "merge edit {} reaches past the ancestor ({} bytes)",
                edit,
                ancestor.len()
            );
        }
        if edit.src_end() > source.len() {
            anyhow::bail!(
                "merge edit {} reaches past source {} ({} bytes)",
                edit,
                edit.source,
                source.len()
            );
        }

        output.extend_from_slice(&ancestor[cursor..edit.a_offset]);
        output.extend_from_slice(&source[edit.src_offset..edit.src_end()]);
        cursor = edit.a_end();
    }

    output.extend_from_slice(&ancestor[cursor..]);
    Ok(output)
}

/// Merge `left` and `right`, both derived from `ancestor`, giving `left`
/// priority wherever their changes overlap.
pub fn merge3(ancestor: &[u8], left: &[u8], right: &[u8], utf8: bool) -> anyhow::Result<Vec<u8>> {
    merge3_with(ancestor, left, right, utf8, &ScanConfig::default())
}

pub fn merge3_with(
    ancestor: &[u8],
    left: &[u8],
    right: &[u8],
    utf8: bool,
    config: &ScanConfig,
) -> anyhow::Result<Vec<u8>> {
    let merge = merge_left(
        &diff_with(ancestor, left, utf8, config),
        &diff_with(ancestor, right, utf8, config),
    );
    assemble_merge(&merge, ancestor, &[left, right])
}
