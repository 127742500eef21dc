//! Finds the `///` block that documents a declaration line.

use crate::model::BlockSpan;

/// Marker that opens an XML doc comment line.
pub const DOC_MARKER: &str = "///";

fn is_doc_line(line: &str) -> bool {
    line.trim_start().starts_with(DOC_MARKER)
}

fn is_attribute_line(line: &str) -> bool {
    line.trim_start().starts_with('[')
}

/// Locate the doc block directly above `decl`, looking past blank lines and
/// attribute lines. Only the contiguous run nearest the declaration counts.
pub fn find_preceding_block<S: AsRef<str>>(lines: &[S], decl: usize) -> Option<BlockSpan> {
    let mut j = decl;
    while j > 0 {
        j -= 1;
        let line = lines[j].as_ref();
        if is_doc_line(line) {
            let end = j;
            let mut start = j;
            while start > 0 && is_doc_line(lines[start - 1].as_ref()) {
                start -= 1;
            }
            return Some(BlockSpan { start, end });
        }
        if line.trim().is_empty() || is_attribute_line(line) {
            continue;
        }
        return None;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_block_directly_above() {
        let lines = ["/// <summary>", "/// Foo", "/// </summary>", "public class Foo"];
        assert_eq!(find_preceding_block(&lines, 3), Some(BlockSpan { start: 0, end: 2 }));
    }

    #[test]
    fn skips_blank_and_attribute_lines() {
        let lines = [
            "    /// <summary>x</summary>",
            "",
            "    [Obsolete]",
            "    [Serializable]",
            "    public void Run()",
        ];
        assert_eq!(find_preceding_block(&lines, 4), Some(BlockSpan { start: 0, end: 0 }));
    }

    #[test]
    fn blank_line_splits_runs() {
        let lines = [
            "/// <summary>",
            "/// upper",
            "",
            "/// <summary>lower</summary>",
            "/// <returns>x</returns>",
            "public int Get()",
        ];
        assert_eq!(find_preceding_block(&lines, 5), Some(BlockSpan { start: 3, end: 4 }));
    }

    #[test]
    fn code_line_stops_search() {
        let lines = ["/// stale", "int x = 1;", "public int Get()"];
        assert_eq!(find_preceding_block(&lines, 2), None);
    }

    #[test]
    fn nothing_above_first_line() {
        let lines = ["public class Foo"];
        assert_eq!(find_preceding_block(&lines, 0), None);
    }
}
