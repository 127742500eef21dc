//! Reconciliation driver: decides insert, replace or keep per declaration.
//!
//! Planning walks an immutable snapshot of the file's lines once and emits an
//! edit script against the original indices; [`apply`] then builds the new
//! buffer in a single pass. No cursor bookkeeping is needed since edits never
//! see each other's output.

use crate::block;
use crate::heuristic::{self, FileContext};
use crate::locator::{self, DOC_MARKER};
use crate::matcher;
use crate::model::*;
use crate::overrides::{OverrideDoc, OverrideTable};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Doc line text that marks an unfilled template summary.
pub const PLACEHOLDER_MARKER: &str = "설명";

/// Generic phrasing left behind on converter methods by earlier runs.
const STALE_CONVERSION_PHRASE: &str = "로 변환합니다.";

const CONVERTER_METHODS: &[&str] = &["Convert", "ConvertBack"];

/// Plans and applies doc-comment edits using an injected override table.
pub struct Reconciler<'a> {
    overrides: &'a OverrideTable,
}

/// Generated documentation for one declaration.
struct Generated {
    lines: Vec<String>,
    overridden: bool,
}

impl<'a> Reconciler<'a> {
    pub fn new(overrides: &'a OverrideTable) -> Self {
        Reconciler { overrides }
    }

    /// Process one file in place. Returns true when the file was rewritten.
    pub fn process_file(&self, path: &Path) -> Result<bool> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        let lines = split_lines(&text);
        let edits = self.plan(path, &text);
        if edits.is_empty() {
            return Ok(false);
        }

        let output = apply(&lines, &edits);
        if output == text {
            return Ok(false);
        }
        fs::write(path, &output).with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), edits = edits.len(), "updated doc comments");
        Ok(true)
    }

    /// Build the edit script for `text`, the contents of the file at `path`.
    pub fn plan(&self, path: &Path, text: &str) -> Vec<Edit> {
        let lines = split_lines(text);
        let ctx = FileContext::from_text(text);
        let mut enclosing_type: Option<&str> = None;
        let mut edits = Vec::new();

        for (idx, raw) in lines.iter().enumerate() {
            let Some(decl) = matcher::match_line(strip_eol(raw)) else {
                continue;
            };
            if let Declaration::Type(t) = &decl {
                enclosing_type = Some(t.name);
            }

            let generated = self.generate(path, &decl, enclosing_type, &ctx);
            let indent = leading_whitespace(raw);
            let eol = line_ending(raw);
            let new_lines: Vec<String> = generated
                .lines
                .iter()
                .map(|l| format!("{indent}{l}{eol}"))
                .collect();

            match locator::find_preceding_block(&lines, idx) {
                None => {
                    debug!(line = idx + 1, name = decl.name(), "insert");
                    edits.push(Edit::InsertAt {
                        pos: idx,
                        lines: new_lines,
                    });
                }
                Some(span) => {
                    let existing = &lines[span.start..=span.end];
                    let block_text = existing.concat();
                    if !should_replace(&decl, &block_text, generated.overridden, &ctx) {
                        continue;
                    }
                    if existing.iter().copied().eq(new_lines.iter().map(String::as_str)) {
                        continue;
                    }
                    debug!(line = idx + 1, name = decl.name(), "replace");
                    edits.push(Edit::ReplaceSpan {
                        start: span.start,
                        end: span.end,
                        lines: new_lines,
                    });
                }
            }
        }

        edits
    }

    fn generate(
        &self,
        path: &Path,
        decl: &Declaration<'_>,
        enclosing_type: Option<&str>,
        ctx: &FileContext,
    ) -> Generated {
        match decl {
            Declaration::Type(t) => {
                let over = self.overrides.resolve(path, t.name, MemberKind::Type);
                let summary = summary_or(over, || {
                    heuristic::summarize(t.name, MemberKind::Type, ctx, Some(t.kind))
                });
                Generated {
                    lines: block::summary_block(&summary),
                    overridden: over.is_some(),
                }
            }
            Declaration::Method(m) => {
                let is_ctor = m.return_type.is_none() || enclosing_type == Some(m.name);
                let (kind, return_type) = if is_ctor {
                    (MemberKind::Constructor, None)
                } else {
                    (MemberKind::Method, m.return_type)
                };
                let over = self.overrides.resolve(path, m.name, kind);
                let summary = summary_or(over, || heuristic::summarize(m.name, kind, ctx, None));
                Generated {
                    lines: block::method_block(m.name, &summary, return_type, m.params, over),
                    overridden: over.is_some(),
                }
            }
            Declaration::Property(p) => {
                let over = self.overrides.resolve(path, p.name, MemberKind::Property);
                let summary = summary_or(over, || {
                    heuristic::summarize(p.name, MemberKind::Property, ctx, None)
                });
                Generated {
                    lines: block::summary_block(&summary),
                    overridden: over.is_some(),
                }
            }
        }
    }
}

fn summary_or(over: Option<&OverrideDoc>, fallback: impl FnOnce() -> String) -> String {
    over.map(|o| o.summary.clone()).unwrap_or_else(fallback)
}

/// An existing block is kept unless it is a placeholder, an override exists,
/// it documents an interface, or it is stale converter boilerplate.
fn should_replace(
    decl: &Declaration<'_>,
    block_text: &str,
    overridden: bool,
    ctx: &FileContext,
) -> bool {
    if is_placeholder(block_text) || overridden {
        return true;
    }
    match decl {
        Declaration::Type(t) => t.kind == TypeKind::Interface,
        Declaration::Method(m) => {
            ctx.value_converter
                && CONVERTER_METHODS.contains(&m.name)
                && block_text.contains(STALE_CONVERSION_PHRASE)
        }
        Declaration::Property(_) => false,
    }
}

fn is_placeholder(block_text: &str) -> bool {
    block_text.contains("<summary>")
        && block_text.lines().any(|l| {
            l.trim_start()
                .strip_prefix(DOC_MARKER)
                .is_some_and(|rest| rest.trim_start().starts_with(PLACEHOLDER_MARKER))
        })
}

/// Apply an edit script to the original lines.
pub fn apply<S: AsRef<str>>(lines: &[S], edits: &[Edit]) -> String {
    let mut ordered: Vec<&Edit> = edits.iter().collect();
    ordered.sort_by_key(|e| e.anchor());
    let mut pending = ordered.into_iter().peekable();

    let mut out = String::new();
    let mut i = 0;
    while i < lines.len() {
        match pending.next_if(|e| e.anchor() == i) {
            Some(Edit::ReplaceSpan { end, lines: new, .. }) => {
                new.iter().for_each(|l| out.push_str(l));
                i = end + 1;
            }
            Some(Edit::InsertAt { lines: new, .. }) => {
                new.iter().for_each(|l| out.push_str(l));
                out.push_str(lines[i].as_ref());
                i += 1;
            }
            None => {
                out.push_str(lines[i].as_ref());
                i += 1;
            }
        }
    }
    out
}

/// Split text into lines that keep their terminators.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

fn strip_eol(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}

fn line_ending(line: &str) -> &'static str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

fn leading_whitespace(line: &str) -> &str {
    let trimmed = line.trim_start_matches([' ', '\t']);
    &line[..line.len() - trimmed.len()]
}
