//! Caret-underlined source excerpts.

use pseudo_ir::{SourceFile, Span};

/// Show every line `span` touches, each followed by a row of carets under
/// the covered columns.
///
/// An empty span (such as end of file) still gets one caret.
pub fn caret_excerpt(file: &SourceFile, span: Span) -> String {
    let first = span.start.line;
    let last = span.end.line.max(first);
    let mut lines = Vec::new();

    for line in first..=last {
        let text = file.line_text(line).replace('\t', " ");
        let width = text.chars().count() as u32;
        let col_start = if line == first { span.start.column } else { 0 };
        let col_end = if line == last { span.end.column } else { width };
        let carets = col_end.saturating_sub(col_start).max(1);

        lines.push(text);
        lines.push(format!(
            "{}{}",
            " ".repeat(col_start as usize),
            "^".repeat(carets as usize)
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests;
