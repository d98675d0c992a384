//! Text report
//!
//! One line per span, in the order the spans were recorded:
//!
//! ```text
//! [4] : [..., raining, ...]
//! [4, 6] : [..., raining, cats, dogs, ...]
//! ```
//!
//! A span consuming one token shows its start index; a longer span shows the first and last
//! consumed index. Zero-length spans stay in the context but are left out of the report unless
//! asked for. Other tooling diffs this output against golden files, so the layout is fixed.

use super::registry::{FormatError, Formatter};
use crate::tokpat::config::ReportConfig;
use crate::tokpat::context::{Context, MatchSpan};

/// Render the report for every span consuming at least one token
pub fn render(ctx: &Context) -> String {
    render_spans(ctx, false)
}

pub fn render_with(ctx: &Context, config: &ReportConfig) -> String {
    render_spans(ctx, config.include_empty)
}

fn render_spans(ctx: &Context, include_empty: bool) -> String {
    let mut out = String::new();
    for &span in ctx.matches() {
        if span.is_empty() && !include_empty {
            continue;
        }
        write_span(&mut out, ctx, span);
        out.push('\n');
    }
    out
}

fn write_span(out: &mut String, ctx: &Context, span: MatchSpan) {
    let head = match span.len() {
        0 | 1 => format!("[{}]", span.start),
        _ => format!("[{}, {}]", span.start, span.end - 1),
    };
    out.push_str(&head);
    out.push_str(" : [...");
    for token in ctx.span_tokens(span) {
        out.push_str(", ");
        out.push_str(token);
    }
    out.push_str(", ...]");
}

/// [`render`] exposed through the format registry
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter {
    pub include_empty: bool,
}

impl Formatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn serialize(&self, ctx: &Context) -> Result<String, FormatError> {
        Ok(render_spans(ctx, self.include_empty))
    }

    fn description(&self) -> &str {
        "One line per non-empty match span with the tokens it consumed"
    }
}
