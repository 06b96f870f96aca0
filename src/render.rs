//! Markdown-lite rendering for chat output.
//!
//! The model formats replies with `**bold**` runs. This module splits a line
//! into styled spans and maps them to ANSI escapes for terminal display.

/// ANSI escape code for bold text.
const ANSI_BOLD: &str = "\x1b[1m";

/// ANSI escape code for red text (used for error bubbles).
const ANSI_RED: &str = "\x1b[31m";

/// ANSI escape code to reset all styling.
const ANSI_RESET: &str = "\x1b[0m";

/// One styled run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// The run's text, with the `**` markers stripped.
    pub text: String,

    /// Whether the run renders bold.
    pub bold: bool,
}

/// Split a line into spans at `**` pairs.
///
/// Text between a matched pair of `**` markers is bold. An unmatched
/// trailing `**` is kept literal.
pub fn spans(line: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut rest = line;
    loop {
        let Some(open) = rest.find("**") else {
            break;
        };
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("**") else {
            break;
        };

        if open > 0 {
            spans.push(Span {
                text: rest[..open].to_string(),
                bold: false,
            });
        }
        spans.push(Span {
            text: after_open[..close].to_string(),
            bold: true,
        });
        rest = &after_open[close + 2..];
    }
    if !rest.is_empty() {
        spans.push(Span {
            text: rest.to_string(),
            bold: false,
        });
    }
    spans
}

/// Render a line with ANSI bold for `**` runs.
pub fn render_line(line: &str, use_color: bool) -> String {
    if !use_color {
        return spans(line).into_iter().map(|s| s.text).collect();
    }
    let mut out = String::new();
    for span in spans(line) {
        if span.bold {
            out.push_str(ANSI_BOLD);
            out.push_str(&span.text);
            out.push_str(ANSI_RESET);
        } else {
            out.push_str(&span.text);
        }
    }
    out
}

/// Render an error bubble line.
pub fn render_error(line: &str, use_color: bool) -> String {
    if use_color {
        format!("{ANSI_RED}{line}{ANSI_RESET}")
    } else {
        line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_line_is_one_span() {
        assert_eq!(
            spans("Start with the closet."),
            vec![Span {
                text: "Start with the closet.".to_string(),
                bold: false
            }]
        );
    }

    #[test]
    fn bold_run_is_extracted() {
        let got = spans("**Step 1:** clear the floor");
        assert_eq!(got.len(), 2);
        assert_eq!(got[0], Span { text: "Step 1:".to_string(), bold: true });
        assert_eq!(
            got[1],
            Span {
                text: " clear the floor".to_string(),
                bold: false
            }
        );
    }

    #[test]
    fn unmatched_markers_stay_literal() {
        let got = spans("a ** b");
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].text, "a ** b");
    }

    #[test]
    fn render_without_color_strips_markers() {
        assert_eq!(render_line("**Bins** help", false), "Bins help");
    }

    #[test]
    fn render_with_color_wraps_bold() {
        assert_eq!(
            render_line("**Bins**", true),
            format!("{ANSI_BOLD}Bins{ANSI_RESET}")
        );
    }
}
