//! Rendering of classified spans for terminals and HTML.
//!
//! Both renderers write every span value unchanged and in order,
//!     so the rendered line shows exactly the source line.
//!
//! | Kind | Terminal | HTML class |
//! |---|---|---|
//! | command | bright blue | `tex-command` |
//! | environment | magenta | `tex-environment` |
//! | comment | bright black, italic | `tex-comment` |
//! | inline and display math | bright magenta | `tex-math` |
//! | bracket | bright yellow | `tex-bracket` |
//! | text | unstyled | `tex-text` |

use crate::color::Colorize;
use crate::document::lines;
use crate::lexer::Classifier;
use crate::span::{Kind, Span};
use std::fmt::Write;

impl Kind {
    /// HTML class used for spans of this kind.
    pub fn css_class(&self) -> &'static str {
        match self {
            Kind::Comment => "tex-comment",
            Kind::MathInline | Kind::MathDisplay => "tex-math",
            Kind::Command => "tex-command",
            Kind::Environment => "tex-environment",
            Kind::Bracket => "tex-bracket",
            Kind::Text => "tex-text",
        }
    }
}

/// Renders a classified line with terminal colors.
pub fn ansi_line(spans: &[Span]) -> String {
    let mut s = String::new();
    for span in spans {
        let value = span.value;
        let styled = match span.kind {
            Kind::Command => value.bright_blue(),
            Kind::Environment => value.magenta(),
            Kind::Comment => value.bright_black().italic(),
            Kind::MathInline | Kind::MathDisplay => value.bright_magenta(),
            Kind::Bracket => value.bright_yellow(),
            Kind::Text => {
                s.push_str(value);
                continue;
            }
        };
        // Writing to a string cannot fail.
        let _ = write!(s, "{styled}");
    }
    s
}

/// Escapes the characters of the value that are special in HTML.
pub fn escape_html(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
}

/// Writes a classified line as a sequence of HTML `span` elements.
///
/// An empty line is written as a single space so that the line keeps its height.
pub fn write_html_line(out: &mut String, spans: &[Span]) {
    if spans.is_empty() {
        out.push(' ');
        return;
    }
    for span in spans {
        out.push_str("<span class=\"");
        out.push_str(span.kind.css_class());
        out.push_str("\">");
        escape_html(out, span.value);
        out.push_str("</span>");
    }
}

pub fn html_line(spans: &[Span]) -> String {
    let mut out = String::new();
    write_html_line(&mut out, spans);
    out
}

/// Renders a document as HTML, one `div` per line.
pub fn html_document(classifier: &Classifier, source: &str) -> String {
    let mut out = String::with_capacity(source.len() * 2);
    for line in lines(source) {
        out.push_str("<div class=\"tex-line\">");
        write_html_line(&mut out, &classifier.classify(line));
        out.push_str("</div>\n");
    }
    out
}
