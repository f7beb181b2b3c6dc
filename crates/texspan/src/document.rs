//! Classification of whole documents, one line at a time.

use crate::lexer::Classifier;
use crate::span::Span;

/// Splits a document into lines.
///
/// Lines are separated by `\n` only.
/// A `\r` before the separator stays at the end of the line,
///     and a trailing separator produces a final empty line.
/// Joining the lines with `\n` gives back the document.
pub fn lines(source: &str) -> std::str::Split<'_, char> {
    source.split('\n')
}

/// A classified line of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Line<'a> {
    /// 1-based line number.
    #[cfg_attr(feature = "serde", serde(rename = "line"))]
    pub number: usize,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub source: &'a str,
    pub spans: Vec<Span<'a>>,
}

impl Classifier {
    /// Classifies every line of the document.
    ///
    /// Lines are classified independently of each other.
    pub fn classify_document<'a>(&'a self, source: &'a str) -> Vec<Line<'a>> {
        lines(source)
            .enumerate()
            .map(|(i, line)| Line {
                number: i + 1,
                source: line,
                spans: self.classify(line),
            })
            .collect()
    }
}
