//! The line lexer, which reads one line of LaTeX source and outputs classified spans.
//!
//! The lexer is a single left-to-right scan.
//! At each cursor position it tries the following rules in order and the first
//!     rule that matches produces the next span:
//!
//! 1. A `%` that is not immediately preceded by `\` starts a [Comment](Kind::Comment)
//!     that runs to the end of the line. Nothing after it is lexed.
//! 1. A `$` not followed by another `$` starts [inline math](Kind::MathInline),
//!     which runs through the next `$` that is not immediately preceded by `\`.
//! 1. `$$` starts [display math](Kind::MathDisplay), which runs through the next `$$`.
//! 1. A `\` followed by a run of ASCII letters and `*` is an
//!     [environment](Kind::Environment) if the run is in the [Lexicon] and a
//!     [command](Kind::Command) otherwise.
//!     The run may be empty, in which case the span is just the `\`.
//! 1. Each of `{ } [ ] ( )` is a one character [bracket](Kind::Bracket).
//! 1. Anything else is [text](Kind::Text), up to the next character that one of
//!     the rules above would look at.
//!
//! Math that is not closed before the end of the line runs to the end of the line.
//! No state is carried between lines:
//!     math or comments are never continued onto the next line.
//!
//! The escape check only looks one character back.
//! This means `\\%` is treated like `\%` and does not start a comment,
//!     even though in LaTeX the `%` there is a real comment character.
//! This is a known limitation of the lexer.
//!
//! Every rule consumes at least one character or ends the scan,
//!     so lexing always terminates in time linear in the length of the line.

use crate::lexicon::Lexicon;
use crate::span::{Kind, Span};
use std::sync::OnceLock;

pub const ESCAPE: u8 = b'\\';
pub const COMMENT: u8 = b'%';
pub const MATH_SHIFT: u8 = b'$';
pub const STAR: u8 = b'*';

fn is_bracket(b: u8) -> bool {
    matches!(b, b'{' | b'}' | b'[' | b']' | b'(' | b')')
}

fn is_name(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == STAR
}

// All of these are ASCII, so a text run never ends inside a multi-byte character.
fn ends_text(b: u8) -> bool {
    b == ESCAPE || b == MATH_SHIFT || b == COMMENT || is_bracket(b)
}

/// Lexer for a single line.
///
/// Instances are created using [Classifier::lexer].
/// The lexer is an iterator that produces spans on demand.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    line: &'a str,
    pos: usize,
    lexicon: &'a Lexicon,
}

impl<'a> Lexer<'a> {
    pub fn new(line: &'a str, lexicon: &'a Lexicon) -> Lexer<'a> {
        Lexer {
            line,
            pos: 0,
            lexicon,
        }
    }

    /// Returns the part of the line that has not been lexed yet.
    pub fn remaining(&self) -> &'a str {
        &self.line[self.pos..]
    }

    fn is_escaped(&self, i: usize) -> bool {
        i > 0 && self.line.as_bytes()[i - 1] == ESCAPE
    }

    fn inline_math_end(&self, start: usize) -> usize {
        let bytes = self.line.as_bytes();
        let mut j = start + 1;
        while j < bytes.len() {
            if bytes[j] == MATH_SHIFT && !self.is_escaped(j) {
                return j + 1;
            }
            j += 1;
        }
        bytes.len()
    }

    fn display_math_end(&self, start: usize) -> usize {
        let bytes = self.line.as_bytes();
        let mut j = start + 2;
        while j + 1 < bytes.len() {
            if bytes[j] == MATH_SHIFT && bytes[j + 1] == MATH_SHIFT {
                return j + 2;
            }
            j += 1;
        }
        bytes.len()
    }

    fn control_sequence(&self, start: usize) -> (Kind, usize) {
        let bytes = self.line.as_bytes();
        let mut j = start + 1;
        while j < bytes.len() && is_name(bytes[j]) {
            j += 1;
        }
        let kind = if self.lexicon.is_environment(&self.line[start + 1..j]) {
            Kind::Environment
        } else {
            Kind::Command
        };
        (kind, j)
    }

    fn text_end(&self, start: usize) -> usize {
        let bytes = self.line.as_bytes();
        let mut j = start;
        while j < bytes.len() && !ends_text(bytes[j]) {
            j += 1;
        }
        if j == start {
            // Only reachable at an escaped `%`, which is a single byte.
            start + 1
        } else {
            j
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Span<'a>> {
        let start = self.pos;
        let b = *self.line.as_bytes().get(start)?;
        let (kind, end) = match b {
            COMMENT if !self.is_escaped(start) => (Kind::Comment, self.line.len()),
            MATH_SHIFT => match self.line.as_bytes().get(start + 1) {
                Some(&MATH_SHIFT) => (Kind::MathDisplay, self.display_math_end(start)),
                _ => (Kind::MathInline, self.inline_math_end(start)),
            },
            ESCAPE => self.control_sequence(start),
            b if is_bracket(b) => (Kind::Bracket, start + 1),
            _ => (Kind::Text, self.text_end(start)),
        };
        debug_assert!(end > start);
        self.pos = end;
        Some(Span::new(kind, &self.line[start..end]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.line.len() - self.pos;
        ((remaining > 0) as usize, Some(remaining))
    }
}

impl<'a> std::iter::FusedIterator for Lexer<'a> {}

/// A line classifier bound to an environment lexicon.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classifier {
    lexicon: Lexicon,
}

impl Classifier {
    pub fn new(lexicon: Lexicon) -> Classifier {
        Classifier { lexicon }
    }

    /// Returns the shared classifier for the default LaTeX lexicon.
    pub fn latex() -> &'static Classifier {
        static LATEX: OnceLock<Classifier> = OnceLock::new();
        LATEX.get_or_init(Classifier::default)
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Returns a lexer over the line.
    ///
    /// The line should not contain line terminators;
    ///     splitting a document into lines is the job of the caller
    ///     (see [lines](crate::document::lines)).
    pub fn lexer<'a>(&'a self, line: &'a str) -> Lexer<'a> {
        Lexer::new(line, &self.lexicon)
    }

    /// Classifies the line.
    ///
    /// This never fails.
    /// The empty line produces no spans.
    pub fn classify<'a>(&'a self, line: &'a str) -> Vec<Span<'a>> {
        self.lexer(line).collect()
    }
}

/// Classifies the line using the default LaTeX lexicon.
pub fn classify(line: &str) -> Vec<Span<'_>> {
    Classifier::latex().classify(line)
}
