//! # Texspan
//!
//! Texspan classifies lines of LaTeX source for syntax highlighting.
//! A line is split into [spans](Span), each tagged with a presentational [Kind]:
//!     comment, inline math, display math, command, environment, bracket or text.
//!
//! ```
//! use texspan::{classify, Kind, Span};
//!
//! let spans = classify(r"\section{Intro} $x^2$ % todo");
//! assert_eq![
//!     spans,
//!     vec![
//!         Span::new(Kind::Command, r"\section"),
//!         Span::new(Kind::Bracket, "{"),
//!         Span::new(Kind::Text, "Intro"),
//!         Span::new(Kind::Bracket, "}"),
//!         Span::new(Kind::Text, " "),
//!         Span::new(Kind::MathInline, "$x^2$"),
//!         Span::new(Kind::Text, " "),
//!         Span::new(Kind::Comment, "% todo"),
//!     ]
//! ];
//! ```
//!
//! The spans of a line always cover the line exactly once:
//!     concatenating their values gives back the line.
//! Classification never fails.
//! Unclosed math and empty command names produce best-effort spans.
//!
//! Lines are classified independently.
//! To classify a whole document use [Classifier::classify_document],
//!     and to show the result use the [render] module.
//!
//! The names that count as environments come from a [Lexicon].
//! The [classify] function uses the default LaTeX lexicon;
//!     a [Classifier] can be built with any other lexicon:
//!
//! ```
//! use texspan::{Classifier, Kind, Lexicon};
//!
//! let classifier = Classifier::new(Lexicon::latex().with_environment("frame"));
//! assert_eq![classifier.classify(r"\frame")[0].kind, Kind::Environment];
//! ```

pub mod color;
pub mod document;
pub mod lexer;
pub mod lexicon;
pub mod render;
pub mod span;

pub use document::Line;
pub use lexer::{classify, Classifier, Lexer};
pub use lexicon::Lexicon;
pub use span::{Kind, Span};
