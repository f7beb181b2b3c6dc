//! Classified spans of a LaTeX source line.

/// Lexical category of a [Span].
///
/// The categories are presentational: they say how a piece of the line should be
///     styled, not what it means to a TeX engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Kind {
    /// From an unescaped `%` to the end of the line.
    /// Example: `% a comment`.
    Comment,
    /// Math between single delimiters.
    /// Example: `$x^2$`.
    MathInline,
    /// Math between doubled delimiters.
    /// Example: `$$E=mc^2$$`.
    MathDisplay,
    /// An escape character followed by a (possibly empty) name.
    /// Example: `\section`.
    Command,
    /// An escape character followed by a name in the environment lexicon.
    /// Example: `\itemize`.
    Environment,
    /// A single grouping character.
    /// Examples: `{`, `]`, `(`.
    Bracket,
    /// Everything else.
    Text,
}

impl Kind {
    /// All kinds, in declaration order.
    pub const ALL: [Kind; 7] = [
        Kind::Comment,
        Kind::MathInline,
        Kind::MathDisplay,
        Kind::Command,
        Kind::Environment,
        Kind::Bracket,
        Kind::Text,
    ];

    /// Stable snake_case name of the kind.
    ///
    /// This is the name used by [Display](std::fmt::Display), by [FromStr](std::str::FromStr)
    ///     and by the serde representation.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Comment => "comment",
            Kind::MathInline => "math_inline",
            Kind::MathDisplay => "math_display",
            Kind::Command => "command",
            Kind::Environment => "environment",
            Kind::Bracket => "bracket",
            Kind::Text => "text",
        }
    }

    /// Whether this kind covers math, inline or display.
    pub fn is_math(&self) -> bool {
        matches!(self, Kind::MathInline | Kind::MathDisplay)
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| format!["unknown span kind `{s}`"])
    }
}

/// A classified, contiguous piece of a single source line.
///
/// The value borrows from the line that was classified.
/// Spans are serializable but not deserializable: a deserialized value would
///     have to own its string.
/// Spans carry no offsets: the position of a span is given by its place in
///     the sequence returned by the lexer, and concatenating the values of all
///     spans in order reproduces the line exactly.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Span<'a> {
    pub kind: Kind,
    pub value: &'a str,
}

impl<'a> Span<'a> {
    pub fn new(kind: Kind, value: &'a str) -> Span<'a> {
        Span { kind, value }
    }
}

impl<'a> std::fmt::Display for Span<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?})", self.kind, self.value)
    }
}

/// Concatenates the values of the spans.
///
/// For spans produced by the lexer this is the classified line.
pub fn reassemble(spans: &[Span]) -> String {
    let mut s = String::with_capacity(spans.iter().map(|span| span.value.len()).sum());
    for span in spans {
        s.push_str(span.value);
    }
    s
}
