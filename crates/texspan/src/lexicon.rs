//! The environment lexicon.
//!
//! When the lexer reads a name after an escape character it looks the name up here.
//! Names in the lexicon produce [Environment](crate::span::Kind::Environment) spans,
//!     all other names produce [Command](crate::span::Kind::Command) spans.
//! There is no list of known commands:
//!     any name after an escape character is a command.
//!
//! The lexicon is an immutable value handed to a [Classifier](crate::Classifier)
//!     when it is built.
//! Other LaTeX-like dialects can use their own lexicon without any change to the lexer.

use std::collections::BTreeSet;

/// Environment names known to the default LaTeX lexicon.
pub const LATEX_ENVIRONMENTS: [&str; 22] = [
    "document",
    "equation",
    "align",
    "gather",
    "multline",
    "figure",
    "table",
    "tabular",
    "array",
    "itemize",
    "enumerate",
    "description",
    "abstract",
    "quote",
    "quotation",
    "verbatim",
    "center",
    "flushleft",
    "flushright",
    "minipage",
    "picture",
    "tikzpicture",
];

/// A set of environment names.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lexicon {
    environments: BTreeSet<String>,
}

impl Lexicon {
    /// Returns a lexicon with no environment names.
    ///
    /// With this lexicon every name after an escape character is a command.
    pub fn empty() -> Lexicon {
        Lexicon {
            environments: BTreeSet::new(),
        }
    }

    /// Returns the default LaTeX lexicon.
    pub fn latex() -> Lexicon {
        LATEX_ENVIRONMENTS.into_iter().collect()
    }

    /// Returns this lexicon with an additional environment name.
    pub fn with_environment<S: Into<String>>(mut self, name: S) -> Lexicon {
        self.insert(name);
        self
    }

    /// Adds an environment name. Returns false if the name was already present.
    pub fn insert<S: Into<String>>(&mut self, name: S) -> bool {
        self.environments.insert(name.into())
    }

    /// Removes an environment name. Returns false if the name was not present.
    pub fn remove(&mut self, name: &str) -> bool {
        self.environments.remove(name)
    }

    pub fn is_environment(&self, name: &str) -> bool {
        self.environments.contains(name)
    }

    /// Iterates over the environment names in lexicographic order.
    pub fn environments(&self) -> impl Iterator<Item = &str> {
        self.environments.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.environments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.environments.is_empty()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Lexicon::latex()
    }
}

impl<S: Into<String>> FromIterator<S> for Lexicon {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Lexicon {
            environments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for Lexicon {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        self.environments.extend(iter.into_iter().map(Into::into))
    }
}
