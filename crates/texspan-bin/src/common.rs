use std::io::Read;
use std::path::PathBuf;
use texspan::Lexicon;

#[derive(Debug, Default, Clone, Copy, clap::ValueEnum)]
pub enum ColorChoice {
    /// Color output unless the environment says otherwise (e.g. `NO_COLOR` is set).
    #[default]
    Auto,
    /// Always color output.
    Always,
    /// Never color output.
    Never,
}

impl ColorChoice {
    pub fn apply(self) {
        match self {
            ColorChoice::Auto => {}
            ColorChoice::Always => texspan::color::set_override(true),
            ColorChoice::Never => texspan::color::set_override(false),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, clap::ValueEnum)]
pub enum SpansFormat {
    /// One span per row: line number, kind and value, separated by tabs.
    #[default]
    Text,
    /// A JSON array with one object per line.
    Json,
}

/// Path to a LaTeX source file, or standard input if not provided.
#[derive(Clone, Debug, Default)]
pub struct SourcePath(pub Option<PathBuf>);

impl SourcePath {
    pub fn read(&self) -> Result<String, String> {
        match &self.0 {
            Some(path) => match std::fs::read_to_string(path) {
                Ok(source) => Ok(source),
                Err(err) => Err(format!("Failed to read `{}`: {}", path.display(), err)),
            },
            None => {
                let mut source = String::new();
                match std::io::stdin().read_to_string(&mut source) {
                    Ok(_) => Ok(source),
                    Err(err) => Err(format!("Failed to read standard input: {}", err)),
                }
            }
        }
    }
}

/// Path to a JSON lexicon file.
#[derive(Clone, Debug)]
pub struct LexiconPath(pub PathBuf);

impl LexiconPath {
    pub fn read(&self) -> Result<Lexicon, String> {
        let data = match std::fs::read_to_string(&self.0) {
            Ok(data) => data,
            Err(err) => return Err(format!("Failed to read `{}`: {}", self.0.display(), err)),
        };
        serde_json::from_str(&data)
            .map_err(|err| format!("Invalid lexicon file `{}`: {}", self.0.display(), err))
    }
}

impl From<PathBuf> for LexiconPath {
    fn from(value: PathBuf) -> Self {
        LexiconPath(value)
    }
}

/// Builds the lexicon from the command line options.
pub fn build_lexicon(
    lexicon_path: Option<&LexiconPath>,
    extra_environments: &[String],
) -> Result<Lexicon, String> {
    let mut lexicon = match lexicon_path {
        None => Lexicon::latex(),
        Some(path) => path.read()?,
    };
    lexicon.extend(extra_environments.iter().map(String::as_str));
    Ok(lexicon)
}

/// Writes the output of a command to standard output.
///
/// A closed pipe is reported as an error instead of a panic.
pub fn write_output(output: &str) -> Result<(), String> {
    write_to(&mut std::io::stdout().lock(), output)
}

fn write_to<W: std::io::Write>(out: &mut W, output: &str) -> Result<(), String> {
    out.write_all(output.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|err| format!("Failed to write to standard output: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl std::io::Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_to_buffer() {
        let mut buffer: Vec<u8> = vec![];
        assert_eq!(write_to(&mut buffer, "\\section{A}\n"), Ok(()));
        assert_eq!(buffer, b"\\section{A}\n");
    }

    #[test]
    fn write_to_closed_pipe_is_an_error() {
        let result = write_to(&mut ClosedPipe, "% comment\n");
        let err = result.unwrap_err();
        assert!(
            err.starts_with("Failed to write to standard output:"),
            "unexpected error: {err}"
        );
    }
}
