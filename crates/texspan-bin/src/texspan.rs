use std::fmt::Write;
use std::path::PathBuf;

use clap::Parser;
use texspan::color::Colorize;
use texspan::render;
use texspan::Classifier;

mod common;
use common::*;

fn main() {
    let cli = Cli::parse();
    cli.color.apply();
    if let Err(err) = cli.run() {
        if !err.is_empty() {
            eprintln!("{} {err}", "error:".bright_red().bold());
        }
        std::process::exit(1);
    }
}

/// Classify LaTeX source for syntax highlighting.
///
/// Each line of the input is split into spans: comments, inline and display math,
///   commands, environments, brackets and text.
/// Lines are classified independently of each other.
#[derive(Debug, Parser)]
#[command(
    name = "texspan",
    version = "0.1",
    about,
    long_about,
    max_term_width(100)
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON file with the environment names to use instead of the default LaTeX ones.
    ///
    /// The file has the form
    ///
    ///   {"environments": ["document", "itemize"]}
    ///
    /// and `texspan lexicon` prints the default names in this form.
    #[arg(long, global = true)]
    lexicon: Option<PathBuf>,

    /// Additional environment name. May be given multiple times.
    #[arg(short = 'e', long = "environment", global = true)]
    environments: Vec<String>,

    /// When to color terminal output.
    #[arg(long, default_value = "auto", global = true)]
    color: ColorChoice,
}

impl Cli {
    fn run(self) -> Result<(), String> {
        let lexicon_path = self.lexicon.map(LexiconPath::from);
        let lexicon = build_lexicon(lexicon_path.as_ref(), &self.environments)?;
        let classifier = Classifier::new(lexicon);
        match self.command {
            Command::Highlight(highlight) => highlight.run(&classifier),
            Command::Html(html) => html.run(&classifier),
            Command::Lexicon => print_lexicon(&classifier),
            Command::Spans(spans) => spans.run(&classifier),
        }
    }
}

#[derive(Clone, Debug, clap::Subcommand)]
enum Command {
    /// Print a LaTeX file with syntax highlighting.
    ///
    /// Without colors the output is the input, with a newline at the end if
    ///   the input does not have one.
    Highlight(Highlight),

    /// Print a LaTeX file as HTML.
    ///
    /// Each line becomes a <div class="tex-line"> element containing one
    ///   <span> element per span.
    /// The class of a span is one of tex-comment, tex-math, tex-command,
    ///   tex-environment, tex-bracket and tex-text.
    Html(Html),

    /// Print the environment names in use as JSON.
    ///
    /// The output can be edited and passed back with --lexicon.
    Lexicon,

    /// Print the spans of each line of a LaTeX file.
    Spans(Spans),
}

#[derive(Clone, Debug, Parser)]
struct Highlight {
    /// Path to the LaTeX file. Standard input is read if omitted.
    path: Option<PathBuf>,

    /// Prefix each line with its line number.
    #[arg(short = 'n', long)]
    line_numbers: bool,
}

impl Highlight {
    fn run(&self, classifier: &Classifier) -> Result<(), String> {
        let source = SourcePath(self.path.clone()).read()?;
        let mut document = classifier.classify_document(&source);
        if source.is_empty() || source.ends_with('\n') {
            // The empty line after the final newline is not printed.
            document.pop();
        }
        let width = document.len().to_string().len();
        let mut out = String::with_capacity(source.len() * 2);
        for line in &document {
            if self.line_numbers {
                let _ = write!(out, "{:>width$} {} ", line.number, "|".bright_black());
            }
            out.push_str(&render::ansi_line(&line.spans));
            out.push('\n');
        }
        write_output(&out)
    }
}

#[derive(Clone, Debug, Parser)]
struct Html {
    /// Path to the LaTeX file. Standard input is read if omitted.
    path: Option<PathBuf>,
}

impl Html {
    fn run(&self, classifier: &Classifier) -> Result<(), String> {
        let source = SourcePath(self.path.clone()).read()?;
        write_output(&render::html_document(classifier, &source))
    }
}

#[derive(Clone, Debug, Parser)]
struct Spans {
    /// Path to the LaTeX file. Standard input is read if omitted.
    path: Option<PathBuf>,

    /// Output format.
    #[arg(short = 'f', long, default_value = "text")]
    format: SpansFormat,
}

impl Spans {
    fn run(&self, classifier: &Classifier) -> Result<(), String> {
        let source = SourcePath(self.path.clone()).read()?;
        let document = classifier.classify_document(&source);
        let out = match self.format {
            SpansFormat::Text => {
                let mut out = String::new();
                for line in &document {
                    for span in &line.spans {
                        let _ = writeln!(out, "{}\t{}\t{:?}", line.number, span.kind, span.value);
                    }
                }
                out
            }
            SpansFormat::Json => {
                let json = serde_json::to_string(&document)
                    .map_err(|err| format!("Failed to serialize spans: {err}"))?;
                format!("{json}\n")
            }
        };
        write_output(&out)
    }
}

fn print_lexicon(classifier: &Classifier) -> Result<(), String> {
    let mut json = serde_json::to_string_pretty(classifier.lexicon())
        .map_err(|err| format!("Failed to serialize lexicon: {err}"))?;
    json.push('\n');
    write_output(&json)
}
