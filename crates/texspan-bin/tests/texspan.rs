use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

const SOURCE: &str = r"\begin{itemize}
  \item Cost: 100\% of $x$ % check
$$E=mc^2$$
";

fn write_source(dir: &tempfile::TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path.to_str().unwrap().to_string()
}

fn run(args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("texspan").unwrap();
    cmd.arg("--color").arg("never").args(args);
    let output = cmd.output().unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(
        output.status.success(),
        "failed to run texspan command: {}",
        stderr
    );
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn highlight_without_color_prints_the_source() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_source(&dir, "input.tex", SOURCE);
    let got = run(&["highlight", &path]);
    similar_asserts::assert_eq!(texspan: got, want: SOURCE);
}

#[test]
fn highlight_adds_final_newline() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_source(&dir, "input.tex", "a\nb");
    let got = run(&["highlight", &path]);
    similar_asserts::assert_eq!(texspan: got, want: "a\nb\n");
}

#[test]
fn highlight_with_line_numbers() {
    let source = "1\n2\n3\n4\n5\n6\n7\n8\n9\n10\n";
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_source(&dir, "input.tex", source);
    let got = run(&["highlight", "-n", &path]);
    let lines: Vec<&str> = got.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], " 1 | 1");
    assert_eq!(lines[9], "10 | 10");
}

#[test]
fn highlight_reads_standard_input() {
    let mut cmd = assert_cmd::Command::cargo_bin("texspan").unwrap();
    cmd.args(["--color", "never", "highlight"])
        .write_stdin("% only a comment\n")
        .assert()
        .success()
        .stdout("% only a comment\n");
}

#[test]
fn highlight_with_color() {
    let mut cmd = assert_cmd::Command::cargo_bin("texspan").unwrap();
    cmd.args(["--color", "always", "highlight"])
        .write_stdin("\\section{A}\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}["))
        .stdout(predicate::str::contains("\\section"));
}

#[test]
fn spans_text_format() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_source(&dir, "input.tex", "\\emph{a} $b\n%c");
    let got = run(&["spans", &path]);
    let want = concat!(
        "1\tcommand\t\"\\\\emph\"\n",
        "1\tbracket\t\"{\"\n",
        "1\ttext\t\"a\"\n",
        "1\tbracket\t\"}\"\n",
        "1\ttext\t\" \"\n",
        "1\tmath_inline\t\"$b\"\n",
        "2\tcomment\t\"%c\"\n",
    );
    similar_asserts::assert_eq!(texspan: got, want: want);
}

#[test]
fn spans_json_format() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_source(&dir, "input.tex", "$$x$$\n");
    let got = run(&["spans", "--format", "json", &path]);
    let want = concat!(
        r#"[{"line":1,"spans":[{"kind":"math_display","value":"$$x$$"}]},"#,
        r#"{"line":2,"spans":[]}]"#,
        "\n",
    );
    similar_asserts::assert_eq!(texspan: got, want: want);
}

#[test]
fn extra_environment() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_source(&dir, "input.tex", "\\frame\\itemize");
    let got = run(&["spans", "-e", "frame", &path]);
    similar_asserts::assert_eq!(
        texspan: got,
        want: "1\tenvironment\t\"\\\\frame\"\n1\tenvironment\t\"\\\\itemize\"\n"
    );
}

#[test]
fn lexicon_file_replaces_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let lexicon = write_source(&dir, "lexicon.json", r#"{"environments": ["frame"]}"#);
    let path = write_source(&dir, "input.tex", "\\frame\\itemize");
    let got = run(&["spans", "--lexicon", &lexicon, &path]);
    similar_asserts::assert_eq!(
        texspan: got,
        want: "1\tenvironment\t\"\\\\frame\"\n1\tcommand\t\"\\\\itemize\"\n"
    );
}

#[test]
fn lexicon_round_trips_through_file() {
    let printed = run(&["lexicon", "-e", "frame"]);
    assert!(printed.contains("\"frame\""));
    assert!(printed.contains("\"tikzpicture\""));
    let dir = tempfile::TempDir::new().unwrap();
    let lexicon = write_source(&dir, "lexicon.json", &printed);
    let got = run(&["lexicon", "--lexicon", &lexicon]);
    similar_asserts::assert_eq!(texspan: got, want: printed);
}

#[test]
fn html_output() {
    let mut cmd = assert_cmd::Command::cargo_bin("texspan").unwrap();
    cmd.args(["html"])
        .write_stdin("a<b\n")
        .assert()
        .success()
        .stdout(concat!(
            "<div class=\"tex-line\"><span class=\"tex-text\">a&lt;b</span></div>\n",
            "<div class=\"tex-line\"> </div>\n",
        ));
}

#[test]
fn missing_file_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("missing.tex");
    let mut cmd = Command::cargo_bin("texspan").unwrap();
    cmd.args(["--color", "never", "highlight", path.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("error: Failed to read"));
}

#[test]
fn invalid_lexicon_file_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    let lexicon = write_source(&dir, "lexicon.json", r#"{"names": ["frame"]}"#);
    let mut cmd = Command::cargo_bin("texspan").unwrap();
    cmd.args(["--color", "never", "lexicon", "--lexicon", &lexicon])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid lexicon file"));
}
