use rand::prelude::Distribution;
use rand::Rng;

static RANDOM_COMMAND_NAMES: [&str; 16] = [
    "section", "textbf", "emph", "frac", "alpha", "label", "ref", "cite", "item", "hline",
    "section*", "vspace", "includegraphics", "sqrt", "left", "right",
];

static RANDOM_ENVIRONMENT_NAMES: [&str; 8] = [
    "itemize", "enumerate", "equation", "align*", "figure", "tabular", "center", "frame",
];

pub struct Weights {
    pub word: u32,
    pub space: u32,
    pub command: u32,
    pub environment: u32,
    pub inline_math: u32,
    pub display_math: u32,
    pub bracket: u32,
    pub escaped_percent: u32,
    pub comment: u32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            word: 200,
            space: 100,
            command: 60,
            environment: 10,
            inline_math: 20,
            display_math: 5,
            bracket: 40,
            escaped_percent: 5,
            comment: 5,
        }
    }
}

/// Generates a random LaTeX document.
///
/// Line lengths are measured in bytes and are approximate:
///     a line may overrun its length by the size of its last piece.
/// Unclosed inline math is generated on purpose, about once every eight math pieces.
pub fn generate_random_latex_document(
    rng: &mut rand::prelude::StdRng,
    num_lines: usize,
    line_length_bounds: (usize, usize),
    weights: &Weights,
) -> String {
    let dist = rand::distributions::WeightedIndex::new([
        weights.word,
        weights.space,
        weights.command,
        weights.environment,
        weights.inline_math,
        weights.display_math,
        weights.bracket,
        weights.escaped_percent,
        weights.comment,
    ])
    .unwrap();

    let mut result = String::with_capacity(num_lines * line_length_bounds.1 + 100);
    result.push_str("% This LaTeX document was randomly generated by the texspan performance crate.\n");
    for _ in 1..num_lines {
        let line_length = if line_length_bounds.1 <= line_length_bounds.0 {
            line_length_bounds.1
        } else {
            rng.gen_range(line_length_bounds.0..line_length_bounds.1 + 1)
        };
        let mut i = 0;
        while i < line_length {
            let temp;
            let s = match dist.sample(rng) {
                0 => {
                    temp = random_word(rng, 1..9);
                    &temp
                }
                1 => " ",
                2 => {
                    temp = format![
                        "\\{}",
                        RANDOM_COMMAND_NAMES[rng.gen_range(0..RANDOM_COMMAND_NAMES.len())]
                    ];
                    &temp
                }
                3 => {
                    temp = format![
                        "\\{}{{{}}}",
                        if rng.gen_bool(0.5) { "begin" } else { "end" },
                        RANDOM_ENVIRONMENT_NAMES[rng.gen_range(0..RANDOM_ENVIRONMENT_NAMES.len())]
                    ];
                    &temp
                }
                4 => {
                    let closing = if rng.gen_range(0..8) == 0 { "" } else { "$" };
                    temp = format!["${}^{{{}}}{}", random_word(rng, 1..3), rng.gen_range(0..10), closing];
                    &temp
                }
                5 => {
                    temp = format!["$$\\frac{{{}}}{{{}}}$$", random_word(rng, 1..4), random_word(rng, 1..4)];
                    &temp
                }
                6 => match rng.gen_range(0..6) {
                    0 => "{",
                    1 => "}",
                    2 => "[",
                    3 => "]",
                    4 => "(",
                    _ => ")",
                },
                7 => "100\\%",
                _ => {
                    // A comment ends the line.
                    temp = format!["% {}", random_word(rng, 3..12)];
                    result.push_str(&temp);
                    break;
                }
            };
            i += s.len();
            result.push_str(s);
        }
        result.push('\n');
    }
    result
}

fn random_word(rng: &mut rand::prelude::StdRng, length: std::ops::Range<usize>) -> String {
    let n = rng.gen_range(length);
    (0..n)
        .map(|_| {
            let ascii_offset = match rng.gen_range(0..4) {
                0 => 65, // uppercase
                _ => 97, // lowercase
            };
            char::from_u32(ascii_offset + rng.gen_range(0..26)).unwrap_or('x')
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn document_has_requested_number_of_lines() {
        let mut rng = rand::prelude::StdRng::seed_from_u64(7);
        let document = generate_random_latex_document(&mut rng, 50, (20, 40), &Default::default());
        assert_eq!(document.lines().count(), 50);
    }

    #[test]
    fn document_is_deterministic_for_a_seed() {
        let generate = || {
            let mut rng = rand::prelude::StdRng::seed_from_u64(43);
            generate_random_latex_document(&mut rng, 20, (10, 80), &Default::default())
        };
        assert_eq!(generate(), generate());
    }

    #[test]
    fn generated_lines_partition() {
        let mut rng = rand::prelude::StdRng::seed_from_u64(1);
        let document = generate_random_latex_document(&mut rng, 200, (40, 100), &Default::default());
        for line in texspan::document::lines(&document) {
            let spans = texspan::classify(line);
            assert_eq!(texspan::span::reassemble(&spans), line);
        }
    }
}
