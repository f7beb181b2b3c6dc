//! Texspan playground: LaTeX syntax highlighting for the browser editor
//!
//! The editor splits the document into lines, and each line is rendered as
//!     a sequence of `<span>` elements whose classes are listed in
//!     [texspan::render].

use wasm_bindgen::prelude::*;
use web_sys::console;

use texspan::render;
use texspan::Classifier;
use texspan::Lexicon;

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();

    console::log_1(&JsValue::from_str("Texspan WASM initialized"));
    Ok(())
}

/// Highlights a whole document with the default LaTeX lexicon.
#[wasm_bindgen]
pub fn highlight(source: &str) -> String {
    render::html_document(Classifier::latex(), source)
}

/// Highlights a single line with the default LaTeX lexicon.
#[wasm_bindgen]
pub fn highlight_line(line: &str) -> String {
    render::html_line(&texspan::classify(line))
}

/// Returns the spans of a line as an array of `{kind, value}` objects.
#[wasm_bindgen]
pub fn classify_line(line: &str) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(&texspan::classify(line))?)
}

/// A highlighter with additional environment names.
#[wasm_bindgen]
pub struct Highlighter {
    classifier: Classifier,
}

#[wasm_bindgen]
impl Highlighter {
    /// Creates a highlighter that knows the given environment names on top of the LaTeX ones.
    ///
    /// Entries that are not strings are skipped.
    #[wasm_bindgen(constructor)]
    pub fn new(extra_environments: Box<[JsValue]>) -> Highlighter {
        let names: Vec<String> = extra_environments
            .iter()
            .filter_map(JsValue::as_string)
            .collect();
        console::log_1(&JsValue::from_str(&format![
            "Texspan highlighter created with {} extra environments",
            names.len()
        ]));
        Highlighter::with_environments(names)
    }

    pub fn highlight(&self, source: &str) -> String {
        render::html_document(&self.classifier, source)
    }

    pub fn highlight_line(&self, line: &str) -> String {
        render::html_line(&self.classifier.classify(line))
    }

    pub fn is_environment(&self, name: &str) -> bool {
        self.classifier.lexicon().is_environment(name)
    }
}

impl Highlighter {
    fn with_environments(names: Vec<String>) -> Highlighter {
        let mut lexicon = Lexicon::latex();
        lexicon.extend(names);
        Highlighter {
            classifier: Classifier::new(lexicon),
        }
    }
}
