//! Case formatting for token sequences.
//!
//! [`format_case`] joins the words produced by [`tokenize`](super::tokenize)
//! according to a [`CaseVariant`]. [`convert_case`] runs both steps on raw
//! text.

use rayon::prelude::*;
use std::fmt;

use super::tokenizer::tokenize;

/// Target word-joining style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseVariant {
    /// `HELLO WORLD`
    Upper,
    /// `hello world`
    Lower,
    /// `Hello World`
    Title,
    /// `helloWorld`
    Camel,
    /// `HelloWorld`
    Pascal,
    /// `hello_world`
    Snake,
    /// `hello-world`
    Kebab,
}

impl CaseVariant {
    /// All variants, in display order.
    pub const ALL: [CaseVariant; 7] = [
        Self::Upper,
        Self::Lower,
        Self::Title,
        Self::Camel,
        Self::Pascal,
        Self::Snake,
        Self::Kebab,
    ];

    /// Parse a variant from its machine name or display label.
    ///
    /// Matching ignores ASCII case, so `"camel"`, `"CAMEL"` and `"camelCase"`
    /// all resolve to [`CaseVariant::Camel`].
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|variant| {
            variant.name().eq_ignore_ascii_case(name)
                || variant.label().eq_ignore_ascii_case(name)
        })
    }

    /// Stable machine name, e.g. `"snake"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Upper => "upper",
            Self::Lower => "lower",
            Self::Title => "title",
            Self::Camel => "camel",
            Self::Pascal => "pascal",
            Self::Snake => "snake",
            Self::Kebab => "kebab",
        }
    }

    /// Human-readable label shown next to the converted text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Upper => "UPPER CASE",
            Self::Lower => "lower case",
            Self::Title => "Title Case",
            Self::Camel => "camelCase",
            Self::Pascal => "PascalCase",
            Self::Snake => "snake_case",
            Self::Kebab => "kebab-case",
        }
    }
}

impl fmt::Display for CaseVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Upper-case the first character, lower-case the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

fn join_mapped<S, F>(tokens: &[S], separator: &str, map: F) -> String
where
    S: AsRef<str>,
    F: Fn(&str) -> String,
{
    tokens
        .iter()
        .map(|token| map(token.as_ref()))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Join `tokens` according to `variant`.
///
/// An empty token slice yields an empty string for every variant.
///
/// # Example
/// ```
/// use toolbelt::{format_case, CaseVariant};
///
/// let tokens = ["parse", "http", "response"];
/// assert_eq!(format_case(&tokens, CaseVariant::Camel), "parseHttpResponse");
/// assert_eq!(format_case(&tokens, CaseVariant::Kebab), "parse-http-response");
/// ```
pub fn format_case<S: AsRef<str>>(tokens: &[S], variant: CaseVariant) -> String {
    match variant {
        CaseVariant::Upper => join_mapped(tokens, " ", str::to_uppercase),
        CaseVariant::Lower => join_mapped(tokens, " ", str::to_lowercase),
        CaseVariant::Title => join_mapped(tokens, " ", capitalize),
        CaseVariant::Camel => {
            let mut out = String::new();
            for (i, token) in tokens.iter().enumerate() {
                let token = token.as_ref();
                if i == 0 {
                    out.push_str(&token.to_lowercase());
                } else {
                    out.push_str(&capitalize(token));
                }
            }
            out
        }
        CaseVariant::Pascal => join_mapped(tokens, "", capitalize),
        CaseVariant::Snake => join_mapped(tokens, "_", str::to_lowercase),
        CaseVariant::Kebab => join_mapped(tokens, "-", str::to_lowercase),
    }
}

/// Tokenize `text` and format the words as `variant`.
///
/// # Example
/// ```
/// use toolbelt::{convert_case, CaseVariant};
///
/// assert_eq!(convert_case("hello world test", CaseVariant::Camel), "helloWorldTest");
/// assert_eq!(convert_case("HTTPServer", CaseVariant::Snake), "http_server");
/// ```
pub fn convert_case(text: &str, variant: CaseVariant) -> String {
    format_case(&tokenize(text), variant)
}

/// Convert many texts in parallel. Output order matches input order.
pub fn convert_case_batch(texts: &[String], variant: CaseVariant) -> Vec<String> {
    texts
        .par_iter()
        .map(|text| convert_case(text, variant))
        .collect()
}
