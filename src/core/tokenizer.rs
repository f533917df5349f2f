//! Word tokenizer for case conversion.
//!
//! Splits arbitrary identifiers and phrases into lowercase words, regardless of
//! the case style they were written in:
//!
//! - `hello world`, `hello_world`, `hello-world` → `hello`, `world`
//! - `helloWorld`, `HelloWorld` → `hello`, `world`
//! - `HTTPServer` → `http`, `server`
//! - `version2Beta` → `version`, `2`, `beta`
//!
//! # Boundary Rules
//!
//! The input is scanned once, left to right. A token ends when:
//!
//! - a delimiter is reached (whitespace, `_` or `-`); delimiter runs are discarded
//! - a lowercase letter is followed by an uppercase letter
//! - a letter is followed by a digit, or a digit by a letter
//! - an uppercase letter sits between another uppercase letter and a lowercase
//!   letter (acronym boundary: the last capital of the run starts the next word)
//!
//! Only ASCII letters and digits take part in boundary detection. Anything else
//! (punctuation, non-ASCII text) stays inside the current token.

use tracing::trace;

/// Ordered lowercase words extracted from one input string.
pub type TokenSequence = Vec<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Delimiter,
    Upper,
    Lower,
    Digit,
    Other,
}

impl CharClass {
    #[inline]
    fn of(ch: char) -> Self {
        match ch {
            '_' | '-' => Self::Delimiter,
            c if c.is_whitespace() => Self::Delimiter,
            c if c.is_ascii_uppercase() => Self::Upper,
            c if c.is_ascii_lowercase() => Self::Lower,
            c if c.is_ascii_digit() => Self::Digit,
            _ => Self::Other,
        }
    }

    #[inline]
    fn is_letter(self) -> bool {
        matches!(self, Self::Upper | Self::Lower)
    }
}

/// Returns true when a new token must start at the current character.
///
/// `prev` and `current` are never delimiters here; `next` is the class of the
/// character after `current`, if any.
#[inline]
fn is_boundary(prev: CharClass, current: CharClass, next: Option<CharClass>) -> bool {
    match (prev, current) {
        (CharClass::Lower, CharClass::Upper) => true,
        (CharClass::Upper, CharClass::Upper) => next == Some(CharClass::Lower),
        (p, CharClass::Digit) if p.is_letter() => true,
        (CharClass::Digit, c) if c.is_letter() => true,
        _ => false,
    }
}

#[inline]
fn flush(current: &mut String, tokens: &mut TokenSequence) {
    if !current.is_empty() {
        tokens.push(std::mem::take(current).to_lowercase());
    }
}

/// Split `input` into lowercase word tokens.
///
/// Never fails. Empty and whitespace-only inputs produce an empty sequence.
///
/// # Example
/// ```
/// use toolbelt::tokenize;
///
/// assert_eq!(tokenize("parseHTTPResponse2"), vec!["parse", "http", "response", "2"]);
/// assert!(tokenize("  \t ").is_empty());
/// ```
pub fn tokenize(input: &str) -> TokenSequence {
    let chars: Vec<char> = input.chars().collect();
    let classes: Vec<CharClass> = chars.iter().map(|&c| CharClass::of(c)).collect();

    let mut tokens = TokenSequence::new();
    let mut current = String::new();

    for (i, (&ch, &class)) in chars.iter().zip(&classes).enumerate() {
        if class == CharClass::Delimiter {
            flush(&mut current, &mut tokens);
            continue;
        }

        // `current` is non-empty only if the previous char was not a delimiter
        let next = classes.get(i + 1).copied();
        if !current.is_empty() && is_boundary(classes[i - 1], class, next) {
            flush(&mut current, &mut tokens);
        }
        current.push(ch);
    }
    flush(&mut current, &mut tokens);

    trace!(tokens = tokens.len(), "tokenized input");
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_whitespace() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("\t\n ").is_empty());
        assert!(tokenize("__--  _").is_empty());
    }

    #[test]
    fn test_space_delimited() {
        assert_eq!(tokenize("hello world test"), vec!["hello", "world", "test"]);
        assert_eq!(tokenize("  hello   world  "), vec!["hello", "world"]);
    }

    #[test]
    fn test_snake_and_kebab() {
        assert_eq!(tokenize("hello_world"), vec!["hello", "world"]);
        assert_eq!(tokenize("hello-world"), vec!["hello", "world"]);
        assert_eq!(tokenize("__hello__-world--"), vec!["hello", "world"]);
    }

    #[test]
    fn test_camel_and_pascal() {
        assert_eq!(tokenize("helloWorld"), vec!["hello", "world"]);
        assert_eq!(tokenize("HelloWorld"), vec!["hello", "world"]);
        assert_eq!(tokenize("aB"), vec!["a", "b"]);
    }

    #[test]
    fn test_acronym_boundary() {
        assert_eq!(tokenize("HTTPServer"), vec!["http", "server"]);
        assert_eq!(tokenize("parseHTTPResponse"), vec!["parse", "http", "response"]);
        assert_eq!(tokenize("ABc"), vec!["a", "bc"]);
        // trailing acronym has no lowercase after it
        assert_eq!(tokenize("useHTTP"), vec!["use", "http"]);
        assert_eq!(tokenize("HELLO WORLD"), vec!["hello", "world"]);
    }

    #[test]
    fn test_digit_transitions() {
        assert_eq!(tokenize("version2Beta"), vec!["version", "2", "beta"]);
        assert_eq!(tokenize("abc123def"), vec!["abc", "123", "def"]);
        assert_eq!(tokenize("ABC123"), vec!["abc", "123"]);
        assert_eq!(tokenize("123"), vec!["123"]);
    }

    #[test]
    fn test_other_characters_stay_in_token() {
        assert_eq!(tokenize("hello, world!"), vec!["hello,", "world!"]);
        assert_eq!(tokenize("v2.0"), vec!["v", "2.0"]);
        assert_eq!(tokenize("café au lait"), vec!["café", "au", "lait"]);
    }

    #[test]
    fn test_retokenize_joined_output() {
        let tokens = tokenize("someHTTPValue_with-42mixedStyles");
        let joined = tokens.join(" ");
        assert_eq!(tokenize(&joined), tokens);
    }

    #[test]
    fn test_boundary_table() {
        use CharClass::*;
        assert!(is_boundary(Lower, Upper, None));
        assert!(!is_boundary(Upper, Lower, None));
        assert!(is_boundary(Upper, Upper, Some(Lower)));
        assert!(!is_boundary(Upper, Upper, Some(Upper)));
        assert!(!is_boundary(Upper, Upper, None));
        assert!(is_boundary(Lower, Digit, None));
        assert!(is_boundary(Digit, Upper, None));
        assert!(!is_boundary(Other, Digit, None));
        assert!(!is_boundary(Digit, Other, None));
    }
}
