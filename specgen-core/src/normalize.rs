//! Text normalizers
//!
//! Pure text-to-canonical-form functions shared by the extractors. All of
//! them are total: malformed input degrades to an unchanged or empty result,
//! never to an error, so callers decide what an empty canonical form means.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static QUALIFIERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bor higher\b|\bplus\b|\+$").unwrap());

static FAMILY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*([A-Za-z_][A-Za-z0-9_]*?)\s*\[\s*n\s*\]\s*$").unwrap());

static IDENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Replace every run of whitespace with a single space and trim the ends.
/// Idempotent: applying it twice yields the same result as once.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

const WRAPPING_QUOTES: [char; 4] = ['`', '"', '\u{201c}', '\u{201d}'];

/// Strip one pair of wrapping quotes, if present.
///
/// The first and last characters must be the same member of the matched-quote
/// set (backtick, straight double quote, curly double quote). Anything else
/// comes back unchanged.
pub fn strip_wrapping_quotes(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() >= 2 {
        let first = chars[0];
        let last = chars[chars.len() - 1];
        if first == last && WRAPPING_QUOTES.contains(&first) {
            let inner: String = chars[1..chars.len() - 1].iter().collect();
            return inner.trim().to_string();
        }
    }
    text.to_string()
}

fn superscript_to_ascii(c: char) -> char {
    match c {
        '\u{2070}' => '0',
        '\u{00b9}' => '1',
        '\u{00b2}' => '2',
        '\u{00b3}' => '3',
        '\u{2074}' => '4',
        '\u{2075}' => '5',
        '\u{2076}' => '6',
        '\u{2077}' => '7',
        '\u{2078}' => '8',
        '\u{2079}' => '9',
        _ => c,
    }
}

/// Canonicalize a free-form shader-model notation to `"<major>_<minor>"`.
///
/// Accepts superscript digits (`2¹`), caret-escaped exponents (`2^1`),
/// decimal points (`2.0`), profile prefixes (`ps_2_1`) and trailing
/// qualifiers ("or higher", "plus", `+`). After mapping superscripts and
/// dropping qualifiers, every non-digit is discarded and the digit sequence
/// is scanned left to right: the first digit in 1..=6 is the major version
/// and the digit immediately after it (if any, else `0`) is the minor.
///
/// When several plausible major digits exist, the first one wins; that is a
/// deliberate tie-break policy, not an accident. Returns the empty string
/// when no digit in 1..=6 exists anywhere in the input.
pub fn normalize_version_token(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mapped: String = text.chars().map(superscript_to_ascii).collect();
    let stripped = QUALIFIERS.replace_all(&mapped, "");
    let stripped = stripped.replace('^', "");

    let digits: Vec<u32> = stripped.chars().filter_map(|c| c.to_digit(10)).collect();
    match digits.iter().position(|d| (1..=6).contains(d)) {
        None => String::new(),
        Some(major_idx) => {
            let major = digits[major_idx];
            let minor = digits.get(major_idx + 1).copied().unwrap_or(0);
            format!("{}_{}", major, minor)
        }
    }
}

/// Extract the bare base name from a family placeholder like `COLOR[n]`.
///
/// The bracketed `n` is matched case-insensitively and surrounding
/// whitespace is tolerated. Returns `None` for anything that is not a
/// placeholder.
pub fn family_base(name: &str) -> Option<String> {
    FAMILY
        .captures(name)
        .map(|captures| captures[1].to_string())
}

/// Strict identifier shape: a letter or underscore followed by letters,
/// digits or underscores.
pub fn is_identifier(token: &str) -> bool {
    IDENT.is_match(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("  a  b\t\nc ", "a b c")]
    #[case("already clean", "already clean")]
    #[case("", "")]
    fn collapses_whitespace(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(collapse_whitespace(input), expected);
    }

    proptest! {
        #[test]
        fn collapse_whitespace_is_idempotent(input in ".{0,64}") {
            let once = collapse_whitespace(&input);
            prop_assert_eq!(collapse_whitespace(&once), once);
        }

        #[test]
        fn normalize_version_is_idempotent_on_own_output(input in ".{0,32}") {
            let once = normalize_version_token(&input);
            prop_assert_eq!(normalize_version_token(&once), once);
        }
    }

    #[rstest]
    #[case("`abs`", "abs")]
    #[case("\"quoted\"", "quoted")]
    #[case("\u{201c}curly\u{201c}", "curly")]
    #[case("\u{201c}mismatched\u{201d}", "\u{201c}mismatched\u{201d}")]
    #[case("\"x", "\"x")]
    #[case("\"", "\"")]
    fn strips_wrapping_quotes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(strip_wrapping_quotes(input), expected);
    }

    #[rstest]
    #[case("2\u{00b9}", "2_1")]
    #[case("2^1", "2_1")]
    #[case("ps_2_1", "2_1")]
    #[case("2.0", "2_0")]
    #[case("4", "4_0")]
    #[case("vs_4_1 or higher", "4_1")]
    #[case("5.0 plus", "5_0")]
    #[case("3+", "3_0")]
    #[case("", "")]
    #[case("0.9", "")]
    #[case("789", "")]
    #[case("no digits here", "")]
    fn normalizes_version_tokens(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_version_token(input), expected);
    }

    #[test]
    fn version_scan_takes_first_valid_major() {
        // 0 is skipped, 9 is not a valid major; the 2 wins and 3 is its minor
        assert_eq!(normalize_version_token("0923"), "2_3");
    }

    #[rstest]
    #[case("COLOR[n]", Some("COLOR"))]
    #[case("TEXCOORD[N]", Some("TEXCOORD"))]
    #[case("  DEPTH [ n ]  ", Some("DEPTH"))]
    #[case("COLOR0", None)]
    #[case("COLOR[1]", None)]
    #[case("[n]", None)]
    fn recognizes_family_placeholders(#[case] input: &str, #[case] expected: Option<&str>) {
        assert_eq!(family_base(input).as_deref(), expected);
    }

    #[rstest]
    #[case("float4", true)]
    #[case("_internal", true)]
    #[case("4x4", false)]
    #[case("two words", false)]
    #[case("", false)]
    fn checks_identifier_shape(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_identifier(input), expected);
    }
}
