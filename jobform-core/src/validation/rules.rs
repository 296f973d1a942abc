//! Shared validation predicates
//!
//! Each rule is a plain `&str -> bool` check; the validator maps failures to
//! per-field messages. Numeric checks share one decimal-parsing predicate so
//! the phone and experience rules cannot drift apart.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// Basic `local@domain.tld` shape: at least one non-whitespace run, an `@`,
/// another run, a dot, and a final run. Deliberately unanchored.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("Invalid email pattern"));

/// Whether the whole (trimmed) string is interpretable as a finite decimal
/// number. Accepts an optional sign and decimal point and surrounding
/// whitespace; rejects the empty string and anything left over after
/// trimming that is not numeric.
pub fn parses_as_number(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .parse::<f64>()
            .map(|n| n.is_finite())
            .unwrap_or(false)
}

/// Whether the string parses as a number strictly greater than zero.
pub fn parses_as_positive_number(value: &str) -> bool {
    value
        .trim()
        .parse::<f64>()
        .map(|n| n.is_finite() && n > 0.0)
        .unwrap_or(false)
}

/// Whether the string matches the basic email shape.
pub fn matches_email_shape(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

/// Whether the string is a well-formed absolute URL with a scheme and an
/// authority. Parse failures become `false`; they never propagate.
pub fn is_well_formed_url(value: &str) -> bool {
    Url::parse(value).map(|url| url.has_host()).unwrap_or(false)
}
