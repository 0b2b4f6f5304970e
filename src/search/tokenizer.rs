use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Separator characters used in item names: whitespace, hyphen, underscore,
/// ampersand, comma.
static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s\-_&,]+").unwrap());

/// Tokenizes an item name for indexing.
///
/// Lowercases, splits on separator runs, and drops single-character tokens.
/// One extra token is emitted: the full name with every separator stripped,
/// so "Green Beans" is also findable as "greenbeans".
pub fn tokenize_name(name: &str) -> HashSet<String> {
    let lowered = name.to_lowercase();
    let mut tokens: HashSet<String> = SEPARATORS
        .split(&lowered)
        .filter(|word| word.len() > 1)
        .map(|word| word.to_string())
        .collect();

    let joined = SEPARATORS.replace_all(&lowered, "");
    if !joined.is_empty() {
        tokens.insert(joined.into_owned());
    }

    tokens
}

/// Tokenizes a query string.
///
/// Same lowercasing and separator rules as [`tokenize_name`], but short terms
/// are kept (a one-letter query still prefix-matches) and order is preserved.
pub fn tokenize_query(query: &str) -> Vec<String> {
    SEPARATORS
        .split(&query.to_lowercase())
        .filter(|word| !word.is_empty())
        .map(|word| word.to_string())
        .collect()
}
