//! Environment variable name derivation.
//!
//! Field identifiers are split into words at case boundaries and joined with
//! underscores. Runs of capitals are treated as a single word (an acronym)
//! that ends where a capital is followed by a lowercase letter, so `APIKey`
//! becomes `api_key` rather than `a_p_i_key`.

/// Separator inserted between words and between the prefix and the name.
const BOUNDARY: char = '_';

/// Converts a capitalised-word identifier into `snake_case`.
///
/// A separator is inserted before an uppercase character when either of its
/// neighbours is lowercase and the preceding character is not already a
/// separator. The first character never receives one. Identifiers that are
/// already `snake_case` are returned unchanged.
///
/// # Examples
///
/// ```
/// use envstruct::name::snake_case;
///
/// assert_eq!(snake_case("APIKey"), "api_key");
/// assert_eq!(snake_case("AutoRestart"), "auto_restart");
/// assert_eq!(snake_case("api_key"), "api_key");
/// ```
#[must_use]
pub fn snake_case(ident: &str) -> String {
    let chars: Vec<char> = ident.chars().collect();
    let mut out = String::with_capacity(ident.len() + 4);
    let mut prev: Option<char> = None;
    for (idx, &ch) in chars.iter().enumerate() {
        let next = chars.get(idx + 1).copied();
        if prev.is_some_and(|p| starts_word(p, ch, next)) {
            out.push(BOUNDARY);
        }
        out.extend(ch.to_lowercase());
        prev = Some(ch);
    }
    out
}

fn starts_word(prev: char, ch: char, next: Option<char>) -> bool {
    ch.is_uppercase()
        && (next.is_some_and(char::is_lowercase) || prev.is_lowercase())
        && prev != BOUNDARY
}

/// Resolves the environment variable consulted for `ident`.
///
/// The identifier is converted with [`snake_case`]. A non-empty `prefix` is
/// joined to it with an underscore exactly as given, and the whole key is
/// upper-cased.
///
/// # Examples
///
/// ```
/// use envstruct::name::env_key;
///
/// assert_eq!(env_key("", "APIKey"), "API_KEY");
/// assert_eq!(env_key("pref", "Username"), "PREF_USERNAME");
/// ```
#[must_use]
pub fn env_key(prefix: &str, ident: &str) -> String {
    let name = snake_case(ident);
    let key = if prefix.is_empty() {
        name
    } else {
        format!("{prefix}{BOUNDARY}{name}")
    };
    key.to_uppercase()
}
