//! Name canonicalization for generated assertion methods.
//!
//! Raw member names come in several conventions: Java-style getters
//! (`isActive`, `getName`), Rust-style getters (`is_active`, `get_name`),
//! plain fields (`name`) and constant-style enum variants (`FOO_BAR`).
//! [`canonicalize`] folds them into the property name the assertion methods
//! are built from.

use regex::Regex;
use std::sync::LazyLock;

static GETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:is|get)(\p{Lu}.*)$").expect("getter pattern"));

static SNAKE_GETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:is|get)_(\p{L}.*)$").expect("snake getter pattern"));

static CONSTANT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{Lu}[\p{Lu}\p{Nd}_]*$").expect("constant pattern"));

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{XID_Start}_]\p{XID_Continue}*$").expect("identifier pattern")
});

static IDENTIFIER_PART: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{XID_Continue}*$").expect("identifier part pattern"));

/// Turns a raw member name into the canonical property name.
///
/// - `isActive` / `getName` → `active` / `name`
/// - `is_active` / `get_name` → `active` / `name`
/// - `FOO_BAR` / `NORTH` → `fooBar` / `north`
/// - anything else is returned unchanged
///
/// The transformation is pure but not idempotent: a canonical name that still
/// looks like a getter (`isolated` does not, `isX` does) is stripped again.
pub fn canonicalize(raw: &str) -> String {
    if let Some(caps) = GETTER.captures(raw) {
        return decapitalize(&caps[1]);
    }

    if let Some(caps) = SNAKE_GETTER.captures(raw) {
        return caps[1].to_string();
    }

    if CONSTANT.is_match(raw) {
        return constant_to_camel(raw);
    }

    raw.to_string()
}

/// `FOO_BAR` → `fooBar`
fn constant_to_camel(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());

    for (i, word) in raw.split('_').filter(|w| !w.is_empty()).enumerate() {
        let lower = word.to_lowercase();
        if i == 0 {
            out.push_str(&lower);
        } else {
            out.push_str(&capitalize(&lower));
        }
    }

    out
}

/// Upper-cases the first character, leaving the rest untouched.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-cases the first character, leaving the rest untouched.
pub fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Converts a lower-camel method name into a snake_case Rust identifier.
///
/// Existing underscores are kept, so names built from snake_case fields
/// (`hasFirst_name`) come out as `has_first_name`. Acronyms stay together:
/// `hasURLPath` → `has_url_path`.
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            if let Some(&prev) = i.checked_sub(1).and_then(|p| chars.get(p)) {
                let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
                let boundary = prev != '_'
                    && (prev.is_lowercase()
                        || prev.is_ascii_digit()
                        || (prev.is_uppercase() && next_is_lower));
                if boundary {
                    out.push('_');
                }
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}

/// Returns `true` if `name` is a complete identifier.
pub fn is_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}

/// Returns `true` if `name` can name a method, raw if need be.
///
/// `self`, `super`, `crate` and `Self` have no raw form.
pub fn is_method_name(name: &str) -> bool {
    is_identifier(name) && !matches!(name, "self" | "super" | "crate" | "Self" | "_")
}

/// Returns `true` if every character of `name` may continue an identifier.
pub fn is_identifier_part(name: &str) -> bool {
    IDENTIFIER_PART.is_match(name)
}
