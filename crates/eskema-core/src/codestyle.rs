//! Naming-style conversions used by the emitters.
//!
//! Inputs may be camelCase, PascalCase, snake_case or SCREAMING_SNAKE_CASE.
//! A value containing `_`, or one with no lowercase letters at all, is read
//! as snake case; anything else is split at each uppercase letter.

/// Converts a name to `snake_case`.
pub fn to_snake_case(value: &str) -> String {
    words(value).join("_")
}

/// Converts a name to `camelCase`.
pub fn to_camel_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for (i, word) in words(value).iter().enumerate() {
        if i == 0 {
            out.push_str(word);
        } else {
            out.push_str(&upper_initial(word));
        }
    }
    out
}

/// Converts a name to `PascalCase`.
pub fn to_pascal_case(value: &str) -> String {
    upper_initial(&to_camel_case(value))
}

/// Uppercases the first character, leaving the rest untouched.
pub fn upper_initial(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn words(value: &str) -> Vec<String> {
    if is_snake_case(value) {
        value.to_lowercase().split('_').map(str::to_string).collect()
    } else {
        split_on_uppercase(value)
    }
}

fn is_snake_case(value: &str) -> bool {
    value.contains('_') || !value.chars().any(|c| c.is_ascii_lowercase())
}

fn split_on_uppercase(value: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    for (i, c) in value.chars().enumerate() {
        if i != 0 && c.is_ascii_uppercase() {
            words.push(std::mem::take(&mut current));
        }
        current.push(c.to_ascii_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}
