/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Capitalisation transforms.
//!
//! Both operate on whitespace-delimited words and only ever change case:
//! word order, whitespace and punctuation pass through untouched.

/// Function words left in lowercase by [`title_case`] unless they open the string.
pub const SMALL_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "for", "from", "in", "into", "nor", "of", "on",
    "or", "the", "to", "with",
];

/// Uppercase the first character, lowercase the rest, and uppercase any
/// character that directly follows `": "` so subtitles keep their capital.
///
/// ```
/// use refgen_processor::values::text::sentence_case;
/// assert_eq!(
///     sentence_case("Thinking In SYSTEMS: a primer"),
///     "Thinking in systems: A primer"
/// );
/// ```
pub fn sentence_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev = [None, None];

    for (i, c) in s.chars().enumerate() {
        let after_colon = prev == [Some(':'), Some(' ')];
        if i == 0 || after_colon {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        prev = [prev[1], Some(c)];
    }
    out
}

/// Capitalise every word except those in [`SMALL_WORDS`]; the first word is
/// always capitalised. The input is lowercased first, so the result does not
/// depend on the caller's casing and applying it twice changes nothing.
///
/// ```
/// use refgen_processor::values::text::title_case;
/// assert_eq!(title_case("journal of the history of ideas"), "Journal of the History of Ideas");
/// ```
pub fn title_case(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut first_word = true;

    for piece in lower.split_inclusive(char::is_whitespace) {
        let word = piece.trim_end_matches(char::is_whitespace);
        let gap = &piece[word.len()..];
        if !word.is_empty() {
            if first_word || !SMALL_WORDS.contains(&word) {
                out.push_str(&capitalize(word));
            } else {
                out.push_str(word);
            }
            first_word = false;
        }
        out.push_str(gap);
    }
    out
}

/// Uppercase the first character. One whose uppercase form is several
/// characters (`ß`, `ŉ`) stays as it is.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) => std::iter::once(u).chain(chars).collect(),
                _ => word.to_string(),
            }
        }
        None => String::new(),
    }
}
