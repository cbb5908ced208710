/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Author lists for reference-list entries.
//!
//! Reference lists never use "et al."; every author is printed, with the
//! single APA exception for 21 or more authors.

use refgen_core::Author;

/// APA lists up to this many authors in full.
pub const APA_MAX_LISTED: usize = 20;
/// Authors printed before the ellipsis once the APA list is too long.
pub const APA_LEADING_AUTHORS: usize = 19;
/// Gap marker between the leading authors and the final one.
pub const APA_ELLIPSIS: &str = ". . .";

/// "Last, F.", or just "Last" when no first name was given.
pub fn apa_name(author: &Author) -> String {
    match author.initial() {
        Some(initial) => format!("{}, {}.", author.last_name, initial),
        None => author.last_name.clone(),
    }
}

/// "Last, F". Harvard drops the period after the initial.
pub fn harvard_name(author: &Author) -> String {
    match author.initial() {
        Some(initial) => format!("{}, {}", author.last_name, initial),
        None => author.last_name.clone(),
    }
}

/// Format the full APA author list.
///
/// 1 author: `Last, F.`; 2–20: comma list with `&` before the last
/// (`Last1, F1., & Last2, F2.`); 21 or more: the first 19, an ellipsis, then
/// the final author.
pub fn format_authors_apa(authors: &[Author]) -> String {
    let names: Vec<String> = authors.iter().map(apa_name).collect();

    match names.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [leading @ .., last] if names.len() <= APA_MAX_LISTED => {
            format!("{}, & {}", leading.join(", "), last)
        }
        [.., last] => format!(
            "{}, {} {}",
            names[..APA_LEADING_AUTHORS].join(", "),
            APA_ELLIPSIS,
            last
        ),
    }
}

/// Format the full Harvard author list.
///
/// Up to three authors join with `&` before the last
/// (`Last1, F1, Last2, F2 & Last3, F3`). From four authors on, every name is
/// comma-joined and the last one carries the `&` (`…, Last3, F3, & Last4, F4`).
pub fn format_authors_harvard(authors: &[Author]) -> String {
    let names: Vec<String> = authors.iter().map(harvard_name).collect();

    match names.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [leading @ .., last] if names.len() <= 3 => {
            format!("{} & {}", leading.join(", "), last)
        }
        [leading @ .., last] => format!("{}, & {}", leading.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use refgen_core::{author, authors};

    fn numbered(n: usize) -> Vec<Author> {
        (1..=n)
            .map(|i| Author::new(&format!("Author{}", i), "Given"))
            .collect()
    }

    #[test]
    fn apa_single_author() {
        assert_eq!(format_authors_apa(&[author!("Kozulin", "alex")]), "Kozulin, A.");
    }

    #[test]
    fn apa_two_authors() {
        assert_eq!(
            format_authors_apa(&authors![("Smith", "John"), ("Doe", "Jane")]),
            "Smith, J., & Doe, J."
        );
    }

    #[test]
    fn apa_three_authors() {
        assert_eq!(
            format_authors_apa(&authors![("Smith", "John"), ("Doe", "Jane"), ("Roe", "Rick")]),
            "Smith, J., Doe, J., & Roe, R."
        );
    }

    #[test]
    fn apa_twenty_authors_listed_in_full() {
        let out = format_authors_apa(&numbered(20));
        assert!(out.starts_with("Author1, G., Author2, G.,"));
        assert!(out.ends_with("Author19, G., & Author20, G."));
        assert!(!out.contains(APA_ELLIPSIS));
    }

    #[test]
    fn apa_twenty_one_or_more_uses_ellipsis() {
        for n in [21, 25, 40] {
            let out = format_authors_apa(&numbered(n));
            let expected_tail = format!("Author19, G., . . . Author{}, G.", n);
            assert!(out.ends_with(&expected_tail), "{out}");
            assert!(!out.contains("Author20,"));
            assert_eq!(out.matches(", G.").count(), 20);
        }
    }

    #[test]
    fn harvard_lists() {
        assert_eq!(format_authors_harvard(&[author!("Kozulin", "alex")]), "Kozulin, A");
        assert_eq!(
            format_authors_harvard(&authors![("Smith", "John"), ("Doe", "Jane")]),
            "Smith, J & Doe, J"
        );
        assert_eq!(
            format_authors_harvard(&authors![("Smith", "John"), ("Doe", "Jane"), ("Roe", "Rick")]),
            "Smith, J, Doe, J & Roe, R"
        );
    }

    #[test]
    fn harvard_never_truncates() {
        let out = format_authors_harvard(&numbered(25));
        assert_eq!(out.matches(", G").count(), 25);
        assert!(out.ends_with(", & Author25, G"));
        assert!(!out.contains("et al."));
    }

    #[test]
    fn missing_first_name_drops_initial() {
        assert_eq!(apa_name(&author!("Plato", "")), "Plato");
        assert_eq!(harvard_name(&author!("Plato", "")), "Plato");
    }

    #[test]
    fn empty_list() {
        assert_eq!(format_authors_apa(&[]), "");
        assert_eq!(format_authors_harvard(&[]), "");
    }
}
