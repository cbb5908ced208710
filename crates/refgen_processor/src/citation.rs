/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! In-text citations.
//!
//! Both styles share one algorithm and differ only in the separator between
//! author and year inside parentheses and in how many authors trigger
//! "et al.". Narrative citations always put the year in parentheses after
//! the author and spell out "and".

use refgen_core::ReferenceOutput;

use crate::values::Attribution;

/// Style-specific knobs for in-text citations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InTextOptions {
    /// Between author and year in the parenthetical form.
    pub year_delimiter: &'static str,
    /// Author count from which only the first author plus "et al." is shown.
    pub et_al_min: usize,
}

/// The two in-text forms for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InText {
    pub parenthetical: String,
    pub narrative: String,
}

impl InText {
    /// Pair these with a reference-list entry to make the full output.
    pub fn with_reference(self, reference_list: String) -> ReferenceOutput {
        ReferenceOutput {
            reference_list,
            in_text_parenthetical: self.parenthetical,
            in_text_narrative: self.narrative,
        }
    }

    fn attributed(author: &str, year: &str, options: &InTextOptions) -> Self {
        Self {
            parenthetical: format!("({}{}{})", author, options.year_delimiter, year),
            narrative: format!("{} ({})", author, year),
        }
    }

    fn year_only(year: &str) -> Self {
        let both = format!("({})", year);
        Self {
            parenthetical: both.clone(),
            narrative: both,
        }
    }
}

/// Build both in-text forms. `year` must already have the no-date
/// substitution applied.
pub fn in_text(attribution: Attribution<'_>, year: &str, options: &InTextOptions) -> InText {
    let authors = match attribution {
        Attribution::Organisation(name) | Attribution::Title(name) => {
            return InText::attributed(name, year, options);
        }
        Attribution::Authors(authors) => authors,
    };

    let surnames: Vec<&str> = authors.iter().map(|a| a.last_name.as_str()).collect();
    match surnames.as_slice() {
        [] => InText::year_only(year),
        [only] => InText::attributed(only, year, options),
        [first, ..] if surnames.len() >= options.et_al_min => {
            let short = format!("{} et al.", first);
            InText::attributed(&short, year, options)
        }
        [leading @ .., last] => {
            let leading = leading.join(", ");
            InText {
                parenthetical: format!(
                    "({} & {}{}{})",
                    leading, last, options.year_delimiter, year
                ),
                narrative: format!("{} and {} ({})", leading, last, year),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use refgen_core::{authors, Author};

    const APA: InTextOptions = InTextOptions {
        year_delimiter: ", ",
        et_al_min: 3,
    };
    const HARVARD: InTextOptions = InTextOptions {
        year_delimiter: " ",
        et_al_min: 4,
    };

    fn people(n: usize) -> Vec<Author> {
        let all = authors![("Smith", "J"), ("Doe", "J"), ("Roe", "R"), ("Poe", "E"), ("Low", "L")];
        all.into_iter().take(n).collect()
    }

    fn cite(n: usize, options: &InTextOptions) -> (String, String) {
        let list = people(n);
        let out = in_text(Attribution::Authors(&list), "2020", options);
        (out.parenthetical, out.narrative)
    }

    #[test]
    fn apa_table() {
        assert_eq!(cite(0, &APA), ("(2020)".into(), "(2020)".into()));
        assert_eq!(cite(1, &APA), ("(Smith, 2020)".into(), "Smith (2020)".into()));
        assert_eq!(cite(2, &APA), ("(Smith & Doe, 2020)".into(), "Smith and Doe (2020)".into()));
        assert_eq!(cite(3, &APA), ("(Smith et al., 2020)".into(), "Smith et al. (2020)".into()));
        assert_eq!(cite(5, &APA), ("(Smith et al., 2020)".into(), "Smith et al. (2020)".into()));
    }

    #[test]
    fn harvard_table() {
        assert_eq!(cite(0, &HARVARD), ("(2020)".into(), "(2020)".into()));
        assert_eq!(cite(1, &HARVARD), ("(Smith 2020)".into(), "Smith (2020)".into()));
        assert_eq!(cite(2, &HARVARD), ("(Smith & Doe 2020)".into(), "Smith and Doe (2020)".into()));
        assert_eq!(
            cite(3, &HARVARD),
            ("(Smith, Doe & Roe 2020)".into(), "Smith, Doe and Roe (2020)".into())
        );
        assert_eq!(cite(4, &HARVARD), ("(Smith et al. 2020)".into(), "Smith et al. (2020)".into()));
    }

    #[test]
    fn organisation_and_title() {
        let org = in_text(Attribution::Organisation("OpenAI"), "2023", &APA);
        assert_eq!(org.parenthetical, "(OpenAI, 2023)");
        assert_eq!(org.narrative, "OpenAI (2023)");

        let title = in_text(Attribution::Title("Land for sale on moon"), "2007", &HARVARD);
        assert_eq!(title.parenthetical, "(Land for sale on moon 2007)");
        assert_eq!(title.narrative, "Land for sale on moon (2007)");
    }
}
