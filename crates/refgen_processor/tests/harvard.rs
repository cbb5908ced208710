/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;
use common::*;

use refgen_core::{authors, Book, JournalArticle, ReferenceOutput, Source, Style, Website};
use refgen_processor::generate_reference;

fn harvard(source: &Source) -> ReferenceOutput {
    generate_reference(Style::Harvard, source)
}

// --- Books ---

#[test]
fn test_book_with_location() {
    let out = harvard(&make_book(authors![("Kuhn", "Thomas")], "1962"));
    assert_eq!(
        out.reference_list,
        "Kuhn, T 1962, <i>The structure of scientific revolutions</i>, University of Chicago Press, Chicago."
    );
    assert_eq!(out.in_text_parenthetical, "(Kuhn 1962)");
    assert_eq!(out.in_text_narrative, "Kuhn (1962)");
}

#[test]
fn test_book_edition_and_missing_location() {
    let source = Source::from(Book {
        authors: authors![("Smith", "John"), ("Doe", "Jane")],
        year: "2020".into(),
        title: "Research Methods".into(),
        edition: Some("3rd".into()),
        publisher: "Sage".into(),
        ..Default::default()
    });
    let out = harvard(&source);
    assert_eq!(
        out.reference_list,
        "Smith, J & Doe, J 2020, <i>Research methods</i>, 3rd edn, Sage."
    );
    assert_eq!(out.in_text_parenthetical, "(Smith & Doe 2020)");
    assert_eq!(out.in_text_narrative, "Smith and Doe (2020)");
}

// --- Journal articles ---

#[test]
fn test_journal_layout() {
    let source = Source::from(JournalArticle {
        journal_name: "educational psychologist".into(),
        ..kozulin()
    });
    let out = harvard(&source);
    assert_eq!(
        out.reference_list,
        "Kozulin, A 1993, 'Literature as a psychological tool', <i>Educational Psychologist</i>, vol. 28, no. 3, pp. 253-265, DOI:10.1207/s15326985ep2803_5."
    );
    assert_eq!(out.in_text_parenthetical, "(Kozulin 1993)");
}

#[test]
fn test_journal_name_title_case() {
    let source = Source::from(JournalArticle {
        journal_name: "JOURNAL OF THE HISTORY OF IDEAS".into(),
        doi: None,
        url: Some("https://example.com".into()),
        ..kozulin()
    });
    let out = harvard(&source);
    assert!(out
        .reference_list
        .contains("<i>Journal of the History of Ideas</i>"));
    // No DOI: Harvard journals do not fall back to the URL.
    assert!(out.reference_list.ends_with("pp. 253-265."));
}

#[test]
fn test_three_authors_listed_in_text() {
    let out = harvard(&make_article(
        authors![("Smith", "John"), ("Doe", "Jane"), ("Roe", "Rick")],
        "2021",
    ));
    assert!(out
        .reference_list
        .starts_with("Smith, J, Doe, J & Roe, R 2021, "));
    assert_eq!(out.in_text_parenthetical, "(Smith, Doe & Roe 2021)");
    assert_eq!(out.in_text_narrative, "Smith, Doe and Roe (2021)");
}

#[test]
fn test_four_authors_et_al_in_text_only() {
    let out = harvard(&make_article(
        authors![
            ("Leeder", "Stephen"),
            ("Dobson", "Annette"),
            ("Gibbers", "Robert"),
            ("Patel", "Nina"),
        ],
        "1996",
    ));
    assert!(out
        .reference_list
        .starts_with("Leeder, S, Dobson, A, Gibbers, R, & Patel, N 1996, "));
    assert_eq!(out.in_text_parenthetical, "(Leeder et al. 1996)");
    assert_eq!(out.in_text_narrative, "Leeder et al. (1996)");
}

// --- Websites ---

#[test]
fn test_website_without_author_uses_title() {
    let out = harvard(&Source::from(moon_page()));
    assert_eq!(
        out.reference_list,
        "Land for sale on moon 2007, accessed 19 June 2007, &lt;http://www.moonlandrealestate.com&gt;."
    );
    assert_eq!(out.in_text_parenthetical, "(Land for sale on moon 2007)");
    assert_eq!(out.in_text_narrative, "Land for sale on moon (2007)");
}

#[test]
fn test_website_with_organisation_and_sponsor() {
    let source = Source::from(Website {
        organisation_author: Some("World Health Organization".into()),
        sponsor: Some("United Nations".into()),
        ..moon_page()
    });
    let out = harvard(&source);
    assert_eq!(
        out.reference_list,
        "World Health Organization 2007, <i>Land for sale on moon</i>, United Nations, accessed 19 June 2007, &lt;http://www.moonlandrealestate.com&gt;."
    );
    assert_eq!(out.in_text_parenthetical, "(World Health Organization 2007)");
    assert_eq!(out.in_text_narrative, "World Health Organization (2007)");
}

#[test]
fn test_website_missing_url_uses_placeholder() {
    let source = Source::from(Website {
        url: String::new(),
        ..moon_page()
    });
    assert!(harvard(&source).reference_list.ends_with(", &lt;URL&gt;."));

    let authored = make_website(authors![("Doe", "Jane")], "2007");
    let Source::Website(mut site) = authored else {
        unreachable!()
    };
    site.url.clear();
    let out = harvard(&Source::from(site));
    assert_eq!(
        out.reference_list,
        "Doe, J 2007, <i>Land for sale on moon</i>, accessed 19 June 2007, &lt;URL&gt;."
    );
}

// --- AI tools ---

#[test]
fn test_ai_tool() {
    let out = harvard(&Source::from(chatgpt()));
    assert_eq!(
        out.reference_list,
        "OpenAI. 2023, <i>ChatGPT</i>, [Large language model], Retrieved October 19, 2023, from https://chat.openai.com."
    );
    assert_eq!(out.in_text_parenthetical, "(OpenAI 2023)");
    assert_eq!(out.in_text_narrative, "OpenAI (2023)");
}
