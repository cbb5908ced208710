/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use refgen_core::{AiToolUse, Author, Book, JournalArticle, Source, Website};

// --- Helper Functions for Test Data Construction ---

/// Authors named Author1..AuthorN, each with first name "Given".
pub fn numbered_authors(n: usize) -> Vec<Author> {
    (1..=n)
        .map(|i| Author::new(&format!("Author{}", i), "Given"))
        .collect()
}

/// Create a book with the given authors and year.
pub fn make_book(authors: Vec<Author>, year: &str) -> Source {
    Source::from(Book {
        authors,
        year: year.to_string(),
        title: "The structure of scientific revolutions".to_string(),
        publisher: "University of Chicago Press".to_string(),
        location: Some("Chicago".to_string()),
        ..Default::default()
    })
}

/// The Kozulin (1993) article used across style tests.
pub fn kozulin() -> JournalArticle {
    JournalArticle {
        authors: refgen_core::authors![("Kozulin", "A")],
        year: "1993".to_string(),
        title: "Literature as a psychological tool".to_string(),
        journal_name: "Educational Psychologist".to_string(),
        volume: "28".to_string(),
        issue: Some("3".to_string()),
        pages: Some("253-265".to_string()),
        doi: Some("10.1207/s15326985ep2803_5".to_string()),
        url: None,
    }
}

pub fn make_article(authors: Vec<Author>, year: &str) -> Source {
    Source::from(JournalArticle {
        authors,
        year: year.to_string(),
        ..kozulin()
    })
}

/// The authorless "moon" web page.
pub fn moon_page() -> Website {
    Website {
        title: "Land for sale on moon".to_string(),
        year: "2007".to_string(),
        site_name: "Moon Land Real Estate".to_string(),
        access_date: "19 June 2007".to_string(),
        url: "http://www.moonlandrealestate.com".to_string(),
        ..Default::default()
    }
}

pub fn make_website(authors: Vec<Author>, year: &str) -> Source {
    Source::from(Website {
        authors,
        year: year.to_string(),
        ..moon_page()
    })
}

pub fn chatgpt() -> AiToolUse {
    AiToolUse {
        company: "OpenAI".to_string(),
        year: "2023".to_string(),
        product_name: "ChatGPT".to_string(),
        model_type: "Large language model".to_string(),
        retrieved_date: "October 19, 2023".to_string(),
        url: "https://chat.openai.com".to_string(),
    }
}

/// One record of every variant, all with the given year.
pub fn every_variant(year: &str) -> Vec<Source> {
    vec![
        make_book(refgen_core::authors![("Kuhn", "Thomas")], year),
        make_article(refgen_core::authors![("Kozulin", "A")], year),
        make_website(Vec::new(), year),
        make_website(refgen_core::authors![("Doe", "Jane")], year),
        Source::from(Website {
            organisation_author: Some("World Health Organization".to_string()),
            year: year.to_string(),
            ..moon_page()
        }),
        Source::from(AiToolUse {
            year: year.to_string(),
            ..chatgpt()
        }),
    ]
}
