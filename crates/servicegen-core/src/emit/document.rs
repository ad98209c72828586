// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Document tree for method-body emission.
//!
//! Body text is built declaratively: emission functions return [`Document`]
//! values that are rendered in a final pass, instead of writing to a string
//! buffer with manual indentation tracking. Generated bodies have fixed
//! formatting, so the renderer is deliberately simple: every [`line`] is a
//! newline plus the current indentation, with no line-width fitting.
//!
//! # Example
//!
//! ```
//! use servicegen_core::emit::document::{line, nest, INDENT};
//! use servicegen_core::docvec;
//!
//! let doc = docvec![
//!     "if (pageBounds != null) {",
//!     nest(INDENT, docvec![line(), "PageHelper.startPage(0, 10);"]),
//!     line(),
//!     "}",
//! ];
//! assert_eq!(
//!     doc.render(),
//!     "if (pageBounds != null) {\n    PageHelper.startPage(0, 10);\n}"
//! );
//! ```

use ecow::EcoString;

/// Indentation width of generated body text, in spaces.
pub const INDENT: isize = 4;

/// A renderable document tree.
///
/// Documents are composable, immutable structures describing the layout of
/// generated body text. Anything string-like converts into one via `From`,
/// which is what the [`docvec!`](crate::docvec) macro leans on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document<'a> {
    /// A borrowed string literal.
    Str(&'a str),
    /// An owned string.
    String(String),
    /// A newline followed by the current indentation.
    Line,
    /// Increased indentation for the nested content.
    Nest(isize, Box<Document<'a>>),
    /// A sequence of documents.
    Vec(Vec<Document<'a>>),
    /// Empty document.
    Nil,
}

impl<'a> From<&'a str> for Document<'a> {
    fn from(value: &'a str) -> Self {
        Document::Str(value)
    }
}

impl From<String> for Document<'_> {
    fn from(value: String) -> Self {
        Document::String(value)
    }
}

impl From<EcoString> for Document<'_> {
    fn from(value: EcoString) -> Self {
        Document::String(value.into())
    }
}

impl<'a> From<Vec<Document<'a>>> for Document<'a> {
    fn from(value: Vec<Document<'a>>) -> Self {
        Document::Vec(value)
    }
}

/// Builds a [`Document::Vec`] from anything convertible into documents.
///
/// Elements are concatenated directly, with no separator:
///
/// ```
/// use servicegen_core::docvec;
///
/// let call = String::from("userMapper.insert(record)");
/// let doc = docvec!["return DataStore.of(", call, ");"];
/// assert_eq!(doc.render(), "return DataStore.of(userMapper.insert(record));");
/// ```
#[macro_export]
macro_rules! docvec {
    ($($doc:expr),* $(,)?) => {
        $crate::emit::document::Document::Vec(
            vec![$($crate::emit::document::Document::from($doc)),*]
        )
    };
}

/// Creates a `Line` document, a newline followed by indentation.
#[must_use]
pub fn line() -> Document<'static> {
    Document::Line
}

/// Creates a `Nil` document, the empty document.
#[must_use]
pub fn nil() -> Document<'static> {
    Document::Nil
}

/// Creates a `Nest` document, increasing indentation for the inner document.
#[must_use]
pub fn nest(indent: isize, doc: Document<'_>) -> Document<'_> {
    Document::Nest(indent, Box::new(doc))
}

/// Joins documents with a separator between each pair.
#[must_use]
pub fn join<'a>(
    docs: impl IntoIterator<Item = Document<'a>>,
    separator: &Document<'a>,
) -> Document<'a> {
    let mut joined = Vec::new();
    for doc in docs {
        if !joined.is_empty() {
            joined.push(separator.clone());
        }
        joined.push(doc);
    }
    if joined.is_empty() {
        Document::Nil
    } else {
        Document::Vec(joined)
    }
}

impl Document<'_> {
    /// Renders the document to a string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut output = String::new();
        self.render_to(&mut output, 0);
        output
    }

    fn render_to(&self, output: &mut String, indent: isize) {
        match self {
            Document::Str(s) => output.push_str(s),
            Document::String(s) => output.push_str(s),
            Document::Nil => {}
            Document::Line => {
                output.push('\n');
                for _ in 0..indent {
                    output.push(' ');
                }
            }
            Document::Nest(extra, doc) => {
                doc.render_to(output, indent + extra);
            }
            Document::Vec(docs) => {
                for doc in docs {
                    doc.render_to(output, indent);
                }
            }
        }
    }
}
