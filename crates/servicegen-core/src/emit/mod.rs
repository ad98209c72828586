// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Method-body text emission.
//!
//! Synthesis produces structured [`MethodBody`] values; this module is the
//! separate emission stage that turns them into body text for the host's
//! source renderer. Keeping the two apart lets synthesis be tested
//! structurally while emission is tested against exact output.
//!
//! The emitted text is relative to the method-body indentation level; the
//! host renderer indents the whole block when placing it inside a method.

pub mod document;

use crate::docvec;
use crate::synthesis::artifact::MethodBody;
use document::{Document, INDENT, line, nest};

/// Builds the document for a structured method body.
#[must_use]
pub fn body_document(body: &MethodBody) -> Document<'static> {
    match body {
        MethodBody::PlainDelegation { call } => {
            docvec!["return DataStore.of(", call.to_string(), ");"]
        }
        MethodBody::GuardedPaginatedDelegation { call, element_type } => {
            let order_by_guard = docvec![
                "if (pageBounds.getOrderBy() != null && !pageBounds.getOrderBy().equalsIgnoreCase(\"\")) {",
                nest(
                    INDENT,
                    docvec![
                        line(),
                        "PageHelper.startPage(pageBounds.getStartIndex(), pageBounds.getPageSize(), pageBounds.getOrderBy());",
                    ]
                ),
                line(),
                "} else {",
                nest(
                    INDENT,
                    docvec![
                        line(),
                        "PageHelper.startPage(pageBounds.getStartIndex(), pageBounds.getPageSize());",
                    ]
                ),
                line(),
                "}",
            ];
            docvec![
                "if (pageBounds != null) {",
                nest(INDENT, docvec![line(), order_by_guard]),
                line(),
                "}",
                line(),
                format!("Page<{element_type}> page = (Page<{element_type}>) {call};"),
                line(),
                "return DataStore.of(page.getTotal(), page.getResult());",
            ]
        }
    }
}

/// Renders a structured method body to text.
#[must_use]
pub fn render_body(body: &MethodBody) -> String {
    body_document(body).render()
}
