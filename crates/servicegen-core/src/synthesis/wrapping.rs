// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Return-type envelope wrapping.
//!
//! Every generated service method returns the same generic result
//! envelope, insulating callers from the data-access layer's raw return
//! shapes. The rule is unconditional and classifies only the declared
//! return-type tag: primitives are boxed to their wrapper form; entity,
//! collection, and (degenerate) void returns all wrap the table's entity
//! type name.

use crate::descriptor::ReturnType;
use crate::java_types::{JavaType, runtime};

/// Wraps a raw return type into the generic result envelope.
///
/// - `Primitive(kind)` → `DataStore<Boxed(kind)>` (e.g. an `int` count
///   becomes `DataStore<Integer>`)
/// - everything else → `DataStore<entity_simple_name>`
///
/// The result is an unqualified signature type; the envelope's backing
/// import is recorded separately at the artifact level.
#[must_use]
pub fn wrap(return_type: &ReturnType, entity_simple_name: &str) -> JavaType {
    let envelope = JavaType::simple_name(runtime::envelope().simple());
    match return_type {
        ReturnType::Primitive(kind) => {
            envelope.with_argument(JavaType::simple_name(kind.boxed()))
        }
        ReturnType::Void | ReturnType::Entity(_) | ReturnType::CollectionOfEntity(_) => {
            envelope.with_argument(JavaType::simple_name(entity_simple_name))
        }
    }
}
