// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Service-layer synthesis core.
//!
//! This crate contains the core synthesis functionality:
//! - Descriptor collection (per-table accumulation of upstream CRUD hooks)
//! - Naming policy (derived service/implementation/mapper identifiers)
//! - Return-type wrapping (the generic result envelope)
//! - Artifact synthesis (service contract + backing implementation models)
//! - Body emission (structured delegation bodies to text)
//!
//! The host tool drives it per table: record each upstream-generated
//! method descriptor into a [`collector::MethodCollector`], drain the
//! snapshot at end-of-table, and hand it to
//! [`synthesis::synthesize_table`] together with the table's identity.
//! The two returned [`synthesis::ServiceArtifact`] models carry
//! everything an external renderer needs to emit compilable source.

pub mod collector;
pub mod config;
pub mod descriptor;
pub mod emit;
pub mod java_types;
pub mod synthesis;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::collector::MethodCollector;
    pub use crate::descriptor::{MethodDescriptor, Parameter, ReturnType, TableIdentity};
    pub use crate::java_types::{JavaType, PrimitiveKind};
    pub use crate::synthesis::{ServiceArtifact, SynthesisError, TableArtifacts, synthesize_table};
}
