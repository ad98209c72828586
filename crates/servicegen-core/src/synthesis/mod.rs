// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Service artifact synthesis.
//!
//! This module transforms one table's collected method descriptors into
//! two source-file models: the public service contract and its backing
//! implementation.
//!
//! # Architecture
//!
//! Both synthesizers run independently over the same descriptor snapshot
//! and share the leaf policies:
//!
//! - [`naming`] - derived identifiers (service/impl/mapper type names,
//!   delegation field name)
//! - [`wrapping`] - raw return types to the generic result envelope
//! - [`artifact`] - the tagged output model ([`ServiceArtifact`]) and the
//!   structured method bodies the [`crate::emit`] stage renders
//! - [`contract`] - the service-contract synthesizer
//! - [`implementation`] - the service-implementation synthesizer
//!
//! Synthesis is a pure, bounded computation: no I/O, no suspension, no
//! state beyond the caller's collector. Errors are fail-fast: a table
//! with broken configuration yields no partial artifact, and other tables
//! are unaffected.

pub mod artifact;
pub mod contract;
pub mod implementation;
pub mod naming;
pub mod wrapping;


#[cfg(test)]
mod property_tests;

use ecow::EcoString;
use thiserror::Error;
use tracing::debug;

use crate::descriptor::{MethodDescriptor, TableIdentity};
pub use artifact::{ArtifactKind, ServiceArtifact};

/// Errors that can occur during artifact synthesis.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SynthesisError {
    /// A required package name is absent from the host configuration.
    /// The artifact cannot be named, so the table is skipped with a
    /// diagnostic identifying the missing key.
    #[error("table `{table}`: missing required configuration `{key}`")]
    MissingConfiguration {
        /// Domain-object name of the offending table.
        table: EcoString,
        /// The configuration key to fix (`targetPackage`, …).
        key: &'static str,
    },

    /// The table identity carries an empty domain-object name; no derived
    /// identifier can be computed from it.
    #[error("empty domain object name")]
    EmptyDomainObjectName,

    /// A descriptor claims a collection return but supplies no element
    /// type. Surfaced, not silently defaulted.
    #[error("method `{method}`: collection return type without an element type")]
    InconsistentDescriptor {
        /// Name of the offending operation.
        method: EcoString,
    },
}

/// Result type for synthesis operations.
pub type Result<T> = std::result::Result<T, SynthesisError>;

/// Rejects descriptors that claim a collection return but name no element
/// type. Shared by both synthesizers; fail fast, no partial artifact.
pub(crate) fn ensure_consistent(descriptor: &MethodDescriptor) -> Result<()> {
    match &descriptor.return_type {
        crate::descriptor::ReturnType::CollectionOfEntity(element)
            if element.simple().is_empty() =>
        {
            Err(SynthesisError::InconsistentDescriptor {
                method: descriptor.name.clone(),
            })
        }
        _ => Ok(()),
    }
}

/// The two artifacts synthesized for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableArtifacts {
    /// The public service contract (interface).
    pub contract: ServiceArtifact,
    /// The backing service implementation (class).
    pub implementation: ServiceArtifact,
}

/// Synthesizes both artifacts for one table from its descriptor snapshot.
///
/// This is the main entry point. The snapshot normally comes from
/// [`crate::collector::MethodCollector::snapshot_and_reset`]; both
/// synthesizers read it, neither mutates it. An empty snapshot is valid
/// and yields degenerate (method-less) artifacts.
///
/// # Errors
///
/// Returns [`SynthesisError`] if the identity is missing a required
/// package name, carries an empty domain-object name, or a descriptor is
/// internally inconsistent. No partial artifacts are produced.
///
/// # Example
///
/// ```
/// use servicegen_core::descriptor::TableIdentity;
/// use servicegen_core::java_types::JavaType;
/// use servicegen_core::synthesis::synthesize_table;
///
/// let identity = TableIdentity::new("User", JavaType::new("com.a.domain.User"))
///     .with_target_package("com.a.service")
///     .with_target_impl_package("com.a.service.impl")
///     .with_mapper_package("com.a.dao");
/// let artifacts = synthesize_table(&identity, &[])?;
/// assert_eq!(artifacts.contract.type_name.qualified(), "com.a.service.UserService");
/// # Ok::<(), servicegen_core::synthesis::SynthesisError>(())
/// ```
pub fn synthesize_table(
    identity: &TableIdentity,
    descriptors: &[MethodDescriptor],
) -> Result<TableArtifacts> {
    debug!(
        table = %identity.domain_object_name,
        descriptors = descriptors.len(),
        "synthesizing service artifacts"
    );
    let contract = contract::synthesize(identity, descriptors)?;
    let implementation = implementation::synthesize(identity, descriptors)?;
    Ok(TableArtifacts {
        contract,
        implementation,
    })
}
