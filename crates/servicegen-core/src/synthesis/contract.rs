// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Service-contract synthesis.
//!
//! Builds the public interface artifact for one table: every descriptor
//! becomes a bodiless signature with its return type wrapped in the result
//! envelope, and every collection-returning descriptor additionally gets a
//! pagination overload directly after its base signature.

use std::collections::BTreeSet;

use super::artifact::{ArtifactKind, GeneratedMethod, ServiceArtifact, Visibility};
use super::{Result, SynthesisError, ensure_consistent, naming, wrapping};
use crate::descriptor::{MethodDescriptor, TableIdentity};
use crate::java_types::runtime;

/// Synthesizes the service-contract artifact.
///
/// Method order mirrors descriptor order; for a collection-returning
/// descriptor the base signature comes first and the pagination overload
/// (same name, pagination parameter at index 1, same wrapped return type)
/// directly after it. An empty descriptor list yields a valid zero-method
/// contract.
///
/// Imports are table-level: the entity type, the envelope's backing type,
/// and the pagination-parameter type are declared once, whether or not a
/// particular descriptor produced a pagination overload.
///
/// # Errors
///
/// Returns [`SynthesisError::MissingConfiguration`] when the contract
/// package is not configured, [`SynthesisError::EmptyDomainObjectName`]
/// for a nameless table, and [`SynthesisError::InconsistentDescriptor`]
/// for a collection descriptor without an element type.
pub fn synthesize(
    identity: &TableIdentity,
    descriptors: &[MethodDescriptor],
) -> Result<ServiceArtifact> {
    let target_package = identity.target_package.as_ref().ok_or_else(|| {
        SynthesisError::MissingConfiguration {
            table: identity.domain_object_name.clone(),
            key: "targetPackage",
        }
    })?;
    let type_name = naming::service_type_name(target_package, &identity.domain_object_name)?;
    let entity_simple = identity.entity_type.simple();

    let mut methods = Vec::new();
    for descriptor in descriptors {
        ensure_consistent(descriptor)?;
        let wrapped = wrapping::wrap(&descriptor.return_type, entity_simple);
        let base = GeneratedMethod::new(
            descriptor.name.clone(),
            descriptor.parameters.clone(),
            wrapped,
        );
        if descriptor.return_type.is_collection() {
            let paginated = base.paginated_variant();
            methods.push(base);
            methods.push(paginated);
        } else {
            methods.push(base);
        }
    }

    let mut imports = BTreeSet::new();
    imports.insert(identity.entity_type.qualified());
    imports.insert(runtime::envelope().qualified());
    imports.insert(runtime::page_bounds().qualified());

    Ok(ServiceArtifact {
        kind: ArtifactKind::Contract,
        type_name,
        visibility: Visibility::Public,
        annotations: Vec::new(),
        super_interface: None,
        fields: Vec::new(),
        methods,
        imports,
        target_project: identity.target_project.clone(),
    })
}
