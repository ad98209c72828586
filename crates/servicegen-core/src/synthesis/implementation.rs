// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Service-implementation synthesis.
//!
//! Builds the backing class artifact for one table: a single delegation
//! field pointing at the data-access interface, one delegating method per
//! descriptor (two for collection returns), and the union of every import
//! the generated class needs.
//!
//! The delegation call expression is built once per descriptor, from the
//! descriptor's own parameter list, before any pagination parameter is
//! inserted into the signature; both variants of a collection method
//! share the exact same call text.

use std::collections::BTreeSet;

use super::artifact::{
    ArtifactKind, DelegationCall, FieldModel, GeneratedMethod, MethodBody, ServiceArtifact,
    Visibility,
};
use super::{Result, SynthesisError, ensure_consistent, naming, wrapping};
use crate::descriptor::{MethodDescriptor, TableIdentity};
use crate::java_types::runtime;

/// Synthesizes the service-implementation artifact.
///
/// The artifact declares the contract as its superinterface, carries the
/// service-exposure annotation, and holds exactly one injected delegation
/// field named after the mapper type. Even a zero-descriptor table yields
/// a valid field-only implementation.
///
/// Imports union the entity, mapper, contract, envelope, and annotation
/// types with every parameter type across all descriptors; the paging
/// request/result/trigger types are added only when at least one
/// collection-returning descriptor is present.
///
/// # Errors
///
/// Returns [`SynthesisError::MissingConfiguration`] naming the first
/// missing package key, [`SynthesisError::EmptyDomainObjectName`] for a
/// nameless table, and [`SynthesisError::InconsistentDescriptor`] for a
/// collection descriptor without an element type.
pub fn synthesize(
    identity: &TableIdentity,
    descriptors: &[MethodDescriptor],
) -> Result<ServiceArtifact> {
    let table = &identity.domain_object_name;
    let missing = |key: &'static str| SynthesisError::MissingConfiguration {
        table: table.clone(),
        key,
    };
    let target_package = identity
        .target_package
        .as_ref()
        .ok_or_else(|| missing("targetPackage"))?;
    let impl_package = identity
        .target_impl_package
        .as_ref()
        .ok_or_else(|| missing("targetImplPackage"))?;
    let mapper_package = identity
        .mapper_package
        .as_ref()
        .ok_or_else(|| missing("mapperPackage"))?;

    let type_name = naming::impl_type_name(impl_package, table)?;
    let contract_type = naming::service_type_name(target_package, table)?;
    let mapper_type = naming::mapper_type_name(mapper_package, table)?;

    let field = FieldModel {
        name: naming::field_name(mapper_type.simple()),
        ty: mapper_type.clone(),
        annotations: vec!["@Autowired".into()],
        visibility: Visibility::Private,
    };

    let entity_simple = identity.entity_type.simple();
    let mut methods = Vec::new();
    let mut imports = BTreeSet::new();
    let mut has_collection = false;

    for descriptor in descriptors {
        ensure_consistent(descriptor)?;
        for parameter in &descriptor.parameters {
            imports.insert(parameter.ty.qualified());
        }

        let call = DelegationCall::new(
            field.name.clone(),
            descriptor.name.clone(),
            descriptor
                .parameters
                .iter()
                .map(|parameter| parameter.name.clone())
                .collect(),
        );
        let wrapped = wrapping::wrap(&descriptor.return_type, entity_simple);
        let base = GeneratedMethod::new(
            descriptor.name.clone(),
            descriptor.parameters.clone(),
            wrapped,
        );

        if descriptor.return_type.is_collection() {
            has_collection = true;
            let paginated = base
                .paginated_variant()
                .with_body(MethodBody::GuardedPaginatedDelegation {
                    call: call.clone(),
                    element_type: entity_simple.into(),
                });
            methods.push(base.with_body(MethodBody::PlainDelegation { call }));
            methods.push(paginated);
        } else {
            methods.push(base.with_body(MethodBody::PlainDelegation { call }));
        }
    }

    imports.insert(identity.entity_type.qualified());
    imports.insert(mapper_type.qualified());
    imports.insert(contract_type.qualified());
    imports.insert(runtime::envelope().qualified());
    imports.insert(runtime::autowired().qualified());
    imports.insert(runtime::service_annotation().qualified());
    if has_collection {
        imports.insert(runtime::page_bounds().qualified());
        imports.insert(runtime::page().qualified());
        imports.insert(runtime::page_helper().qualified());
    }

    Ok(ServiceArtifact {
        kind: ArtifactKind::Implementation,
        type_name,
        visibility: Visibility::Public,
        annotations: vec!["@Service".into()],
        super_interface: Some(contract_type),
        fields: vec![field],
        methods,
        imports,
        target_project: identity.target_impl_project.clone(),
    })
}
