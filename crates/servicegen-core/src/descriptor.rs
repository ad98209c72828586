// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Input model for service synthesis.
//!
//! The upstream generator introspects a table, produces data-access method
//! signatures, and delivers them here as opaque [`MethodDescriptor`] values
//! (one per CRUD operation hook). A [`TableIdentity`] bundles everything
//! the synthesizers need to name and place the two artifacts for a table.
//!
//! Descriptors are immutable values: this core classifies their return-type
//! tag to decide wrapping and pagination but never re-derives the tag and
//! never inspects business semantics.

use camino::Utf8PathBuf;
use ecow::EcoString;

use crate::java_types::{JavaType, PrimitiveKind};

/// A single formal parameter of a data-access method.
///
/// Names and order are preserved verbatim into delegation calls; the core
/// never renames or reorders parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// The parameter name as declared upstream.
    pub name: EcoString,
    /// The parameter type.
    pub ty: JavaType,
}

impl Parameter {
    /// Creates a parameter.
    #[must_use]
    pub fn new(name: impl Into<EcoString>, ty: JavaType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// The return-type tag of a data-access method.
///
/// Assigned once by the upstream generator and never re-derived here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnType {
    /// No return value. Degenerate but observed in input; wrapped like an
    /// entity return.
    Void,
    /// A scalar primitive (row count, affected rows, …).
    Primitive(PrimitiveKind),
    /// A single entity row.
    Entity(JavaType),
    /// A list of entity rows; triggers the pagination overload.
    CollectionOfEntity(JavaType),
}

impl ReturnType {
    /// Whether this is a collection-of-entity return.
    #[must_use]
    pub fn is_collection(&self) -> bool {
        matches!(self, Self::CollectionOfEntity(_))
    }
}

/// An opaque description of one data-access operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    /// The operation name (`insert`, `selectByCdt`, …).
    pub name: EcoString,
    /// Ordered formal parameters.
    pub parameters: Vec<Parameter>,
    /// The upstream-assigned return-type tag.
    pub return_type: ReturnType,
}

impl MethodDescriptor {
    /// Creates a descriptor.
    #[must_use]
    pub fn new(
        name: impl Into<EcoString>,
        parameters: Vec<Parameter>,
        return_type: ReturnType,
    ) -> Self {
        Self {
            name: name.into(),
            parameters,
            return_type,
        }
    }
}

/// Identity and placement of one table's generated service layer.
///
/// Supplied by the host: the domain-object name and entity type come from
/// table introspection, the packages and project tokens from the host's
/// generator configuration (see [`crate::config::ServiceLayerConfig`]).
/// Read-only to this core.
///
/// Package fields are optional because host configuration can omit them;
/// the synthesizers surface a [`crate::synthesis::SynthesisError`] for a
/// missing package rather than guessing a name.
///
/// # Example
///
/// ```
/// use servicegen_core::descriptor::TableIdentity;
/// use servicegen_core::java_types::JavaType;
///
/// let identity = TableIdentity::new("User", JavaType::new("com.a.domain.User"))
///     .with_target_package("com.a.service")
///     .with_target_impl_package("com.a.service.impl")
///     .with_mapper_package("com.a.dao");
/// assert_eq!(identity.domain_object_name, "User");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableIdentity {
    /// The table's domain-object name (`User`, `OrderItem`, …).
    pub domain_object_name: EcoString,
    /// The all-fields entity type computed by upstream introspection.
    pub entity_type: JavaType,
    /// Package of the service contract.
    pub target_package: Option<EcoString>,
    /// Package of the service implementation.
    pub target_impl_package: Option<EcoString>,
    /// Package of the backing data-access interface.
    pub mapper_package: Option<EcoString>,
    /// Project-directory token stamped onto the contract artifact.
    pub target_project: Option<Utf8PathBuf>,
    /// Project-directory token stamped onto the implementation artifact.
    pub target_impl_project: Option<Utf8PathBuf>,
}

impl TableIdentity {
    /// Creates an identity with no placement configuration attached.
    #[must_use]
    pub fn new(domain_object_name: impl Into<EcoString>, entity_type: JavaType) -> Self {
        Self {
            domain_object_name: domain_object_name.into(),
            entity_type,
            target_package: None,
            target_impl_package: None,
            mapper_package: None,
            target_project: None,
            target_impl_project: None,
        }
    }

    /// Sets the service-contract package.
    #[must_use]
    pub fn with_target_package(mut self, package: impl Into<EcoString>) -> Self {
        self.target_package = Some(package.into());
        self
    }

    /// Sets the service-implementation package.
    #[must_use]
    pub fn with_target_impl_package(mut self, package: impl Into<EcoString>) -> Self {
        self.target_impl_package = Some(package.into());
        self
    }

    /// Sets the data-access interface package.
    #[must_use]
    pub fn with_mapper_package(mut self, package: impl Into<EcoString>) -> Self {
        self.mapper_package = Some(package.into());
        self
    }

    /// Sets the contract's project-directory token.
    #[must_use]
    pub fn with_target_project(mut self, project: impl Into<Utf8PathBuf>) -> Self {
        self.target_project = Some(project.into());
        self
    }

    /// Sets the implementation's project-directory token.
    #[must_use]
    pub fn with_target_impl_project(mut self, project: impl Into<Utf8PathBuf>) -> Self {
        self.target_impl_project = Some(project.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn return_type_collection_classification() {
        let user = JavaType::new("com.a.domain.User");
        assert!(ReturnType::CollectionOfEntity(user.clone()).is_collection());
        assert!(!ReturnType::Entity(user).is_collection());
        assert!(!ReturnType::Primitive(PrimitiveKind::Int).is_collection());
        assert!(!ReturnType::Void.is_collection());
    }

    #[test]
    fn identity_builder_chains() {
        let identity = TableIdentity::new("User", JavaType::new("com.a.domain.User"))
            .with_target_package("com.a.service")
            .with_target_impl_package("com.a.service.impl")
            .with_mapper_package("com.a.dao")
            .with_target_project("src/main/java")
            .with_target_impl_project("impl/src/main/java");

        assert_eq!(identity.target_package.as_deref(), Some("com.a.service"));
        assert_eq!(identity.mapper_package.as_deref(), Some("com.a.dao"));
        assert_eq!(
            identity.target_impl_project.as_deref(),
            Some(camino::Utf8Path::new("impl/src/main/java"))
        );
    }

    #[test]
    fn identity_defaults_to_no_placement() {
        let identity = TableIdentity::new("User", JavaType::new("com.a.domain.User"));
        assert!(identity.target_package.is_none());
        assert!(identity.target_impl_package.is_none());
        assert!(identity.mapper_package.is_none());
    }
}
