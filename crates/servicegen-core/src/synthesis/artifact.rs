// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Synthesized artifact model.
//!
//! **DDD Context:** Service Synthesis
//!
//! The two artifacts produced per table share one tagged model rather than
//! a class hierarchy: a [`ServiceArtifact`] carries a [`ArtifactKind`] and
//! the handful of fields in which the kinds diverge (superinterface,
//! delegation field, method bodies) are simply absent on contracts.
//!
//! Method bodies are a structured intermediate ([`MethodBody`]) rendered to
//! text only by the [`crate::emit`] stage, so synthesis stays free of
//! formatting concerns and testable by structural assertion.

use camino::Utf8PathBuf;
use ecow::EcoString;
use std::collections::BTreeSet;
use std::fmt;

use crate::descriptor::Parameter;
use crate::java_types::{JavaType, runtime};

/// Which of the two per-table artifacts this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// The public service contract (interface).
    Contract,
    /// The backing service implementation (class).
    Implementation,
}

/// Source-level visibility of a generated declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// `public`
    Public,
    /// `private`
    Private,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => write!(f, "public"),
            Self::Private => write!(f, "private"),
        }
    }
}

/// A delegation call through the mapper field.
///
/// Argument names are taken verbatim and positionally from the source
/// descriptor; the call displays as `receiver.method(a, b)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegationCall {
    /// The delegation field name (`userMapper`).
    pub receiver: EcoString,
    /// The delegated method name, unchanged from the descriptor.
    pub method: EcoString,
    /// Parameter names, comma-joined on display.
    pub arguments: Vec<EcoString>,
}

impl DelegationCall {
    /// Creates a delegation call.
    #[must_use]
    pub fn new(
        receiver: impl Into<EcoString>,
        method: impl Into<EcoString>,
        arguments: Vec<EcoString>,
    ) -> Self {
        Self {
            receiver: receiver.into(),
            method: method.into(),
            arguments,
        }
    }
}

impl fmt::Display for DelegationCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}(", self.receiver, self.method)?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{argument}")?;
        }
        write!(f, ")")
    }
}

/// Structured method body, rendered by the emission stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodBody {
    /// `return DataStore.of(<call>);`
    PlainDelegation {
        /// The delegation call.
        call: DelegationCall,
    },
    /// Guarded paging preamble, the same delegation call, then an envelope
    /// built from the paging result's total count and row window.
    ///
    /// The paging context is an out-of-band signal of the data-access
    /// layer: armed immediately before the call, consumed immediately
    /// after, never persisted across methods.
    GuardedPaginatedDelegation {
        /// The delegation call (identical text to the base variant's).
        call: DelegationCall,
        /// Simple name of the row element type (`User` in `Page<User>`).
        element_type: EcoString,
    },
}

impl MethodBody {
    /// The delegation call shared by every body variant.
    #[must_use]
    pub fn call(&self) -> &DelegationCall {
        match self {
            Self::PlainDelegation { call } | Self::GuardedPaginatedDelegation { call, .. } => call,
        }
    }
}

/// A single method of a synthesized artifact.
///
/// The base variant of a collection method keeps the descriptor's name and
/// parameter list unchanged; the paginated variant differs only by the
/// inserted pagination parameter and, on implementations, its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMethod {
    /// Method name, unchanged from the descriptor.
    pub name: EcoString,
    /// Final parameter list.
    pub parameters: Vec<Parameter>,
    /// Wrapped (envelope) return type.
    pub return_type: JavaType,
    /// Declaration visibility.
    pub visibility: Visibility,
    /// Body, absent on contract methods.
    pub body: Option<MethodBody>,
}

impl GeneratedMethod {
    /// Creates a bodiless public method.
    #[must_use]
    pub fn new(
        name: impl Into<EcoString>,
        parameters: Vec<Parameter>,
        return_type: JavaType,
    ) -> Self {
        Self {
            name: name.into(),
            parameters,
            return_type,
            visibility: Visibility::Public,
            body: None,
        }
    }

    /// Attaches a body.
    #[must_use]
    pub fn with_body(mut self, body: MethodBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Derives the paginated overload: same name and return type, the
    /// pagination parameter inserted at index 1, no body.
    ///
    /// A zero-parameter method gets the pagination parameter appended
    /// instead, keeping the derivation total.
    #[must_use]
    pub fn paginated_variant(&self) -> Self {
        let mut parameters = self.parameters.clone();
        let index = parameters.len().min(1);
        parameters.insert(
            index,
            Parameter::new(runtime::PAGE_BOUNDS_PARAM, runtime::page_bounds()),
        );
        Self {
            name: self.name.clone(),
            parameters,
            return_type: self.return_type.clone(),
            visibility: self.visibility,
            body: None,
        }
    }
}

/// The delegation field of a service implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldModel {
    /// Field name (`userMapper`).
    pub name: EcoString,
    /// Field type (the mapper interface).
    pub ty: JavaType,
    /// Annotations (`@Autowired`).
    pub annotations: Vec<EcoString>,
    /// Declaration visibility.
    pub visibility: Visibility,
}

/// One synthesized source-file model.
///
/// Constructed fully populated by a synthesizer, never mutated afterwards
/// by this core. Method order is insertion order; the import set is
/// order-insensitive but iterates deterministically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceArtifact {
    /// Contract or implementation.
    pub kind: ArtifactKind,
    /// Fully qualified name of the generated type.
    pub type_name: JavaType,
    /// Type-level visibility.
    pub visibility: Visibility,
    /// Type-level annotations (`@Service` on implementations).
    pub annotations: Vec<EcoString>,
    /// Implemented contract, present on implementations only.
    pub super_interface: Option<JavaType>,
    /// Delegation fields, present on implementations only.
    pub fields: Vec<FieldModel>,
    /// Methods in collection order.
    pub methods: Vec<GeneratedMethod>,
    /// Qualified names this artifact must import.
    pub imports: BTreeSet<EcoString>,
    /// Project-directory token for the external renderer.
    pub target_project: Option<Utf8PathBuf>,
}
