// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for service synthesis.
//!
//! These verify the synthesis laws over arbitrary well-formed input:
//!
//! 1. **Collector order preservation** — snapshots replay recording order
//! 2. **`field_name` locality** — at most the first byte changes, and the
//!    function is idempotent
//! 3. **Method-count law** — contract methods = descriptors + collection
//!    descriptors
//! 4. **Synthesis never panics** — errors are returned, not thrown

use proptest::prelude::*;

use crate::collector::MethodCollector;
use crate::descriptor::{MethodDescriptor, Parameter, ReturnType, TableIdentity};
use crate::java_types::{JavaType, PrimitiveKind};
use crate::synthesis::{naming, synthesize_table};

fn identifier() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9]{0,12}"
}

fn return_type() -> impl Strategy<Value = ReturnType> {
    prop_oneof![
        Just(ReturnType::Void),
        prop_oneof![
            Just(PrimitiveKind::Int),
            Just(PrimitiveKind::Long),
            Just(PrimitiveKind::Boolean),
        ]
        .prop_map(ReturnType::Primitive),
        identifier().prop_map(|name| ReturnType::Entity(JavaType::new(format!("com.a.domain.{name}")))),
        identifier()
            .prop_map(|name| ReturnType::CollectionOfEntity(JavaType::new(format!("com.a.domain.{name}")))),
    ]
}

fn descriptor() -> impl Strategy<Value = MethodDescriptor> {
    (
        identifier(),
        prop::collection::vec(identifier(), 0..3),
        return_type(),
    )
        .prop_map(|(name, params, return_type)| {
            let parameters = params
                .into_iter()
                .enumerate()
                .map(|(i, p)| Parameter::new(format!("{p}{i}"), JavaType::new("com.a.domain.User")))
                .collect();
            MethodDescriptor::new(name, parameters, return_type)
        })
}

fn identity() -> TableIdentity {
    TableIdentity::new("User", JavaType::new("com.a.domain.User"))
        .with_target_package("com.a.service")
        .with_target_impl_package("com.a.service.impl")
        .with_mapper_package("com.a.dao")
}

proptest! {
    /// Property 1: a snapshot replays the recorded sequence exactly, and
    /// the collector is empty afterwards.
    #[test]
    fn collector_preserves_recording_order(descriptors in prop::collection::vec(descriptor(), 0..12)) {
        let mut collector = MethodCollector::new();
        for d in &descriptors {
            collector.record(d.clone());
        }
        let snapshot = collector.snapshot_and_reset();
        prop_assert_eq!(&snapshot, &descriptors);
        prop_assert!(collector.is_empty());
    }

    /// Property 2: `field_name` changes at most the first byte.
    #[test]
    fn field_name_touches_first_byte_only(name in "[A-Za-z_][A-Za-z0-9_]{0,16}") {
        let derived = naming::field_name(&name);
        prop_assert_eq!(derived.len(), name.len());
        prop_assert_eq!(&derived[1..], &name[1..]);
        prop_assert_eq!(
            derived.chars().next().map(|c| c.to_ascii_lowercase()),
            name.chars().next().map(|c| c.to_ascii_lowercase())
        );
    }

    /// Property 2b: `field_name` is idempotent.
    #[test]
    fn field_name_is_idempotent(name in "[A-Za-z_][A-Za-z0-9_]{0,16}") {
        let once = naming::field_name(&name);
        let twice = naming::field_name(&once);
        prop_assert_eq!(once, twice);
    }

    /// Property 3: the contract grows one extra signature per
    /// collection-returning descriptor, and both artifacts stay in step.
    #[test]
    fn method_count_law(descriptors in prop::collection::vec(descriptor(), 0..12)) {
        let collections = descriptors
            .iter()
            .filter(|d| d.return_type.is_collection())
            .count();
        let artifacts = synthesize_table(&identity(), &descriptors).unwrap();
        prop_assert_eq!(
            artifacts.contract.methods.len(),
            descriptors.len() + collections
        );
        prop_assert_eq!(
            artifacts.implementation.methods.len(),
            artifacts.contract.methods.len()
        );
    }

    /// Property 4: synthesis returns Ok or Err, never panics, for
    /// arbitrary identifier-ish table names and descriptor lists.
    #[test]
    fn synthesize_never_panics(
        table in "[A-Za-z0-9]{0,12}",
        descriptors in prop::collection::vec(descriptor(), 0..8),
    ) {
        let identity = TableIdentity::new(
            table.as_str(),
            JavaType::new(format!("com.a.domain.{table}")),
        )
        .with_target_package("com.a.service")
        .with_target_impl_package("com.a.service.impl")
        .with_mapper_package("com.a.dao");
        let _result = synthesize_table(&identity, &descriptors);
    }
}
