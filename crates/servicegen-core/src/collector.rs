// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Per-table method descriptor accumulation.
//!
//! This module provides the [`MethodCollector`] aggregate which gathers
//! the descriptors the upstream generator emits through its per-operation
//! hooks, in hook-invocation order, until the table is complete.
//!
//! One collector instance belongs to exactly one synthesis pass. There is
//! no ambient singleton: a host processing tables on independent passes
//! owns one collector per pass. The buffer covers a single table's window
//! and must be drained with [`MethodCollector::snapshot_and_reset`] before
//! the next table's hooks begin.
//!
//! Accumulation never fails and never rejects input; order is never
//! resorted, since generated files are expected to list methods in hook
//! order.

use crate::descriptor::MethodDescriptor;

/// Accumulates one table's method descriptors between hook invocations.
#[derive(Debug, Default)]
pub struct MethodCollector {
    methods: Vec<MethodDescriptor>,
}

impl MethodCollector {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a descriptor to the current table's buffer.
    ///
    /// Side effect only; accepts every descriptor.
    pub fn record(&mut self, descriptor: MethodDescriptor) {
        self.methods.push(descriptor);
    }

    /// Returns the accumulated descriptors in recording order and clears
    /// the buffer for the next table.
    ///
    /// An empty buffer yields an empty vector, not an error.
    pub fn snapshot_and_reset(&mut self) -> Vec<MethodDescriptor> {
        std::mem::take(&mut self.methods)
    }

    /// Number of descriptors recorded since the last snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Whether nothing has been recorded since the last snapshot.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}
