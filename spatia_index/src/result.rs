// Copyright 2025 the Spatia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Destination containers for query results.

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

/// A container a query can write its results into.
///
/// Sequences keep every hit, so an object stored as several fragments or cell
/// copies can show up more than once. Sets collapse those duplicates.
pub trait ResultSet<O> {
    /// Add one hit.
    fn store(&mut self, object: O);
}

impl<O> ResultSet<O> for Vec<O> {
    fn store(&mut self, object: O) {
        self.push(object);
    }
}

impl<O> ResultSet<O> for VecDeque<O> {
    fn store(&mut self, object: O) {
        self.push_back(object);
    }
}

impl<O: Ord> ResultSet<O> for BTreeSet<O> {
    fn store(&mut self, object: O) {
        self.insert(object);
    }
}

impl<O: Eq + Hash, S: BuildHasher> ResultSet<O> for HashSet<O, S> {
    fn store(&mut self, object: O) {
        self.insert(object);
    }
}
