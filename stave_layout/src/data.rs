// Copyright 2025 the Stave Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input data model.

extern crate alloc;

use alloc::string::String;

/// A single labeled value.
///
/// Input order is significant: it fixes the left-to-right order of bands on
/// the category axis. Labels need not be unique, but duplicates collapse
/// onto the same band (see [`crate::ScaleBand`]). Values are expected to be
/// finite; the engine does not validate this.
#[derive(Clone, Debug, PartialEq)]
pub struct Datum {
    /// Category label.
    pub label: String,
    /// Numeric value. May be negative or zero.
    pub value: f64,
}

impl Datum {
    /// Creates a datum.
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}
