// Copyright 2025 the Stave Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout errors.

extern crate alloc;

use alloc::string::String;

use thiserror::Error;

/// Errors produced while computing bar chart layout.
///
/// Layout is a single-shot computation, so none of these are transient;
/// retrying with the same inputs fails the same way.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// The dataset has no points, so the value domain is undefined.
    #[error("empty dataset: the value domain is undefined")]
    EmptyData,
    /// A label outside the band scale's domain was queried.
    #[error("unknown label `{0}`")]
    UnknownLabel(String),
}
