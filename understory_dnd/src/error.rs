// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by [`try_droppable_over`](crate::resolve::try_droppable_over).

/// Which input rectangle failed validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RectRole {
    /// The dragged item's page-space border box.
    Dragged,
    /// The full page box of the droppable at this index in the input slice.
    Page(usize),
    /// The active rectangle of the droppable at this index in the input slice.
    Active(usize),
}

impl core::fmt::Display for RectRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Dragged => f.write_str("dragged box"),
            Self::Page(i) => write!(f, "page box of droppable #{i}"),
            Self::Active(i) => write!(f, "active rect of droppable #{i}"),
        }
    }
}

/// Malformed geometry handed to the resolver.
///
/// Both variants are upstream measurement bugs rather than "not over anything".
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    /// A coordinate was NaN or infinite.
    #[error("non-finite coordinate in {0}")]
    NonFinite(RectRole),
    /// `left > right` or `top > bottom`.
    #[error("inverted rectangle: {0}")]
    Inverted(RectRole),
}
