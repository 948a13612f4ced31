//! # Submit Control State
//!
//! Derives the add-to-cart button's presentation from product availability
//! and the resolved variant.
//!
//! ## State Table
//! ```text
//! ┌────────────────────┬──────────────┬──────────┬───────────────────────────┐
//! │ State              │ Label        │ Disabled │ aria-label                │
//! ├────────────────────┼──────────────┼──────────┼───────────────────────────┤
//! │ OutOfStock         │ Out Of Stock │ yes      │ (none)                    │
//! │ SelectionRequired  │ Add To Cart  │ yes      │ Please select an option   │
//! │ Ready              │ Add To Cart  │ no       │ Add to cart               │
//! └────────────────────┴──────────────┴──────────┴───────────────────────────┘
//! ```
//!
//! ## Precedence
//! Availability is checked FIRST: an out-of-stock product shows
//! `OutOfStock` even when the selection fully resolves a variant.
//!
//! ## Enforcement
//! The disabled flag describes the control, it does not gate anything by
//! itself. The submit pipeline re-checks availability and resolution and
//! returns typed errors, so a host that submits anyway gets an error
//! instead of a crash.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::selection::SelectionState;
use crate::types::Product;

// =============================================================================
// Submit State
// =============================================================================

/// The three states of the add-to-cart submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SubmitState {
    /// Product is not available for sale. Selection is irrelevant.
    OutOfStock,
    /// Product is available but the selection does not resolve a variant.
    SelectionRequired,
    /// A concrete variant is resolved; submission may proceed.
    Ready,
}

impl SubmitState {
    /// Derives the control state from its two inputs.
    ///
    /// `selected_variant_id` is the resolver output for the current
    /// selection (see [`crate::selection::resolve_variant_id`]).
    pub fn derive(available_for_sale: bool, selected_variant_id: Option<&str>) -> Self {
        if !available_for_sale {
            return SubmitState::OutOfStock;
        }
        match selected_variant_id {
            None => SubmitState::SelectionRequired,
            Some(_) => SubmitState::Ready,
        }
    }

    /// Derives the control state for a product and selection in one step.
    pub fn for_product(product: &Product, selection: &SelectionState) -> Self {
        SubmitState::derive(
            product.available_for_sale,
            product.resolve_variant_id(selection),
        )
    }

    /// Whether the control is rendered disabled.
    #[inline]
    pub const fn is_disabled(&self) -> bool {
        matches!(self, SubmitState::OutOfStock | SubmitState::SelectionRequired)
    }

    /// Visible button label.
    #[inline]
    pub const fn label(&self) -> &'static str {
        match self {
            SubmitState::OutOfStock => "Out Of Stock",
            SubmitState::SelectionRequired | SubmitState::Ready => "Add To Cart",
        }
    }

    /// Accessible label for assistive technology.
    ///
    /// `OutOfStock` carries none: the visible label already says everything.
    /// The other two states differ only here, which is what lets a screen
    /// reader distinguish "pick an option first" from "ready to add".
    #[inline]
    pub const fn aria_label(&self) -> Option<&'static str> {
        match self {
            SubmitState::OutOfStock => None,
            SubmitState::SelectionRequired => Some("Please select an option"),
            SubmitState::Ready => Some("Add to cart"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
