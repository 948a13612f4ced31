//! # vitrine-core: Pure Storefront Logic for Vitrine
//!
//! This crate is the **heart** of the Vitrine product page. It contains the
//! variant resolver and the submit control as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Vitrine Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Product Page (TypeScript)                       │   │
//! │  │    Option selector ──► Add-to-cart button ──► Cart drawer      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              vitrine-storefront (pipeline layer)                │   │
//! │  │    AddToCartForm::submit, cart actions, HTML rendering          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vitrine-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ selection │  │  control  │  │ validation│  │   │
//! │  │   │  Product  │  │  resolve  │  │  Submit   │  │   rules   │  │   │
//! │  │   │  Variant  │  │  variant  │  │  State    │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO SHARED STATE • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductVariant, SelectedOption)
//! - [`selection`] - Option selection state and variant resolution
//! - [`control`] - Submit control state machine
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Input and catalog validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, shared state access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use vitrine_core::control::SubmitState;
//! use vitrine_core::selection::SelectionState;
//! use vitrine_core::types::{Product, ProductVariant, SelectedOption};
//!
//! let product = Product {
//!     id: "prod-1".into(),
//!     handle: "acme-shirt".into(),
//!     title: "Acme Shirt".into(),
//!     available_for_sale: true,
//!     variants: vec![ProductVariant {
//!         id: "var-m".into(),
//!         title: "M".into(),
//!         selected_options: vec![SelectedOption::new("Size", "M")],
//!         price_cents: 1999,
//!     }],
//! };
//!
//! // Single-variant products resolve without any selection
//! let selection = SelectionState::new();
//! assert_eq!(product.resolve_variant_id(&selection), Some("var-m"));
//! assert_eq!(SubmitState::for_product(&product, &selection), SubmitState::Ready);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod control;
pub mod error;
pub mod money;
pub mod selection;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use vitrine_core::Money` instead of
// `use vitrine_core::money::Money`

pub use control::SubmitState;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use selection::{resolve_variant, resolve_variant_id, SelectionState};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct lines allowed in a single cart
///
/// ## Business Reason
/// Prevents runaway carts and keeps checkout payloads bounded.
/// Can be made configurable per-store in future versions.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity of a single variant in the cart
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10)
/// Configurable per-store in future versions.
pub const MAX_LINE_QUANTITY: i64 = 999;

/// Maximum accepted length of a backend variant id, in bytes
///
/// Backend ids are opaque URIs; anything beyond this is malformed input.
pub const MAX_VARIANT_ID_LENGTH: usize = 255;
