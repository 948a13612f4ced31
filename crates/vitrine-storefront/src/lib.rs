//! # Vitrine Storefront Library
//!
//! Server-side storefront components for Vitrine: the add-to-cart form,
//! cart state, and the actions a host application exposes as endpoints.
//!
//! ## Module Organization
//! ```text
//! vitrine_storefront/
//! ├── lib.rs             ◄─── You are here (crate exports)
//! ├── state/
//! │   ├── mod.rs         ◄─── State type exports
//! │   ├── cart.rs        ◄─── Cart state management
//! │   └── config.rs      ◄─── Storefront configuration
//! ├── actions/
//! │   ├── mod.rs         ◄─── Action exports
//! │   ├── add_to_cart.rs ◄─── Add-to-cart form & submit pipeline
//! │   └── cart.rs        ◄─── Cart query/mutation actions
//! ├── render.rs          ◄─── Markup for the submit control
//! └── error.rs           ◄─── API error type for actions
//! ```
//!
//! ## Host Integration
//! The host application owns one long-lived state object per concern and
//! wires them into an [`AddToCartForm`] per product page:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Host Integration                                │
//! │                                                                         │
//! │  ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐    │
//! │  │    CartState     │ │  ActionState<A>  │ │  StorefrontConfig    │    │
//! │  │                  │ │                  │ │                      │    │
//! │  │  • Current cart  │ │  • Server action │ │  • Store name        │    │
//! │  │  • Line items    │ │  • Last message  │ │  • Currency          │    │
//! │  │  • Totals        │ │                  │ │  • Default quantity  │    │
//! │  └──────────────────┘ └──────────────────┘ └──────────────────────┘    │
//! │                                                                         │
//! │  One AddToCartForm per product page wires all three together.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! Deriving and rendering the submit control is synchronous; only
//! [`AddToCartForm::submit`] awaits the server action.
//!
//! ```
//! use vitrine_core::{Product, ProductVariant, SelectionState, SubmitState};
//! use vitrine_storefront::render;
//!
//! let product = Product {
//!     id: "gid://shop/Product/1".to_string(),
//!     handle: "tote-bag".to_string(),
//!     title: "Tote Bag".to_string(),
//!     available_for_sale: true,
//!     variants: vec![ProductVariant {
//!         id: "gid://shop/ProductVariant/11".to_string(),
//!         title: "Default".to_string(),
//!         selected_options: vec![],
//!         price_cents: 1999,
//!     }],
//! };
//!
//! // A single-variant product is ready even with nothing selected.
//! let state = SubmitState::for_product(&product, &SelectionState::new());
//! assert_eq!(state, SubmitState::Ready);
//!
//! let html = render::add_to_cart_button(state).into_string();
//! assert!(html.contains("Add To Cart"));
//! ```

pub mod actions;
pub mod error;
pub mod render;
pub mod state;

pub use actions::{
    get_cart, ActionState, AddItemAction, AddItemError, AddToCartForm, AddToCartReceipt,
    CartResponse,
};
pub use error::{ErrorCode, StorefrontError};
pub use state::{Cart, CartLine, CartState, CartTotals, StorefrontConfig};
