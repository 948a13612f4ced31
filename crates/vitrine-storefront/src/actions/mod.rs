//! # Storefront Actions Module
//!
//! Everything the product page can do: read and mutate the cart, and run
//! the add-to-cart submit pipeline.
//!
//! ## Action Organization
//! ```text
//! actions/
//! ├── mod.rs          ◄─── You are here (exports)
//! ├── cart.rs         ◄─── Cart drawer actions (read, update, remove, clear)
//! └── add_to_cart.rs  ◄─── Submit pipeline + server-action seam
//! ```
//!
//! ## How Actions Connect
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Action Flow                                          │
//! │                                                                         │
//! │  Product page frontend                                                  │
//! │  ─────────────────────                                                  │
//! │  const receipt = await form.submit(selection);                          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Rust pipeline                                                          │
//! │  ─────────────                                                          │
//! │  AddToCartForm::submit(                                                 │
//! │      selection: &SelectionState,  ◄── Injected by the host             │
//! │      quantity: Option<i64>,       ◄── None = configured default        │
//! │  ) -> Result<AddToCartReceipt, StorefrontError>                         │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Frontend receives: { submissionId, variantId, quantity, cart }         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each action declares only the state it needs:
//! ```rust,ignore
//! // Only needs the cart
//! fn get_cart(cart: &CartState) -> CartResponse
//!
//! // The form holds product, cart handle, action and config together
//! AddToCartForm::new(product, cart.clone(), action, config)
//! ```

pub mod add_to_cart;
pub mod cart;

pub use add_to_cart::{
    ActionState, AddItemAction, AddItemError, AddToCartForm, AddToCartReceipt,
};
pub use cart::{clear_cart, get_cart, remove_from_cart, update_cart_line, CartResponse};
