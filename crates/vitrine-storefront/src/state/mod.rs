//! # State Module
//!
//! Holds the shared state behind the product page.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can mock/inject individual states
//! 3. **Clearer Signatures**: Callers declare exactly what state they need
//! 4. **Reduced Contention**: Independent states don't block each other
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Host Application                           │   │
//! │  │  let cart = CartState::new();                                   │   │
//! │  │  let config = StorefrontConfig::from_env();                     │   │
//! │  │  AddToCartForm::new(product, cart.clone(), action, config);     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │          ┌───────────────────┴───────────────┐                         │
//! │          ▼                                   ▼                          │
//! │  ┌──────────────────┐             ┌──────────────────────┐             │
//! │  │    CartState     │             │  StorefrontConfig    │             │
//! │  │                  │             │                      │             │
//! │  │  Arc<Mutex<      │             │  currency            │             │
//! │  │    Cart          │             │  store_name          │             │
//! │  │  >>              │             │  default_quantity    │             │
//! │  └──────────────────┘             └──────────────────────┘             │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CartState: Protected by Arc<Mutex<T>> for exclusive access          │
//! │  • StorefrontConfig: Read-only after initialization                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;

pub use cart::{Cart, CartLine, CartState, CartTotals};
pub use config::StorefrontConfig;
