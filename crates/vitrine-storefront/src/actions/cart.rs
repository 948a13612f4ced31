//! # Cart Actions
//!
//! Read and mutate the local cart from the cart drawer.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────────────────────┐        │
//! │  │  Empty   │────►│ In Cart  │────►│  Checkout (backend owns  │        │
//! │  │  Cart    │     │          │     │  everything from here)   │        │
//! │  └──────────┘     └──────────┘     └──────────────────────────┘        │
//! │                        │                                                │
//! │                  AddToCartForm::submit                                  │
//! │                  update_cart_line                                       │
//! │                  remove_from_cart                                       │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;
use vitrine_core::CoreError;

use crate::error::StorefrontError;
use crate::state::{Cart, CartLine, CartState, CartTotals};

/// Cart response including lines and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            lines: cart.lines.clone(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Gets the current cart contents.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Cart drawer (slides in from the page edge)                            │
/// │                                                                         │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  CART                                              3 items     │    │
/// │  ├────────────────────────────────────────────────────────────────┤    │
/// │  │  Acme Shirt - Black / M   x2              $59.98              │    │
/// │  │  Acme Mug                 x1              $12.49              │    │
/// │  ├────────────────────────────────────────────────────────────────┤    │
/// │  │  Subtotal                                 $72.47              │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// │                                                                         │
/// │  get_cart(&cart) → { lines: [...], totals: {...} }                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Returns
/// Current cart with lines and calculated totals
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart action");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Updates the quantity of a line in the cart.
///
/// ## Behavior
/// - Quantity 0: removes the line
/// - Quantity > max: returns error
///
/// ## Arguments
/// * `variant_id` - Variant whose line to update
/// * `quantity` - New quantity (0 to remove)
///
/// ## Returns
/// Updated cart
pub fn update_cart_line(
    cart: &CartState,
    variant_id: &str,
    quantity: i64,
) -> Result<CartResponse, StorefrontError> {
    debug!(variant_id = %variant_id, quantity = %quantity, "update_cart_line action");

    let result = cart.with_cart_mut(|c| {
        c.update_quantity(variant_id, quantity)?;
        Ok::<CartResponse, CoreError>(CartResponse::from(&*c))
    });

    result.map_err(StorefrontError::from)
}

/// Removes a line from the cart.
///
/// ## Arguments
/// * `variant_id` - Variant whose line to remove
///
/// ## Returns
/// Updated cart
pub fn remove_from_cart(
    cart: &CartState,
    variant_id: &str,
) -> Result<CartResponse, StorefrontError> {
    debug!(variant_id = %variant_id, "remove_from_cart action");

    let result = cart.with_cart_mut(|c| {
        c.remove_line(variant_id)?;
        Ok::<CartResponse, CoreError>(CartResponse::from(&*c))
    });

    result.map_err(StorefrontError::from)
}

/// Clears all lines from the cart.
///
/// ## When Used
/// - Shopper empties the cart
/// - After checkout completes (new session)
///
/// ## Returns
/// Empty cart
pub fn clear_cart(cart: &CartState) -> CartResponse {
    debug!("clear_cart action");

    cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::from(&*c)
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
