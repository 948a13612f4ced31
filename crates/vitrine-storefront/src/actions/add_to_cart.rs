//! # Add-to-Cart Pipeline
//!
//! The submit side of the product page: resolves the selection, mutates the
//! local cart, and invokes the server add-item action in sequence.
//!
//! ## Submit Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Shopper clicks "Add To Cart"                                           │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  AddToCartForm::submit(selection, quantity)                             │
//! │                    │                                                    │
//! │  ┌─────────────────▼──────────────────────────────────────────────┐    │
//! │  │  1. Gate on product availability (ProductUnavailable)          │    │
//! │  │  2. Resolve selection to a variant id (VariantNotResolved)     │    │
//! │  │  3. Validate the id, look up the variant (VariantNotFound)     │    │
//! │  │  4. Mutate the local cart (instant feedback)                   │    │
//! │  │  5. Await the server action                                    │    │
//! │  │     - failure: roll back step 4, surface the action message    │    │
//! │  │  6. Return a receipt with the updated cart                     │    │
//! │  └─────────────────┬──────────────────────────────────────────────┘    │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  Cart drawer shows the new line; status region announces messages      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Sequencing
//! The local mutation always completes before the server action starts, and
//! a failed server action rolls the local mutation back. The local cart can
//! therefore run ahead of the backend only while a submission is in flight,
//! never after it settles.
//!
//! Overlapping submissions are permitted; each carries a generated
//! submission id so log lines correlate.

use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;
use vitrine_core::validation::{find_duplicate_option_sets, validate_variant_id};
use vitrine_core::{CoreError, Product, SelectionState, SubmitState};

use crate::actions::cart::CartResponse;
use crate::error::StorefrontError;
use crate::render;
use crate::state::{CartState, StorefrontConfig};

// =============================================================================
// Server Action Seam
// =============================================================================

/// The server-side add-item action, supplied by the host.
///
/// Implementations talk to the commerce backend (HTTP, RPC, in-process).
/// This crate only sequences the call; it never constructs a client itself.
#[async_trait::async_trait]
pub trait AddItemAction: Send + Sync {
    /// Adds a variant to the authoritative backend cart.
    ///
    /// ## Returns
    /// - `Ok(None)`: success, nothing to announce
    /// - `Ok(Some(message))`: success with a message for the status region
    /// - `Err(e)`: failure; `e.message` is announced and the local cart
    ///   mutation is rolled back
    async fn add_item(
        &self,
        variant_id: &str,
        quantity: i64,
    ) -> Result<Option<String>, AddItemError>;
}

/// Failure reported by a server add-item action.
///
/// The message is user-facing: it is exactly what the status region
/// announces (e.g. "Error adding item to cart").
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AddItemError {
    pub message: String,
}

impl AddItemError {
    pub fn new(message: impl Into<String>) -> Self {
        AddItemError {
            message: message.into(),
        }
    }
}

// =============================================================================
// Action State
// =============================================================================

/// Wraps a server action and retains the message of its last settlement.
///
/// The product page renders one status region per form; its content is the
/// most recent message, whichever submission produced it. Overlapping
/// submissions settle in completion order, matching what the shopper hears.
#[derive(Debug)]
pub struct ActionState<A> {
    action: A,
    last_message: Mutex<Option<String>>,
}

impl<A: AddItemAction> ActionState<A> {
    pub fn new(action: A) -> Self {
        ActionState {
            action,
            last_message: Mutex::new(None),
        }
    }

    /// Invokes the action and records its message.
    ///
    /// Success with no message clears the region; failure stores the error
    /// message so the region announces it.
    pub async fn invoke(&self, variant_id: &str, quantity: i64) -> Result<(), AddItemError> {
        match self.action.add_item(variant_id, quantity).await {
            Ok(message) => {
                *self.last_message.lock().expect("Action message mutex poisoned") = message;
                Ok(())
            }
            Err(err) => {
                *self.last_message.lock().expect("Action message mutex poisoned") =
                    Some(err.message.clone());
                Err(err)
            }
        }
    }

    /// The message from the most recently settled invocation, if any.
    pub fn last_message(&self) -> Option<String> {
        self.last_message
            .lock()
            .expect("Action message mutex poisoned")
            .clone()
    }
}

// =============================================================================
// Add-to-Cart Form
// =============================================================================

/// Receipt for a completed submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartReceipt {
    /// Generated id correlating this submission's log lines
    pub submission_id: String,
    /// The variant that was added
    pub variant_id: String,
    /// Quantity added by this submission
    pub quantity: i64,
    /// The cart after the submission settled
    pub cart: CartResponse,
}

/// The add-to-cart form: one product, the shared cart, and the server action.
///
/// The form is stateless with respect to the selection. The host owns the
/// option selector and passes the current [`SelectionState`] into every
/// call, so state derivation and submission always agree on their input.
#[derive(Debug)]
pub struct AddToCartForm<A: AddItemAction> {
    product: Product,
    cart: CartState,
    action: ActionState<A>,
    config: StorefrontConfig,
}

impl<A: AddItemAction> AddToCartForm<A> {
    /// Creates a form for one product page.
    ///
    /// Catalogs with colliding variant option sets resolve to the first
    /// match; that is logged here once per page instead of per render.
    pub fn new(product: Product, cart: CartState, action: A, config: StorefrontConfig) -> Self {
        let duplicates = find_duplicate_option_sets(&product.variants);
        if !duplicates.is_empty() {
            warn!(
                product_id = %product.id,
                duplicates = duplicates.len(),
                "product has duplicate variant option sets; resolution returns the first match"
            );
        }

        AddToCartForm {
            product,
            cart,
            action: ActionState::new(action),
            config,
        }
    }

    /// The product this form sells.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Handle to the shared cart.
    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    /// Derives the submit control state for the current selection.
    pub fn submit_state(&self, selection: &SelectionState) -> SubmitState {
        SubmitState::for_product(&self.product, selection)
    }

    /// The message the status region should currently announce.
    pub fn status_message(&self) -> Option<String> {
        self.action.last_message()
    }

    /// Renders the form markup for the current selection.
    pub fn render(&self, selection: &SelectionState) -> maud::Markup {
        let state = self.submit_state(selection);
        let message = self.status_message();
        render::add_to_cart_form(state, message.as_deref())
    }

    /// Submits the form: adds the resolved variant to the cart.
    ///
    /// `quantity` of None uses the configured default (1). See the module
    /// docs for the pipeline and its rollback behavior.
    ///
    /// ## Errors
    /// - `ProductUnavailable`: product is not for sale
    /// - `VariantNotResolved`: selection incomplete or contradictory
    /// - `VariantNotFound`: resolved id missing from the product
    /// - `ValidationError` / `CartError`: quantity or cart limits
    /// - `ActionFailed`: server action failed (local mutation rolled back)
    pub async fn submit(
        &self,
        selection: &SelectionState,
        quantity: Option<i64>,
    ) -> Result<AddToCartReceipt, StorefrontError> {
        let submission_id = Uuid::new_v4().to_string();
        let quantity = quantity.unwrap_or(self.config.default_quantity);
        debug!(
            submission_id = %submission_id,
            product_id = %self.product.id,
            quantity = %quantity,
            "add_to_cart submit"
        );

        // Availability gate, the pipeline twin of the OutOfStock state
        if !self.product.available_for_sale {
            return Err(CoreError::ProductUnavailable {
                product_id: self.product.id.clone(),
            }
            .into());
        }

        // Resolve the selection; an absent variant is an error, never a panic
        let variant_id = self
            .product
            .resolve_variant_id(selection)
            .ok_or(CoreError::VariantNotResolved)?
            .to_string();
        validate_variant_id(&variant_id).map_err(CoreError::from)?;

        let variant = self
            .product
            .variant_by_id(&variant_id)
            .ok_or_else(|| CoreError::VariantNotFound {
                variant_id: variant_id.clone(),
            })?;

        // Step 1: local cart mutation, before the network hop
        self.cart
            .with_cart_mut(|c| c.add_line(&self.product, variant, quantity))
            .map_err(StorefrontError::from)?;

        // Step 2: server action. On failure undo step 1 so the local cart
        // never settles ahead of the backend.
        if let Err(err) = self.action.invoke(&variant_id, quantity).await {
            let removed = self
                .cart
                .with_cart_mut(|c| c.remove_quantity(&variant_id, quantity));
            warn!(
                submission_id = %submission_id,
                variant_id = %variant_id,
                quantity = %quantity,
                removed = %removed,
                "server action failed, local cart mutation rolled back"
            );
            return Err(err.into());
        }

        let cart = self.cart.with_cart(|c| CartResponse::from(c));
        info!(
            submission_id = %submission_id,
            variant_id = %variant_id,
            quantity = %quantity,
            subtotal = %cart.totals.subtotal_cents,
            "Item added to cart"
        );

        Ok(AddToCartReceipt {
            submission_id,
            variant_id,
            quantity,
            cart,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
