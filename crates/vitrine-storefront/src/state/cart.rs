//! # Cart State
//!
//! Manages the optimistic local cart shown on the product page.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple submissions and cart actions may access/modify the cart
//! 2. Only one caller should modify the cart at a time
//! 3. Submissions run on an async runtime and may overlap
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Frontend Action          Pipeline Call           Cart State Change     │
//! │  ───────────────          ─────────────           ─────────────────     │
//! │                                                                         │
//! │  Submit form ────────────► AddToCartForm ───────► lines.push(line)     │
//! │                            ::submit                                     │
//! │                                                                         │
//! │  Change quantity ────────► update_cart_line() ──► lines[i].qty = n     │
//! │                                                                         │
//! │  Click remove ───────────► remove_from_cart() ──► lines.remove(i)      │
//! │                                                                         │
//! │  Click clear ────────────► clear_cart() ────────► lines.clear()        │
//! │                                                                         │
//! │  Render cart ────────────► get_cart() ──────────► (read only)          │
//! │                                                                         │
//! │  Failed server action ───► remove_quantity() ───► rollback of submit   │
//! │                                                                         │
//! │  NOTE: All write operations acquire the Mutex lock exclusively.         │
//! │        Read operations also acquire the lock but release it quickly.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vitrine_core::validation::validate_quantity;
use vitrine_core::{
    CoreError, CoreResult, Money, Product, ProductVariant, MAX_CART_LINES, MAX_LINE_QUANTITY,
};

/// A line in the cart, one per variant.
///
/// ## Design Notes
/// - `variant_id` is the line key: adding the same variant again merges
/// - The product fields are frozen copies taken at add time, so the cart
///   renders consistently even if the page refetches newer product data
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Variant this line holds (line key)
    pub variant_id: String,

    /// Product the variant belongs to
    pub product_id: String,

    /// Product URL slug at time of adding (frozen)
    pub product_handle: String,

    /// Product title at time of adding (frozen)
    pub product_title: String,

    /// Variant title at time of adding (frozen), e.g. "Black / M"
    pub variant_title: String,

    /// Price in cents at time of adding (frozen)
    /// This is critical: we lock in the price when added to cart
    pub unit_price_cents: i64,

    /// Quantity in cart
    pub quantity: i64,

    /// When this line was first added to the cart
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a new cart line from a product, one of its variants, and a
    /// quantity.
    ///
    /// ## Price Freezing
    /// The price is captured at this moment. If the backend price changes
    /// later, this line retains the price the shopper saw.
    pub fn from_variant(product: &Product, variant: &ProductVariant, quantity: i64) -> Self {
        CartLine {
            variant_id: variant.id.clone(),
            product_id: product.id.clone(),
            product_handle: product.handle.clone(),
            product_title: product.title.clone(),
            variant_title: variant.title.clone(),
            unit_price_cents: variant.price_cents,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity
    }
}

/// The optimistic local cart.
///
/// ## Invariants
/// - Lines are unique by `variant_id` (adding the same variant merges)
/// - Quantity per line is 1..=MAX_LINE_QUANTITY (999)
/// - Maximum lines: MAX_CART_LINES (100)
///
/// ## Authority
/// This cart is a local mirror for instant feedback. The commerce backend
/// owns the authoritative cart; a submission that fails server-side is
/// rolled back here (see `remove_quantity`).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in the cart
    pub lines: Vec<CartLine>,

    /// When the cart was created/last cleared
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a variant to the cart or increases quantity if already present.
    ///
    /// ## Behavior
    /// - If the variant already has a line: increases its quantity
    /// - Otherwise: appends a new line with frozen product data
    pub fn add_line(
        &mut self,
        product: &Product,
        variant: &ProductVariant,
        quantity: i64,
    ) -> CoreResult<()> {
        validate_quantity(quantity)?;

        // Merge into an existing line for the same variant
        if let Some(line) = self.lines.iter_mut().find(|l| l.variant_id == variant.id) {
            let new_qty = line.quantity + quantity;
            if new_qty > MAX_LINE_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_LINE_QUANTITY,
                });
            }
            line.quantity = new_qty;
            return Ok(());
        }

        // Check max lines
        if self.lines.len() >= MAX_CART_LINES {
            return Err(CoreError::CartFull {
                max: MAX_CART_LINES,
            });
        }

        // Add new line
        self.lines
            .push(CartLine::from_variant(product, variant, quantity));
        Ok(())
    }

    /// Updates the quantity of a line in the cart.
    ///
    /// ## Behavior
    /// - If quantity is 0: removes the line
    /// - If the variant has no line: returns `LineNotFound`
    pub fn update_quantity(&mut self, variant_id: &str, quantity: i64) -> CoreResult<()> {
        if quantity == 0 {
            return self.remove_line(variant_id);
        }

        validate_quantity(quantity)?;

        if let Some(line) = self.lines.iter_mut().find(|l| l.variant_id == variant_id) {
            line.quantity = quantity;
            Ok(())
        } else {
            Err(CoreError::LineNotFound {
                variant_id: variant_id.to_string(),
            })
        }
    }

    /// Removes a line from the cart by variant id.
    pub fn remove_line(&mut self, variant_id: &str) -> CoreResult<()> {
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.variant_id != variant_id);

        if self.lines.len() == initial_len {
            Err(CoreError::LineNotFound {
                variant_id: variant_id.to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Removes up to `quantity` of a variant, dropping the line at zero.
    ///
    /// This is the rollback primitive for failed submissions: it undoes an
    /// earlier `add_line` without disturbing quantity the shopper had before.
    /// Returns how much was actually removed; a missing line removes 0 and
    /// is NOT an error, because a rollback must not fail.
    pub fn remove_quantity(&mut self, variant_id: &str, quantity: i64) -> i64 {
        let index = match self.lines.iter().position(|l| l.variant_id == variant_id) {
            Some(index) => index,
            None => return 0,
        };

        let line = &mut self.lines[index];
        let removed = quantity.min(line.quantity);
        line.quantity -= removed;

        if line.quantity <= 0 {
            self.lines.remove(index);
        }

        removed
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// Returns the number of distinct lines in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Returns the quantity in the cart for one variant (0 if absent).
    pub fn quantity_of(&self, variant_id: &str) -> i64 {
        self.lines
            .iter()
            .find(|l| l.variant_id == variant_id)
            .map(|l| l.quantity)
            .unwrap_or(0)
    }

    /// Calculates the cart subtotal.
    pub fn subtotal_cents(&self) -> i64 {
        self.lines.iter().map(|l| l.line_total_cents()).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Cart totals summary for frontend responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: i64,
    pub subtotal_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_quantity: cart.total_quantity(),
            subtotal_cents: cart.subtotal_cents(),
        }
    }
}

/// Shared handle to the cart.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Cart>>` because:
/// - `Arc`: Allows shared ownership across threads
/// - `Mutex`: Ensures only one caller modifies the cart at a time
///
/// Cloning yields another handle to the SAME cart, so the page, the form
/// and the cart drawer all observe one state.
///
/// ## Why Not RwLock?
/// Cart operations are typically quick, and most operations modify state.
/// A RwLock would add complexity with minimal benefit.
#[derive(Debug, Clone)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = cart_state.with_cart(|cart| CartTotals::from(cart));
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add_line(&product, &variant, 1))?;
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}
