//! # Domain Types
//!
//! Core domain types for the product page and cart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │ ProductVariant  │   │ SelectedOption  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │ 1:N│  id            │ 1:N│  name          │       │
//! │  │  handle         ├───►│  title         ├───►│  value         │       │
//! │  │  title          │   │  selected_opts  │   │                 │       │
//! │  │  available      │   │  price_cents    │   │  "Size" = "M"   │       │
//! │  │  variants       │   │                 │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Product and variant ids are opaque strings assigned by the commerce
//! backend (e.g. `gid://shopify/ProductVariant/123`). They are never parsed,
//! only compared and carried.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::selection::SelectionState;

// =============================================================================
// Selected Option
// =============================================================================

/// One option axis/value pair on a variant, e.g. `Size = "M"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SelectedOption {
    /// Option axis name as the backend defines it ("Size", "Color").
    pub name: String,
    /// Concrete value on this axis ("M", "Black").
    pub value: String,
}

impl SelectedOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        SelectedOption {
            name: name.into(),
            value: value.into(),
        }
    }
}

// =============================================================================
// Product Variant
// =============================================================================

/// A purchasable variant of a product.
///
/// A variant is fully described by its option combination: a "Shirt" product
/// with Size and Color axes has one variant per (size, color) pair.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    /// Opaque backend identifier.
    pub id: String,

    /// Display title, usually the joined option values ("Black / M").
    pub title: String,

    /// The option combination this variant represents.
    /// Order follows the product's option axes; matching ignores it.
    pub selected_options: Vec<SelectedOption>,

    /// Unit price in cents (smallest currency unit).
    pub price_cents: i64,
}

impl ProductVariant {
    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks whether this variant is described by the given selection.
    ///
    /// Every option on the variant must be satisfied: the selection must hold
    /// the variant's value under the option's lowercased name. Option names
    /// are matched case-insensitively, values byte-for-byte.
    ///
    /// A variant with no options matches ANY selection (vacuous truth). Such
    /// variants exist for single-variant products without option axes.
    pub fn matches_selection(&self, selection: &SelectionState) -> bool {
        self.selected_options
            .iter()
            .all(|option| selection.value_for(&option.name) == Some(option.value.as_str()))
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product as shown on the product page.
///
/// This is the read-side shape the commerce backend hands the page. The
/// submit control and resolver only consult `available_for_sale` and
/// `variants`; the remaining fields feed cart line snapshots.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque backend identifier.
    pub id: String,

    /// URL slug ("acme-shirt").
    pub handle: String,

    /// Display title shown on the page and in the cart.
    pub title: String,

    /// Product-level availability flag. When false the submit control is
    /// out of stock regardless of the selection.
    pub available_for_sale: bool,

    /// All purchasable variants, in backend order. Order matters: the
    /// resolver returns the FIRST variant matching the selection.
    pub variants: Vec<ProductVariant>,
}

impl Product {
    /// Resolves the variant described by the given selection.
    ///
    /// See [`crate::selection::resolve_variant`] for the full contract,
    /// including the single-variant fallback.
    #[inline]
    pub fn resolve_variant(&self, selection: &SelectionState) -> Option<&ProductVariant> {
        crate::selection::resolve_variant(&self.variants, selection)
    }

    /// Resolves just the variant id for the given selection.
    #[inline]
    pub fn resolve_variant_id(&self, selection: &SelectionState) -> Option<&str> {
        self.resolve_variant(selection).map(|v| v.id.as_str())
    }

    /// Looks up a variant by its backend id.
    ///
    /// Returns None when the id is not on this product. Callers must handle
    /// the absent case; a resolved id and the variant list can disagree when
    /// product data is mid-refresh.
    pub fn variant_by_id(&self, variant_id: &str) -> Option<&ProductVariant> {
        self.variants.iter().find(|v| v.id == variant_id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn shirt_variant(id: &str, color: &str, size: &str) -> ProductVariant {
        ProductVariant {
            id: id.to_string(),
            title: format!("{color} / {size}"),
            selected_options: vec![
                SelectedOption::new("Color", color),
                SelectedOption::new("Size", size),
            ],
            price_cents: 2500,
        }
    }

    fn shirt() -> Product {
        Product {
            id: "prod-1".to_string(),
            handle: "acme-shirt".to_string(),
            title: "Acme Shirt".to_string(),
            available_for_sale: true,
            variants: vec![
                shirt_variant("var-1", "Black", "M"),
                shirt_variant("var-2", "Black", "L"),
                shirt_variant("var-3", "White", "M"),
            ],
        }
    }

    #[test]
    fn test_matches_selection_exact() {
        let variant = shirt_variant("var-1", "Black", "M");
        let mut selection = SelectionState::new();
        selection.select("Color", "Black");
        selection.select("Size", "M");
        assert!(variant.matches_selection(&selection));
    }

    #[test]
    fn test_matches_selection_missing_axis() {
        let variant = shirt_variant("var-1", "Black", "M");
        let mut selection = SelectionState::new();
        selection.select("Color", "Black");
        // Size never chosen
        assert!(!variant.matches_selection(&selection));
    }

    #[test]
    fn test_matches_selection_wrong_value() {
        let variant = shirt_variant("var-1", "Black", "M");
        let mut selection = SelectionState::new();
        selection.select("Color", "Black");
        selection.select("Size", "L");
        assert!(!variant.matches_selection(&selection));
    }

    #[test]
    fn test_matches_selection_name_case_insensitive() {
        let variant = shirt_variant("var-1", "Black", "M");
        let mut selection = SelectionState::new();
        selection.select("COLOR", "Black");
        selection.select("size", "M");
        assert!(variant.matches_selection(&selection));
    }

    #[test]
    fn test_matches_selection_value_case_sensitive() {
        let variant = shirt_variant("var-1", "Black", "M");
        let mut selection = SelectionState::new();
        selection.select("Color", "black");
        selection.select("Size", "M");
        assert!(!variant.matches_selection(&selection));
    }

    #[test]
    fn test_optionless_variant_matches_anything() {
        let variant = ProductVariant {
            id: "var-solo".to_string(),
            title: "Default Title".to_string(),
            selected_options: vec![],
            price_cents: 999,
        };
        let mut selection = SelectionState::new();
        assert!(variant.matches_selection(&selection));
        selection.select("Size", "XL");
        assert!(variant.matches_selection(&selection));
    }

    #[test]
    fn test_variant_by_id() {
        let product = shirt();
        assert_eq!(
            product.variant_by_id("var-2").map(|v| v.title.as_str()),
            Some("Black / L")
        );
        assert!(product.variant_by_id("var-99").is_none());
    }

    #[test]
    fn test_variant_price() {
        let variant = shirt_variant("var-1", "Black", "M");
        assert_eq!(variant.price(), Money::from_cents(2500));
    }

    #[test]
    fn test_product_wire_shape_is_camel_case() {
        let product = shirt();
        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("availableForSale").is_some());
        assert!(json["variants"][0].get("selectedOptions").is_some());
        assert!(json["variants"][0].get("priceCents").is_some());
    }
}
