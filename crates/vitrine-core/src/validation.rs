//! # Validation Module
//!
//! Input validation utilities for the storefront.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Product page (TypeScript)                                    │
//! │  ├── Disabled submit control, option selector constraints              │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Submit pipeline (Rust)                                       │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: input and catalog checks                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Commerce backend                                             │
//! │  ├── Inventory checks                                                  │
//! │  └── Authoritative cart state                                          │
//! │                                                                         │
//! │  Defense in depth: Multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use vitrine_core::validation::{validate_variant_id, validate_quantity};
//!
//! // Validate the resolved id before mutating the cart
//! validate_variant_id("gid://shop/ProductVariant/123").unwrap();
//!
//! // Validate quantity before a cart operation
//! validate_quantity(5).unwrap();
//! ```

use std::collections::HashMap;

use crate::error::ValidationError;
use crate::types::ProductVariant;
use crate::{MAX_LINE_QUANTITY, MAX_VARIANT_ID_LENGTH};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a variant id.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - Must not exceed MAX_VARIANT_ID_LENGTH (255) bytes
/// - No charset check: backend ids are opaque and may carry any
///   URI characters (`gid://shop/ProductVariant/123`)
///
/// ## Example
/// ```rust
/// use vitrine_core::validation::validate_variant_id;
///
/// assert!(validate_variant_id("gid://shop/ProductVariant/123").is_ok());
/// assert!(validate_variant_id("").is_err());
/// assert!(validate_variant_id(&"x".repeat(300)).is_err());
/// ```
pub fn validate_variant_id(variant_id: &str) -> ValidationResult<()> {
    let variant_id = variant_id.trim();

    if variant_id.is_empty() {
        return Err(ValidationError::Required {
            field: "variant_id".to_string(),
        });
    }

    if variant_id.len() > MAX_VARIANT_ID_LENGTH {
        return Err(ValidationError::TooLong {
            field: "variant_id".to_string(),
            max: MAX_VARIANT_ID_LENGTH,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_LINE_QUANTITY (999)
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Cart: Add Item                                                         │
/// │                                                                         │
/// │  Shopper submits quantity: 5                                           │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_quantity(5) ← THIS FUNCTION                                  │
/// │       │                                                                 │
/// │       ├── qty <= 0? → Error: "quantity must be positive"               │
/// │       │                                                                 │
/// │       ├── qty > 999? → Error: "quantity out of range"                  │
/// │       │                                                                 │
/// │       └── OK → Proceed with the cart mutation                          │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_LINE_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// Catalog Validators
// =============================================================================

/// A pair of variants carrying the same option combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateOptionSet {
    /// The variant resolution will actually return.
    pub first_variant_id: String,
    /// The shadowed variant, unreachable through option selection.
    pub duplicate_variant_id: String,
}

/// Finds variants whose option combinations collide.
///
/// Resolution returns the FIRST variant matching a selection, so any later
/// variant with the same option set is unreachable through the product page.
/// Run this at catalog ingestion and reject or log offending products.
///
/// Combinations are compared the way resolution compares them: option names
/// lowercased, values byte-for-byte, order ignored. Every shadowed variant
/// is reported against the first holder of its combination.
pub fn find_duplicate_option_sets(variants: &[ProductVariant]) -> Vec<DuplicateOptionSet> {
    let mut seen: HashMap<Vec<(String, String)>, &str> = HashMap::new();
    let mut duplicates = Vec::new();

    for variant in variants {
        let key = option_set_key(variant);
        match seen.get(&key) {
            Some(first_id) => duplicates.push(DuplicateOptionSet {
                first_variant_id: (*first_id).to_string(),
                duplicate_variant_id: variant.id.clone(),
            }),
            None => {
                seen.insert(key, variant.id.as_str());
            }
        }
    }

    duplicates
}

/// Normalized option combination: lowercased names, sorted by name.
fn option_set_key(variant: &ProductVariant) -> Vec<(String, String)> {
    let mut key: Vec<(String, String)> = variant
        .selected_options
        .iter()
        .map(|option| (option.name.to_lowercase(), option.value.clone()))
        .collect();
    key.sort();
    key
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SelectedOption;

    fn variant(id: &str, options: &[(&str, &str)]) -> ProductVariant {
        ProductVariant {
            id: id.to_string(),
            title: id.to_string(),
            selected_options: options
                .iter()
                .map(|(n, v)| SelectedOption::new(*n, *v))
                .collect(),
            price_cents: 1999,
        }
    }

    #[test]
    fn test_validate_variant_id() {
        // Valid ids
        assert!(validate_variant_id("gid://shop/ProductVariant/123").is_ok());
        assert!(validate_variant_id("var-42").is_ok());

        // Invalid ids
        assert!(validate_variant_id("").is_err());
        assert!(validate_variant_id("   ").is_err());
        assert!(validate_variant_id(&"x".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(100).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_no_duplicates_in_clean_catalog() {
        let variants = vec![
            variant("var-m", &[("Size", "M")]),
            variant("var-l", &[("Size", "L")]),
        ];
        assert!(find_duplicate_option_sets(&variants).is_empty());
    }

    #[test]
    fn test_duplicate_reported_against_first_holder() {
        let variants = vec![
            variant("var-a", &[("Size", "M")]),
            variant("var-b", &[("Size", "L")]),
            variant("var-c", &[("Size", "M")]),
        ];

        let duplicates = find_duplicate_option_sets(&variants);
        assert_eq!(
            duplicates,
            vec![DuplicateOptionSet {
                first_variant_id: "var-a".to_string(),
                duplicate_variant_id: "var-c".to_string(),
            }]
        );
    }

    #[test]
    fn test_duplicate_detection_ignores_option_order() {
        let variants = vec![
            variant("var-a", &[("Color", "Black"), ("Size", "M")]),
            variant("var-b", &[("Size", "M"), ("Color", "Black")]),
        ];

        let duplicates = find_duplicate_option_sets(&variants);
        assert_eq!(duplicates.len(), 1);
        assert_eq!(duplicates[0].duplicate_variant_id, "var-b");
    }

    #[test]
    fn test_duplicate_detection_ignores_name_case() {
        let variants = vec![
            variant("var-a", &[("Size", "M")]),
            variant("var-b", &[("SIZE", "M")]),
        ];
        assert_eq!(find_duplicate_option_sets(&variants).len(), 1);
    }

    #[test]
    fn test_values_stay_case_sensitive() {
        // "M" and "m" are different values, just like in resolution
        let variants = vec![
            variant("var-a", &[("Size", "M")]),
            variant("var-b", &[("Size", "m")]),
        ];
        assert!(find_duplicate_option_sets(&variants).is_empty());
    }

    #[test]
    fn test_optionless_variants_collide() {
        let variants = vec![variant("var-a", &[]), variant("var-b", &[])];
        assert_eq!(find_duplicate_option_sets(&variants).len(), 1);
    }
}
