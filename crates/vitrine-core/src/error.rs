//! # Error Types
//!
//! Domain-specific error types for vitrine-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  vitrine-core errors (this file)                                       │
//! │  ├── CoreError        - Domain rule violations                         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  vitrine-storefront errors (separate crate)                            │
//! │  ├── AddItemError     - Server action failures                         │
//! │  └── StorefrontError  - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StorefrontError → Frontend        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (variant id, limits, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core storefront logic errors.
///
/// These errors represent domain rule violations. They should be caught and
/// translated to user-facing messages at the frontend boundary.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The current selection does not resolve to a purchasable variant.
    ///
    /// ## When This Occurs
    /// - Submission with an incomplete selection (some axis unchosen)
    /// - Submission with a selection contradicting the catalog
    /// - A host that bypasses the disabled submit control
    ///
    /// The control shows `SelectionRequired` in exactly these situations;
    /// this error is the pipeline-level twin of that state.
    #[error("No variant resolved for the current selection")]
    VariantNotResolved,

    /// A resolved variant id is not on the product.
    ///
    /// ## When This Occurs
    /// - Product data refreshed between resolution and lookup
    /// - Host passed a stale or foreign variant id
    #[error("Variant not found on product: {variant_id}")]
    VariantNotFound { variant_id: String },

    /// The product is not available for sale.
    ///
    /// ## When This Occurs
    /// - Submission against an out-of-stock product
    /// - A host that bypasses the disabled submit control
    #[error("Product is not available for sale: {product_id}")]
    ProductUnavailable { product_id: String },

    /// No cart line exists for the given variant.
    #[error("No cart line for variant: {variant_id}")]
    LineNotFound { variant_id: String },

    /// Cart has exceeded maximum allowed lines.
    #[error("Cart cannot have more than {max} lines")]
    CartFull { max: usize },

    /// Line quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when input doesn't meet requirements.
/// Used for early validation before domain logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CoreError::VariantNotResolved.to_string(),
            "No variant resolved for the current selection"
        );

        let err = CoreError::VariantNotFound {
            variant_id: "var-9".to_string(),
        };
        assert_eq!(err.to_string(), "Variant not found on product: var-9");

        let err = CoreError::QuantityTooLarge {
            requested: 1200,
            max: 999,
        };
        assert_eq!(
            err.to_string(),
            "Quantity 1200 exceeds maximum allowed (999)"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "variant_id".to_string(),
        };
        assert_eq!(err.to_string(), "variant_id is required");

        let err = ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: 999,
        };
        assert_eq!(err.to_string(), "quantity must be between 1 and 999");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "variant_id".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
