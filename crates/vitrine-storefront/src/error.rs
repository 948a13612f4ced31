//! # Storefront Error Type
//!
//! Unified error type for everything the frontend can observe.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Vitrine                                │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  submit add-to-cart form                                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  AddToCartForm::submit                                           │  │
//! │  │  Result<AddToCartReceipt, StorefrontError>                       │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Unresolved variant? ── CoreError::VariantNotResolved ──┐       │  │
//! │  │         │                                               │       │  │
//! │  │         ▼                                               ▼       │  │
//! │  │  Server action failed? ── AddItemError ────────── StorefrontError│  │
//! │  │         │                                               │       │  │
//! │  │         ▼                                               │       │  │
//! │  │  Success ───────────────────────────────────────────────┼──────►│  │
//! │  └─────────────────────────────────────────────────────────┼───────┘  │
//! │                                                            │           │
//! │  ◄─────────────────────────────────────────────────────────┘           │
//! │                                                                         │
//! │  catch (e) {                                                            │
//! │    // e.message = "No variant resolved for the current selection"       │
//! │    // e.code = "VARIANT_NOT_RESOLVED"                                   │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! Frontends need errors as data, not panics. We implement `Serialize`
//! and include both a machine-readable `code` and human-readable `message`.

use serde::Serialize;
use vitrine_core::CoreError;

use crate::actions::AddItemError;

/// Error returned from storefront actions.
///
/// ## Serialization
/// This is what the frontend receives when an action fails:
/// ```json
/// {
///   "code": "VARIANT_NOT_RESOLVED",
///   "message": "No variant resolved for the current selection"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for storefront responses.
///
/// ## Usage in Frontend
/// ```typescript
/// try {
///   await submitAddToCart(selection);
/// } catch (e) {
///   switch (e.code) {
///     case 'VARIANT_NOT_RESOLVED':
///       highlightOptionSelector();
///       break;
///     case 'ACTION_FAILED':
///       showStatus(e.message);
///       break;
///     default:
///       showError('An error occurred');
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (variant, cart line)
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Selection does not resolve to a variant
    VariantNotResolved,

    /// Product is not available for sale
    ProductUnavailable,

    /// Cart limits hit (too many lines)
    CartError,

    /// The server add-item action failed
    ActionFailed,
}

impl StorefrontError {
    /// Creates a new storefront error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        StorefrontError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        StorefrontError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        StorefrontError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a cart error.
    pub fn cart(message: impl Into<String>) -> Self {
        StorefrontError::new(ErrorCode::CartError, message)
    }

    /// Creates a failed-action error.
    pub fn action_failed(message: impl Into<String>) -> Self {
        StorefrontError::new(ErrorCode::ActionFailed, message)
    }
}

/// Converts core errors to storefront errors.
impl From<CoreError> for StorefrontError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::VariantNotResolved => {
                StorefrontError::new(ErrorCode::VariantNotResolved, err.to_string())
            }
            CoreError::VariantNotFound { variant_id } => {
                StorefrontError::not_found("Variant", &variant_id)
            }
            CoreError::ProductUnavailable { product_id } => StorefrontError::new(
                ErrorCode::ProductUnavailable,
                format!("Product is not available for sale: {}", product_id),
            ),
            CoreError::LineNotFound { variant_id } => {
                StorefrontError::not_found("Cart line", &variant_id)
            }
            CoreError::CartFull { max } => StorefrontError::cart(format!(
                "Cart cannot have more than {} lines",
                max
            )),
            CoreError::QuantityTooLarge { requested, max } => StorefrontError::validation(
                format!("Quantity {} exceeds maximum allowed ({})", requested, max),
            ),
            CoreError::Validation(e) => StorefrontError::validation(e.to_string()),
        }
    }
}

/// Converts server action errors to storefront errors.
///
/// The action's message is surfaced verbatim: it is the string the status
/// region announces to assistive technology.
impl From<AddItemError> for StorefrontError {
    fn from(err: AddItemError) -> Self {
        StorefrontError::action_failed(err.message)
    }
}

impl std::fmt::Display for StorefrontError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for StorefrontError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_not_resolved_mapping() {
        let err = StorefrontError::from(CoreError::VariantNotResolved);
        assert!(matches!(err.code, ErrorCode::VariantNotResolved));
        assert_eq!(err.message, "No variant resolved for the current selection");
    }

    #[test]
    fn test_variant_not_found_mapping() {
        let err = StorefrontError::from(CoreError::VariantNotFound {
            variant_id: "var-9".to_string(),
        });
        assert!(matches!(err.code, ErrorCode::NotFound));
        assert_eq!(err.message, "Variant not found: var-9");
    }

    #[test]
    fn test_action_error_message_is_surfaced_verbatim() {
        let err = StorefrontError::from(AddItemError::new("Error adding item to cart"));
        assert!(matches!(err.code, ErrorCode::ActionFailed));
        assert_eq!(err.message, "Error adding item to cart");
    }

    #[test]
    fn test_serialized_shape() {
        let err = StorefrontError::from(CoreError::VariantNotResolved);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "VARIANT_NOT_RESOLVED");
        assert_eq!(
            json["message"],
            "No variant resolved for the current selection"
        );
    }

    #[test]
    fn test_display_includes_code_and_message() {
        let err = StorefrontError::cart("Cart cannot have more than 100 lines");
        assert_eq!(
            err.to_string(),
            "[CartError] Cart cannot have more than 100 lines"
        );
    }
}
