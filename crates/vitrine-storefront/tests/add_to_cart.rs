//! End-to-end storefront flow: product page render, option selection,
//! submission, and cart actions against one shared cart.
//!
//! The unit tests inside each module cover the pieces; these tests walk the
//! whole shopper journey the way a hosting app wires it together.

use std::sync::{Arc, Mutex};

use tracing_subscriber::EnvFilter;
use vitrine_core::{Product, ProductVariant, SelectedOption, SelectionState, SubmitState};
use vitrine_storefront::actions::{get_cart, remove_from_cart, update_cart_line};
use vitrine_storefront::{
    AddItemAction, AddItemError, AddToCartForm, CartState, ErrorCode, StorefrontConfig,
};

/// Initializes logging the way a hosting app would.
///
/// `try_init` because every test in this file races to install the
/// subscriber; only the first succeeds.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,vitrine=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init()
        .ok();
}

/// Stand-in for the commerce backend. Records calls; optionally rejects.
#[derive(Clone)]
struct BackendStub {
    calls: Arc<Mutex<Vec<(String, i64)>>>,
    reject: bool,
}

impl BackendStub {
    fn accepting() -> Self {
        BackendStub {
            calls: Arc::new(Mutex::new(Vec::new())),
            reject: false,
        }
    }

    fn rejecting() -> Self {
        BackendStub {
            calls: Arc::new(Mutex::new(Vec::new())),
            reject: true,
        }
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl AddItemAction for BackendStub {
    async fn add_item(
        &self,
        variant_id: &str,
        quantity: i64,
    ) -> Result<Option<String>, AddItemError> {
        self.calls
            .lock()
            .unwrap()
            .push((variant_id.to_string(), quantity));
        if self.reject {
            Err(AddItemError::new("Error adding item to cart"))
        } else {
            Ok(None)
        }
    }
}

fn hoodie() -> Product {
    let variant = |id: &str, color: &str, size: &str| ProductVariant {
        id: id.to_string(),
        title: format!("{} / {}", color, size),
        selected_options: vec![
            SelectedOption::new("Color", color),
            SelectedOption::new("Size", size),
        ],
        price_cents: 4800,
    };

    Product {
        id: "gid://shop/Product/7".to_string(),
        handle: "zip-hoodie".to_string(),
        title: "Zip Hoodie".to_string(),
        available_for_sale: true,
        variants: vec![
            variant("gid://shop/ProductVariant/71", "Black", "S"),
            variant("gid://shop/ProductVariant/72", "Black", "M"),
            variant("gid://shop/ProductVariant/73", "White", "M"),
        ],
    }
}

#[tokio::test]
async fn shopper_picks_options_submits_and_manages_cart() {
    init_tracing();

    let backend = BackendStub::accepting();
    let cart = CartState::new();
    let form = AddToCartForm::new(
        hoodie(),
        cart.clone(),
        backend.clone(),
        StorefrontConfig::default(),
    );

    // Page loads with nothing selected: the control asks for a selection
    let mut selection = SelectionState::new();
    assert_eq!(form.submit_state(&selection), SubmitState::SelectionRequired);
    let html = form.render(&selection).into_string();
    assert!(html.contains(r#"aria-label="Please select an option""#));
    assert!(html.contains("disabled"));

    // One axis picked is still ambiguous
    selection.select("Color", "Black");
    assert_eq!(form.submit_state(&selection), SubmitState::SelectionRequired);

    // Both axes picked: ready to submit
    selection.select("Size", "M");
    assert_eq!(form.submit_state(&selection), SubmitState::Ready);
    let html = form.render(&selection).into_string();
    assert!(html.contains(r#"aria-label="Add to cart""#));
    assert!(!html.contains("disabled"));

    // Submit lands in the local cart and reaches the backend exactly once
    let receipt = form.submit(&selection, None).await.unwrap();
    assert_eq!(receipt.variant_id, "gid://shop/ProductVariant/72");
    assert_eq!(backend.call_count(), 1);

    let response = get_cart(&cart);
    assert_eq!(response.lines.len(), 1);
    assert_eq!(response.lines[0].variant_title, "Black / M");
    assert_eq!(response.totals.subtotal_cents, 4800);

    // Cart management actions work against the same shared cart
    let response = update_cart_line(&cart, "gid://shop/ProductVariant/72", 3).unwrap();
    assert_eq!(response.totals.total_quantity, 3);
    assert_eq!(response.totals.subtotal_cents, 14400);

    let response = remove_from_cart(&cart, "gid://shop/ProductVariant/72").unwrap();
    assert!(response.lines.is_empty());
}

#[tokio::test]
async fn backend_rejection_rolls_back_and_announces() {
    init_tracing();

    let backend = BackendStub::rejecting();
    let cart = CartState::new();
    let form = AddToCartForm::new(
        hoodie(),
        cart.clone(),
        backend.clone(),
        StorefrontConfig::default(),
    );

    let selection: SelectionState =
        [("Color", "White"), ("Size", "M")].into_iter().collect();

    let err = form.submit(&selection, Some(2)).await.unwrap_err();
    assert!(matches!(err.code, ErrorCode::ActionFailed));
    assert_eq!(backend.call_count(), 1);

    // The optimistic line is gone again and the status region says why
    assert!(get_cart(&cart).lines.is_empty());
    let html = form.render(&selection).into_string();
    assert!(html.contains("Error adding item to cart"));
}

#[tokio::test]
async fn out_of_stock_page_is_inert() {
    init_tracing();

    let mut product = hoodie();
    product.available_for_sale = false;
    let backend = BackendStub::accepting();
    let form = AddToCartForm::new(
        product,
        CartState::new(),
        backend.clone(),
        StorefrontConfig::default(),
    );

    // Even a fully resolving selection renders the inert control
    let selection: SelectionState =
        [("Color", "Black"), ("Size", "S")].into_iter().collect();
    assert_eq!(form.submit_state(&selection), SubmitState::OutOfStock);
    let html = form.render(&selection).into_string();
    assert!(html.contains("Out Of Stock"));
    assert!(!html.contains("aria-label"));

    // And the pipeline refuses to submit regardless of the control state
    let err = form.submit(&selection, None).await.unwrap_err();
    assert!(matches!(err.code, ErrorCode::ProductUnavailable));
    assert_eq!(backend.call_count(), 0);
}
