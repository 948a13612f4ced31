//! # Submit Control Rendering
//!
//! Server-side markup for the add-to-cart form, driven entirely by
//! [`SubmitState`]. The markup mirrors the product page's client component
//! class-for-class so hydration never flickers.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SubmitState ──► <button class=... disabled? aria-label=...>            │
//! │                      [+ icon]  label                                    │
//! │                  </button>                                              │
//! │                                                                         │
//! │  status message ──► <p aria-live="polite" role="status" class="sr-only">│
//! │                        message                                          │
//! │                     </p>                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use maud::{html, Markup};
use vitrine_core::SubmitState;

/// Base classes shared by every state of the submit button.
pub const BUTTON_CLASSES: &str =
    "relative flex w-full items-center justify-center rounded-full bg-blue-600 p-4 tracking-wide text-white";

/// Extra classes for the two disabled states.
pub const DISABLED_CLASSES: &str = "cursor-not-allowed opacity-60 hover:opacity-60";

/// Hover affordance for the enabled state.
const ENABLED_HOVER_CLASS: &str = "hover:opacity-90";

fn button_classes(state: SubmitState) -> String {
    if state.is_disabled() {
        format!("{} {}", BUTTON_CLASSES, DISABLED_CLASSES)
    } else {
        format!("{} {}", BUTTON_CLASSES, ENABLED_HOVER_CLASS)
    }
}

/// Heroicons outline "plus", sized to sit inside the button.
fn plus_icon() -> Markup {
    html! {
        svg xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
            stroke-width="1.5"
            stroke="currentColor"
            aria-hidden="true"
            class="h-5" {
            path stroke-linecap="round" stroke-linejoin="round" d="M12 4.5v15m7.5-7.5h-15" {}
        }
    }
}

/// Renders the submit button for a control state.
///
/// The out-of-stock button has no icon and no aria-label; the other two
/// states differ only in the disabled attribute, the hover classes and the
/// aria-label (see the state table in [`SubmitState`]).
pub fn add_to_cart_button(state: SubmitState) -> Markup {
    html! {
        button type="submit"
            class=(button_classes(state))
            disabled[state.is_disabled()]
            aria-label=[state.aria_label()] {
            @if state != SubmitState::OutOfStock {
                div class="absolute left-0 ml-4" { (plus_icon()) }
            }
            (state.label())
        }
    }
}

/// Renders the polite live region that announces submission outcomes.
///
/// The element is always present (even when empty) so assistive technology
/// observes content CHANGES; a region inserted together with its first
/// message is not reliably announced.
pub fn status_region(message: Option<&str>) -> Markup {
    html! {
        p aria-live="polite" class="sr-only" role="status" {
            @if let Some(message) = message {
                (message)
            }
        }
    }
}

/// Renders the whole add-to-cart form: button plus status region.
pub fn add_to_cart_form(state: SubmitState, message: Option<&str>) -> Markup {
    html! {
        form {
            (add_to_cart_button(state))
            (status_region(message))
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
