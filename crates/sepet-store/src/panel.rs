//! Basket panel visibility and cart-line control helpers.
//!
//! UI-adjacent state with no business invariants. It lives here because
//! it shares the render-notify channel with the basket.

use crate::copy::SiteCopy;

/// Visibility of the expandable basket panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    /// Collapsed to its fixed-height stub.
    #[default]
    Hidden,
    /// Expanded to fit its contents.
    Shown,
}

impl PanelState {
    /// Expand the panel.
    pub fn show(&mut self) {
        *self = PanelState::Shown;
    }

    /// Collapse the panel.
    pub fn hide(&mut self) {
        *self = PanelState::Hidden;
    }

    /// Flip between shown and hidden.
    pub fn toggle(&mut self) {
        *self = match self {
            PanelState::Shown => PanelState::Hidden,
            PanelState::Hidden => PanelState::Shown,
        };
    }

    /// Check if the panel is expanded.
    pub fn is_shown(&self) -> bool {
        matches!(self, PanelState::Shown)
    }

    /// Caption for the toggle button in this state.
    pub fn toggle_caption<'a>(&self, copy: &'a SiteCopy) -> &'a str {
        match self {
            PanelState::Shown => &copy.hide_basket,
            PanelState::Hidden => &copy.show_basket,
        }
    }
}

/// Icon choices for the cart-line stepper control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepperIcon {
    Minus,
    Delete,
}

/// Icon and label for the shrink control on a cart line.
///
/// The icon always resolves to the minus glyph, whatever the quantity;
/// only the label varies between "decrease" and "delete".
pub fn decrement_control<'a>(quantity: u32, copy: &'a SiteCopy) -> (StepperIcon, &'a str) {
    let label = if quantity > 1 {
        &copy.decrease_label
    } else {
        &copy.delete_label
    };
    (StepperIcon::Minus, label)
}
