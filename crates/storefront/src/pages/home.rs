//! Home page view.

use crate::cart::CartSlot;
use crate::state::AppState;

use super::{CartBadgeView, ProductCardView};

/// Block tag for the "Selected Products" section.
pub const SELECTED_PRODUCTS_BLOCK: &str = "Selected Products";

/// Block tag for the "New Products Arrival" section.
pub const NEW_ARRIVALS_BLOCK: &str = "New Products Arrival";

/// Home page display data.
#[derive(Debug, Clone)]
pub struct HomeView {
    /// "Selected Products" section cards.
    pub selected: Vec<ProductCardView>,
    /// "New Products Arrival" section cards.
    pub new_arrivals: Vec<ProductCardView>,
    /// Cart badge.
    pub badge: CartBadgeView,
}

/// Build the home page from the session state.
#[must_use]
pub fn build<S: CartSlot>(state: &AppState<S>) -> HomeView {
    let section = |block: &str| -> Vec<ProductCardView> {
        state
            .catalog()
            .in_block(block)
            .into_iter()
            .map(ProductCardView::from)
            .collect()
    };

    HomeView {
        selected: section(SELECTED_PRODUCTS_BLOCK),
        new_arrivals: section(NEW_ARRIVALS_BLOCK),
        badge: CartBadgeView {
            count: state.cart().total_item_count(),
        },
    }
}
