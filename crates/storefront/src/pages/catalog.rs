//! Catalog page view: browse results plus the best-sells strip.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::browse::{BrowseQuery, PageLink};
use crate::cart::CartSlot;
use crate::state::AppState;

use super::{CartBadgeView, ProductCardView};

/// Number of random picks in the best-sells strip.
pub const BEST_SELLS_COUNT: usize = 5;

/// Catalog page display data.
#[derive(Debug, Clone)]
pub struct CatalogPageView {
    /// Cards for the current result window.
    pub cards: Vec<ProductCardView>,
    /// "Showing X-Y Of Z Results" line.
    pub results_text: String,
    /// Windowed pagination control; empty when one page suffices.
    pub links: Vec<PageLink>,
    /// Random best-sells picks.
    pub best_sells: Vec<ProductCardView>,
    /// Cart badge.
    pub badge: CartBadgeView,
}

/// Build the catalog page for a browse query.
///
/// The best-sells strip is a fresh random selection on every build, which
/// is why the caller supplies the RNG.
pub fn build<S: CartSlot, R: Rng + ?Sized>(
    state: &AppState<S>,
    query: &BrowseQuery,
    rng: &mut R,
) -> CatalogPageView {
    let page = query.apply(state.catalog().all());

    let cards = page.items.iter().copied().map(ProductCardView::from).collect();
    let results_text = format!(
        "Showing {}-{} Of {} Results",
        page.window_start, page.window_end, page.total_matches
    );

    let best_sells = state
        .catalog()
        .all()
        .choose_multiple(rng, BEST_SELLS_COUNT)
        .map(ProductCardView::from)
        .collect();

    CatalogPageView {
        cards,
        results_text,
        links: page.links,
        best_sells,
        badge: CartBadgeView {
            count: state.cart().total_item_count(),
        },
    }
}
