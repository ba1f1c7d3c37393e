//! Product detail page view.

use rand::Rng;
use rand::seq::IndexedRandom;

use trailcase_core::ProductId;

use crate::cart::CartSlot;
use crate::error::{AppError, Result};
use crate::state::AppState;

use super::{CartBadgeView, ProductCardView, format_price, stars};

/// Block tag for the "You May Also Like" strip.
pub const ALSO_LIKE_BLOCK: &str = "You May Also Like";

/// Number of picks in the "You May Also Like" strip.
pub const ALSO_LIKE_COUNT: usize = 4;

/// Product detail display data.
#[derive(Debug, Clone)]
pub struct ProductPageView {
    /// Product identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Formatted unit price.
    pub price: String,
    /// Star string from the rating.
    pub stars: String,
    /// Image reference.
    pub image_url: String,
    /// Default color variant.
    pub color: String,
    /// Default size variant.
    pub size: String,
    /// Category name.
    pub category: String,
    /// Whether to show the SALE badge.
    pub on_sale: bool,
    /// "You May Also Like" picks.
    pub also_like: Vec<ProductCardView>,
    /// Cart badge.
    pub badge: CartBadgeView,
}

/// Build the product detail page for the product named in the page
/// address.
///
/// # Errors
///
/// Returns [`AppError::ProductNotFound`] when the identifier does not
/// resolve against the catalog.
pub fn build<S: CartSlot, R: Rng + ?Sized>(
    state: &AppState<S>,
    id: &ProductId,
    rng: &mut R,
) -> Result<ProductPageView> {
    let product = state
        .catalog()
        .get(id)
        .ok_or_else(|| AppError::ProductNotFound(id.clone()))?;

    let eligible = state.catalog().in_block(ALSO_LIKE_BLOCK);
    let also_like = eligible
        .choose_multiple(rng, ALSO_LIKE_COUNT)
        .map(|p| ProductCardView::from(*p))
        .collect();

    Ok(ProductPageView {
        id: product.id.to_string(),
        name: product.name.clone(),
        price: format_price(product.price),
        stars: stars(product.rating),
        image_url: product.image_url.clone(),
        color: product.color.clone(),
        size: product.size.clone(),
        category: product.category.clone(),
        on_sale: product.sales_status,
        also_like,
        badge: CartBadgeView {
            count: state.cart().total_item_count(),
        },
    })
}
