//! Terminal rendering for the page view models.
//!
//! Each function takes a view built by `trailcase_storefront::pages` and
//! prints it. No logic lives here beyond layout.

use trailcase_storefront::browse::PageLink;
use trailcase_storefront::pages::cart::CartPageView;
use trailcase_storefront::pages::catalog::CatalogPageView;
use trailcase_storefront::pages::home::HomeView;
use trailcase_storefront::pages::product::ProductPageView;
use trailcase_storefront::pages::{CartBadgeView, ProductCardView};

pub fn home(view: &HomeView) {
    section("Selected Products", &view.selected);
    section("New Products Arrival", &view.new_arrivals);
    badge(view.badge);
}

pub fn catalog(view: &CatalogPageView) {
    for card in &view.cards {
        card_line(card);
    }
    println!("{}", view.results_text);
    if !view.links.is_empty() {
        println!("{}", links_line(&view.links));
    }
    section("Best Sells", &view.best_sells);
    badge(view.badge);
}

pub fn product(view: &ProductPageView) {
    println!("{}  {}", view.name, view.stars);
    println!("  {}", view.price);
    if view.on_sale {
        println!("  SALE");
    }
    println!("  category: {}", view.category);
    println!("  color: {}, size: {}", view.color, view.size);
    println!("  image: {}", view.image_url);
    section("You May Also Like", &view.also_like);
    badge(view.badge);
}

pub fn cart(view: &CartPageView) {
    if view.is_empty() {
        println!("Your cart is empty");
    }
    for item in &view.items {
        println!(
            "{} x{}  {} ({} each, {}/{})",
            item.name, item.quantity, item.line_total, item.unit_price, item.key.color, item.key.size
        );
    }
    println!();
    println!("Subtotal: {}", view.summary.subtotal);
    if let Some(discount) = &view.summary.discount {
        println!("Discount: {discount}");
    }
    println!("Shipping: {}", view.summary.shipping);
    println!("Total:    {}", view.summary.total);
    badge(view.badge);
}

fn section(title: &str, cards: &[ProductCardView]) {
    if cards.is_empty() {
        return;
    }
    println!("== {title} ==");
    for card in cards {
        card_line(card);
    }
}

fn card_line(card: &ProductCardView) {
    let sale = if card.on_sale { "  SALE" } else { "" };
    println!("[{}] {}  {}  {}{sale}", card.id, card.name, card.price, card.stars);
}

fn links_line(links: &[PageLink]) -> String {
    links
        .iter()
        .map(|link| match link {
            PageLink::Prev => "PREV".to_owned(),
            PageLink::Next => "NEXT".to_owned(),
            PageLink::Ellipsis => "...".to_owned(),
            PageLink::Page { number, current } => {
                if *current {
                    format!("[{number}]")
                } else {
                    number.to_string()
                }
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn badge(badge: CartBadgeView) {
    if badge.visible() {
        println!("(cart: {})", badge.count);
    }
}
