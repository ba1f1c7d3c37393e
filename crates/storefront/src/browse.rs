//! Catalog browse pipeline: filter, search, sort, paginate.
//!
//! The pipeline order is fixed: structural filters first, then the name
//! search, then the sort, then pagination. Filtering and searching preserve
//! catalog order; every sort is stable, so ties keep their relative order.

use std::str::FromStr;

use thiserror::Error;

use trailcase_core::Product;

/// Fixed number of products per catalog page.
pub const PAGE_SIZE: usize = 12;

/// Structural filter over the product list. Each `None` (or `false` for
/// the sale flag) means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Exact category match.
    pub category: Option<String>,
    /// Exact color match.
    pub color: Option<String>,
    /// Exact size match.
    pub size: Option<String>,
    /// Keep only products currently on sale.
    pub on_sale_only: bool,
}

impl ProductFilter {
    /// Whether a product passes every active constraint.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.category
            .as_ref()
            .is_none_or(|category| &product.category == category)
            && self.color.as_ref().is_none_or(|color| &product.color == color)
            && self.size.as_ref().is_none_or(|size| &product.size == size)
            && (!self.on_sale_only || product.sales_status)
    }
}

/// Sort order for the catalog page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Keep catalog order.
    #[default]
    Default,
    /// Price ascending.
    PriceLowToHigh,
    /// Price descending.
    PriceHighToLow,
    /// Rating descending.
    Rating,
    /// Popularity descending.
    Popularity,
}

impl SortKey {
    /// The query-string value for this key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::PriceLowToHigh => "price-low",
            Self::PriceHighToLow => "price-high",
            Self::Rating => "rating",
            Self::Popularity => "popularity",
        }
    }
}

/// Error for an unrecognized sort key value.
#[derive(Debug, Error)]
#[error("unknown sort key '{0}' (expected default, price-low, price-high, rating, popularity)")]
pub struct ParseSortKeyError(String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "price-low" => Ok(Self::PriceLowToHigh),
            "price-high" => Ok(Self::PriceHighToLow),
            "rating" => Ok(Self::Rating),
            "popularity" => Ok(Self::Popularity),
            other => Err(ParseSortKeyError(other.to_owned())),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One element of the windowed pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    /// "PREV" button; present when not on the first page.
    Prev,
    /// A numbered page button.
    Page {
        /// 1-based page number.
        number: usize,
        /// Whether this is the page being shown.
        current: bool,
    },
    /// A "..." gap between page numbers.
    Ellipsis,
    /// "NEXT" button; present when not on the last page.
    Next,
}

/// A full browse request: what the shopper picked in the filter panel,
/// search box, sort select, and pagination control.
#[derive(Debug, Clone, Default)]
pub struct BrowseQuery {
    /// Structural filters.
    pub filter: ProductFilter,
    /// Case-insensitive substring search against the product name.
    pub search: Option<String>,
    /// Sort order.
    pub sort: SortKey,
    /// Requested 1-based page. Out-of-range values clamp.
    pub page: usize,
}

impl BrowseQuery {
    /// Run the pipeline over the full product list.
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [Product]) -> BrowsePage<'a> {
        let mut matches = filter_products(products, &self.filter);
        if let Some(query) = self.search.as_deref() {
            search_products(&mut matches, query);
        }
        sort_products(&mut matches, self.sort);
        paginate(matches, self.page)
    }
}

/// One page of browse results plus the data the pagination widget needs.
#[derive(Debug, Clone)]
pub struct BrowsePage<'a> {
    /// Products in the display window.
    pub items: Vec<&'a Product>,
    /// The (clamped) 1-based page actually shown.
    pub page: usize,
    /// Total pages; zero when nothing matched.
    pub total_pages: usize,
    /// Total products matching the filter and search.
    pub total_matches: usize,
    /// 1-based index of the first shown product, zero when empty.
    pub window_start: usize,
    /// 1-based index of the last shown product, zero when empty.
    pub window_end: usize,
    /// Windowed pagination control; empty when one page suffices.
    pub links: Vec<PageLink>,
}

/// Apply structural filters, preserving catalog order.
#[must_use]
pub fn filter_products<'a>(products: &'a [Product], filter: &ProductFilter) -> Vec<&'a Product> {
    products.iter().filter(|p| filter.matches(p)).collect()
}

/// Keep only products whose name contains `query`, case-insensitively.
/// An empty query keeps everything.
pub fn search_products(products: &mut Vec<&Product>, query: &str) {
    if query.is_empty() {
        return;
    }
    let needle = query.to_lowercase();
    products.retain(|p| p.name.to_lowercase().contains(&needle));
}

/// Stable sort by the given key. [`SortKey::Default`] leaves order as-is.
pub fn sort_products(products: &mut [&Product], key: SortKey) {
    match key {
        SortKey::Default => {}
        SortKey::PriceLowToHigh => products.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceHighToLow => products.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Popularity => products.sort_by(|a, b| b.popularity.cmp(&a.popularity)),
    }
}

/// Slice a match list into the display window for `page`.
///
/// `page` is clamped into the valid range, so a stale pagination link never
/// produces an empty window while matches exist.
#[must_use]
pub fn paginate(matches: Vec<&Product>, page: usize) -> BrowsePage<'_> {
    let total_matches = matches.len();
    let total_pages = total_matches.div_ceil(PAGE_SIZE);
    let page = page.clamp(1, total_pages.max(1));

    let start = (page - 1) * PAGE_SIZE;
    let items: Vec<&Product> = matches.into_iter().skip(start).take(PAGE_SIZE).collect();

    let (window_start, window_end) = if items.is_empty() {
        (0, 0)
    } else {
        (start + 1, start + items.len())
    };

    BrowsePage {
        items,
        page,
        total_pages,
        total_matches,
        window_start,
        window_end,
        links: page_links(page, total_pages),
    }
}

/// Build the windowed pagination control: first page, last page, current
/// plus/minus one, ellipses at the gaps, and prev/next at the edges.
/// Returns nothing when a single page (or none) suffices - the widget is
/// hidden then.
#[must_use]
pub fn page_links(current: usize, total_pages: usize) -> Vec<PageLink> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let mut links = Vec::new();
    if current > 1 {
        links.push(PageLink::Prev);
    }

    for number in 1..=total_pages {
        let shown = number == 1
            || number == total_pages
            || (number + 1 >= current && number <= current + 1);

        if shown {
            links.push(PageLink::Page {
                number,
                current: number == current,
            });
        } else if number + 2 == current || number == current + 2 {
            links.push(PageLink::Ellipsis);
        }
    }

    if current < total_pages {
        links.push(PageLink::Next);
    }

    links
}
