//! Trailcase CLI - the storefront pages on the command line.
//!
//! # Usage
//!
//! ```bash
//! # Show the home page sections
//! trailcase home
//!
//! # Browse the catalog
//! trailcase catalog --category Suitcases --sort price-low --page 2
//!
//! # Show a product and add it to the cart
//! trailcase product case-01
//! trailcase cart add case-01 -q 2 --color Red
//!
//! # Review and check out
//! trailcase cart show
//! trailcase checkout
//! ```
//!
//! # Commands
//!
//! - `home` - Home page sections
//! - `catalog` - Filter, search, sort, and paginate the catalog
//! - `product` - Product detail page
//! - `cart` - Show and mutate the persisted cart
//! - `checkout` - Complete the purchase
//! - `login` - Validate login credentials

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

use trailcase_core::{LineKey, ProductId};
use trailcase_storefront::browse::{BrowseQuery, ProductFilter, SortKey};
use trailcase_storefront::cart::FileSlot;
use trailcase_storefront::config::StorefrontConfig;
use trailcase_storefront::login::LoginForm;
use trailcase_storefront::pages;
use trailcase_storefront::state::AppState;

mod render;

#[derive(Parser)]
#[command(name = "trailcase")]
#[command(author, version, about = "Trailcase command-line storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the home page sections
    Home,
    /// Browse the catalog
    Catalog {
        /// Keep only this category
        #[arg(long)]
        category: Option<String>,

        /// Keep only this color
        #[arg(long)]
        color: Option<String>,

        /// Keep only this size
        #[arg(long)]
        size: Option<String>,

        /// Keep only products on sale
        #[arg(long)]
        on_sale: bool,

        /// Case-insensitive name search
        #[arg(short, long)]
        search: Option<String>,

        /// Sort order (`default`, `price-low`, `price-high`, `rating`, `popularity`)
        #[arg(long, default_value_t = SortKey::Default)]
        sort: SortKey,

        /// Page number (out-of-range values clamp)
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Show a product detail page
    Product {
        /// Product identifier
        id: String,
    },
    /// Show and mutate the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Complete the purchase, emptying the cart
    Checkout,
    /// Validate login credentials
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart page
    Show,
    /// Add a product to the cart
    Add {
        /// Product identifier
        id: String,

        /// Number of units
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,

        /// Color variant (defaults to the catalog value)
        #[arg(long)]
        color: Option<String>,

        /// Size variant (defaults to the catalog value)
        #[arg(long)]
        size: Option<String>,
    },
    /// Adjust a line's quantity
    Adjust {
        /// Product identifier
        id: String,

        /// Color variant of the line
        #[arg(long)]
        color: String,

        /// Size variant of the line
        #[arg(long)]
        size: String,

        /// Signed change; reaching zero removes the line
        #[arg(short, long, allow_hyphen_values = true)]
        delta: i64,
    },
    /// Remove every line for a product
    Remove {
        /// Product identifier
        id: String,
    },
    /// Empty the cart
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Print the total item count
    Count,
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env();
    let mut state = AppState::init(&config);

    match cli.command {
        Commands::Home => {
            render::home(&pages::home::build(&state));
        }
        Commands::Catalog {
            category,
            color,
            size,
            on_sale,
            search,
            sort,
            page,
        } => {
            let query = BrowseQuery {
                filter: ProductFilter {
                    category,
                    color,
                    size,
                    on_sale_only: on_sale,
                },
                search,
                sort,
                page,
            };
            render::catalog(&pages::catalog::build(&state, &query, &mut rand::rng()));
        }
        Commands::Product { id } => {
            let view = pages::product::build(&state, &ProductId::new(id), &mut rand::rng())?;
            render::product(&view);
        }
        Commands::Cart { action } => run_cart(&mut state, action)?,
        Commands::Checkout => {
            state.cart_mut().checkout()?;
            println!("Thank you for your purchase!");
        }
        Commands::Login { email, password } => {
            let form = LoginForm { email, password };
            let email = form.validate()?;
            println!("Welcome back, {email}");
        }
    }
    Ok(())
}

fn run_cart(
    state: &mut AppState<FileSlot>,
    action: CartAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CartAction::Show => {
            render::cart(&pages::cart::build(state));
        }
        CartAction::Add {
            id,
            quantity,
            color,
            size,
        } => {
            let id = ProductId::new(id);
            let product = state
                .catalog()
                .get(&id)
                .ok_or_else(|| trailcase_storefront::error::AppError::ProductNotFound(id))?
                .clone();
            let count =
                state
                    .cart_mut()
                    .add_item(&product, quantity, color.as_deref(), size.as_deref())?;
            println!("Cart: {count} item(s)");
        }
        CartAction::Adjust {
            id,
            color,
            size,
            delta,
        } => {
            let key = LineKey::new(ProductId::new(id), color, size);
            let count = state.cart_mut().adjust_quantity(&key, delta)?;
            println!("Cart: {count} item(s)");
        }
        CartAction::Remove { id } => {
            let count = state.cart_mut().remove_item(&ProductId::new(id))?;
            println!("Cart: {count} item(s)");
        }
        CartAction::Clear { yes } => {
            if yes || confirm("Empty the cart?")? {
                state.cart_mut().clear()?;
                println!("Cart emptied");
            } else {
                println!("Kept the cart");
            }
        }
        CartAction::Count => {
            println!("{}", state.cart().total_item_count());
        }
    }
    Ok(())
}

/// Ask a yes/no question on stdin. Anything but `y`/`yes` is a no.
fn confirm(prompt: &str) -> Result<bool, std::io::Error> {
    use std::io::Write;

    print!("{prompt} [y/N] ");
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
