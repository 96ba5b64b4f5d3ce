//! Mercadito CLI - interactive terminal front-end for the storefront demo.
//!
//! # Usage
//!
//! ```bash
//! # Run the demo (seeds one sample product)
//! mercadito
//!
//! # Start with an empty catalog
//! mercadito --no-seed
//!
//! # Empty the cart after a successful checkout
//! mercadito --clear-cart-on-submit
//! ```
//!
//! The shell presents the storefront's three screens (catalog, admin,
//! cart); type `help` at the prompt for the command list. A successful
//! checkout prints a `mailto:` link to open in your mail client.

#![cfg_attr(not(test), forbid(unsafe_code))]
// The shell is a stdout UI.
#![allow(clippy::print_stdout)]

use clap::Parser;

use mercadito_storefront::config::ShopConfig;
use mercadito_storefront::shop::Shop;

mod image;
mod render;
mod repl;

#[derive(Parser)]
#[command(name = "mercadito")]
#[command(author, version, about = "In-memory storefront demo")]
struct Cli {
    /// Start with an empty catalog instead of the sample product
    #[arg(long)]
    no_seed: bool,

    /// Empty the cart after a successful checkout
    #[arg(long)]
    clear_cart_on_submit: bool,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = ShopConfig::from_env()?;
    if cli.no_seed {
        config.seed_catalog = false;
    }
    if cli.clear_cart_on_submit {
        config.clear_cart_on_submit = true;
    }

    let mut shop = Shop::with_notifier(config, Box::new(render::ToastNotifier));
    repl::run(&mut shop)
}
