//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--state-dir <dir>`: Use this state directory instead of the
//!   configured one
//! - `--debug`: Enable debug diagnostics
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Ve-Shop - a storefront in your terminal
#[derive(Parser, Debug)]
#[command(name = "vshop")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the persisted store records
    #[arg(long, global = true, value_name = "DIR")]
    pub state_dir: Option<PathBuf>,

    /// Enable debug diagnostics
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the header summary: cart count, wishlist count, language
    Status,

    /// Browse the product catalog
    Catalog {
        /// Only show products in this category
        #[arg(long, value_name = "CATEGORY")]
        category: Option<String>,
    },

    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        command: CartCommand,
    },

    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        command: WishlistCommand,
    },

    /// Show or set the display language
    Lang {
        #[command(subcommand)]
        command: Option<LangCommand>,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Cart operations.
#[derive(Subcommand, Debug)]
pub enum CartCommand {
    /// Add a catalog product to the cart
    ///
    /// Adding the same product again accumulates a second entry; the cart
    /// does not deduplicate.
    Add {
        /// Catalog product id
        id: String,
    },

    /// List the cart contents in the order items were added
    List,

    /// Print the number of cart entries
    Count,
}

/// Wishlist operations.
#[derive(Subcommand, Debug)]
pub enum WishlistCommand {
    /// Save a catalog product for later
    ///
    /// Adding a product that is already saved is a no-op.
    Add {
        /// Catalog product id
        id: String,
    },

    /// Remove a saved product
    ///
    /// Removing an id that is not saved is a no-op.
    Remove {
        /// Product id
        id: String,
    },

    /// List the saved products in the order they were added
    List,

    /// Print the number of saved products
    Count,
}

/// Language operations.
#[derive(Subcommand, Debug)]
pub enum LangCommand {
    /// Set the display language
    Set {
        /// Language code
        #[arg(value_parser = ["en", "ar"])]
        code: String,
    },
}
