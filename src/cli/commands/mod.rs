//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Opens a [`crate::session::Session`] (and the stores it needs)
//! 2. Performs the read or mutation through the store contracts
//! 3. Formats and displays output through [`crate::ui`]
//!
//! Handlers never touch the persistence backend directly; everything
//! flows through the store layer.

mod cart;
mod catalog;
mod completion;
mod lang;
mod status;
mod wishlist;

use anyhow::Result;

use crate::cli::args::{CartCommand, Command, LangCommand, WishlistCommand};
use crate::session::Context;

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Status => status::status(ctx),
        Command::Catalog { category } => catalog::catalog(ctx, category.as_deref()),
        Command::Cart { command } => match command {
            CartCommand::Add { id } => cart::add(ctx, &id),
            CartCommand::List => cart::list(ctx),
            CartCommand::Count => cart::count(ctx),
        },
        Command::Wishlist { command } => match command {
            WishlistCommand::Add { id } => wishlist::add(ctx, &id),
            WishlistCommand::Remove { id } => wishlist::remove(ctx, &id),
            WishlistCommand::List => wishlist::list(ctx),
            WishlistCommand::Count => wishlist::count(ctx),
        },
        Command::Lang { command } => match command {
            Some(LangCommand::Set { code }) => lang::set(ctx, &code),
            None => lang::show(ctx),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}
