//! status command - Header summary: badge counts and active language

use anyhow::{Context as _, Result};

use crate::session::{Context, Session};
use crate::store::{CartStore, WishlistStore};
use crate::ui::output;

/// Show the badge counts the original header rendered: cart entries,
/// wishlist entries, and the active language with its direction.
pub fn status(ctx: &Context) -> Result<()> {
    let session = Session::open(ctx).context("Failed to open session")?;
    let cart = CartStore::open(session.backend()).context("Failed to open cart store")?;
    let wishlist =
        WishlistStore::open(session.backend()).context("Failed to open wishlist store")?;

    let t = session.translator();
    let doc = session.document();
    let verbosity = session.verbosity();

    output::debug(
        format!("state dir: {}", session.backend().dir().display()),
        verbosity,
    );

    output::print(doc.align(&t.t("app.title")), verbosity);
    output::print(
        doc.align(&format!("{}: {}", t.t("labels.cart"), cart.get_item_count())),
        verbosity,
    );
    output::print(
        doc.align(&format!(
            "{}: {}",
            t.t("labels.wishlist"),
            wishlist.get_item_count()
        )),
        verbosity,
    );
    output::print(
        doc.align(&format!(
            "{}: {} ({})",
            t.t("labels.language"),
            doc.lang(),
            doc.dir()
        )),
        verbosity,
    );

    Ok(())
}
