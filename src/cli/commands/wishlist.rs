//! wishlist command - Save products for later

use anyhow::{anyhow, Context as _, Result};

use crate::core::catalog::Catalog;
use crate::core::types::ProductId;
use crate::core::wishlist::WishlistItem;
use crate::session::{Context, Session};
use crate::store::WishlistStore;
use crate::ui::output;

/// Save a catalog product for later.
///
/// A product already on the wishlist stays as first saved; the duplicate
/// add is a silent no-op.
pub fn add(ctx: &Context, raw_id: &str) -> Result<()> {
    let session = Session::open(ctx).context("Failed to open session")?;
    let catalog = Catalog::builtin().context("Failed to load catalog")?;

    let id = ProductId::new(raw_id).context("Invalid product id")?;
    let product = catalog
        .find(&id)
        .ok_or_else(|| anyhow!("No product with id '{id}' in the catalog"))?;

    let mut wishlist =
        WishlistStore::open(session.backend()).context("Failed to open wishlist store")?;

    let already_saved = wishlist.is_in_wishlist(&id);
    wishlist
        .add_item(WishlistItem::from_product(product))
        .context("Failed to persist wishlist")?;

    let verbosity = session.verbosity();
    if already_saved {
        output::debug(format!("'{id}' already on the wishlist; nothing to do"), verbosity);
    } else {
        output::success(
            session
                .document()
                .align(&session.translator().t("messages.item_added_to_wishlist")),
            verbosity,
        );
    }

    Ok(())
}

/// Remove a saved product. Removing an absent id is a no-op.
pub fn remove(ctx: &Context, raw_id: &str) -> Result<()> {
    let session = Session::open(ctx).context("Failed to open session")?;

    let id = ProductId::new(raw_id).context("Invalid product id")?;

    let mut wishlist =
        WishlistStore::open(session.backend()).context("Failed to open wishlist store")?;

    let was_saved = wishlist.is_in_wishlist(&id);
    wishlist
        .remove_item(&id)
        .context("Failed to persist wishlist")?;

    let verbosity = session.verbosity();
    if was_saved {
        output::success(
            session
                .document()
                .align(&session.translator().t("messages.item_removed_from_wishlist")),
            verbosity,
        );
    } else {
        output::debug(format!("'{id}' was not on the wishlist"), verbosity);
    }

    Ok(())
}

/// List the saved products in insertion order.
pub fn list(ctx: &Context) -> Result<()> {
    let session = Session::open(ctx).context("Failed to open session")?;
    let wishlist =
        WishlistStore::open(session.backend()).context("Failed to open wishlist store")?;

    let t = session.translator();
    let doc = session.document();
    let verbosity = session.verbosity();

    output::print(doc.align(&t.t("labels.wishlist")), verbosity);

    for item in wishlist.items() {
        output::print(
            doc.align(&format!(
                "[{}] {}  ${}  \u{2605} {} ({} {})",
                item.id,
                item.name,
                item.price,
                item.rating,
                item.review_count,
                t.t("labels.reviews")
            )),
            verbosity,
        );
    }

    Ok(())
}

/// Print the number of saved products.
pub fn count(ctx: &Context) -> Result<()> {
    let session = Session::open(ctx).context("Failed to open session")?;
    let wishlist =
        WishlistStore::open(session.backend()).context("Failed to open wishlist store")?;

    println!("{}", wishlist.get_item_count());
    Ok(())
}
