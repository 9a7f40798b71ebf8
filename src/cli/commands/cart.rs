//! cart command - Add to and inspect the shopping cart

use anyhow::{anyhow, Context as _, Result};
use rust_decimal::Decimal;

use crate::core::cart::CartItem;
use crate::core::catalog::Catalog;
use crate::core::types::ProductId;
use crate::session::{Context, Session};
use crate::store::CartStore;
use crate::ui::output;

/// Snapshot a catalog product into the cart.
///
/// The cart deliberately accumulates duplicate ids; adding the same
/// product twice leaves two entries.
pub fn add(ctx: &Context, raw_id: &str) -> Result<()> {
    let session = Session::open(ctx).context("Failed to open session")?;
    let catalog = Catalog::builtin().context("Failed to load catalog")?;

    let id = ProductId::new(raw_id).context("Invalid product id")?;
    let product = catalog
        .find(&id)
        .ok_or_else(|| anyhow!("No product with id '{id}' in the catalog"))?;

    let mut cart = CartStore::open(session.backend()).context("Failed to open cart store")?;
    cart.add_item(CartItem::from_product(product))
        .context("Failed to persist cart")?;

    let doc = session.document();
    output::success(
        doc.align(&session.translator().t("messages.item_added_to_cart")),
        session.verbosity(),
    );

    Ok(())
}

/// List the cart contents in insertion order, with a subtotal.
pub fn list(ctx: &Context) -> Result<()> {
    let session = Session::open(ctx).context("Failed to open session")?;
    let cart = CartStore::open(session.backend()).context("Failed to open cart store")?;

    let t = session.translator();
    let doc = session.document();
    let verbosity = session.verbosity();

    output::print(doc.align(&t.t("cart:title")), verbosity);

    if cart.get_item_count() == 0 {
        output::print(doc.align(&t.t("cart:empty")), verbosity);
        return Ok(());
    }

    let mut subtotal = Decimal::ZERO;
    for (index, item) in cart.items().iter().enumerate() {
        subtotal += item.price.amount();
        output::print(
            doc.align(&format!("{}. {}  ${}", index + 1, item.name, item.price)),
            verbosity,
        );
    }

    output::print(
        doc.align(&format!(
            "{} {}  |  {}: ${subtotal}",
            cart.get_item_count(),
            t.t("cart:items_in_cart"),
            t.t("cart:subtotal")
        )),
        verbosity,
    );

    Ok(())
}

/// Print the number of cart entries (not quantity-weighted).
pub fn count(ctx: &Context) -> Result<()> {
    let session = Session::open(ctx).context("Failed to open session")?;
    let cart = CartStore::open(session.backend()).context("Failed to open cart store")?;

    println!("{}", cart.get_item_count());
    Ok(())
}
