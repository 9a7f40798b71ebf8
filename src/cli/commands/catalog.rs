//! catalog command - Browse the mock product catalog

use anyhow::{Context as _, Result};

use crate::core::catalog::{Catalog, Category, Product};
use crate::i18n::Translator;
use crate::session::{Context, Session};
use crate::store::WishlistStore;
use crate::ui::output;

/// List catalog products as cards, optionally filtered by category.
///
/// Each card shows what the original product card showed: name, price,
/// sale information, rating, review count, badge, and whether the product
/// is already on the wishlist.
pub fn catalog(ctx: &Context, category: Option<&str>) -> Result<()> {
    let session = Session::open(ctx).context("Failed to open session")?;
    let catalog = Catalog::builtin().context("Failed to load catalog")?;
    let wishlist =
        WishlistStore::open(session.backend()).context("Failed to open wishlist store")?;

    let category = category
        .map(str::parse::<Category>)
        .transpose()
        .map_err(anyhow::Error::msg)?;

    let t = session.translator();
    let doc = session.document();
    let verbosity = session.verbosity();

    let heading = match category {
        Some(c) => t.t(&c.label_key()),
        None => t.t("categories.all"),
    };
    output::print(doc.align(&heading), verbosity);

    let products: Vec<&Product> = match category {
        Some(c) => catalog.in_category(c),
        None => catalog.products().iter().collect(),
    };

    for product in products {
        for line in card_lines(product, &wishlist, t) {
            output::print(doc.align(&line), verbosity);
        }
    }

    Ok(())
}

/// Format a product the way the card component laid it out.
fn card_lines(product: &Product, wishlist: &WishlistStore<'_>, t: &Translator) -> Vec<String> {
    let mut title = format!("[{}] {}", product.id, product.name);
    if let Some(badge) = &product.badge {
        title.push_str(&format!("  [{badge}]"));
    }

    let mut detail = format!("    ${}", product.price);
    if let Some(original) = product.original_price {
        detail.push_str(&format!("  {} ${original}", t.t("product:card.was")));
        if product.on_sale {
            if let Some(percent) = product.discount_percent() {
                detail.push_str(&format!(" (-{percent}%)"));
            }
        }
    }
    detail.push_str(&format!(
        "  \u{2605} {} ({} {})",
        product.rating,
        product.review_count,
        t.t("labels.reviews")
    ));
    if wishlist.is_in_wishlist(&product.id) {
        detail.push_str(&format!("  \u{2665} {}", t.t("product:card.in_wishlist")));
    }

    vec![title, detail]
}
