//! lang command - Show or switch the display language

use anyhow::{Context as _, Result};

use crate::core::types::Locale;
use crate::session::{Context, Session};
use crate::ui::output;

/// Print the active language and its direction.
pub fn show(ctx: &Context) -> Result<()> {
    let session = Session::open(ctx).context("Failed to open session")?;
    let doc = session.document();

    println!("{} ({})", doc.lang(), doc.dir());
    Ok(())
}

/// Switch the display language.
///
/// The code has already passed clap's allowed-values check; the session
/// orchestrates the persist, the document attribute update, and the
/// translator rebuild. Setting the current language again is valid.
pub fn set(ctx: &Context, code: &str) -> Result<()> {
    let mut session = Session::open(ctx).context("Failed to open session")?;

    let locale: Locale = code.parse().context("Unsupported language code")?;
    let (applied, direction) = session
        .switch_language(locale)
        .context("Failed to switch language")?;

    // The rebuilt translator resolves in the new locale.
    let t = session.translator();
    let doc = session.document();
    output::success(
        doc.align(&format!(
            "{}: {} ({})",
            t.t("labels.language"),
            applied.native_name(),
            direction
        )),
        session.verbosity(),
    );

    Ok(())
}
