use anyhow::{Context, Result};
use colored::Colorize;
use smartcrop_core::Language;

use super::Runtime;

/// Shows the active language, or switches to `code`.
pub async fn run(rt: &Runtime, code: Option<&str>) -> Result<()> {
    let locale = &rt.app.context().locale;

    if let Some(code) = code {
        rt.app
            .set_language(code)
            .await
            .context("Cannot switch language")?;
    }

    let active = locale.get();
    println!("{}: {}", locale.dictionary().language, active.native_name().bold());
    for lang in Language::all() {
        let marker = if lang == active { "*" } else { " " };
        println!("{} {}  {}", marker, lang.code(), lang.native_name());
    }
    Ok(())
}
