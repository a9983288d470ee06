//! Generate the triangular marker touch icon.
//!
//! Writes `icon-180.png` to the current working directory, overwriting any
//! existing file.

use anyhow::{Context, Result};
use log::info;

use icongen::constants::ICON_FILE_NAME;
use icongen::icons::marker;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let icon = marker::render()?;
    icon.save(ICON_FILE_NAME)
        .with_context(|| format!("Failed to write {}", ICON_FILE_NAME))?;

    info!("Generated {}", ICON_FILE_NAME);
    Ok(())
}
