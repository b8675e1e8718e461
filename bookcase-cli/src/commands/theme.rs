//! Theme command implementation

use crate::config::Config;
use crate::render::write_theme;
use anyhow::Result;
use bookcase_core::Theme;

/// Print the palette of the named theme, or of the configured one
pub fn theme(config: &Config, name: Option<Theme>) -> Result<()> {
    write_theme(&mut std::io::stdout().lock(), name.unwrap_or(config.theme))?;
    Ok(())
}
