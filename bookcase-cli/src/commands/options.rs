//! Options command implementation

use crate::config::Config;
use crate::render::write_options;
use anyhow::Result;
use bookcase_core::options::{author_options, genre_options};

/// Print the author and genre choices of the search form
pub fn options(config: &Config) -> Result<()> {
    let catalog = config.load_catalog()?;
    write_options(
        &mut std::io::stdout().lock(),
        &author_options(&catalog),
        &genre_options(&catalog),
    )?;
    Ok(())
}
