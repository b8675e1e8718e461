//! Runtime configuration from flags and environment

use anyhow::{bail, Context, Result};
use bookcase_core::pager::default_page_size;
use bookcase_core::{Catalog, Theme};
use std::fs::File;
use std::io::BufReader;
use std::num::NonZeroUsize;
use std::path::PathBuf;

const CATALOG_VAR: &str = "BOOKCASE_CATALOG";
const PAGE_SIZE_VAR: &str = "BOOKCASE_PAGE_SIZE";
const THEME_VAR: &str = "BOOKCASE_THEME";

/// Settings shared by every command
#[derive(Debug, Clone)]
pub struct Config {
    /// Catalog file, if one was given
    pub catalog: Option<PathBuf>,

    pub page_size: NonZeroUsize,

    /// Theme selected at startup
    pub theme: Theme,
}

impl Config {
    /// Combine command-line values with environment fallbacks
    ///
    /// Flags win over environment variables.
    pub fn resolve(catalog: Option<String>, page_size: Option<NonZeroUsize>) -> Result<Self> {
        let catalog = catalog
            .or_else(|| std::env::var(CATALOG_VAR).ok())
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        let page_size = match page_size {
            Some(size) => size,
            None => match std::env::var(PAGE_SIZE_VAR) {
                Ok(value) => parse_env_page_size(&value)?,
                Err(_) => default_page_size(),
            },
        };

        let theme = theme_from_env(std::env::var(THEME_VAR).ok());

        Ok(Self {
            catalog,
            page_size,
            theme,
        })
    }

    /// Read and validate the configured catalog file
    pub fn load_catalog(&self) -> Result<Catalog> {
        let Some(path) = &self.catalog else {
            bail!("No catalog given; pass --catalog or set {}", CATALOG_VAR);
        };

        let file = File::open(path)
            .with_context(|| format!("Failed to open catalog: {}", path.display()))?;
        let catalog = Catalog::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to load catalog: {}", path.display()))?;

        tracing::info!(path = %path.display(), books = catalog.len(), "Catalog ready");
        Ok(catalog)
    }
}

/// An unknown theme name falls back to the default with a warning
fn theme_from_env(value: Option<String>) -> Theme {
    let Some(value) = value else {
        return Theme::default();
    };
    match value.parse::<Theme>() {
        Ok(theme) => theme,
        Err(err) => {
            tracing::warn!(error = %err, "Ignoring {}", THEME_VAR);
            Theme::default()
        }
    }
}

fn parse_env_page_size(value: &str) -> Result<NonZeroUsize> {
    let n: usize = value
        .trim()
        .parse()
        .with_context(|| format!("{} is not a number: {}", PAGE_SIZE_VAR, value))?;
    NonZeroUsize::new(n).with_context(|| format!("{} must be at least 1", PAGE_SIZE_VAR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_page_size() {
        assert_eq!(parse_env_page_size(" 12 ").unwrap().get(), 12);
        assert!(parse_env_page_size("0").is_err());
        assert!(parse_env_page_size("many").is_err());
    }

    #[test]
    fn test_theme_from_env() {
        assert_eq!(theme_from_env(None), Theme::Day);
        assert_eq!(theme_from_env(Some("night".to_string())), Theme::Night);
        assert_eq!(theme_from_env(Some("dusk".to_string())), Theme::Day);
    }

    #[test]
    fn test_missing_catalog_is_an_error() {
        let config = Config {
            catalog: None,
            page_size: NonZeroUsize::new(36).unwrap(),
            theme: Theme::Day,
        };
        let err = config.load_catalog().unwrap_err();
        assert!(err.to_string().contains("--catalog"));
    }
}
