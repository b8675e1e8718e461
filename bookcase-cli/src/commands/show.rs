//! Show command implementation

use crate::config::Config;
use crate::render::write_detail;
use anyhow::{Context, Result};
use bookcase_core::{BookId, Session};

/// Print the detail overlay for one book
pub fn show(config: &Config, id: &str, json: bool) -> Result<()> {
    let catalog = config.load_catalog()?;
    let session = Session::new(&catalog);

    let detail = session
        .detail(&BookId::new(id))
        .with_context(|| format!("Cannot show book {}", id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
    } else {
        write_detail(&mut std::io::stdout().lock(), &detail)?;
    }
    Ok(())
}
