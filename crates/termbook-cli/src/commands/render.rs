//! The `termbook render` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use termbook_core::load_config_from;
use termbook_report::RenderedSite;

pub fn execute(config_path: Option<&Path>, output: PathBuf) -> Result<()> {
    let config = load_config_from(config_path)?;
    let site = RenderedSite::new(output);

    for path in site.render_all(&config)? {
        println!("Wrote {}", path.display());
    }

    Ok(())
}
