//! `throttler config` – show config location and effective values.

use anyhow::Result;
use std::path::Path;
use throttler_core::config::ThrottlerConfig;

pub fn run_config(cfg: &ThrottlerConfig, path: &Path) -> Result<()> {
    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
