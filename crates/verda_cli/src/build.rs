//! Token build orchestration

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use verda_theme::TokenTable;

use crate::config::VerdaConfig;
use crate::formats::Platform;

/// Compile the token table into every selected platform's output file
///
/// `only` narrows the platform set; empty means all enabled platforms.
/// Returns the paths written.
pub fn build_tokens(
    config: &VerdaConfig,
    table: &TokenTable,
    only: &[Platform],
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for platform in Platform::ALL {
        if !only.is_empty() && !only.contains(&platform) {
            continue;
        }
        let output = config.tokens.platform(platform);
        if !output.enabled {
            tracing::debug!(?platform, "platform disabled, skipping");
            continue;
        }

        let content = platform.render(table);
        if let Some(parent) = output.output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create output directory {}", parent.display())
                })?;
            }
        }
        fs::write(&output.output, content)
            .with_context(|| format!("failed to write {}", output.output.display()))?;

        tracing::info!(?platform, path = %output.output.display(), tokens = table.len(), "wrote token file");
        written.push(output.output.clone());
    }

    Ok(written)
}
