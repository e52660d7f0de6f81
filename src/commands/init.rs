//! Write a starter configuration file

use std::path::Path;

use perfgate::config::{GateConfig, DEFAULT_CONFIG_FILE};
use perfgate::output::{OperationResult, OutputMode};

/// Write a starter `perfgate.toml` with the stock Web Vitals thresholds
pub fn init(force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let path = Path::new(DEFAULT_CONFIG_FILE);

    if path.exists() && !force {
        let result = OperationResult {
            success: false,
            message: format!("{DEFAULT_CONFIG_FILE} already exists (use --force to overwrite)"),
        };
        result.render(mode);
        std::process::exit(1);
    }

    GateConfig::default().save(path)?;

    let result = OperationResult {
        success: true,
        message: format!("Wrote {DEFAULT_CONFIG_FILE} with default Web Vitals rules"),
    };
    result.render(mode);
    Ok(())
}
