//! List the configured rules

use std::path::Path;

use perfgate::config::GateConfig;
use perfgate::output::{OutputMode, RuleListResult};

/// List the rules in the configuration file, enabled or not
pub fn rules(config_path: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let config = GateConfig::load_or_default(config_path)?;
    let result = RuleListResult { rules: config.rules };
    result.render(mode);
    Ok(())
}
