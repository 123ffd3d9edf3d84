use anyhow::Result;

use super::{resolve_config, GlobalArgs};
use crate::cli::RunArgs;

pub fn cmd_config(global: &GlobalArgs, run: &RunArgs) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = resolve_config(global, run, &cwd)?;

    if global.json {
        println!(
            "{}",
            serde_json::json!({
                "event": "config",
                "command": "config",
                "data": serde_json::to_value(&config)?,
            })
        );
    } else {
        print!("{}", config.to_toml()?);
    }

    Ok(())
}
