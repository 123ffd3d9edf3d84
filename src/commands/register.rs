use anyhow::Result;
use xcadd::presentation::factory;

use super::{register_options, resolve_config, GlobalArgs};
use crate::cli::RunArgs;

pub fn cmd_register(global: &GlobalArgs, run: &RunArgs) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = resolve_config(global, run, &cwd)?;
    let options = register_options(&config, &cwd);

    let sink = factory::create_event_sink(global.json, config.output.verbosity);
    let use_case = factory::create_register_use_case(&config, sink);
    let report = use_case.execute(&options)?;

    if run.strict && !report.is_clean() {
        if !global.json {
            for problem in report.problems() {
                eprintln!("✗ {}", problem);
            }
        }
        std::process::exit(1);
    }

    Ok(())
}
