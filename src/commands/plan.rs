use anyhow::Result;
use xcadd::domain::ports::NoopEventSink;
use xcadd::presentation::factory;
use xcadd::{AppBridge, PlannedFile, Verbosity};

use super::{register_options, resolve_config, GlobalArgs};
use crate::cli::RunArgs;

pub fn cmd_plan(global: &GlobalArgs, run: &RunArgs) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = resolve_config(global, run, &cwd)?;
    let options = register_options(&config, &cwd);

    let use_case = factory::create_register_use_case(&config, NoopEventSink);
    let plan = use_case.plan(&options)?;
    let bridge = use_case.bridge();

    if global.json {
        for (index, file) in plan.files.iter().enumerate() {
            println!("{}", plan_item_json(index, file, bridge));
        }
        println!(
            "{}",
            serde_json::json!({
                "event": "complete",
                "command": "plan",
                "working_dir": options.working_dir.to_string(),
                "open": plan.open_count(),
                "missing": plan.missing_count(),
            })
        );
    } else {
        let verbose = config.output.verbosity == Verbosity::Verbose;
        for file in &plan.files {
            if file.should_open() {
                println!("Would add {} to {} project", file.path, options.application);
                if verbose {
                    println!("  $ {}", bridge.describe(&file.absolute));
                }
            } else {
                println!("Warning: {} does not exist", file.path);
            }
        }
        println!();
        println!(
            "Summary: {} to open, {} missing",
            plan.open_count(),
            plan.missing_count()
        );
    }

    if run.strict && plan.missing_count() > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn plan_item_json(index: usize, file: &PlannedFile, bridge: &dyn AppBridge) -> serde_json::Value {
    if file.should_open() {
        serde_json::json!({
            "event": "plan_item",
            "command": "plan",
            "index": index,
            "path": file.path.to_string(),
            "action": "open",
            "run": bridge.describe(&file.absolute),
        })
    } else {
        serde_json::json!({
            "event": "plan_item",
            "command": "plan",
            "index": index,
            "path": file.path.to_string(),
            "action": "missing",
        })
    }
}
