use anyhow::{Context, Result, bail};
use log::info;
use std::io;

use mcpi::ui::cli::args::{Invocation, usage};
use mcpi::ui::cli::drivers::InquireDriver;
use mcpi::ui::cli::wizard::prompt_sweep_params;
use mcpi::ui::types::build::{build_renderer, execute};
use mcpi::ui::types::config::SweepParams;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let params = match Invocation::parse_from(std::env::args().skip(1)) {
        Invocation::Defaults => SweepParams::default(),
        Invocation::Wizard => prompt_sweep_params(&InquireDriver)?,
        Invocation::ConfigFile(path) => SweepParams::from_json_file(&path)
            .with_context(|| format!("loading {}", path.display()))?,
        Invocation::Help => {
            println!("{}", usage());
            return Ok(());
        }
        Invocation::Version => {
            println!("mcpi {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Invocation::Invalid(reason) => {
            eprintln!("{}", usage());
            bail!(reason);
        }
    };
    info!("using {params:?}");

    let stdout = io::stdout();
    let mut renderer = build_renderer(params.output, stdout.lock());
    execute(&params, renderer.as_mut())?;
    Ok(())
}
