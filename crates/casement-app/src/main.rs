mod cli;
mod host;
mod script;

use std::io::{self, Read, Write};
use std::path::Path;

use casement_common::{ConfigError, WindowId};
use casement_config::CasementConfig;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::host::{Host, Snapshot};
use crate::script::Step;

/// One line of `--trace` output.
#[derive(Serialize)]
struct TraceLine<'a> {
    line: usize,
    step: &'a Step,
    result: Option<WindowId>,
    state: &'a Snapshot,
}

fn init_logging(directive: &str) {
    let mut filter = EnvFilter::from_default_env();
    match directive.parse() {
        Ok(d) => filter = filter.add_directive(d),
        Err(e) => eprintln!("ignoring invalid log directive '{directive}': {e}"),
    }
    // stdout carries the JSON state.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let args = cli::parse();

    // Load config before logging so its level can seed the filter.
    let loaded = load_settings(args.config.as_deref());
    let config = loaded.as_ref().cloned().unwrap_or_default();

    let log_directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| format!("casement={}", config.logging.level.as_directive()));
    init_logging(&log_directive);

    tracing::info!("Casement v{} starting...", env!("CARGO_PKG_VERSION"));
    match &loaded {
        Ok(_) => tracing::info!("Config loaded (max visible: {})", config.windows.max_visible),
        Err(e) => tracing::warn!("Config load failed, using defaults: {e}"),
    }

    if let Err(e) = run(&args, &config) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

/// Load and validate the `--config` override, or the platform default.
fn load_settings(path: Option<&Path>) -> Result<CasementConfig, ConfigError> {
    match path {
        Some(path) => casement_config::load_config_from(path),
        None => casement_config::load_config(),
    }
}

fn run(args: &cli::Args, config: &CasementConfig) -> casement_common::Result<()> {
    let source = read_script(args.script.as_deref())?;
    let steps = script::parse_script(&source)?;
    tracing::info!("Running {} step(s)", steps.len());

    let mut host = Host::from_config(config);
    if let Some(viewport) = args.viewport {
        host.set_viewport(viewport);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_steps(&mut host, steps, args.trace, &mut out)?;
    out.flush()?;

    if host.active_listeners() > 0 {
        tracing::debug!("{} pointer capture(s) still held", host.active_listeners());
    }
    tracing::info!(
        "Done: {} window(s), {} visible",
        host.registry().len(),
        host.registry().visible_count()
    );
    Ok(())
}

fn read_script(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path),
        _ => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

/// Apply every step, writing one JSON line per step when tracing and a
/// single pretty-printed final state otherwise.
fn run_steps<W: Write>(
    host: &mut Host,
    steps: Vec<(usize, Step)>,
    trace: bool,
    out: &mut W,
) -> io::Result<()> {
    for (line, step) in steps {
        let result = host.apply(step.clone());
        if trace {
            let state = host.snapshot();
            let record = TraceLine {
                line,
                step: &step,
                result,
                state: &state,
            };
            serde_json::to_writer(&mut *out, &record)?;
            writeln!(out)?;
        }
    }
    if !trace {
        serde_json::to_writer_pretty(&mut *out, &host.snapshot())?;
        writeln!(out)?;
    }
    Ok(())
}
