use std::path::PathBuf;

use casement_common::Size;
use clap::Parser;

/// Casement: drive the in-page window manager from a command script.
#[derive(Parser, Debug)]
#[command(name = "casement", version, about)]
pub struct Args {
    /// JSON-lines command script. Reads stdin when omitted or "-".
    pub script: Option<PathBuf>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Viewport size as WIDTHxHEIGHT, overriding the config.
    #[arg(long, value_parser = parse_viewport)]
    pub viewport: Option<Size>,

    /// Print the state after every step instead of only at the end.
    #[arg(long)]
    pub trace: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

fn parse_viewport(s: &str) -> Result<Size, String> {
    let (w, h) = s
        .split_once(|c: char| c == 'x' || c == 'X')
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let width: u32 = w.trim().parse().map_err(|e| format!("bad width '{w}': {e}"))?;
    let height: u32 = h.trim().parse().map_err(|e| format!("bad height '{h}': {e}"))?;
    Ok(Size::new(width as f64, height as f64))
}
