use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use edcanvas_core::Viewport;
use edcanvas_layout::Alignment;
use edcanvas_runtime::CanvasConfig;
use tracing::{debug, warn};

use crate::error::{ProbeError, Result};
use crate::report::MarginReport;

#[derive(Debug, Parser)]
#[command(
    name = "edcanvas-probe",
    about = "Resolve editor canvas margins for a viewport and alignment",
    version
)]
pub struct Cli {
    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve the canvas and alignment styles.
    Resolve(ResolveArgs),

    /// Print the built-in configuration as TOML.
    Defaults,
}

#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    /// Viewport width in points.
    #[arg(long)]
    pub width: f32,

    /// Viewport height in points.
    #[arg(long)]
    pub height: f32,

    /// Alignment token (left, center, right, wide, full). Unknown tokens
    /// resolve as unset.
    #[arg(long)]
    pub align: Option<String>,

    /// Lay content out bottom-up.
    #[arg(long)]
    pub reversed: bool,

    /// TOML or JSON configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    if !init_logging(cli.log_json) {
        debug!("a tracing subscriber was already installed; keeping it");
    }
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(cli, &mut out)
}

/// Install the global subscriber. Returns `false` if one was already set.
fn init_logging(json: bool) -> bool {
    if json {
        return edcanvas_core::logging::init_json();
    }
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Commands::Resolve(args) => run_resolve(&args, out),
        Commands::Defaults => {
            let text = CanvasConfig::default()
                .to_toml_string()
                .map_err(ProbeError::ConfigRender)?;
            out.write_all(text.as_bytes())?;
            Ok(())
        }
    }
}

fn run_resolve(args: &ResolveArgs, out: &mut impl Write) -> Result<()> {
    let viewport = Viewport::new(args.width, args.height);
    if !viewport.is_well_formed() {
        return Err(ProbeError::invalid(format!(
            "viewport must be finite and non-negative, got {viewport}"
        )));
    }

    let config = match &args.config {
        Some(path) => {
            debug!(path = %path.display(), "loading canvas config");
            CanvasConfig::load_validated(path).map_err(|source| ProbeError::Config {
                path: path.clone(),
                source,
            })?
        }
        None => CanvasConfig::default(),
    };

    let align = args.align.as_deref().and_then(|token| {
        let parsed = Alignment::from_token(token);
        if parsed.is_none() {
            warn!(token, "unknown alignment token; treating as unset");
        }
        parsed
    });

    let report = MarginReport::build(
        viewport,
        align,
        args.reversed,
        &config.breakpoints,
        &config.styles,
    );
    if args.json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        out.write_all(report.to_text().as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn run_args(args: &[&str]) -> Result<String> {
        let argv = std::iter::once("edcanvas-probe").chain(args.iter().copied());
        let cli = Cli::try_parse_from(argv).map_err(|e| ProbeError::invalid(e.to_string()))?;
        let mut out = Vec::new();
        run(cli, &mut out)?;
        Ok(String::from_utf8(out).expect("utf8 output"))
    }

    #[test]
    fn resolve_text() {
        let out = run_args(&["resolve", "--width", "800", "--height", "600", "--align", "wide"])
            .unwrap();
        assert!(out.contains("wide rule:  medium"), "{out}");
        assert!(out.contains("max-width: 770"), "{out}");
    }

    #[test]
    fn resolve_json() {
        let out = run_args(&[
            "resolve", "--width", "1194", "--height", "834", "--align", "wide", "--json",
        ])
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["wide_rule"], "landscape");
        assert_eq!(value["alignment"]["max_width"], 662.0);
        assert_eq!(value["orientation"], "landscape");
    }

    #[test]
    fn unknown_align_is_unset() {
        let out = run_args(&[
            "resolve", "--width", "800", "--height", "600", "--align", "justify", "--json",
        ])
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value["align"].is_null());
        assert!(value["alignment"].is_null());
    }

    #[test]
    fn negative_viewport_is_rejected() {
        let err = run_args(&["resolve", "--width=-1", "--height", "600"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn config_file_is_applied() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("canvas.toml");
        std::fs::write(&path, "[styles.wide-medium]\nmax_width = 700\n").unwrap();
        let out = run_args(&[
            "resolve",
            "--width",
            "800",
            "--height",
            "600",
            "--align",
            "wide",
            "--config",
            path.to_str().unwrap(),
        ])
        .unwrap();
        assert!(out.contains("max-width: 700"), "{out}");
    }

    #[test]
    fn invalid_config_file_exit_code() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("canvas.toml");
        std::fs::write(&path, "[breakpoints]\nsmall = 900\n").unwrap();
        let err = run_args(&[
            "resolve",
            "--width",
            "800",
            "--height",
            "600",
            "--config",
            path.to_str().unwrap(),
        ])
        .unwrap_err();
        assert!(matches!(err, ProbeError::Config { .. }));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn second_logging_init_reports_existing_subscriber() {
        // Whichever format installs first, later calls of either kind lose.
        init_logging(false);
        assert!(!init_logging(true));
        assert!(!init_logging(false));
    }

    #[test]
    fn defaults_prints_toml() {
        let out = run_args(&["defaults"]).unwrap();
        assert!(out.contains("[breakpoints]"), "{out}");
        assert!(out.contains("[styles.wide-landscape]"), "{out}");
        assert_eq!(CanvasConfig::from_toml_str(&out).unwrap(), CanvasConfig::default());
    }
}
