use crate::cli::Cli;
use crate::errors::IncludeGraphError;
use crate::graph::DependencyGraph;
use crate::scanner::{ScanOptions, Scanner};
use crate::visualization::{DotGenerator, DotOptions, DotTheme, EdgeStyle, RankDir, SvgRenderer};
use clap::CommandFactory;
use clap_complete::generate;
use regex::Regex;
use std::fs;
use std::io;
use tracing::info;

/// Base name of the default output artifacts: DOT source under this name,
/// rendered SVG beside it.
pub const OUTPUT_BASENAME: &str = "dependencies";

/// Run the CLI logic in-process.
///
/// Returns an exit code (0 = success).
#[must_use]
pub fn run_cli(cli: Cli) -> i32 {
    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let bin_name = env!("CARGO_PKG_NAME");
        generate(shell, &mut cmd, bin_name, &mut io::stdout());
        return 0;
    }
    match run(&cli) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{e}");
            1
        }
    }
}

fn run(cli: &Cli) -> Result<(), IncludeGraphError> {
    if !cli.root.is_dir() {
        return Err(IncludeGraphError::Config(format!(
            "root directory {} does not exist or is not a directory",
            cli.root.display()
        )));
    }
    let mut excludes = Vec::with_capacity(cli.exclude.len());
    for pattern in &cli.exclude {
        let re = Regex::new(pattern).map_err(|e| {
            IncludeGraphError::Config(format!("invalid exclude pattern {pattern:?}: {e}"))
        })?;
        excludes.push(re);
    }
    let options = ScanOptions {
        extensions: cli.extension.clone(),
        excludes,
        suppress_system: cli.nosysinc,
    };

    info!("searching for files in {}", cli.root.display());
    let map = Scanner::new(options).walk(&cli.root)?;
    let graph = DependencyGraph::from_include_map(&map);

    let dot = DotGenerator::new().generate_dot_with_options(&graph, dot_options(cli));

    if let Some(path) = &cli.dot {
        fs::write(path, &dot)?;
    }
    if let Some(path) = &cli.json {
        graph.save_json(path)?;
    }

    if !cli.no_render {
        fs::write(OUTPUT_BASENAME, &dot)?;
        info!("start rendering graph");
        let svg = SvgRenderer::new().render_svg(&dot)?;
        fs::write(format!("{OUTPUT_BASENAME}.svg"), svg)?;
    }

    if !cli.quiet {
        println!("{} files scanned, {} includes found", graph.nodes.len(), graph.edges.len());
    }
    Ok(())
}

// DOT options: config file overrides the defaults. An explicit --config path
// wins over a config discovered next to the root.
fn dot_options(cli: &Cli) -> DotOptions {
    let mut opts = DotOptions::default();
    let cfg = match &cli.config {
        Some(path) => crate::utils::config::load_config_at(path),
        None => crate::utils::config::load_config_near(&cli.root),
    };
    if let Some(dot) = cfg.and_then(|c| c.dot) {
        if let Some(v) = dot.theme {
            opts.theme = if v == "dark" { DotTheme::Dark } else { DotTheme::Light };
        }
        if let Some(v) = dot.rankdir {
            opts.rankdir = if v == "TB" { RankDir::TB } else { RankDir::LR };
        }
        if let Some(v) = dot.splines {
            opts.splines = match v.as_str() {
                "ortho" => EdgeStyle::Ortho,
                "polyline" => EdgeStyle::Polyline,
                _ => EdgeStyle::Curved,
            };
        }
    }
    opts
}
