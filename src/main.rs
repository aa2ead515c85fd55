use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose > 0 {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn main() {
    let cli = include_graph::cli::parse();
    setup_logging(cli.verbose, cli.quiet);
    let code = include_graph::app::run_cli(cli);
    if code != 0 {
        std::process::exit(code);
    }
}
