use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "include-graph",
    version,
    about = "Create an include dependency graph",
    long_about = "Scan a source tree for #include directives and render the dependency graph \
with Graphviz. Writes the DOT source to `dependencies` and the rendered image to \
`dependencies.svg` in the current directory unless --no-render is given."
)]
pub struct Cli {
    /// Root directory to scan
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// File name extensions to parse
    #[arg(long, value_name = "EXT", num_args = 1.., default_values_t = vec!["h".to_string(), "c".to_string()])]
    pub extension: Vec<String>,

    /// Regex patterns; a file is skipped when any pattern matches anywhere in its path
    #[arg(long, value_name = "PATTERN", num_args = 1..)]
    pub exclude: Vec<String>,

    /// Ignore includes of C standard library headers
    #[arg(long)]
    pub nosysinc: bool,

    /// Path to a TOML configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write an additional copy of the DOT source to this path
    #[arg(long, value_name = "PATH")]
    pub dot: Option<PathBuf>,

    /// Write the graph as pretty-printed JSON to this path
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Skip the default artifacts and the Graphviz invocation
    #[arg(long)]
    pub no_render: bool,

    /// Suppress the summary line; log errors only
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<Shell>,
}

#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
