use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the shell.
#[derive(Debug, Parser)]
#[command(
    name = "crossview-app",
    version,
    about = "Multi-screen terminal application shell",
    long_about = None
)]
pub struct CliArgs {
    /// Request path to open at startup.
    #[arg(short, long, value_name = "PATH", default_value = "/")]
    pub path: String,

    /// Log file path. Logging is disabled when absent.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log filter directive, e.g. "debug" or "crossview=trace".
    /// Overridden by RUST_LOG when set.
    #[arg(long, value_name = "FILTER", default_value = "info")]
    pub log_filter: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn start_path_defaults_to_root() {
        let args = CliArgs::parse_from(["crossview-app"]);
        assert_eq!(args.path, "/");
        assert!(args.log_path.is_none());
    }
}
