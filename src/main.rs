use docwalk::cli::{Args, Command};
use std::process;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a log filter, e.g. `DOCWALK_LOG=docwalk=trace`
const LOG_ENV: &str = "DOCWALK_LOG";

fn main() {
    let args = Args::parse_args();
    init_logging(&args);

    let command = Command::from_args(args);
    process::exit(command.run());
}

/// Log to stderr; `DOCWALK_LOG` or `RUST_LOG` override the level picked from the flags
fn init_logging(args: &Args) {
    let default_level = if args.verbose {
        "docwalk=debug"
    } else if args.quiet {
        "error"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
