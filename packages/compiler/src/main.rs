//! `antigravity-compiler` binary: compiles a GSD library into Antigravity skills and workflows.

use antigravity_compiler::cli;
use tracing_subscriber::EnvFilter;

fn main() {
    // Split and skip warnings reach stderr; RUST_LOG=info shows per-file progress
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
