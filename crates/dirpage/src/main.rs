use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use tracing::error;

use dirpage::browse;

/// Renders the direct children of a directory as a launcher list page on
/// stdout. Diagnostics go to stderr so the document stays parseable.
#[derive(Debug, Parser)]
#[command(name = "dirpage", version, about)]
struct Cli {
    /// Directory whose direct children are listed.
    #[arg(long, value_name = "DIR")]
    root: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let show_hidden = std::env::var("SHOW_HIDDEN").is_ok_and(|value| value == "1");

    if let Err(err) = browse::run(&cli.root, show_hidden) {
        error!("{err}");
        exit(1);
    }
}
