//! CLI entry point for lsdirf

use std::io;
use std::process;

use clap::Parser;
use lsdirf::{NativePlatform, TreeWalker, TsvRenderer, WalkerConfig, expand_patterns};

#[derive(Parser, Debug)]
#[command(name = "lsdirf")]
#[command(about = "List files recursively as tab-separated metadata records")]
#[command(version)]
struct Args {
    /// Paths or glob patterns to list (default: current directory)
    #[arg(value_name = "PATTERN")]
    patterns: Vec<String>,
}

fn run(args: &Args) -> io::Result<()> {
    let walker = TreeWalker::new(WalkerConfig::default());
    let mut renderer = TsvRenderer::new(io::stdout().lock(), NativePlatform::default());

    for root in expand_patterns(&args.patterns) {
        walker.walk(&root, &mut renderer)?;
    }
    renderer.flush()
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return;
        }
        eprintln!("lsdirf: error writing output: {}", e);
        process::exit(1);
    }
}
