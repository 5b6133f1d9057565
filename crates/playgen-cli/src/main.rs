use clap::Parser;

use playgen_core::{GitIdentity, GitSeedFetcher};

use playgen_cli::cli::Cli;
use playgen_cli::pipeline::{Pipeline, RunOptions};
use playgen_cli::prompt::DialoguerPrompt;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let dest = match cli.dest {
        Some(dest) => dest,
        None => std::env::current_dir()?,
    };

    let prompt = DialoguerPrompt::new();
    let fetcher = GitSeedFetcher::new(cli.seed_url);
    let identity = GitIdentity::new();

    let opts = RunOptions {
        app_name: cli.app_name,
        app: cli.app,
        reactive: cli.reactive,
        strict: cli.strict,
    };

    Pipeline::new(dest, opts, &prompt, &fetcher, &identity).run()
}
