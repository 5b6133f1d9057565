use clap::Parser;
use std::path::PathBuf;

use playgen_core::DEFAULT_SEED_URL;

#[derive(Parser, Debug)]
#[command(name = "playgen", version, about = "Play Framework microservice scaffolding tool")]
pub struct Cli {
    /// The name of the app
    pub app_name: Option<String>,

    /// Scaffold a regular Play REST app
    #[arg(long)]
    pub app: bool,

    /// Scaffold a ReactiveMongo Play REST app
    #[arg(long)]
    pub reactive: bool,

    /// Destination directory (defaults to the current directory)
    #[arg(long)]
    pub dest: Option<PathBuf>,

    /// Seed repository to scaffold from
    #[arg(long, default_value = DEFAULT_SEED_URL)]
    pub seed_url: String,

    /// Abort on the first failed copy/render/patch instead of continuing
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}
