//! learntree - scaffolding and validation for learning-material trees

use clap::Parser;
use std::path::PathBuf;

use learntree::{commands, config};

#[derive(Parser, Debug)]
#[command(
    name = "learntree",
    version,
    about = "Scaffold and validate learning-material directory trees"
)]
struct Cli {
    /// Root learning path (defaults to the configured root)
    #[arg(short, long, value_name = "DIR")]
    path: Option<PathBuf>,

    /// Create the default set of modules
    #[arg(long)]
    init_all: bool,

    /// Add a module directory (name, e.g. 05-ml-deployment)
    #[arg(long, value_name = "NAME")]
    add_module: Option<String>,

    /// Optional title to put into the module README
    #[arg(long, value_name = "TEXT")]
    title: Option<String>,

    /// Validate an existing structure
    #[arg(long)]
    validate: bool,

    /// Show actions without writing files
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = config::load_config()?;
    let root = cli.path.unwrap_or_else(|| config.default_root.clone());

    if cli.init_all {
        commands::init_all(&root, &config.modules, cli.dry_run)?;
        return Ok(());
    }

    if let Some(name) = cli.add_module.as_deref() {
        commands::add_module(&root, name, cli.title.as_deref(), cli.dry_run)?;
        return Ok(());
    }

    if cli.validate {
        if !commands::validate(&root)? {
            std::process::exit(2);
        }
        return Ok(());
    }

    println!("Nothing to do. Use --help to see options.");
    std::process::exit(1);
}
