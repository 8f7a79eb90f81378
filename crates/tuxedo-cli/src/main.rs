//! Tuxedo CLI - Command-line interface for the Tuxedo editor backend

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{init, resolve, scene, serve};

#[derive(Parser)]
#[command(name = "tuxedo")]
#[command(about = "Local editor backend for scene files and media assets", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP editor backend
    Serve {
        /// Config file (defaults to ./tuxedo.toml when present)
        #[arg(long)]
        config: Option<String>,

        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(long)]
        port: Option<u16>,

        /// Root of the game project
        #[arg(long)]
        yukon_path: Option<String>,

        /// Log scene file changes
        #[arg(long)]
        watch: bool,
    },

    /// Resolve a texture key to its pack or atlas file
    Resolve {
        /// Texture key (e.g. "puffle_launch")
        key: String,

        /// Config file
        #[arg(long)]
        config: Option<String>,
    },

    /// Scene operations
    #[command(subcommand)]
    Scene(scene::SceneCommands),

    /// Write a default tuxedo.toml
    Init {
        /// Where to write the config
        #[arg(long, default_value = "tuxedo.toml")]
        path: String,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            config,
            host,
            port,
            yukon_path,
            watch,
        } => serve::run(serve::ServeArgs {
            config,
            host,
            port,
            yukon_path,
            watch,
        }),
        Commands::Resolve { key, config } => resolve::run(&key, config.as_deref()),
        Commands::Scene(cmd) => scene::run(cmd),
        Commands::Init { path, force } => init::run(&path, force),
    }
}
