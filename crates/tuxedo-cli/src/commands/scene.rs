//! Scene inspection commands

use anyhow::{Context, Result};
use clap::Subcommand;
use tuxedo_scene::{ProjectInfo, SceneStore};

#[derive(Subcommand)]
pub enum SceneCommands {
    /// List every scene under the scenes root
    List {
        /// Config file
        #[arg(long)]
        config: Option<String>,
    },

    /// Show scene information
    Info {
        /// Scene name relative to the scenes root, without `.scene`
        name: String,

        /// Config file
        #[arg(long)]
        config: Option<String>,
    },
}

pub fn run(cmd: SceneCommands) -> Result<()> {
    match cmd {
        SceneCommands::List { config } => list(config.as_deref()),
        SceneCommands::Info { name, config } => info(&name, config.as_deref()),
    }
}

fn list(config: Option<&str>) -> Result<()> {
    let config = super::load_config(config)?;
    let store = SceneStore::new(config.scenes_root());
    let names = store.list().context("Failed to list scenes")?;

    if names.is_empty() {
        println!("No scene files found in {}", store.root().display());
        return Ok(());
    }

    let project = ProjectInfo::collect(&config.project.name, store.root())
        .context("Failed to collect project info")?;
    println!(
        "{}: {} scenes in {} folders",
        project.name,
        project.scene_count,
        project.folders.len()
    );
    for name in names {
        println!("  {}", name);
    }

    Ok(())
}

fn info(name: &str, config: Option<&str>) -> Result<()> {
    let config = super::load_config(config)?;
    let store = SceneStore::new(config.scenes_root());
    let scene = store
        .load(name)
        .with_context(|| format!("Failed to load scene '{}'", name))?;

    println!("Scene: {}", name);
    println!("ID: {}", scene.id);
    if !scene.scene_type.is_empty() {
        println!("Type: {}", scene.scene_type);
    }
    println!("Key: {}", scene.settings.scene_key);
    println!(
        "Border: {}x{}",
        scene.settings.border_width, scene.settings.border_height
    );
    println!("Objects: {}", scene.object_count());

    if !scene.settings.preload_packs.is_empty() {
        println!();
        println!("Preload packs:");
        for pack in &scene.settings.preload_packs {
            println!("  {}", pack);
        }
    }

    let textures = scene.texture_keys();
    if !textures.is_empty() {
        println!();
        println!("Textures:");
        for key in textures {
            println!("  {}", key);
        }
    }

    Ok(())
}
