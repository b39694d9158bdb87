use anyhow::Result;
use clap::Parser;
use log::info;

use bone_viz::cli::Cli;
use bone_viz::config::PlotConfig;
use bone_viz::export::save_png;
use bone_viz::plot::render;
use bone_viz::pose::{load_poses, BONE_POSES};
use bone_viz::{build_figure, viewer};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = PlotConfig::from(&cli);

    let poses = match &cli.poses {
        Some(path) => load_poses(path)?,
        None => BONE_POSES.to_vec(),
    };
    info!("Drawing {} bone poses", poses.len());

    let figure = build_figure(&config, &poses);

    if let Some(path) = &cli.save {
        save_png(&render(&figure, config.width, config.height), path)?;
    }

    if !cli.no_ui {
        viewer::show(figure, config.width, config.height)?;
    }

    Ok(())
}
