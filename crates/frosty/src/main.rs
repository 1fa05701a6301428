use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use frosty_core::load_scene;
use frosty_renderer::{render_image, RenderConfig};

/// Render a JSON scene of planes and boxes to a PNG.
#[derive(Parser, Debug)]
#[command(name = "frosty", version, about)]
struct Args {
    /// Scene file to render
    #[arg(short, long, default_value = "scene.json")]
    scene: PathBuf,

    /// Horizontal resolution of the output image
    #[arg(long = "hpixels", default_value_t = 800)]
    h_pixels: u32,

    /// Output PNG path
    #[arg(short, long, default_value = "render.png")]
    out: PathBuf,

    /// Linear supersampling factor (1 to 8)
    #[arg(long, default_value_t = 1)]
    supersampling: u32,

    /// Render worker threads (defaults to the number of cores)
    #[arg(short, long)]
    parallelism: Option<usize>,

    /// Log debug output and dump the parsed scene
    #[arg(long)]
    debug: bool,
}

impl Args {
    fn render_config(&self) -> RenderConfig {
        let defaults = RenderConfig::default();
        RenderConfig {
            h_pixels: self.h_pixels,
            supersampling: self.supersampling,
            parallelism: self.parallelism.unwrap_or(defaults.parallelism),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let config = args.render_config();
    config.validate().context("invalid render settings")?;

    let start = Instant::now();
    let mut scene = load_scene(&args.scene)
        .with_context(|| format!("failed to load scene {}", args.scene.display()))?;
    scene
        .initialize()
        .with_context(|| format!("failed to initialize scene {}", args.scene.display()))?;
    log::info!("Scene ready in {:?}", start.elapsed());

    if args.debug {
        log::debug!("{scene:#?}");
    }

    let image = render_image(&scene, &config).context("render failed")?;

    image
        .save(&args.out)
        .with_context(|| format!("failed to write {}", args.out.display()))?;
    log::info!(
        "Wrote {}x{} image to {} in {:?} total",
        image.width(),
        image.height(),
        args.out.display(),
        start.elapsed()
    );

    Ok(())
}
