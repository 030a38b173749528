//! Preview tool: decorates a scene with a rule file and writes a PNG.
//!
//! ```text
//! softcorner-preview --rules cards.scr --scene page.scr --out page.png
//! ```

mod rules;
mod scene;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use softcorner_engine::decorate::Decorator;
use softcorner_engine::logging::{LoggingConfig, init_logging};
use softcorner_engine::raster::RasterizerConfig;

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Rule file with `border "<selector>" { ... }` blocks.
    #[arg(long)]
    rules: PathBuf,
    /// Scene file with an optional `page { ... }` and `element "<id>" { ... }` blocks.
    #[arg(long)]
    scene: PathBuf,
    /// Where to write the rendered PNG.
    #[arg(long)]
    out: PathBuf,
    /// Emit one cell per pixel instead of collapsing the outside run.
    #[arg(long)]
    exact: bool,
    /// Log filter in `env_logger` syntax, e.g. "debug" or "softcorner_engine=trace".
    #[arg(long)]
    log: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut logging = LoggingConfig::default();
    if let Some(filter) = &args.log {
        logging = logging.with_filter(filter.clone());
    }
    init_logging(logging);

    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let scene_src = read(&args.scene)?;
    let rules_src = read(&args.rules)?;

    let scene_doc = softcorner_rules::parse_str(&scene_src)
        .with_context(|| format!("parsing scene {}", args.scene.display()))?;
    let rules_doc = softcorner_rules::parse_str(&rules_src)
        .with_context(|| format!("parsing rules {}", args.rules.display()))?;

    let mut canvas = scene::build_canvas(&scene_doc)?;
    let rules = rules::collect_rules(&rules_doc)?;
    log::info!(
        "{} rules against {}x{} page",
        rules.len(),
        canvas.size().width,
        canvas.size().height
    );

    let config = if args.exact { RasterizerConfig::exact() } else { RasterizerConfig::default() };
    let mut decorator = Decorator::new(config);
    let applied = decorator.decorate(&mut canvas, &rules);
    let (hits, misses) = decorator.rasterizer().cache().stats();
    log::info!("applied {} mutations (raster cache: {} hits, {} misses)", applied, hits, misses);

    for alert in canvas.alerts() {
        eprintln!("warning: {alert}");
    }

    let size = canvas.size();
    let image = image::RgbaImage::from_raw(size.width, size.height, canvas.render_rgba8())
        .ok_or_else(|| anyhow!("pixel buffer does not match {}x{}", size.width, size.height))?;
    image
        .save(&args.out)
        .with_context(|| format!("writing {}", args.out.display()))?;

    log::info!("wrote {}", args.out.display());
    Ok(())
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}
