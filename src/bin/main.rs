extern crate rust_raytracer as root;

use root::parsing::config::Config;
use root::parsing::{construct_world, get_settings};
use root::prelude::*;
use root::renderer::{construct_renderer, output_film, render_film};

use std::fs::File;
use std::sync::Mutex;
#[cfg(feature = "preview")]
use std::time::Duration;

use anyhow::{Context, Result};
use structopt::StructOpt;
use tracing::{error, info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*};

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long)]
    pub scene_file: Option<String>,
    #[structopt(long, default_value = "data/config.toml")]
    pub config_file: String,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long, default_value = "warn")]
    pub print_log_level: String,
    #[structopt(long, default_value = "info")]
    pub write_log_level: String,
    /// seconds to keep the preview window open after each render
    #[cfg(feature = "preview")]
    #[structopt(long, default_value = "5")]
    pub preview_seconds: u64,
}

fn parse_log_level(level: &str, default: LevelFilter) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "warn" => LevelFilter::WARN,
        "info" => LevelFilter::INFO,
        "trace" => LevelFilter::TRACE,
        "error" => LevelFilter::ERROR,
        "debug" => LevelFilter::DEBUG,
        "off" => LevelFilter::OFF,
        _ => default,
    }
}

fn init_logging(opts: &Opt) -> Result<()> {
    let term_log_level = parse_log_level(&opts.print_log_level, LevelFilter::WARN);
    let write_log_level = parse_log_level(&opts.write_log_level, LevelFilter::INFO);
    let log_file = File::create("main.log").context("failed to create main.log")?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_filter(term_log_level))
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(log_file))
                .with_filter(write_log_level),
        )
        .try_init()
        .context("failed to install the global subscriber")?;
    Ok(())
}

fn construct_scene(config: &Config) -> Result<World> {
    construct_world(&config.scene_file)
}

fn run(opts: Opt) -> Result<()> {
    let mut config: Config = get_settings(&opts.config_file)
        .with_context(|| format!("couldn't read {}", opts.config_file))?;

    rayon::ThreadPoolBuilder::new()
        .num_threads(config.max_threads())
        .build_global()
        .context("failed to build the global thread pool")?;

    // override scene file based on provided command line argument
    if let Some(scene_file) = opts.scene_file.clone() {
        config.scene_file = scene_file;
    }
    let world = construct_scene(&config).context("fatal error parsing world, aborting")?;

    if opts.dry_run {
        info!("dry run, skipping {} renders", config.render_settings.len());
        return Ok(());
    }

    for (render_id, render_settings) in config.render_settings.iter().enumerate() {
        info!("starting render {}", render_id);
        let renderer: Box<dyn Renderer> =
            construct_renderer(config.renderer, render_settings.threads);
        let (film, profile) = render_film(renderer.as_ref(), &world, render_settings);
        if profile.object_hits == 0 {
            warn!("render {} did not hit any objects", render_id);
        }
        let path = output_film(render_settings, &film)?;
        info!("wrote {}", path.to_string_lossy());

        #[cfg(feature = "preview")]
        root::renderer::present_film(
            &film,
            render_settings.filename.as_deref().unwrap_or("Ray Tracer"),
            Duration::from_secs(opts.preview_seconds),
        )?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let opts = Opt::from_args();
    init_logging(&opts)?;

    run(opts).inspect_err(|e| error!("{:?}", e))
}
