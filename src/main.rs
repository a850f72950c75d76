mod app;
mod assets;
mod config;
mod content_store;
mod creature;
mod event;
mod particles;
mod swimmer;
mod theme;
mod view;

use clap::Parser;
use fastnoise_lite::{FastNoiseLite, NoiseType};
use raylib::prelude::*;

use crate::app::App;
use crate::config::AppConfig;
use crate::view::ViewTransform;

#[derive(Parser, Debug)]
#[command(name = "glyphsea", about = "Creatures made of scrolling text")]
struct Cli {
    /// Assets root (contains assets/content and assets/creatures)
    #[arg(long)]
    assets: Option<String>,

    /// Config file; defaults to <assets root>/config.toml
    #[arg(long)]
    config: Option<String>,

    /// Session RNG seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Disable the content-directory watcher (records load once at start)
    #[arg(long)]
    no_watch: bool,

    /// Log filter, e.g. "info,modal=debug"
    #[arg(long, default_value = "info")]
    log: String,
}

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::new().parse_filters(&cli.log).init();

    let assets_root = assets::resolve_assets_root(cli.assets.clone());
    let config_path = cli
        .config
        .as_ref()
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|| assets::config_path(&assets_root));
    let cfg = AppConfig::load(&config_path);
    let seed = cli.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    log::info!(
        "assets root {}; seed {}",
        assets_root.display(),
        seed
    );

    let (mut rl, thread) = raylib::init()
        .size(cfg.window.width, cfg.window.height)
        .title("glyphsea")
        .resizable()
        .build();
    rl.set_target_fps(cfg.window.target_fps);
    // Escape is the cancel signal, not the window-close shortcut
    rl.set_exit_key(None);

    let mut noise = FastNoiseLite::with_seed(seed as i32);
    noise.set_noise_type(Some(NoiseType::OpenSimplex2));

    let mut app = App::new(&mut rl, &thread, cfg, assets_root, seed, !cli.no_watch);
    let font = rl.get_font_default();

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        app.session.clock = rl.get_time() as f32;
        app.session.now_ms = rl.get_time() * 1000.0;

        let vt = ViewTransform::compute(
            rl.get_screen_width() as f32,
            rl.get_screen_height() as f32,
            app.cfg.world.width,
            app.cfg.world.height,
        );

        app.gather_input(&rl, &vt);
        app.step(&noise, dt);

        let mut d = rl.begin_drawing(&thread);
        app.render(&mut d, &vt, &font);
    }
}
