use std::path::PathBuf;

use glyphsea_geom::Vec2;
use glyphsea_interact::{CreatureId, InteractionController, PopupConfig};
use glyphsea_silhouette::{PixelSource, SilhouetteCache};
use glyphsea_ui::{IRect, ModalTheme, PromptLayout};
use hashbrown::HashMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use raylib::prelude::*;

use super::{App, DebugStats, SessionState};
use crate::config::AppConfig;
use crate::content_store::ContentLibrary;
use crate::creature::{Creature, Domain, archetype, masks};
use crate::event::EventQueue;
use crate::particles::ParticleField;
use crate::swimmer::Swimmer;
use crate::theme::pick_theme;

impl App {
    pub fn new(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        cfg: AppConfig,
        assets_root: PathBuf,
        seed: u64,
        watch_content: bool,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let ocean = pick_theme(&mut rng);
        log::info!("ocean theme: {}", ocean.name);

        // Per-archetype rasters: prefer the PNG under assets/creatures,
        // fall back to the built-in mask silhouette.
        let mut pixel_sources: HashMap<Domain, PixelSource> = HashMap::new();
        let mut textures: HashMap<Domain, Texture2D> = HashMap::new();
        for domain in Domain::ALL {
            let spec = archetype(domain);
            let path = crate::assets::creature_image_path(&assets_root, spec.image_file);
            let loaded = Image::load_image(path.to_string_lossy().as_ref())
                .ok()
                .and_then(|img| {
                    let (w, h) = (img.width() as u32, img.height() as u32);
                    let mut rgba = Vec::with_capacity((w * h * 4) as usize);
                    for c in img.get_image_data().iter() {
                        rgba.extend_from_slice(&[c.r, c.g, c.b, c.a]);
                    }
                    if let Ok(tex) = rl.load_texture(thread, path.to_string_lossy().as_ref()) {
                        textures.insert(domain, tex);
                    }
                    PixelSource::new(w, h, rgba)
                });
            let src = match loaded {
                Some(src) => Some(src),
                None => {
                    let mask = match domain {
                        Domain::Chat => Some(masks::JELLYFISH_MASK),
                        Domain::Delivery => Some(masks::SEAHORSE_MASK),
                        Domain::Shortform => Some(masks::WHALE_MASK),
                        Domain::Shopping => Some(masks::FISH_MASK),
                        Domain::Novel => Some(masks::MINIFISH_MASK),
                        Domain::Sky => None,
                    };
                    mask.and_then(|m| masks::rasterize_mask(m, spec.body_rgb))
                }
            };
            if let Some(src) = src {
                pixel_sources.insert(domain, src);
            } else if domain != Domain::Sky {
                log::warn!("no raster for {}; its detail view stays inert", spec.name);
            }
        }

        // Population per archetype from the configured ranges
        let counts = [
            (Domain::Chat, cfg.creatures.jellyfish),
            (Domain::Delivery, cfg.creatures.seahorses),
            (Domain::Shortform, cfg.creatures.whales),
            (Domain::Shopping, cfg.creatures.drift_fish),
            (Domain::Novel, cfg.creatures.mini_fish),
            (Domain::Sky, cfg.creatures.birds),
        ];
        let popup_cfg = PopupConfig {
            spawn_interval_ms: cfg.popups.spawn_interval_ms,
            pop_ms: cfg.popups.pop_ms,
            fade_ms: cfg.popups.fade_ms,
            ..PopupConfig::default()
        };
        let mut creatures = Vec::new();
        let mut next_id = 0u32;
        for (domain, (lo, hi)) in counts {
            let n = rng.gen_range(lo..=hi);
            for _ in 0..n {
                creatures.push(Creature::spawn(
                    CreatureId(next_id),
                    domain,
                    cfg.world.width,
                    cfg.world.height,
                    popup_cfg,
                    &mut rng,
                ));
                next_id += 1;
            }
        }
        log::info!("spawned {} creatures", creatures.len());

        // Content collections now, plus a watcher so creatures that are
        // still recordless pick up data when the files change.
        let library = ContentLibrary::load_all(&assets_root);
        let (content_tx, content_rx) = std::sync::mpsc::channel::<()>();
        if watch_content {
            let dir = crate::assets::content_dir(&assets_root);
            std::thread::spawn(move || {
                use notify::{EventKind, RecursiveMode, Watcher};
                if let Ok(mut watcher) =
                    notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
                        if let Ok(event) = res {
                            match event.kind {
                                EventKind::Modify(_)
                                | EventKind::Create(_)
                                | EventKind::Remove(_)
                                | EventKind::Any => {
                                    if event.paths.iter().any(|p| {
                                        p.extension().and_then(|e| e.to_str()) == Some("json")
                                    }) {
                                        let _ = content_tx.send(());
                                    }
                                }
                                _ => {}
                            }
                        }
                    })
                {
                    let _ = watcher.watch(dir.as_path(), RecursiveMode::NonRecursive);
                    loop {
                        std::thread::sleep(std::time::Duration::from_secs(3600));
                    }
                }
            });
        }

        let surface_y = cfg.world.height * 0.25;
        let spawn = Vec2::new(cfg.world.width * 0.5, cfg.world.height * 0.5);
        let controller = InteractionController::new(cfg.world.interaction_distance);
        let session = SessionState::new(cfg.world.default_size_scale);
        let particles = ParticleField::new(cfg.world.max_particles, surface_y);

        Self {
            session,
            queue: EventQueue::new(),
            creatures,
            swimmer: Swimmer::new(spawn),
            controller,
            silhouettes: SilhouetteCache::new(),
            particles,
            library,
            pixel_sources,
            textures,
            modal_theme: ModalTheme::default(),
            ocean,
            rng,
            assets_root,
            debug_stats: DebugStats::default(),
            prompt_layout: PromptLayout::default(),
            close_bounds: IRect::default(),
            detail_opened_ms: 0.0,
            content_event_rx: content_rx,
            cfg,
        }
    }
}
