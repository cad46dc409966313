//! Meteor Shooter entry point
//!
//! Runs a headless session: the host side of the game (window, textures,
//! audio device) is replaced by a scripted pilot and a logging audio backend.
//!
//! Usage: `meteor-shooter [config.json] [ticks] [--manifest sprites.json]
//! [--control keyboard|wasd] [--volume 0.0-1.0] [--sfx-volume 0.0-1.0]`

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use meteor_shooter::audio::LogBackend;
    use meteor_shooter::render::build_draw_list;
    use meteor_shooter::sim::{GameState, TickInput, tick};
    use meteor_shooter::{AssetCatalog, AudioManager, ConfigError, Settings, TurretControl};

    const DEFAULT_CONFIG: &str = "meteor-shooter.json";
    /// One minute at the default tick rate
    const DEFAULT_TICKS: u64 = 3600;

    /// Scripted pilot: fire held, turret sweeping back and forth, ship
    /// strafing left and right every few seconds.
    fn scripted_input(tick_index: u64, ticks_per_second: u32) -> TickInput {
        let tps = u64::from(ticks_per_second.max(1));
        let sweep = (tick_index / (tps * 2)) % 2 == 0;
        let strafe = (tick_index / (tps * 3)) % 2 == 0;
        TickInput {
            fire: true,
            rotate_right: sweep,
            rotate_left: !sweep,
            left: strafe,
            right: !strafe,
            ..Default::default()
        }
    }

    /// Command line, applied on top of the config file
    #[derive(Debug, Default, PartialEq)]
    pub struct Args {
        pub config: Option<PathBuf>,
        pub ticks: Option<u64>,
        pub manifest: Option<PathBuf>,
        pub control: Option<TurretControl>,
        pub master_volume: Option<f32>,
        pub sfx_volume: Option<f32>,
    }

    fn invalid(field: &'static str, reason: String) -> ConfigError {
        ConfigError::Invalid { field, reason }
    }

    fn volume(field: &'static str, raw: Option<String>) -> Result<f32, ConfigError> {
        let raw = raw.ok_or_else(|| invalid(field, "missing value".to_string()))?;
        raw.parse::<f32>()
            .map_err(|e| invalid(field, format!("`{raw}`: {e}")))
    }

    pub fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args, ConfigError> {
        let mut parsed = Args::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--manifest" => {
                    let path = args.next().ok_or_else(|| invalid("manifest", "missing path".to_string()))?;
                    parsed.manifest = Some(PathBuf::from(path));
                }
                "--control" => {
                    let raw = args.next().unwrap_or_default();
                    let control = TurretControl::from_str(&raw)
                        .ok_or_else(|| invalid("turret_control", format!("unknown scheme `{raw}`")))?;
                    parsed.control = Some(control);
                }
                "--volume" => parsed.master_volume = Some(volume("master_volume", args.next())?),
                "--sfx-volume" => parsed.sfx_volume = Some(volume("sfx_volume", args.next())?),
                _ if parsed.config.is_none() => parsed.config = Some(PathBuf::from(arg)),
                _ if parsed.ticks.is_none() => {
                    let ticks = arg
                        .parse::<u64>()
                        .map_err(|e| invalid("ticks", format!("`{arg}`: {e}")))?;
                    parsed.ticks = Some(ticks);
                }
                _ => return Err(invalid("arguments", format!("unexpected `{arg}`"))),
            }
        }
        Ok(parsed)
    }

    fn load_assets(manifest: Option<&PathBuf>) -> Result<AssetCatalog, Box<dyn std::error::Error>> {
        match manifest {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.clone(),
                    source,
                })?;
                log::info!("Loading sprite manifest {}", path.display());
                Ok(AssetCatalog::from_manifest_str(&json)?)
            }
            None => Ok(AssetCatalog::builtin()?),
        }
    }

    pub fn run() -> Result<(), Box<dyn std::error::Error>> {
        let args = parse_args(std::env::args().skip(1))?;
        let config_path = args.config.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
        let ticks = args.ticks.unwrap_or(DEFAULT_TICKS);

        let mut settings = Settings::load_or_default(&config_path)?;
        if let Some(control) = args.control {
            settings.turret_control = control;
        }
        if let Some(vol) = args.master_volume {
            settings.set_master_volume(vol);
        }
        if let Some(vol) = args.sfx_volume {
            settings.set_sfx_volume(vol);
        }
        let assets = load_assets(args.manifest.as_ref())?;
        log::debug!(
            "Sprites: player {:?}, turret {:?}, projectile {:?}",
            assets.name(assets.player.id),
            assets.name(assets.turret.id),
            assets.name(assets.projectile.id)
        );
        let mut audio = AudioManager::from_settings(Box::new(LogBackend), &settings);

        let seed = match settings.seed {
            Some(seed) => seed,
            None => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or_default(),
        };
        log::info!(
            "Meteor Shooter (headless) starting: {} ticks, turret control {}",
            ticks,
            settings.turret_control.as_str()
        );

        let mut state = GameState::new(&settings, &assets, seed);
        let mut drawn = 0usize;
        for i in 0..ticks {
            let input = scripted_input(i, settings.ticks_per_second);
            tick(&mut state, &input)?;
            audio.play_events(&state.events);

            let frame = build_draw_list(&state);
            drawn += frame.sprites.len();
        }

        let stats = state.stats;
        log::info!(
            "Session over after {} ticks (seed {}): {} shots, {} meteors spawned, {} destroyed, {} player hits, {} sprites drawn",
            state.time_ticks,
            state.seed,
            stats.shots_fired,
            stats.meteors_spawned,
            stats.meteors_destroyed,
            stats.player_hits,
            drawn
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    if let Err(e) = headless::run() {
        log::error!("{}", e);
        eprintln!("meteor-shooter: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts drive `sim::tick` directly
}
