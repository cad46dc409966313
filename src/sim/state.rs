//! Game state and core simulation types

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::meteor::Meteor;
use super::player::Player;
use super::projectile::Projectile;
use super::timer::Timer;
use super::turret::{Turret, TurretSpec};
use super::window::Window;
use crate::assets::{AssetCatalog, Sprite};
use crate::audio::SoundEffect;
use crate::base_tick_speed;
use crate::consts::BLINK_RATE;
use crate::settings::Settings;

/// Something that happened during a tick that the host may react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The turret fired
    Shot,
    /// A projectile destroyed a meteor
    MeteorDestroyed,
    /// A meteor struck the player
    PlayerHit,
}

impl GameEvent {
    pub fn sound(&self) -> SoundEffect {
        match self {
            GameEvent::Shot => SoundEffect::Shoot,
            GameEvent::MeteorDestroyed => SoundEffect::MeteorExplode,
            GameEvent::PlayerHit => SoundEffect::PlayerHit,
        }
    }
}

/// Running totals for the session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub shots_fired: u64,
    pub meteors_spawned: u64,
    pub meteors_destroyed: u64,
    pub player_hits: u64,
}

impl Stats {
    pub fn record(&mut self, event: GameEvent) {
        match event {
            GameEvent::Shot => self.shots_fired += 1,
            GameEvent::MeteorDestroyed => self.meteors_destroyed += 1,
            GameEvent::PlayerHit => self.player_hits += 1,
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub window: Window,
    pub ticks_per_second: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    pub projectiles: Vec<Projectile>,
    pub meteors: Vec<Meteor>,
    pub meteor_spawn_timer: Timer,
    /// Sprites a spawned meteor picks from
    pub meteor_sprites: Vec<Sprite>,
    /// Events raised by the most recent tick
    pub events: Vec<GameEvent>,
    pub stats: Stats,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new game with the player centered in the window.
    ///
    /// `settings` is expected to have passed `Settings::validate`.
    pub fn new(settings: &Settings, assets: &AssetCatalog, seed: u64) -> Self {
        let window = Window::from_settings(settings);
        let tps = settings.ticks_per_second;
        let base_speed = base_tick_speed(window.height, tps);
        let mut rng = Pcg32::seed_from_u64(seed);

        let turret = Turret::new(
            assets.turret,
            TurretSpec {
                control: settings.turret_control,
                ticks_per_second: tps,
                fire_cooldown_ticks: settings.ms_to_ticks(settings.fire_cooldown_ms),
                projectile_sprite: assets.projectile,
                projectile_speed: base_speed / 5.0,
            },
        );
        let player = Player::new(
            DVec2::new(window.width() / 2.0, window.height() / 2.0),
            assets.player,
            base_speed / 2.0,
            BLINK_RATE / f64::from(tps),
            turret,
        );

        let jitter = if settings.meteor_spawn_jitter_ms > 0 {
            rng.random_range(0..settings.meteor_spawn_jitter_ms)
        } else {
            0
        };
        let meteor_spawn_timer = Timer::from_millis(settings.meteor_spawn_base_ms.saturating_add(jitter), tps);

        log::info!(
            "New game: seed {}, window {}x{}, {} tps, meteor every {} ticks",
            seed,
            window.width,
            window.height,
            tps,
            meteor_spawn_timer.duration
        );

        Self {
            seed,
            window,
            ticks_per_second: tps,
            time_ticks: 0,
            player,
            projectiles: Vec::new(),
            meteors: Vec::new(),
            meteor_spawn_timer,
            meteor_sprites: assets.meteors.clone(),
            events: Vec::new(),
            stats: Stats::default(),
            rng,
        }
    }

    /// Record an event for the host and the session totals
    pub fn emit(&mut self, event: GameEvent) {
        self.stats.record(event);
        self.events.push(event);
    }

    pub fn add_projectile(&mut self, projectile: Projectile) {
        self.projectiles.push(projectile);
    }

    pub fn add_meteor(&mut self, meteor: Meteor) {
        self.stats.meteors_spawned += 1;
        self.meteors.push(meteor);
    }

    /// Roll a meteor from the seeded RNG and add it
    pub fn spawn_meteor(&mut self) {
        let meteor = Meteor::spawn(&mut self.rng, &self.meteor_sprites, &self.window, self.ticks_per_second);
        self.add_meteor(meteor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_state(seed: u64) -> GameState {
        GameState::new(&Settings::default(), &AssetCatalog::builtin().unwrap(), seed)
    }

    #[test]
    fn test_new_game_layout() {
        let state = new_state(1);
        assert_eq!(state.player.position, DVec2::new(800.0, 600.0));
        assert_eq!(state.player.turret.position, state.player.position);
        assert_eq!(state.player.speed, 10.0);
        assert!((state.player.blink_rate - 2.5 / 60.0).abs() < 1e-15);
        assert!(state.projectiles.is_empty());
        assert!(state.meteors.is_empty());
    }

    #[test]
    fn test_spawn_timer_within_jitter() {
        for seed in 0..50 {
            let state = new_state(seed);
            // 900..1000 ms at 60 tps
            assert!((54..60).contains(&state.meteor_spawn_timer.duration));
        }
    }

    #[test]
    fn test_zero_jitter_is_fixed() {
        let settings = Settings {
            meteor_spawn_jitter_ms: 0,
            ..Settings::default()
        };
        let state = GameState::new(&settings, &AssetCatalog::builtin().unwrap(), 3);
        assert_eq!(state.meteor_spawn_timer.duration, 54);
    }

    #[test]
    fn test_oversized_durations_start_a_game() {
        let settings = Settings::from_json(
            r#"{ "fire_cooldown_ms": 100000000, "meteor_spawn_base_ms": 4294967295, "meteor_spawn_jitter_ms": 100 }"#,
        )
        .unwrap();
        let state = GameState::new(&settings, &AssetCatalog::builtin().unwrap(), 11);
        assert_eq!(state.meteor_spawn_timer.duration, 257_698_037);
        // The first shot is still immediate
        assert!(state.player.turret.cooldown.is_ready());
        assert_eq!(state.player.turret.cooldown.duration, 6_000_000);
    }

    #[test]
    fn test_emit_counts() {
        let mut state = new_state(1);
        state.emit(GameEvent::Shot);
        state.emit(GameEvent::Shot);
        state.emit(GameEvent::PlayerHit);
        assert_eq!(state.stats.shots_fired, 2);
        assert_eq!(state.stats.player_hits, 1);
        assert_eq!(state.events.len(), 3);
    }

    #[test]
    fn test_event_sounds() {
        assert_eq!(GameEvent::Shot.sound(), SoundEffect::Shoot);
        assert_eq!(GameEvent::MeteorDestroyed.sound(), SoundEffect::MeteorExplode);
        assert_eq!(GameEvent::PlayerHit.sound(), SoundEffect::PlayerHit);
    }
}
