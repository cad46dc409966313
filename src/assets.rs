//! Sprite metadata catalog
//!
//! The simulation never touches decoded images. Each sprite is an opaque id
//! plus its pixel size, which is all collision and clamping code needs. The
//! host maps ids back to its own textures.

use serde::{Deserialize, Serialize};

use crate::error::AssetError;

/// Opaque handle the host uses to find the texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpriteId(pub u32);

/// A sprite's identity and pixel bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprite {
    pub id: SpriteId,
    pub width: u32,
    pub height: u32,
}

impl Sprite {
    pub const fn new(id: u32, width: u32, height: u32) -> Self {
        Self {
            id: SpriteId(id),
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        f64::from(self.width)
    }

    #[inline]
    pub fn height(&self) -> f64 {
        f64::from(self.height)
    }

    /// Half extents rounded down to whole pixels
    #[inline]
    pub fn halves(&self) -> (f64, f64) {
        (f64::from(self.width / 2), f64::from(self.height / 2))
    }

    /// Length of the sprite's diagonal
    #[inline]
    pub fn diagonal(&self) -> f64 {
        self.width().hypot(self.height())
    }
}

/// One entry of the JSON manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SpriteEntry {
    name: String,
    width: u32,
    height: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Manifest {
    player: SpriteEntry,
    turret: SpriteEntry,
    projectile: SpriteEntry,
    meteors: Vec<SpriteEntry>,
}

/// Every sprite the simulation refers to, built once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct AssetCatalog {
    pub player: Sprite,
    pub turret: Sprite,
    pub projectile: Sprite,
    pub meteors: Vec<Sprite>,
    /// Names indexed by `SpriteId`, for the host's texture lookup
    names: Vec<String>,
}

impl AssetCatalog {
    /// Catalog matching the stock art set
    pub fn builtin() -> Result<Self, AssetError> {
        let manifest = Manifest {
            player: entry("player.png", 99, 75),
            turret: entry("canon_simple.png", 24, 66),
            projectile: entry("missle1.png", 9, 37),
            meteors: vec![
                entry("meteors/meteor_big1.png", 101, 84),
                entry("meteors/meteor_big2.png", 120, 98),
                entry("meteors/meteor_big3.png", 89, 82),
                entry("meteors/meteor_big4.png", 98, 96),
                entry("meteors/meteor_med1.png", 43, 43),
                entry("meteors/meteor_med2.png", 45, 40),
                entry("meteors/meteor_small1.png", 28, 28),
                entry("meteors/meteor_small2.png", 29, 26),
            ],
        };
        Self::from_manifest(manifest)
    }

    /// Build a catalog from a JSON manifest
    pub fn from_manifest_str(json: &str) -> Result<Self, AssetError> {
        let manifest: Manifest = serde_json::from_str(json)?;
        Self::from_manifest(manifest)
    }

    fn from_manifest(manifest: Manifest) -> Result<Self, AssetError> {
        if manifest.meteors.is_empty() {
            return Err(AssetError::NoMeteorSprites);
        }

        let mut names = Vec::with_capacity(3 + manifest.meteors.len());
        let mut register = |e: SpriteEntry| -> Result<Sprite, AssetError> {
            if e.width == 0 || e.height == 0 {
                return Err(AssetError::EmptySprite {
                    name: e.name,
                    width: e.width,
                    height: e.height,
                });
            }
            let sprite = Sprite::new(names.len() as u32, e.width, e.height);
            names.push(e.name);
            Ok(sprite)
        };

        let player = register(manifest.player)?;
        let turret = register(manifest.turret)?;
        let projectile = register(manifest.projectile)?;
        let meteors = manifest
            .meteors
            .into_iter()
            .map(&mut register)
            .collect::<Result<Vec<_>, _>>()?;

        log::info!("Asset catalog ready: {} sprites ({} meteors)", names.len(), meteors.len());

        Ok(Self {
            player,
            turret,
            projectile,
            meteors,
            names,
        })
    }

    /// File name registered for a sprite id
    pub fn name(&self, id: SpriteId) -> Option<&str> {
        self.names.get(id.0 as usize).map(String::as_str)
    }
}

fn entry(name: &str, width: u32, height: u32) -> SpriteEntry {
    SpriteEntry {
        name: name.to_string(),
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let assets = AssetCatalog::builtin().unwrap();
        assert_eq!(assets.meteors.len(), 8);
        assert_eq!(assets.name(assets.player.id), Some("player.png"));
        assert_eq!(assets.name(assets.meteors[0].id), Some("meteors/meteor_big1.png"));
        assert_eq!(assets.name(SpriteId(999)), None);
    }

    #[test]
    fn test_halves_round_down() {
        let sprite = Sprite::new(0, 99, 75);
        assert_eq!(sprite.halves(), (49.0, 37.0));
    }

    #[test]
    fn test_diagonal() {
        let sprite = Sprite::new(0, 3, 4);
        assert!((sprite.diagonal() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_manifest_without_meteors_fails() {
        let json = r#"{
            "player": { "name": "p", "width": 10, "height": 10 },
            "turret": { "name": "t", "width": 4, "height": 9 },
            "projectile": { "name": "m", "width": 2, "height": 6 },
            "meteors": []
        }"#;
        assert!(matches!(
            AssetCatalog::from_manifest_str(json),
            Err(AssetError::NoMeteorSprites)
        ));
    }

    #[test]
    fn test_manifest_zero_sized_sprite_fails() {
        let json = r#"{
            "player": { "name": "p", "width": 0, "height": 10 },
            "turret": { "name": "t", "width": 4, "height": 9 },
            "projectile": { "name": "m", "width": 2, "height": 6 },
            "meteors": [{ "name": "rock", "width": 20, "height": 20 }]
        }"#;
        match AssetCatalog::from_manifest_str(json) {
            Err(AssetError::EmptySprite { name, .. }) => assert_eq!(name, "p"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_manifest_assigns_sequential_ids() {
        let json = r#"{
            "player": { "name": "p", "width": 10, "height": 10 },
            "turret": { "name": "t", "width": 4, "height": 9 },
            "projectile": { "name": "m", "width": 2, "height": 6 },
            "meteors": [
                { "name": "a", "width": 20, "height": 20 },
                { "name": "b", "width": 30, "height": 30 }
            ]
        }"#;
        let assets = AssetCatalog::from_manifest_str(json).unwrap();
        assert_eq!(assets.player.id, SpriteId(0));
        assert_eq!(assets.projectile.id, SpriteId(2));
        assert_eq!(assets.meteors[1].id, SpriteId(4));
        assert_eq!(assets.name(SpriteId(4)), Some("b"));
    }
}
