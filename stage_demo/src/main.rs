//! Stage demo: builds a small scene with the object factory and logs it
//!
//! Usage: `stage_demo [config.toml|config.ron]`

use rand::Rng;
use stage_engine::config::ConfigError;
use stage_engine::prelude::*;
use stage_engine::tween::TweenError;
use thiserror::Error;

// Scene layout
const ASTEROID_COUNT: usize = 12;
const ASTEROID_GROUP_SIZE: usize = 10;
const TILE_SIZE: u32 = 32;

const LEVEL_CSV: &str = "\
1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1
1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1
1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1
1,0,0,0,0,0,0,0,0,0,2,2,2,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1
1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,2,2,2,0,0,0,1
1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1
1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1
";

#[derive(Error, Debug)]
enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    World(#[from] WorldError),

    #[error(transparent)]
    Tween(#[from] TweenError),
}

fn load_config() -> Result<GameConfig, DemoError> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading configuration from {}", path);
            Ok(GameConfig::load_from_file(&path)?)
        }
        None => Ok(GameConfig::default()),
    }
}

fn build_scene(game: &mut Game) -> Result<(), DemoError> {
    let mut rng = rand::thread_rng();

    game.add().tilemap(
        "level_tiles",
        LEVEL_CSV,
        TilemapFormat::Csv,
        TilemapOptions::with_tile_size(TILE_SIZE, TILE_SIZE),
    )?;
    let bounds = game.world.bounds();
    log::info!("World resized to {:?}", bounds);

    game.add().scroll_zone("starfield", ScrollZoneOptions {
        width: bounds.width,
        height: bounds.height,
        ..ScrollZoneOptions::default()
    })?;

    let player = game.add().sprite(bounds.width * 0.5, bounds.height * 0.5, SpriteOptions::new("ship"))?;
    let bob = game.add().tween(player.key(), true)?;
    if let Some(tween) = game.tweens.get_mut(bob) {
        *tween = Tween::new(player.key())
            .to(TweenProperty::Y, bounds.height * 0.5 - 16.0)
            .with_duration(800.0)
            .with_easing(Easing::QuadInOut)
            .with_repeat(u32::MAX, true);
        tween.start();
    }

    let asteroids = game.add().group(ASTEROID_GROUP_SIZE)?;
    let mut rejected = 0;
    for _ in 0..ASTEROID_COUNT {
        let x = rng.gen_range(0.0..bounds.width);
        let y = rng.gen_range(0.0..bounds.height);
        let asteroid = Sprite::new(x, y, "asteroids").with_frame(rng.gen_range(0..4u32));
        match game.world.add_to_group(asteroids.key(), asteroid) {
            Ok(_) => {}
            Err(WorldError::GroupFull { capacity, .. }) => {
                log::warn!("Asteroid field is capped at {}", capacity);
                rejected += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }
    log::info!("Spawned {} asteroid(s), {} rejected", ASTEROID_COUNT - rejected, rejected);

    game.add().button(
        ButtonOptions::new(16.0, 16.0, "pause_button")
            .with_frames(1u32, 0u32, 2u32)
            .with_callback(|button| log::info!("Pause pressed at {:?}", button.sprite.position)),
    )?;

    game.add().audio("theme", SoundOptions { volume: 0.6, looped: true });
    game.add().camera(bounds.width - 200.0, 0.0, 200.0, 150.0);

    // physics shapes and render targets are handed back unowned
    let hull = game.add().circle(bounds.width * 0.5, bounds.height * 0.5, 16.0);
    let pickup = game.add().aabb(100.0, 100.0, 25.0, 25.0);
    let wall = game.add().cell(16.0, 16.0, 16.0, 16.0);
    let minimap = game.add().dynamic_texture(128, 96);
    log::debug!(
        "Hull {:?}, pickup {:?}, wall solid: {}, minimap {}x{}",
        hull, pickup, wall.is_solid(), minimap.width(), minimap.height()
    );

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    stage_engine::foundation::logging::init_with_level(&config.engine.log_level);

    let mut game = Game::new(config)?;
    build_scene(&mut game)?;

    log::info!(
        "Scene ready: {} object(s), {} camera(s), {} sound(s), {} tween(s)",
        game.world.len(),
        game.world.cameras.len(),
        game.sound.len(),
        game.tweens.len()
    );
    for (id, object) in game.world.iter() {
        log::debug!("{:?}: {} at {:?}", id, object.kind_name(), object.position());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_fits_resized_world() {
        let mut game = Game::new(GameConfig::default()).unwrap();
        build_scene(&mut game).unwrap();

        let bounds = game.world.bounds();
        assert_eq!(bounds, Rect::new(0.0, 0.0, 30.0 * 32.0, 7.0 * 32.0));

        for (id, object) in game.world.iter() {
            if let Some(position) = object.position() {
                assert!(bounds.contains(position), "{:?} at {:?} is outside {:?}", id, position, bounds);
            }
            if let GameObject::ScrollZone(zone) = object {
                assert_eq!(zone.width, bounds.width);
                assert_eq!(zone.height, bounds.height);
            }
        }
        assert_eq!(game.tweens.len(), 1);
    }
}
