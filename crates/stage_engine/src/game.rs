//! Game root
//!
//! The game owns the world and the managers that objects are registered
//! with, and hands out the object factory.

use crate::{
    audio::SoundManager,
    config::ConfigError,
    core::GameConfig,
    factory::GameObjectFactory,
    objects::TilemapError,
    tween::{TweenError, TweenManager},
    world::{ObjectId, World, WorldError},
};
use thiserror::Error;

/// Main game struct
pub struct Game {
    /// Scene world containing all live objects and cameras
    pub world: World,

    /// Sound registration
    pub sound: SoundManager,

    /// Tween registration
    pub tweens: TweenManager,

    config: GameConfig,
}

impl Game {
    /// Create a new game from a validated configuration
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        log::info!("Initializing game...");

        let world = World::new(&config.stage);
        let sound = SoundManager::new(&config.audio);
        let tweens = TweenManager::new();

        Ok(Self {
            world,
            sound,
            tweens,
            config,
        })
    }

    /// Configuration the game was created with
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Object factory bound to this game
    pub fn add(&mut self) -> GameObjectFactory<'_> {
        GameObjectFactory::new(self)
    }

    /// Remove an object (and its children) together with the tweens on them
    pub fn destroy(&mut self, id: ObjectId) -> Result<usize, GameError> {
        let removed = self.world.remove(id)?;
        let tweens: usize = removed.iter().map(|id| self.tweens.remove_all_for(*id)).sum();
        log::debug!("Destroyed {} object(s) and {} tween(s)", removed.len(), tweens);
        Ok(removed.len())
    }
}

/// Game-level errors
#[derive(Error, Debug)]
pub enum GameError {
    /// Configuration failed to load or validate
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// World insertion or removal failed
    #[error("World error: {0}")]
    World(#[from] WorldError),

    /// Tween creation failed
    #[error("Tween error: {0}")]
    Tween(#[from] TweenError),

    /// Map data could not be parsed
    #[error("Tilemap error: {0}")]
    Tilemap(#[from] TilemapError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StageConfig;
    use crate::objects::Sprite;
    use crate::tween::Tween;

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = GameConfig::default().with_stage(StageConfig::new(-1.0, 10.0));
        assert!(matches!(Game::new(config), Err(GameError::Config(_))));
    }

    #[test]
    fn test_destroy_drops_tweens() {
        let mut game = Game::new(GameConfig::default()).unwrap();
        let sprite = game.world.add(Sprite::new(0.0, 0.0, "a")).unwrap();
        let other = game.world.add(Sprite::new(0.0, 0.0, "b")).unwrap();
        game.tweens.add(Tween::new(sprite.key()));
        game.tweens.add(Tween::new(other.key()));

        assert_eq!(game.destroy(sprite.key()).unwrap(), 1);
        assert_eq!(game.tweens.len(), 1);
        assert!(matches!(game.destroy(sprite.key()), Err(GameError::World(_))));
    }
}
