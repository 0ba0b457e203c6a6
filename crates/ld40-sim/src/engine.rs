//! Game world: the terrain, the player and their laser beams.
//!
//! `GameWorld` consumes one `InputFrame` per tick, runs the player systems
//! in a fixed order and produces `WorldSnapshot`s. Headless, so the whole
//! game update is testable without a window.

use ld40_core::commands::InputFrame;
use ld40_core::config::GameConfig;
use ld40_core::state::{LaserBeam, PlayerState, WorldSnapshot};
use ld40_core::types::SimTime;
use ld40_terrain::{height_field_vertices, HeightField, TerrainError, Vertex};

use crate::systems;

pub struct GameWorld {
    terrain: HeightField,
    player: PlayerState,
    beams: Vec<LaserBeam>,
    time: SimTime,
    config: GameConfig,
}

impl GameWorld {
    /// Place a grounded player at the world origin of `terrain`.
    ///
    /// The terrain keeps whatever scale it was built with; `load` applies
    /// the configured one.
    pub fn new(config: GameConfig, terrain: HeightField) -> Self {
        let mut player = PlayerState::default();
        player.position.y = terrain.height_at(0.0, 0.0);
        Self {
            terrain,
            player,
            beams: Vec::new(),
            time: SimTime::default(),
            config,
        }
    }

    /// Load the configured heightmap and build the world on it.
    pub fn load(config: GameConfig) -> Result<Self, TerrainError> {
        let terrain = HeightField::load(&config.terrain.heightmap, config.terrain.height_per_pixel)?
            .with_scale(config.terrain.scale);
        tracing::info!(
            side = terrain.side(),
            min = terrain.min_height(),
            max = terrain.max_height(),
            "terrain loaded"
        );
        Ok(Self::new(config, terrain))
    }

    /// Advance the game by one tick and return the resulting snapshot.
    pub fn tick(&mut self, input: &InputFrame) -> WorldSnapshot {
        let player_cfg = &self.config.player;

        systems::movement::jump(&mut self.player, input, player_cfg);
        systems::movement::fall(&mut self.player, player_cfg);
        systems::movement::walk(&mut self.player, input, player_cfg);
        systems::look::run(&mut self.player, input, player_cfg);
        systems::grounding::run(&mut self.player, &self.terrain);

        if input.shoot {
            let beam = systems::weapon::fire(&self.player, &self.terrain, player_cfg);
            self.beams.push(beam);
        }
        systems::weapon::fade(&mut self.beams, player_cfg.beam_decay);

        self.time.advance();
        self.snapshot()
    }

    /// Current state without advancing.
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            time: self.time,
            player: self.player,
            beams: self.beams.clone(),
        }
    }

    /// Vertices for the terrain's vertex buffer.
    pub fn terrain_vertices(&self) -> Vec<Vertex> {
        height_field_vertices(&self.terrain)
    }

    pub fn terrain(&self) -> &HeightField {
        &self.terrain
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn beams(&self) -> &[LaserBeam] {
        &self.beams
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Put the player in an arbitrary state (for tests).
    #[cfg(test)]
    pub fn set_player(&mut self, player: PlayerState) {
        self.player = player;
    }
}
