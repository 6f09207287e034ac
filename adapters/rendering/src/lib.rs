#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Maze Chase adapters.
//!
//! The core simulation owns no visual object; adapters compose a
//! [`FrameSnapshot`] from world queries once per tick and hand it to a
//! [`Presenter`]. Everything here is plain data.

use anyhow::Result as AnyResult;
use glam::Vec2;
use maze_chase_core::{AdversaryId, GameState, Position};

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }

    /// Returns a new color lightened towards white by the provided amount.
    #[must_use]
    pub fn lighten(self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);

        Self {
            red: lighten_channel(self.red, amount),
            green: lighten_channel(self.green, amount),
            blue: lighten_channel(self.blue, amount),
            alpha: self.alpha,
        }
    }
}

fn lighten_channel(channel: f32, amount: f32) -> f32 {
    channel + (1.0 - channel) * amount
}

/// Stock palette mirroring the reference presentation.
pub mod palette {
    use super::Color;

    /// Fill applied to the player sprite.
    pub const PLAYER_YELLOW: Color = Color::from_rgb_u8(0xff, 0xd5, 0x2e);
    /// Stroke applied to pathway cells.
    pub const PATHWAY_BLUE: Color = Color::from_rgb_u8(0x1f, 0x3c, 0xff);
    /// Fill applied to unconsumed collectibles.
    pub const COLLECTIBLE_WHITE: Color = Color::from_rgb_u8(0xff, 0xff, 0xff);
    /// Fill applied to the first adversary sprite.
    pub const ADVERSARY_RED: Color = Color::from_rgb_u8(0xd6, 0x2a, 0x2a);
    /// Fill applied to the second adversary sprite.
    pub const ADVERSARY_GREEN: Color = Color::from_rgb_u8(0x2f, 0xb5, 0x4a);
}

/// Converts a world-space position into a renderable vector.
#[must_use]
pub fn world_point(position: Position) -> Vec2 {
    Vec2::new(position.x(), position.y())
}

/// Player sprite data for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerSprite {
    /// Player position in world units.
    pub position: Vec2,
    /// Facing angle in radians the sprite is turned (or turning) toward.
    pub facing: f32,
    /// Whether the bounded turn animation is still running.
    pub turn_in_progress: bool,
}

/// Adversary sprite data for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdversarySprite {
    /// Identifier of the adversary, stable across frames.
    pub id: AdversaryId,
    /// Interpolated position in world units.
    pub position: Vec2,
}

/// Collectible sprite data for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollectibleSprite {
    /// Collectible position in world units.
    pub position: Vec2,
    /// Consumed collectibles are skipped by most presenters.
    pub consumed: bool,
}

/// Immutable description of one presentable frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameSnapshot {
    /// Top-level state gating the simulation.
    pub game_state: GameState,
    /// Generation counter; a change signals that a restart happened.
    pub generation: u64,
    /// Score total to display.
    pub score: u32,
    /// Player sprite data.
    pub player: PlayerSprite,
    /// Adversary sprites ordered by id.
    pub adversaries: Vec<AdversarySprite>,
    /// Collectible sprites in spawn order.
    pub collectibles: Vec<CollectibleSprite>,
}

impl FrameSnapshot {
    /// Count of collectibles still presentable as uneaten.
    #[must_use]
    pub fn remaining_collectibles(&self) -> usize {
        self.collectibles
            .iter()
            .filter(|sprite| !sprite.consumed)
            .count()
    }
}

/// Sink that receives one composed frame per tick.
pub trait Presenter {
    /// Presents the provided frame, failing only on adapter-level errors.
    fn present(&mut self, snapshot: &FrameSnapshot) -> AnyResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lighten_moves_channels_toward_white() {
        let color = Color::from_rgb_u8(0, 0, 0).lighten(0.5);
        assert!((color.red - 0.5).abs() < f32::EPSILON);
        assert!((color.alpha - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn lighten_clamps_the_amount() {
        let color = Color::from_rgb_u8(10, 20, 30).lighten(2.0);
        assert!((color.red - 1.0).abs() < f32::EPSILON);
        assert!((color.green - 1.0).abs() < f32::EPSILON);
        assert!((color.blue - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn remaining_collectibles_ignores_consumed_sprites() {
        let snapshot = FrameSnapshot {
            game_state: GameState::Playing,
            generation: 0,
            score: 1,
            player: PlayerSprite {
                position: Vec2::ZERO,
                facing: 0.0,
                turn_in_progress: false,
            },
            adversaries: Vec::new(),
            collectibles: vec![
                CollectibleSprite {
                    position: Vec2::new(1.0, 0.0),
                    consumed: true,
                },
                CollectibleSprite {
                    position: Vec2::new(2.0, 0.0),
                    consumed: false,
                },
            ],
        };

        assert_eq!(snapshot.remaining_collectibles(), 1);
    }

    #[test]
    fn world_point_preserves_coordinates() {
        let point = world_point(Position::new(195.0, 337.0));
        assert_eq!(point, Vec2::new(195.0, 337.0));
    }
}
