/// All game entity types. Pure data; the logic lives in `compute`.

use crate::config::{GameConfig, SpriteSize};
use crate::geometry::{Aabb, Collidable, Positioned};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Directional keys held this frame. Opposite keys may both be held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

// ── Shared entity base ────────────────────────────────────────────────────────

/// Position, heading and box shared by every entity.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub x: f32,
    pub y: f32,
    /// Degrees, clockwise, 0 = up.
    pub rotation: f32,
    pub width: f32,
    pub height: f32,
    /// Once set it is never cleared.
    pub dead: bool,
}

impl Body {
    pub fn new(x: f32, y: f32, rotation: f32, sprite: SpriteSize) -> Self {
        Self {
            x,
            y,
            rotation,
            width: sprite.width as f32,
            height: sprite.height as f32,
            dead: false,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }
}

impl Positioned for Body {
    fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn rotation(&self) -> f32 {
        self.rotation
    }
}

impl Collidable for Body {
    fn bounds(&self) -> Aabb {
        Body::bounds(self)
    }

    fn is_dead(&self) -> bool {
        self.dead
    }
}

macro_rules! delegate_to_body {
    ($($entity:ty),+ $(,)?) => {
        $(
            impl Positioned for $entity {
                fn position(&self) -> (f32, f32) {
                    self.body.position()
                }

                fn rotation(&self) -> f32 {
                    self.body.rotation
                }
            }

            impl Collidable for $entity {
                fn bounds(&self) -> Aabb {
                    self.body.bounds()
                }

                fn is_dead(&self) -> bool {
                    self.body.dead
                }
            }
        )+
    };
}

delegate_to_body!(Player, Monster, Bullet);

// ── Player & weapons ──────────────────────────────────────────────────────────

/// Fires on its own timer from the owner's position and heading.
/// Never drawn and never collided.
#[derive(Clone, Debug, PartialEq)]
pub struct Weapon {
    /// Seconds until the next shot.
    pub cooldown: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub body: Body,
    /// Reported raw; may go negative.
    pub health: i32,
    pub weapons: Vec<Weapon>,
    /// Input seen on the most recent update.
    pub input: InputState,
}

// ── Hostiles & projectiles ────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Monster {
    pub body: Body,
    /// Seconds until the next attack may land. Keeps falling below zero.
    pub attack_cooldown: f32,
    pub attack_damage: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub body: Body,
    /// Velocity, fixed at creation.
    pub dx: f32,
    pub dy: f32,
}

// ── Session ───────────────────────────────────────────────────────────────────

/// One game session. Independent sessions share nothing.
#[derive(Clone, Debug)]
pub struct World {
    pub config: GameConfig,
    pub player: Player,
    pub monsters: Vec<Monster>,
    pub bullets: Vec<Bullet>,
    pub score: u32,
    /// Seconds accumulated toward the next spawn.
    pub spawn_timer: f32,
    pub status: GameStatus,
    /// Score frozen at the moment the session ended.
    pub final_score: Option<u32>,
    /// Number of ticks applied.
    pub frame: u64,
}

// ── Render feed ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteKind {
    Player,
    Monster,
    Bullet,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
}

/// Everything the presentation layer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderFeed {
    pub sprites: Vec<Sprite>,
    pub score: u32,
    pub health: i32,
    pub game_over: bool,
    pub final_score: Option<u32>,
}
