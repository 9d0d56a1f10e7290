use crate::config::Config;
use crate::geometry::ShapeId;

/// The five fixed drawable objects. None are created or destroyed at
/// runtime, so every id is valid for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityId {
    PaddleRight,
    PaddleLeft,
    Ball,
    DisplayRight,
    DisplayLeft,
}

impl EntityId {
    pub const COUNT: usize = 5;

    /// Fixed per-frame draw order.
    pub const ALL: [EntityId; Self::COUNT] = [
        EntityId::PaddleRight,
        EntityId::PaddleLeft,
        EntityId::Ball,
        EntityId::DisplayRight,
        EntityId::DisplayLeft,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Immutable pixel-space measurements for one entity, set once at startup.
#[derive(Debug, Clone, Copy)]
pub struct Item {
    pub width: i32,
    pub height: i32,
    pub speed: i32, // pixels of movement per input tick
    pub shape: ShapeId,
}

/// One `Item` per entity.
///
/// The displays carry the ball's measurements: their cells are drawn with
/// the ball quad and laid out on the ball's pixel pitch.
#[derive(Debug, Clone)]
pub struct ItemTable {
    items: [Item; EntityId::COUNT],
}

impl ItemTable {
    pub fn from_config(config: &Config) -> Self {
        let paddle = Item {
            width: config.paddle_width,
            height: config.paddle_height,
            speed: config.paddle_speed,
            shape: ShapeId::Paddle,
        };
        let ball = Item {
            width: config.ball_width,
            height: config.ball_height,
            speed: config.ball_speed,
            shape: ShapeId::Ball,
        };
        Self {
            items: [paddle, paddle, ball, ball, ball],
        }
    }

    pub fn get(&self, id: EntityId) -> &Item {
        &self.items[id.index()]
    }
}
