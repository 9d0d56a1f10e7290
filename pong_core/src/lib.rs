pub mod config;
pub mod display;
pub mod entity;
pub mod environment;
pub mod geometry;
pub mod input;
pub mod render;
pub mod transform;

pub use config::*;
pub use display::{Cell, DigitOutOfRange, Display};
pub use entity::*;
pub use environment::*;
pub use geometry::{QuadHandle, ShapeId, ShapeSet};
pub use input::{FrameControl, InputState, Key};
pub use render::{DrawBackend, RenderItem, RenderKind, RenderPayload};
pub use transform::{Transform, TransformRegistry};

/// Everything the game owns between frames.
///
/// Built once at startup; the per-frame cycle is `frame` (input in) then
/// `render` (draws out), exactly one cooperative loop with no background
/// work.
pub struct Game {
    pub config: Config,
    pub env: Environment,
    pub items: ItemTable,
    pub registry: TransformRegistry,
    pub shapes: ShapeSet,
    pub display_right: Display,
    pub display_left: Display,
    render_items: [RenderItem; EntityId::COUNT],
}

impl Game {
    pub fn new(config: Config) -> Self {
        let env = Environment::from_config(&config);
        let items = ItemTable::from_config(&config);

        let mut registry = TransformRegistry::new();
        registry.reset_all_to_identity();
        registry.set_x(EntityId::PaddleRight, config.paddle_x(1));
        registry.set_x(EntityId::PaddleLeft, config.paddle_x(0));

        let shapes = ShapeSet::build(&items, &env);

        // Displays sit mirrored about the screen center; the left board's
        // anchor backs off by its own full width. Cells are on the ball's
        // pixel pitch.
        let ball = *items.get(EntityId::Ball);
        let mut display_right =
            Display::new(config.display_x, config.display_y, true, ball.width, ball.height);
        let mut display_left = Display::new(
            -config.display_x - display::COLS as i32 * ball.width,
            config.display_y,
            false,
            ball.width,
            ball.height,
        );
        display_right.set_value(0).unwrap();
        display_left.set_value(2).unwrap();

        let paddle_shape = shapes.handle(ShapeId::Paddle);
        let ball_shape = shapes.handle(ShapeId::Ball);
        let render_items = [
            RenderItem {
                entity: EntityId::PaddleRight,
                shape: paddle_shape,
                kind: RenderKind::Basic,
            },
            RenderItem {
                entity: EntityId::PaddleLeft,
                shape: paddle_shape,
                kind: RenderKind::Basic,
            },
            RenderItem {
                entity: EntityId::Ball,
                shape: ball_shape,
                kind: RenderKind::Basic,
            },
            RenderItem {
                entity: EntityId::DisplayRight,
                shape: ball_shape,
                kind: RenderKind::Display,
            },
            RenderItem {
                entity: EntityId::DisplayLeft,
                shape: ball_shape,
                kind: RenderKind::Display,
            },
        ];

        log::debug!(
            "game set up: {}x{} playfield, {} shapes",
            env.width,
            env.height,
            ShapeId::COUNT
        );

        Self {
            config,
            env,
            items,
            registry,
            shapes,
            display_right,
            display_left,
            render_items,
        }
    }

    /// Run one frame of input evaluation. Returns whether the loop should
    /// keep going; the caller owns the actual window lifetime.
    pub fn frame(&mut self, input: &InputState) -> FrameControl {
        input::react_to_input(input, &self.items, &self.env, &mut self.registry)
    }

    /// Emit this frame's draws in the fixed entity order.
    pub fn render(&self, backend: &mut dyn DrawBackend) {
        for item in &self.render_items {
            let payload = match item.entity {
                EntityId::DisplayRight => RenderPayload::Display(&self.display_right),
                EntityId::DisplayLeft => RenderPayload::Display(&self.display_left),
                _ => RenderPayload::None,
            };
            render::draw(item, payload, &self.registry, &self.env, backend);
        }
    }

    /// Show a score on both boards. Each board holds a single digit, and
    /// neither board changes if either digit is out of range.
    pub fn set_score(&mut self, left: u8, right: u8) -> Result<(), DigitOutOfRange> {
        for digit in [left, right] {
            if digit > Display::MAX_DIGIT {
                return Err(DigitOutOfRange(digit));
            }
        }
        self.display_left.set_value(left)?;
        self.display_right.set_value(right)?;
        Ok(())
    }
}
