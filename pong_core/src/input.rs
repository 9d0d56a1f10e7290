//! Held-key state and the paddle movement controller.

use crate::entity::{EntityId, ItemTable};
use crate::environment::Environment;
use crate::transform::TransformRegistry;

/// Keys the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Escape,
}

impl Key {
    pub const COUNT: usize = 3;

    fn index(self) -> usize {
        self as usize
    }
}

/// Held-state table, one flag per key.
///
/// The window event handler sets a flag on press and clears it on release;
/// the controller only reads. Starts all-false.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    held: [bool; Key::COUNT],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held[key.index()] = true;
    }

    pub fn release(&mut self, key: Key) {
        self.held[key.index()] = false;
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held[key.index()]
    }
}

/// Outcome of one frame of input evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    Exit,
}

/// Evaluate held keys for one frame.
///
/// Steers the right paddle and reports whether Escape requested an exit;
/// the caller owns the loop, so termination is a signal, not an action.
/// The left paddle has no key binding.
pub fn react_to_input(
    input: &InputState,
    items: &ItemTable,
    env: &Environment,
    registry: &mut TransformRegistry,
) -> FrameControl {
    let control = if input.is_held(Key::Escape) {
        FrameControl::Exit
    } else {
        FrameControl::Continue
    };

    steer_paddle(EntityId::PaddleRight, input, items, env, registry);

    control
}

/// Convert held up/down keys into bounded vertical motion for one paddle.
///
/// The candidate step is computed in whole pixels and checked against the
/// playfield half-height; inside the bound the normalized translation is
/// stepped incrementally, at the bound it is overwritten with the clamp
/// formula, which pins the paddle edge to the playfield edge. Up wins when
/// both keys are held.
pub fn steer_paddle(
    id: EntityId,
    input: &InputState,
    items: &ItemTable,
    env: &Environment,
    registry: &mut TransformRegistry,
) {
    let item = items.get(id);
    let delta_height = env.delta_height;
    let speed = item.speed as f32 * delta_height;
    let half_height_px = item.height / 2;

    let translation = registry.get(id).y();
    let pos_px = (translation / delta_height) as i32;

    if input.is_held(Key::Up) {
        let next = pos_px + item.speed;
        let top = next + half_height_px;
        if top < env.height / 2 {
            registry.set_y(id, translation + speed);
        } else {
            registry.set_y(id, 1.0 - half_height_px as f32 * delta_height);
        }
    } else if input.is_held(Key::Down) {
        let next = pos_px - item.speed;
        let bottom = next - half_height_px;
        if bottom > -(env.height / 2) {
            registry.set_y(id, translation - speed);
        } else {
            registry.set_y(id, -1.0 + half_height_px as f32 * delta_height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn fixture() -> (InputState, ItemTable, Environment, TransformRegistry) {
        let config = Config::new();
        (
            InputState::new(),
            ItemTable::from_config(&config),
            Environment::from_config(&config),
            TransformRegistry::new(),
        )
    }

    #[test]
    fn test_input_state_press_release() {
        let mut input = InputState::new();
        assert!(!input.is_held(Key::Up));
        input.press(Key::Up);
        assert!(input.is_held(Key::Up));
        input.release(Key::Up);
        assert!(!input.is_held(Key::Up));
    }

    #[test]
    fn test_one_tick_up_from_center() {
        let (mut input, items, env, mut registry) = fixture();
        input.press(Key::Up);
        steer_paddle(EntityId::PaddleRight, &input, &items, &env, &mut registry);
        let expected = 17.0 * (2.0 / 600.0);
        let y = registry.get(EntityId::PaddleRight).y();
        assert!((y - expected).abs() < 1e-6, "one 17 px tick, got {y}");
    }

    #[test]
    fn test_neither_key_held_leaves_position() {
        let (input, items, env, mut registry) = fixture();
        registry.set_y(EntityId::PaddleRight, 0.25);
        steer_paddle(EntityId::PaddleRight, &input, &items, &env, &mut registry);
        assert_eq!(registry.get(EntityId::PaddleRight).y(), 0.25);
    }

    #[test]
    fn test_up_clamps_at_top_boundary() {
        let (mut input, items, env, mut registry) = fixture();
        input.press(Key::Up);
        for _ in 0..200 {
            steer_paddle(EntityId::PaddleRight, &input, &items, &env, &mut registry);
        }
        let expected = 1.0 - 25.0 * (2.0 / 600.0);
        let y = registry.get(EntityId::PaddleRight).y();
        assert!((y - expected).abs() < 1e-6, "pinned to top, got {y}");
    }

    #[test]
    fn test_clamp_is_idempotent_frame_over_frame() {
        let (mut input, items, env, mut registry) = fixture();
        input.press(Key::Up);
        for _ in 0..200 {
            steer_paddle(EntityId::PaddleRight, &input, &items, &env, &mut registry);
        }
        let pinned = registry.get(EntityId::PaddleRight).y();
        for _ in 0..50 {
            steer_paddle(EntityId::PaddleRight, &input, &items, &env, &mut registry);
            assert_eq!(registry.get(EntityId::PaddleRight).y(), pinned, "no drift");
        }
    }

    #[test]
    fn test_upper_and_lower_clamps_are_symmetric() {
        let (mut input, items, env, mut registry) = fixture();
        input.press(Key::Up);
        for _ in 0..200 {
            steer_paddle(EntityId::PaddleRight, &input, &items, &env, &mut registry);
        }
        let top = registry.get(EntityId::PaddleRight).y();

        input.release(Key::Up);
        input.press(Key::Down);
        for _ in 0..400 {
            steer_paddle(EntityId::PaddleRight, &input, &items, &env, &mut registry);
        }
        let bottom = registry.get(EntityId::PaddleRight).y();

        assert!((top + bottom).abs() < 1e-6, "clamps mirror: {top} vs {bottom}");
    }

    #[test]
    fn test_up_takes_priority_over_down() {
        let (mut input, items, env, mut registry) = fixture();
        input.press(Key::Up);
        input.press(Key::Down);
        steer_paddle(EntityId::PaddleRight, &input, &items, &env, &mut registry);
        assert!(registry.get(EntityId::PaddleRight).y() > 0.0);
    }

    #[test]
    fn test_pixel_round_trip_within_one_pixel() {
        let (_, _, env, _) = fixture();
        for &translation in &[0.0f32, 0.056_666_67, 0.5, 0.916_666_7, -0.73] {
            let pos_px = (translation / env.delta_height) as i32;
            let back = pos_px as f32 * env.delta_height;
            assert!(
                (back - translation).abs() <= env.delta_height,
                "{translation} -> {pos_px} px -> {back}"
            );
        }
    }

    #[test]
    fn test_escape_requests_exit() {
        let (mut input, items, env, mut registry) = fixture();
        assert_eq!(
            react_to_input(&input, &items, &env, &mut registry),
            FrameControl::Continue
        );
        input.press(Key::Escape);
        assert_eq!(
            react_to_input(&input, &items, &env, &mut registry),
            FrameControl::Exit
        );
    }

    #[test]
    fn test_react_only_moves_right_paddle() {
        let (mut input, items, env, mut registry) = fixture();
        input.press(Key::Up);
        react_to_input(&input, &items, &env, &mut registry);
        assert!(registry.get(EntityId::PaddleRight).y() > 0.0);
        assert_eq!(registry.get(EntityId::PaddleLeft).y(), 0.0);
    }
}
