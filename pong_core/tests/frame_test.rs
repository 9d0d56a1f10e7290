use glam::Mat4;
use pong_core::{
    Config, DrawBackend, EntityId, FrameControl, Game, InputState, Key, QuadHandle,
};

/// Test backend that records every draw instead of touching a GPU.
struct Recorder {
    draws: Vec<(QuadHandle, Mat4)>,
}

impl Recorder {
    fn new() -> Self {
        Self { draws: Vec::new() }
    }
}

impl DrawBackend for Recorder {
    fn draw_quad(&mut self, shape: QuadHandle, transform: Mat4) {
        self.draws.push((shape, transform));
    }
}

#[test]
fn test_startup_positions() {
    let game = Game::new(Config::new());
    assert_eq!(game.registry.get(EntityId::PaddleRight).x(), 0.8);
    assert_eq!(game.registry.get(EntityId::PaddleLeft).x(), -0.8);
    assert_eq!(game.registry.get(EntityId::Ball).translation().length(), 0.0);
    assert_eq!(game.display_right.value(), 0);
    assert_eq!(game.display_left.value(), 2);
}

#[test]
fn test_hold_up_until_clamped() {
    let mut game = Game::new(Config::new());
    let mut input = InputState::new();
    input.press(Key::Up);

    assert_eq!(game.frame(&input), FrameControl::Continue);
    let after_one = game.registry.get(EntityId::PaddleRight).y();
    let expected_step = 17.0 * (2.0 / 600.0);
    assert!((after_one - expected_step).abs() < 1e-6);

    for _ in 0..100 {
        game.frame(&input);
    }
    let pinned = game.registry.get(EntityId::PaddleRight).y();
    let expected_pin = 1.0 - 25.0 * (2.0 / 600.0);
    assert!((pinned - expected_pin).abs() < 1e-6);

    // keep holding: no drift
    game.frame(&input);
    assert_eq!(game.registry.get(EntityId::PaddleRight).y(), pinned);
}

#[test]
fn test_escape_exits_loop() {
    let mut game = Game::new(Config::new());
    let mut input = InputState::new();
    assert_eq!(game.frame(&input), FrameControl::Continue);
    input.press(Key::Escape);
    assert_eq!(game.frame(&input), FrameControl::Exit);
    input.release(Key::Escape);
    assert_eq!(game.frame(&input), FrameControl::Continue);
}

#[test]
fn test_render_emits_fixed_order_and_counts() {
    let game = Game::new(Config::new());
    let mut recorder = Recorder::new();
    game.render(&mut recorder);

    // right paddle, left paddle, ball: one quad each; then the boards,
    // showing 0 (12 lit cells) and 2 (11 lit cells)
    assert_eq!(recorder.draws.len(), 3 + 12 + 11);

    let paddle = game.shapes.handle(pong_core::ShapeId::Paddle);
    let ball = game.shapes.handle(pong_core::ShapeId::Ball);
    assert_eq!(recorder.draws[0].0, paddle);
    assert_eq!(recorder.draws[1].0, paddle);
    assert_eq!(recorder.draws[2].0, ball);
    for (shape, _) in &recorder.draws[3..] {
        assert_eq!(*shape, ball, "display cells reuse the ball quad");
    }

    // paddles are drawn where the registry says
    assert_eq!(recorder.draws[0].1.w_axis.x, 0.8);
    assert_eq!(recorder.draws[1].1.w_axis.x, -0.8);
}

#[test]
fn test_score_change_is_visible_in_draw_count() {
    let mut game = Game::new(Config::new());
    game.set_score(1, 8).unwrap();

    let mut recorder = Recorder::new();
    game.render(&mut recorder);
    // 3 basic quads + digit 8 (13 cells) + digit 1 (5 cells)
    assert_eq!(recorder.draws.len(), 3 + 13 + 5);
}

#[test]
fn test_set_score_rejects_out_of_range_digit() {
    let mut game = Game::new(Config::new());
    assert!(game.set_score(3, 10).is_err());
    assert!(game.set_score(10, 3).is_err());
    // prior values survive the rejection
    assert_eq!(game.display_right.value(), 0);
    assert_eq!(game.display_left.value(), 2);
}

#[test]
fn test_display_cells_land_in_normalized_range() {
    let game = Game::new(Config::new());
    let mut recorder = Recorder::new();
    game.render(&mut recorder);

    for (_, matrix) in &recorder.draws {
        let (x, y) = (matrix.w_axis.x, matrix.w_axis.y);
        assert!((-1.0..=1.0).contains(&x), "x in normalized range, got {x}");
        assert!((-1.0..=1.0).contains(&y), "y in normalized range, got {y}");
    }
}
