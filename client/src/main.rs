//! Native window, input and GPU plumbing around the game core.

mod renderer;

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

use pong_core::{Config, FrameControl, Game, InputState, Key};
use renderer::{DrawBatch, Renderer};

fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::ArrowUp => Some(Key::Up),
        KeyCode::ArrowDown => Some(Key::Down),
        KeyCode::Escape => Some(Key::Escape),
        _ => None,
    }
}

struct WindowState {
    window: Arc<Window>,
    renderer: Renderer,
}

struct App {
    game: Game,
    input: InputState,
    state: Option<WindowState>,
}

impl App {
    fn new() -> Self {
        Self {
            game: Game::new(Config::new()),
            input: InputState::new(),
            state: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let config = &self.game.config;
        let attrs = WindowAttributes::default()
            .with_title("PONG.")
            .with_inner_size(LogicalSize::new(
                config.screen_width as f64,
                config.screen_height as f64,
            ))
            .with_resizable(false);

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Window creation failed: {e}");
                event_loop.exit();
                return;
            }
        };

        log::info!(
            "Window created: {}x{}",
            window.inner_size().width,
            window.inner_size().height
        );

        match pollster::block_on(Renderer::new(window.clone(), &self.game.shapes)) {
            Ok(renderer) => {
                window.request_redraw();
                self.state = Some(WindowState { window, renderer });
            }
            Err(e) => {
                log::error!("Renderer setup failed: {e}");
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    state.renderer.resize(size.width, size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    if let Some(key) = map_key(code) {
                        match event.state {
                            ElementState::Pressed => self.input.press(key),
                            ElementState::Released => self.input.release(key),
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                if self.game.frame(&self.input) == FrameControl::Exit {
                    log::info!("Exit requested");
                    event_loop.exit();
                    return;
                }

                let mut batch = DrawBatch::new();
                self.game.render(&mut batch);
                if let Err(e) = state.renderer.draw_frame(&batch) {
                    log::error!("Frame failed: {e}");
                }
            }

            _ => {}
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app).expect("Event loop error");
}
