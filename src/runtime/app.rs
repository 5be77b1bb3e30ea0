use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::ModifiersState;
use winit::window::Window;

use gridpad::commands::Cmd;
use gridpad::config::GridConfig;
use gridpad::messages::{AppMsg, Msg, UiMsg};
use gridpad::model::AppModel;
use gridpad::update::update;

use super::input::handle_key;
use super::mouse::{handle_click, wheel_lines_msg};
use crate::view::Renderer;

/// How often transient status messages are checked for expiry
const TICK_INTERVAL: Duration = Duration::from_millis(500);

pub struct App {
    model: AppModel,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    /// Kept alive for as long as the surface exists
    context: Option<Context<Rc<Window>>>,
    last_tick: Instant,
    modifiers: ModifiersState,
    mouse_position: Option<(f64, f64)>,
}

impl App {
    pub fn new(window_width: u32, window_height: u32, config: GridConfig) -> Self {
        Self {
            model: AppModel::new(window_width, window_height, config),
            renderer: None,
            window: None,
            context: None,
            last_tick: Instant::now(),
            modifiers: ModifiersState::empty(),
            mouse_position: None,
        }
    }

    /// Create the window, surface and renderer
    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title("Gridpad")
            .with_inner_size(LogicalSize::new(1200, 720));

        let window = Rc::new(
            event_loop
                .create_window(window_attributes)
                .map_err(|e| anyhow!("Failed to create window: {}", e))?,
        );
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow!("Failed to create graphics context: {}", e))?;
        let renderer = Renderer::new(Rc::clone(&window), &context, &self.model.config)?;

        let size = window.inner_size();
        update(
            &mut self.model,
            Msg::App(AppMsg::SetMetrics {
                line_height: renderer.line_height(),
                char_width: renderer.char_width(),
            }),
        );
        update(
            &mut self.model,
            Msg::App(AppMsg::Resize(size.width, size.height)),
        );

        self.renderer = Some(renderer);
        self.window = Some(window);
        self.context = Some(context);
        Ok(())
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        match event {
            WindowEvent::Resized(size) => update(
                &mut self.model,
                Msg::App(AppMsg::Resize(size.width, size.height)),
            ),
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => self.rescale(*scale_factor),
            WindowEvent::ModifiersChanged(mods) => {
                self.modifiers = mods.state();
                None
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return None;
                }
                handle_key(
                    &mut self.model,
                    event.logical_key.clone(),
                    self.modifiers.control_key(),
                    self.modifiers.super_key(),
                )
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    tracing::error!("Render error: {}", e);
                }
                None
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_position = Some((position.x, position.y));
                None
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                let (x, y) = self.mouse_position?;
                handle_click(&mut self.model, x, y)
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let msg = match delta {
                    MouseScrollDelta::LineDelta(x, y) => wheel_lines_msg(&self.model, *x, *y),
                    MouseScrollDelta::PixelDelta(pos) => Msg::Ui(UiMsg::Scroll {
                        dx: -pos.x as f32,
                        dy: -pos.y as f32,
                    }),
                };
                update(&mut self.model, msg)
            }
            _ => None,
        }
    }

    /// Rebuild font metrics for the new DPI and push them into the model
    fn rescale(&mut self, scale_factor: f64) -> Option<Cmd> {
        let renderer = self.renderer.as_mut()?;
        if let Err(e) = renderer.set_scale_factor(self.model.config.font_size, scale_factor) {
            tracing::error!("Failed to rescale font: {}", e);
            return None;
        }
        tracing::debug!(scale_factor, "scale factor changed");

        update(
            &mut self.model,
            Msg::App(AppMsg::SetMetrics {
                line_height: renderer.line_height(),
                char_width: renderer.char_width(),
            }),
        )
    }

    fn render(&mut self) -> Result<()> {
        if let Some(renderer) = &mut self.renderer {
            renderer.render(&self.model)?;
        }
        Ok(())
    }

    fn tick(&mut self) -> Option<Cmd> {
        update(&mut self.model, Msg::Ui(UiMsg::Tick))
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_window(event_loop) {
            tracing::error!("Startup failed: {:#}", e);
            eprintln!("gridpad: {:#}", e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.clone() else {
            return;
        };
        if window_id != window.id() {
            return;
        }

        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        if let Some(cmd) = self.handle_event(&event) {
            if cmd.is_quit() {
                event_loop.exit();
            } else if cmd.needs_redraw() {
                window.request_redraw();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if now.duration_since(self.last_tick) >= TICK_INTERVAL {
            self.last_tick = now;
            if self.tick().is_some_and(|cmd| cmd.needs_redraw()) {
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(self.last_tick + TICK_INTERVAL));
    }
}
