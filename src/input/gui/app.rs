//! Main GUI application loop.

use crate::controllers::export::{ExportController, ExportRequest, ExportSettings};
use crate::controllers::hud::HudText;
use crate::controllers::ports::image_encoder::ImageEncoderPort;
use crate::core::actions::render::mandelbrot::render_preview;
use crate::core::actions::render::ports::display_surface::DisplaySurface;
use crate::core::camera::{apply_controls, apply_wheel};
use crate::core::data::render_config::RenderConfig;
use crate::core::data::viewport::Viewport;
use crate::input::gui::camera_input::{CameraInputState, GuiAction};
use crate::input::gui::errors::GuiError;
use crate::presenters::pixels::surface::PixelsSurface;
use log::{debug, error, info};
use std::sync::Arc;
use std::time::Instant;
use winit::{
    dpi::LogicalSize,
    event::{Event, KeyEvent, MouseScrollDelta, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowBuilder},
};

const WINDOW_TITLE: &str = "Mandelbrot Explorer";
const PIXELS_PER_WHEEL_NOTCH: f64 = 40.0;

/// Starting state of an interactive session.
#[derive(Debug, Clone, Default)]
pub struct GuiOptions {
    pub viewport: Viewport,
    pub config: RenderConfig,
    pub export: ExportSettings,
}

struct App {
    window: &'static Window,
    surface: PixelsSurface,
    viewport: Viewport,
    config: RenderConfig,
    input: CameraInputState,
    exports: ExportController,
    export_settings: ExportSettings,
    last_frame: Instant,
    title: String,
}

impl App {
    fn new(
        window: &'static Window,
        options: GuiOptions,
        encoder: Arc<dyn ImageEncoderPort>,
    ) -> Result<Self, GuiError> {
        let surface = PixelsSurface::new(window)?;
        let (width, height) = surface.size();

        Ok(Self {
            window,
            surface,
            viewport: options.viewport.fit_to_display(width, height),
            config: options.config,
            input: CameraInputState::default(),
            exports: ExportController::new(encoder),
            export_settings: options.export,
            last_frame: Instant::now(),
            title: String::new(),
        })
    }

    /// Advances the camera by the time since the previous frame, applies
    /// queued commands, then draws and presents a preview.
    fn redraw(&mut self) -> Result<(), pixels::Error> {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f64();
        self.last_frame = now;

        apply_controls(&mut self.viewport, &self.input.snapshot(), dt);
        apply_wheel(&mut self.viewport, self.input.take_wheel());
        for action in self.input.take_actions() {
            self.apply_action(action);
        }

        render_preview(&self.viewport, &self.config, &mut self.surface)?;
        self.refresh_title();

        Ok(())
    }

    fn apply_action(&mut self, action: GuiAction) {
        match action {
            GuiAction::IncreaseDensity => self.config.increase_density(),
            GuiAction::DecreaseDensity => self.config.decrease_density(),
            GuiAction::IncreaseIterations => self.config.increase_iterations(),
            GuiAction::DecreaseIterations => self.config.decrease_iterations(),
            GuiAction::Export => {
                self.start_export();
                return;
            }
        }

        debug!(
            "preview: {} iterations, density {}",
            self.config.max_iterations(),
            self.config.density()
        );
    }

    fn start_export(&mut self) {
        let (width, height) = self.surface.size();
        let request = ExportRequest::new(
            &self.viewport,
            &self.config,
            width,
            height,
            &self.export_settings,
        );

        match self.exports.start_export(request) {
            Ok(handle) => info!("export {} queued", handle.job_id()),
            Err(err) => debug!("export not started: {}", err),
        }
    }

    fn refresh_title(&mut self) {
        let hud = HudText::new(&self.viewport, &self.config, self.exports.status());
        let title = format!("{} | {}", WINDOW_TITLE, hud);

        if title != self.title {
            self.window.set_title(&title);
            self.title = title;
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        if let Err(err) = self.surface.resize(width, height) {
            error!("could not resize surface to {}x{}: {}", width, height, err);
            return;
        }

        let (width, height) = self.surface.size();
        self.viewport = self.viewport.fit_to_display(width, height);
    }

    fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key_code),
                        state,
                        repeat,
                        ..
                    },
                ..
            } => self.input.handle_key_event(*key_code, *state, *repeat),
            WindowEvent::MouseInput { state, button, .. } => {
                self.input.handle_mouse_button(*button, *state)
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let notches = match delta {
                    MouseScrollDelta::LineDelta(_, y) => f64::from(*y),
                    MouseScrollDelta::PixelDelta(position) => position.y / PIXELS_PER_WHEEL_NOTCH,
                };
                self.input.handle_wheel(notches);
            }
            WindowEvent::Focused(false) => self.input.reset(),
            _ => {}
        }
    }
}

/// Runs the interactive explorer.
///
/// This function does not return until the window is closed. A running
/// export is not waited for.
pub fn run_gui(options: GuiOptions, encoder: Arc<dyn ImageEncoderPort>) -> Result<(), GuiError> {
    let event_loop = EventLoop::new()?;

    // pixels borrows the window for the rest of the process
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(800.0, 800.0))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)?,
    ));

    let mut app = App::new(window, options, encoder)?;
    info!("press R to export {}", app.export_settings.output_path.display());

    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::RedrawRequested => {
                    if let Err(err) = app.redraw() {
                        error!("render error: {}", err);
                        elwt.exit();
                    }
                }
                WindowEvent::Resized(size) => app.resize(size.width, size.height),
                WindowEvent::ScaleFactorChanged { .. } => {
                    let size = window.inner_size();
                    app.resize(size.width, size.height);
                }
                other => app.handle_window_event(other),
            },
            Event::AboutToWait => window.request_redraw(),
            _ => {}
        }
    })?;

    Ok(())
}
