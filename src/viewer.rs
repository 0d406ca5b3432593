//! Live playback in a window, one plot per scenario.

use std::time::{Duration, Instant};

use eframe::egui::{self, Color32};
use egui_plot::{Corner, Legend, Line, LineStyle, Plot, PlotPoints};

use crate::render::{grid_layout, title};
use crate::{Error, Frame, ScenarioFrame, Simulation, Solver};

/// Time between frames, matching a 20 fps export.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(50);

/// How the playback window behaves.
#[derive(Clone, Debug)]
pub struct ViewerSettings {
    /// Window title.
    pub title: String,
    /// Frames shown before playback loops back to the first one.
    pub nframes: usize,
    /// Time between frames.
    pub interval: Duration,
    /// Initial window size in points.
    pub window_size: [f32; 2],
    /// Whether or not to show warm-up progress on the console.
    pub verbose: bool,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            title: "Standing waves".to_string(),
            nframes: 200,
            interval: DEFAULT_INTERVAL,
            window_size: [1200.0, 600.0],
            verbose: false,
        }
    }
}

/// Drives a `Simulation` from the window's repaint loop.
///
/// Playback loops over `nframes` frames. The envelopes keep accumulating
/// across loops and are never reset.
pub struct Viewer<S: Solver> {
    simulation: Simulation<S>,
    settings: ViewerSettings,
    layout: (usize, usize),
    shown: usize,
    current: Option<Frame>,
    last_tick: Option<Instant>,
}

impl<S: Solver> Viewer<S> {
    pub fn new(simulation: Simulation<S>, settings: ViewerSettings) -> Self {
        Self {
            layout: grid_layout(simulation.scenarios().len()),
            simulation,
            settings,
            shown: 0,
            current: None,
            last_tick: None,
        }
    }

    /// Advances to the next frame once `interval` has passed since the
    /// last one. Returns whether a new frame was produced.
    pub fn tick(&mut self, now: Instant) -> Result<bool, Error> {
        if let Some(last) = self.last_tick {
            if now.duration_since(last) < self.settings.interval {
                return Ok(false);
            }
        }

        let index = self.shown % self.settings.nframes.max(1);
        self.current = Some(self.simulation.update(index)?);
        self.shown += 1;
        self.last_tick = Some(now);
        Ok(true)
    }

    pub fn current(&self) -> Option<&Frame> {
        self.current.as_ref()
    }

    pub fn simulation(&self) -> &Simulation<S> {
        &self.simulation
    }

    fn draw(&self, ui: &mut egui::Ui) {
        let frame = match self.current {
            Some(ref frame) => frame,
            None => return,
        };
        let (rows, cols) = self.layout;
        let plot_height = (ui.available_height() / rows as f32 - 30.0).max(80.0);

        for (row, scenarios) in frame.scenarios.chunks(cols).enumerate() {
            ui.columns(cols, |columns| {
                for (col, (ui, scenario)) in columns.iter_mut().zip(scenarios).enumerate() {
                    draw_scenario(ui, row * cols + col, scenario, plot_height);
                }
            });
        }
    }
}

fn points(x: &ndarray::Array1<f32>, y: &ndarray::Array1<f32>) -> PlotPoints {
    x.iter()
        .zip(y.iter())
        .map(|(&x, &y)| [f64::from(x), f64::from(y)])
        .collect()
}

fn draw_scenario(ui: &mut egui::Ui, id: usize, scenario: &ScenarioFrame, height: f32) {
    ui.vertical_centered(|ui| {
        ui.strong(title(scenario.vswr, scenario.gamma));
    });

    let x = &scenario.positions;
    let envelope = Color32::from_black_alpha(128);

    Plot::new(("scenario", id))
        .height(height)
        .legend(Legend::default().position(Corner::RightTop))
        .include_x(0.0)
        .include_x(2.0)
        .include_y(-2.0)
        .include_y(2.0)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(points(x, &scenario.waveforms.forward))
                    .color(Color32::BLUE)
                    .name("Forward"),
            );
            plot_ui.line(
                Line::new(points(x, &scenario.waveforms.reflected))
                    .color(Color32::RED)
                    .name("Reflected"),
            );
            plot_ui.line(
                Line::new(points(x, &scenario.waveforms.total))
                    .color(Color32::BLACK)
                    .name("Total"),
            );
            plot_ui.line(
                Line::new(points(x, &scenario.envelope_max))
                    .color(envelope)
                    .style(LineStyle::dashed_loose())
                    .name("Envelope"),
            );
            plot_ui.line(
                Line::new(points(x, &scenario.envelope_min))
                    .color(envelope)
                    .style(LineStyle::dashed_loose()),
            );
        });
}

impl<S: Solver> eframe::App for Viewer<S> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Err(err) = self.tick(Instant::now()) {
            tracing::error!(%err, "frame update failed");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        egui::CentralPanel::default().show(ctx, |ui| self.draw(ui));
        ctx.request_repaint_after(self.settings.interval);
    }
}

/// Warms the simulation up, then plays it back in a window until the
/// window is closed.
pub fn show<S: Solver + 'static>(
    mut simulation: Simulation<S>,
    settings: ViewerSettings,
) -> Result<(), Error> {
    simulation.warm_up(settings.verbose)?;

    let title = settings.title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(settings.window_size)
            .with_title(title.clone()),
        ..Default::default()
    };

    tracing::info!(nframes = settings.nframes, "opening viewer");
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok::<Box<dyn eframe::App>, _>(Box::new(Viewer::new(simulation, settings)))
        }),
    )
    .map_err(|e| Error::Viewer(e.to_string()))
}
