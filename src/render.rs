//! Drawing frames as a grid of line charts and exporting them as a GIF.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::{Error, Frame, ScenarioFrame, Vswr};

/// Frame rate used when nothing else is asked for.
pub const DEFAULT_FPS: u32 = 20;
/// A 12 x 6 inch figure at 150 dpi.
pub const DEFAULT_RESOLUTION: (u32, u32) = (1800, 900);

const X_RANGE: std::ops::Range<f32> = 0.0..2.0;
const Y_RANGE: std::ops::Range<f32> = -2.0..2.0;
const MAX_COLUMNS: usize = 3;

/// How an animation should be written to file.
#[derive(Debug)]
pub struct ExportSettings<P: AsRef<Path>> {
    /// The path to the GIF file.
    pub filename: P,
    /// Frames per second of the exported animation.
    pub fps: u32,
    /// Width and height in pixels.
    pub resolution: (u32, u32),
}

impl<E> From<DrawingAreaErrorKind<E>> for Error
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        Error::Render(err.to_string())
    }
}

/// Rows and columns of panels for `nscenarios` charts.
pub fn grid_layout(nscenarios: usize) -> (usize, usize) {
    let cols = nscenarios.clamp(1, MAX_COLUMNS);
    let rows = (nscenarios + cols - 1) / cols;
    (rows.max(1), cols)
}

/// Chart caption for a scenario.
pub fn title(vswr: Vswr, gamma: f32) -> String {
    if vswr.is_infinite() {
        "VSWR = ∞ (Γ = 1)".to_string()
    } else {
        format!("VSWR = {}: Γ = {:.2}", vswr, gamma)
    }
}

/// Draws every scenario of `frame` into its own panel of `root`.
pub fn draw_frame<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    frame: &Frame,
    layout: (usize, usize),
) -> Result<(), Error> {
    root.fill(&WHITE)?;
    let panels = root.split_evenly(layout);

    for (panel, scenario) in panels.iter().zip(frame.scenarios.iter()) {
        draw_scenario(panel, scenario)?;
    }

    Ok(())
}

fn draw_scenario<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    scenario: &ScenarioFrame,
) -> Result<(), Error> {
    let mut chart = ChartBuilder::on(area)
        .caption(title(scenario.vswr, scenario.gamma), ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(X_RANGE, Y_RANGE)?;

    chart
        .configure_mesh()
        .light_line_style(BLACK.mix(0.05))
        .draw()?;

    let x = &scenario.positions;
    let points = |y: &ndarray::Array1<f32>| {
        x.iter().copied().zip(y.iter().copied()).collect::<Vec<_>>()
    };
    let envelope_style = BLACK.mix(0.5).stroke_width(1);

    chart
        .draw_series(LineSeries::new(points(&scenario.waveforms.forward), &BLUE))?
        .label("Forward")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
    chart
        .draw_series(LineSeries::new(points(&scenario.waveforms.reflected), &RED))?
        .label("Reflected")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));
    chart
        .draw_series(LineSeries::new(points(&scenario.waveforms.total), &BLACK))?
        .label("Total")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK));
    chart
        .draw_series(DashedLineSeries::new(
            points(&scenario.envelope_max),
            6,
            4,
            envelope_style,
        ))?
        .label("Envelope")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], envelope_style));
    chart.draw_series(DashedLineSeries::new(
        points(&scenario.envelope_min),
        6,
        4,
        envelope_style,
    ))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

/// Writes playback frames into an animated GIF, one GIF frame per call to
/// `draw`.
pub struct GifExporter {
    root: DrawingArea<BitMapBackend<'static>, Shift>,
    layout: (usize, usize),
    nframes: usize,
}

impl GifExporter {
    pub fn new<P: AsRef<Path>>(
        settings: &ExportSettings<P>,
        layout: (usize, usize),
    ) -> Result<Self, Error> {
        let filename = settings.filename.as_ref();
        let frame_delay = 1000 / settings.fps.max(1);
        tracing::info!(
            path = %filename.display(),
            fps = settings.fps,
            width = settings.resolution.0,
            height = settings.resolution.1,
            "exporting animation"
        );

        let root = BitMapBackend::gif(filename, settings.resolution, frame_delay)
            .map_err(|e| Error::Render(e.to_string()))?
            .into_drawing_area();

        Ok(Self {
            root,
            layout,
            nframes: 0,
        })
    }

    pub fn draw(&mut self, frame: &Frame) -> Result<(), Error> {
        draw_frame(&self.root, frame, self.layout)?;
        self.root.present()?;
        self.nframes += 1;
        Ok(())
    }

    /// Closes the file. Frames are already written by `draw`.
    pub fn finish(self) -> Result<(), Error> {
        tracing::info!(nframes = self.nframes, "export complete");
        Ok(())
    }
}
