use std::path::Path;

use crate::render::{ExportSettings, GifExporter};
use crate::{ComputeDescriptor, Envelope, Error, Solver, Vswr, Waveforms};

/// Simulation specific parameters.
#[derive(Copy, Clone, Debug)]
pub struct SimulationParameters {
    /// The length of each temporal step in the simulation.
    pub delta_t: f64,
    /// Number of steps spanning one period of the source.
    pub frames_per_cycle: usize,
    /// Number of steps evaluated before playback starts.
    pub warmup_steps: usize,
    /// The time of the first playback frame.
    pub time_offset: f64,
}

/// Describes a simulation.
pub struct SimulationDescriptor<S: Solver> {
    /// One `Solver` per VSWR scenario, in display order.
    pub scenarios: Vec<S>,
    /// The parameters for the simulation.
    pub sim_params: SimulationParameters,
}

/// Describes a playback run.
pub struct RunDescriptor<P: AsRef<Path>> {
    /// How many frames to play back after the warm-up.
    pub nframes: usize,
    /// Whether or not to show progress on the console.
    pub verbose: bool,
    /// Where, if anywhere, to export the animation.
    pub export_settings: Option<ExportSettings<P>>,
}

/// Where the simulation is in its life cycle.
///
/// The only transition is `Warmup` to `Playback`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// The envelope is still being filled in and nothing is shown.
    Warmup,
    /// Frames are being produced. Holds the index of the next frame.
    Playback { next_frame: usize },
}

/// A single VSWR case together with its running envelope.
pub struct Scenario<S: Solver> {
    solver: S,
    envelope: Envelope,
}

impl<S: Solver> Scenario<S> {
    fn new(solver: S) -> Self {
        let seed = solver.compute(ComputeDescriptor { time: 0.0 });
        Self {
            envelope: Envelope::new(seed.total.view()),
            solver,
        }
    }

    fn step(&mut self, time: f64) -> Result<Waveforms, Error> {
        let waveforms = self.solver.compute(ComputeDescriptor { time });
        self.envelope.observe(waveforms.total.view())?;
        Ok(waveforms)
    }

    pub fn solver(&self) -> &S {
        &self.solver
    }

    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    pub fn vswr(&self) -> Vswr {
        self.solver.vswr()
    }

    pub fn gamma(&self) -> f32 {
        self.solver.gamma()
    }
}

/// What one scenario shows during a playback frame.
#[derive(Clone, Debug)]
pub struct ScenarioFrame {
    pub vswr: Vswr,
    pub gamma: f32,
    pub positions: ndarray::Array1<f32>,
    pub waveforms: Waveforms,
    pub envelope_max: ndarray::Array1<f32>,
    pub envelope_min: ndarray::Array1<f32>,
}

/// The visible state of every scenario at one playback frame.
#[derive(Clone, Debug)]
pub struct Frame {
    pub index: usize,
    pub time: f64,
    pub scenarios: Vec<ScenarioFrame>,
}

/// The main `struct` of the crate.
pub struct Simulation<S: Solver> {
    scenarios: Vec<Scenario<S>>,
    sim_params: SimulationParameters,
    phase: Phase,
}

impl<S: Solver> Simulation<S> {
    /// Creates a new `Simulation`, seeding every envelope with the
    /// waveform at time zero.
    #[inline]
    pub fn new(desc: SimulationDescriptor<S>) -> Result<Self, Error> {
        if desc.scenarios.is_empty() {
            return Err(Error::EmptyScenarioList);
        }

        Ok(Self {
            scenarios: desc.scenarios.into_iter().map(Scenario::new).collect(),
            sim_params: desc.sim_params,
            phase: Phase::Warmup,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn scenarios(&self) -> &[Scenario<S>] {
        &self.scenarios
    }

    pub fn sim_params(&self) -> SimulationParameters {
        self.sim_params
    }

    /// Runs the warm-up steps, filling in the envelopes without producing
    /// frames, and switches to playback. Does nothing once in playback.
    pub fn warm_up(&mut self, verbose: bool) -> Result<(), Error> {
        if self.phase != Phase::Warmup {
            return Ok(());
        }

        let nsteps = self.sim_params.warmup_steps;
        tracing::info!(nsteps, "warming up envelopes");
        let bar = if verbose {
            Some(indicatif::ProgressBar::new(nsteps as u64))
        } else {
            None
        };

        for t_index in 0..nsteps {
            let t = t_index as f64 * self.sim_params.delta_t;
            for scenario in self.scenarios.iter_mut() {
                scenario.step(t)?;
            }

            if let Some(ref bar) = bar {
                bar.inc(1)
            }
        }

        if let Some(ref bar) = bar {
            bar.finish();
        }

        self.phase = Phase::Playback { next_frame: 0 };
        tracing::info!(time_offset = self.sim_params.time_offset, "playback ready");
        Ok(())
    }

    /// Computes playback frame `frame` and widens the envelopes with it.
    ///
    /// Finishes the warm-up first if it has not run yet.
    pub fn update(&mut self, frame: usize) -> Result<Frame, Error> {
        self.warm_up(false)?;

        let time = self.sim_params.time_offset + frame as f64 * self.sim_params.delta_t;
        tracing::debug!(frame, time, "update");

        let scenarios = self
            .scenarios
            .iter_mut()
            .map(|scenario| {
                let waveforms = scenario.step(time)?;
                Ok(ScenarioFrame {
                    vswr: scenario.vswr(),
                    gamma: scenario.gamma(),
                    positions: scenario.solver.positions().to_owned(),
                    waveforms,
                    envelope_max: scenario.envelope.max().to_owned(),
                    envelope_min: scenario.envelope.min().to_owned(),
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        self.phase = Phase::Playback { next_frame: frame + 1 };

        Ok(Frame {
            index: frame,
            time,
            scenarios,
        })
    }

    /// Plays back `nframes` frames, handing each one to `consumer`.
    ///
    /// Frame numbering continues from any earlier playback.
    pub fn run_with<F>(
        &mut self,
        nframes: usize,
        verbose: bool,
        mut consumer: F,
    ) -> Result<(), Error>
    where
        F: FnMut(&Frame) -> Result<(), Error>,
    {
        self.warm_up(verbose)?;
        let start = match self.phase {
            Phase::Playback { next_frame } => next_frame,
            Phase::Warmup => 0,
        };

        let bar = if verbose {
            Some(indicatif::ProgressBar::new(nframes as u64))
        } else {
            None
        };

        for frame in start..(start + nframes) {
            let frame = self.update(frame)?;
            consumer(&frame)?;

            if let Some(ref bar) = bar {
                bar.inc(1)
            }
        }

        if let Some(ref bar) = bar {
            bar.finish();
        }

        Ok(())
    }

    /// Does a playback run, exporting the frames if asked to.
    #[inline]
    pub fn run<P: AsRef<Path>>(&mut self, desc: RunDescriptor<P>) -> Result<(), Error> {
        match desc.export_settings {
            Some(ref settings) => {
                let layout = crate::render::grid_layout(self.scenarios.len());
                let mut exporter = GifExporter::new(settings, layout)?;
                self.run_with(desc.nframes, desc.verbose, |frame| exporter.draw(frame))?;
                exporter.finish()
            }
            None => self.run_with(desc.nframes, desc.verbose, |_| Ok(())),
        }
    }
}
