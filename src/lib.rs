//! Animated standing waves on a lossless transmission line.
//!
//! A forward wave and its reflection off a mismatched load are evaluated in
//! closed form for several VSWR values. A running envelope is accumulated
//! over a warm-up period and then kept up to date while frames are played
//! back to a window, an animated GIF, or any caller-supplied consumer.
//!
//! To get started, refer to `src/bin/swr.rs`.

mod envelope;
mod simulation;
mod vswr;

pub mod analytic;
pub mod prelude;
pub mod render;
pub mod viewer;

pub use envelope::Envelope;
pub use simulation::{
    Frame, Phase, RunDescriptor, Scenario, ScenarioFrame, Simulation, SimulationDescriptor,
    SimulationParameters,
};
pub use vswr::{gamma_from_vswr, Vswr};

/// Represents an error in the simulation.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Init {array_name} array does not have expected length \
        ( {array_name} array length: {input_length}, \
        expected length: {expected_length} )")]
    BadInit {
        array_name: String,
        input_length: usize,
        expected_length: usize,
    },
    #[error("A simulation needs at least one scenario")]
    EmptyScenarioList,
    #[error("Rendering failed: {0}")]
    Render(String),
    #[error("Viewer failed: {0}")]
    Viewer(String),
}

/// The three voltage waveforms along the line at a single instant.
#[derive(Clone, Debug)]
pub struct Waveforms {
    pub forward: ndarray::Array1<f32>,
    pub reflected: ndarray::Array1<f32>,
    pub total: ndarray::Array1<f32>,
}

/// Manages actual computations.
pub trait Solver {
    /// Generates forward, reflected and total voltages at a single time.
    fn compute(&self, desc: ComputeDescriptor) -> Waveforms;

    /// Positions along the line at which voltages are computed.
    fn positions(&self) -> ndarray::ArrayView1<f32>;

    /// The standing wave ratio produced by the load.
    fn vswr(&self) -> Vswr;

    /// Magnitude of the reflection coefficient at the load.
    fn gamma(&self) -> f32 {
        self.vswr().gamma()
    }
}

/// Describes how a `Solver` should do computations.
#[derive(Copy, Clone, Debug)]
pub struct ComputeDescriptor {
    /// Simulated time. Kept in `f64` so phases repeat exactly from one
    /// cycle to the next once narrowed to `f32`.
    pub time: f64,
}
