//! Includes commonly used library components.

pub use crate::{
    ComputeDescriptor,
    Envelope,
    Frame,
    Phase,
    RunDescriptor,
    ScenarioFrame,
    Simulation,
    SimulationDescriptor,
    SimulationParameters,
    Solver,
    Vswr,
    Waveforms,
};
pub use crate::analytic::{Terminator, TransmissionLine, VSource};
pub use crate::render::ExportSettings;
