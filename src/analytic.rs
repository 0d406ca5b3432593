pub mod components;

mod analytic_solver;

pub use analytic_solver::{AnalyticSolver, AnalyticSolverDescriptor};

use crate::{SimulationParameters, Vswr};

use components::{ContinuousSource, MismatchedTerminator, UniformLine, UniformLineDescriptor};

/// Describes the geometry of the simulated line.
pub trait TransmissionLine {
    /// Sample positions along the line, in increasing order.
    fn positions(&self) -> ndarray::ArrayView1<f32>;
    fn length(&self) -> f32;
    fn npoints(&self) -> usize {
        self.positions().len()
    }
}

/// Drives a steady sinusoid into the start of a transmission line.
pub trait VSource {
    fn amplitude(&self) -> f64;
    fn angular_frequency(&self) -> f64;
    fn wave_number(&self) -> f64;
    fn period(&self) -> f64 {
        2.0 * std::f64::consts::PI / self.angular_frequency()
    }
    fn calculate_simulation_parameters(
        &self,
        delta_t: f64,
        warmup_cycles: usize,
    ) -> SimulationParameters {
        // 1.0 / 0.02 lands just off 50, so round instead of truncating
        let frames_per_cycle = (self.period() / delta_t).round() as usize;
        let warmup_steps = warmup_cycles * frames_per_cycle;

        SimulationParameters {
            delta_t,
            frames_per_cycle,
            warmup_steps,
            time_offset: warmup_steps as f64 * delta_t,
        }
    }
}

/// Handles the end of line boundary, representing a physical load.
pub trait Terminator {
    fn vswr(&self) -> Vswr;
    fn gamma(&self) -> f32 {
        self.vswr().gamma()
    }
}

/// Builds one solver per VSWR, all sharing the same source and grid.
pub fn uniform_scenarios(
    source: ContinuousSource,
    vswrs: &[Vswr],
    line: UniformLineDescriptor,
) -> Vec<AnalyticSolver<UniformLine>> {
    vswrs
        .iter()
        .map(|&vswr| {
            AnalyticSolver::new(AnalyticSolverDescriptor {
                tline: UniformLine::new(line),
                source: Box::new(source),
                terminator: Box::new(MismatchedTerminator { vswr }),
            })
        })
        .collect()
}
