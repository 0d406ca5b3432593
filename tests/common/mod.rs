#![allow(dead_code)]

use swr::analytic::components::{ContinuousSource, UniformLine, UniformLineDescriptor};
use swr::analytic::{uniform_scenarios, AnalyticSolver, VSource};
use swr::{SimulationParameters, Vswr};

pub const UNIT_SOURCE: ContinuousSource = ContinuousSource {
    amplitude: 1.0,
    frequency: 1.0,
    wavelength: 1.0,
};

pub const DEFAULT_LINE: UniformLineDescriptor = UniformLineDescriptor {
    start: 0.0,
    end: 2.0,
    npoints: 200,
};

pub fn solver(vswr: Vswr, start: f32, end: f32, npoints: usize) -> AnalyticSolver<UniformLine> {
    let line = UniformLineDescriptor {
        start,
        end,
        npoints,
    };
    uniform_scenarios(UNIT_SOURCE, &[vswr], line).remove(0)
}

pub fn default_solver(vswr: Vswr) -> AnalyticSolver<UniformLine> {
    uniform_scenarios(UNIT_SOURCE, &[vswr], DEFAULT_LINE).remove(0)
}

pub fn default_scenarios() -> Vec<AnalyticSolver<UniformLine>> {
    uniform_scenarios(UNIT_SOURCE, &default_vswrs(), DEFAULT_LINE)
}

pub fn default_params() -> SimulationParameters {
    UNIT_SOURCE.calculate_simulation_parameters(0.02, 2)
}

pub fn default_vswrs() -> Vec<Vswr> {
    vec![
        Vswr::Infinite,
        Vswr::Finite(5.0),
        Vswr::Finite(4.0),
        Vswr::Finite(3.0),
        Vswr::Finite(2.0),
        Vswr::Finite(1.0),
    ]
}
