use swr::analytic::components::{ContinuousSource, UniformLineDescriptor};
use swr::analytic::{uniform_scenarios, VSource};
use swr::prelude::*;
use swr::viewer::{self, ViewerSettings};

fn main() -> Result<(), swr::Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let source = ContinuousSource {
        amplitude: 1.0,  // [V]
        frequency: 1.0,  // [Hz]
        wavelength: 1.0, // [m]
    };
    let line = UniformLineDescriptor {
        start: 0.0, // [m]
        end: 2.0,   // [m]
        npoints: 200,
    };
    let vswrs = [
        Vswr::Infinite,
        Vswr::Finite(5.0),
        Vswr::Finite(4.0),
        Vswr::Finite(3.0),
        Vswr::Finite(2.0),
        Vswr::Finite(1.0),
    ];

    // run two full cycles in the background before anything is shown
    let sim_params = source.calculate_simulation_parameters(0.02, 2);

    let simulation = Simulation::new(SimulationDescriptor {
        scenarios: uniform_scenarios(source, &vswrs, line),
        sim_params,
    })?;

    tracing::info!(
        scenarios = vswrs.len(),
        delta_t = sim_params.delta_t,
        frames_per_cycle = sim_params.frames_per_cycle,
        warmup_steps = sim_params.warmup_steps,
        "simulation ready"
    );

    viewer::show(
        simulation,
        ViewerSettings {
            title: "Standing waves for several VSWR values".to_string(),
            nframes: 200,
            verbose: true,
            ..Default::default()
        },
    )
}
