use crate::{ComputeDescriptor, Solver, Vswr, Waveforms};
use crate::analytic::{TransmissionLine, VSource, Terminator};

/// Describes the composition of an `AnalyticSolver`.
pub struct AnalyticSolverDescriptor<L: TransmissionLine> {
    pub tline: L,
    pub source: Box<dyn VSource>,
    pub terminator: Box<dyn Terminator>,
}

/// Evaluates the steady state forward and reflected waves in closed form.
///
/// With amplitude `A`, angular frequency `ω`, wave number `k` and reflection
/// magnitude `Γ`:
///
/// ```text
/// forward(x)   = A cos(ωt - kx)
/// reflected(x) = Γ A cos(ωt + kx)
/// total(x)     = forward(x) + reflected(x)
/// ```
///
/// Phases are evaluated in `f64` and each wave is narrowed to `f32` before
/// the sum, so `total` is exactly `forward + reflected` as stored.
pub struct AnalyticSolver<L: TransmissionLine> {
    tline: L,
    source: Box<dyn VSource>,
    terminator: Box<dyn Terminator>,
}

impl<L: TransmissionLine> AnalyticSolver<L> {
    #[inline]
    pub fn new(desc: AnalyticSolverDescriptor<L>) -> Self {
        Self {
            tline: desc.tline,
            source: desc.source,
            terminator: desc.terminator,
        }
    }
}

impl<L: TransmissionLine> Solver for AnalyticSolver<L> {
    #[inline]
    fn compute(&self, desc: ComputeDescriptor) -> Waveforms {
        let amplitude = self.source.amplitude();
        let wt = self.source.angular_frequency() * desc.time;
        let k = self.source.wave_number();
        let gamma = f64::from(self.terminator.gamma());
        let x = self.tline.positions();

        let forward = x.mapv(|x| {
            let kx = k * f64::from(x);
            (amplitude * f64::cos(wt - kx)) as f32
        });
        let reflected = x.mapv(|x| {
            let kx = k * f64::from(x);
            (gamma * amplitude * f64::cos(wt + kx)) as f32
        });
        let total = &forward + &reflected;

        Waveforms {
            forward,
            reflected,
            total,
        }
    }

    #[inline]
    fn positions(&self) -> ndarray::ArrayView1<f32> {
        self.tline.positions()
    }

    #[inline]
    fn vswr(&self) -> Vswr {
        self.terminator.vswr()
    }
}
