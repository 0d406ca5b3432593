use std::f64::consts::PI;

use crate::analytic::VSource;

/// A sinusoidal source running at a single frequency.
#[derive(Copy, Clone, Debug)]
pub struct ContinuousSource {
    /// Peak voltage of the forward wave.
    pub amplitude: f64,
    /// Frequency in Hz.
    pub frequency: f64,
    /// Wavelength on the line.
    pub wavelength: f64,
}
impl VSource for ContinuousSource {
    #[inline]
    fn amplitude(&self) -> f64 {
        self.amplitude
    }
    #[inline]
    fn angular_frequency(&self) -> f64 {
        2.0 * PI * self.frequency
    }
    #[inline]
    fn wave_number(&self) -> f64 {
        2.0 * PI / self.wavelength
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT: ContinuousSource = ContinuousSource {
        amplitude: 1.0,
        frequency: 1.0,
        wavelength: 1.0,
    };

    #[test]
    fn two_warmup_cycles_at_fifty_steps_each() {
        let params = UNIT.calculate_simulation_parameters(0.02, 2);

        assert_eq!(params.frames_per_cycle, 50);
        assert_eq!(params.warmup_steps, 100);
        assert!((params.time_offset - 2.0).abs() < 1e-12);
        assert_eq!(params.delta_t, 0.02);
    }

    #[test]
    fn period_follows_frequency() {
        let source = ContinuousSource { frequency: 4.0, ..UNIT };

        assert!((source.period() - 0.25).abs() < 1e-12);
        assert!((source.wave_number() - 2.0 * PI).abs() < 1e-12);
    }
}
