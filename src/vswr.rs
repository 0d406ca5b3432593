use std::fmt;

/// Voltage standing wave ratio of a terminated line.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Vswr {
    /// A ratio of at least one. Values below one are not checked.
    Finite(f32),
    /// Open or short circuit load.
    Infinite,
}

impl Vswr {
    /// Magnitude of the reflection coefficient for this ratio.
    #[inline]
    pub fn gamma(self) -> f32 {
        gamma_from_vswr(self)
    }

    pub fn is_infinite(self) -> bool {
        match self {
            Vswr::Infinite => true,
            Vswr::Finite(s) => s.is_infinite(),
        }
    }
}

impl From<f32> for Vswr {
    fn from(s: f32) -> Self {
        if s.is_infinite() {
            Vswr::Infinite
        } else {
            Vswr::Finite(s)
        }
    }
}

impl fmt::Display for Vswr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Vswr::Finite(s) if !s.is_infinite() => write!(f, "{}", s),
            _ => write!(f, "∞"),
        }
    }
}

/// Converts a VSWR to the magnitude of the reflection coefficient.
///
/// An infinite ratio maps straight to 1 instead of evaluating `∞/∞`.
#[inline]
pub fn gamma_from_vswr(vswr: Vswr) -> f32 {
    match vswr {
        Vswr::Finite(s) if !s.is_infinite() => (s - 1.0) / (s + 1.0),
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infinite_ratio_is_total_reflection() {
        assert_eq!(gamma_from_vswr(Vswr::Infinite), 1.0);
        assert_eq!(gamma_from_vswr(Vswr::Finite(f32::INFINITY)), 1.0);
        assert_eq!(Vswr::from(f32::INFINITY), Vswr::Infinite);
    }

    #[test]
    fn known_ratios() {
        assert_eq!(gamma_from_vswr(Vswr::Finite(1.0)), 0.0);
        assert_eq!(gamma_from_vswr(Vswr::Finite(3.0)), 0.5);
        assert!((gamma_from_vswr(Vswr::Finite(5.0)) - 0.6667).abs() < 1e-4);
    }

    #[test]
    fn finite_ratios_stay_below_one_and_increase() {
        let mut last = -1.0;
        for n in 0..1000 {
            let s = 1.0 + n as f32 * 0.25;
            let gamma = Vswr::Finite(s).gamma();
            assert!((0.0..1.0).contains(&gamma), "gamma={gamma} for vswr={s}");
            assert!(gamma > last, "gamma not increasing at vswr={s}");
            last = gamma;
        }
    }

    #[test]
    fn display_uses_infinity_symbol() {
        assert_eq!(Vswr::Infinite.to_string(), "∞");
        assert_eq!(Vswr::Finite(5.0).to_string(), "5");
        assert_eq!(Vswr::Finite(2.5).to_string(), "2.5");
    }
}
