use crate::analytic::Terminator;
use crate::Vswr;

/// A load that reflects part of the incident wave.
#[derive(Copy, Clone, Debug)]
pub struct MismatchedTerminator {
    pub vswr: Vswr,
}
impl Terminator for MismatchedTerminator {
    #[inline]
    fn vswr(&self) -> Vswr {
        self.vswr
    }
}
