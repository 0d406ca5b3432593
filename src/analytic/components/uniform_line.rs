use crate::analytic::TransmissionLine;

#[derive(Copy, Clone, Debug)]
pub struct UniformLineDescriptor {
    /// Position of the first sample.
    pub start: f32,
    /// Position of the last sample.
    pub end: f32,
    pub npoints: usize,
}

/// A line sampled at evenly spaced points, both ends included.
pub struct UniformLine {
    positions: ndarray::Array1<f32>,
    length: f32,
}
impl UniformLine {
    #[inline]
    pub fn new(desc: UniformLineDescriptor) -> Self {
        Self {
            positions: ndarray::Array1::linspace(desc.start, desc.end, desc.npoints),
            length: desc.end - desc.start,
        }
    }
}
impl TransmissionLine for UniformLine {
    #[inline]
    fn positions(&self) -> ndarray::ArrayView1<f32> {
        self.positions.view()
    }
    #[inline]
    fn length(&self) -> f32 {
        self.length
    }
}
