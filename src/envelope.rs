use crate::Error;

/// Running per-point maximum and minimum of the total voltage.
///
/// Both arrays only ever widen: `max` never decreases and `min` never
/// increases, whichever waveforms are observed.
#[derive(Clone, Debug)]
pub struct Envelope {
    max: ndarray::Array1<f32>,
    min: ndarray::Array1<f32>,
}

impl Envelope {
    /// Creates an envelope seeded with a single waveform.
    #[inline]
    pub fn new(seed: ndarray::ArrayView1<f32>) -> Self {
        Self {
            max: seed.to_owned(),
            min: seed.to_owned(),
        }
    }

    /// Widens the envelope to contain `total`.
    #[inline]
    pub fn observe(&mut self, total: ndarray::ArrayView1<f32>) -> Result<(), Error> {
        if total.len() != self.max.len() {
            return Err(Error::BadInit {
                array_name: "Total".to_string(),
                input_length: total.len(),
                expected_length: self.max.len(),
            });
        }

        ndarray::Zip::from(&mut self.max)
            .and(&mut self.min)
            .and(&total)
            .for_each(|max, min, &v| {
                *max = f32::max(*max, v);
                *min = f32::min(*min, v);
            });

        Ok(())
    }

    pub fn max(&self) -> ndarray::ArrayView1<f32> {
        self.max.view()
    }

    pub fn min(&self) -> ndarray::ArrayView1<f32> {
        self.min.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn observe_widens_elementwise() {
        let mut env = Envelope::new(array![0.0, 1.0, -1.0].view());
        env.observe(array![0.5, 0.0, -2.0].view()).unwrap();

        assert_eq!(env.max(), array![0.5f32, 1.0, -1.0]);
        assert_eq!(env.min(), array![0.0f32, 0.0, -2.0]);
    }

    #[test]
    fn repeat_or_smaller_waveform_is_a_no_op() {
        let seed = array![1.0f32, -0.5, 0.25];
        let mut env = Envelope::new(seed.view());
        env.observe((-&seed).view()).unwrap();
        let (max, min) = (env.max().to_owned(), env.min().to_owned());

        env.observe(seed.view()).unwrap();
        env.observe((&seed * 0.5).view()).unwrap();

        assert_eq!(env.max(), max);
        assert_eq!(env.min(), min);
    }

    #[test]
    fn length_mismatch_is_rejected_untouched() {
        let mut env = Envelope::new(array![0.0, 0.0].view());
        let err = env.observe(array![5.0, 5.0, 5.0].view()).unwrap_err();

        assert!(matches!(
            err,
            Error::BadInit { input_length: 3, expected_length: 2, .. }
        ));
        assert_eq!(env.max(), array![0.0f32, 0.0]);
    }
}
