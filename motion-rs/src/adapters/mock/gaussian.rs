use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal, NormalError};

/// Functionality to add some Gaussian noise.
#[derive(Clone, Debug)]
pub(crate) struct GaussianNoise {
    normal: Normal<f64>,
}

impl GaussianNoise {
    /// Creates new distribution from mean and stdev
    pub(crate) fn new(mean: f64, stdev: f64) -> Result<Self, NormalError> {
        Ok(Self {
            normal: Normal::new(mean, stdev)?,
        })
    }

    /// Sample from distribution
    pub(crate) fn draw_sample(&self, rng: &mut StdRng) -> f64 {
        self.normal.sample(rng)
    }

    /// Adds noise to sample
    pub(crate) fn add_noise(&self, rng: &mut StdRng, data: f64) -> f64 {
        data + self.draw_sample(rng)
    }
}
