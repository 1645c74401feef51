//! Classifier score module

use crate::Verdict;

/// Probability pair produced by the text classifier
///
/// Both values lie in [0.0, 1.0] and are treated as complementary,
/// though they are not required to sum to exactly 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierScore {
    /// Probability that the text is genuine
    pub real_probability: f64,
    /// Probability that the text is fabricated
    pub fake_probability: f64,
}

impl ClassifierScore {
    /// Create a new score, clamping both probabilities into [0, 1]
    ///
    /// # Examples
    ///
    /// ```
    /// use verdix_domain::ClassifierScore;
    ///
    /// let score = ClassifierScore::new(0.9, 0.1);
    /// assert_eq!(score.base_confidence(), 90);
    /// ```
    pub fn new(real_probability: f64, fake_probability: f64) -> Self {
        Self {
            real_probability: clamp_probability(real_probability),
            fake_probability: clamp_probability(fake_probability),
        }
    }

    /// Build a score from the real-class probability alone
    pub fn from_real(real_probability: f64) -> Self {
        let real = clamp_probability(real_probability);
        Self::new(real, 1.0 - real)
    }

    /// The classifier's own label: Real if real > fake, otherwise Fake
    ///
    /// Ties go to Fake.
    pub fn label(&self) -> Verdict {
        if self.real_probability > self.fake_probability {
            Verdict::Real
        } else {
            Verdict::Fake
        }
    }

    /// `round(100 * max(real, fake))`, in [0, 100]
    pub fn base_confidence(&self) -> u8 {
        let top = self.real_probability.max(self.fake_probability);
        (top * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}
