/// Offsets along an Archimedean spiral around the origin.
///
/// The spiral is stretched horizontally by the aspect ratio of the
/// canvas so that wide canvases are filled evenly. Each step advances
/// angle and radius by a tenth, the first offset is the origin itself.
#[derive(Debug, Clone)]
pub struct ArchimedeanSpiral {
    aspect: f64,
    step: u32,
}

const STEP_FACTOR: f64 = 0.1;

impl ArchimedeanSpiral {
    pub fn new(width: f64, height: f64) -> Self {
        let aspect = if height > 0.0 { width / height } else { 1.0 };
        Self { aspect, step: 0 }
    }

    fn theta(&self) -> f64 {
        f64::from(self.step) * STEP_FACTOR
    }

    /// Smallest distance from the origin on the current turn.
    pub fn radius(&self) -> f64 {
        self.theta() * self.aspect.min(1.0)
    }
}

impl Iterator for ArchimedeanSpiral {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        let t = self.theta();
        self.step = self.step.checked_add(1)?;
        Some((self.aspect * t * t.cos(), t * t.sin()))
    }
}
