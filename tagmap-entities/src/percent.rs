use std::fmt;

/// An integral percentage in the range `0..=100`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percent(u8);

impl Percent {
    pub const ZERO: Self = Self(0);
    pub const FULL: Self = Self(100);

    /// Rounds `part / total` to the nearest whole percent.
    ///
    /// An empty total yields [`Percent::ZERO`].
    pub fn of(part: usize, total: usize) -> Self {
        if total == 0 {
            return Self::ZERO;
        }
        let part = part.min(total);
        #[allow(clippy::cast_precision_loss)]
        let ratio = part as f64 / total as f64;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let value = (ratio * 100.0).round() as u8;
        Self(value)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl From<Percent> for u8 {
    fn from(from: Percent) -> Self {
        from.0
    }
}

impl TryFrom<u8> for Percent {
    type Error = u8;
    fn try_from(from: u8) -> Result<Self, Self::Error> {
        if from > 100 {
            return Err(from);
        }
        Ok(Self(from))
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
