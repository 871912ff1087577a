/// Width and height of a label box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Axis-aligned rectangle in canvas coordinates (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Rect {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn centered(x: f64, y: f64, size: Size) -> Self {
        let hw = size.width / 2.0;
        let hh = size.height / 2.0;
        Self::new(x - hw, y - hh, x + hw, y + hh)
    }

    #[must_use]
    pub fn expand(self, d: f64) -> Self {
        Self::new(self.x0 - d, self.y0 - d, self.x1 + d, self.y1 + d)
    }

    /// Interiors overlap; touching edges do not count.
    pub fn intersects(&self, other: &Self) -> bool {
        self.x0 < other.x1 && other.x0 < self.x1 && self.y0 < other.y1 && other.y0 < self.y1
    }

    pub fn contains(&self, other: &Self) -> bool {
        self.x0 <= other.x0 && self.y0 <= other.y0 && other.x1 <= self.x1 && other.y1 <= self.y1
    }

    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self::new(
            self.x0.min(other.x0),
            self.y0.min(other.y0),
            self.x1.max(other.x1),
            self.y1.max(other.y1),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_test() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&Rect::new(5.0, 5.0, 15.0, 15.0)));
        assert!(a.intersects(&Rect::new(2.0, 2.0, 3.0, 3.0)));
        assert!(!a.intersects(&Rect::new(10.0, 0.0, 20.0, 10.0)));
        assert!(!a.intersects(&Rect::new(0.0, 11.0, 10.0, 20.0)));
    }

    #[test]
    fn padding_turns_neighbours_into_overlaps() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(12.0, 0.0, 20.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(a.expand(1.5).intersects(&b.expand(1.5)));
    }

    #[test]
    fn containment() {
        let canvas = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert!(canvas.contains(&Rect::centered(50.0, 25.0, Size { width: 100.0, height: 50.0 })));
        assert!(!canvas.contains(&Rect::centered(50.0, 25.0, Size { width: 101.0, height: 10.0 })));
    }
}
