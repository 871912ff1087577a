//! Word cloud layout.
//!
//! Words are placed one after another, largest first. Each word starts
//! at the center of the canvas and walks outwards along a spiral until
//! its padded box neither leaves the canvas nor overlaps any word that
//! has already been placed. Words that do not find a free spot before
//! both spiral offsets exceed the canvas diagonal are dropped.
//!
//! The layout is fully deterministic: the same words in the same order
//! on the same canvas always end up at the same positions.

use thiserror::Error;

mod metrics;
mod rect;
mod spiral;

pub use self::{metrics::*, rect::*, spiral::*};

pub const DEFAULT_FONT_SCALE: f64 = 10.0;
pub const DEFAULT_PADDING: f64 = 5.0;

/// A term with a numeric weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub text: String,
    pub weight: f64,
}

impl Word {
    pub fn new(text: impl Into<String>, weight: f64) -> Self {
        Self {
            text: text.into(),
            weight,
        }
    }
}

/// A word that has been placed on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct WordDatum {
    pub text: String,
    pub weight: f64,
    /// Font size
    pub size: f64,
    /// Horizontal center of the label box.
    pub x: f64,
    /// Vertical center of the label box.
    pub y: f64,
    /// Rotation in degrees (always 0).
    pub rotation: f64,
    pub width: f64,
    pub height: f64,
}

impl WordDatum {
    /// The (unpadded) label box.
    pub fn bounds(&self) -> Rect {
        Rect::centered(
            self.x,
            self.y,
            Size {
                width: self.width,
                height: self.height,
            },
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Placement {
    /// Placed words in placement order.
    pub placed: Vec<WordDatum>,
    /// Words that did not fit onto the canvas.
    pub dropped: Vec<Word>,
}

impl Placement {
    pub fn is_complete(&self) -> bool {
        self.dropped.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("The layout has been cancelled")]
pub struct Cancelled;

/// Canvas and sizing parameters of a cloud.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudLayout {
    pub width: f64,
    pub height: f64,
    /// Space that is kept free around each word.
    pub padding: f64,
    /// Font size per unit of weight.
    pub font_scale: f64,
}

impl CloudLayout {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            padding: DEFAULT_PADDING,
            font_scale: DEFAULT_FONT_SCALE,
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    #[must_use]
    pub fn with_font_scale(mut self, font_scale: f64) -> Self {
        self.font_scale = font_scale;
        self
    }

    pub fn canvas(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    pub fn font_size(&self, weight: f64) -> f64 {
        weight * self.font_scale
    }

    pub fn place<M>(&self, words: &[Word], metrics: &M) -> Placement
    where
        M: TextMetrics + ?Sized,
    {
        self.run(words, metrics, &mut || false).unwrap_or_default()
    }

    /// Like [`CloudLayout::place`] but checks `is_cancelled`
    /// before each word.
    pub fn place_until<M, F>(
        &self,
        words: &[Word],
        metrics: &M,
        mut is_cancelled: F,
    ) -> Result<Placement, Cancelled>
    where
        M: TextMetrics + ?Sized,
        F: FnMut() -> bool,
    {
        self.run(words, metrics, &mut is_cancelled)
    }

    fn run<M>(
        &self,
        words: &[Word],
        metrics: &M,
        is_cancelled: &mut dyn FnMut() -> bool,
    ) -> Result<Placement, Cancelled>
    where
        M: TextMetrics + ?Sized,
    {
        let mut order: Vec<_> = words.iter().collect();
        // stable: equally weighted words keep their input order
        order.sort_by(|a, b| b.weight.total_cmp(&a.weight));

        let mut placement = Placement::default();
        let mut boxes = Vec::<Rect>::with_capacity(order.len());
        let mut bounds = None::<Rect>;

        for word in order {
            if is_cancelled() {
                log::debug!("Cancelled layout after {} words", boxes.len());
                return Err(Cancelled);
            }
            let size = self.font_size(word.weight);
            if word.text.is_empty() || size.is_nan() || size <= 0.0 {
                placement.dropped.push(word.clone());
                continue;
            }
            let label = metrics.measure(&word.text, size);
            let Some((x, y, padded)) = self.find_position(label, &boxes, bounds) else {
                log::debug!("No room left for '{}' (size {size})", word.text);
                placement.dropped.push(word.clone());
                continue;
            };
            bounds = Some(bounds.map_or(padded, |b| b.union(padded)));
            boxes.push(padded);
            placement.placed.push(WordDatum {
                text: word.text.clone(),
                weight: word.weight,
                size,
                x,
                y,
                rotation: 0.0,
                width: label.width,
                height: label.height,
            });
        }
        if !placement.is_complete() {
            log::info!(
                "Placed {} of {} words",
                placement.placed.len(),
                words.len()
            );
        }
        Ok(placement)
    }

    fn find_position(
        &self,
        label: Size,
        boxes: &[Rect],
        bounds: Option<Rect>,
    ) -> Option<(f64, f64, Rect)> {
        let pad = self.padding;
        if label.width + 2.0 * pad > self.width || label.height + 2.0 * pad > self.height {
            return None;
        }
        let canvas = self.canvas();
        let (cx, cy) = (self.width / 2.0, self.height / 2.0);
        let max_delta = self.width.hypot(self.height);
        for (dx, dy) in ArchimedeanSpiral::new(self.width, self.height) {
            if dx.abs().min(dy.abs()) >= max_delta {
                break;
            }
            let (x, y) = (cx + dx, cy + dy);
            let candidate = Rect::centered(x, y, label).expand(pad);
            if !canvas.contains(&candidate) {
                continue;
            }
            let free = bounds.map_or(true, |b| !b.intersects(&candidate))
                || !boxes.iter().any(|b| b.intersects(&candidate));
            if free {
                return Some((x, y, candidate));
            }
        }
        None
    }
}
