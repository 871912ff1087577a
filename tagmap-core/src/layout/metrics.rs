use unicode_width::UnicodeWidthStr;

use super::rect::Size;

/// Measures the box of a single-line label.
pub trait TextMetrics {
    fn measure(&self, text: &str, font_size: f64) -> Size;
}

/// Font independent estimation based on the display width of the text.
///
/// Wide characters (e.g. CJK) count twice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproxTextMetrics {
    /// Average advance of a narrow glyph relative to the font size.
    pub advance: f64,
    /// Line height relative to the font size.
    pub line_height: f64,
}

impl Default for ApproxTextMetrics {
    fn default() -> Self {
        Self {
            advance: 0.6,
            line_height: 1.0,
        }
    }
}

impl TextMetrics for ApproxTextMetrics {
    fn measure(&self, text: &str, font_size: f64) -> Size {
        #[allow(clippy::cast_precision_loss)]
        let columns = text.width() as f64;
        Size {
            width: columns * self.advance * font_size,
            height: self.line_height * font_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_with_font_size() {
        let m = ApproxTextMetrics::default();
        let small = m.measure("tag", 10.0);
        let large = m.measure("tag", 20.0);
        assert!((small.width - 18.0).abs() < 1e-9);
        assert!((large.width - 2.0 * small.width).abs() < 1e-9);
        assert!((large.height - 20.0).abs() < 1e-9);
    }

    #[test]
    fn wide_characters_count_twice() {
        let m = ApproxTextMetrics::default();
        assert!((m.measure("日本", 10.0).width - m.measure("abcd", 10.0).width).abs() < 1e-9);
    }
}
