use crate::model::FINISH_LINE_Y;

/// Maps field percentages to canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldLayout {
    pub width: f64,
    pub height: f64,
}

impl FieldLayout {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width: width.max(1.0), height: height.max(1.0) }
    }

    pub fn to_px(&self, x_pct: f64, y_pct: f64) -> (f64, f64) {
        (self.width * x_pct / 100.0, self.height * y_pct / 100.0)
    }

    pub fn finish_line_px(&self) -> f64 {
        self.height * FINISH_LINE_Y / 100.0
    }

    /// Font size for mine labels; shrinks on narrow fields.
    pub fn font_px(&self) -> f64 {
        (self.width / 45.0).clamp(11.0, 20.0)
    }

    /// Horizontal advance of one monospace glyph at `font_px`.
    pub fn char_advance(&self) -> f64 {
        self.font_px() * 0.62
    }

    /// Width of a mine label box for a word of `len` characters.
    pub fn label_width(&self, len: usize) -> f64 {
        self.char_advance() * len as f64 + 16.0
    }

    /// Left edge of a label centred on `center_x`, kept inside the field.
    pub fn label_left(&self, center_x: f64, len: usize) -> f64 {
        let w = self.label_width(len);
        (center_x - w / 2.0).clamp(2.0, (self.width - w - 2.0).max(2.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_percentages() {
        let f = FieldLayout::new(800.0, 600.0);
        assert_eq!(f.to_px(50.0, 50.0), (400.0, 300.0));
        assert_eq!(f.to_px(10.0, 0.0), (80.0, 0.0));
        assert_eq!(f.finish_line_px(), 540.0);
    }

    #[test]
    fn degenerate_sizes_are_clamped() {
        let f = FieldLayout::new(0.0, -5.0);
        assert_eq!((f.width, f.height), (1.0, 1.0));
        assert_eq!(f.font_px(), 11.0);
    }

    #[test]
    fn longer_words_get_wider_labels() {
        let f = FieldLayout::new(900.0, 600.0);
        assert!(f.label_width(12) > f.label_width(3));
    }

    #[test]
    fn labels_stay_inside_the_field() {
        let f = FieldLayout::new(900.0, 600.0);
        let (x, _) = f.to_px(90.0, 0.0);
        let left = f.label_left(x, 12);
        assert!(left + f.label_width(12) <= f.width - 2.0 + 1e-9);
        assert_eq!(f.label_left(0.0, 4), 2.0);
    }
}
