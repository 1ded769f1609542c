//! Styling for rendered reports

use crate::constants::*;

/// RGB color representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a new RGB color (values should be 0.0-1.0)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// Gray color
    pub fn gray(level: f32) -> Self {
        let l = level.clamp(0.0, 1.0);
        Self::rgb(l, l, l)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Page, font and spacing settings for a PDF report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportStyle {
    pub page_width: f32,
    pub page_height: f32,
    pub top_margin: f32,
    pub bottom_margin: f32,
    pub left_margin: f32,
    pub right_margin: f32,
    /// Base Type1 font; the bold variant is `<font_name>-Bold`
    pub font_name: String,
    pub title_font_size: f32,
    pub heading_font_size: f32,
    pub body_font_size: f32,
    pub line_height_multiplier: f32,
    /// Vertical gap before each section heading
    pub section_spacing: f32,
    /// Horizontal offset of the value column from the left margin
    pub value_column: f32,
    pub text_color: Color,
    pub heading_color: Color,
    /// Color of the rule under each heading; `None` draws no rule
    pub rule_color: Option<Color>,
    pub rule_width: f32,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            page_width: A4_WIDTH,
            page_height: A4_HEIGHT,
            top_margin: DEFAULT_MARGIN,
            bottom_margin: DEFAULT_MARGIN,
            left_margin: DEFAULT_MARGIN,
            right_margin: DEFAULT_MARGIN,
            font_name: "Helvetica".to_string(),
            title_font_size: 16.0,
            heading_font_size: 12.0,
            body_font_size: 10.0,
            line_height_multiplier: DEFAULT_LINE_HEIGHT_MULTIPLIER,
            section_spacing: 10.0,
            value_column: 180.0,
            text_color: Color::black(),
            heading_color: Color::rgb(0.1, 0.25, 0.45),
            rule_color: Some(Color::gray(0.7)),
            rule_width: 0.5,
        }
    }
}

impl ReportStyle {
    /// Set the page size in points
    pub fn with_page_size(mut self, width: f32, height: f32) -> Self {
        self.page_width = width;
        self.page_height = height;
        self
    }

    /// Use the same margin on every side
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.top_margin = margin;
        self.bottom_margin = margin;
        self.left_margin = margin;
        self.right_margin = margin;
        self
    }

    pub fn with_body_font_size(mut self, size: f32) -> Self {
        self.body_font_size = size;
        self
    }

    /// Line advance for a given font size
    pub fn line_height(&self, font_size: f32) -> f32 {
        font_size * self.line_height_multiplier
    }

    /// Width available for text between the side margins
    pub fn content_width(&self) -> f32 {
        (self.page_width - self.left_margin - self.right_margin).max(0.0)
    }

    /// Starting position (top-left of the content area)
    pub fn origin(&self) -> (f32, f32) {
        (self.left_margin, self.page_height - self.top_margin)
    }

    pub fn bold_font_name(&self) -> String {
        format!("{}-Bold", self.font_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_is_clamped() {
        let color = Color::rgb(1.5, -0.2, 0.5);
        assert_eq!(color, Color::rgb(1.0, 0.0, 0.5));
    }

    #[test]
    fn test_default_geometry() {
        let style = ReportStyle::default();
        assert_eq!(style.content_width(), 495.0);
        assert_eq!(style.origin(), (50.0, 792.0));
        assert_eq!(style.bold_font_name(), "Helvetica-Bold");
    }

    #[test]
    fn test_builders() {
        let style = ReportStyle::default()
            .with_page_size(612.0, 792.0)
            .with_margin(36.0)
            .with_body_font_size(9.0);
        assert_eq!(style.content_width(), 540.0);
        assert_eq!(style.origin(), (36.0, 756.0));
        assert!((style.line_height(10.0) - 12.0).abs() < 1e-4);
        assert_eq!(style.body_font_size, 9.0);
    }
}
