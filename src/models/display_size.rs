/// Pixel dimensions for a chart canvas / embedded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplaySize {
    pub width: u32,
    pub height: u32,
}

impl DisplaySize {
    /// Square canvas used by circular chart kinds (pie, doughnut).
    pub const SQUARE: DisplaySize = DisplaySize {
        width: 400,
        height: 400,
    };

    /// Wider canvas used by axis-based chart kinds (bar, line).
    pub const WIDE: DisplaySize = DisplaySize {
        width: 600,
        height: 400,
    };

    /// Whether the canvas is square (equal width and height).
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}
