//! Staggered grid layout for restored icon decks.
//!
//! Icons are placed left to right, `icons_per_row` to a row. Odd columns are
//! pushed down by a fixed stagger. Each icon gets a fixed-width label box
//! centred underneath it. A new slide is started when the next row would not
//! fit on the current one, or when an icon taller than its cell would run off
//! the bottom of the slide.

use crate::types::{Rect, EMU_PER_INCH};

/// Font size of restored labels, in points.
pub const LABEL_FONT_SIZE_PT: f64 = 12.0;

/// Fixed layout constants, all lengths in EMU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    /// Width every icon is scaled to.
    pub icon_width: i64,
    /// Width of the label box under each icon.
    pub label_width: i64,
    /// Height of the label box under each icon.
    pub label_height: i64,
    /// Vertical gap between an icon and its label.
    pub label_gap: i64,
    pub icons_per_row: usize,
    pub top_margin: i64,
    pub left_margin: i64,
    /// Horizontal space between adjacent icons.
    pub column_gap: i64,
    /// Vertical space between rows.
    pub row_gap: i64,
    /// Extra vertical offset applied to odd columns.
    pub stagger: i64,
    pub slide_width: i64,
    pub slide_height: i64,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            icon_width: EMU_PER_INCH / 2,
            label_width: EMU_PER_INCH * 3 / 2,
            label_height: EMU_PER_INCH / 2,
            label_gap: EMU_PER_INCH / 10,
            icons_per_row: 4,
            top_margin: EMU_PER_INCH,
            left_margin: EMU_PER_INCH,
            column_gap: EMU_PER_INCH * 6 / 5,
            row_gap: EMU_PER_INCH * 4 / 5,
            stagger: EMU_PER_INCH * 3 / 10,
            slide_width: EMU_PER_INCH * 10,
            slide_height: EMU_PER_INCH * 15 / 2,
        }
    }
}

/// Where one icon and its label land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// 0-based slide index.
    pub slide: usize,
    pub row: usize,
    pub column: usize,
    pub icon: Rect,
    pub label: Rect,
}

impl GridLayout {
    /// Start placing icons from the first cell of the first slide.
    pub fn cursor(&self) -> GridCursor<'_> {
        GridCursor {
            layout: self,
            slide: 0,
            row: 0,
            column: 0,
        }
    }

    /// Left edge of an icon in the given column.
    pub fn column_left(&self, column: usize) -> i64 {
        self.left_margin + column as i64 * (self.icon_width + self.column_gap)
    }

    /// Top edge of an icon in the given row, before any stagger.
    pub fn row_top(&self, row: usize) -> i64 {
        self.top_margin + row as i64 * (self.icon_width + self.row_gap)
    }

    /// Height of an icon scaled to `icon_width` with the given width/height
    /// ratio. Degenerate ratios are treated as square.
    pub fn icon_height(&self, aspect_ratio: f64) -> i64 {
        let ratio = if aspect_ratio.is_finite() && aspect_ratio > 0.0 {
            aspect_ratio
        } else {
            1.0
        };
        (self.icon_width as f64 / ratio).round() as i64
    }

    /// Icon and label rectangles for a cell.
    pub fn cell(&self, row: usize, column: usize, aspect_ratio: f64) -> (Rect, Rect) {
        let left = self.column_left(column);
        let mut top = self.row_top(row);
        if column % 2 != 0 {
            top += self.stagger;
        }

        let icon = Rect::new(left, top, self.icon_width, self.icon_height(aspect_ratio));
        let label = Rect::new(
            left + (self.icon_width - self.label_width) / 2,
            icon.bottom() + self.label_gap,
            self.label_width,
            self.label_height,
        );

        (icon, label)
    }

    /// Whether a row of square icons, staggered columns included, ends on
    /// the slide.
    pub fn row_fits(&self, row: usize) -> bool {
        let stagger = if self.icons_per_row > 1 { self.stagger } else { 0 };
        let bottom =
            self.row_top(row) + stagger + self.icon_width + self.label_gap + self.label_height;
        bottom <= self.slide_height
    }

    /// Whether an icon and its label lie fully inside the slide.
    pub fn contains(&self, icon: &Rect, label: &Rect) -> bool {
        [icon, label].iter().all(|r| {
            r.left >= 0
                && r.top >= 0
                && r.right() <= self.slide_width
                && r.bottom() <= self.slide_height
        })
    }
}

/// Row/column counters for sequential placement. Reset on every new slide.
#[derive(Debug)]
pub struct GridCursor<'a> {
    layout: &'a GridLayout,
    slide: usize,
    row: usize,
    column: usize,
}

impl GridCursor<'_> {
    /// Place the next icon, starting a new slide first when its row would
    /// not fit or the icon itself would leave the slide.
    ///
    /// An icon too tall for even the first cell of an empty slide is placed
    /// there anyway.
    pub fn place(&mut self, aspect_ratio: f64) -> Placement {
        if self.column == 0 && self.row > 0 && !self.layout.row_fits(self.row) {
            log::debug!("Row {} does not fit, starting slide {}", self.row, self.slide + 2);
            self.next_slide();
        }

        let (mut icon, mut label) = self.layout.cell(self.row, self.column, aspect_ratio);
        if !self.layout.contains(&icon, &label) {
            let (first_icon, first_label) = self.layout.cell(0, 0, aspect_ratio);
            let fits_empty_slide = self.layout.contains(&first_icon, &first_label);

            if fits_empty_slide && (self.row, self.column) != (0, 0) {
                log::debug!(
                    "Icon at row {}, column {} would leave the slide, starting slide {}",
                    self.row,
                    self.column,
                    self.slide + 2
                );
                self.next_slide();
                icon = first_icon;
                label = first_label;
            } else if !fits_empty_slide {
                log::warn!(
                    "Icon with aspect ratio {:.3} is too tall to fit on a slide",
                    aspect_ratio
                );
            }
        }

        let placement = Placement {
            slide: self.slide,
            row: self.row,
            column: self.column,
            icon,
            label,
        };

        self.column += 1;
        if self.column >= self.layout.icons_per_row {
            self.column = 0;
            self.row += 1;
        }

        placement
    }

    fn next_slide(&mut self) {
        self.slide += 1;
        self.row = 0;
        self.column = 0;
    }
}
