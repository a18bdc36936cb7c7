//! Layout primitives shared by every component.
//!
//! [`LayoutHint`] is the parent-to-child channel for sizing and spacing. It
//! composes with [`LayoutHint::then`] and renders to inline CSS.

use std::fmt;
use std::ops::Add;

/// Density-independent length, rendered as CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    pub const ZERO: Dp = Dp(0.0);

    pub fn value(self) -> f32 {
        self.0
    }
}

impl Add for Dp {
    type Output = Dp;

    fn add(self, rhs: Dp) -> Dp {
        Dp(self.0 + rhs.0)
    }
}

impl fmt::Display for Dp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Fixed sizes and spacings of the home screen.
pub mod metrics {
    use super::Dp;

    pub const SEARCH_MIN_HEIGHT: Dp = Dp(56.0);
    pub const BODY_IMAGE_SIZE: Dp = Dp(88.0);
    pub const BODY_LABEL_BASELINE_TOP: Dp = Dp(24.0);
    pub const BODY_LABEL_BASELINE_BOTTOM: Dp = Dp(8.0);
    pub const CARD_WIDTH: Dp = Dp(192.0);
    pub const CARD_IMAGE_SIZE: Dp = Dp(56.0);
    pub const CARD_HEIGHT: Dp = Dp(56.0);
    pub const CARD_TEXT_PADDING: Dp = Dp(16.0);
    pub const ITEM_SPACING: Dp = Dp(8.0);
    pub const EDGE_PADDING: Dp = Dp(16.0);
    pub const GRID_HEIGHT: Dp = Dp(120.0);
    pub const GRID_ROWS: usize = 2;
    pub const SECTION_BASELINE_TOP: Dp = Dp(40.0);
    pub const SECTION_BASELINE_BOTTOM: Dp = Dp(8.0);
    pub const SCREEN_VERTICAL_PADDING: Dp = Dp(16.0);
    pub const SCREEN_SPACER: Dp = Dp(16.0);
    pub const NAV_BAR_HEIGHT: Dp = Dp(56.0);
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Padding {
    pub start: Dp,
    pub top: Dp,
    pub end: Dp,
    pub bottom: Dp,
}

impl Padding {
    pub fn all(value: Dp) -> Self {
        Self::symmetric(value, value)
    }

    pub fn horizontal(value: Dp) -> Self {
        Self::symmetric(value, Dp::ZERO)
    }

    pub fn vertical(value: Dp) -> Self {
        Self::symmetric(Dp::ZERO, value)
    }

    pub fn symmetric(horizontal: Dp, vertical: Dp) -> Self {
        Self {
            start: horizontal,
            top: vertical,
            end: horizontal,
            bottom: vertical,
        }
    }

    pub fn bottom(value: Dp) -> Self {
        Self {
            bottom: value,
            ..Self::default()
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl Add for Padding {
    type Output = Padding;

    fn add(self, rhs: Padding) -> Padding {
        Padding {
            start: self.start + rhs.start,
            top: self.top + rhs.top,
            end: self.end + rhs.end,
            bottom: self.bottom + rhs.bottom,
        }
    }
}

/// Sizing and spacing instructions passed from a parent to a child.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutHint {
    pub padding: Padding,
    pub width: Option<Dp>,
    pub height: Option<Dp>,
    pub min_height: Option<Dp>,
    pub fill_max_width: bool,
}

impl LayoutHint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = self.padding + padding;
        self
    }

    pub fn width(mut self, width: Dp) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: Dp) -> Self {
        self.height = Some(height);
        self
    }

    pub fn size(self, size: Dp) -> Self {
        self.width(size).height(size)
    }

    pub fn min_height(mut self, min_height: Dp) -> Self {
        self.min_height = Some(min_height);
        self
    }

    pub fn fill_max_width(mut self) -> Self {
        self.fill_max_width = true;
        self
    }

    /// Chain `other` after `self`. Sizes from `other` win, paddings add up.
    pub fn then(self, other: &LayoutHint) -> Self {
        Self {
            padding: self.padding + other.padding,
            width: other.width.or(self.width),
            height: other.height.or(self.height),
            min_height: other.min_height.or(self.min_height),
            fill_max_width: self.fill_max_width || other.fill_max_width,
        }
    }

    /// Inline CSS for this hint. Empty when the hint is empty.
    pub fn to_style(&self) -> String {
        let mut rules = Vec::new();
        if self.fill_max_width {
            rules.push("width: 100%".to_string());
        } else if let Some(width) = self.width {
            rules.push(format!("width: {width}"));
        }
        if let Some(height) = self.height {
            rules.push(format!("height: {height}"));
        }
        if let Some(min_height) = self.min_height {
            rules.push(format!("min-height: {min_height}"));
        }
        if !self.padding.is_zero() {
            let p = self.padding;
            rules.push(format!(
                "padding: {} {} {} {}",
                p.top, p.end, p.bottom, p.start
            ));
        }
        if rules.is_empty() {
            String::new()
        } else {
            let mut style = rules.join("; ");
            style.push(';');
            style
        }
    }
}

/// Cross-axis cell layout of a lazy grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridCells {
    Fixed(usize),
}

impl GridCells {
    pub fn count(&self) -> usize {
        match self {
            GridCells::Fixed(n) => (*n).max(1),
        }
    }
}

/// Zero-based row and column of an item in a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSlot {
    pub row: usize,
    pub column: usize,
}

/// Where item `index` lands in a horizontal grid with `cells` rows.
///
/// Horizontal grids fill each column top to bottom before moving right.
pub fn grid_placement(index: usize, cells: GridCells) -> GridSlot {
    let rows = cells.count();
    GridSlot {
        row: index % rows,
        column: index / rows,
    }
}

/// Number of columns needed to hold `len` items.
pub fn grid_columns(len: usize, cells: GridCells) -> usize {
    len.div_ceil(cells.count())
}

/// Group `items` into rows. Always returns exactly `cells.count()` rows.
pub fn partition_rows<T>(items: &[T], cells: GridCells) -> Vec<Vec<&T>> {
    let mut rows: Vec<Vec<&T>> = (0..cells.count()).map(|_| Vec::new()).collect();
    for (index, item) in items.iter().enumerate() {
        rows[grid_placement(index, cells).row].push(item);
    }
    rows
}
