//! Axis-aligned rectangles used as quadtree nodes.

/// An axis-aligned rectangle `[min_x, max_x) x [min_y, max_y)`.
///
/// Regions are value types: the engine creates them while recursing and
/// drops them once the corresponding pixels have been filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Region {
    /// Inclusive top edge. Declared first so sorting is row-major.
    pub min_y: usize,
    /// Inclusive left edge.
    pub min_x: usize,
    /// Exclusive bottom edge.
    pub max_y: usize,
    /// Exclusive right edge.
    pub max_x: usize,
}

impl Region {
    /// Create a region from its corner coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `max_x < min_x` or `max_y < min_y`.
    pub fn new(min_x: usize, min_y: usize, max_x: usize, max_y: usize) -> Self {
        assert!(
            min_x <= max_x && min_y <= max_y,
            "inverted region ({min_x},{min_y})-({max_x},{max_y})"
        );
        Self {
            min_y,
            min_x,
            max_y,
            max_x,
        }
    }

    /// Region anchored at the origin with the given size.
    #[inline]
    pub fn from_size(width: usize, height: usize) -> Self {
        Self::new(0, 0, width, height)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.max_y - self.min_y
    }

    /// Number of pixels covered.
    #[inline]
    pub fn area(&self) -> usize {
        self.width() * self.height()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }

    /// Whether the pixel at `(x, y)` lies inside this region.
    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.min_x && x < self.max_x && y >= self.min_y && y < self.max_y
    }

    /// Whether `other` lies entirely within this region.
    #[inline]
    pub fn contains_region(&self, other: &Region) -> bool {
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }

    /// Whether this region is large enough to be bisected on both axes.
    #[inline]
    pub fn can_split(&self) -> bool {
        self.width() >= 2 && self.height() >= 2
    }

    /// Translate the region by `(dx, dy)`.
    #[inline]
    pub fn offset_by(&self, dx: usize, dy: usize) -> Self {
        Self::new(
            self.min_x + dx,
            self.min_y + dy,
            self.max_x + dx,
            self.max_y + dy,
        )
    }

    /// The four children produced by bisecting at `(width / 2, height / 2)`.
    ///
    /// Order is top-left, top-right, bottom-left, bottom-right. With odd
    /// dimensions the right and bottom children get the extra column/row.
    pub fn quadrants(&self) -> [Region; 4] {
        let (w, h) = (self.width(), self.height());
        let (hw, hh) = (w / 2, h / 2);
        [
            Region::new(0, 0, hw, hh),
            Region::new(hw, 0, w, hh),
            Region::new(0, hh, hw, h),
            Region::new(hw, hh, w, h),
        ]
        .map(|r| r.offset_by(self.min_x, self.min_y))
    }
}
