/// Axis-aligned rectangle in integer pixel coordinates.
///
/// Stored in TLBR form (left, top, right, bottom). Zone rectangles satisfy
/// `left <= right` and `top <= bottom` by configuration contract; nothing
/// here enforces it, and inverted or zero-area rectangles go through the
/// same overlap formula as any other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    #[inline]
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a Rect from a TLBR array (left, top, right, bottom).
    #[inline]
    pub fn from_tlbr(tlbr: [i32; 4]) -> Self {
        Self::new(tlbr[0], tlbr[1], tlbr[2], tlbr[3])
    }

    /// Convert to a TLBR array: (left, top, right, bottom).
    #[inline]
    pub fn to_tlbr(&self) -> [i32; 4] {
        [self.left, self.top, self.right, self.bottom]
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Inclusive axis-aligned overlap test.
    ///
    /// Touching edges count as overlapping: the test fails only when one
    /// rectangle lies strictly entirely to one side of the other. Pure and
    /// deterministic.
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.left > other.right {
            return false;
        }
        if self.right < other.left {
            return false;
        }
        if self.top > other.bottom {
            return false;
        }
        if self.bottom < other.top {
            return false;
        }
        true
    }

    /// Reported centre position of a track box.
    ///
    /// Computes `(right - left, bottom - top)`, i.e. the box extent, which is
    /// what motion overlays display as the position.
    #[inline]
    pub fn extent(&self) -> (i32, i32) {
        (self.width(), self.height())
    }
}
