use std::fmt;

use crate::point::Point;

/// Axis-aligned pixel rectangle: top-left corner plus width and height.
///
/// Boxes built through [`BoundingBox::from_corners`], [`BoundingBox::from_points`],
/// [`BoundingBox::covering`] or [`BoundingBox::clamp`] always have `w >= 0` and
/// `h >= 0`. [`BoundingBox::new`] and [`BoundingBox::from_center`] store what they
/// are given.
///
/// Corner arithmetic saturates at the `i32` range instead of overflowing: a
/// width or height wider than `i32::MAX` is stored as `i32::MAX`, and derived
/// corners stop at `i32::MIN`/`i32::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

// Floor of half, so odd sizes round toward the top-left.
fn half(size: Point<i32>) -> Point<i32> {
    Point::new(size.x.div_euclid(2), size.y.div_euclid(2))
}

// Distance from `min` to `max`, saturated into `i32`.
fn extent(min: i32, max: i32) -> i32 {
    i32::try_from(i64::from(max) - i64::from(min)).unwrap_or(i32::MAX)
}

fn offset(base: Point<i32>, delta: Point<i32>) -> Point<i32> {
    Point::new(base.x.saturating_add(delta.x), base.y.saturating_add(delta.y))
}

impl BoundingBox {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Build from two opposite corners given in any order.
    pub fn from_corners(ax: i32, ay: i32, bx: i32, by: i32) -> Self {
        let (min_x, max_x) = if ax > bx { (bx, ax) } else { (ax, bx) };
        let (min_y, max_y) = if ay > by { (by, ay) } else { (ay, by) };
        Self {
            x: min_x,
            y: min_y,
            w: extent(min_x, max_x),
            h: extent(min_y, max_y),
        }
    }

    pub fn from_points(a: Point<i32>, b: Point<i32>) -> Self {
        Self::from_corners(a.x, a.y, b.x, b.y)
    }

    /// Box of size `w` x `h` whose [`center`](Self::center) is `center`.
    pub fn from_center(center: Point<i32>, w: i32, h: i32) -> Self {
        let top_left = offset(center, -half(Point::new(w, h)));
        Self {
            x: top_left.x,
            y: top_left.y,
            w,
            h,
        }
    }

    /// Smallest box spanning every point, or `None` when there are no points.
    pub fn covering(points: impl IntoIterator<Item = Point<i32>>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        Some(Self::from_points(min, max))
    }

    pub fn top_left(&self) -> Point<i32> {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Point<i32> {
        Point::new(self.w, self.h)
    }

    pub fn bottom_right(&self) -> Point<i32> {
        offset(self.top_left(), self.size())
    }

    /// Midpoint, rounded toward the top-left on odd sizes.
    pub fn center(&self) -> Point<i32> {
        offset(self.top_left(), half(self.size()))
    }

    pub fn area(&self) -> i64 {
        i64::from(self.w) * i64::from(self.h)
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Strict containment: points on any edge are outside.
    pub fn contains_point(&self, point: Point<i32>) -> bool {
        let max = self.bottom_right();
        point.x > self.x && point.x < max.x && point.y > self.y && point.y < max.y
    }

    /// Both corners of `other` lie strictly inside `self`.
    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        self.contains_point(other.top_left()) && self.contains_point(other.bottom_right())
    }

    /// Interiors overlap. Boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        let self_max = self.bottom_right();
        let other_max = other.bottom_right();
        self.x < other_max.x
            && other.x < self_max.x
            && self.y < other_max.y
            && other.y < self_max.y
    }

    pub fn intersection(&self, other: &BoundingBox) -> Option<BoundingBox> {
        if !self.intersects(other) {
            return None;
        }
        let self_max = self.bottom_right();
        let other_max = other.bottom_right();
        Some(Self::from_corners(
            self.x.max(other.x),
            self.y.max(other.y),
            self_max.x.min(other_max.x),
            self_max.y.min(other_max.y),
        ))
    }

    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let self_max = self.bottom_right();
        let other_max = other.bottom_right();
        Self::from_corners(
            self.x.min(other.x),
            self.y.min(other.y),
            self_max.x.max(other_max.x),
            self_max.y.max(other_max.y),
        )
    }

    /// Square of side `max(w, h)` around the same center.
    pub fn squarify(&self) -> BoundingBox {
        let side = self.w.max(self.h);
        Self::from_center(self.center(), side, side)
    }

    /// Pull both corners into `bounds`.
    ///
    /// The result always lies inside `bounds`. A box entirely outside `bounds`
    /// collapses onto its nearest edge with zero width or height.
    pub fn clamp(&self, bounds: &BoundingBox) -> BoundingBox {
        // Normalized so min <= max on both axes, which `i32::clamp` requires.
        let bounds = Self::from_points(bounds.top_left(), bounds.bottom_right());
        let (min, max) = (bounds.top_left(), bounds.bottom_right());
        let own_max = self.bottom_right();
        let clamped = Self::from_corners(
            self.x.clamp(min.x, max.x),
            self.y.clamp(min.y, max.y),
            own_max.x.clamp(min.x, max.x),
            own_max.y.clamp(min.y, max.y),
        );
        log::trace!("clamped {} to {}: {}", self, bounds, clamped);
        clamped
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x: {}, y: {}, w: {}, h: {})", self.x, self.y, self.w, self.h)
    }
}

impl From<BoundingBox> for (i32, i32, i32, i32) {
    fn from(bbox: BoundingBox) -> Self {
        (bbox.x, bbox.y, bbox.w, bbox.h)
    }
}

impl From<(i32, i32, i32, i32)> for BoundingBox {
    fn from((x, y, w, h): (i32, i32, i32, i32)) -> Self {
        Self { x, y, w, h }
    }
}

impl IntoIterator for BoundingBox {
    type Item = i32;
    type IntoIter = std::array::IntoIter<i32, 4>;

    fn into_iter(self) -> Self::IntoIter {
        [self.x, self.y, self.w, self.h].into_iter()
    }
}
