use geo_types::{CoordFloat, Point};
use num_traits::NumCast;
use robust::{incircle, orient2d, Coord};

pub trait CoordType: CoordFloat {}

impl CoordType for f64 {}
impl CoordType for f32 {}

#[inline]
fn coord<T>(p: Point<T>) -> Coord<f64>
where
    T: CoordType,
{
    Coord {
        x: NumCast::from(p.x()).unwrap(),
        y: NumCast::from(p.y()).unwrap(),
    }
}

/// Signed twice-area of the triangle (a, b, c):
///
/// ```text
/// | a.x  a.y  1 |
/// | b.x  b.y  1 |
/// | c.x  c.y  1 |
/// ```
///
/// Positive when a → b → c turns counterclockwise, negative when clockwise,
/// zero when collinear.
pub fn ccw<T>(a: Point<T>, b: Point<T>, c: Point<T>) -> T
where
    T: CoordType,
{
    (b.x() - a.x()) * (c.y() - a.y()) - (b.y() - a.y()) * (c.x() - a.x())
}

/// Orientation sign computed with adaptive-precision arithmetic.
/// Agrees with the sign of [`ccw`] wherever the naive determinant is exact.
#[inline]
pub(crate) fn orient<T>(a: Point<T>, b: Point<T>, c: Point<T>) -> f64
where
    T: CoordType,
{
    orient2d(coord(a), coord(b), coord(c))
}

/// True iff `p` lies strictly to the left of the directed edge `from → to`.
pub fn left_of<T>(p: Point<T>, from: Point<T>, to: Point<T>) -> bool
where
    T: CoordType,
{
    orient(p, from, to) > 0.
}

/// True iff `p` lies strictly to the right of the directed edge `from → to`.
pub fn right_of<T>(p: Point<T>, from: Point<T>, to: Point<T>) -> bool
where
    T: CoordType,
{
    orient(p, to, from) > 0.
}

/// True iff `d` lies strictly inside the circumcircle of (a, b, c).
///
/// Returns false when `d` coincides exactly with one of the triangle's
/// vertices. The determinant sign is computed with adaptive-precision
/// arithmetic, so exactly cocircular points are never reported as inside.
pub fn in_circle<T>(a: Point<T>, b: Point<T>, c: Point<T>, d: Point<T>) -> bool
where
    T: CoordType,
{
    if d == a || d == b || d == c {
        return false;
    }

    incircle(coord(a), coord(b), coord(c), coord(d)) > 0.
}
