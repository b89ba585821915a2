pub use delaunay::Triangulation;
use geo_types::Point;
pub use math::{ccw, in_circle, left_of, right_of, CoordType};
pub use quadedge::{EdgeId, QuadEdges};

mod delaunay;
mod math;
mod quadedge;

pub fn triangulate<T>(points: &[Point<T>]) -> Triangulation<T>
where
    T: CoordType,
{
    Triangulation::triangulate(points)
}
