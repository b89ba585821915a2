/*!
A 2D [Delaunay Triangulation](https://en.wikipedia.org/wiki/Delaunay_triangulation)
built with the Guibas & Stolfi divide-and-conquer algorithm on a quad-edge mesh,
in O(n log n).

# Example

```rust
use delaunay_quadedge::triangulate;
use geo_types::point;

let points = vec![
    point!(x: 0., y: 0.),
    point!(x: 1., y: 0.),
    point!(x: 0., y: 1.),
];

let result = triangulate(&points);
assert_eq!(result.len(), 1);
```
*/

use geo_types::Point;

use crate::math::{in_circle, left_of, orient, right_of, CoordType};
use crate::quadedge::{EdgeId, QuadEdges};

/// Result of the Delaunay triangulation.
pub struct Triangulation<T>
where
    T: CoordType,
{
    /// Triangle vertices, flattened: each consecutive triple is one Delaunay
    /// triangle, in face discovery order. Faces of a degenerate mesh can
    /// contribute groups larger than 3.
    pub triangles: Vec<Point<T>>,

    /// Origins of the outer-face boundary edges, in walk order. For
    /// non-degenerate input this lists each convex-hull vertex exactly once;
    /// when all points are collinear the walk doubles back along the path,
    /// so interior vertices appear twice.
    pub hull: Vec<Point<T>>,
}

impl<T> Triangulation<T>
where
    T: CoordType,
{
    fn empty() -> Self {
        Self {
            triangles: Vec::new(),
            hull: Vec::new(),
        }
    }

    /// The number of triangles in the triangulation.
    pub fn len(&self) -> usize {
        self.triangles.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Triangulate a set of 2D points.
    ///
    /// The input is copied, sorted ascending by (x, y) and stripped of exact
    /// duplicate points. Returns an empty triangulation when fewer than 2
    /// distinct points remain; for collinear input, a triangulation with no
    /// triangles but all points on the hull.
    pub fn triangulate(points: &[Point<T>]) -> Triangulation<T> {
        let mut points = points.to_vec();

        points.sort_unstable_by(|a, b| {
            a.x()
                .partial_cmp(&b.x())
                .unwrap()
                .then(a.y().partial_cmp(&b.y()).unwrap())
        });
        points.dedup();

        if points.len() < 2 {
            return Triangulation::empty();
        }

        let mut mesh = QuadEdges::with_capacity(3 * points.len());
        let (le, _) = build(&mut mesh, &points, 0, points.len());

        extract(&mesh, le)
    }
}

/// `valid` from Guibas & Stolfi: a candidate edge still lies on the mesh side
/// of the merge baseline.
fn valid<T>(mesh: &QuadEdges<T>, e: EdgeId, basel: EdgeId) -> bool
where
    T: CoordType,
{
    right_of(mesh.to(e), mesh.from(basel), mesh.to(basel))
}

/// Recursively triangulate `points[lo..hi]` (sorted by (x, y), at least 2
/// points) and return the counterclockwise convex-hull edge out of the
/// leftmost point and the clockwise one out of the rightmost point.
fn build<T>(mesh: &mut QuadEdges<T>, points: &[Point<T>], lo: usize, hi: usize) -> (EdgeId, EdgeId)
where
    T: CoordType,
{
    if hi - lo == 2 {
        let a = mesh.make_edge(points[lo], points[lo + 1]);
        return (a, a.sym());
    }

    if hi - lo == 3 {
        let a = mesh.make_edge(points[lo], points[lo + 1]);
        let b = mesh.make_edge(points[lo + 1], points[lo + 2]);
        mesh.splice(a.sym(), b);

        let orientation = orient(points[lo], points[lo + 1], points[lo + 2]);
        return if orientation > 0. {
            mesh.connect(b, a);
            (a, b.sym())
        } else if orientation < 0. {
            let c = mesh.connect(b, a);
            (c.sym(), c)
        } else {
            // collinear: leave the path open, no triangle possible
            (a, b.sym())
        };
    }

    let mid = (lo + hi + 1) / 2;
    let (mut ldo, mut ldi) = build(mesh, points, lo, mid);
    let (mut rdi, mut rdo) = build(mesh, points, mid, hi);

    // lower common tangent of the two hulls
    loop {
        if left_of(mesh.from(rdi), mesh.from(ldi), mesh.to(ldi)) {
            ldi = mesh.lnext(ldi);
        } else if right_of(mesh.from(ldi), mesh.from(rdi), mesh.to(rdi)) {
            rdi = mesh.rprev(rdi);
        } else {
            break;
        }
    }

    let mut basel = mesh.connect(rdi.sym(), ldi);
    if mesh.from(ldi) == mesh.from(ldo) {
        ldo = basel.sym();
    }
    if mesh.from(rdi) == mesh.from(rdo) {
        rdo = basel;
    }

    // merge loop
    loop {
        // locate the first left point the rising bubble will hit, deleting
        // left edges out of basel's destination that fail the circle test
        let mut lcand = mesh.onext(basel.sym());
        if valid(mesh, lcand, basel) {
            while in_circle(
                mesh.to(basel),
                mesh.from(basel),
                mesh.to(lcand),
                mesh.to(mesh.onext(lcand)),
            ) {
                let next = mesh.onext(lcand);
                mesh.delete_edge(lcand);
                lcand = next;
            }
        }

        // symmetrically, the first right point
        let mut rcand = mesh.oprev(basel);
        if valid(mesh, rcand, basel) {
            while in_circle(
                mesh.to(basel),
                mesh.from(basel),
                mesh.to(rcand),
                mesh.to(mesh.oprev(rcand)),
            ) {
                let next = mesh.oprev(rcand);
                mesh.delete_edge(rcand);
                rcand = next;
            }
        }

        let lvalid = valid(mesh, lcand, basel);
        let rvalid = valid(mesh, rcand, basel);

        // both invalid: basel is the upper common tangent, merge is done
        if !lvalid && !rvalid {
            break;
        }

        // connect the next cross edge to lcand's or rcand's destination,
        // arbitrating by the circle test when both are valid
        basel = if !lvalid
            || (rvalid
                && in_circle(
                    mesh.to(lcand),
                    mesh.from(lcand),
                    mesh.from(rcand),
                    mesh.to(rcand),
                ))
        {
            mesh.connect(rcand, basel.sym())
        } else {
            mesh.connect(basel.sym(), lcand.sym())
        };
    }

    (ldo, rdo)
}

/// Walk the finished mesh and flatten its faces into a triangle list.
///
/// `start` must lie on the outer boundary. The outer face is marked first
/// (and recorded as the hull), then a breadth-first frontier of `sym` edges
/// visits every interior face once, emitting each face's edge origins.
fn extract<T>(mesh: &QuadEdges<T>, start: EdgeId) -> Triangulation<T>
where
    T: CoordType,
{
    // advance to an edge whose left face is the unbounded one
    let mut boundary = start;
    while left_of(
        mesh.to(mesh.onext(boundary)),
        mesh.from(boundary),
        mesh.to(boundary),
    ) {
        boundary = mesh.onext(boundary);
    }

    let mut mark = vec![false; mesh.len()];
    let mut queue: Vec<EdgeId> = Vec::new();
    let mut hull = Vec::new();

    // mark the outer face, seeding the queue with its neighbours
    let mut curr = boundary;
    loop {
        queue.push(curr.sym());
        mark[curr.index()] = true;
        hull.push(mesh.from(curr));

        curr = mesh.lnext(curr);
        if curr == boundary {
            break;
        }
    }

    let mut triangles = Vec::new();

    // the queue only ever grows; the index is the frontier
    let mut head = 0;
    while head < queue.len() {
        let edge = queue[head];
        head += 1;

        if mark[edge.index()] {
            continue;
        }

        let mut curr = edge;
        loop {
            triangles.push(mesh.from(curr));
            if !mark[curr.sym().index()] {
                queue.push(curr.sym());
            }
            mark[curr.index()] = true;

            curr = mesh.lnext(curr);
            if curr == edge {
                break;
            }
        }
    }

    Triangulation { triangles, hull }
}
