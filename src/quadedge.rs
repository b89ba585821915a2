use geo_types::Point;

use crate::math::CoordType;

/// Handle to one directed edge record in a [`QuadEdges`] arena.
///
/// An undirected edge is stored as a bundle of 4 records: the two directed
/// primal edges and their two duals. The handle packs the bundle index and a
/// 2-bit rotation tag into a single value, so [`rot`](EdgeId::rot) and
/// [`sym`](EdgeId::sym) are pure index arithmetic and need no arena access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EdgeId(usize);

impl EdgeId {
    /// Rotate 90° into the dual: the edge of the left face's dual.
    /// Applied 4 times, returns to the original record.
    #[inline]
    pub fn rot(self) -> EdgeId {
        EdgeId(self.0 & !3 | (self.0 + 1) & 3)
    }

    /// The same undirected edge, traversed in the opposite direction.
    /// Self-inverse.
    #[inline]
    pub fn sym(self) -> EdgeId {
        EdgeId(self.0 ^ 2)
    }

    /// Inverse rotation, equal to `rot().sym()`.
    #[inline]
    pub fn rot_inv(self) -> EdgeId {
        EdgeId(self.0 & !3 | (self.0 + 3) & 3)
    }

    /// Arena slot of this record; usable as an index into side arrays
    /// (e.g. visited marks during extraction).
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }

    #[inline]
    fn is_primal(self) -> bool {
        self.0 & 1 == 0
    }
}

/// Arena of quad-edge records.
///
/// The graph is a shared mutable link structure with cycles, so records live
/// in flat vectors addressed by [`EdgeId`] instead of owning each other: one
/// `onext` link per record, and one origin point per primal record (dual
/// records have no origin). [`delete_edge`](QuadEdges::delete_edge) only
/// rewires links; unlinked bundles stay in the arena as unreachable garbage
/// until the whole mesh is dropped.
pub struct QuadEdges<T>
where
    T: CoordType,
{
    next: Vec<EdgeId>,
    origin: Vec<Point<T>>,
}

impl<T> QuadEdges<T>
where
    T: CoordType,
{
    pub fn new() -> Self {
        Self {
            next: Vec::new(),
            origin: Vec::new(),
        }
    }

    /// `edges` is a capacity hint, in undirected edges.
    pub fn with_capacity(edges: usize) -> Self {
        Self {
            next: Vec::with_capacity(4 * edges),
            origin: Vec::with_capacity(2 * edges),
        }
    }

    /// Total number of records ever allocated, including deleted ones.
    pub fn len(&self) -> usize {
        self.next.len()
    }

    pub fn is_empty(&self) -> bool {
        self.next.is_empty()
    }

    /// Allocates an isolated edge `from → to`.
    ///
    /// Its `onext` rings are self-loops (no other edge shares its endpoints
    /// yet), while the two dual records form a 2-ring: a lone segment has a
    /// single face on both sides.
    pub fn make_edge(&mut self, from: Point<T>, to: Point<T>) -> EdgeId {
        let base = self.next.len();
        let (e0, e1, e2, e3) = (
            EdgeId(base),
            EdgeId(base + 1),
            EdgeId(base + 2),
            EdgeId(base + 3),
        );

        self.next.extend([e0, e3, e2, e1]);
        self.origin.push(from);
        self.origin.push(to);

        e0
    }

    /// Next edge counterclockwise around this edge's origin.
    #[inline]
    pub fn onext(&self, e: EdgeId) -> EdgeId {
        self.next[e.0]
    }

    /// Previous edge (clockwise) around this edge's origin.
    #[inline]
    pub fn oprev(&self, e: EdgeId) -> EdgeId {
        self.onext(e.rot()).rot()
    }

    /// Next edge counterclockwise around this edge's left face.
    #[inline]
    pub fn lnext(&self, e: EdgeId) -> EdgeId {
        self.onext(e.rot_inv()).rot()
    }

    /// Previous edge around this edge's left face.
    #[inline]
    pub fn lprev(&self, e: EdgeId) -> EdgeId {
        self.onext(e).sym()
    }

    /// Previous edge around this edge's right face.
    #[inline]
    pub fn rprev(&self, e: EdgeId) -> EdgeId {
        self.onext(e.sym())
    }

    /// Previous edge (clockwise) around this edge's destination.
    #[inline]
    pub fn dprev(&self, e: EdgeId) -> EdgeId {
        self.onext(e.rot_inv()).rot_inv()
    }

    /// Origin point of a primal edge.
    #[inline]
    pub fn from(&self, e: EdgeId) -> Point<T> {
        debug_assert!(e.is_primal(), "dual records carry no origin");
        self.origin[e.0 >> 1]
    }

    /// Destination point of a primal edge.
    #[inline]
    pub fn to(&self, e: EdgeId) -> Point<T> {
        self.from(e.sym())
    }

    /// Exchanges the `onext` successors of `a` and `b`, and symmetrically of
    /// their duals. If `a` and `b` were on distinct origin rings, the rings
    /// merge; if on the same ring, it splits in two. Self-inverse; rewires
    /// links only.
    pub fn splice(&mut self, a: EdgeId, b: EdgeId) {
        let alpha = self.onext(a).rot();
        let beta = self.onext(b).rot();

        let tmp = self.onext(a);
        self.next[a.0] = self.onext(b);
        self.next[b.0] = tmp;

        let tmp = self.onext(beta);
        self.next[beta.0] = self.onext(alpha);
        self.next[alpha.0] = tmp;
    }

    /// Creates a new edge from `a`'s destination to `b`'s origin and splices
    /// it into both rings, so that the new edge becomes `a.lnext` and the
    /// predecessor of `b` in its origin ring.
    pub fn connect(&mut self, a: EdgeId, b: EdgeId) -> EdgeId {
        let (from, to) = (self.to(a), self.from(b));
        let q = self.make_edge(from, to);

        let a_lnext = self.lnext(a);
        self.splice(q, a_lnext);
        self.splice(q.sym(), b);

        q
    }

    /// Unlinks `e` from both of its endpoint rings. The bundle's records
    /// become unreachable; the arena slots are not reused.
    pub fn delete_edge(&mut self, e: EdgeId) {
        let p = self.oprev(e);
        self.splice(e, p);

        let p = self.oprev(e.sym());
        self.splice(e.sym(), p);
    }
}

impl<T> Default for QuadEdges<T>
where
    T: CoordType,
{
    fn default() -> Self {
        Self::new()
    }
}
