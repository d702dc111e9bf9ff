//! Polygon half-edge mesh with radial edge cycles.
//!
//! This module provides a boundary representation in which every face corner is
//! a **loop**. Unlike a twin-based half-edge structure, an edge does not own a
//! fixed pair of half-edges; instead all loops using an edge are linked into a
//! **radial cycle**, so wire edges, boundary edges, manifold edges and
//! non-manifold edges (three or more faces) share one representation.
//!
//! # Structure
//!
//! - Each **loop** knows its origin vertex, its edge, its face, the next and
//!   previous loop around the face, and the next and previous loop around the
//!   edge
//! - Each **edge** stores its two vertices and one loop of its radial cycle
//!   (invalid for wire edges)
//! - Each **face** stores one loop of its boundary and its rank (loop count)
//! - Each **vertex** stores the edges incident to it
//!
//! Vertices, edges and faces carry a `selected` flag. The mesh also carries the
//! active [`SelectMode`], which decides how [`PolyMesh::flush_selection`]
//! propagates flags between element kinds.

use nalgebra::Point3;

use super::index::{EdgeId, FaceId, LoopId, VertexId};
use crate::error::{MeshError, Result};

/// Upper bound on the number of loops walked around a single edge.
///
/// Real meshes rarely exceed a handful of faces per edge; the cap only exists so
/// that a corrupted radial cycle cannot make a walk run forever.
pub const MAX_RADIAL_DEGREE: usize = 1024;

/// A vertex in the mesh.
#[derive(Debug, Clone)]
pub struct Vertex {
    /// The 3D position of this vertex.
    pub position: Point3<f64>,

    /// Selection flag.
    pub selected: bool,

    /// Edges incident to this vertex, in creation order.
    pub(crate) edges: Vec<EdgeId>,
}

impl Vertex {
    /// Create a new unselected vertex at the given position.
    pub fn new(position: Point3<f64>) -> Self {
        Self {
            position,
            selected: false,
            edges: Vec::new(),
        }
    }
}

/// An edge between two vertices.
#[derive(Debug, Clone)]
pub struct Edge {
    /// The two endpoints. The order carries no meaning for topology.
    pub verts: [VertexId; 2],

    /// Selection flag.
    pub selected: bool,

    /// Any loop in this edge's radial cycle; invalid for wire edges.
    pub(crate) radial: LoopId,
}

/// A polygonal face.
#[derive(Debug, Clone)]
pub struct Face {
    /// Selection flag.
    pub selected: bool,

    /// One loop on the face boundary.
    pub(crate) loop_start: LoopId,

    /// Number of loops (and vertices) bounding the face.
    pub(crate) len: usize,
}

/// A face corner: the use of one edge by one face.
#[derive(Debug, Clone, Copy)]
pub struct Loop {
    /// The vertex this loop starts at.
    pub vertex: VertexId,

    /// The edge from `vertex` to the origin of `next`.
    pub edge: EdgeId,

    /// The face this loop bounds.
    pub face: FaceId,

    /// Next loop around the face.
    pub next: LoopId,

    /// Previous loop around the face.
    pub prev: LoopId,

    /// Next loop using the same edge (belongs to another face).
    pub radial_next: LoopId,

    /// Previous loop using the same edge.
    pub radial_prev: LoopId,
}

/// Which element kind selection is driven from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectMode {
    /// Vertex select mode.
    pub vertex: bool,
    /// Edge select mode.
    pub edge: bool,
    /// Face select mode.
    pub face: bool,
}

impl SelectMode {
    /// Vertex-only selection.
    pub const VERTEX: SelectMode = SelectMode {
        vertex: true,
        edge: false,
        face: false,
    };

    /// Edge-only selection.
    pub const EDGE: SelectMode = SelectMode {
        vertex: false,
        edge: true,
        face: false,
    };

    /// Face-only selection.
    pub const FACE: SelectMode = SelectMode {
        vertex: false,
        edge: false,
        face: true,
    };
}

impl Default for SelectMode {
    fn default() -> Self {
        Self::VERTEX
    }
}

/// A polygon mesh with radial edge cycles and per-element selection.
#[derive(Debug, Clone, Default)]
pub struct PolyMesh {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) faces: Vec<Face>,
    pub(crate) loops: Vec<Loop>,

    /// The active selection mode.
    pub select_mode: SelectMode,
}

impl PolyMesh {
    /// Create a new empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh with pre-allocated capacity.
    pub fn with_capacity(num_vertices: usize, num_faces: usize) -> Self {
        // Quad-dominant estimate: E ~ 2F, L = 4F
        Self {
            vertices: Vec::with_capacity(num_vertices),
            edges: Vec::with_capacity(num_faces * 2 + num_vertices),
            faces: Vec::with_capacity(num_faces),
            loops: Vec::with_capacity(num_faces * 4),
            select_mode: SelectMode::default(),
        }
    }

    // ==================== Accessors ====================

    /// Get the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Get the number of faces.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Get the number of loops.
    #[inline]
    pub fn num_loops(&self) -> usize {
        self.loops.len()
    }

    /// Get a vertex by ID.
    #[inline]
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.index()]
    }

    /// Get a mutable vertex by ID.
    #[inline]
    pub fn vertex_mut(&mut self, id: VertexId) -> &mut Vertex {
        &mut self.vertices[id.index()]
    }

    /// Get an edge by ID.
    #[inline]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    /// Get a mutable edge by ID.
    #[inline]
    pub fn edge_mut(&mut self, id: EdgeId) -> &mut Edge {
        &mut self.edges[id.index()]
    }

    /// Get a face by ID.
    #[inline]
    pub fn face(&self, id: FaceId) -> &Face {
        &self.faces[id.index()]
    }

    /// Get a mutable face by ID.
    #[inline]
    pub fn face_mut(&mut self, id: FaceId) -> &mut Face {
        &mut self.faces[id.index()]
    }

    /// Get a loop by ID.
    #[inline]
    pub fn loop_data(&self, id: LoopId) -> &Loop {
        &self.loops[id.index()]
    }

    /// Get the position of a vertex.
    #[inline]
    pub fn position(&self, v: VertexId) -> &Point3<f64> {
        &self.vertex(v).position
    }

    // ==================== Topology Queries ====================

    /// Next loop around the face.
    #[inline]
    pub fn next(&self, l: LoopId) -> LoopId {
        self.loop_data(l).next
    }

    /// Previous loop around the face.
    #[inline]
    pub fn prev(&self, l: LoopId) -> LoopId {
        self.loop_data(l).prev
    }

    /// Next loop around the edge.
    #[inline]
    pub fn radial_next(&self, l: LoopId) -> LoopId {
        self.loop_data(l).radial_next
    }

    /// Origin vertex of a loop.
    #[inline]
    pub fn loop_vertex(&self, l: LoopId) -> VertexId {
        self.loop_data(l).vertex
    }

    /// Edge of a loop.
    #[inline]
    pub fn loop_edge(&self, l: LoopId) -> EdgeId {
        self.loop_data(l).edge
    }

    /// Face of a loop.
    #[inline]
    pub fn loop_face(&self, l: LoopId) -> FaceId {
        self.loop_data(l).face
    }

    /// One loop of the face boundary.
    #[inline]
    pub fn face_loop(&self, f: FaceId) -> LoopId {
        self.face(f).loop_start
    }

    /// Number of vertices of a face.
    #[inline]
    pub fn face_rank(&self, f: FaceId) -> usize {
        self.face(f).len
    }

    /// One loop of the edge's radial cycle, invalid for wire edges.
    #[inline]
    pub fn edge_loop(&self, e: EdgeId) -> LoopId {
        self.edge(e).radial
    }

    /// The two vertices of an edge.
    #[inline]
    pub fn edge_vertices(&self, e: EdgeId) -> [VertexId; 2] {
        self.edge(e).verts
    }

    /// The endpoint of `e` that is not `v`.
    #[inline]
    pub fn other_vertex(&self, e: EdgeId, v: VertexId) -> VertexId {
        let [a, b] = self.edge_vertices(e);
        if a == v {
            b
        } else {
            a
        }
    }

    /// Edges incident to a vertex.
    #[inline]
    pub fn vertex_edges(&self, v: VertexId) -> &[EdgeId] {
        &self.vertex(v).edges
    }

    /// Find the edge joining two vertices.
    pub fn find_edge(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        self.vertex_edges(a)
            .iter()
            .copied()
            .find(|&e| self.other_vertex(e, a) == b)
    }

    /// Find the loop of face `f` that starts at vertex `v`.
    pub fn face_loop_at(&self, f: FaceId, v: VertexId) -> Option<LoopId> {
        self.face_loops(f).find(|&l| self.loop_vertex(l) == v)
    }

    /// Check whether an edge is used by exactly one face.
    pub fn is_boundary_edge(&self, e: EdgeId) -> bool {
        let l = self.edge_loop(e);
        l.is_valid() && self.radial_next(l) == l
    }

    /// Number of faces using an edge.
    pub fn edge_degree(&self, e: EdgeId) -> usize {
        self.radial_loops(e).count()
    }

    // ==================== Iteration ====================

    /// Iterate over all vertex IDs.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId::new)
    }

    /// Iterate over all edge IDs.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.edges.len()).map(EdgeId::new)
    }

    /// Iterate over all face IDs.
    pub fn face_ids(&self) -> impl Iterator<Item = FaceId> + '_ {
        (0..self.faces.len()).map(FaceId::new)
    }

    /// Iterate over the loops of a face, starting at its first loop.
    pub fn face_loops(&self, f: FaceId) -> FaceLoopIter<'_> {
        FaceLoopIter::new(self, self.face_loop(f), self.face_rank(f))
    }

    /// Iterate over the vertices of a face in winding order.
    pub fn face_vertices(&self, f: FaceId) -> impl Iterator<Item = VertexId> + '_ {
        self.face_loops(f).map(|l| self.loop_vertex(l))
    }

    /// Iterate over the edges of a face in winding order.
    pub fn face_edges(&self, f: FaceId) -> impl Iterator<Item = EdgeId> + '_ {
        self.face_loops(f).map(|l| self.loop_edge(l))
    }

    /// Iterate over the loops using an edge.
    pub fn radial_loops(&self, e: EdgeId) -> RadialLoopIter<'_> {
        RadialLoopIter::new(self, self.edge_loop(e))
    }

    // ==================== Selection ====================

    /// Iterate over selected edges in index order.
    pub fn selected_edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edge_ids().filter(|&e| self.edge(e).selected)
    }

    /// Iterate over selected faces in index order.
    pub fn selected_faces(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.face_ids().filter(|&f| self.face(f).selected)
    }

    /// Set or clear the selection flag of every element.
    pub fn select_all(&mut self, selected: bool) {
        for v in &mut self.vertices {
            v.selected = selected;
        }
        for e in &mut self.edges {
            e.selected = selected;
        }
        for f in &mut self.faces {
            f.selected = selected;
        }
    }

    /// Select a face together with its edges and vertices.
    pub fn select_face(&mut self, f: FaceId) {
        self.face_mut(f).selected = true;
        let loops: Vec<LoopId> = self.face_loops(f).collect();
        for l in loops {
            let Loop { vertex, edge, .. } = *self.loop_data(l);
            self.vertex_mut(vertex).selected = true;
            self.edge_mut(edge).selected = true;
        }
    }

    /// Select an edge together with its vertices.
    pub fn select_edge(&mut self, e: EdgeId) {
        self.edge_mut(e).selected = true;
        for v in self.edge_vertices(e) {
            self.vertex_mut(v).selected = true;
        }
    }

    /// Propagate selection flags according to the active [`SelectMode`].
    ///
    /// - vertex mode: an edge is selected iff both vertices are, a face iff all
    ///   of its vertices are
    /// - edge mode: a vertex is selected iff an incident edge is, a face iff all
    ///   of its edges are
    /// - face mode: edges and vertices are selected iff they bound a selected
    ///   face
    pub fn flush_selection(&mut self) {
        let mode = self.select_mode;
        if mode.vertex {
            for ei in 0..self.edges.len() {
                let [a, b] = self.edges[ei].verts;
                self.edges[ei].selected =
                    self.vertices[a.index()].selected && self.vertices[b.index()].selected;
            }
            self.flush_faces_from_edges();
        } else if mode.edge {
            for v in &mut self.vertices {
                v.selected = false;
            }
            for ei in 0..self.edges.len() {
                if self.edges[ei].selected {
                    let [a, b] = self.edges[ei].verts;
                    self.vertices[a.index()].selected = true;
                    self.vertices[b.index()].selected = true;
                }
            }
            self.flush_faces_from_edges();
        } else if mode.face {
            for v in &mut self.vertices {
                v.selected = false;
            }
            for e in &mut self.edges {
                e.selected = false;
            }
            let selected: Vec<FaceId> = self.selected_faces().collect();
            for f in selected {
                self.select_face(f);
            }
        }
    }

    fn flush_faces_from_edges(&mut self) {
        for fi in 0..self.faces.len() {
            let f = FaceId::new(fi);
            let all = self.face_edges(f).all(|e| self.edge(e).selected);
            self.faces[fi].selected = all;
        }
    }

    // ==================== Geometry ====================

    /// Compute the bounding box of the mesh.
    pub fn bounding_box(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let first = self.vertices.first()?;
        let mut min = first.position;
        let mut max = first.position;

        for v in &self.vertices {
            for i in 0..3 {
                min[i] = min[i].min(v.position[i]);
                max[i] = max[i].max(v.position[i]);
            }
        }

        Some((min, max))
    }

    // ==================== Construction ====================

    /// Add a new vertex and return its ID.
    pub fn add_vertex(&mut self, position: Point3<f64>) -> VertexId {
        let id = VertexId::new(self.vertices.len());
        self.vertices.push(Vertex::new(position));
        id
    }

    /// Return the edge between `a` and `b`, creating a wire edge if none exists.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> EdgeId {
        if let Some(e) = self.find_edge(a, b) {
            return e;
        }
        let id = EdgeId::new(self.edges.len());
        self.edges.push(Edge {
            verts: [a, b],
            selected: false,
            radial: LoopId::invalid(),
        });
        self.vertices[a.index()].edges.push(id);
        self.vertices[b.index()].edges.push(id);
        id
    }

    /// Add a face through the given vertices, creating missing edges.
    ///
    /// Existing edges are shared, so a third face on an edge simply joins its
    /// radial cycle.
    pub fn add_face(&mut self, verts: &[VertexId]) -> Result<FaceId> {
        let face_index = self.faces.len();
        let n = verts.len();
        if n < 3 {
            return Err(MeshError::DegenerateFace {
                face: face_index,
                reason: "fewer than three vertices",
            });
        }
        for (i, &v) in verts.iter().enumerate() {
            if !v.is_valid() || v.index() >= self.vertices.len() {
                return Err(MeshError::InvalidVertexIndex {
                    face: face_index,
                    vertex: v.index(),
                });
            }
            if verts[..i].contains(&v) {
                return Err(MeshError::DegenerateFace {
                    face: face_index,
                    reason: "repeated vertex",
                });
            }
        }

        let f = FaceId::new(face_index);
        let base = self.loops.len();
        for i in 0..n {
            let e = self.add_edge(verts[i], verts[(i + 1) % n]);
            let l = LoopId::new(base + i);
            self.loops.push(Loop {
                vertex: verts[i],
                edge: e,
                face: f,
                next: LoopId::new(base + (i + 1) % n),
                prev: LoopId::new(base + (i + n - 1) % n),
                radial_next: l,
                radial_prev: l,
            });
            self.radial_attach(e, l);
        }
        self.faces.push(Face {
            selected: false,
            loop_start: LoopId::new(base),
            len: n,
        });
        Ok(f)
    }

    /// Link loop `l` into the radial cycle of edge `e`.
    fn radial_attach(&mut self, e: EdgeId, l: LoopId) {
        let head = self.edges[e.index()].radial;
        if !head.is_valid() {
            self.edges[e.index()].radial = l;
            self.loops[l.index()].radial_next = l;
            self.loops[l.index()].radial_prev = l;
        } else {
            let after = self.loops[head.index()].radial_next;
            self.loops[l.index()].radial_prev = head;
            self.loops[l.index()].radial_next = after;
            self.loops[head.index()].radial_next = l;
            self.loops[after.index()].radial_prev = l;
        }
    }

    /// Split an edge by inserting a new vertex at `position`.
    ///
    /// If the edge runs `a -> b`, it is shortened to `a -> v` and a new edge
    /// `v -> b` is returned alongside the new vertex. Every face using the edge
    /// gains one loop. The new edge inherits the selection flag.
    pub fn split_edge(&mut self, e: EdgeId, position: Point3<f64>) -> (VertexId, EdgeId) {
        let [a, b] = self.edge_vertices(e);
        let selected = self.edge(e).selected;
        let users: Vec<LoopId> = self.radial_loops(e).collect();

        let v = self.add_vertex(position);
        let ne = EdgeId::new(self.edges.len());
        self.edges.push(Edge {
            verts: [v, b],
            selected,
            radial: LoopId::invalid(),
        });
        self.edges[e.index()].verts[1] = v;
        for slot in &mut self.vertices[b.index()].edges {
            if *slot == e {
                *slot = ne;
            }
        }
        self.vertices[v.index()].edges = vec![e, ne];

        self.edges[e.index()].radial = LoopId::invalid();
        for l in users {
            let Loop { vertex, face, next, .. } = self.loops[l.index()];
            let nl = LoopId::new(self.loops.len());
            // Travelling a->b the old loop keeps `e`; travelling b->a it moves to `ne`.
            let (l_edge, nl_edge) = if vertex == a { (e, ne) } else { (ne, e) };
            self.loops.push(Loop {
                vertex: v,
                edge: nl_edge,
                face,
                next,
                prev: l,
                radial_next: nl,
                radial_prev: nl,
            });
            self.loops[l.index()].edge = l_edge;
            self.loops[l.index()].next = nl;
            self.loops[next.index()].prev = nl;
            self.faces[face.index()].len += 1;
            self.radial_attach(l_edge, l);
            self.radial_attach(nl_edge, nl);
        }

        (v, ne)
    }

    /// Split face `f` along a new edge between two of its vertices.
    ///
    /// The original face keeps the boundary from `a` round to `b`; the returned
    /// face takes the boundary from `b` round to `a`. The new face inherits the
    /// selection flag. Fails if either vertex is not on the face or the two are
    /// neighbours on its boundary.
    ///
    /// An existing edge between `a` and `b` is reused, so splitting along an
    /// edge that already bounds another face raises its degree.
    pub fn split_face(&mut self, f: FaceId, a: VertexId, b: VertexId) -> Result<(FaceId, EdgeId)> {
        let (la, lb) = match (self.face_loop_at(f, a), self.face_loop_at(f, b)) {
            (Some(la), Some(lb)) => (la, lb),
            _ => {
                return Err(MeshError::InvalidState(format!(
                    "face {:?} does not contain both {:?} and {:?}",
                    f, a, b
                )))
            }
        };
        if la == lb || self.next(la) == lb || self.next(lb) == la {
            return Err(MeshError::InvalidState(format!(
                "{:?} and {:?} are adjacent on face {:?}",
                a, b, f
            )));
        }

        let old_len = self.face_rank(f);
        let e = self.add_edge(a, b);
        let x = self.prev(lb);
        let y = self.prev(la);
        let g = FaceId::new(self.faces.len());
        let n1 = LoopId::new(self.loops.len());
        let n2 = LoopId::new(self.loops.len() + 1);

        self.loops.push(Loop {
            vertex: b,
            edge: e,
            face: f,
            next: la,
            prev: x,
            radial_next: n1,
            radial_prev: n1,
        });
        self.loops.push(Loop {
            vertex: a,
            edge: e,
            face: g,
            next: lb,
            prev: y,
            radial_next: n2,
            radial_prev: n2,
        });
        self.loops[x.index()].next = n1;
        self.loops[la.index()].prev = n1;
        self.loops[y.index()].next = n2;
        self.loops[lb.index()].prev = n2;

        let mut g_len = 0;
        let mut l = lb;
        for _ in 0..old_len + 2 {
            self.loops[l.index()].face = g;
            g_len += 1;
            if l == n2 {
                break;
            }
            l = self.loops[l.index()].next;
        }

        let selected = self.faces[f.index()].selected;
        self.faces.push(Face {
            selected,
            loop_start: lb,
            len: g_len,
        });
        self.faces[f.index()].loop_start = la;
        self.faces[f.index()].len = old_len + 2 - g_len;

        self.radial_attach(e, n1);
        self.radial_attach(e, n2);

        Ok((g, e))
    }

    // ==================== Validation ====================

    /// Check if the mesh is valid (all connectivity is consistent).
    pub fn is_valid(&self) -> bool {
        for (li, lp) in self.loops.iter().enumerate() {
            let id = LoopId::new(li);
            if self.loop_data(lp.next).prev != id || self.loop_data(lp.prev).next != id {
                return false;
            }
            if self.loop_data(lp.radial_next).radial_prev != id
                || self.loop_data(lp.radial_prev).radial_next != id
            {
                return false;
            }
            if self.loop_data(lp.next).face != lp.face
                || self.loop_data(lp.radial_next).edge != lp.edge
            {
                return false;
            }
            // The edge must join this loop's vertex to the next loop's vertex.
            let [a, b] = self.edge_vertices(lp.edge);
            let dest = self.loop_vertex(lp.next);
            if !((a == lp.vertex && b == dest) || (b == lp.vertex && a == dest)) {
                return false;
            }
        }

        for (fi, face) in self.faces.iter().enumerate() {
            if face.len < 3 {
                return false;
            }
            let f = FaceId::new(fi);
            let mut l = face.loop_start;
            for _ in 0..face.len {
                if self.loop_face(l) != f {
                    return false;
                }
                l = self.next(l);
            }
            if l != face.loop_start {
                return false;
            }
        }

        for (ei, edge) in self.edges.iter().enumerate() {
            let e = EdgeId::new(ei);
            if edge.verts[0] == edge.verts[1] {
                return false;
            }
            if !edge
                .verts
                .iter()
                .all(|&v| self.vertex_edges(v).contains(&e))
            {
                return false;
            }
            if self.radial_loops(e).any(|l| self.loop_edge(l) != e) {
                return false;
            }
        }

        true
    }
}

/// Iterator over the loops of a face, bounded by the face rank.
pub struct FaceLoopIter<'a> {
    mesh: &'a PolyMesh,
    current: LoopId,
    remaining: usize,
}

impl<'a> FaceLoopIter<'a> {
    fn new(mesh: &'a PolyMesh, start: LoopId, rank: usize) -> Self {
        Self {
            mesh,
            current: start,
            remaining: if start.is_valid() { rank } else { 0 },
        }
    }
}

impl<'a> Iterator for FaceLoopIter<'a> {
    type Item = LoopId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let result = self.current;
        self.current = self.mesh.next(self.current);
        Some(result)
    }
}

/// Iterator over the loops using an edge, bounded by [`MAX_RADIAL_DEGREE`].
pub struct RadialLoopIter<'a> {
    mesh: &'a PolyMesh,
    start: LoopId,
    current: LoopId,
    steps: usize,
}

impl<'a> RadialLoopIter<'a> {
    fn new(mesh: &'a PolyMesh, start: LoopId) -> Self {
        Self {
            mesh,
            start,
            current: start,
            steps: 0,
        }
    }
}

impl<'a> Iterator for RadialLoopIter<'a> {
    type Item = LoopId;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.current.is_valid() || self.steps >= MAX_RADIAL_DEGREE {
            return None;
        }
        let result = self.current;
        self.steps += 1;
        let next = self.mesh.radial_next(self.current);
        self.current = if next == self.start {
            LoopId::invalid()
        } else {
            next
        };
        Some(result)
    }
}
