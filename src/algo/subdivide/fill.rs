//! Face fill patterns applied after the input edges have been cut.

use std::collections::HashMap;

use nalgebra::Point3;

use super::ring::EdgeCuts;
use super::{CornerType, SubdivideOptions, SubdivideReport};
use crate::error::{MeshError, Result};
use crate::mesh::{EdgeId, FaceId, PolyMesh, VertexId};

/// A face as it was before cutting.
#[derive(Debug, Clone)]
pub(super) struct FacePlan {
    pub face: FaceId,
    /// Corner vertices in winding order.
    pub corners: Vec<VertexId>,
    /// `sides[j]` is the cut edge running from `corners[j]` to `corners[j + 1]`.
    pub sides: Vec<Option<EdgeId>>,
}

/// The faces split off one planned face so far.
///
/// Connections are only ever made inside this region, so a cut vertex shared
/// with a neighbouring face is never joined across the wrong face.
struct FaceRegion {
    origin: FaceId,
    faces: Vec<FaceId>,
}

impl FaceRegion {
    fn new(face: FaceId) -> Self {
        Self {
            origin: face,
            faces: vec![face],
        }
    }

    /// Split the region face containing both `a` and `b` along a new edge.
    ///
    /// Returns `None` without splitting when `a` and `b` are already joined by
    /// an edge that bounds a face. That happens when two faces share a pair of
    /// adjacent sides: the neighbour has already made the cut, and repeating
    /// it would stack a second face on the same corner.
    fn connect(
        &mut self,
        mesh: &mut PolyMesh,
        a: VertexId,
        b: VertexId,
        report: &mut SubdivideReport,
    ) -> Result<Option<EdgeId>> {
        if let Some(existing) = mesh.find_edge(a, b) {
            if mesh.edge_loop(existing).is_valid() {
                log::debug!("{:?} already joins {:?} and {:?}", existing, a, b);
                return Ok(None);
            }
        }
        let face = self
            .faces
            .iter()
            .copied()
            .find(|&f| splittable(mesh, f, a, b))
            .ok_or(MeshError::NoSplitFace { face: self.origin })?;
        let (new_face, edge) = mesh.split_face(face, a, b)?;
        self.faces.push(new_face);
        report.inner_edges.push(edge);
        Ok(Some(edge))
    }

    /// Connect `a` and `b`, then place a new vertex on the connecting edge.
    fn connect_through(
        &mut self,
        mesh: &mut PolyMesh,
        a: VertexId,
        b: VertexId,
        position: Point3<f64>,
        report: &mut SubdivideReport,
    ) -> Result<Option<VertexId>> {
        let Some(edge) = self.connect(mesh, a, b, report)? else {
            return Ok(None);
        };
        let (v, rest) = mesh.split_edge(edge, position);
        report.inner_vertices.push(v);
        report.inner_edges.push(rest);
        Ok(Some(v))
    }
}

/// Whether `f` has both vertices without them being neighbours.
fn splittable(mesh: &PolyMesh, f: FaceId, a: VertexId, b: VertexId) -> bool {
    match (mesh.face_loop_at(f, a), mesh.face_loop_at(f, b)) {
        (Some(la), Some(lb)) => la != lb && mesh.next(la) != lb && mesh.next(lb) != la,
        _ => false,
    }
}

fn lerp(p: &Point3<f64>, q: &Point3<f64>, t: f64) -> Point3<f64> {
    p + (q - p) * t
}

/// Fill one planned face according to its cut sides.
pub(super) fn fill_face(
    mesh: &mut PolyMesh,
    plan: &FacePlan,
    cuts: &HashMap<EdgeId, EdgeCuts>,
    options: &SubdivideOptions,
    report: &mut SubdivideReport,
) -> Result<()> {
    let k = plan.corners.len();
    let cut_sides: Vec<usize> = (0..k).filter(|&j| plan.sides[j].is_some()).collect();
    let side = |j: usize| -> Vec<VertexId> {
        plan.sides[j]
            .and_then(|e| cuts.get(&e))
            .map(|c| c.along(plan.corners[j]))
            .unwrap_or_default()
    };
    let mut region = FaceRegion::new(plan.face);

    match cut_sides.as_slice() {
        &[j1, j2] if k % 2 == 0 && j2 - j1 == k / 2 => {
            straight(mesh, &mut region, &side(j1), &side(j2), report)
        }
        &[_, _, _, _] if k == 4 && options.use_grid_fill => {
            grid(mesh, &mut region, [side(0), side(1), side(2), side(3)], report)
        }
        &[j1, j2] if k == 4 && (j2 - j1 == 1 || (j1 == 0 && j2 == 3)) => {
            // `j` is the side that leads into the shared corner.
            let j = if j2 - j1 == 1 { j1 } else { j2 };
            let shared = plan.corners[(j + 1) % 4];
            let opposite = plan.corners[(j + 3) % 4];
            corner(
                mesh,
                &mut region,
                options.corner,
                (&side(j), &side((j + 1) % 4)),
                (shared, opposite),
                report,
            )
        }
        &[j] if options.use_single_edge && k == 3 => {
            let apex = plan.corners[(j + 2) % 3];
            for v in side(j) {
                region.connect(mesh, apex, v, report)?;
            }
            Ok(())
        }
        &[j] if options.use_single_edge && k == 4 => {
            let near_end = plan.corners[(j + 2) % 4];
            let near_start = plan.corners[(j + 3) % 4];
            single_quad(mesh, &mut region, &side(j), near_start, near_end, report)
        }
        // Everything else keeps the inserted vertices as an n-gon.
        _ => Ok(()),
    }
}

/// Join two opposite cut sides with straight cuts.
///
/// `u` and `w` both run in winding order, so `u[i]` pairs with `w[n - 1 - i]`.
fn straight(
    mesh: &mut PolyMesh,
    region: &mut FaceRegion,
    u: &[VertexId],
    w: &[VertexId],
    report: &mut SubdivideReport,
) -> Result<()> {
    let n = u.len();
    for i in 0..n {
        region.connect(mesh, u[i], w[n - 1 - i], report)?;
    }
    Ok(())
}

/// Fill a quad whose four sides are all cut with a regular grid.
fn grid(
    mesh: &mut PolyMesh,
    region: &mut FaceRegion,
    sides: [Vec<VertexId>; 4],
    report: &mut SubdivideReport,
) -> Result<()> {
    let [s0, s1, s2, s3] = sides;
    let n = s0.len();

    // Columns: side 0 to side 2.
    let mut columns = Vec::with_capacity(n);
    for i in 0..n {
        let (bottom, top) = (s0[i], s2[n - 1 - i]);
        if let Some(edge) = region.connect(mesh, bottom, top, report)? {
            columns.push((edge, *mesh.position(bottom), *mesh.position(top), top));
        }
    }

    // Rows: side 3 to side 1, crossing every column.
    for j in 0..n {
        let t = (j + 1) as f64 / (n + 1) as f64;
        let mut row = Vec::with_capacity(n + 2);
        row.push(s3[n - 1 - j]);
        for column in columns.iter_mut() {
            let (segment, bottom, top, end) = *column;
            let (v, rest) = mesh.split_edge(segment, lerp(&bottom, &top, t));
            report.inner_vertices.push(v);
            report.inner_edges.push(rest);
            let remaining = if mesh.edge_vertices(rest).contains(&end) {
                rest
            } else {
                segment
            };
            column.0 = remaining;
            row.push(v);
        }
        row.push(s1[j]);

        for pair in row.windows(2) {
            region.connect(mesh, pair[0], pair[1], report)?;
        }
    }
    Ok(())
}

/// Fill a quad corner where the sides `a` (into `shared`) and `b` (out of
/// `shared`) are cut.
fn corner(
    mesh: &mut PolyMesh,
    region: &mut FaceRegion,
    corner_type: CornerType,
    (a, b): (&[VertexId], &[VertexId]),
    (shared, opposite): (VertexId, VertexId),
    report: &mut SubdivideReport,
) -> Result<()> {
    let n = a.len();
    // Pair `i` is the i-th nested cut around the shared corner.
    let pairs: Vec<(VertexId, VertexId)> = (0..n).map(|i| (a[n - 1 - i], b[i])).collect();

    match corner_type {
        CornerType::StraightCut => {
            for &(u, w) in &pairs {
                region.connect(mesh, u, w, report)?;
            }
        }
        CornerType::Fan => {
            for &v in a.iter().chain(b.iter()) {
                region.connect(mesh, opposite, v, report)?;
            }
        }
        CornerType::InnerVertex | CornerType::Path => {
            let from = *mesh.position(shared);
            let to = *mesh.position(opposite);
            let mut diagonal = Vec::with_capacity(n);
            for (i, &(u, w)) in pairs.iter().enumerate() {
                let t = (i + 1) as f64 / (n + 1) as f64;
                diagonal.extend(region.connect_through(mesh, u, w, lerp(&from, &to, t), report)?);
            }
            if corner_type == CornerType::InnerVertex {
                diagonal.push(opposite);
                for pair in diagonal.windows(2) {
                    region.connect(mesh, pair[0], pair[1], report)?;
                }
            }
        }
    }
    Ok(())
}

/// Tessellate a quad with one cut side.
///
/// Cuts in the first half of the side join `near_start` (the corner adjacent
/// to the start of the side), cuts in the second half join `near_end`, and an
/// odd middle cut joins both.
fn single_quad(
    mesh: &mut PolyMesh,
    region: &mut FaceRegion,
    cuts: &[VertexId],
    near_start: VertexId,
    near_end: VertexId,
    report: &mut SubdivideReport,
) -> Result<()> {
    let n = cuts.len();
    for (i, &v) in cuts.iter().enumerate() {
        // Doubled indices avoid rounding: 2i + 1 vs n compares against the middle.
        let twice = 2 * i + 1;
        if twice <= n {
            region.connect(mesh, v, near_start, report)?;
        }
        if twice >= n {
            region.connect(mesh, v, near_end, report)?;
        }
    }
    Ok(())
}
