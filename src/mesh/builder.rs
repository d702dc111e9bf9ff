//! Mesh construction utilities.
//!
//! This module provides functions for building polygon meshes from
//! face-vertex lists as commonly found in mesh file formats.

use nalgebra::Point3;

use super::halfedge::PolyMesh;
use super::index::VertexId;
use crate::error::{MeshError, Result};

/// Build a polygon mesh from vertices and faces of any rank.
///
/// # Arguments
/// * `vertices` - List of vertex positions
/// * `faces` - List of faces, each a list of vertex indices in winding order
///
/// # Returns
/// A polygon mesh, or an error if the input is invalid.
///
/// # Example
/// ```
/// use ringcut::mesh::build_from_polygons;
/// use nalgebra::Point3;
///
/// let vertices = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
///     Point3::new(0.5, 1.5, 0.0),
/// ];
/// let faces = vec![vec![0, 1, 2, 3], vec![3, 2, 4]];
///
/// let mesh = build_from_polygons(&vertices, &faces).unwrap();
/// assert_eq!(mesh.num_faces(), 2);
/// assert_eq!(mesh.num_edges(), 6);
/// ```
pub fn build_from_polygons<F: AsRef<[usize]>>(
    vertices: &[Point3<f64>],
    faces: &[F],
) -> Result<PolyMesh> {
    if faces.is_empty() {
        return Err(MeshError::EmptyMesh);
    }

    // Validate vertex indices up front so that no partial mesh is produced
    for (fi, face) in faces.iter().enumerate() {
        for &vi in face.as_ref() {
            if vi >= vertices.len() {
                return Err(MeshError::InvalidVertexIndex { face: fi, vertex: vi });
            }
        }
    }

    let mut mesh = PolyMesh::with_capacity(vertices.len(), faces.len());
    let vertex_ids: Vec<VertexId> = vertices.iter().map(|&p| mesh.add_vertex(p)).collect();

    let mut corners = Vec::new();
    for face in faces {
        corners.clear();
        corners.extend(face.as_ref().iter().map(|&vi| vertex_ids[vi]));
        mesh.add_face(&corners)?;
    }

    Ok(mesh)
}

/// Build a polygon mesh from vertices and triangle faces.
pub fn build_from_triangles(vertices: &[Point3<f64>], faces: &[[usize; 3]]) -> Result<PolyMesh> {
    build_from_polygons(vertices, faces)
}

/// Build a polygon mesh from vertices and quad faces (counter-clockwise).
pub fn build_from_quads(vertices: &[Point3<f64>], faces: &[[usize; 4]]) -> Result<PolyMesh> {
    build_from_polygons(vertices, faces)
}

/// Build a planar grid of `cols x rows` unit quads in the XY plane.
///
/// Vertex `(i, j)` has index `j * (cols + 1) + i`; face `(i, j)` has index
/// `j * cols + i`.
pub fn quad_grid(cols: usize, rows: usize) -> Result<PolyMesh> {
    let mut vertices = Vec::with_capacity((cols + 1) * (rows + 1));
    for j in 0..=rows {
        for i in 0..=cols {
            vertices.push(Point3::new(i as f64, j as f64, 0.0));
        }
    }

    let mut faces = Vec::with_capacity(cols * rows);
    for j in 0..rows {
        for i in 0..cols {
            let v00 = j * (cols + 1) + i;
            let v10 = v00 + 1;
            let v01 = v00 + (cols + 1);
            let v11 = v01 + 1;
            faces.push([v00, v10, v11, v01]);
        }
    }

    build_from_quads(&vertices, &faces)
}

/// Convert a polygon mesh back to a face-vertex representation.
///
/// Returns (vertices, faces) tuple.
pub fn to_face_vertex(mesh: &PolyMesh) -> (Vec<Point3<f64>>, Vec<Vec<usize>>) {
    let vertices: Vec<Point3<f64>> = mesh.vertex_ids().map(|v| *mesh.position(v)).collect();

    let faces: Vec<Vec<usize>> = mesh
        .face_ids()
        .map(|f| mesh.face_vertices(f).map(|v| v.index()).collect())
        .collect();

    (vertices, faces)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_triangle() -> (Vec<Point3<f64>>, Vec<[usize; 3]>) {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 1.0, 0.0),
        ];
        let faces = vec![[0, 1, 2]];
        (vertices, faces)
    }

    #[test]
    fn test_single_triangle() {
        let (vertices, faces) = single_triangle();
        let mesh = build_from_triangles(&vertices, &faces).unwrap();

        assert_eq!(mesh.num_vertices(), 3);
        assert_eq!(mesh.num_faces(), 1);
        assert_eq!(mesh.num_edges(), 3);
        assert_eq!(mesh.num_loops(), 3);
        assert!(mesh.is_valid());
        assert!(mesh.edge_ids().all(|e| mesh.is_boundary_edge(e)));
    }

    #[test]
    fn test_quad_grid_counts() {
        let mesh = quad_grid(4, 1).unwrap();
        assert_eq!(mesh.num_vertices(), 10);
        assert_eq!(mesh.num_faces(), 4);
        // 5 rungs + 2 * 4 rails
        assert_eq!(mesh.num_edges(), 13);
        assert!(mesh.is_valid());

        let mesh = quad_grid(3, 3).unwrap();
        assert_eq!(mesh.num_faces(), 9);
        assert_eq!(mesh.num_edges(), 24);
    }

    #[test]
    fn test_roundtrip() {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.5, 1.5, 0.0),
        ];
        let faces = vec![vec![0, 1, 2, 3], vec![3, 2, 4]];
        let mesh = build_from_polygons(&vertices, &faces).unwrap();

        let (out_verts, out_faces) = to_face_vertex(&mesh);
        assert_eq!(out_verts.len(), vertices.len());
        assert_eq!(out_faces, faces);
    }

    #[test]
    fn test_invalid_vertex_index() {
        let vertices = vec![Point3::new(0.0, 0.0, 0.0)];
        let faces = vec![[0, 1, 2]];

        let result = build_from_triangles(&vertices, &faces);
        assert!(matches!(
            result,
            Err(MeshError::InvalidVertexIndex { face: 0, vertex: 1 })
        ));
    }

    #[test]
    fn test_degenerate_face() {
        let (vertices, _) = single_triangle();
        let faces = vec![[0, 0, 2]];

        let result = build_from_triangles(&vertices, &faces);
        assert!(matches!(result, Err(MeshError::DegenerateFace { .. })));
    }

    #[test]
    fn test_empty_input() {
        let faces: Vec<[usize; 3]> = Vec::new();
        assert!(matches!(
            build_from_triangles(&[], &faces),
            Err(MeshError::EmptyMesh)
        ));
    }
}
