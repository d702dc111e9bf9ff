//! PLY (Stanford polygon) format support.
//!
//! Faces are read and written as polygons of any rank. Only vertex positions
//! and face vertex lists are kept.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use nalgebra::Point3;
use ply_rs::parser::Parser;
use ply_rs::ply::{DefaultElement, Property};

use crate::error::{MeshError, Result};
use crate::mesh::{build_from_polygons, to_face_vertex, PolyMesh};

/// Load a mesh from a PLY file.
///
/// # Example
///
/// ```no_run
/// use ringcut::io::ply;
///
/// let mesh = ply::load("model.ply").unwrap();
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<PolyMesh> {
    let path = path.as_ref();
    let mut reader = BufReader::new(File::open(path)?);
    read(&mut reader).map_err(|e| super::with_path(path, e))
}

/// Read a PLY mesh from any reader.
///
/// Format problems are reported as [`MeshError::InvalidState`]; [`load`]
/// reports them, and mesh building errors, as [`MeshError::LoadError`].
pub fn read<R: Read>(reader: &mut R) -> Result<PolyMesh> {
    let parser = Parser::<DefaultElement>::new();
    let ply = parser
        .read_ply(reader)
        .map_err(|e| MeshError::InvalidState(e.to_string()))?;
    let malformed = |message: &str| MeshError::InvalidState(message.to_string());

    let vertex_element = ply
        .payload
        .get("vertex")
        .ok_or_else(|| malformed("PLY file has no vertex element"))?;

    let mut vertices: Vec<Point3<f64>> = Vec::with_capacity(vertex_element.len());
    for vertex in vertex_element {
        let coord = |name: &str| {
            get_float_property(vertex, name)
                .ok_or_else(|| malformed(&format!("vertex missing {} coordinate", name)))
        };
        vertices.push(Point3::new(coord("x")?, coord("y")?, coord("z")?));
    }

    let face_element = ply
        .payload
        .get("face")
        .ok_or_else(|| malformed("PLY file has no face element"))?;

    let mut faces: Vec<Vec<usize>> = Vec::with_capacity(face_element.len());
    for face in face_element {
        let indices = get_list_property(face, "vertex_indices")
            .or_else(|| get_list_property(face, "vertex_index"))
            .ok_or_else(|| malformed("face missing vertex_indices property"))?;
        faces.push(indices);
    }

    if faces.is_empty() {
        return Err(malformed("PLY file contains no faces"));
    }

    build_from_polygons(&vertices, &faces)
}

fn get_float_property(element: &DefaultElement, name: &str) -> Option<f64> {
    match element.get(name)? {
        Property::Float(v) => Some(*v as f64),
        Property::Double(v) => Some(*v),
        Property::Int(v) => Some(*v as f64),
        Property::UInt(v) => Some(*v as f64),
        Property::Short(v) => Some(*v as f64),
        Property::UShort(v) => Some(*v as f64),
        Property::Char(v) => Some(*v as f64),
        Property::UChar(v) => Some(*v as f64),
        _ => None,
    }
}

fn get_list_property(element: &DefaultElement, name: &str) -> Option<Vec<usize>> {
    match element.get(name)? {
        Property::ListInt(v) => Some(v.iter().map(|&x| x as usize).collect()),
        Property::ListUInt(v) => Some(v.iter().map(|&x| x as usize).collect()),
        Property::ListShort(v) => Some(v.iter().map(|&x| x as usize).collect()),
        Property::ListUShort(v) => Some(v.iter().map(|&x| x as usize).collect()),
        Property::ListChar(v) => Some(v.iter().map(|&x| x as usize).collect()),
        Property::ListUChar(v) => Some(v.iter().map(|&x| x as usize).collect()),
        _ => None,
    }
}

/// Save a mesh to a PLY file (ASCII format).
pub fn save<P: AsRef<Path>>(mesh: &PolyMesh, path: P) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    write(mesh, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a mesh as ASCII PLY.
pub fn write<W: Write>(mesh: &PolyMesh, writer: &mut W) -> Result<()> {
    let (vertices, faces) = to_face_vertex(mesh);
    let max_rank = faces.iter().map(Vec::len).max().unwrap_or(0);
    let count_type = if max_rank <= u8::MAX as usize {
        "uchar"
    } else {
        "uint"
    };

    writeln!(writer, "ply")?;
    writeln!(writer, "format ascii 1.0")?;
    writeln!(writer, "comment Generated by ringcut")?;
    writeln!(writer, "element vertex {}", vertices.len())?;
    writeln!(writer, "property double x")?;
    writeln!(writer, "property double y")?;
    writeln!(writer, "property double z")?;
    writeln!(writer, "element face {}", faces.len())?;
    writeln!(writer, "property list {} int vertex_indices", count_type)?;
    writeln!(writer, "end_header")?;

    for v in &vertices {
        writeln!(writer, "{} {} {}", v.x, v.y, v.z)?;
    }

    for f in &faces {
        write!(writer, "{}", f.len())?;
        for i in f {
            write!(writer, " {}", i)?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{quad_grid, FaceId};

    #[test]
    fn test_polygons_survive() {
        let mesh = quad_grid(3, 2).unwrap();
        let mut bytes = Vec::new();
        write(&mesh, &mut bytes).unwrap();

        let loaded = read(&mut bytes.as_slice()).unwrap();
        assert_eq!(loaded.num_vertices(), 12);
        assert_eq!(loaded.num_faces(), 6);
        assert_eq!(loaded.face_rank(FaceId::new(0)), 4);
        assert_eq!(loaded.num_edges(), mesh.num_edges());
    }

    #[test]
    fn test_header_declares_polygon_list() {
        let mesh = quad_grid(1, 1).unwrap();
        let mut bytes = Vec::new();
        write(&mesh, &mut bytes).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.contains("element face 1"));
        assert!(text.contains("property list uchar int vertex_indices"));
        assert!(text.trim_end().ends_with("4 0 1 3 2"));
    }

    #[test]
    fn test_missing_faces() {
        let text = "ply\nformat ascii 1.0\nelement vertex 1\nproperty float x\n\
                    property float y\nproperty float z\nend_header\n0 0 0\n";
        assert!(matches!(
            read(&mut text.as_bytes()),
            Err(MeshError::InvalidState(_))
        ));
    }
}
