//! Wavefront OBJ format support.
//!
//! Only `v` and `f` records are interpreted. Face corners may carry texture
//! and normal references (`f 1/2/3 ...`), which are ignored, and negative
//! indices count back from the last vertex read. Faces keep their rank.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use nalgebra::Point3;

use crate::error::{MeshError, Result};
use crate::mesh::{build_from_polygons, to_face_vertex, PolyMesh};

/// Load a mesh from an OBJ file.
///
/// # Example
///
/// ```no_run
/// use ringcut::io::obj;
///
/// let mesh = obj::load("model.obj").unwrap();
/// obj::save(&mesh, "copy.obj").unwrap();
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<PolyMesh> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    read(reader).map_err(|e| super::with_path(path, e))
}

/// Read an OBJ mesh from any buffered reader.
pub fn read<R: BufRead>(reader: R) -> Result<PolyMesh> {
    let mut vertices: Vec<Point3<f64>> = Vec::new();
    let mut faces: Vec<Vec<usize>> = Vec::new();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let mut fields = line.split_whitespace();
        let at = |message: String| {
            MeshError::InvalidState(format!("line {}: {}", number + 1, message))
        };

        match fields.next() {
            Some("v") => {
                let mut coords = [0.0; 3];
                for c in coords.iter_mut() {
                    let field = fields
                        .next()
                        .ok_or_else(|| at("vertex has fewer than 3 coordinates".to_string()))?;
                    *c = field
                        .parse()
                        .map_err(|_| at(format!("bad coordinate '{}'", field)))?;
                }
                vertices.push(Point3::new(coords[0], coords[1], coords[2]));
            }
            Some("f") => {
                let face = fields
                    .map(|corner| {
                        resolve_index(corner, vertices.len())
                            .ok_or_else(|| at(format!("bad face index '{}'", corner)))
                    })
                    .collect::<Result<Vec<usize>>>()?;
                faces.push(face);
            }
            _ => {}
        }
    }

    build_from_polygons(&vertices, &faces)
}

/// Resolve a face corner reference to a zero-based vertex index.
fn resolve_index(corner: &str, num_vertices: usize) -> Option<usize> {
    let index: i64 = corner.split('/').next()?.parse().ok()?;
    match index {
        i if i > 0 => Some(i as usize - 1),
        i if i < 0 => num_vertices.checked_sub(i.unsigned_abs() as usize),
        _ => None,
    }
}

/// Save a mesh to an OBJ file.
pub fn save<P: AsRef<Path>>(mesh: &PolyMesh, path: P) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    write(mesh, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a mesh as OBJ.
pub fn write<W: Write>(mesh: &PolyMesh, writer: &mut W) -> Result<()> {
    let (vertices, faces) = to_face_vertex(mesh);

    writeln!(writer, "# Generated by ringcut")?;
    writeln!(writer, "# {} vertices, {} faces", vertices.len(), faces.len())?;
    for v in &vertices {
        writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
    }
    for f in &faces {
        write!(writer, "f")?;
        for i in f {
            write!(writer, " {}", i + 1)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}
