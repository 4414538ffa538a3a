//! Minimal Wavefront OBJ reader for world geometry.
//!
//! Only vertex positions (`v`) and faces (`f`) are read. Faces with more than
//! three corners are split into a triangle fan around their first corner.
use std::fs;
use std::path::Path;

use log::{debug, trace, warn};

use crate::models::{StaticMesh, Vector3};
use crate::utils::PhysicsError;

/// Parses OBJ text into a mesh.
///
/// Face corners may be written as `i`, `i/t`, `i//n` or `i/t/n`; only the
/// 1-based vertex index is used. Any other statement is ignored.
///
/// # Errors
/// * `PhysicsError::ParseError` for unparsable numbers, vertices with fewer
///   than three coordinates, faces with fewer than three corners and zero or
///   negative indices.
/// * `PhysicsError::InvalidParameter` for indices past the last vertex.
///
/// # Example
/// ```
/// use rs_ballpit::io::parse_obj;
/// use rs_ballpit::models::MeshQuery;
///
/// let quad = "v 0 0 0\nv 1 0 0\nv 1 0 1\nv 0 0 1\nf 1/1/1 2/2/1 3/3/1 4/4/1\n";
/// let mesh = parse_obj(quad).unwrap();
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.triangle_count(), 2);
/// ```
pub fn parse_obj(text: &str) -> Result<StaticMesh, PhysicsError> {
    let mut vertices = Vec::new();
    let mut triangles = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("v") => vertices.push(parse_vertex(tokens, line_number)?),
            Some("f") => {
                let corners = tokens
                    .map(|token| parse_corner(token, line_number))
                    .collect::<Result<Vec<usize>, PhysicsError>>()?;
                if corners.len() < 3 {
                    return Err(PhysicsError::ParseError {
                        line: line_number,
                        message: format!("face has {} corners, at least 3 are needed", corners.len()),
                    });
                }
                for pair in corners[1..].windows(2) {
                    triangles.push([corners[0], pair[0], pair[1]]);
                }
            }
            Some(tag) => trace!("Ignoring OBJ statement '{}' on line {}", tag, line_number),
            None => {}
        }
    }

    let degenerate = triangles
        .iter()
        .filter(|[a, b, c]| a == b || b == c || c == a)
        .count();
    if degenerate > 0 {
        warn!("OBJ mesh has {} triangles with repeated corners, their faces are skipped by collision", degenerate);
    }
    debug!("Parsed OBJ mesh: {} vertices, {} triangles", vertices.len(), triangles.len());
    StaticMesh::new(vertices, triangles)
}

fn parse_vertex<'a>(
    tokens: impl Iterator<Item = &'a str>,
    line_number: usize,
) -> Result<Vector3, PhysicsError> {
    let coords = tokens
        .take(3)
        .map(|token| {
            token.parse::<f64>().map_err(|e| PhysicsError::ParseError {
                line: line_number,
                message: format!("'{}' is not a number: {}", token, e),
            })
        })
        .collect::<Result<Vec<f64>, PhysicsError>>()?;
    match coords[..] {
        [x, y, z] if x.is_finite() && y.is_finite() && z.is_finite() => Ok(Vector3::from((x, y, z))),
        [_, _, _] => Err(PhysicsError::ParseError {
            line: line_number,
            message: "vertex coordinates must be finite".to_string(),
        }),
        _ => Err(PhysicsError::ParseError {
            line: line_number,
            message: format!("vertex has {} coordinates, expected 3", coords.len()),
        }),
    }
}

/// Zero-based vertex index of a face corner token.
fn parse_corner(token: &str, line_number: usize) -> Result<usize, PhysicsError> {
    let index_str = token.split('/').next().unwrap_or(token);
    match index_str.parse::<usize>() {
        Ok(0) | Err(_) => Err(PhysicsError::ParseError {
            line: line_number,
            message: format!("'{}' is not a valid vertex index", token),
        }),
        Ok(index) => Ok(index - 1),
    }
}

/// Reads and parses an OBJ file.
pub fn load_obj(path: impl AsRef<Path>) -> Result<StaticMesh, PhysicsError> {
    let path = path.as_ref();
    let mesh = parse_obj(&fs::read_to_string(path)?)?;
    debug!("Loaded world mesh from {}", path.display());
    Ok(mesh)
}
