use std::f64::consts::PI;

use log::debug;

use crate::models::{Matrix4, Vector3};
use crate::utils::PhysicsError;

/// Read-only access to triangulated world geometry.
///
/// The collision routines only ever go through this trait, in any order, and
/// assume no spatial locality or acceleration structure behind it.
pub trait MeshQuery {
    fn vertex_count(&self) -> usize;

    /// Vertex `index`. Callers stay within `0..vertex_count()`.
    fn vertex(&self, index: usize) -> Vector3;

    fn triangle_count(&self) -> usize;

    /// Corner positions of triangle `index`. Callers stay within `0..triangle_count()`.
    fn triangle(&self, index: usize) -> (Vector3, Vector3, Vector3);
}

/// An immutable indexed triangle list.
///
/// Every index is validated at construction. Degenerate and duplicate
/// triangles are accepted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StaticMesh {
    vertices: Vec<Vector3>,
    triangles: Vec<[usize; 3]>,
}

impl StaticMesh {
    /// Creates a mesh from vertex positions and index triples.
    ///
    /// # Errors
    /// Returns `PhysicsError::InvalidParameter` if any index is out of range.
    ///
    /// # Example
    /// ```
    /// use rs_ballpit::models::{MeshQuery, StaticMesh, Vector3};
    ///
    /// let mesh = StaticMesh::new(
    ///     vec![Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 1.0)],
    ///     vec![[0, 1, 2]],
    /// ).unwrap();
    /// assert_eq!(mesh.triangle_count(), 1);
    ///
    /// assert!(StaticMesh::new(vec![Vector3::ZERO], vec![[0, 0, 1]]).is_err());
    /// ```
    pub fn new(vertices: Vec<Vector3>, triangles: Vec<[usize; 3]>) -> Result<Self, PhysicsError> {
        if let Some(i) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(PhysicsError::InvalidParameter(format!("vertex {} is not finite", i)));
        }
        let vertex_count = vertices.len();
        if let Some((t, bad)) = triangles
            .iter()
            .enumerate()
            .find_map(|(t, tri)| tri.iter().find(|&&i| i >= vertex_count).map(|&i| (t, i)))
        {
            return Err(PhysicsError::InvalidParameter(format!(
                "triangle {} references vertex {} but the mesh has {} vertices",
                t, bad, vertex_count
            )));
        }
        Ok(StaticMesh { vertices, triangles })
    }

    /// Creates a mesh from flat GL-style buffers: `xyz` triples and index triples.
    pub fn from_flat(positions: &[f64], indices: &[usize]) -> Result<Self, PhysicsError> {
        if positions.len() % 3 != 0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "position buffer length {} is not a multiple of 3",
                positions.len()
            )));
        }
        if indices.len() % 3 != 0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "index buffer length {} is not a multiple of 3",
                indices.len()
            )));
        }
        let vertices = positions
            .chunks_exact(3)
            .map(|c| Vector3::new(c[0], c[1], c[2]))
            .collect();
        let triangles = indices
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();
        Self::new(vertices, triangles)
    }

    /// The default world model: a square bipyramid with its equator corners at
    /// (±1, 0, ±1) and its apexes at y = ±1.
    pub fn octahedron() -> Self {
        StaticMesh {
            vertices: vec![
                Vector3::new(0.0, 1.0, 0.0),
                Vector3::new(1.0, 0.0, -1.0),
                Vector3::new(-1.0, 0.0, -1.0),
                Vector3::new(-1.0, 0.0, 1.0),
                Vector3::new(1.0, 0.0, 1.0),
                Vector3::new(0.0, -1.0, 0.0),
            ],
            triangles: vec![
                [4, 0, 1], [1, 2, 0], [2, 3, 0], [3, 4, 0],
                [4, 1, 5], [5, 1, 2], [2, 3, 5], [3, 4, 5],
            ],
        }
    }

    /// Tessellates a sphere into latitude rings.
    ///
    /// `resolution` is rounded down to an even number and must be at least 4.
    /// The mesh has `resolution - 2` rings of `resolution` vertices each, plus
    /// the two poles, and `2 * resolution * (resolution - 2)` triangles.
    ///
    /// # Example
    /// ```
    /// use rs_ballpit::models::{MeshQuery, StaticMesh};
    ///
    /// let sphere = StaticMesh::uv_sphere(12, 1.0).unwrap();
    /// assert_eq!(sphere.vertex_count(), 10 * 12 + 2);
    /// assert_eq!(sphere.triangle_count(), 2 * 12 * 10);
    /// ```
    pub fn uv_sphere(resolution: usize, radius: f64) -> Result<Self, PhysicsError> {
        let resolution = resolution - resolution % 2;
        if resolution < 4 {
            return Err(PhysicsError::InvalidParameter(format!(
                "sphere resolution must be at least 4, got {}",
                resolution
            )));
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(PhysicsError::InvalidRadius);
        }

        let rings = resolution - 2;
        let mut vertices = Vec::with_capacity(rings * resolution + 2);
        for i in 0..rings {
            let polar = PI * (i + 1) as f64 / (resolution - 1) as f64;
            let mut ring_start = Vector3::UP;
            ring_start.rotate_z(-polar);
            ring_start *= radius;
            for j in 0..resolution {
                let mut v = ring_start;
                v.rotate_y(2.0 * PI * (j + 1) as f64 / resolution as f64);
                vertices.push(v);
            }
        }
        vertices.push(Vector3::UP * radius);
        vertices.push(-Vector3::UP * radius);

        let mut triangles = Vec::with_capacity(2 * resolution * rings);
        for i in 0..rings - 1 {
            let offset = i * resolution;
            for j in 0..resolution {
                let a = offset + j;
                let b = offset + (j + 1) % resolution;
                let c = resolution + offset + j;
                let d = resolution + offset + (j + 1) % resolution;
                triangles.push([a, c, b]);
                triangles.push([c, d, b]);
            }
        }

        let north = vertices.len() - 2;
        let south = vertices.len() - 1;
        let last_ring = (rings - 1) * resolution;
        for i in 0..resolution {
            triangles.push([i, (i + 1) % resolution, north]);
            triangles.push([last_ring + i, last_ring + (i + 1) % resolution, south]);
        }

        debug!("Tessellated sphere: {} vertices, {} triangles", vertices.len(), triangles.len());
        Ok(StaticMesh { vertices, triangles })
    }

    /// Returns a copy of the mesh with every vertex transformed by `matrix`.
    pub fn transformed(&self, matrix: &Matrix4) -> StaticMesh {
        StaticMesh {
            vertices: self.vertices.iter().map(|v| v.transform_point(matrix)).collect(),
            triangles: self.triangles.clone(),
        }
    }

    pub fn vertices(&self) -> &[Vector3] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Flat single precision `xyz` buffer for a renderer.
    pub fn to_vertex_buffer(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }

    /// Flat index buffer for a renderer.
    pub fn to_index_buffer(&self) -> Vec<u32> {
        self.triangles
            .iter()
            .flat_map(|t| t.iter().map(|&i| i as u32))
            .collect()
    }
}

impl MeshQuery for StaticMesh {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertex(&self, index: usize) -> Vector3 {
        self.vertices[index]
    }

    fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    fn triangle(&self, index: usize) -> (Vector3, Vector3, Vector3) {
        let [a, b, c] = self.triangles[index];
        (self.vertices[a], self.vertices[b], self.vertices[c])
    }
}
