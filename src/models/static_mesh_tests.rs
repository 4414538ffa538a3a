use crate::assert_float_eq;
use crate::models::{Matrix4, MeshQuery, StaticMesh, Vector3};
use crate::utils::PhysicsError;

#[test]
fn test_mesh_queries() {
    let mesh = StaticMesh::octahedron();
    assert_eq!(mesh.vertex_count(), 6);
    assert_eq!(mesh.triangle_count(), 8);
    assert_eq!(mesh.vertex(0), Vector3::new(0.0, 1.0, 0.0));

    let (a, b, c) = mesh.triangle(0);
    assert_eq!(a, Vector3::new(1.0, 0.0, 1.0));
    assert_eq!(b, Vector3::new(0.0, 1.0, 0.0));
    assert_eq!(c, Vector3::new(1.0, 0.0, -1.0));
}

#[test]
fn test_out_of_range_index_rejected() {
    let result = StaticMesh::new(vec![Vector3::ZERO, Vector3::UP], vec![[0, 1, 2]]);
    assert!(matches!(result, Err(PhysicsError::InvalidParameter(_))));
}

#[test]
fn test_non_finite_vertex_rejected() {
    let result = StaticMesh::new(vec![Vector3::ZERO, Vector3::new(f64::NAN, 0.0, 0.0)], Vec::new());
    assert!(matches!(result, Err(PhysicsError::InvalidParameter(_))));
    let result = StaticMesh::from_flat(&[0.0, 0.0, 0.0, 1.0, f64::NEG_INFINITY, 0.0, 0.0, 1.0, 0.0], &[0, 1, 2]);
    assert!(matches!(result, Err(PhysicsError::InvalidParameter(_))));
}

#[test]
fn test_degenerate_triangles_accepted() {
    // Repeated indices and duplicate triangles are legal input
    let mesh = StaticMesh::new(vec![Vector3::ZERO, Vector3::UP], vec![[0, 0, 1], [0, 0, 1]]).unwrap();
    assert_eq!(mesh.triangle_count(), 2);
}

#[test]
fn test_from_flat_buffers() {
    let mesh = StaticMesh::from_flat(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0], &[0, 1, 2]).unwrap();
    assert_eq!(mesh.vertex(1), Vector3::new(1.0, 0.0, 0.0));
    assert_eq!(mesh.triangles(), &[[0, 1, 2]]);

    assert!(StaticMesh::from_flat(&[0.0, 1.0], &[]).is_err());
    assert!(StaticMesh::from_flat(&[0.0, 0.0, 0.0], &[0, 0]).is_err());
}

#[test]
fn test_uv_sphere_counts_and_radius() {
    let sphere = StaticMesh::uv_sphere(8, 2.5).unwrap();
    assert_eq!(sphere.vertex_count(), 6 * 8 + 2);
    assert_eq!(sphere.triangle_count(), 2 * 8 * 6);
    for v in sphere.vertices() {
        assert_float_eq(v.length(), 2.5, 1e-9, Some("sphere vertex off the surface"));
    }
    // The poles are the last two vertices
    assert_eq!(sphere.vertex(sphere.vertex_count() - 2), Vector3::new(0.0, 2.5, 0.0));
    assert_eq!(sphere.vertex(sphere.vertex_count() - 1), Vector3::new(0.0, -2.5, 0.0));
}

#[test]
fn test_uv_sphere_odd_resolution_rounds_down() {
    let odd = StaticMesh::uv_sphere(9, 1.0).unwrap();
    let even = StaticMesh::uv_sphere(8, 1.0).unwrap();
    assert_eq!(odd, even);
}

#[test]
fn test_uv_sphere_rejects_bad_input() {
    assert!(matches!(StaticMesh::uv_sphere(3, 1.0), Err(PhysicsError::InvalidParameter(_))));
    assert_eq!(StaticMesh::uv_sphere(6, 0.0), Err(PhysicsError::InvalidRadius));
}

#[test]
fn test_uv_sphere_rings_are_symmetric() {
    let sphere = StaticMesh::uv_sphere(6, 1.0).unwrap();
    // 4 rings: the first and the last sit at mirrored heights
    let first_ring_y = sphere.vertex(0).y;
    let last_ring_y = sphere.vertex(3 * 6).y;
    assert_float_eq(first_ring_y, -last_ring_y, 1e-12, None);
}

#[test]
fn test_transformed_mesh() {
    let mesh = StaticMesh::octahedron().transformed(&Matrix4::translation(0.0, -5.0, 0.0));
    assert_eq!(mesh.vertex(0), Vector3::new(0.0, -4.0, 0.0));
    assert_eq!(mesh.triangles(), StaticMesh::octahedron().triangles());
}

#[test]
fn test_render_buffers() {
    let mesh = StaticMesh::octahedron();
    assert_eq!(mesh.to_vertex_buffer().len(), 18);
    assert_eq!(mesh.to_index_buffer()[..3], [4, 0, 1]);
}
