use glam::{Vec2, Vec3};
use tunnel_core::constants::{RADIAL_SEGMENTS, TUBE_RADIUS, TUBULAR_SEGMENTS};
use tunnel_core::geometry::Frames;
use tunnel_core::{TubeMesh, TunnelPath};

#[test]
fn tunnel_mesh_has_expected_counts() {
    let path = TunnelPath::tunnel();
    let mesh = TubeMesh::tunnel(&path);
    assert_eq!(
        mesh.vertices.len(),
        (TUBULAR_SEGMENTS + 1) * (RADIAL_SEGMENTS + 1)
    );
    assert_eq!(mesh.indices.len(), TUBULAR_SEGMENTS * RADIAL_SEGMENTS * 6);
    assert_eq!(mesh.index_count() as usize, mesh.indices.len());
}

#[test]
fn indices_stay_in_bounds() {
    let path = TunnelPath::tunnel();
    let mesh = TubeMesh::build(&path, 20, 1.0, 8);
    let n = mesh.vertices.len() as u32;
    assert!(mesh.indices.iter().all(|&i| i < n));
}

#[test]
fn every_ring_sits_at_the_tube_radius() {
    let path = TunnelPath::tunnel();
    let tubular = 40;
    let radial = 12;
    let mesh = TubeMesh::build(&path, tubular, TUBE_RADIUS, radial);
    for i in 0..=tubular {
        let center = path.point_at(i as f32 / tubular as f32);
        for j in 0..=radial {
            let v = mesh.vertices[i * (radial + 1) + j];
            let r = Vec3::from(v.position).distance(center);
            assert!((r - TUBE_RADIUS).abs() < 1e-3, "ring {i} vertex {j}: r={r}");
        }
    }
}

#[test]
fn uvs_cover_the_unit_square() {
    let path = TunnelPath::tunnel();
    let mesh = TubeMesh::build(&path, 10, 2.0, 6);
    let first = Vec2::from(mesh.vertices[0].uv);
    let last = Vec2::from(mesh.vertices[mesh.vertices.len() - 1].uv);
    assert_eq!(first, Vec2::ZERO);
    assert_eq!(last, Vec2::ONE);
    for v in &mesh.vertices {
        assert!((0.0..=1.0).contains(&v.uv[0]));
        assert!((0.0..=1.0).contains(&v.uv[1]));
    }
}

#[test]
fn seam_column_duplicates_the_first() {
    let path = TunnelPath::tunnel();
    let radial = 16;
    let mesh = TubeMesh::build(&path, 8, 2.0, radial);
    for ring in mesh.vertices.chunks(radial + 1) {
        let a = Vec3::from(ring[0].position);
        let b = Vec3::from(ring[radial].position);
        assert!(a.distance(b) < 1e-4);
    }
}

#[test]
fn frames_are_orthonormal() {
    let path = TunnelPath::tunnel();
    let frames = Frames::compute(&path, 60);
    assert_eq!(frames.normals.len(), 61);
    for i in 0..=60 {
        let t = frames.tangents[i];
        let n = frames.normals[i];
        let b = frames.binormals[i];
        assert!((n.length() - 1.0).abs() < 1e-3, "normal {i} not unit");
        assert!(t.dot(n).abs() < 1e-2, "frame {i}: t·n={}", t.dot(n));
        assert!(t.dot(b).abs() < 1e-2, "frame {i}: t·b={}", t.dot(b));
    }
}
