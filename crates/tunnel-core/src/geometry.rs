//! Tube mesh swept along the tunnel path.

use crate::constants::{RADIAL_SEGMENTS, TUBE_RADIUS, TUBULAR_SEGMENTS};
use crate::path::TunnelPath;
use glam::{Quat, Vec3};
use std::f32::consts::TAU;

/// Vertex layout consumed by `shaders/tunnel.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TubeVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

impl TubeVertex {
    pub fn buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<TubeVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0, // position
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 12,
                    shader_location: 1, // uv
                },
            ],
        }
    }
}

/// Tangent/normal/binormal triples sampled along the path.
#[derive(Clone, Debug)]
pub struct Frames {
    pub tangents: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub binormals: Vec<Vec3>,
}

impl Frames {
    /// `segments + 1` frames at evenly spaced arc-length fractions. The first
    /// normal is picked perpendicular to the smallest tangent axis and later
    /// ones follow by parallel transport.
    pub fn compute(path: &TunnelPath, segments: usize) -> Self {
        let tangents: Vec<Vec3> = (0..=segments)
            .map(|i| path.tangent_at(i as f32 / segments as f32))
            .collect();

        let t0 = tangents[0];
        let (tx, ty, tz) = (t0.x.abs(), t0.y.abs(), t0.z.abs());
        let mut min = f32::MAX;
        let mut seed = Vec3::X;
        if tx <= min {
            min = tx;
            seed = Vec3::X;
        }
        if ty <= min {
            min = ty;
            seed = Vec3::Y;
        }
        if tz <= min {
            seed = Vec3::Z;
        }
        let side = t0.cross(seed).normalize_or_zero();

        let mut normals = Vec::with_capacity(segments + 1);
        let mut binormals = Vec::with_capacity(segments + 1);
        normals.push(t0.cross(side));
        binormals.push(t0.cross(normals[0]));

        for i in 1..=segments {
            let mut n = normals[i - 1];
            let axis = tangents[i - 1].cross(tangents[i]);
            if axis.length() > f32::EPSILON {
                let theta = tangents[i - 1].dot(tangents[i]).clamp(-1.0, 1.0).acos();
                n = Quat::from_axis_angle(axis.normalize(), theta) * n;
            }
            normals.push(n);
            binormals.push(tangents[i].cross(n));
        }

        Self {
            tangents,
            normals,
            binormals,
        }
    }
}

/// Open-ended tube: `(tubular + 1) * (radial + 1)` vertices, two triangles
/// per quad. The seam column is duplicated so UVs run cleanly to 1.
#[derive(Clone, Debug)]
pub struct TubeMesh {
    pub vertices: Vec<TubeVertex>,
    pub indices: Vec<u32>,
    pub tubular_segments: usize,
    pub radial_segments: usize,
}

impl TubeMesh {
    pub fn tunnel(path: &TunnelPath) -> Self {
        Self::build(path, TUBULAR_SEGMENTS, TUBE_RADIUS, RADIAL_SEGMENTS)
    }

    pub fn build(path: &TunnelPath, tubular: usize, radius: f32, radial: usize) -> Self {
        let tubular = tubular.max(1);
        let radial = radial.max(3);
        let frames = Frames::compute(path, tubular);

        let mut vertices = Vec::with_capacity((tubular + 1) * (radial + 1));
        for i in 0..=tubular {
            let u = i as f32 / tubular as f32;
            let center = path.point_at(u);
            let n = frames.normals[i];
            let b = frames.binormals[i];
            for j in 0..=radial {
                let v = j as f32 / radial as f32 * TAU;
                let dir = (n * -v.cos() + b * v.sin()).normalize_or_zero();
                let p = center + dir * radius;
                vertices.push(TubeVertex {
                    position: p.to_array(),
                    uv: [u, j as f32 / radial as f32],
                });
            }
        }

        let ring = radial + 1;
        let mut indices = Vec::with_capacity(tubular * radial * 6);
        for j in 1..=tubular {
            for i in 1..=radial {
                let a = (ring * (j - 1) + (i - 1)) as u32;
                let b = (ring * j + (i - 1)) as u32;
                let c = (ring * j + i) as u32;
                let d = (ring * (j - 1) + i) as u32;
                indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }

        log::info!(
            "[tube] vertices={} triangles={}",
            vertices.len(),
            indices.len() / 3
        );

        Self {
            vertices,
            indices,
            tubular_segments: tubular,
            radial_segments: radial,
        }
    }

    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}
