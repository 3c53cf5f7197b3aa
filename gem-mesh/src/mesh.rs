//! Mesh builder boundary
//!
//! The generator emits vertices and triangles through the [`MeshBuilder`]
//! trait so the same pass can fill either a full-precision buffer for
//! inspection and export ([`GemMesh`]) or the packed renderer-native
//! format ([`PackedMesh`], 12 bytes per vertex).

use bytemuck::cast_slice;
use glam::Vec3;

use crate::packing::{pack_normal, pack_position};

/// Destination for generated geometry.
///
/// Implementations own their buffers; the generator only appends.
pub trait MeshBuilder: Default {
    /// Add a vertex with position and normal, returning its index.
    fn add_vertex(&mut self, position: Vec3, normal: Vec3) -> u16;

    /// Add a triangle using three vertex indices.
    fn add_triangle(&mut self, i0: u16, i1: u16, i2: u16);
}

/// Unpacked f32 mesh.
///
/// Flat-shaded and non-indexed in practice: the generator pushes three
/// fresh vertices per triangle, each carrying the face normal, and the
/// index buffer is the sequence 0, 1, 2, ...
#[derive(Clone, Debug, Default)]
pub struct GemMesh {
    /// Vertex positions as [x, y, z].
    pub positions: Vec<[f32; 3]>,
    /// Vertex normals as [x, y, z], one identical copy per triangle corner.
    pub normals: Vec<[f32; 3]>,
    /// Triangle indices.
    pub indices: Vec<u16>,
}

impl GemMesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned bounding box as (min, max), or zero for an empty mesh.
    pub fn bounds(&self) -> (Vec3, Vec3) {
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        for p in &self.positions {
            min = min.min(Vec3::from(*p));
            max = max.max(Vec3::from(*p));
        }
        if self.positions.is_empty() {
            (Vec3::ZERO, Vec3::ZERO)
        } else {
            (min, max)
        }
    }

    /// Translate the mesh so its bounding-box centre lands on the
    /// origin. Display expects this; normals are unaffected.
    pub fn center_to_origin(&mut self) {
        let (min, max) = self.bounds();
        let center = (min + max) * 0.5;
        for p in &mut self.positions {
            p[0] -= center.x;
            p[1] -= center.y;
            p[2] -= center.z;
        }
    }

    /// Position buffer as raw bytes for upload.
    pub fn position_bytes(&self) -> &[u8] {
        cast_slice(&self.positions)
    }

    /// Normal buffer as raw bytes for upload.
    pub fn normal_bytes(&self) -> &[u8] {
        cast_slice(&self.normals)
    }
}

impl MeshBuilder for GemMesh {
    fn add_vertex(&mut self, position: Vec3, normal: Vec3) -> u16 {
        let index = self.positions.len() as u16;
        self.positions.push([position.x, position.y, position.z]);
        self.normals.push([normal.x, normal.y, normal.z]);
        index
    }

    fn add_triangle(&mut self, i0: u16, i1: u16, i2: u16) {
        self.indices.push(i0);
        self.indices.push(i1);
        self.indices.push(i2);
    }
}

/// Bytes per packed vertex: f16x4 position + octahedral u32 normal.
pub const PACKED_VERTEX_STRIDE: usize = 12;

/// Packed mesh in the renderer-native POS_NORMAL vertex layout.
#[derive(Clone, Debug, Default)]
pub struct PackedMesh {
    /// Packed vertex data, [`PACKED_VERTEX_STRIDE`] bytes per vertex.
    pub vertices: Vec<u8>,
    /// Triangle indices.
    pub indices: Vec<u16>,
}

impl PackedMesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / PACKED_VERTEX_STRIDE
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

impl MeshBuilder for PackedMesh {
    fn add_vertex(&mut self, position: Vec3, normal: Vec3) -> u16 {
        let index = (self.vertices.len() / PACKED_VERTEX_STRIDE) as u16;
        let pos = pack_position(position);
        self.vertices.extend_from_slice(cast_slice(&pos));
        self.vertices
            .extend_from_slice(&pack_normal(normal).to_le_bytes());
        index
    }

    fn add_triangle(&mut self, i0: u16, i1: u16, i2: u16) {
        self.indices.push(i0);
        self.indices.push(i1);
        self.indices.push(i2);
    }
}
