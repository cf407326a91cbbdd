//! CPU-side flattened mesh produced by the OBJ loader.
//!
//! Every face corner owns its own vertex, so the buffers can be drawn
//! without an index buffer.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// One fully resolved face corner. Layout matches an interleaved
/// `position | uv | normal` vertex buffer (32 bytes).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct FlattenedVertex {
    pub position: Vec3,
    pub tex_coord: Vec2,
    pub normal: Vec3,
}

impl FlattenedVertex {
    pub fn new(position: Vec3, tex_coord: Vec2, normal: Vec3) -> Self {
        Self {
            position,
            tex_coord,
            normal,
        }
    }
}

/// Parallel per-vertex attribute arrays. Element `i` of each array belongs
/// to the same vertex; lengths are always equal and a multiple of 3.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlattenedMesh {
    positions: Vec<Vec3>,
    tex_coords: Vec<Vec2>,
    normals: Vec<Vec3>,
}

impl FlattenedMesh {
    pub(crate) fn from_parts(
        positions: Vec<Vec3>,
        tex_coords: Vec<Vec2>,
        normals: Vec<Vec3>,
    ) -> Self {
        debug_assert_eq!(positions.len(), tex_coords.len());
        debug_assert_eq!(positions.len(), normals.len());
        debug_assert_eq!(positions.len() % 3, 0);
        Self {
            positions,
            tex_coords,
            normals,
        }
    }

    /// Split interleaved vertices back into parallel arrays. Returns `None`
    /// unless the count is a whole number of triangles.
    pub fn from_vertices(vertices: impl IntoIterator<Item = FlattenedVertex>) -> Option<Self> {
        let mut mesh = Self::default();
        for v in vertices {
            mesh.positions.push(v.position);
            mesh.tex_coords.push(v.tex_coord);
            mesh.normals.push(v.normal);
        }
        (mesh.positions.len() % 3 == 0).then_some(mesh)
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Texture coordinates with V already negated.
    pub fn tex_coords(&self) -> &[Vec2] {
        &self.tex_coords
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Consume the mesh, returning `(positions, tex_coords, normals)`.
    pub fn into_parts(self) -> (Vec<Vec3>, Vec<Vec2>, Vec<Vec3>) {
        (self.positions, self.tex_coords, self.normals)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.positions.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn vertex(&self, i: usize) -> Option<FlattenedVertex> {
        Some(FlattenedVertex::new(
            *self.positions.get(i)?,
            *self.tex_coords.get(i)?,
            *self.normals.get(i)?,
        ))
    }

    /// Iterate vertices in draw order (face by face, corner by corner).
    pub fn vertices(&self) -> impl Iterator<Item = FlattenedVertex> + '_ {
        self.positions
            .iter()
            .zip(&self.tex_coords)
            .zip(&self.normals)
            .map(|((&p, &uv), &n)| FlattenedVertex::new(p, uv, n))
    }

    /// Interleaved copy suitable for a single vertex buffer.
    pub fn interleaved(&self) -> Vec<FlattenedVertex> {
        self.vertices().collect()
    }

    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn tex_coord_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.tex_coords)
    }

    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Axis-aligned bounds of all positions as `(min, max)`.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.positions.first()?;
        Some(
            self.positions
                .iter()
                .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p))),
        )
    }
}
