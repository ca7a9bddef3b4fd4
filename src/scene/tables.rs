use anyhow::{anyhow, ensure, Result};

use super::{GeometryInfo, Vertex};
use crate::hit::{IntersectionRecord, PrimitiveType};

/// Largest amount by which `u`, `v` or `1 - u - v` may undershoot zero and
/// still count as inside the triangle.
pub const BARYCENTRIC_TOLERANCE: f32 = 1e-5;

/// Borrowed view of the three read-only lookup tables a resolver reads.
#[derive(Clone, Copy, Debug)]
pub struct SceneTables<'a> {
    pub geometry_infos: &'a [GeometryInfo],
    pub vertices: &'a [Vertex],
    pub indices: &'a [u32],
}

impl<'a> SceneTables<'a> {
    pub fn new(geometry_infos: &'a [GeometryInfo], vertices: &'a [Vertex], indices: &'a [u32]) -> Self {
        Self {
            geometry_infos,
            vertices,
            indices,
        }
    }

    /// Views raw buffer contents (e.g. mapped GPU storage buffers) as tables without copying.
    pub fn from_bytes(geometry_infos: &'a [u8], vertices: &'a [u8], indices: &'a [u8]) -> Result<Self> {
        let geometry_infos = bytemuck::try_cast_slice(geometry_infos)
            .map_err(|e| anyhow!("Invalid geometry info buffer: {:?}", e))?;
        let vertices = bytemuck::try_cast_slice(vertices)
            .map_err(|e| anyhow!("Invalid vertex buffer: {:?}", e))?;
        let indices = bytemuck::try_cast_slice(indices)
            .map_err(|e| anyhow!("Invalid index buffer: {:?}", e))?;
        Ok(Self::new(geometry_infos, vertices, indices))
    }

    #[inline]
    pub fn geometry(&self, geometry_id: u32) -> &'a GeometryInfo {
        &self.geometry_infos[geometry_id as usize]
    }

    /// Local vertex indices of triangle `primitive_id` of `info`.
    #[inline]
    pub fn triangle_indices(&self, info: &GeometryInfo, primitive_id: u32) -> [u32; 3] {
        let base = info.index_offset as usize + 3 * primitive_id as usize;
        [self.indices[base], self.indices[base + 1], self.indices[base + 2]]
    }

    #[inline]
    pub fn vertex(&self, info: &GeometryInfo, local_index: u32) -> &'a Vertex {
        &self.vertices[info.vertex_offset as usize + local_index as usize]
    }

    /// Checks every geometry entry against the table sizes.
    ///
    /// Meant for callers that want to validate the id space once up front;
    /// the resolvers themselves never check.
    pub fn validate(&self) -> Result<()> {
        for (id, info) in self.geometry_infos.iter().enumerate() {
            ensure!(
                info.index_offset as usize <= self.indices.len(),
                "Geometry {}: index offset {} out of bounds (count: {})",
                id,
                info.index_offset,
                self.indices.len()
            );
            ensure!(
                info.vertex_offset as usize <= self.vertices.len(),
                "Geometry {}: vertex offset {} out of bounds (count: {})",
                id,
                info.vertex_offset,
                self.vertices.len()
            );
            ensure!(
                info.odd_negative_scaling == 1.0 || info.odd_negative_scaling == -1.0,
                "Geometry {}: odd negative scaling must be 1 or -1, got {}",
                id,
                info.odd_negative_scaling
            );
            ensure!(
                info.object_to_world().is_finite() && info.object_to_world_normal().is_finite(),
                "Geometry {}: non-finite transform",
                id
            );
            if info.linear().determinant() == 0.0 {
                log::warn!("Geometry {} has a singular object-to-world transform", id);
            }
        }

        log::debug!(
            "Validated {} geometries, {} vertices, {} indices",
            self.geometry_infos.len(),
            self.vertices.len(),
            self.indices.len()
        );
        Ok(())
    }

    /// Checks that resolving `record` as `kind` stays inside the tables and
    /// that its hit data is well formed.
    pub fn check_intersection(&self, record: &IntersectionRecord, kind: PrimitiveType) -> Result<()> {
        let geometry_id = record
            .instance_custom_index
            .checked_add(record.geometry_index)
            .ok_or_else(|| anyhow!("Geometry id overflows u32"))?;
        ensure!(
            (geometry_id as usize) < self.geometry_infos.len(),
            "Geometry id {} out of bounds (count: {})",
            geometry_id,
            self.geometry_infos.len()
        );
        ensure!(
            record.world_ray_origin.is_finite() && record.world_ray_direction.is_finite(),
            "Non-finite ray"
        );
        ensure!(record.world_ray_direction.length_squared() > 0.0, "Zero-length ray direction");

        let info = self.geometry(geometry_id);
        match kind {
            PrimitiveType::Triangle => {
                let base = info.index_offset as usize + 3 * record.primitive_id as usize;
                ensure!(
                    base + 2 < self.indices.len(),
                    "Primitive {} of geometry {} out of bounds",
                    record.primitive_id,
                    geometry_id
                );
                for local in self.triangle_indices(info, record.primitive_id) {
                    ensure!(
                        (info.vertex_offset as usize + local as usize) < self.vertices.len(),
                        "Vertex {} of geometry {} out of bounds (count: {})",
                        local,
                        geometry_id,
                        self.vertices.len()
                    );
                }
                let weights = record.barycentric_weights();
                ensure!(
                    weights.is_finite() && weights.min_element() >= -BARYCENTRIC_TOLERANCE,
                    "Barycentrics {:?} outside the triangle",
                    record.barycentrics
                );
            }
            PrimitiveType::Sphere => {
                ensure!(
                    record.hit_t.is_finite() && record.hit_t >= 0.0,
                    "Invalid hit distance {}",
                    record.hit_t
                );
            }
        }
        Ok(())
    }
}
