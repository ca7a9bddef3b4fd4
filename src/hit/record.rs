use glam::{Vec2, Vec3};

/// Raw intersection event as reported by traversal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionRecord {
    pub primitive_id: u32,
    pub instance_custom_index: u32,
    pub geometry_index: u32,
    /// Weights of vertices 1 and 2; vertex 0 gets `1 - u - v`.
    pub barycentrics: Vec2,
    pub world_ray_origin: Vec3,
    pub world_ray_direction: Vec3,
    pub hit_t: f32,
}

impl IntersectionRecord {
    #[inline]
    pub fn geometry_id(&self) -> u32 {
        self.instance_custom_index + self.geometry_index
    }

    #[inline]
    pub fn barycentric_weights(&self) -> Vec3 {
        let Vec2 { x: u, y: v } = self.barycentrics;
        Vec3::new(1.0 - u - v, u, v)
    }

    /// Parametric hit point `origin + direction * t`, without any surface correction.
    #[inline]
    pub fn ray_point(&self) -> Vec3 {
        self.world_ray_origin + self.world_ray_direction * self.hit_t
    }
}
