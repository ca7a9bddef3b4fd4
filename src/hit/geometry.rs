use glam::{Mat3, Vec2, Vec3};

/// World-space shading geometry at one intersection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitGeometry {
    pub world_position: Vec3,
    pub material_id: u32,
    /// Flat geometric normal, oriented against the incoming ray.
    pub geometry_normal: Vec3,
    pub light_id: u32,
    pub uv: Vec2,
    pub geometry_id: u32,
    /// Columns are tangent, bitangent and shading normal.
    pub tangent_frame: Mat3,
    /// Flat geometric normal as the surface defines it, before orientation.
    pub geometry_normal_unflipped: Vec3,
}

impl HitGeometry {
    #[inline]
    pub fn tangent(&self) -> Vec3 {
        self.tangent_frame.x_axis
    }

    #[inline]
    pub fn bitangent(&self) -> Vec3 {
        self.tangent_frame.y_axis
    }

    #[inline]
    pub fn shading_normal(&self) -> Vec3 {
        self.tangent_frame.z_axis
    }

    /// True when the ray arrived from the side the surface normal points away from.
    #[inline]
    pub fn is_back_face(&self) -> bool {
        self.geometry_normal != self.geometry_normal_unflipped
    }

    /// Maps a tangent-space vector into world space.
    #[inline]
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        self.tangent_frame * local
    }

    /// Maps a world-space vector into tangent space.
    #[inline]
    pub fn to_local(&self, world: Vec3) -> Vec3 {
        self.tangent_frame.transpose() * world
    }
}

/// The subset of [`HitGeometry`] an opacity test needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitGeometryAlphaTest {
    pub uv: Vec2,
    pub material_id: u32,
}
