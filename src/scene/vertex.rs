use glam::{Vec2, Vec3};

/// Object-space mesh vertex as laid out in the shared vertex buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tangent: [f32; 3],  // zero when the mesh carries no tangents
    pub tex_coords: [f32; 2],
}

impl Vertex {
    pub fn new(position: Vec3, normal: Vec3, tangent: Vec3, tex_coords: Vec2) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            tangent: tangent.to_array(),
            tex_coords: tex_coords.to_array(),
        }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    #[inline]
    pub fn normal(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }

    #[inline]
    pub fn tangent(&self) -> Vec3 {
        Vec3::from_array(self.tangent)
    }

    #[inline]
    pub fn tex_coords(&self) -> Vec2 {
        Vec2::from_array(self.tex_coords)
    }
}
