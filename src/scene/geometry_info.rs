use glam::{Mat3, Mat4};

use super::Transform;

/// Per-geometry metadata, one entry per `instance_custom_index + geometry_index`.
///
/// Matrices are column-major. `object_to_world_normal` holds the
/// inverse-transpose of the upper 3x3 of `object_to_world` with no
/// translation part.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GeometryInfo {
    pub object_to_world: [f32; 16],
    pub object_to_world_normal: [f32; 16],
    pub material_id: u32,
    pub light_id: u32,
    pub index_offset: u32,
    pub vertex_offset: u32,
    pub odd_negative_scaling: f32, // -1.0 for mirroring transforms, 1.0 otherwise
    pub padding: [u32; 3],
}

impl GeometryInfo {
    /// Derives the normal matrix and the mirroring sign from `object_to_world`.
    pub fn from_matrix(
        object_to_world: Mat4,
        material_id: u32,
        light_id: u32,
        index_offset: u32,
        vertex_offset: u32,
    ) -> Self {
        let linear = Mat3::from_mat4(object_to_world);
        let normal_matrix = Mat4::from_mat3(linear.inverse().transpose());
        let odd_negative_scaling = if linear.determinant() < 0.0 { -1.0 } else { 1.0 };

        Self {
            object_to_world: object_to_world.to_cols_array(),
            object_to_world_normal: normal_matrix.to_cols_array(),
            material_id,
            light_id,
            index_offset,
            vertex_offset,
            odd_negative_scaling,
            padding: [0; 3],
        }
    }

    pub fn from_transform(
        transform: &Transform,
        material_id: u32,
        light_id: u32,
        index_offset: u32,
        vertex_offset: u32,
    ) -> Self {
        Self::from_matrix(transform.to_matrix(), material_id, light_id, index_offset, vertex_offset)
    }

    #[inline]
    pub fn object_to_world(&self) -> Mat4 {
        Mat4::from_cols_array(&self.object_to_world)
    }

    #[inline]
    pub fn object_to_world_normal(&self) -> Mat4 {
        Mat4::from_cols_array(&self.object_to_world_normal)
    }

    /// Upper 3x3 of `object_to_world`, used for tangents and other directions.
    #[inline]
    pub fn linear(&self) -> Mat3 {
        Mat3::from_mat4(self.object_to_world())
    }

    /// Upper 3x3 of `object_to_world_normal`.
    #[inline]
    pub fn normal_matrix(&self) -> Mat3 {
        Mat3::from_mat4(self.object_to_world_normal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::Vec3;

    #[test]
    fn test_geometry_info_size() {
        assert_eq!(std::mem::size_of::<GeometryInfo>(), 160);
        assert_eq!(std::mem::size_of::<GeometryInfo>() % 16, 0);
    }

    #[test]
    fn test_normal_matrix_is_inverse_transpose() {
        let m = Mat4::from_scale_rotation_translation(
            Vec3::new(2.0, 0.5, 1.0),
            glam::Quat::from_rotation_y(0.7),
            Vec3::new(1.0, 2.0, 3.0),
        );
        let info = GeometryInfo::from_matrix(m, 3, 4, 30, 12);

        let expected = Mat3::from_mat4(m).inverse().transpose();
        let actual = info.normal_matrix();
        for (a, e) in actual.to_cols_array().iter().zip(expected.to_cols_array().iter()) {
            assert_relative_eq!(*a, *e, epsilon = 1e-5);
        }
        // No translation leaks into the normal matrix
        assert_eq!(info.object_to_world_normal().w_axis, glam::Vec4::W);

        assert_eq!(info.object_to_world(), m);
        assert_eq!(info.material_id, 3);
        assert_eq!(info.light_id, 4);
        assert_eq!(info.index_offset, 30);
        assert_eq!(info.vertex_offset, 12);
        assert_eq!(info.odd_negative_scaling, 1.0);
    }

    #[test]
    fn test_mirroring_sign() {
        let mirrored = GeometryInfo::from_matrix(Mat4::from_scale(Vec3::new(-1.0, 1.0, 1.0)), 0, 0, 0, 0);
        assert_eq!(mirrored.odd_negative_scaling, -1.0);

        // Two mirrored axes cancel out
        let rotated = GeometryInfo::from_matrix(Mat4::from_scale(Vec3::new(-1.0, -1.0, 1.0)), 0, 0, 0, 0);
        assert_eq!(rotated.odd_negative_scaling, 1.0);
    }

    #[test]
    fn test_from_transform() {
        let mut transform = Transform::new();
        transform.position = Vec3::new(0.0, 2.0, 0.0);
        transform.scale = Vec3::splat(2.0);
        let info = GeometryInfo::from_transform(&transform, 1, 2, 0, 0);

        assert_eq!(info.object_to_world(), transform.to_matrix());
        assert_relative_eq!(info.normal_matrix().x_axis.x, 0.5, epsilon = 1e-6);
    }
}
