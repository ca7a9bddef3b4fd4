use glam::{Mat3, Vec2, Vec3};

pub const INV_PI: f32 = std::f32::consts::FRAC_1_PI;
pub const INV_2_PI: f32 = 0.5 * std::f32::consts::FRAC_1_PI;

/// Squared sine of the smallest tangent/normal angle Gram-Schmidt still trusts.
const TANGENT_RESIDUAL_EPSILON: f32 = 1e-6;

/// Returns `n` when `n_ref` faces against the incident direction `i`, `-n` otherwise.
///
/// A grazing `i` (perpendicular to `n_ref`) also flips, which keeps
/// `dot(result, i) <= 0` whenever `n == n_ref`.
#[inline]
pub fn face_forward(n: Vec3, i: Vec3, n_ref: Vec3) -> Vec3 {
    if n_ref.dot(i) < 0.0 {
        n
    } else {
        -n
    }
}

/// Builds an arbitrary right-handed (tangent, bitangent, normal) frame around a unit normal.
#[inline]
pub fn create_frame(n: Vec3) -> Mat3 {
    let (tangent, bitangent) = n.any_orthonormal_pair();
    Mat3::from_cols(tangent, bitangent, n)
}

/// Builds a tangent-to-world frame from an interpolated tangent and normal.
///
/// The tangent is Gram-Schmidt projected onto the plane of the normal, and the
/// bitangent is `cross(normal, tangent) * sign`. Meshes without usable tangent
/// data (zero, or parallel to the normal) get an arbitrary tangent instead.
pub fn build_tangent_to_world(tangent: Vec3, sign: f32, normal: Vec3) -> Mat3 {
    let n = normal.normalize();
    let min_residual = TANGENT_RESIDUAL_EPSILON * tangent.length_squared();
    // A residual this small relative to the tangent is rounding noise, not a direction
    let t = Some(tangent - n * tangent.dot(n))
        .filter(|projected| projected.length_squared() > min_residual)
        .and_then(Vec3::try_normalize)
        .unwrap_or_else(|| n.any_orthonormal_vector());
    let b = n.cross(t) * sign;
    Mat3::from_cols(t, b, n)
}

/// Equirectangular mapping of a unit direction with y as the up axis.
///
/// `u` is the negated azimuth over 2pi and lies in [-0.5, 0.5]; the seam sits
/// on the -x half of the xz plane. `v` is elevation over pi, 0 at +y.
#[inline]
pub fn sphere_uv(direction: Vec3) -> Vec2 {
    let elevation = direction.y.clamp(-1.0, 1.0).acos();
    let azimuth = direction.z.atan2(direction.x);
    Vec2::new(-azimuth * INV_2_PI, elevation * INV_PI)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_directions() -> Vec<Vec3> {
        let mut dirs = vec![Vec3::X, Vec3::Y, Vec3::Z, -Vec3::X, -Vec3::Y, -Vec3::Z];
        for i in 0..12 {
            for j in 1..8 {
                let phi = i as f32 / 12.0 * std::f32::consts::TAU;
                let theta = j as f32 / 8.0 * std::f32::consts::PI;
                dirs.push(Vec3::new(
                    theta.sin() * phi.cos(),
                    theta.cos(),
                    theta.sin() * phi.sin(),
                ));
            }
        }
        dirs
    }

    fn assert_orthonormal(frame: Mat3) {
        assert_relative_eq!(frame.x_axis.length(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(frame.y_axis.length(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(frame.z_axis.length(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(frame.x_axis.dot(frame.y_axis), 0.0, epsilon = 1e-5);
        assert_relative_eq!(frame.y_axis.dot(frame.z_axis), 0.0, epsilon = 1e-5);
        assert_relative_eq!(frame.z_axis.dot(frame.x_axis), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_face_forward() {
        let n = Vec3::Z;
        assert_eq!(face_forward(n, -Vec3::Z, n), n);
        assert_eq!(face_forward(n, Vec3::Z, n), -n);
        // Grazing incidence flips
        assert_eq!(face_forward(n, Vec3::X, n), -n);

        // Orientation follows the reference, not the vector being flipped
        let shading = Vec3::new(0.1, 0.0, 1.0).normalize();
        assert_eq!(face_forward(shading, Vec3::Z, -Vec3::Z), shading);
    }

    #[test]
    fn test_create_frame_is_orthonormal() {
        for n in sample_directions() {
            let frame = create_frame(n);
            assert_orthonormal(frame);
            assert_eq!(frame.z_axis, n);
            // Right-handed
            assert_relative_eq!(frame.x_axis.cross(frame.y_axis).dot(n), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_tangent_to_world_gram_schmidt() {
        let normal = Vec3::new(0.0, 0.0, 2.0);
        let tangent = Vec3::new(1.0, 0.0, 0.5);
        let frame = build_tangent_to_world(tangent, 1.0, normal);

        assert_orthonormal(frame);
        assert_relative_eq!(frame.x_axis.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(frame.y_axis.y, 1.0, epsilon = 1e-6);
        assert_relative_eq!(frame.z_axis.z, 1.0, epsilon = 1e-6);

        let mirrored = build_tangent_to_world(tangent, -1.0, normal);
        assert_eq!(mirrored.x_axis, frame.x_axis);
        assert_eq!(mirrored.y_axis, -frame.y_axis);
        assert_eq!(mirrored.z_axis, frame.z_axis);
    }

    #[test]
    fn test_tangent_to_world_without_tangent_data() {
        let normal = Vec3::new(0.3, -0.4, 0.8);
        for tangent in [Vec3::ZERO, normal * 3.0, -normal * 0.01] {
            let frame = build_tangent_to_world(tangent, 1.0, normal);
            assert_orthonormal(frame);
            assert!(frame.x_axis.is_finite());
        }
    }

    #[test]
    fn test_tangent_to_world_nearly_parallel_tangent() {
        for n in sample_directions() {
            // Off the normal by far less than the rounding of the projection
            let tangent = (n + n.any_orthonormal_vector() * 1e-5) * 7.0;
            let frame = build_tangent_to_world(tangent, -1.0, n);
            assert_orthonormal(frame);
            assert_relative_eq!(frame.z_axis.dot(n), 1.0, epsilon = 1e-5);
        }

        // Slightly tilted tangents are still honored
        let frame = build_tangent_to_world(Vec3::new(1.0, 0.0, 0.1), 1.0, Vec3::Z);
        assert_relative_eq!(frame.x_axis.x, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_sphere_uv_poles_and_equator() {
        let north = sphere_uv(Vec3::Y);
        assert_relative_eq!(north.y, 0.0, epsilon = 1e-6);

        let south = sphere_uv(-Vec3::Y);
        assert_relative_eq!(south.y, 1.0, epsilon = 1e-6);

        let front = sphere_uv(Vec3::Z);
        assert_relative_eq!(front.x, -0.25, epsilon = 1e-6);
        assert_relative_eq!(front.y, 0.5, epsilon = 1e-6);

        let right = sphere_uv(Vec3::X);
        assert_relative_eq!(right.x, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_sphere_uv_tolerates_overshoot() {
        // Directions that drift slightly past unit length must not produce NaN
        let uv = sphere_uv(Vec3::new(0.0, 1.000_001, 0.0));
        assert!(uv.is_finite());
        assert_relative_eq!(uv.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_sphere_uv_seam() {
        let eps = 1e-3;
        let above = sphere_uv(Vec3::new(-1.0, 0.0, eps).normalize());
        let below = sphere_uv(Vec3::new(-1.0, 0.0, -eps).normalize());
        assert_relative_eq!((above.x - below.x).abs(), 1.0, epsilon = 1e-3);

        // Away from the seam the mapping is continuous
        let a = sphere_uv(Vec3::new(1.0, 0.0, eps).normalize());
        let b = sphere_uv(Vec3::new(1.0, 0.0, -eps).normalize());
        assert!((a.x - b.x).abs() < 1e-3);
    }
}
