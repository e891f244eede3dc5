#![warn(missing_docs)]

//! Math types for the dhkin kinematics engine.
//!
//! Thin wrappers around nalgebra providing the homogeneous 4x4 transform
//! used for joint frames, its elementary builders (axis translations and
//! axis rotations), and tolerance constants for comparing poses.

use nalgebra::{Matrix3, Matrix4, Vector4};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = nalgebra::Vector3<f64>;

/// A unit quaternion describing a 3D rotation.
pub type Quat = nalgebra::UnitQuaternion<f64>;

/// A 4x4 homogeneous transformation matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// The underlying 4x4 matrix.
    pub matrix: Matrix4<f64>,
}

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Translation by `(dx, dy, dz)`.
    pub fn translation(dx: f64, dy: f64, dz: f64) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 3)] = dx;
        m[(1, 3)] = dy;
        m[(2, 3)] = dz;
        Self { matrix: m }
    }

    /// Translation by `d` along the Z axis.
    pub fn translation_z(d: f64) -> Self {
        Self::translation(0.0, 0.0, d)
    }

    /// Translation by `a` along the X axis.
    pub fn translation_x(a: f64) -> Self {
        Self::translation(a, 0.0, 0.0)
    }

    /// Translation by a vector.
    pub fn from_translation(v: &Vec3) -> Self {
        Self::translation(v.x, v.y, v.z)
    }

    /// Rotation about the X axis by `angle` radians.
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(1, 1)] = c;
        m[(1, 2)] = -s;
        m[(2, 1)] = s;
        m[(2, 2)] = c;
        Self { matrix: m }
    }

    /// Rotation about the Z axis by `angle` radians.
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = c;
        m[(0, 1)] = -s;
        m[(1, 0)] = s;
        m[(1, 1)] = c;
        Self { matrix: m }
    }

    /// Rotation described by a unit quaternion.
    pub fn from_rotation(q: &Quat) -> Self {
        Self {
            matrix: q.to_homogeneous(),
        }
    }

    /// Compose `self · other`; `other` is applied to points first.
    pub fn then(&self, other: &Transform) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Transform a point.
    pub fn apply_point(&self, p: &Point3) -> Point3 {
        let v = self.matrix * Vector4::new(p.x, p.y, p.z, 1.0);
        Point3::new(v.x, v.y, v.z)
    }

    /// Transform a direction vector (ignores translation).
    pub fn apply_vec(&self, v: &Vec3) -> Vec3 {
        let r = self.matrix * Vector4::new(v.x, v.y, v.z, 0.0);
        Vec3::new(r.x, r.y, r.z)
    }

    /// The upper-left 3x3 rotation block.
    pub fn rotation(&self) -> Matrix3<f64> {
        self.matrix.fixed_view::<3, 3>(0, 0).into_owned()
    }

    /// The translation column.
    pub fn translation_part(&self) -> Vec3 {
        Vec3::new(
            self.matrix[(0, 3)],
            self.matrix[(1, 3)],
            self.matrix[(2, 3)],
        )
    }

    /// Rotation block as a unit quaternion.
    pub fn rotation_quat(&self) -> Quat {
        Quat::from_matrix(&self.rotation())
    }

    /// Row-major copy of the matrix coefficients.
    pub fn to_rows(&self) -> [[f64; 4]; 4] {
        let mut rows = [[0.0; 4]; 4];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, value) in row.iter_mut().enumerate() {
                *value = self.matrix[(r, c)];
            }
        }
        rows
    }

    /// Whether this is a proper rigid-body transform: orthonormal rotation
    /// block with determinant +1 and a `[0, 0, 0, 1]` homogeneous row.
    pub fn is_rigid(&self, tol: &Tolerance) -> bool {
        let r = self.rotation();
        let orthonormal = (r.transpose() * r - Matrix3::identity()).amax() < tol.linear;
        let proper = (r.determinant() - 1.0).abs() < tol.linear;
        let m = &self.matrix;
        let homogeneous =
            m[(3, 0)] == 0.0 && m[(3, 1)] == 0.0 && m[(3, 2)] == 0.0 && m[(3, 3)] == 1.0;
        orthonormal && proper && homogeneous
    }

    /// Coefficient-wise comparison within the linear tolerance.
    pub fn approx_eq(&self, other: &Transform, tol: &Tolerance) -> bool {
        (self.matrix - other.matrix).amax() < tol.linear
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Tolerance for pose comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Coefficient and distance tolerance in scene units.
    pub linear: f64,
}

impl Tolerance {
    /// Default tolerance (1e-6).
    pub const DEFAULT: Self = Self { linear: 1e-6 };

    /// Check if two points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point3, b: &Point3) -> bool {
        (a - b).norm() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_identity_transform() {
        let t = Transform::identity();
        let p = Point3::new(1.0, 2.0, 3.0);
        let result = t.apply_point(&p);
        assert!((result - p).norm() < 1e-12);
    }

    #[test]
    fn test_translation() {
        let t = Transform::translation(10.0, 20.0, 30.0);
        let p = Point3::new(1.0, 2.0, 3.0);
        let result = t.apply_point(&p);
        assert!((result.x - 11.0).abs() < 1e-12);
        assert!((result.y - 22.0).abs() < 1e-12);
        assert!((result.z - 33.0).abs() < 1e-12);
    }

    #[test]
    fn test_axis_translations() {
        let p = Transform::translation_z(2.5).apply_point(&Point3::origin());
        assert!(Tolerance::DEFAULT.points_equal(&p, &Point3::new(0.0, 0.0, 2.5)));
        let p = Transform::translation_x(-1.0).apply_point(&Point3::origin());
        assert!(Tolerance::DEFAULT.points_equal(&p, &Point3::new(-1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_rotation_z_90() {
        let t = Transform::rotation_z(PI / 2.0);
        let p = Point3::new(1.0, 0.0, 0.0);
        let result = t.apply_point(&p);
        assert!(result.x.abs() < 1e-12);
        assert!((result.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotation_x_90() {
        // +90° about X carries Y onto Z
        let t = Transform::rotation_x(PI / 2.0);
        let v = t.apply_vec(&Vec3::y());
        assert!(v.x.abs() < 1e-12);
        assert!(v.y.abs() < 1e-12);
        assert!((v.z - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_compose() {
        // (A*B)*p = A*(B*p): the right-hand transform is applied first.
        let rotate = Transform::rotation_z(PI / 2.0);
        let shift = Transform::translation(1.0, 0.0, 0.0);
        let p = rotate.then(&shift).apply_point(&Point3::origin());
        assert!(p.x.abs() < 1e-12);
        assert!((p.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_quaternion_matches_axis_rotation() {
        let q = Quat::from_axis_angle(&Vec3::z_axis(), 0.7);
        let a = Transform::from_rotation(&q);
        let b = Transform::rotation_z(0.7);
        assert!(a.approx_eq(&b, &Tolerance::DEFAULT));
        assert!((a.rotation_quat().angle() - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_parts_and_rows() {
        let t = Transform::translation(4.0, 5.0, 6.0);
        assert_eq!(t.translation_part(), Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(t.rotation(), Matrix3::identity());
        let rows = t.to_rows();
        assert_eq!(rows[0], [1.0, 0.0, 0.0, 4.0]);
        assert_eq!(rows[3], [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_is_rigid() {
        let tol = Tolerance::DEFAULT;
        let t = Transform::rotation_z(1.1).then(&Transform::translation(3.0, -2.0, 0.5));
        assert!(t.is_rigid(&tol));

        let mut scaled = Transform::identity();
        scaled.matrix[(0, 0)] = 2.0;
        assert!(!scaled.is_rigid(&tol));

        // Reflection: orthonormal but determinant -1
        let mut mirrored = Transform::identity();
        mirrored.matrix[(2, 2)] = -1.0;
        assert!(!mirrored.is_rigid(&tol));
    }

    #[test]
    fn test_tolerance_points_equal() {
        let tol = Tolerance::DEFAULT;
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(1.0 + 1e-7, 2.0, 3.0);
        assert!(tol.points_equal(&a, &b));
        let c = Point3::new(1.001, 2.0, 3.0);
        assert!(!tol.points_equal(&a, &c));
    }
}
