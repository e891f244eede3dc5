//! Single-joint DH transform.

use dhkin_math::Transform;
use dhkin_model::JointParameter;

/// Homogeneous transform from the previous joint frame to this one.
///
/// `T = Trans_z(d) · Rot_z(theta) · Trans_x(a) · Rot_x(alpha)`.
///
/// The factor order is the DH convention itself; reordering it yields a
/// different frame. Total over all finite inputs.
pub fn joint_transform(theta: f64, a: f64, d: f64, alpha: f64) -> Transform {
    let z = Transform::translation_z(d).then(&Transform::rotation_z(theta));
    let x = Transform::translation_x(a).then(&Transform::rotation_x(alpha));
    z.then(&x)
}

/// [`joint_transform`] of a parameter set.
pub fn parameter_transform(parameters: &JointParameter) -> Transform {
    joint_transform(parameters.theta, parameters.a, parameters.d, parameters.alpha)
}
