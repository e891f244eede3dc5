//! Joints, their DH parameters, and the link metadata attached to them.

use dhkin_math::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{KinematicsError, Result};

/// Denavit–Hartenberg parameters of one joint.
///
/// Describes the transform from the previous joint frame to this one.
/// Angles are in radians, lengths in scene units.
#[derive(Debug, Clone, PartialEq)]
pub struct JointParameter {
    /// Identifier, unique within a robot.
    pub name: String,
    /// Rotation about the previous z-axis, from old x to new x.
    /// This is the live joint angle of a revolute joint.
    pub theta: f64,
    /// Length of the common normal (link length).
    pub a: f64,
    /// Offset along the previous z-axis to the common normal.
    pub d: f64,
    /// Rotation about the common normal, from old z to new z (link twist).
    pub alpha: f64,
}

impl JointParameter {
    /// Create a parameter set.
    pub fn new(name: impl Into<String>, theta: f64, a: f64, d: f64, alpha: f64) -> Self {
        Self {
            name: name.into(),
            theta,
            a,
            d,
            alpha,
        }
    }

    /// See [`validate`].
    pub fn validate(&self) -> Result<()> {
        validate(self)
    }
}

impl AsRef<JointParameter> for JointParameter {
    fn as_ref(&self) -> &JointParameter {
        self
    }
}

/// Check that `name` is non-empty and every numeric field is finite.
pub fn validate(parameters: &JointParameter) -> Result<()> {
    if parameters.name.is_empty() {
        return Err(KinematicsError::InvalidJointParameter {
            name: String::new(),
            reason: "name is empty".to_string(),
        });
    }

    let fields = [
        ("theta", parameters.theta),
        ("a", parameters.a),
        ("d", parameters.d),
        ("alpha", parameters.alpha),
    ];
    for (field, value) in fields {
        if !value.is_finite() {
            return Err(KinematicsError::InvalidJointParameter {
                name: parameters.name.clone(),
                reason: format!("{field} is not finite ({value})"),
            });
        }
    }

    Ok(())
}

/// Degree of freedom of a joint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JointType {
    /// No degree of freedom; `theta` is a constant.
    #[default]
    Fixed,
    /// One rotational degree of freedom about z; `theta` is the joint angle.
    Revolute,
}

impl JointType {
    /// Whether `theta` may be driven at runtime.
    pub fn is_revolute(self) -> bool {
        matches!(self, JointType::Revolute)
    }

    /// Lowercase name as used in robot descriptions.
    pub fn as_str(self) -> &'static str {
        match self {
            JointType::Fixed => "fixed",
            JointType::Revolute => "revolute",
        }
    }
}

/// Visual placement of a link relative to its joint frame.
///
/// `M` is the caller's mesh handle (a renderer buffer id, an `Arc` to
/// decoded geometry, ...). The kinematics never look inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct Link<M> {
    /// Mesh to place at this link, if any.
    pub mesh: Option<M>,
    /// Translation from the joint frame to the mesh origin.
    pub offset: Vec3,
    /// Rotation from the joint frame to the mesh frame, applied after `offset`.
    pub rotation: Quat,
}

impl<M> Link<M> {
    /// A link without mesh whose origin coincides with the joint frame.
    pub fn new() -> Self {
        Self {
            mesh: None,
            offset: Vec3::zeros(),
            rotation: Quat::identity(),
        }
    }

    /// Attach a mesh handle.
    pub fn with_mesh(mut self, mesh: M) -> Self {
        self.mesh = Some(mesh);
        self
    }

    /// Set the translation offset.
    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    /// Set the rotation.
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }
}

impl<M> Default for Link<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// A joint in a serial chain: DH parameters, type, and attached link.
///
/// Parameters and type are fixed at construction. The only later change is
/// the angle of a revolute joint, through [`Joint::set_theta`].
///
/// ```compile_fail
/// use dhkin_model::{Joint, JointParameter};
///
/// let mut joint: Joint<()> = Joint::fixed(JointParameter::new("base", 0.0, 0.0, 1.0, 0.0));
/// joint.parameters.theta = 9.0;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Joint<M> {
    parameters: JointParameter,
    joint_type: JointType,
    /// Link placed at this joint's output frame.
    pub link: Link<M>,
    /// Default pose hint from the description. Not used by the kinematics.
    pub default_angle: Option<f64>,
}

impl<M> Joint<M> {
    /// Create a joint with an empty link.
    pub fn new(parameters: JointParameter, joint_type: JointType) -> Self {
        Self {
            parameters,
            joint_type,
            link: Link::new(),
            default_angle: None,
        }
    }

    /// Create a fixed joint.
    pub fn fixed(parameters: JointParameter) -> Self {
        Self::new(parameters, JointType::Fixed)
    }

    /// Create a revolute joint.
    pub fn revolute(parameters: JointParameter) -> Self {
        Self::new(parameters, JointType::Revolute)
    }

    /// Replace the attached link.
    pub fn with_link(mut self, link: Link<M>) -> Self {
        self.link = link;
        self
    }

    /// Set the default pose hint.
    pub fn with_default_angle(mut self, angle: f64) -> Self {
        self.default_angle = Some(angle);
        self
    }

    /// DH parameters, including the current `theta`.
    pub fn parameters(&self) -> &JointParameter {
        &self.parameters
    }

    /// Fixed or revolute.
    pub fn joint_type(&self) -> JointType {
        self.joint_type
    }

    /// Joint name.
    pub fn name(&self) -> &str {
        &self.parameters.name
    }

    /// Current `theta`.
    pub fn theta(&self) -> f64 {
        self.parameters.theta
    }

    /// Drive the joint angle.
    ///
    /// Only revolute joints accept an angle, and it must be finite.
    pub fn set_theta(&mut self, theta: f64) -> Result<()> {
        if !self.joint_type.is_revolute() {
            return Err(KinematicsError::NotRevolute(self.parameters.name.clone()));
        }
        if !theta.is_finite() {
            return Err(KinematicsError::InvalidJointParameter {
                name: self.parameters.name.clone(),
                reason: format!("theta is not finite ({theta})"),
            });
        }
        self.parameters.theta = theta;
        Ok(())
    }
}

impl<M> AsRef<JointParameter> for Joint<M> {
    fn as_ref(&self) -> &JointParameter {
        &self.parameters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_parameters_pass() {
        let p = JointParameter::new("shoulder", 0.3, 1.0, 0.5, -1.2);
        assert!(validate(&p).is_ok());
    }

    #[test]
    fn empty_name_is_rejected() {
        let p = JointParameter::new("", 0.0, 0.0, 0.0, 0.0);
        assert!(matches!(
            p.validate(),
            Err(KinematicsError::InvalidJointParameter { .. })
        ));
    }

    #[test]
    fn non_finite_fields_are_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let candidates = [
                JointParameter::new("j", bad, 0.0, 0.0, 0.0),
                JointParameter::new("j", 0.0, bad, 0.0, 0.0),
                JointParameter::new("j", 0.0, 0.0, bad, 0.0),
                JointParameter::new("j", 0.0, 0.0, 0.0, bad),
            ];
            for p in candidates {
                match validate(&p) {
                    Err(KinematicsError::InvalidJointParameter { name, .. }) => {
                        assert_eq!(name, "j")
                    }
                    other => panic!("expected InvalidJointParameter, got {other:?}"),
                }
            }
        }
    }

    #[test]
    fn joint_type_serializes_lowercase() {
        let json = serde_json::to_string(&JointType::Revolute).unwrap();
        assert_eq!(json, "\"revolute\"");
        let parsed: JointType = serde_json::from_str("\"fixed\"").unwrap();
        assert_eq!(parsed, JointType::Fixed);
        assert_eq!(JointType::Revolute.as_str(), "revolute");
    }

    #[test]
    fn set_theta_on_revolute() {
        let mut joint: Joint<()> = Joint::revolute(JointParameter::new("elbow", 0.0, 1.0, 0.0, 0.0));
        joint.set_theta(1.25).unwrap();
        assert_eq!(joint.theta(), 1.25);

        let err = joint.set_theta(f64::NAN).unwrap_err();
        assert!(matches!(err, KinematicsError::InvalidJointParameter { .. }));
        assert_eq!(joint.theta(), 1.25);
    }

    #[test]
    fn set_theta_on_fixed_is_refused() {
        let mut joint: Joint<()> = Joint::fixed(JointParameter::new("base", 0.4, 0.0, 0.2, 0.0));
        assert_eq!(
            joint.set_theta(1.0),
            Err(KinematicsError::NotRevolute("base".to_string()))
        );
        assert_eq!(joint.theta(), 0.4);
        assert_eq!(joint.joint_type(), JointType::Fixed);
        assert_eq!(joint.parameters(), &JointParameter::new("base", 0.4, 0.0, 0.2, 0.0));
    }
}
