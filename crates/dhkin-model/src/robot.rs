//! Serial-link robot: a named, ordered chain of joints.

use std::collections::HashSet;

use crate::error::{KinematicsError, Result};
use crate::joint::{validate, Joint, JointParameter};

/// A serial-link manipulator.
///
/// Joint `i`'s frame is defined relative to joint `i - 1`'s frame; joint 0
/// is relative to the base frame.
///
/// Joints are read-only once added. The only in-place change is driving a
/// revolute joint's angle with [`Robot::set_joint_angle`], so the chain
/// accepted by [`Robot::from_joints`] keeps its names and constants.
///
/// ```compile_fail
/// use dhkin_model::{Joint, JointParameter, Robot};
///
/// let mut robot: Robot<()> = Robot::new("arm")
///     .with_joint(Joint::revolute(JointParameter::new("elbow", 0.0, 1.0, 0.0, 0.0)));
/// robot.joint_mut("elbow").unwrap().set_theta(1.0).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Robot<M> {
    /// Robot name.
    pub name: String,
    joints: Vec<Joint<M>>,
}

impl<M> Robot<M> {
    /// Create a robot with no joints.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            joints: Vec::new(),
        }
    }

    /// Create a robot from an ordered joint list, validating the chain.
    pub fn from_joints(name: impl Into<String>, joints: Vec<Joint<M>>) -> Result<Self> {
        validate_chain(&joints)?;
        Ok(Self {
            name: name.into(),
            joints,
        })
    }

    /// Append a joint at the tip of the chain.
    pub fn with_joint(mut self, joint: Joint<M>) -> Self {
        self.joints.push(joint);
        self
    }

    /// Joints in chain order.
    pub fn joints(&self) -> &[Joint<M>] {
        &self.joints
    }

    /// Number of joints.
    pub fn joint_count(&self) -> usize {
        self.joints.len()
    }

    /// Look up a joint by name.
    pub fn joint(&self, name: &str) -> Option<&Joint<M>> {
        self.joints.iter().find(|j| j.name() == name)
    }

    fn joint_mut(&mut self, name: &str) -> Option<&mut Joint<M>> {
        self.joints.iter_mut().find(|j| j.name() == name)
    }

    /// DH parameters in chain order.
    pub fn parameters(&self) -> impl Iterator<Item = &JointParameter> + '_ {
        self.joints.iter().map(|j| j.parameters())
    }

    /// Set the live angle of the named revolute joint.
    pub fn set_joint_angle(&mut self, name: &str, theta: f64) -> Result<()> {
        let joint = self
            .joint_mut(name)
            .ok_or_else(|| KinematicsError::UnknownJoint(name.to_string()))?;
        joint.set_theta(theta)?;
        tracing::trace!(joint = name, theta, "joint angle updated");
        Ok(())
    }

    /// Move every revolute joint that carries a default pose hint to it.
    ///
    /// Returns the number of joints that were moved.
    pub fn apply_default_pose(&mut self) -> Result<usize> {
        let mut moved = 0;
        for joint in &mut self.joints {
            if !joint.joint_type().is_revolute() {
                continue;
            }
            if let Some(angle) = joint.default_angle {
                joint.set_theta(angle)?;
                moved += 1;
            }
        }
        Ok(moved)
    }

    /// See [`validate_chain`].
    pub fn validate(&self) -> Result<()> {
        validate_chain(&self.joints)
    }
}

/// Check that a chain is non-empty, that every joint's parameters are valid,
/// and that no two joints share a name.
pub fn validate_chain<P: AsRef<JointParameter>>(joints: &[P]) -> Result<()> {
    if joints.is_empty() {
        return Err(KinematicsError::EmptyChain);
    }

    let mut seen = HashSet::with_capacity(joints.len());
    for joint in joints {
        let parameters = joint.as_ref();
        validate(parameters)?;
        if !seen.insert(parameters.name.as_str()) {
            return Err(KinematicsError::DuplicateJointName(parameters.name.clone()));
        }
    }

    Ok(())
}
