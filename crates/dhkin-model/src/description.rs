//! Serializable robot description used for import and export.
//!
//! A [`RobotDescription`] is self-contained: every joint carries its DH
//! parameters plus an embedded mesh payload. It is converted into a
//! [`Robot`] by routing each payload through a [`MeshCodec`], and a robot can
//! be written back the same way.

use dhkin_math::{Quat, Vec3};
use nalgebra::Quaternion;
use serde::{Deserialize, Serialize};

use crate::error::{KinematicsError, Result};
use crate::joint::{Joint, JointParameter, JointType, Link};
use crate::mesh::MeshCodec;
use crate::robot::{validate_chain, Robot};

/// 3-vector as written in a description.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

/// Unit quaternion as written in a description.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    /// X (i) component.
    pub x: f64,
    /// Y (j) component.
    pub y: f64,
    /// Z (k) component.
    pub z: f64,
    /// Scalar component.
    pub w: f64,
}

impl Default for Orientation {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        }
    }
}

impl From<Vec3> for Position {
    fn from(v: Vec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<Position> for Vec3 {
    fn from(p: Position) -> Self {
        Vec3::new(p.x, p.y, p.z)
    }
}

impl From<Quat> for Orientation {
    fn from(q: Quat) -> Self {
        let c = q.quaternion().coords;
        Self {
            x: c.x,
            y: c.y,
            z: c.z,
            w: c.w,
        }
    }
}

impl Orientation {
    /// Normalize into a rotation. `None` for a zero or non-finite quaternion.
    pub fn to_rotation(self) -> Option<Quat> {
        let q = Quaternion::new(self.w, self.x, self.y, self.z);
        let norm = q.norm();
        if !norm.is_finite() || norm < 1e-12 {
            return None;
        }
        Some(Quat::new_normalize(q))
    }
}

/// One joint of a [`RobotDescription`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotDescriptionJoint {
    /// Joint name.
    pub name: String,
    /// `"fixed"` or `"revolute"`.
    #[serde(rename = "type")]
    pub joint_type: JointType,
    /// DH theta (radians).
    pub theta: f64,
    /// DH link length.
    pub a: f64,
    /// DH link offset.
    pub d: f64,
    /// DH link twist (radians).
    pub alpha: f64,
    /// Default pose for tooling; never used to compute transforms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
    /// Base64 mesh payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mesh: Option<String>,
    /// Mesh origin relative to the joint frame.
    #[serde(default)]
    pub mesh_offset: Position,
    /// Mesh rotation relative to the joint frame.
    #[serde(default)]
    pub mesh_rotation: Orientation,
}

impl RobotDescriptionJoint {
    /// The DH parameter set of this joint.
    pub fn parameters(&self) -> JointParameter {
        JointParameter::new(self.name.clone(), self.theta, self.a, self.d, self.alpha)
    }
}

/// Self-contained interchange form of a [`Robot`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RobotDescription {
    /// Robot name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Joints in chain order.
    pub joints: Vec<RobotDescriptionJoint>,
}

impl RobotDescription {
    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Validate the chain this description defines.
    pub fn validate(&self) -> Result<()> {
        let parameters: Vec<JointParameter> =
            self.joints.iter().map(RobotDescriptionJoint::parameters).collect();
        validate_chain(&parameters)
    }

    /// Build a [`Robot`], decoding mesh payloads with `codec`.
    ///
    /// The whole chain is validated before any mesh is decoded, so a
    /// malformed description never yields a partially built robot.
    pub fn to_robot<C: MeshCodec>(&self, codec: &C) -> Result<Robot<C::Handle>> {
        if let Err(err) = self.validate() {
            tracing::warn!(robot = %self.name, error = %err, "rejected robot description");
            return Err(err);
        }

        let mut joints = Vec::with_capacity(self.joints.len());
        for desc in &self.joints {
            let rotation = desc.mesh_rotation.to_rotation().ok_or_else(|| {
                KinematicsError::InvalidJointParameter {
                    name: desc.name.clone(),
                    reason: "mesh_rotation is not a valid rotation".to_string(),
                }
            })?;

            let mesh = match &desc.mesh {
                Some(payload) => Some(codec.decode(payload).map_err(|e| KinematicsError::Mesh {
                    joint: desc.name.clone(),
                    reason: e.to_string(),
                })?),
                None => None,
            };

            let link = Link {
                mesh,
                offset: desc.mesh_offset.into(),
                rotation,
            };
            let mut joint = Joint::new(desc.parameters(), desc.joint_type).with_link(link);
            joint.default_angle = desc.angle;
            joints.push(joint);
        }

        tracing::debug!(robot = %self.name, joints = joints.len(), "loaded robot description");
        Robot::from_joints(self.name.clone(), joints)
    }
}

impl<M> Robot<M> {
    /// Write this robot back into a description, encoding meshes with `codec`.
    pub fn to_description<C: MeshCodec<Handle = M>>(&self, codec: &C) -> Result<RobotDescription> {
        let mut joints = Vec::with_capacity(self.joint_count());
        for joint in self.joints() {
            let mesh = match &joint.link.mesh {
                Some(handle) => Some(codec.encode(handle).map_err(|e| KinematicsError::Mesh {
                    joint: joint.name().to_string(),
                    reason: e.to_string(),
                })?),
                None => None,
            };

            let p = joint.parameters();
            joints.push(RobotDescriptionJoint {
                name: p.name.clone(),
                joint_type: joint.joint_type(),
                theta: p.theta,
                a: p.a,
                d: p.d,
                alpha: p.alpha,
                angle: joint.default_angle,
                mesh,
                mesh_offset: joint.link.offset.into(),
                mesh_rotation: joint.link.rotation.into(),
            });
        }

        Ok(RobotDescription {
            name: self.name.clone(),
            joints,
        })
    }
}
