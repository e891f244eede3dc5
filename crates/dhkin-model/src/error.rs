//! Error types for the kinematic data model.

use thiserror::Error;

/// Errors raised while validating or manipulating a kinematic chain.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KinematicsError {
    /// A DH parameter is non-finite, or the joint name is empty.
    #[error("invalid joint parameter on {name:?}: {reason}")]
    InvalidJointParameter {
        /// Joint name (may be empty when that is the fault).
        name: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Two joints in one chain share a name.
    #[error("duplicate joint name: {0}")]
    DuplicateJointName(String),

    /// A chain with zero joints was asked to produce transforms.
    #[error("kinematic chain has no joints")]
    EmptyChain,

    /// No joint with this name exists in the robot.
    #[error("joint not found: {0}")]
    UnknownJoint(String),

    /// An angle command targeted a fixed joint.
    #[error("joint {0} is fixed and has no angle to drive")]
    NotRevolute(String),

    /// The configured base frame is not a finite rigid transform.
    #[error("invalid base frame: {0}")]
    InvalidBaseFrame(String),

    /// The mesh codec rejected a joint's payload.
    #[error("mesh payload of joint {joint} could not be processed: {reason}")]
    Mesh {
        /// Joint that owns the mesh.
        joint: String,
        /// Codec error message.
        reason: String,
    },
}

/// Result type for kinematic model operations.
pub type Result<T> = std::result::Result<T, KinematicsError>;
