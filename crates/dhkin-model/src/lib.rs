#![warn(missing_docs)]

//! Kinematic data model for dhkin.
//!
//! Defines the entities of a serial-link manipulator (DH joint parameters,
//! joint types, joints with their attached links, and robots) together
//! with their validation rules and the serializable [`RobotDescription`]
//! used for import and export.
//!
//! This crate holds no kinematics; transforms are computed by `dhkin-fk`.
//!
//! # Example
//!
//! ```
//! use dhkin_model::{Joint, JointParameter, Robot};
//!
//! let mut robot: Robot<()> = Robot::new("planar")
//!     .with_joint(Joint::revolute(JointParameter::new("shoulder", 0.0, 1.0, 0.0, 0.0)))
//!     .with_joint(Joint::revolute(JointParameter::new("elbow", 0.0, 0.5, 0.0, 0.0)));
//!
//! robot.validate().unwrap();
//! robot.set_joint_angle("elbow", 0.3).unwrap();
//! ```

mod description;
mod error;
mod joint;
mod mesh;
mod robot;

pub use description::{Orientation, Position, RobotDescription, RobotDescriptionJoint};
pub use error::{KinematicsError, Result};
pub use joint::{validate, Joint, JointParameter, JointType, Link};
pub use mesh::{Base64MeshCodec, MeshBytes, MeshCodec};
pub use robot::{validate_chain, Robot};
