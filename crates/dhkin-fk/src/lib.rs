#![warn(missing_docs)]

//! Denavit–Hartenberg forward kinematics.
//!
//! Turns an ordered chain of DH joint parameters into the homogeneous
//! transform of every joint frame, and places each link's mesh relative to
//! its joint. The engine is stateless: every call recomputes from the
//! current parameter values and nothing is cached between calls.
//!
//! # Example
//!
//! ```
//! use dhkin_fk::{chain_transforms, pose_robot};
//! use dhkin_math::{Point3, Transform};
//! use dhkin_model::{Joint, JointParameter, Robot};
//!
//! let mut robot: Robot<()> = Robot::new("planar")
//!     .with_joint(Joint::revolute(JointParameter::new("shoulder", 0.0, 1.0, 0.0, 0.0)))
//!     .with_joint(Joint::revolute(JointParameter::new("elbow", 0.0, 1.0, 0.0, 0.0)));
//!
//! robot.set_joint_angle("shoulder", std::f64::consts::FRAC_PI_2).unwrap();
//!
//! for frame in chain_transforms(robot.joints()).unwrap() {
//!     let origin = frame.world.apply_point(&Point3::origin());
//!     println!("{}: {:?}", frame.name, origin);
//! }
//!
//! let poses = pose_robot(&robot, &Transform::identity()).unwrap();
//! assert_eq!(poses.len(), 2);
//! ```

mod chain;
mod joint;
mod link;
mod settings;

pub use chain::{chain_transforms, chain_transforms_from, end_effector, ChainTransforms, JointFrame};
pub use joint::{joint_transform, parameter_transform};
pub use link::{link_world_transform, pose_robot, LinkPose};
pub use settings::{BaseFrame, FkSettings};
