//! Link placement: where each mesh goes once the joint frames are known.

use dhkin_math::Transform;
use dhkin_model::{Link, Result, Robot};

use crate::chain::chain_transforms_from;

/// Transform at which a link's mesh is placed.
///
/// `joint_world · Trans(link.offset) · Rot(link.rotation)`. Inputs are not
/// re-validated; this runs once per joint per frame.
pub fn link_world_transform<M>(joint_world: &Transform, link: &Link<M>) -> Transform {
    joint_world
        .then(&Transform::from_translation(&link.offset))
        .then(&Transform::from_rotation(&link.rotation))
}

/// Computed pose of one joint and its link, ready for a renderer.
#[derive(Debug)]
pub struct LinkPose<'a, M> {
    /// Joint name.
    pub joint: &'a str,
    /// Base-to-joint transform.
    pub joint_world: Transform,
    /// Transform at which the link mesh is placed.
    pub link_world: Transform,
    /// Mesh handle to position, if the link has one.
    pub mesh: Option<&'a M>,
}

/// Pose every joint and link of `robot` relative to `base`.
pub fn pose_robot<'a, M>(robot: &'a Robot<M>, base: &Transform) -> Result<Vec<LinkPose<'a, M>>> {
    let joints = robot.joints();
    let frames = chain_transforms_from(base, joints)?;

    let poses = frames
        .zip(joints)
        .map(|(frame, joint)| LinkPose {
            joint: frame.name,
            joint_world: frame.world,
            link_world: link_world_transform(&frame.world, &joint.link),
            mesh: joint.link.mesh.as_ref(),
        })
        .collect();

    Ok(poses)
}
