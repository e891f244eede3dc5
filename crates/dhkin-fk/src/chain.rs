//! Chain traversal: local and world transforms for every joint.

use std::iter::FusedIterator;
use std::slice;

use dhkin_math::Transform;
use dhkin_model::{validate, JointParameter, KinematicsError, Result};

use crate::joint::parameter_transform;

/// Pose of one joint frame in the chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointFrame<'a> {
    /// Position of the joint in the chain.
    pub index: usize,
    /// Joint name.
    pub name: &'a str,
    /// Transform from the previous joint frame (or the base) to this one.
    pub local: Transform,
    /// Transform from the base frame to this one.
    pub world: Transform,
}

/// Lazy left-to-right fold over a joint chain.
///
/// Yields one [`JointFrame`] per joint in input order. Each call to `next`
/// reads the joint's current parameters, so a fresh iterator after an angle
/// update reflects the new pose. Cloning the iterator restarts from the same
/// position.
#[derive(Debug)]
pub struct ChainTransforms<'a, P> {
    joints: slice::Iter<'a, P>,
    index: usize,
    world: Transform,
}

// Not derived: the joints are borrowed, so `P` need not be `Clone`.
impl<P> Clone for ChainTransforms<'_, P> {
    fn clone(&self) -> Self {
        Self {
            joints: self.joints.clone(),
            index: self.index,
            world: self.world,
        }
    }
}

impl<'a, P: AsRef<JointParameter>> Iterator for ChainTransforms<'a, P> {
    type Item = JointFrame<'a>;

    fn next(&mut self) -> Option<JointFrame<'a>> {
        let parameters = self.joints.next()?.as_ref();
        let local = parameter_transform(parameters);
        self.world = self.world.then(&local);

        let frame = JointFrame {
            index: self.index,
            name: &parameters.name,
            local,
            world: self.world,
        };
        self.index += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.joints.size_hint()
    }
}

impl<P: AsRef<JointParameter>> ExactSizeIterator for ChainTransforms<'_, P> {}

impl<P: AsRef<JointParameter>> FusedIterator for ChainTransforms<'_, P> {}

/// Transforms of every joint relative to an identity base frame.
///
/// See [`chain_transforms_from`].
pub fn chain_transforms<P: AsRef<JointParameter>>(joints: &[P]) -> Result<ChainTransforms<'_, P>> {
    chain_transforms_from(&Transform::identity(), joints)
}

/// Transforms of every joint relative to `base`.
///
/// `world[0] = base · local[0]` and `world[i] = world[i-1] · local[i]`.
///
/// Every joint is validated before the iterator is returned, so invalid
/// input never produces a partial pose. Duplicate names are allowed here;
/// only name-based lookups need them to be unique.
pub fn chain_transforms_from<'a, P: AsRef<JointParameter>>(
    base: &Transform,
    joints: &'a [P],
) -> Result<ChainTransforms<'a, P>> {
    if joints.is_empty() {
        return Err(KinematicsError::EmptyChain);
    }
    for joint in joints {
        validate(joint.as_ref())?;
    }

    tracing::trace!(joints = joints.len(), "recomputing joint chain");
    Ok(ChainTransforms {
        joints: joints.iter(),
        index: 0,
        world: *base,
    })
}

/// World transform of the last joint in the chain.
pub fn end_effector<P: AsRef<JointParameter>>(base: &Transform, joints: &[P]) -> Result<Transform> {
    chain_transforms_from(base, joints)?
        .last()
        .map(|frame| frame.world)
        .ok_or(KinematicsError::EmptyChain)
}
