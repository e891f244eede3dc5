//! Text and JSON rendering of joint tables and poses.

use std::fmt::Write;

use dhkin_fk::LinkPose;
use dhkin_math::Transform;
use dhkin_model::{Joint, Orientation, Robot};
use serde::Serialize;

/// One posed joint, as printed by `dhkin pose`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoseRow {
    /// Joint name.
    pub joint: String,
    /// `"fixed"` or `"revolute"`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Current joint angle in radians.
    pub theta: f64,
    /// Joint frame origin in world coordinates.
    pub position: [f64; 3],
    /// Full base-to-joint transform, row-major.
    pub transform: [[f64; 4]; 4],
    /// Link mesh origin in world coordinates.
    pub link_position: [f64; 3],
    /// Link mesh orientation in world coordinates.
    pub link_rotation: Orientation,
}

impl PoseRow {
    /// Row for `joint`, posed by [`dhkin_fk::pose_robot`].
    pub fn new<M>(joint: &Joint<M>, pose: &LinkPose<'_, M>) -> Self {
        Self {
            joint: pose.joint.to_string(),
            kind: joint.joint_type().as_str(),
            theta: joint.theta(),
            position: xyz(&pose.joint_world),
            transform: pose.joint_world.to_rows(),
            link_position: xyz(&pose.link_world),
            link_rotation: pose.link_world.rotation_quat().into(),
        }
    }
}

fn xyz(t: &Transform) -> [f64; 3] {
    let v = t.translation_part();
    [v.x, v.y, v.z]
}

/// Fixed-width table of joint positions.
pub fn pose_table(rows: &[PoseRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<16} {:<9} {:>10} {:>10} {:>10} {:>10}",
        "joint", "type", "theta", "x", "y", "z"
    );
    for row in rows {
        let [x, y, z] = row.position;
        let _ = writeln!(
            out,
            "{:<16} {:<9} {:>10.4} {:>10.4} {:>10.4} {:>10.4}",
            row.joint, row.kind, row.theta, x, y, z
        );
    }
    out
}

/// Fixed-width table of DH parameters.
pub fn info_table<M>(robot: &Robot<M>) -> String {
    let mut out = String::new();
    let title = if robot.name.is_empty() { "(unnamed)" } else { robot.name.as_str() };
    let _ = writeln!(out, "{}: {} joints", title, robot.joint_count());
    let _ = writeln!(
        out,
        "{:<16} {:<9} {:>10} {:>10} {:>10} {:>10} {:>8}",
        "joint", "type", "theta", "a", "d", "alpha", "mesh"
    );
    for joint in robot.joints() {
        let p = joint.parameters();
        let _ = writeln!(
            out,
            "{:<16} {:<9} {:>10.4} {:>10.4} {:>10.4} {:>10.4} {:>8}",
            p.name,
            joint.joint_type().as_str(),
            p.theta,
            p.a,
            p.d,
            p.alpha,
            if joint.link.mesh.is_some() { "yes" } else { "-" }
        );
    }
    out
}
