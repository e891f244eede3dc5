//! Engine settings.

use dhkin_math::{Quat, Transform, Vec3};
use dhkin_model::{KinematicsError, Orientation, Result};
use serde::{Deserialize, Serialize};

/// Placement of the chain root in the world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseFrame {
    /// Translation of the base frame `[x, y, z]`.
    #[serde(default)]
    pub translation: [f64; 3],
    /// Rotation of the base frame as a quaternion `[x, y, z, w]`.
    #[serde(default = "identity_rotation")]
    pub rotation: [f64; 4],
}

fn identity_rotation() -> [f64; 4] {
    [0.0, 0.0, 0.0, 1.0]
}

impl Default for BaseFrame {
    fn default() -> Self {
        Self {
            translation: [0.0; 3],
            rotation: identity_rotation(),
        }
    }
}

impl BaseFrame {
    /// Base frame at `transform`'s translation and rotation.
    pub fn from_transform(transform: &Transform) -> Self {
        let t = transform.translation_part();
        let q = Orientation::from(transform.rotation_quat());
        Self {
            translation: [t.x, t.y, t.z],
            rotation: [q.x, q.y, q.z, q.w],
        }
    }

    /// Build the base transform (translation, then rotation).
    pub fn to_transform(&self) -> Result<Transform> {
        let [x, y, z] = self.translation;
        if !(x.is_finite() && y.is_finite() && z.is_finite()) {
            return Err(KinematicsError::InvalidBaseFrame(
                "translation must be finite".into(),
            ));
        }

        let [qx, qy, qz, qw] = self.rotation;
        let rotation: Quat = Orientation {
            x: qx,
            y: qy,
            z: qz,
            w: qw,
        }
        .to_rotation()
        .ok_or_else(|| {
            KinematicsError::InvalidBaseFrame("rotation must be a non-zero finite quaternion".into())
        })?;

        Ok(Transform::from_translation(&Vec3::new(x, y, z)).then(&Transform::from_rotation(&rotation)))
    }
}

/// Forward-kinematics settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FkSettings {
    /// Where the first joint's parent frame sits.
    #[serde(default)]
    pub base: BaseFrame,
}

impl FkSettings {
    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        self.base.to_transform().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dhkin_math::{Point3, Tolerance};

    #[test]
    fn default_base_is_identity() {
        let settings = FkSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.base.to_transform().unwrap(), Transform::identity());
    }

    #[test]
    fn base_translation_then_rotation() {
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let base = BaseFrame {
            translation: [1.0, 0.0, 0.0],
            rotation: [0.0, 0.0, s, s],
        };
        let t = base.to_transform().unwrap();
        let p = t.apply_point(&Point3::new(1.0, 0.0, 0.0));
        assert!(Tolerance::DEFAULT.points_equal(&p, &Point3::new(1.0, 1.0, 0.0)));
    }

    #[test]
    fn from_transform_inverts_to_transform() {
        let original = Transform::translation(0.5, -1.0, 2.0).then(&Transform::rotation_x(0.3));
        let base = BaseFrame::from_transform(&original);
        let rebuilt = base.to_transform().unwrap();
        assert!(rebuilt.approx_eq(&original, &Tolerance::DEFAULT));
    }

    #[test]
    fn degenerate_base_is_rejected() {
        let zero = BaseFrame {
            translation: [0.0; 3],
            rotation: [0.0; 4],
        };
        assert!(matches!(zero.to_transform(), Err(KinematicsError::InvalidBaseFrame(_))));

        let far = BaseFrame {
            translation: [f64::NAN, 0.0, 0.0],
            ..BaseFrame::default()
        };
        assert!(matches!(far.to_transform(), Err(KinematicsError::InvalidBaseFrame(_))));
    }
}
