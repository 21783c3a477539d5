use crate::bbox::BoundingBox;
use crate::joint::{Joint, JointKind};

/// Number of joints in the MPII layout.
pub const NUM_JOINTS: usize = 16;

/// Limb connections of the MPII layout, as (from, to) pairs.
pub const BONES: [(JointKind, JointKind); 15] = [
    (JointKind::RightAnkle, JointKind::RightKnee),
    (JointKind::RightKnee, JointKind::RightHip),
    (JointKind::RightHip, JointKind::Pelvis),
    (JointKind::LeftHip, JointKind::Pelvis),
    (JointKind::LeftHip, JointKind::LeftKnee),
    (JointKind::LeftKnee, JointKind::LeftAnkle),
    (JointKind::Pelvis, JointKind::Thorax),
    (JointKind::Thorax, JointKind::UpperNeck),
    (JointKind::UpperNeck, JointKind::HeadTop),
    (JointKind::RightWrist, JointKind::RightElbow),
    (JointKind::RightElbow, JointKind::RightShoulder),
    (JointKind::RightShoulder, JointKind::Thorax),
    (JointKind::LeftShoulder, JointKind::Thorax),
    (JointKind::LeftShoulder, JointKind::LeftElbow),
    (JointKind::LeftElbow, JointKind::LeftWrist),
];

/// A human pose on a 2D image, as an ordered list of joints.
///
/// Joints keep insertion order. A full detection has [`NUM_JOINTS`] joints, but
/// partial skeletons are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skeleton {
    joints: Vec<Joint>,
}

impl Skeleton {
    pub fn new(joints: Vec<Joint>) -> Self {
        Self { joints }
    }

    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    pub fn len(&self) -> usize {
        self.joints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    /// Exactly one joint for every entry of the layout.
    pub fn is_complete(&self) -> bool {
        let mut seen = [false; NUM_JOINTS];
        for joint in &self.joints {
            match seen.get_mut(joint.id) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        seen.iter().all(|&present| present)
    }

    /// First joint with the given layout index.
    pub fn joint(&self, kind: JointKind) -> Option<&Joint> {
        let id = usize::from(kind);
        self.joints.iter().find(|joint| joint.id == id)
    }

    pub fn visible_joints(&self) -> impl Iterator<Item = &Joint> {
        self.joints.iter().filter(|joint| joint.visible)
    }

    /// Limbs whose two end joints are both present.
    pub fn bones(&self) -> impl Iterator<Item = (&Joint, &Joint)> {
        BONES
            .into_iter()
            .filter_map(move |(from, to)| Some((self.joint(from)?, self.joint(to)?)))
    }

    /// Smallest box covering every joint, visible or not.
    ///
    /// Returns `None` for a skeleton without joints.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let bbox = BoundingBox::covering(self.joints.iter().map(|joint| joint.position));
        if bbox.is_none() {
            log::debug!("bounding box requested for a skeleton without joints");
        }
        bbox
    }

    /// Smallest box covering the visible joints only.
    pub fn visible_bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::covering(self.visible_joints().map(|joint| joint.position))
    }
}

impl From<Vec<Joint>> for Skeleton {
    fn from(joints: Vec<Joint>) -> Self {
        Self::new(joints)
    }
}

impl FromIterator<Joint> for Skeleton {
    fn from_iter<I: IntoIterator<Item = Joint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
