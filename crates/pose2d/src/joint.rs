use std::fmt;

use crate::error::GeometryError;
use crate::point::Point;

/// Joint indices of the MPII human pose layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum JointKind {
    RightAnkle = 0,
    RightKnee = 1,
    RightHip = 2,
    LeftHip = 3,
    LeftKnee = 4,
    LeftAnkle = 5,
    Pelvis = 6,
    Thorax = 7,
    UpperNeck = 8,
    HeadTop = 9,
    RightWrist = 10,
    RightElbow = 11,
    RightShoulder = 12,
    LeftShoulder = 13,
    LeftElbow = 14,
    LeftWrist = 15,
}

impl JointKind {
    /// Every joint, in index order.
    pub const ALL: [JointKind; 16] = [
        JointKind::RightAnkle,
        JointKind::RightKnee,
        JointKind::RightHip,
        JointKind::LeftHip,
        JointKind::LeftKnee,
        JointKind::LeftAnkle,
        JointKind::Pelvis,
        JointKind::Thorax,
        JointKind::UpperNeck,
        JointKind::HeadTop,
        JointKind::RightWrist,
        JointKind::RightElbow,
        JointKind::RightShoulder,
        JointKind::LeftShoulder,
        JointKind::LeftElbow,
        JointKind::LeftWrist,
    ];

    pub fn name(self) -> &'static str {
        match self {
            JointKind::RightAnkle => "r_ankle",
            JointKind::RightKnee => "r_knee",
            JointKind::RightHip => "r_hip",
            JointKind::LeftHip => "l_hip",
            JointKind::LeftKnee => "l_knee",
            JointKind::LeftAnkle => "l_ankle",
            JointKind::Pelvis => "pelvis",
            JointKind::Thorax => "thorax",
            JointKind::UpperNeck => "upper_neck",
            JointKind::HeadTop => "head_top",
            JointKind::RightWrist => "r_wrist",
            JointKind::RightElbow => "r_elbow",
            JointKind::RightShoulder => "r_shoulder",
            JointKind::LeftShoulder => "l_shoulder",
            JointKind::LeftElbow => "l_elbow",
            JointKind::LeftWrist => "l_wrist",
        }
    }
}

impl fmt::Display for JointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<JointKind> for usize {
    fn from(kind: JointKind) -> usize {
        kind as usize
    }
}

impl TryFrom<usize> for JointKind {
    type Error = GeometryError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        JointKind::ALL
            .get(value)
            .copied()
            .ok_or(GeometryError::UnknownJoint(value))
    }
}

/// A positioned landmark of a detected pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Joint {
    pub position: Point<i32>,
    /// Index into the MPII layout. Expected in 0-15 but not validated.
    pub id: usize,
    pub visible: bool,
}

impl Joint {
    pub fn new(position: Point<i32>, id: usize, visible: bool) -> Self {
        Self {
            position,
            id,
            visible,
        }
    }

    /// The layout entry for this joint's id, if the id is in range.
    pub fn kind(&self) -> Option<JointKind> {
        JointKind::try_from(self.id).ok()
    }
}
