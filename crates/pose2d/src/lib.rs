pub mod bbox;
pub mod error;
pub mod joint;
pub mod logging;
pub mod point;
pub mod skeleton;

pub use bbox::BoundingBox;
pub use error::{GeometryError, Result};
pub use joint::{Joint, JointKind};
pub use logging::{init_stdout_logger, StdoutLogger};
pub use point::{Point, Point2D, Point2DInt};
pub use skeleton::{Skeleton, BONES, NUM_JOINTS};

// Re-export log crate so downstream crates can use pose2d::log::*
pub use log;
