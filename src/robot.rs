use crate::parts::{DetectionPart, TraversalMode, TraversalPart};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The product assembled by a [`RobotBuilder`](crate::RobotBuilder).
///
/// Parts are kept in attachment order and duplicates are allowed. The part
/// sequences only ever grow; a fresh robot comes from a builder reset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robot {
    /// Overall locomotion category, unset until a traversal step runs.
    traversal_mode: Option<TraversalMode>,

    /// Installed locomotion parts.
    traversal_systems: Vec<TraversalPart>,

    /// Installed sensing parts.
    detection_systems: Vec<DetectionPart>,
}

impl Robot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach_traversal_system(&mut self, part: TraversalPart) {
        self.traversal_systems.push(part);
    }

    pub fn attach_detection_system(&mut self, part: DetectionPart) {
        self.detection_systems.push(part);
    }

    /// Sets the traversal classification and returns the previous one.
    pub fn set_traversal_mode(&mut self, mode: TraversalMode) -> Option<TraversalMode> {
        let previous = self.traversal_mode.replace(mode);
        if let Some(old) = previous
            && old != mode
        {
            tracing::warn!("Traversal mode changed from {} to {} without reset", old, mode);
        }
        previous
    }

    pub fn traversal_mode(&self) -> Option<TraversalMode> {
        self.traversal_mode
    }

    pub fn traversal_systems(&self) -> &[TraversalPart] {
        &self.traversal_systems
    }

    pub fn detection_systems(&self) -> &[DetectionPart] {
        &self.detection_systems
    }

    /// True when no mode is set and nothing is attached.
    pub fn is_empty(&self) -> bool {
        self.traversal_mode.is_none()
            && self.traversal_systems.is_empty()
            && self.detection_systems.is_empty()
    }

    /// Renders the robot for console output.
    ///
    /// The first line names the traversal mode (`unassigned` if none). Each part
    /// block is emitted only when it has at least one entry, one part per line.
    ///
    /// ```
    /// use robot_builder::{Robot, TraversalMode, TraversalPart};
    ///
    /// let mut robot = Robot::new();
    /// robot.set_traversal_mode(TraversalMode::Wheeled);
    /// robot.attach_traversal_system(TraversalPart::FourWheels);
    /// assert_eq!(
    ///     robot.describe(),
    ///     "Robot is wheeled\nTraversal modules installed:\n- four_wheels\n"
    /// );
    /// ```
    pub fn describe(&self) -> String {
        let mode = self.traversal_mode.map_or("unassigned", TraversalMode::name);
        let mut out = format!("Robot is {mode}\n");

        if !self.traversal_systems.is_empty() {
            out.push_str("Traversal modules installed:\n");
            for part in &self.traversal_systems {
                out.push_str("- ");
                out.push_str(part.name());
                out.push('\n');
            }
        }

        if !self.detection_systems.is_empty() {
            out.push_str("Detection systems installed:\n");
            for part in &self.detection_systems {
                out.push_str("- ");
                out.push_str(part.name());
                out.push('\n');
            }
        }

        out
    }
}

impl fmt::Display for Robot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
