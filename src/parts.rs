//! Closed catalogs of traversal modes and installable parts.

use crate::error::RecipeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Overall locomotion category of a finished robot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalMode {
    Bipedal,
    Quadripedal,
    Wheeled,
    Flying,
}

/// A component contributing to locomotion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalPart {
    BipedalLegs,
    QuadripedalLegs,
    Wings,
    Blades,
    TwoWheels,
    FourWheels,
    Arms,
}

/// A component contributing to sensing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionPart {
    CameraDetectionSystem,
    InfraredDetectionSystem,
}

// Generates the name table, `ALL`, `Display` and `FromStr` for a catalog enum.
// Names match the serde representation.
macro_rules! catalog {
    ($ty:ident, $kind:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// Every variant, in catalog order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// The catalog name, e.g. as used in recipe files.
            pub fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = RecipeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok($ty::$variant),)+
                    _ => Err(RecipeError::UnknownPart {
                        kind: $kind,
                        name: s.to_string(),
                    }),
                }
            }
        }
    };
}

catalog!(TraversalMode, "traversal mode", {
    Bipedal => "bipedal",
    Quadripedal => "quadripedal",
    Wheeled => "wheeled",
    Flying => "flying",
});

catalog!(TraversalPart, "traversal system part", {
    BipedalLegs => "bipedal_legs",
    QuadripedalLegs => "quadripedal_legs",
    Wings => "wings",
    Blades => "blades",
    TwoWheels => "two_wheels",
    FourWheels => "four_wheels",
    Arms => "arms",
});

catalog!(DetectionPart, "detection system part", {
    CameraDetectionSystem => "camera_detection_system",
    InfraredDetectionSystem => "infrared_detection_system",
});
