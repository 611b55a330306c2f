//! Archetype recipes: the static tables that concrete builders assemble from.
//!
//! A [`RobotRecipe`] fixes one archetype's traversal mode and ordered part
//! lists. A [`RecipeBook`] collects recipes by archetype name and can be
//! loaded from, or written to, TOML:
//!
//! ```toml
//! [[archetype]]
//! name = "android"
//! traversal_mode = "bipedal"
//! traversal_systems = ["bipedal_legs", "arms"]
//! detection_systems = ["camera_detection_system"]
//! ```

use crate::error::RecipeError;
use crate::parts::{DetectionPart, TraversalMode, TraversalPart};
use serde::{Deserialize, Serialize};

/// Archetype name of the legged android recipe.
pub const ANDROID: &str = "android";

/// Archetype name of the wheeled autonomous vehicle recipe.
pub const AUTONOMOUS_CAR: &str = "autonomous_car";

/// The fixed parts list for one robot archetype.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotRecipe {
    /// Archetype name, unique within a [`RecipeBook`].
    pub name: String,

    /// Mode set by the traversal step.
    pub traversal_mode: TraversalMode,

    /// Parts attached by the traversal step, in order.
    #[serde(default)]
    pub traversal_systems: Vec<TraversalPart>,

    /// Parts attached by the detection step, in order.
    #[serde(default)]
    pub detection_systems: Vec<DetectionPart>,
}

impl RobotRecipe {
    pub fn new(name: impl Into<String>, traversal_mode: TraversalMode) -> Self {
        Self {
            name: name.into(),
            traversal_mode,
            traversal_systems: Vec::new(),
            detection_systems: Vec::new(),
        }
    }

    /// Appends traversal parts to the recipe (builder style).
    pub fn with_traversal_systems(
        mut self,
        parts: impl IntoIterator<Item = TraversalPart>,
    ) -> Self {
        self.traversal_systems.extend(parts);
        self
    }

    /// Appends detection parts to the recipe (builder style).
    pub fn with_detection_systems(
        mut self,
        parts: impl IntoIterator<Item = DetectionPart>,
    ) -> Self {
        self.detection_systems.extend(parts);
        self
    }

    /// Bipedal android with legs, arms and a camera.
    pub fn android() -> Self {
        Self::new(ANDROID, TraversalMode::Bipedal)
            .with_traversal_systems([TraversalPart::BipedalLegs, TraversalPart::Arms])
            .with_detection_systems([DetectionPart::CameraDetectionSystem])
    }

    /// Four-wheeled vehicle with infrared detection.
    pub fn autonomous_car() -> Self {
        Self::new(AUTONOMOUS_CAR, TraversalMode::Wheeled)
            .with_traversal_systems([TraversalPart::FourWheels])
            .with_detection_systems([DetectionPart::InfraredDetectionSystem])
    }
}

/// On-disk layout: a list of `[[archetype]]` tables.
#[derive(Debug, Default, Serialize, Deserialize)]
struct RecipeFile {
    #[serde(default, rename = "archetype")]
    archetypes: Vec<RobotRecipe>,
}

/// Recipes keyed by archetype name, kept in registration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecipeBook {
    recipes: Vec<RobotRecipe>,
}

impl RecipeBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in archetypes: [`ANDROID`] then [`AUTONOMOUS_CAR`].
    pub fn standard() -> Self {
        Self {
            recipes: vec![RobotRecipe::android(), RobotRecipe::autonomous_car()],
        }
    }

    /// Adds a recipe, rejecting blank or already-registered archetype names.
    pub fn register(&mut self, recipe: RobotRecipe) -> Result<(), RecipeError> {
        if recipe.name.trim().is_empty() {
            return Err(RecipeError::EmptyArchetype);
        }
        if self.get(&recipe.name).is_some() {
            return Err(RecipeError::DuplicateArchetype { name: recipe.name });
        }
        tracing::debug!("Registered archetype '{}'", recipe.name);
        self.recipes.push(recipe);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&RobotRecipe> {
        self.recipes.iter().find(|r| r.name == name)
    }

    /// Looks up a recipe, failing with [`RecipeError::UnknownArchetype`].
    pub fn require(&self, name: &str) -> Result<&RobotRecipe, RecipeError> {
        self.get(name).ok_or_else(|| RecipeError::UnknownArchetype {
            name: name.to_string(),
        })
    }

    /// Archetype names in registration order.
    pub fn archetypes(&self) -> impl Iterator<Item = &str> {
        self.recipes.iter().map(|r| r.name.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RobotRecipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Parses a book from TOML, applying the same checks as [`register`](Self::register).
    pub fn from_toml(content: &str) -> Result<Self, RecipeError> {
        let file: RecipeFile =
            toml::from_str(content).map_err(|e| RecipeError::Parse(e.to_string()))?;
        let mut book = Self::new();
        for recipe in file.archetypes {
            book.register(recipe)?;
        }
        Ok(book)
    }

    /// Serializes the book to TOML.
    pub fn to_toml(&self) -> Result<String, RecipeError> {
        let file = RecipeFile {
            archetypes: self.recipes.clone(),
        };
        toml::to_string(&file).map_err(|e| RecipeError::Serialize(e.to_string()))
    }
}

impl<'a> IntoIterator for &'a RecipeBook {
    type Item = &'a RobotRecipe;
    type IntoIter = std::slice::Iter<'a, RobotRecipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}
