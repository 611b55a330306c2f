//! The builder contract and the recipe-driven builder that implements it.

use crate::error::RecipeError;
use crate::recipe::{RecipeBook, RobotRecipe};
use crate::robot::Robot;

/// Step-by-step construction of a [`Robot`].
///
/// Every builder must provide all four steps; there are no default bodies, so
/// an incomplete builder is rejected when it is compiled rather than silently
/// producing a half-built robot.
pub trait RobotBuilder {
    /// Discards the in-progress robot and starts a fresh, empty one.
    fn reset(&mut self);

    /// Attaches the archetype's locomotion parts and sets its traversal mode.
    fn build_traversal(&mut self);

    /// Attaches the archetype's sensing parts.
    fn build_detection_system(&mut self);

    /// Returns a snapshot of the current robot without resetting the builder.
    fn get_product(&self) -> Robot;
}

/// Progress of a builder's current robot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BuildStage {
    /// Empty robot, nothing attached yet.
    #[default]
    Reset,
    /// Traversal step has run.
    TraversalBuilt,
    /// Detection step has run.
    FullyBuilt,
}

/// A concrete builder whose archetype is a [`RobotRecipe`] rather than a type.
#[derive(Clone, Debug)]
pub struct RecipeBuilder {
    recipe: RobotRecipe,
    product: Robot,
    stage: BuildStage,
}

impl RecipeBuilder {
    pub fn new(recipe: RobotRecipe) -> Self {
        Self {
            recipe,
            product: Robot::new(),
            stage: BuildStage::Reset,
        }
    }

    /// Builder for [`RobotRecipe::android`].
    pub fn android() -> Self {
        Self::new(RobotRecipe::android())
    }

    /// Builder for [`RobotRecipe::autonomous_car`].
    pub fn autonomous_car() -> Self {
        Self::new(RobotRecipe::autonomous_car())
    }

    /// Builder for a named archetype from `book`.
    pub fn from_book(book: &RecipeBook, archetype: &str) -> Result<Self, RecipeError> {
        book.require(archetype).cloned().map(Self::new)
    }

    pub fn recipe(&self) -> &RobotRecipe {
        &self.recipe
    }

    pub fn stage(&self) -> BuildStage {
        self.stage
    }
}

impl RobotBuilder for RecipeBuilder {
    fn reset(&mut self) {
        self.product = Robot::new();
        self.stage = BuildStage::Reset;
    }

    fn build_traversal(&mut self) {
        tracing::debug!("Building traversal for '{}'", self.recipe.name);
        for &part in &self.recipe.traversal_systems {
            self.product.attach_traversal_system(part);
        }
        self.product.set_traversal_mode(self.recipe.traversal_mode);
        self.stage = BuildStage::TraversalBuilt;
    }

    fn build_detection_system(&mut self) {
        tracing::debug!("Building detection systems for '{}'", self.recipe.name);
        for &part in &self.recipe.detection_systems {
            self.product.attach_detection_system(part);
        }
        self.stage = BuildStage::FullyBuilt;
    }

    fn get_product(&self) -> Robot {
        self.product.clone()
    }
}
