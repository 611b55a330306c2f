//! The director: runs any [`RobotBuilder`] through the fixed assembly order.

use crate::builder::{RecipeBuilder, RobotBuilder};
use crate::recipe::RecipeBook;
use crate::robot::Robot;

/// Stateless orchestrator of the build steps.
///
/// The director never inspects the builder it is handed; any type (or trait
/// object) implementing [`RobotBuilder`] goes through the same sequence.
#[derive(Clone, Copy, Debug, Default)]
pub struct Director;

impl Director {
    pub fn new() -> Self {
        Self
    }

    /// Runs `build_traversal`, then `build_detection_system`, then returns
    /// `get_product`.
    ///
    /// The builder is not reset first; pass a fresh or freshly reset builder
    /// to get a clean robot.
    ///
    /// ```
    /// use robot_builder::{Director, RecipeBuilder, TraversalMode};
    ///
    /// let robot = Director::new().make_robot(&mut RecipeBuilder::autonomous_car());
    /// assert_eq!(robot.traversal_mode(), Some(TraversalMode::Wheeled));
    /// ```
    pub fn make_robot<B: RobotBuilder + ?Sized>(&self, builder: &mut B) -> Robot {
        builder.build_traversal();
        builder.build_detection_system();
        builder.get_product()
    }

    /// Builds one robot per archetype in `book`, in registration order.
    ///
    /// Each archetype gets its own builder.
    pub fn make_all(&self, book: &RecipeBook) -> Vec<(String, Robot)> {
        book.iter()
            .map(|recipe| {
                tracing::debug!("Directing build of '{}'", recipe.name);
                let mut builder = RecipeBuilder::new(recipe.clone());
                (recipe.name.clone(), self.make_robot(&mut builder))
            })
            .collect()
    }
}
