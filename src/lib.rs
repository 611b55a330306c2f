//! # robot-builder
//!
//! Assembles [`Robot`]s step by step with the Builder pattern.
//!
//! A [`Director`] drives any [`RobotBuilder`] through a fixed sequence of
//! construction steps. Archetypes are data, not types: a [`RobotRecipe`] names
//! the traversal mode and parts, and a single [`RecipeBuilder`] assembles any
//! recipe, including ones loaded from TOML through a [`RecipeBook`].

pub mod builder;
pub mod director;
pub mod error;
pub mod parts;
pub mod recipe;
pub mod robot;

pub use builder::*;
pub use director::*;
pub use error::*;
pub use parts::*;
pub use recipe::*;
pub use robot::*;
