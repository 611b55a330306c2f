// tests/director_scenarios.rs
use proptest::prelude::*;
use robot_builder::{
    BuildStage, DetectionPart, Director, RecipeBook, RecipeBuilder, Robot, RobotBuilder,
    RobotRecipe, TraversalMode, TraversalPart,
};
use std::cell::RefCell;

/// Builder that records the order in which the director calls it.
struct RecordingBuilder {
    inner: RecipeBuilder,
    calls: RefCell<Vec<&'static str>>,
}

impl RecordingBuilder {
    fn new(inner: RecipeBuilder) -> Self {
        Self {
            inner,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl RobotBuilder for RecordingBuilder {
    fn reset(&mut self) {
        self.calls.borrow_mut().push("reset");
        self.inner.reset();
    }

    fn build_traversal(&mut self) {
        self.calls.borrow_mut().push("build_traversal");
        self.inner.build_traversal();
    }

    fn build_detection_system(&mut self) {
        self.calls.borrow_mut().push("build_detection_system");
        self.inner.build_detection_system();
    }

    fn get_product(&self) -> Robot {
        self.calls.borrow_mut().push("get_product");
        self.inner.get_product()
    }
}

fn assert_matches_recipe(robot: &Robot, recipe: &RobotRecipe) {
    assert_eq!(robot.traversal_mode(), Some(recipe.traversal_mode));
    assert_eq!(robot.traversal_systems(), recipe.traversal_systems.as_slice());
    assert_eq!(robot.detection_systems(), recipe.detection_systems.as_slice());
}

#[test]
fn test_android_scenario() {
    let mut builder = RecipeBuilder::android();
    let robot = Director::new().make_robot(&mut builder);

    assert_eq!(robot.traversal_mode(), Some(TraversalMode::Bipedal));
    assert_eq!(
        robot.traversal_systems(),
        &[TraversalPart::BipedalLegs, TraversalPart::Arms]
    );
    assert_eq!(
        robot.detection_systems(),
        &[DetectionPart::CameraDetectionSystem]
    );
    assert_eq!(builder.stage(), BuildStage::FullyBuilt);

    assert_eq!(
        robot.describe(),
        "Robot is bipedal\n\
         Traversal modules installed:\n\
         - bipedal_legs\n\
         - arms\n\
         Detection systems installed:\n\
         - camera_detection_system\n"
    );
}

#[test]
fn test_autonomous_car_scenario() {
    let robot = Director::new().make_robot(&mut RecipeBuilder::autonomous_car());

    assert_eq!(robot.traversal_mode(), Some(TraversalMode::Wheeled));
    assert_eq!(robot.traversal_systems(), &[TraversalPart::FourWheels]);
    assert_eq!(
        robot.detection_systems(),
        &[DetectionPart::InfraredDetectionSystem]
    );
    assert!(robot.describe().contains("Traversal modules installed:\n- four_wheels\n"));
    assert!(
        robot
            .describe()
            .contains("Detection systems installed:\n- infrared_detection_system\n")
    );
}

#[test]
fn test_director_order_is_archetype_independent() {
    let director = Director::new();
    let mut sequences = Vec::new();

    for recipe in &RecipeBook::standard() {
        let mut builder = RecordingBuilder::new(RecipeBuilder::new(recipe.clone()));
        let robot = director.make_robot(&mut builder);
        assert_matches_recipe(&robot, recipe);
        assert_eq!(builder.inner.stage(), BuildStage::FullyBuilt);
        sequences.push(builder.calls.into_inner());
    }

    assert_eq!(sequences.len(), 2);
    assert_eq!(
        sequences[0],
        vec!["build_traversal", "build_detection_system", "get_product"]
    );
    assert_eq!(sequences[0], sequences[1]);
}

#[test]
fn test_director_accepts_trait_objects() {
    let director = Director::new();
    let mut builders: Vec<Box<dyn RobotBuilder>> = vec![
        Box::new(RecipeBuilder::android()),
        Box::new(RecipeBuilder::autonomous_car()),
    ];

    let modes: Vec<_> = builders
        .iter_mut()
        .map(|b| director.make_robot(b.as_mut()).traversal_mode())
        .collect();

    assert_eq!(
        modes,
        vec![Some(TraversalMode::Bipedal), Some(TraversalMode::Wheeled)]
    );
}

#[test]
fn test_reset_reproduces_fresh_build() {
    let director = Director::new();
    let fresh = director.make_robot(&mut RecipeBuilder::android());

    let mut reused = RecipeBuilder::android();
    director.make_robot(&mut reused);
    reused.reset();
    let rebuilt = director.make_robot(&mut reused);

    assert_eq!(fresh, rebuilt);
}

#[test]
fn test_get_product_is_read_only() {
    let mut builder = RecipeBuilder::autonomous_car();
    builder.build_traversal();
    builder.build_detection_system();

    let first = builder.get_product();
    let second = builder.get_product();
    assert_eq!(first, second);
    assert_eq!(builder.stage(), BuildStage::FullyBuilt);
}

#[test]
fn test_rebuilding_without_reset_accumulates_parts() {
    let director = Director::new();
    let mut builder = RecipeBuilder::autonomous_car();
    director.make_robot(&mut builder);
    let robot = director.make_robot(&mut builder);

    assert_eq!(
        robot.traversal_systems(),
        &[TraversalPart::FourWheels, TraversalPart::FourWheels]
    );
    assert_eq!(robot.traversal_mode(), Some(TraversalMode::Wheeled));
}

#[test]
fn test_make_all_from_toml_book() {
    let content = r#"
[[archetype]]
name = "quadcopter"
traversal_mode = "flying"
traversal_systems = ["blades", "blades", "blades", "blades"]
detection_systems = ["camera_detection_system", "infrared_detection_system"]

[[archetype]]
name = "scout"
traversal_mode = "quadripedal"
traversal_systems = ["quadripedal_legs"]
"#;
    let book = RecipeBook::from_toml(content).unwrap();
    let robots = Director::new().make_all(&book);

    assert_eq!(robots.len(), 2);
    assert_eq!(robots[0].0, "quadcopter");
    assert_matches_recipe(&robots[0].1, book.get("quadcopter").unwrap());

    let (name, scout) = &robots[1];
    assert_eq!(name, "scout");
    assert_eq!(
        scout.describe(),
        "Robot is quadripedal\nTraversal modules installed:\n- quadripedal_legs\n"
    );
}

fn recipe_strategy() -> impl Strategy<Value = RobotRecipe> {
    (
        prop::sample::select(TraversalMode::ALL),
        prop::collection::vec(prop::sample::select(TraversalPart::ALL), 0..8),
        prop::collection::vec(prop::sample::select(DetectionPart::ALL), 0..4),
    )
        .prop_map(|(mode, traversal, detection)| {
            RobotRecipe::new("generated", mode)
                .with_traversal_systems(traversal)
                .with_detection_systems(detection)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Any recipe yields exactly its parts, and a reset builder rebuilds the same robot.
    #[test]
    fn prop_build_matches_recipe_after_reset(recipe in recipe_strategy()) {
        let director = Director::new();
        let mut builder = RecipeBuilder::new(recipe.clone());

        let first = director.make_robot(&mut builder);
        prop_assert_eq!(first.traversal_mode(), Some(recipe.traversal_mode));
        prop_assert_eq!(first.traversal_systems(), recipe.traversal_systems.as_slice());
        prop_assert_eq!(first.detection_systems(), recipe.detection_systems.as_slice());

        builder.reset();
        let second = director.make_robot(&mut builder);
        prop_assert_eq!(first, second);
    }

    /// Rendering emits one line per part plus a header per non-empty block.
    #[test]
    fn prop_describe_line_count(recipe in recipe_strategy()) {
        let robot = Director::new().make_robot(&mut RecipeBuilder::new(recipe.clone()));
        let text = robot.describe();

        let headers = usize::from(!recipe.traversal_systems.is_empty())
            + usize::from(!recipe.detection_systems.is_empty());
        let expected =
            1 + headers + recipe.traversal_systems.len() + recipe.detection_systems.len();

        prop_assert_eq!(text.lines().count(), expected);
        prop_assert_eq!(
            text.contains("Traversal modules installed:"),
            !recipe.traversal_systems.is_empty()
        );
        prop_assert_eq!(
            text.contains("Detection systems installed:"),
            !recipe.detection_systems.is_empty()
        );
    }
}
