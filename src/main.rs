//! Builds every standard archetype through the director and prints it.

use anyhow::Result;
use robot_builder::{Director, RecipeBook, RecipeBuilder};
use tracing_subscriber::EnvFilter;

/// Log filter from a `RUST_LOG`-style directive string, `warn` when absent or invalid.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn main() -> Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .init();

    let director = Director::new();
    let book = RecipeBook::standard();

    for archetype in book.archetypes() {
        let mut builder = RecipeBuilder::from_book(&book, archetype)?;
        let robot = director.make_robot(&mut builder);
        tracing::info!("Assembled '{}'", archetype);
        println!("{robot}");
    }

    Ok(())
}
