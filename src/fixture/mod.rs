//! YAML descriptions of mock trees, loaded from memory or from disk.

mod yaml_fixture;

pub use yaml_fixture::{Fixture, FixtureContent, FixtureError};
