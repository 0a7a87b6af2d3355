//! Shared test stubs and fixtures for the Gaslamp mystery engine.

mod clock;
mod fixtures;
mod generators;
mod store;

pub use clock::FixedClock;
pub use fixtures::{sample_case, sample_character, sample_scene};
pub use generators::{
    FailingGenerator, FailingImageGenerator, ScriptedGenerator, StaticImageGenerator,
};
pub use store::{FailingCaseRepository, InMemoryCaseRepository};
