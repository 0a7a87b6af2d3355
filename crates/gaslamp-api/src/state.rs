//! Shared application state.

use std::sync::Arc;

use gaslamp_core::clock::Clock;
use gaslamp_core::generator::{ImageGenerator, TextGenerator};
use gaslamp_core::store::CaseRepository;

/// Application state shared across all request handlers.
///
/// Everything here is a stateless capability handed to the context handlers
/// on each call; no handler mutates the state itself.
#[derive(Clone)]
pub struct AppState {
    /// Source of timestamps.
    pub clock: Arc<dyn Clock>,
    /// Case document store.
    pub cases: Arc<dyn CaseRepository>,
    /// The narrative voice: writes cases, speaks as suspects.
    pub narrative: Arc<dyn TextGenerator>,
    /// The analytic voice: mines testimony, validates drafts, weighs
    /// theories.
    pub analytic: Arc<dyn TextGenerator>,
    /// The illustrator, when an image provider is configured. `None`
    /// disables crime-scene and testimony illustrations.
    pub illustrator: Option<Arc<dyn ImageGenerator>>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        cases: Arc<dyn CaseRepository>,
        narrative: Arc<dyn TextGenerator>,
        analytic: Arc<dyn TextGenerator>,
        illustrator: Option<Arc<dyn ImageGenerator>>,
    ) -> Self {
        Self {
            clock,
            cases,
            narrative,
            analytic,
            illustrator,
        }
    }
}
