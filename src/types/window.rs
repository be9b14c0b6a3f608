use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive year range a trained model artifact is valid for.
///
/// The window travels with the artifact (see [`crate::ModelArtifact`]) rather
/// than living as a code constant: it reflects the training coverage of one
/// particular model, and retraining with a new coverage window must not
/// require a code change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearWindow {
    pub start: i32,
    pub end: i32,
}

impl YearWindow {
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, year: i32) -> bool {
        self.start <= year && year <= self.end
    }

    /// True when both requested boundary years fall inside the window.
    pub fn covers(&self, from_year: i32, to_year: i32) -> bool {
        self.contains(from_year) && self.contains(to_year)
    }
}

impl fmt::Display for YearWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Training coverage stamped onto artifacts produced by the shipped trainer.
pub const DEFAULT_WINDOW: YearWindow = YearWindow::new(2022, 2030);
