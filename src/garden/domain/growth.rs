//! Species assignment and progress-derived growth stages.

use super::{ParseGrowthStageError, ParseSpeciesError};
use crate::tree::domain::{Progress, TreeId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bonsai species rendered for a planted tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    /// Weeping willow specimen.
    Willow,
    /// Japanese maple specimen.
    Maple,
    /// Mountain pine specimen.
    Pine,
    /// Cherry blossom specimen.
    Cherry,
}

impl Species {
    /// Returns the canonical storage representation, which doubles as the
    /// specimen name in model asset filenames.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Willow => "Willow",
            Self::Maple => "Maple",
            Self::Pine => "Pine",
            Self::Cherry => "Cherry",
        }
    }

    /// Derives the species from a tree's content identity.
    ///
    /// The first hex digit of the identity selects the species, so replanting
    /// the same tree always grows the same specimen.
    #[must_use]
    pub fn for_tree(tree_id: &TreeId) -> Self {
        let seed = tree_id
            .as_str()
            .chars()
            .next()
            .and_then(|c| c.to_digit(16))
            .unwrap_or(0);
        match seed {
            0..=3 => Self::Willow,
            4..=7 => Self::Maple,
            8..=11 => Self::Pine,
            _ => Self::Cherry,
        }
    }
}

impl TryFrom<&str> for Species {
    type Error = ParseSpeciesError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "willow" => Ok(Self::Willow),
            "maple" => Ok(Self::Maple),
            "pine" => Ok(Self::Pine),
            "cherry" => Ok(Self::Cherry),
            _ => Err(ParseSpeciesError(value.to_owned())),
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual growth stage of a planted bonsai.
///
/// Stages are stored by their numeric name because model assets are keyed
/// `{specimen}-{stage}.glb`; the serialised form matches storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrowthStage {
    /// Nothing completed yet.
    #[serde(rename = "1")]
    Seedling,
    /// Less than half of the subtasks are complete.
    #[serde(rename = "2")]
    Sprout,
    /// At least half of the subtasks are complete.
    #[serde(rename = "3")]
    Budding,
    /// Every subtask is complete.
    #[serde(rename = "4")]
    FullBloom,
}

impl GrowthStage {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Seedling => "1",
            Self::Sprout => "2",
            Self::Budding => "3",
            Self::FullBloom => "4",
        }
    }

    /// Derives the stage shown for the given completion counts.
    ///
    /// A tree without descendants stays a seedling until it blooms through
    /// its own completion, which these counts never include.
    #[must_use]
    pub const fn for_progress(progress: Progress) -> Self {
        let completed = progress.completed();
        let total = progress.total();
        if total == 0 || completed == 0 {
            return Self::Seedling;
        }
        if completed == total {
            return Self::FullBloom;
        }
        if completed.saturating_mul(2) < total {
            Self::Sprout
        } else {
            Self::Budding
        }
    }
}

impl TryFrom<&str> for GrowthStage {
    type Error = ParseGrowthStageError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "1" => Ok(Self::Seedling),
            "2" => Ok(Self::Sprout),
            "3" => Ok(Self::Budding),
            "4" => Ok(Self::FullBloom),
            _ => Err(ParseGrowthStageError(value.to_owned())),
        }
    }
}

impl fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
