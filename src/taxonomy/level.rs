//! Consciousness levels
//!
//! The sixteen levels of the Map of Consciousness. Levels calibrated below
//! 200 are the ones emotion clusters route *from*; the rest only ever show up
//! as resolution targets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A single level on the map, identified by its lowercase id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelId {
    Shame,
    Guilt,
    Apathy,
    Grief,
    Fear,
    Desire,
    Anger,
    Pride,
    Courage,
    Neutrality,
    Willingness,
    Acceptance,
    Reason,
    Love,
    Joy,
    Peace,
}

/// Broad grouping of levels by calibration band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelCategory {
    Healing,
    Empowerment,
    Spiritual,
    Enlightenment,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown level id: '{0}'")]
pub struct ParseLevelError(pub String);

impl LevelId {
    /// Every level, in ascending calibration order.
    pub const ALL: [LevelId; 16] = [
        LevelId::Shame,
        LevelId::Guilt,
        LevelId::Apathy,
        LevelId::Grief,
        LevelId::Fear,
        LevelId::Desire,
        LevelId::Anger,
        LevelId::Pride,
        LevelId::Courage,
        LevelId::Neutrality,
        LevelId::Willingness,
        LevelId::Acceptance,
        LevelId::Reason,
        LevelId::Love,
        LevelId::Joy,
        LevelId::Peace,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            LevelId::Shame => "shame",
            LevelId::Guilt => "guilt",
            LevelId::Apathy => "apathy",
            LevelId::Grief => "grief",
            LevelId::Fear => "fear",
            LevelId::Desire => "desire",
            LevelId::Anger => "anger",
            LevelId::Pride => "pride",
            LevelId::Courage => "courage",
            LevelId::Neutrality => "neutrality",
            LevelId::Willingness => "willingness",
            LevelId::Acceptance => "acceptance",
            LevelId::Reason => "reason",
            LevelId::Love => "love",
            LevelId::Joy => "joy",
            LevelId::Peace => "peace",
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            LevelId::Shame => "Shame",
            LevelId::Guilt => "Guilt",
            LevelId::Apathy => "Apathy",
            LevelId::Grief => "Grief",
            LevelId::Fear => "Fear",
            LevelId::Desire => "Desire",
            LevelId::Anger => "Anger",
            LevelId::Pride => "Pride",
            LevelId::Courage => "Courage",
            LevelId::Neutrality => "Neutrality",
            LevelId::Willingness => "Willingness",
            LevelId::Acceptance => "Acceptance",
            LevelId::Reason => "Reason",
            LevelId::Love => "Love",
            LevelId::Joy => "Joy",
            LevelId::Peace => "Peace",
        }
    }

    /// Hawkins calibration number.
    pub fn calibration(&self) -> u16 {
        match self {
            LevelId::Shame => 20,
            LevelId::Guilt => 30,
            LevelId::Apathy => 50,
            LevelId::Grief => 75,
            LevelId::Fear => 100,
            LevelId::Desire => 125,
            LevelId::Anger => 150,
            LevelId::Pride => 175,
            LevelId::Courage => 200,
            LevelId::Neutrality => 250,
            LevelId::Willingness => 310,
            LevelId::Acceptance => 350,
            LevelId::Reason => 400,
            LevelId::Love => 500,
            LevelId::Joy => 540,
            LevelId::Peace => 600,
        }
    }

    /// The healing counterpart the level is worked through with.
    pub fn antithesis(&self) -> &'static str {
        match self {
            LevelId::Shame => "Self-Compassion",
            LevelId::Guilt => "Forgiveness",
            LevelId::Apathy => "Willingness",
            LevelId::Grief => "Acceptance",
            LevelId::Fear => "Courage",
            LevelId::Desire => "Gratitude",
            LevelId::Anger => "Understanding",
            LevelId::Pride => "Humility",
            LevelId::Courage => "Integrity",
            LevelId::Neutrality => "Detachment",
            LevelId::Willingness => "Commitment",
            LevelId::Acceptance => "Forgiveness",
            LevelId::Reason => "Wisdom",
            LevelId::Love => "Unconditional Love",
            LevelId::Joy => "Bliss",
            LevelId::Peace => "Self-Realization",
        }
    }

    pub fn category(&self) -> LevelCategory {
        match self.calibration() {
            0..=199 => LevelCategory::Healing,
            200..=499 => LevelCategory::Empowerment,
            500..=599 => LevelCategory::Spiritual,
            _ => LevelCategory::Enlightenment,
        }
    }

    /// Courage (200) is the threshold from force to power.
    pub fn is_threshold(&self) -> bool {
        *self == LevelId::Courage
    }

    /// Whether emotion clusters may route to this level as their primary.
    pub fn is_routing_source(&self) -> bool {
        self.category() == LevelCategory::Healing
    }
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for LevelId {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        LevelId::ALL
            .iter()
            .copied()
            .find(|level| level.id() == normalized)
            .ok_or_else(|| ParseLevelError(s.trim().to_string()))
    }
}
