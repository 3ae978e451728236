//! Disambiguation Resolver
//!
//! Reduces the levels implicated by a selection to one primary and an ordered
//! list of secondaries. Override rules are plain records evaluated in order;
//! when none applies, a fixed priority table decides.

use serde::{Deserialize, Serialize};

use crate::taxonomy::LevelId;

/// Landing level when nothing was implicated
pub const FALLBACK_LEVEL: LevelId = LevelId::Fear;

/// Tie-break order, lowest priority first
pub const STANDARD_PRIORITY: [LevelId; 8] = [
    LevelId::Pride,
    LevelId::Apathy,
    LevelId::Shame,
    LevelId::Guilt,
    LevelId::Grief,
    LevelId::Desire,
    LevelId::Anger,
    LevelId::Fear,
];

/// Outcome of disambiguation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub primary: LevelId,
    pub secondaries: Vec<LevelId>,
}

impl Resolution {
    fn single(primary: LevelId) -> Self {
        Self {
            primary,
            secondaries: Vec::new(),
        }
    }

    /// Primary followed by the secondaries, the form fed back for re-resolution.
    pub fn levels(&self) -> Vec<LevelId> {
        std::iter::once(self.primary).chain(self.secondaries.iter().copied()).collect()
    }
}

/// "When all of `requires` are selected, `primary` wins and `lead` comes
/// first among the secondaries."
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideRule {
    pub name: String,
    pub requires: Vec<LevelId>,
    pub primary: LevelId,
    pub lead: Vec<LevelId>,
}

impl OverrideRule {
    pub fn new(name: impl Into<String>, requires: &[LevelId], primary: LevelId, lead: &[LevelId]) -> Self {
        Self {
            name: name.into(),
            requires: requires.to_vec(),
            primary,
            lead: lead.to_vec(),
        }
    }

    fn applies_to(&self, levels: &[LevelId]) -> bool {
        self.requires.iter().all(|l| levels.contains(l))
    }

    fn apply(&self, levels: &[LevelId]) -> Resolution {
        let mut secondaries: Vec<LevelId> = self.lead.iter().copied().filter(|l| *l != self.primary).collect();
        for level in levels {
            if *level != self.primary && !secondaries.contains(level) {
                secondaries.push(*level);
            }
        }
        Resolution {
            primary: self.primary,
            secondaries,
        }
    }
}

/// Ordered priority table. Levels missing from it rank below every listed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityTable(Vec<LevelId>);

impl PriorityTable {
    /// `ascending` runs from lowest to highest priority.
    pub fn new(ascending: impl IntoIterator<Item = LevelId>) -> Self {
        Self(ascending.into_iter().collect())
    }

    pub fn rank(&self, level: LevelId) -> i32 {
        self.0
            .iter()
            .position(|l| *l == level)
            .map(|p| p as i32)
            .unwrap_or(-1)
    }
}

impl Default for PriorityTable {
    fn default() -> Self {
        Self::new(STANDARD_PRIORITY)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolver {
    rules: Vec<OverrideRule>,
    priority: PriorityTable,
    fallback: LevelId,
}

impl Resolver {
    pub fn new(rules: Vec<OverrideRule>, priority: PriorityTable) -> Self {
        Self {
            rules,
            priority,
            fallback: FALLBACK_LEVEL,
        }
    }

    /// Shame+Guilt and Fear+Apathy overrides over the standard priority table.
    pub fn standard() -> Self {
        Self::new(
            vec![
                // guilt is about an action, which is workable before identity-level shame
                OverrideRule::new(
                    "shame-guilt",
                    &[LevelId::Shame, LevelId::Guilt],
                    LevelId::Guilt,
                    &[LevelId::Shame],
                ),
                // shutdown sits underneath the anxiety
                OverrideRule::new(
                    "fear-apathy",
                    &[LevelId::Fear, LevelId::Apathy],
                    LevelId::Apathy,
                    &[LevelId::Fear],
                ),
            ],
            PriorityTable::default(),
        )
    }

    pub fn with_fallback(mut self, level: LevelId) -> Self {
        self.fallback = level;
        self
    }

    pub fn rules(&self) -> &[OverrideRule] {
        &self.rules
    }

    pub fn resolve(&self, selected: &[LevelId]) -> Resolution {
        let mut levels: Vec<LevelId> = Vec::with_capacity(selected.len());
        for level in selected {
            if !levels.contains(level) {
                levels.push(*level);
            }
        }

        match levels.as_slice() {
            [] => return Resolution::single(self.fallback),
            [only] => return Resolution::single(*only),
            _ => {}
        }

        if let Some(rule) = self.rules.iter().find(|r| r.applies_to(&levels)) {
            return rule.apply(&levels);
        }

        // stable: equal ranks keep their selection order
        levels.sort_by_key(|l| std::cmp::Reverse(self.priority.rank(*l)));
        let primary = levels.remove(0);
        Resolution {
            primary,
            secondaries: levels,
        }
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::standard()
    }
}
