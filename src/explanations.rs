//! Level explanations
//!
//! The three-part "why this happens" text shown after routing. The coping-trap
//! paragraph is chosen from the situations the user ticked; situations never
//! influence which level is routed to.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::taxonomy::LevelId;

const GENERIC_COPING_TRAP: &str = "Suppressing or avoiding emotions creates inner pressure. This constant mental effort exhausts you and the feelings tend to resurface when pressure is off.";

/// Situation chips collected alongside the emotion selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Situation {
    Conflict,
    Silence,
    Criticism,
    BodySymptoms,
    Overthinking,
    UrgeToVent,
    UrgeToEscape,
    SocialMediaSpiral,
    AfterBreakup,
    BodyTightness,
    Rumination,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown situation: '{0}'")]
pub struct ParseSituationError(pub String);

impl Situation {
    pub const ALL: [Situation; 11] = [
        Situation::Conflict,
        Situation::Silence,
        Situation::Criticism,
        Situation::BodySymptoms,
        Situation::Overthinking,
        Situation::UrgeToVent,
        Situation::UrgeToEscape,
        Situation::SocialMediaSpiral,
        Situation::AfterBreakup,
        Situation::BodyTightness,
        Situation::Rumination,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Situation::Conflict => "conflict",
            Situation::Silence => "silence",
            Situation::Criticism => "criticism",
            Situation::BodySymptoms => "body-symptoms",
            Situation::Overthinking => "overthinking",
            Situation::UrgeToVent => "urge-to-vent",
            Situation::UrgeToEscape => "urge-to-escape",
            Situation::SocialMediaSpiral => "social-media-spiral",
            Situation::AfterBreakup => "after-breakup",
            Situation::BodyTightness => "body-tightness",
            Situation::Rumination => "rumination",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Situation::Conflict => "Conflict",
            Situation::Silence => "Silence/Uncertainty",
            Situation::Criticism => "Criticism",
            Situation::BodySymptoms => "Body symptoms (tight chest, jaw, gut)",
            Situation::Overthinking => "Overthinking/Rumination",
            Situation::UrgeToVent => "Urge to vent",
            Situation::UrgeToEscape => "Urge to escape",
            Situation::SocialMediaSpiral => "Social media spiral",
            Situation::AfterBreakup => "After breakup",
            Situation::BodyTightness => "Body tightness",
            Situation::Rumination => "Rumination",
        }
    }
}

impl fmt::Display for Situation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Situation {
    type Err = ParseSituationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Situation::ALL
            .iter()
            .copied()
            .find(|situation| situation.id() == normalized)
            .ok_or_else(|| ParseSituationError(s.trim().to_string()))
    }
}

/// Coping-trap paragraphs; only `default` is mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopingTraps {
    pub default: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venting: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escape: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overthinking: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflict: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelExplanation {
    /// Stored past experience + present trigger
    pub reservoir: String,
    pub coping_traps: CopingTraps,
    pub third_angle: String,
}

impl LevelExplanation {
    /// Situation-specific coping trap, in priority order: venting, escape,
    /// overthinking, conflict, then the default.
    pub fn coping_trap(&self, situations: &[Situation]) -> &str {
        let traps = &self.coping_traps;
        let candidates = [
            (Situation::UrgeToVent, &traps.venting),
            (Situation::UrgeToEscape, &traps.escape),
            (Situation::Overthinking, &traps.overthinking),
            (Situation::Conflict, &traps.conflict),
        ];

        candidates
            .into_iter()
            .find_map(|(situation, text)| match text {
                Some(text) if situations.contains(&situation) => Some(text.as_str()),
                _ => None,
            })
            .unwrap_or(&traps.default)
    }
}

/// Explanations keyed by level
#[derive(Debug, Clone, Default)]
pub struct ExplanationCatalog {
    explanations: HashMap<LevelId, LevelExplanation>,
}

impl ExplanationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, level: LevelId, explanation: LevelExplanation) {
        self.explanations.insert(level, explanation);
    }

    pub fn get(&self, level: LevelId) -> Option<&LevelExplanation> {
        self.explanations.get(&level)
    }

    /// Coping-trap text for a level; levels without an explanation get a
    /// generic paragraph.
    pub fn coping_trap_text(&self, level: LevelId, situations: &[Situation]) -> &str {
        match self.get(level) {
            Some(explanation) => explanation.coping_trap(situations),
            None => GENERIC_COPING_TRAP,
        }
    }

    pub fn standard() -> Self {
        let mut catalog = Self::new();

        catalog.insert(LevelId::Shame, explanation(
            "Past experiences where you felt exposed, rejected, or criticized get activated by current triggers. Shame isn't about what happened now; it's about old wounds that haven't fully healed.",
            CopingTraps {
                default: "Hiding or isolating reinforces the shame cycle. When you believe you're fundamentally flawed, withdrawing seems safer, but it actually strengthens the shame identity.".into(),
                venting: Some("Venting about shame often rehearses the \"I'm broken\" story. Talking about how defective you feel can reinforce the shame pattern rather than release it.".into()),
                escape: Some("Trying to escape shame through distraction or numbing only postpones it. The feeling returns, often stronger, because the underlying belief hasn't been addressed.".into()),
                overthinking: Some("Ruminating on \"what's wrong with me\" keeps you stuck. Overthinking strengthens the identity that you ARE the shame, rather than someone experiencing it.".into()),
                conflict: None,
            },
            "Shame = \"I am bad.\" Guilt = \"I did something bad.\" Shame attacks your identity; guilt addresses your actions. Seeing the difference is the first step to self-compassion.",
        ));

        catalog.insert(LevelId::Guilt, explanation(
            "Old actions or choices that violated your values get triggered by current situations. Guilt pulls up stored remorse that hasn't been processed or forgiven.",
            CopingTraps {
                default: "Over-apologizing or self-punishment keeps guilt alive. Beating yourself up doesn't resolve guilt; it creates a loop of suffering that prevents genuine atonement.".into(),
                venting: Some("Venting guilt can rehearse the \"I'm a bad person\" narrative. It may feel like accountability, but it often strengthens the guilt identity.".into()),
                escape: Some("Avoiding guilt through distraction only delays the reckoning. Unresolved guilt resurfaces as self-sabotage or relationship patterns.".into()),
                overthinking: Some("Ruminating on \"what I should have done\" traps you in the past and keeps you from making amends or moving forward.".into()),
                conflict: None,
            },
            "Guilt shows you your values. Examined with compassion, it becomes a guidepost for alignment, not a weapon against yourself.",
        ));

        catalog.insert(LevelId::Fear, explanation(
            "Past fears and anxieties get triggered by present uncertainty. What you feel isn't only about now; it's connected to stored fear energy from the past.",
            CopingTraps {
                default: "Suppressing or avoiding fear creates inner pressure. The constant effort to control or escape it exhausts you, and the fear resurfaces when pressure is off.".into(),
                venting: Some("Expressing fear outwardly can amplify it. Venting rehearses the anxious state and strengthens worry and catastrophizing.".into()),
                escape: Some("Escaping fear through distraction only postpones it. It returns because the underlying threat perception hasn't been addressed.".into()),
                overthinking: Some("Ruminating on worst-case scenarios keeps fear alive and makes it feel more real.".into()),
                conflict: None,
            },
            "Stress is fear of the future. When fear dissolves, stress does too. Most of what we call stress is unexamined fear energy stirred by circumstances.",
        ));

        catalog.insert(LevelId::Anger, explanation(
            "Stored anger from past injustices, crossed boundaries, or unmet needs gets activated by current triggers. The intensity is fueled by accumulated resentment.",
            CopingTraps {
                default: "Suppressing anger creates explosive pressure. Trying to \"be nice\" while anger simmers builds tension that eventually erupts, often disproportionately.".into(),
                venting: Some("Venting anger rehearses the state. It may feel like release, but it strengthens the pattern and keeps you reactive.".into()),
                escape: Some("Escaping anger through distraction only delays it. It resurfaces as passive-aggression or sudden outbursts.".into()),
                overthinking: None,
                conflict: Some("Engaging in conflict while angry escalates the situation. Reacting from anger creates more anger in yourself and others.".into()),
            },
            "Anger shows you where your boundaries are. Underneath it is often a need for respect, safety, or validation. Anger is information about what matters to you.",
        ));

        catalog.insert(LevelId::Desire, explanation(
            "Past experiences of lack or unmet needs get triggered by current wants. The craving is connected to deeper needs for fulfillment or safety.",
            CopingTraps {
                default: "Chasing desires without examining them creates a cycle. Giving in to every urge strengthens the craving and makes genuine satisfaction harder to find.".into(),
                venting: Some("Talking about what you want can increase the intensity of the desire rather than reduce it.".into()),
                escape: Some("Using substances or behaviors to escape desire creates dependency. Temporary relief becomes a pattern that needs more and more.".into()),
                overthinking: Some("Ruminating on what you want strengthens the fixation and makes the object of desire feel more necessary.".into()),
                conflict: None,
            },
            "Desire shows where you're looking for fulfillment outside yourself. Examined, it points to deeper needs for connection, meaning, or peace.",
        ));

        catalog.insert(LevelId::Grief, explanation(
            "Past losses and disappointments get activated by situations that remind you of what's missing. The sadness is connected to grief that hasn't fully moved through you.",
            CopingTraps {
                default: "Suppressing grief creates numbness or delayed processing. Trying to \"stay strong\" only postpones the healing.".into(),
                venting: Some("Getting stuck expressing grief can keep you in the pain. Expression without movement can become a pattern.".into()),
                escape: Some("Escaping grief through distraction prevents healing. Grief needs to be felt and moved through.".into()),
                overthinking: Some("Ruminating on what's lost traps you in the past and keeps you from finding meaning.".into()),
                conflict: None,
            },
            "Grief is the price of love. Letting it move through you honors what was lost and makes space for what remains.",
        ));

        catalog.insert(LevelId::Apathy, explanation(
            "Past overwhelm, exhaustion, or repeated disappointment leads to shutdown. The numbness is a protective response to accumulated stress.",
            CopingTraps {
                default: "Staying in apathy becomes its own trap. Numbness feels safer than feeling, but it also prevents movement and reconnection with life.".into(),
                venting: None,
                escape: Some("Using apathy to escape feeling creates more numbness. The more you disconnect, the harder it is to reconnect.".into()),
                overthinking: Some("Ruminating on \"why bother\" reinforces the belief that nothing matters.".into()),
                conflict: None,
            },
            "Apathy isn't failure; it's a tired nervous system. It shows you where you need rest, boundaries, and gentle reconnection.",
        ));

        catalog.insert(LevelId::Pride, explanation(
            "Past experiences of being wrong, criticized, or vulnerable get activated when your position is challenged. The defensiveness protects old wounds.",
            CopingTraps {
                default: "Holding a superior position creates isolation. Pride needs others to be \"less than\" for you to feel secure.".into(),
                venting: Some("Venting about how right you are reinforces the defensive identity.".into()),
                escape: None,
                overthinking: None,
                conflict: Some("Engaging in conflict from pride escalates defensiveness. \"I'm right\" creates rigidity and blocks understanding.".into()),
            },
            "Pride protects vulnerability. Underneath it is often fear of being wrong, exposed, or judged.",
        ));

        catalog
    }
}

fn explanation(reservoir: &str, coping_traps: CopingTraps, third_angle: &str) -> LevelExplanation {
    LevelExplanation {
        reservoir: reservoir.to_string(),
        coping_traps,
        third_angle: third_angle.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_routing_level_is_explained() {
        let catalog = ExplanationCatalog::standard();
        for level in LevelId::ALL.iter().filter(|l| l.is_routing_source()) {
            assert!(catalog.get(*level).is_some(), "{level} has no explanation");
        }
    }

    #[test]
    fn test_situation_priority() {
        let catalog = ExplanationCatalog::standard();
        let fear = catalog.get(LevelId::Fear).unwrap();

        let all = [Situation::Conflict, Situation::Overthinking, Situation::UrgeToEscape, Situation::UrgeToVent];
        assert_eq!(catalog.coping_trap_text(LevelId::Fear, &all), fear.coping_traps.venting.as_deref().unwrap());

        let text = catalog.coping_trap_text(LevelId::Fear, &[Situation::Overthinking, Situation::UrgeToEscape]);
        assert_eq!(text, fear.coping_traps.escape.as_deref().unwrap());

        let text = catalog.coping_trap_text(LevelId::Fear, &[Situation::Silence]);
        assert_eq!(text, fear.coping_traps.default);
    }

    #[test]
    fn test_missing_variant_falls_through() {
        let catalog = ExplanationCatalog::standard();
        let apathy = catalog.get(LevelId::Apathy).unwrap();
        // apathy has no venting paragraph, so overthinking is next in line
        let text = catalog.coping_trap_text(LevelId::Apathy, &[Situation::UrgeToVent, Situation::Overthinking]);
        assert_eq!(text, apathy.coping_traps.overthinking.as_deref().unwrap());

        let anger = catalog.get(LevelId::Anger).unwrap();
        let text = catalog.coping_trap_text(LevelId::Anger, &[Situation::Conflict]);
        assert_eq!(text, anger.coping_traps.conflict.as_deref().unwrap());
    }

    #[test]
    fn test_unexplained_level_gets_generic_text() {
        let catalog = ExplanationCatalog::standard();
        assert_eq!(catalog.coping_trap_text(LevelId::Courage, &[Situation::UrgeToVent]), GENERIC_COPING_TRAP);
    }

    #[test]
    fn test_parse_situations() {
        assert_eq!("urge-to-vent".parse::<Situation>().unwrap(), Situation::UrgeToVent);
        assert_eq!(" Body-Symptoms ".parse::<Situation>().unwrap(), Situation::BodySymptoms);
        assert!("venting".parse::<Situation>().is_err());
        for situation in Situation::ALL {
            let json = serde_json::to_string(&situation).unwrap();
            assert_eq!(json, format!("\"{}\"", situation.id()));
        }
    }
}
