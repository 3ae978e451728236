//! The authored emotion catalog
//!
//! Every label and synonym lives in exactly one cluster. Secondary levels are
//! either calibrated above 200 (the way through) or rank below the level that
//! would surface them, so expanding them never changes which primary wins.

use super::{ClusterColor, EmotionCluster, EmotionItem, LevelId};

const SHAME_GUILT_HINT: &str = "Shame = bad about me. Guilt = bad about what I did.";

pub(super) fn standard_clusters() -> Vec<EmotionCluster> {
    vec![
        EmotionCluster::new("shame-exposure", "Shame/Exposure", LevelId::Shame, ClusterColor::Violet)
            .with_secondaries([LevelId::Courage])
            .with_chapters(["suppression"])
            .with_emotion(
                EmotionItem::new("Shame")
                    .with_synonyms([
                        "ashamed",
                        "worthless",
                        "not good enough",
                        "inadequate",
                        "unlovable",
                        "defective",
                        "flawed",
                    ])
                    .with_hint(SHAME_GUILT_HINT),
            )
            .with_emotion(
                EmotionItem::new("Embarrassed").with_synonyms(["humiliated", "mortified", "exposed", "disgusting"]),
            ),
        EmotionCluster::new("self-blame", "Self-blame", LevelId::Guilt, ClusterColor::Garnet)
            .with_secondaries([LevelId::Acceptance])
            .with_chapters(["repression"])
            .with_emotion(
                EmotionItem::new("Guilt")
                    .with_synonyms(["guilty", "remorse", "regret", "my fault", "atone"])
                    .with_hint(SHAME_GUILT_HINT),
            )
            .with_emotion(EmotionItem::new("Beat myself up").with_synonyms([
                "ashamed of what I did",
                "I shouldn't have…",
                "over-apologizing",
            ])),
        EmotionCluster::new("anxious-stress", "Anxious/Stress", LevelId::Fear, ClusterColor::Sky)
            .with_secondaries([LevelId::Courage])
            .with_chapters(["stress"])
            .with_emotion(EmotionItem::new("Fear").with_synonyms(["scared", "afraid"]))
            .with_emotion(EmotionItem::new("Anxious").with_synonyms([
                "worried",
                "nervous",
                "jittery",
                "on edge",
                "tense",
            ]))
            .with_emotion(
                EmotionItem::new("Stressed")
                    .with_synonyms([
                        "overwhelmed",
                        "panic",
                        "catastrophizing",
                        "can't relax",
                        "imposter syndrome",
                    ])
                    .with_hint("Stress is fear of the future. It's workable."),
            )
            .with_emotion(EmotionItem::new("Dread").with_synonyms([
                "fear of failure",
                "fear of rejection",
                "fear of uncertainty",
            ])),
        EmotionCluster::new("anger-frustration", "Anger/Frustration", LevelId::Anger, ClusterColor::Rose)
            .with_secondaries([LevelId::Desire, LevelId::Neutrality])
            .with_chapters(["expression"])
            .with_emotion(EmotionItem::new("Anger").with_synonyms(["pissed", "mad", "livid", "outraged"]))
            .with_emotion(EmotionItem::new("Frustrated").with_synonyms(["annoyed", "irritated", "fed up", "snappy"]))
            .with_emotion(EmotionItem::new("Resentful").with_synonyms([
                "offended",
                "disrespected",
                "bitter",
                "triggered",
            ]))
            .with_emotion(EmotionItem::new("Vengeful").with_synonyms(["road-rage", "spiteful"])),
        EmotionCluster::new("cravings", "Cravings", LevelId::Desire, ClusterColor::Amber)
            .with_secondaries([LevelId::Neutrality])
            .with_chapters(["escape"])
            .with_emotion(EmotionItem::new("Desire").with_synonyms(["crave", "lust", "tempted", "urge"]))
            .with_emotion(EmotionItem::new("Obsessed").with_synonyms(["fixated", "can't stop thinking", "need it"]))
            .with_emotion(EmotionItem::new("Jealous").with_synonyms(["envy", "possessive", "FOMO"]))
            .with_emotion(EmotionItem::new("Clingy").with_synonyms(["needy", "attention-seeking", "thirsty"]))
            .with_emotion(EmotionItem::new("Impulsive").with_synonyms([
                "binge",
                "impulse buying",
                "sugar hit",
                "caffeine fix",
                "nicotine hit",
            ])),
        EmotionCluster::new("sadness-loss", "Sadness/Loss", LevelId::Grief, ClusterColor::Indigo)
            .with_secondaries([LevelId::Acceptance])
            .with_emotion(EmotionItem::new("Grief").with_synonyms(["sorrow", "bereft", "heavy-hearted"]))
            .with_emotion(EmotionItem::new("Heartbroken").with_synonyms(["devastated", "tearful", "blue"]))
            .with_emotion(EmotionItem::new("Sad").with_synonyms(["down", "disappointed", "let down"]))
            .with_emotion(EmotionItem::new("Lonely").with_synonyms(["missing you", "homesick", "isolated"])),
        EmotionCluster::new("low-numb", "Low/Numb", LevelId::Apathy, ClusterColor::Slate)
            .with_secondaries([LevelId::Willingness])
            .with_chapters(["suppression"])
            .with_emotion(EmotionItem::new("Apathy").with_synonyms(["hopeless", "why bother", "unmotivated"]))
            .with_emotion(
                EmotionItem::new("Numb")
                    .with_synonyms(["blah", "meh", "checked out", "flat", "dead inside"])
                    .with_hint("Numb isn't failure; it's a tired nervous system."),
            )
            .with_emotion(EmotionItem::new("Burned out").with_synonyms([
                "drained",
                "exhausted",
                "burn out",
                "over it",
                "stuck",
            ])),
        EmotionCluster::new("defensive-pride", "Defensive/Pride", LevelId::Pride, ClusterColor::Plum)
            .with_secondaries([LevelId::Courage, LevelId::Neutrality])
            .with_emotion(EmotionItem::new("Pride").with_synonyms([
                "superior",
                "smug",
                "righteous",
                "holier-than-thou",
            ]))
            .with_emotion(EmotionItem::new("Defensive").with_synonyms([
                "stubborn",
                "I'm right",
                "can't admit fault",
                "judgmental",
            ])),
    ]
}
