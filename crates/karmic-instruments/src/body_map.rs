//! Emotion to body-region heat map.
//!
//! Each recognised emotion cluster lights up a fixed set of regions. When
//! several emotions touch the same region the strongest one wins.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Colour of a region no emotion has reached.
pub const DEFAULT_REGION_COLOR: &str = "#E5E7EB";

/// Most recent contributors kept per region.
pub const MAX_PRIMARY_EMOTIONS: usize = 3;

/// Regions below this intensity suggest no symptoms.
pub const SUGGESTION_FLOOR: f64 = 0.2;

/// Regions above this intensity mark their symptoms as likely.
pub const SUGGESTION_THRESHOLD: f64 = 0.4;

/// Every region referenced by the cluster table, in order of first use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum BodyRegion {
    Neck,
    Shoulders,
    UpperBack,
    Jaw,
    Forehead,
    Chest,
    Stomach,
    Throat,
    Heart,
    Temples,
    Head,
    LowerBack,
    Arms,
    Fists,
    Face,
}

impl BodyRegion {
    pub const ALL: [BodyRegion; 15] = [
        BodyRegion::Neck,
        BodyRegion::Shoulders,
        BodyRegion::UpperBack,
        BodyRegion::Jaw,
        BodyRegion::Forehead,
        BodyRegion::Chest,
        BodyRegion::Stomach,
        BodyRegion::Throat,
        BodyRegion::Heart,
        BodyRegion::Temples,
        BodyRegion::Head,
        BodyRegion::LowerBack,
        BodyRegion::Arms,
        BodyRegion::Fists,
        BodyRegion::Face,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BodyRegion::Neck => "neck",
            BodyRegion::Shoulders => "shoulders",
            BodyRegion::UpperBack => "upper-back",
            BodyRegion::Jaw => "jaw",
            BodyRegion::Forehead => "forehead",
            BodyRegion::Chest => "chest",
            BodyRegion::Stomach => "stomach",
            BodyRegion::Throat => "throat",
            BodyRegion::Heart => "heart",
            BodyRegion::Temples => "temples",
            BodyRegion::Head => "head",
            BodyRegion::LowerBack => "lower-back",
            BodyRegion::Arms => "arms",
            BodyRegion::Fists => "fists",
            BodyRegion::Face => "face",
        }
    }

    fn describe(self, level: &str, emotion: &str) -> String {
        match self {
            BodyRegion::Head => format!("{level} mental tension from {emotion}"),
            BodyRegion::Neck => format!("{level} neck tension, often from stress or worry"),
            BodyRegion::Shoulders => {
                format!("{level} shoulder tension, carrying emotional weight")
            }
            BodyRegion::Chest => format!("{level} chest sensation, heart-centered emotions"),
            BodyRegion::Stomach => format!("{level} gut feeling, core emotional processing"),
            BodyRegion::Heart => format!("{level} heart-centered emotion"),
            BodyRegion::Throat => {
                format!("{level} throat sensation, expression and communication")
            }
            BodyRegion::UpperBack => {
                format!("{level} upper back tension, emotional support")
            }
            BodyRegion::LowerBack => {
                format!("{level} lower back sensation, foundational support")
            }
            BodyRegion::Jaw => format!("{level} jaw tension, often from stress or anger"),
            BodyRegion::Forehead => format!("{level} forehead tension, mental stress"),
            BodyRegion::Temples => format!("{level} temple pressure, mental overwhelm"),
            BodyRegion::Arms => format!("{level} arm sensation, reaching and connection"),
            BodyRegion::Fists => format!("{level} hand tension, action and control"),
            BodyRegion::Face => format!("{level} sensation in {}", self.as_str()),
        }
    }

    /// Psychosomatic symptoms commonly felt in this region.
    pub fn symptoms(self) -> &'static [&'static str] {
        match self {
            BodyRegion::Head => &["headache", "mental_fog", "concentration_difficulty"],
            BodyRegion::Neck => &["neck_stiffness", "tension_headache", "throat_tightness"],
            BodyRegion::Shoulders => &["shoulder_tension", "knots", "upper_back_pain"],
            BodyRegion::Chest => &["chest_tightness", "rapid_heartbeat", "shallow_breathing"],
            BodyRegion::Stomach => &["stomach_butterflies", "nausea", "digestive_upset"],
            BodyRegion::Heart => &["palpitations", "chest_pressure", "emotional_heaviness"],
            BodyRegion::Throat => &[
                "throat_constriction",
                "difficulty_swallowing",
                "voice_changes",
            ],
            BodyRegion::Jaw => &["jaw_clenching", "teeth_grinding", "facial_tension"],
            _ => &[],
        }
    }
}

impl std::fmt::Display for BodyRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an emotion cluster is felt and how it is drawn.
#[derive(Debug)]
pub struct ClusterMapping {
    pub regions: &'static [BodyRegion],
    pub intensity_multiplier: f64,
    pub color_base: [u8; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EmotionCluster {
    Stress,
    Anxiety,
    Worry,
    Overwhelm,
    Sadness,
    Depression,
    Grief,
    Loneliness,
    Anger,
    Frustration,
    Irritation,
    Rage,
    Fear,
    Panic,
    Joy,
    Love,
    Excitement,
    Contentment,
    Pride,
}

impl EmotionCluster {
    pub fn mapping(self) -> &'static ClusterMapping {
        use BodyRegion::*;

        macro_rules! cluster {
            ($multiplier:expr, [$r:expr, $g:expr, $b:expr], $($region:ident),+) => {{
                static MAPPING: ClusterMapping = ClusterMapping {
                    regions: &[$($region),+],
                    intensity_multiplier: $multiplier,
                    color_base: [$r, $g, $b],
                };
                &MAPPING
            }};
        }

        match self {
            EmotionCluster::Stress => {
                cluster!(1.2, [255, 107, 107], Neck, Shoulders, UpperBack, Jaw, Forehead)
            }
            EmotionCluster::Anxiety => cluster!(1.1, [255, 193, 7], Chest, Stomach, Throat, Heart),
            EmotionCluster::Worry => cluster!(0.9, [255, 152, 0], Forehead, Temples, Neck, Shoulders),
            EmotionCluster::Overwhelm => {
                cluster!(1.3, [244, 67, 54], Head, Chest, Shoulders, Stomach)
            }
            EmotionCluster::Sadness => {
                cluster!(1.0, [63, 81, 181], Chest, Heart, UpperBack, Shoulders)
            }
            EmotionCluster::Depression => {
                cluster!(1.1, [103, 58, 183], Chest, LowerBack, Neck, Head)
            }
            EmotionCluster::Grief => cluster!(1.2, [33, 150, 243], Chest, Heart, Throat, Stomach),
            EmotionCluster::Loneliness => cluster!(0.8, [156, 39, 176], Chest, Heart, Arms),
            EmotionCluster::Anger => {
                cluster!(1.4, [244, 67, 54], Jaw, Neck, Shoulders, Fists, Chest)
            }
            EmotionCluster::Frustration => {
                cluster!(1.1, [255, 87, 34], Temples, Jaw, Neck, Shoulders)
            }
            EmotionCluster::Irritation => cluster!(0.9, [255, 152, 0], Forehead, Jaw, Neck),
            EmotionCluster::Rage => cluster!(1.5, [183, 28, 28], Jaw, Fists, Chest, Neck),
            EmotionCluster::Fear => cluster!(1.2, [158, 158, 158], Stomach, Chest, Heart, Throat),
            EmotionCluster::Panic => cluster!(1.4, [96, 125, 139], Chest, Heart, Stomach, Throat),
            EmotionCluster::Joy => cluster!(0.7, [76, 175, 80], Heart, Chest, Face),
            EmotionCluster::Love => cluster!(0.8, [233, 30, 99], Heart, Chest, Arms),
            EmotionCluster::Excitement => cluster!(0.9, [255, 193, 7], Chest, Stomach, Heart),
            EmotionCluster::Contentment => cluster!(0.6, [139, 195, 74], Chest, Heart),
            EmotionCluster::Pride => cluster!(0.8, [255, 152, 0], Chest, Shoulders, Head),
        }
    }

    /// Look up a free-form emotion name. Case and non-letters are ignored.
    pub fn from_name(name: &str) -> Option<Self> {
        let key: String = name
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase())
            .collect();
        key.parse().ok()
    }
}

impl FromStr for EmotionCluster {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cluster = match s {
            "stress" => EmotionCluster::Stress,
            "anxiety" => EmotionCluster::Anxiety,
            "worry" => EmotionCluster::Worry,
            "overwhelm" => EmotionCluster::Overwhelm,
            "sadness" => EmotionCluster::Sadness,
            "depression" => EmotionCluster::Depression,
            "grief" => EmotionCluster::Grief,
            "loneliness" => EmotionCluster::Loneliness,
            "anger" => EmotionCluster::Anger,
            "frustration" => EmotionCluster::Frustration,
            "irritation" => EmotionCluster::Irritation,
            "rage" => EmotionCluster::Rage,
            "fear" => EmotionCluster::Fear,
            "panic" => EmotionCluster::Panic,
            "joy" => EmotionCluster::Joy,
            "love" => EmotionCluster::Love,
            "excitement" => EmotionCluster::Excitement,
            "contentment" => EmotionCluster::Contentment,
            "pride" => EmotionCluster::Pride,
            _ => return Err(()),
        };
        Ok(cluster)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BodyRegionData {
    pub region: BodyRegion,
    /// Winning intensity, 0–1.
    pub intensity: f64,
    /// Emotions that set the intensity, most recent first.
    pub primary_emotions: Vec<String>,
    /// CSS colour: the default grey, or `rgba(r, g, b, a)`.
    pub color: String,
    pub description: String,
}

impl BodyRegionData {
    fn empty(region: BodyRegion) -> Self {
        Self {
            region,
            intensity: 0.0,
            primary_emotions: Vec::new(),
            color: DEFAULT_REGION_COLOR.to_string(),
            description: String::new(),
        }
    }
}

pub type BodyMap = BTreeMap<BodyRegion, BodyRegionData>;

fn intensity_level(intensity: f64) -> &'static str {
    if intensity > 0.7 {
        "strong"
    } else if intensity > 0.4 {
        "moderate"
    } else {
        "mild"
    }
}

/// Spread emotion confidences (0–1) over body regions.
///
/// Emotions are applied in iteration order. A region only changes when an
/// emotion strictly exceeds its current intensity, so on ties the earlier
/// emotion wins. Pass a `BTreeMap` for a canonical order. Names that match
/// no cluster are skipped, as are NaN and infinite confidences.
pub fn map_emotions_to_body<I, K>(emotions: I) -> BodyMap
where
    I: IntoIterator<Item = (K, f64)>,
    K: AsRef<str>,
{
    let mut regions: BodyMap = BodyRegion::ALL
        .into_iter()
        .map(|r| (r, BodyRegionData::empty(r)))
        .collect();

    for (emotion, confidence) in emotions {
        if !confidence.is_finite() {
            continue;
        }
        let emotion = emotion.as_ref();
        let Some(cluster) = EmotionCluster::from_name(emotion) else {
            continue;
        };
        let mapping = cluster.mapping();
        let adjusted = confidence * mapping.intensity_multiplier;

        for region in mapping.regions {
            let Some(data) = regions.get_mut(region) else {
                continue;
            };
            if adjusted <= data.intensity {
                continue;
            }

            data.intensity = adjusted.min(1.0);
            data.primary_emotions.insert(0, emotion.to_string());
            data.primary_emotions.truncate(MAX_PRIMARY_EMOTIONS);

            let [r, g, b] = mapping.color_base;
            let alpha = (adjusted * 0.8).min(0.8);
            data.color = format!("rgba({r}, {g}, {b}, {alpha})");
            data.description = region.describe(intensity_level(adjusted), emotion);
        }
    }

    regions
}

/// Mark the symptoms of every sufficiently active region as likely (`true`)
/// or possible (`false`).
pub fn generate_symptom_suggestions(body: &BodyMap) -> BTreeMap<String, bool> {
    let mut suggestions = BTreeMap::new();
    for data in body.values() {
        if data.intensity < SUGGESTION_FLOOR {
            continue;
        }
        for symptom in data.region.symptoms() {
            suggestions.insert(symptom.to_string(), data.intensity > SUGGESTION_THRESHOLD);
        }
    }
    suggestions
}
