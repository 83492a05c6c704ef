/*!
 * Per-scene image prompt derivation.
 *
 * Every scene gets exactly `broll_density` prompts. Shot types cycle a fixed
 * eight-entry palette, and prompt text is assembled deterministically from
 * visual elements found in the scene (locations, time of day, atmosphere), a
 * position-based text snippet, and the configured style and engine modifiers.
 * Identical scene text and configuration always produce identical prompts.
 */

use std::sync::LazyLock;

use regex::Regex;

use crate::app_config::{ImageEngine, ImageStyle};
use crate::plan::{ImagePrompt, shot_id};

/// Fixed shot palette, cycled by shot index.
pub const SHOT_PALETTE: [&str; 8] = [
    "establishing shot",
    "medium shot",
    "close-up",
    "wide shot",
    "over-the-shoulder",
    "POV shot",
    "detail shot",
    "reaction shot",
];

static LOCATION_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(forest|city|room|house|castle|village|street|garden|mountain|cave|ocean|beach|desert|kitchen|bedroom|hallway|library|tower|dungeon|palace|temple|church|school)\b",
    )
    .expect("Invalid location regex")
});

static TIME_OF_DAY_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(dawn|sunrise|morning|noon|afternoon|dusk|sunset|evening|night|midnight|twilight)\b")
        .expect("Invalid time-of-day regex")
});

static ATMOSPHERE_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(dark|bright|gloomy|cheerful|tense|peaceful|chaotic|mysterious|eerie|warm|cold)\b")
        .expect("Invalid atmosphere regex")
});

/// Visual elements mined from a scene, in first-occurrence order.
#[derive(Debug, Clone, Default)]
struct VisualElements {
    locations: Vec<String>,
    time_of_day: Vec<String>,
    atmosphere: Vec<String>,
}

impl VisualElements {
    fn extract(text: &str) -> Self {
        let lowered = text.to_lowercase();
        Self {
            locations: distinct_matches(&LOCATION_WORDS, &lowered),
            time_of_day: distinct_matches(&TIME_OF_DAY_WORDS, &lowered),
            atmosphere: distinct_matches(&ATMOSPHERE_WORDS, &lowered),
        }
    }
}

fn distinct_matches(pattern: &Regex, text: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for found in pattern.find_iter(text) {
        let word = found.as_str();
        if !seen.iter().any(|s: &String| s == word) {
            seen.push(word.to_string());
        }
    }
    seen
}

/// Deterministic image prompt planner.
#[derive(Debug, Clone)]
pub struct ShotPlanner {
    broll_density: usize,
    image_engine: ImageEngine,
    image_style: ImageStyle,
}

impl ShotPlanner {
    /// Create a planner for a fixed density, engine and style.
    pub fn new(broll_density: usize, image_engine: ImageEngine, image_style: ImageStyle) -> Self {
        Self {
            broll_density,
            image_engine,
            image_style,
        }
    }

    /// Derive exactly `broll_density` prompts for one scene.
    pub fn plan(&self, scene_idx: usize, scene_text: &str) -> Vec<ImagePrompt> {
        let elements = VisualElements::extract(scene_text);

        let flat: String = scene_text.split_whitespace().collect::<Vec<_>>().join(" ");
        let flat_chars: Vec<char> = flat.chars().collect();
        let chunk_size = (flat_chars.len() / self.broll_density.max(1)).max(50);

        let negative_prompt = self.image_style.negative_prompt();

        (0..self.broll_density)
            .map(|shot_idx| {
                let shot_type = SHOT_PALETTE[shot_idx % SHOT_PALETTE.len()];

                let mut components = vec![format!("Shot {}, {}", shot_idx + 1, shot_type)];

                if !elements.locations.is_empty() {
                    let location = elements
                        .locations
                        .get(shot_idx)
                        .unwrap_or(&elements.locations[0]);
                    components.push(format!("setting: {location}"));
                }
                if let Some(time) = elements.time_of_day.first() {
                    components.push(format!("{time} lighting"));
                }
                if let Some(mood) = elements.atmosphere.first() {
                    components.push(format!("{mood} atmosphere"));
                }

                let start = shot_idx * chunk_size;
                if start < flat_chars.len() {
                    let end = (start + chunk_size).min(flat_chars.len());
                    let snippet: String = flat_chars[start..end].iter().take(100).collect();
                    let snippet = snippet.trim();
                    if !snippet.is_empty() {
                        components.push(format!("depicting: {snippet}"));
                    }
                }

                components.push(self.image_style.style_template().to_string());
                components.push(self.image_engine.quality_suffix().to_string());

                ImagePrompt {
                    prompt: components.join(", "),
                    negative_prompt: negative_prompt.clone(),
                    scene_idx,
                    shot_idx,
                    shot_type: shot_type.to_string(),
                    id: shot_id(scene_idx, shot_idx),
                }
            })
            .collect()
    }
}
