/*!
 * Sound-effect cue derivation.
 *
 * Scenes are scanned for keyword substrings against a configurable
 * keyword-to-prompts table. Each keyword carries a static priority; cues are
 * ordered by priority descending with ties broken by first occurrence in the
 * text, and the combined prompt joins the primary prompts of the top five
 * cues. A scene with no matches yields an empty cue list and an empty
 * combined prompt, never an error.
 */

use crate::plan::{SceneSfx, SfxCue, sfx_id};

/// How many top cues feed the combined prompt.
const COMBINED_PROMPT_CAP: usize = 5;

/// One keyword with its candidate prompts and static priority.
#[derive(Debug, Clone)]
pub struct SfxKeywordEntry {
    pub keyword: &'static str,
    pub prompts: &'static [&'static str],
    pub priority: u32,
}

const fn entry(
    keyword: &'static str,
    prompts: &'static [&'static str],
    priority: u32,
) -> SfxKeywordEntry {
    SfxKeywordEntry {
        keyword,
        prompts,
        priority,
    }
}

/// Ordered keyword table; scan order decides nothing, priorities do.
#[derive(Debug, Clone)]
pub struct SfxKeywordTable {
    entries: Vec<SfxKeywordEntry>,
}

impl Default for SfxKeywordTable {
    fn default() -> Self {
        Self {
            entries: vec![
                // Weather and nature
                entry("rain", &["rain ambience, water drops, wet surface", "light rain, gentle patter"], 4),
                entry("storm", &["thunderstorm, heavy rain, thunder rumble", "storm ambience, wind howling"], 4),
                entry("thunder", &["thunder crack, distant rumble, lightning"], 4),
                entry("wind", &["wind blowing, air movement, breeze"], 4),
                entry("snow", &["snow falling, winter ambience, soft crunch"], 4),
                // Environment
                entry("forest", &["forest ambience, birds chirping, leaves rustling, nature sounds"], 2),
                entry("ocean", &["ocean waves, seashore, water splashing, seagulls"], 2),
                entry("river", &["flowing water, stream, river ambience"], 2),
                entry("city", &["city ambience, traffic, distant sirens, urban soundscape"], 2),
                entry("crowd", &["crowd murmur, people talking, busy atmosphere"], 2),
                entry("market", &["marketplace bustle, vendors calling, busy crowd"], 2),
                // Interior
                entry("fire", &["crackling fire, fireplace, warm flames"], 1),
                entry("door", &["door opening, door closing, wooden creak"], 1),
                entry("footsteps", &["footsteps, walking sounds"], 1),
                entry("clock", &["clock ticking, time passing"], 1),
                // Action
                entry("battle", &["battle sounds, swords clashing, combat"], 5),
                entry("fight", &["fighting sounds, punches, impacts"], 5),
                entry("sword", &["sword slash, metal clang, blade ring"], 5),
                entry("gun", &["gunshot, weapon fire"], 5),
                entry("explosion", &["explosion, blast, debris"], 5),
                entry("running", &["running footsteps, rapid movement"], 5),
                entry("chase", &["chase music tension, running, pursuit"], 5),
                // Emotional
                entry("crying", &["soft crying, emotional moment, tears"], 3),
                entry("laughing", &["laughter, joyful sounds"], 3),
                entry("scream", &["scream, shout, alarmed voice"], 3),
                entry("whisper", &["whispered voices, quiet conversation"], 3),
                // Animals
                entry("horse", &["horse galloping, hooves, neigh"], 2),
                entry("dog", &["dog barking, animal sounds"], 2),
                entry("bird", &["birds chirping, bird calls"], 2),
                entry("wolf", &["wolf howl, wild animal"], 2),
                // Time of day
                entry("morning", &["morning ambience, birds, sunrise atmosphere"], 1),
                entry("night", &["night ambience, crickets, owl, darkness"], 1),
                entry("dawn", &["dawn sounds, early morning, quiet awakening"], 1),
                entry("dusk", &["evening ambience, sunset sounds"], 1),
            ],
        }
    }
}

impl SfxKeywordTable {
    /// Build a table from explicit entries.
    pub fn new(entries: Vec<SfxKeywordEntry>) -> Self {
        Self { entries }
    }

    /// Number of keywords in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no keywords.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Keyword-driven sound cue generator.
#[derive(Debug, Clone, Default)]
pub struct SfxCueGenerator {
    table: SfxKeywordTable,
}

impl SfxCueGenerator {
    /// Create a generator over the given keyword table.
    pub fn new(table: SfxKeywordTable) -> Self {
        Self { table }
    }

    /// Derive sound cues for one scene.
    pub fn generate(&self, scene_idx: usize, scene_text: &str) -> SceneSfx {
        let lowered = scene_text.to_lowercase();

        let mut matched: Vec<(usize, SfxCue)> = self
            .table
            .entries
            .iter()
            .filter_map(|entry| {
                lowered.find(entry.keyword).map(|position| {
                    let sfx_prompts: Vec<String> =
                        entry.prompts.iter().map(|p| p.to_string()).collect();
                    let primary_prompt = sfx_prompts.first().cloned().unwrap_or_default();
                    (
                        position,
                        SfxCue {
                            keyword: entry.keyword.to_string(),
                            sfx_prompts,
                            priority: entry.priority,
                            primary_prompt,
                        },
                    )
                })
            })
            .collect();

        matched.sort_by(|(pos_a, cue_a), (pos_b, cue_b)| {
            cue_b.priority.cmp(&cue_a.priority).then(pos_a.cmp(pos_b))
        });

        let cues: Vec<SfxCue> = matched.into_iter().map(|(_, cue)| cue).collect();

        let combined_prompt = cues
            .iter()
            .take(COMBINED_PROMPT_CAP)
            .map(|cue| cue.primary_prompt.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        SceneSfx {
            cue_count: cues.len(),
            combined_prompt,
            scene_idx,
            id: sfx_id(scene_idx),
            cues,
        }
    }
}
