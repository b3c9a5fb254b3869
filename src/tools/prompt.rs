//! Prompt assembly for the matchup analyzer and the Pokemon chat assistant.

use crate::core::factory::PokemonLoadout;
use crate::core::stats::{StatName, StatTable};
use crate::core::transforms::{height_m, title_case, weight_kg};
use crate::data::items::NO_ITEM;
use crate::data::records::PokemonRecord;
use crate::tools::messages::ChatMessage;

/// Chat history messages forwarded with each question.
pub const HISTORY_WINDOW: usize = 8;

const MATCHUP_INSTRUCTIONS: &str = "You are an expert competitive Pokemon battle analyst.
Compare the two Pokemon below exactly as configured (level 50, all IVs 31, the listed EVs and nature already applied to the stats) and explain how a one-on-one battle between them would most likely play out.

Structure your answer as:
1. Type matchup
2. Speed and stat comparison
3. Key moves and held item impact
4. Predicted winner with a short justification

Guidelines:
- Use the real stats given, not base stats
- Only consider the selected moves; if none are selected, reason from types and stats
- Use markdown headings and bullet points
- Keep the answer under 300 words";

/// One configured side of a matchup together with its provider record.
#[derive(Clone, Copy, Debug)]
pub struct MatchupSide<'a> {
    pub loadout: &'a PokemonLoadout,
    pub record: &'a PokemonRecord,
}

impl<'a> MatchupSide<'a> {
    pub fn new(loadout: &'a PokemonLoadout, record: &'a PokemonRecord) -> Self {
        Self { loadout, record }
    }
}

pub fn build_matchup_messages(mine: MatchupSide<'_>, opponent: MatchupSide<'_>) -> Vec<ChatMessage> {
    let user = format!(
        "{}\n\n{}\n\nAnalyze this matchup.",
        describe_side("My Pokemon", mine),
        describe_side("Opponent", opponent)
    );
    vec![ChatMessage::system(MATCHUP_INSTRUCTIONS), ChatMessage::user(user)]
}

fn describe_side(title: &str, side: MatchupSide<'_>) -> String {
    let record = side.record;
    let loadout = side.loadout;

    let moves = if loadout.moves.is_empty() {
        "None selected".to_string()
    } else {
        loadout.moves.join(", ")
    };
    let stats = match loadout.real_stats(record) {
        Some(real) => format_stats(&real),
        None => "unavailable".to_string(),
    };

    format!(
        "{}: {}\n- Types: {}\n- Abilities: {}\n- Nature: {}\n- Held item: {}\n- Moves: {}\n- Stats (Lv. 50): {}",
        title,
        title_case(&record.name),
        record.type_names().join(", "),
        record.ability_names().join(", "),
        loadout.nature,
        loadout.item.as_deref().unwrap_or(NO_ITEM),
        moves,
        stats
    )
}

/// `HP 153 / Atk 104 / Def 98 / SpA 129 / SpD 105 / Spd 120`
pub fn format_stats(stats: &StatTable) -> String {
    StatName::ALL
        .iter()
        .map(|&stat| format!("{} {}", stat.short_label(), stats.get(stat)))
        .collect::<Vec<_>>()
        .join(" / ")
}

fn pokemon_context(record: &PokemonRecord) -> String {
    let stat = |name: StatName| {
        record
            .base_stat(name)
            .map(|v| v.to_string())
            .unwrap_or_else(|| "?".to_string())
    };
    let height = height_m(record).map(|m| format!("{}m", m)).unwrap_or_else(|| "?".to_string());
    let weight = weight_kg(record).map(|kg| format!("{}kg", kg)).unwrap_or_else(|| "?".to_string());

    format!(
        "Pokemon: {}\nTypes: {}\nAbilities: {}\nBase Stats: HP={}, Atk={}, Def={}, SpA={}, SpD={}, Spd={}\nHeight: {}\nWeight: {}",
        title_case(&record.name),
        record.type_names().join(", "),
        record.ability_names().join(", "),
        stat(StatName::Hp),
        stat(StatName::Attack),
        stat(StatName::Defense),
        stat(StatName::SpecialAttack),
        stat(StatName::SpecialDefense),
        stat(StatName::Speed),
        height,
        weight
    )
}

/// System context for the current Pokemon, the tail of the conversation,
/// then the new question.
pub fn build_chat_messages(record: &PokemonRecord, question: &str, history: &[ChatMessage]) -> Vec<ChatMessage> {
    let system = format!(
        "You are an expert Pokemon assistant helping users understand Pokemon.

Current Pokemon data:
{}

Guidelines:
- Be friendly, concise, and use emojis where appropriate
- Answer based on Pokemon data provided and general Pokemon knowledge
- If asked about battles, suggest strategies based on types and stats
- For evolution questions, provide helpful evolution tips
- Keep responses under 150 words unless specifically asked for detailed explanation
- Use bullet points for lists",
        pokemon_context(record)
    );

    let start = history.len().saturating_sub(HISTORY_WINDOW);
    let mut messages = Vec::with_capacity(history.len() - start + 2);
    messages.push(ChatMessage::system(system));
    messages.extend(history[start..].iter().cloned());
    messages.push(ChatMessage::user(question));
    messages
}
