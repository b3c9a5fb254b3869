use crate::data::records::PokemonRecord;
use crate::error::AiError;
use crate::tools::messages::{ChatMessage, GenerationParams, TextGenerator};
use crate::tools::prompt::{build_chat_messages, build_matchup_messages, MatchupSide};
use tracing::{info, warn};

pub const MATCHUP_PARAMS: GenerationParams = GenerationParams {
    temperature: 0.7,
    max_tokens: 1024,
};

pub const CHAT_PARAMS: GenerationParams = GenerationParams {
    temperature: 0.7,
    max_tokens: 500,
};

/// Sends a two-sided matchup to the text generator and returns its text
/// verbatim. The narrative is not parsed or checked.
pub struct MatchupAnalyzer<G> {
    generator: G,
}

impl<G: TextGenerator> MatchupAnalyzer<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub async fn analyze(&self, mine: MatchupSide<'_>, opponent: MatchupSide<'_>) -> Result<String, AiError> {
        info!(
            mine = %mine.loadout.species,
            opponent = %opponent.loadout.species,
            "analyzing matchup"
        );
        let messages = build_matchup_messages(mine, opponent);
        let result = self.generator.complete(&messages, MATCHUP_PARAMS).await;
        if let Err(err) = &result {
            warn!(error = %err, "matchup analysis failed");
        }
        result
    }
}

/// Free-form questions about one Pokemon.
pub struct PokemonChatbot<G> {
    generator: G,
}

impl<G: TextGenerator> PokemonChatbot<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub async fn chat(
        &self,
        record: &PokemonRecord,
        question: &str,
        history: &[ChatMessage],
    ) -> Result<String, AiError> {
        let messages = build_chat_messages(record, question, history);
        self.generator.complete(&messages, CHAT_PARAMS).await
    }
}

/// Text shown in place of the analysis: the model output, or the friendly
/// error message.
pub fn render_outcome(result: &Result<String, AiError>) -> String {
    match result {
        Ok(text) => text.clone(),
        Err(err) => err.user_message(),
    }
}
