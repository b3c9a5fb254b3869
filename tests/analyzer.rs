mod common;

use common::{blastoise_json, charizard_json, record, FakeGenerator};
use pokedex_rust::core::factory::{create_loadout, CreateLoadoutOptions};
use pokedex_rust::core::stats::StatTable;
use pokedex_rust::data::items::ITEMS;
use pokedex_rust::data::natures::NATURES;
use pokedex_rust::error::AiError;
use pokedex_rust::tools::analyzer::{render_outcome, MatchupAnalyzer, PokemonChatbot, CHAT_PARAMS, MATCHUP_PARAMS};
use pokedex_rust::tools::messages::{ChatMessage, Role};
use pokedex_rust::tools::prompt::{build_chat_messages, MatchupSide, HISTORY_WINDOW};

#[tokio::test]
async fn matchup_prompt_carries_both_configured_sides() {
    let charizard = record(charizard_json());
    let blastoise = record(blastoise_json());

    let mine = create_loadout(
        &charizard,
        CreateLoadoutOptions {
            moves: Some(vec!["flamethrower".to_string(), "air-slash".to_string()]),
            item: Some("Choice Specs".to_string()),
            nature: Some("Timid".to_string()),
            evs: Some(StatTable {
                hp: 4,
                special_attack: 252,
                speed: 252,
                ..Default::default()
            }),
        },
        &ITEMS,
        &NATURES,
    )
    .unwrap();
    let opponent = create_loadout(&blastoise, CreateLoadoutOptions::default(), &ITEMS, &NATURES).unwrap();

    let generator = FakeGenerator::replying("## Type matchup\nBlastoise wins.");
    let analyzer = MatchupAnalyzer::new(generator.clone());
    let result = analyzer
        .analyze(
            MatchupSide::new(&mine, &charizard),
            MatchupSide::new(&opponent, &blastoise),
        )
        .await;
    assert_eq!(render_outcome(&result), "## Type matchup\nBlastoise wins.");

    let requests = generator.requests();
    assert_eq!(requests.len(), 1);
    let (messages, params) = &requests[0];
    assert_eq!(*params, MATCHUP_PARAMS);
    assert_eq!(messages[0].role, Role::System);

    let user = &messages[1].content;
    assert!(user.contains("Charizard"));
    assert!(user.contains("Blastoise"));
    assert!(user.contains("flamethrower, air-slash"));
    assert!(user.contains("Choice Specs"));
    assert!(user.contains("Timid (+Spd, -Atk)"));
    assert!(user.contains("HP 154 / Atk 93 / Def 98 / SpA 161 / SpD 105 / Spd 167"));
    // opponent: no moves, no item, neutral nature
    assert!(user.contains("None selected"));
    assert!(user.contains("Held item: None"));
}

#[tokio::test]
async fn auth_failure_renders_friendly_message() {
    let charizard = record(charizard_json());
    let loadout = create_loadout(&charizard, CreateLoadoutOptions::default(), &ITEMS, &NATURES).unwrap();

    let analyzer = MatchupAnalyzer::new(FakeGenerator::failing(AiError::Authentication("401".to_string())));
    let result = analyzer
        .analyze(
            MatchupSide::new(&loadout, &charizard),
            MatchupSide::new(&loadout, &charizard),
        )
        .await;
    assert!(result.is_err());
    assert!(render_outcome(&result).contains("Groq API key"));

    let analyzer = MatchupAnalyzer::new(FakeGenerator::failing(AiError::Timeout));
    let result = analyzer
        .analyze(
            MatchupSide::new(&loadout, &charizard),
            MatchupSide::new(&loadout, &charizard),
        )
        .await;
    assert!(render_outcome(&result).starts_with("Sorry, I encountered an error"));
}

#[test]
fn chat_keeps_only_recent_history() {
    let charizard = record(charizard_json());
    let history: Vec<ChatMessage> = (0..12)
        .map(|i| {
            if i % 2 == 0 {
                ChatMessage::user(format!("q{}", i))
            } else {
                ChatMessage::assistant(format!("a{}", i))
            }
        })
        .collect();

    let messages = build_chat_messages(&charizard, "Is it good against Venusaur?", &history);
    assert_eq!(messages.len(), HISTORY_WINDOW + 2);
    assert_eq!(messages[0].role, Role::System);
    assert!(messages[0].content.contains("Base Stats: HP=78, Atk=84"));
    assert!(messages[0].content.contains("Height: 1.7m"));
    assert_eq!(messages[1].content, "q4");
    assert_eq!(messages[HISTORY_WINDOW].content, "a11");
    assert_eq!(messages.last().unwrap(), &ChatMessage::user("Is it good against Venusaur?"));
}

#[tokio::test]
async fn chatbot_uses_chat_settings() {
    let charizard = record(charizard_json());
    let generator = FakeGenerator::replying("🔥 Yes!");
    let chatbot = PokemonChatbot::new(generator.clone());

    let answer = chatbot.chat(&charizard, "Any tips?", &[]).await.unwrap();
    assert_eq!(answer, "🔥 Yes!");

    let requests = generator.requests();
    assert_eq!(requests[0].1, CHAT_PARAMS);
    assert_eq!(requests[0].0.len(), 2);
}
