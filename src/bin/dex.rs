use inquire::list_option::ListOption;
use inquire::validator::Validation;
use inquire::{CustomType, CustomUserError, MultiSelect, Select, Text};
use pokedex_rust::core::assets::{battle_sprite, detail_sprite, latest_cry};
use pokedex_rust::core::detail::{load_detail, DetailView};
use pokedex_rust::core::factory::{create_loadout, CreateLoadoutOptions, PokemonLoadout, MAX_MOVES};
use pokedex_rust::core::navigation::{NavEvent, NavState, Screen};
use pokedex_rust::core::stats::{EffortValues, StatName, MAX_BASE_STAT, MAX_EV_PER_STAT};
use pokedex_rust::core::transforms::{base_happiness, capture_rate, height_m, title_case, weight_kg};
use pokedex_rust::core::type_chart::format_multiplier;
use pokedex_rust::data::client::{HttpFetch, PokeApiClient};
use pokedex_rust::data::generations::GENERATIONS;
use pokedex_rust::data::items::ITEMS;
use pokedex_rust::data::natures::{DEFAULT_NATURE, NATURES};
use pokedex_rust::data::records::PokemonRecord;
use pokedex_rust::tools::analyzer::{render_outcome, MatchupAnalyzer, PokemonChatbot};
use pokedex_rust::tools::groq::GroqClient;
use pokedex_rust::tools::messages::ChatMessage;
use pokedex_rust::tools::prompt::MatchupSide;
use pokedex_rust::DexConfig;
use std::error::Error;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

type Client = PokeApiClient<HttpFetch>;

const STAT_BAR_WIDTH: u32 = 20;

enum DetailAction {
    Open(String),
    ToggleShiny,
    Chat,
    Battle,
    Back,
}

struct App {
    client: Client,
    analyzer: MatchupAnalyzer<GroqClient>,
    chatbot: PokemonChatbot<GroqClient>,
    names: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = DexConfig::from_env();
    if config.ai.api_key.is_none() {
        tracing::warn!("GROQ_API_KEY not set; AI features will report an authentication error");
    }

    let client = PokeApiClient::from_config(&config)?;
    let app = App {
        client,
        analyzer: MatchupAnalyzer::new(GroqClient::new(&config.ai)?),
        chatbot: PokemonChatbot::new(GroqClient::new(&config.ai)?),
        names: Vec::new(),
    };

    println!("╔═══════════════════════════════════════╗");
    println!("║          ⚡ Pokedex CLI ⚡             ║");
    println!("╚═══════════════════════════════════════╝");
    println!();

    run(app).await;
    Ok(())
}

async fn run(mut app: App) {
    let mut nav = NavState::default();
    loop {
        let event = match nav.screen.clone() {
            Screen::Home => match home(&mut app).await {
                Some(event) => event,
                None => break,
            },
            Screen::Detail { pokemon } => detail(&app, &pokemon).await,
            Screen::Battle => {
                battle(&mut app).await;
                NavEvent::Back
            }
        };
        nav = nav.transition(event);
    }
    println!("Bye!");
}

async fn home(app: &mut App) -> Option<NavEvent> {
    let options = vec!["🔍 Search by name", "📚 Browse a generation", "⚔️  Battle analyzer", "🚪 Quit"];
    let choice = Select::new("What would you like to do?", options.clone()).prompt().ok()?;

    match options.iter().position(|o| *o == choice) {
        Some(0) => {
            let name = prompt_pokemon_name(app, "Pokemon name or number:").await?;
            Some(NavEvent::SelectPokemon(name))
        }
        Some(1) => browse_generation(&app.client).await.map(NavEvent::SelectPokemon).or(Some(NavEvent::Back)),
        Some(2) => Some(NavEvent::OpenBattle),
        _ => None,
    }
}

async fn prompt_pokemon_name(app: &mut App, message: &str) -> Option<String> {
    if app.names.is_empty() {
        app.names = app.client.list_all_names().await;
    }
    let names = app.names.clone();
    let suggester = move |input: &str| -> Result<Vec<String>, CustomUserError> {
        let input = input.trim().to_lowercase();
        if input.is_empty() {
            return Ok(Vec::new());
        }
        Ok(names
            .iter()
            .filter(|name| name.contains(&input))
            .take(10)
            .cloned()
            .collect())
    };
    Text::new(message)
        .with_autocomplete(suggester)
        .prompt()
        .ok()
        .filter(|name| !name.trim().is_empty())
}

async fn browse_generation(client: &Client) -> Option<String> {
    let labels: Vec<&str> = GENERATIONS.iter().map(|g| g.label).collect();
    let label = Select::new("Generation:", labels).prompt().ok()?;
    let generation = GENERATIONS.iter().find(|g| g.label == label)?;

    let species = client.list_generation(generation).await;
    if species.is_empty() {
        println!("⚠️  Could not load {}.", generation.label);
        return None;
    }

    let options: Vec<String> = species
        .iter()
        .map(|s| match s.id {
            Some(id) => format!("#{:04} {}", id, title_case(&s.name)),
            None => title_case(&s.name),
        })
        .collect();
    let choice = Select::new("Pokemon:", options.clone())
        .with_page_size(15)
        .prompt()
        .ok()?;
    let pos = options.iter().position(|o| *o == choice)?;
    Some(species[pos].name.clone())
}

async fn detail(app: &App, name: &str) -> NavEvent {
    let view = match load_detail(&app.client, name).await {
        Ok(view) => view,
        Err(err) if err.is_not_found() => {
            println!("❌ Pokemon not found!");
            return NavEvent::Back;
        }
        Err(err) => {
            println!("❌ {}", err);
            return NavEvent::Back;
        }
    };

    print_detail(&view);
    print_effectiveness(app, &view.pokemon).await;

    let mut shiny = false;
    loop {
        let mut actions: Vec<(String, DetailAction)> = Vec::new();
        for stage in &view.evolution {
            if stage.name != view.pokemon.name {
                actions.push((
                    format!("➡️  Evolution: {}", title_case(&stage.name)),
                    DetailAction::Open(stage.name.clone()),
                ));
            }
        }
        for variety in &view.varieties {
            actions.push((
                format!("🔀 Form: {}", title_case(&variety.name)),
                DetailAction::Open(variety.name.clone()),
            ));
        }
        let toggle = if shiny { "✨ Normal version" } else { "✨ Shiny version" };
        actions.push((toggle.to_string(), DetailAction::ToggleShiny));
        actions.push(("💬 Ask the assistant".to_string(), DetailAction::Chat));
        actions.push(("⚔️  Battle analyzer".to_string(), DetailAction::Battle));
        actions.push(("⬅️  Back".to_string(), DetailAction::Back));

        let labels: Vec<String> = actions.iter().map(|(label, _)| label.clone()).collect();
        let action = Select::new("Next:", labels)
            .prompt()
            .ok()
            .and_then(|choice| actions.into_iter().find(|(label, _)| *label == choice))
            .map(|(_, action)| action)
            .unwrap_or(DetailAction::Back);

        match action {
            DetailAction::Open(name) => return NavEvent::SelectPokemon(name),
            DetailAction::ToggleShiny => {
                shiny = !shiny;
                print_sprite(&view.pokemon, shiny);
            }
            DetailAction::Chat => chat(app, &view.pokemon).await,
            DetailAction::Battle => return NavEvent::OpenBattle,
            DetailAction::Back => return NavEvent::Back,
        }
    }
}

fn print_sprite(pokemon: &PokemonRecord, shiny: bool) {
    let label = if shiny { "Shiny:" } else { "Sprite:" };
    match detail_sprite(pokemon, shiny) {
        Some(sprite) => println!("  {:<10} {}", label, sprite),
        None => println!("  {:<10} unavailable", label),
    }
}

fn print_detail(view: &DetailView) {
    let pokemon = &view.pokemon;
    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("#{:04} {}", pokemon.id, title_case(&pokemon.name));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    if let Some(description) = &view.description {
        println!("{}", description);
        println!();
    }
    println!("  Types:     {}", pokemon.type_names().join(" / "));
    println!("  Abilities: {}", view.abilities.display());
    if let Some(gender) = &view.gender {
        println!("  Gender:    {}", gender.display());
    }
    if let Some(height) = height_m(pokemon) {
        println!("  Height:    {} m", height);
    }
    if let Some(weight) = weight_kg(pokemon) {
        println!("  Weight:    {} kg", weight);
    }
    if let Some(species) = &view.species {
        if let Some(rate) = capture_rate(species) {
            println!("  Capture:   {}", rate);
        }
        if let Some(happiness) = base_happiness(species) {
            println!("  Happiness: {}", happiness);
        }
    }
    print_sprite(pokemon, false);
    if let Some(cry) = latest_cry(pokemon) {
        println!("  Cry:       {}", cry);
    }

    println!();
    println!("📊 Base stats:");
    for stat in StatName::ALL {
        if let Some(value) = pokemon.base_stat(stat) {
            println!("  {:<6} {:>3} {}", stat.short_label(), value, stat_bar(value));
        }
    }

    if !view.evolution.is_empty() {
        let line: Vec<String> = view.evolution.iter().map(|s| title_case(&s.name)).collect();
        println!();
        println!("🧬 Evolution: {}", line.join(" → "));
    }
    for omitted in &view.omitted {
        println!("⚠️  {}", omitted);
    }
    println!();
}

fn stat_bar(value: u32) -> String {
    let percent = value.min(MAX_BASE_STAT) * 100 / MAX_BASE_STAT;
    let filled = percent * STAT_BAR_WIDTH / 100;
    format!(
        "[{}{}]",
        "█".repeat(filled as usize),
        " ".repeat((STAT_BAR_WIDTH - filled) as usize)
    )
}

async fn print_effectiveness(app: &App, pokemon: &PokemonRecord) {
    let summary = app.client.type_effectiveness(&pokemon.type_names()).await.summarize();
    let render = |entries: &[(String, f64)]| {
        entries
            .iter()
            .map(|(name, m)| format!("{} {}", name, format_multiplier(*m)))
            .collect::<Vec<_>>()
            .join(", ")
    };
    if !summary.weaknesses.is_empty() {
        println!("  Weak to:    {}", render(&summary.weaknesses));
    }
    if !summary.resistances.is_empty() {
        println!("  Resists:    {}", render(&summary.resistances));
    }
    if !summary.immunities.is_empty() {
        println!("  Immune to:  {}", summary.immunities.join(", "));
    }
    println!();
}

async fn chat(app: &App, pokemon: &PokemonRecord) {
    println!("💬 Ask anything about {} (empty line to stop).", title_case(&pokemon.name));
    let mut history: Vec<ChatMessage> = Vec::new();
    loop {
        let question = match Text::new("You:").prompt() {
            Ok(q) if !q.trim().is_empty() => q,
            _ => return,
        };
        let result = app.chatbot.chat(pokemon, &question, &history).await;
        println!("🤖 {}", render_outcome(&result));
        println!();
        if let Ok(answer) = result {
            history.push(ChatMessage::user(question));
            history.push(ChatMessage::assistant(answer));
        }
    }
}

async fn battle(app: &mut App) {
    println!();
    println!("⚔️  Battle analyzer (Lv. 50, all IVs 31)");

    let Some((mine_record, mine)) = configure_side(app, "Your Pokemon:").await else {
        return;
    };
    let Some((opponent_record, opponent)) = configure_side(app, "Opponent Pokemon:").await else {
        return;
    };

    println!("🔄 Analyzing...");
    let result = app
        .analyzer
        .analyze(
            MatchupSide::new(&mine, &mine_record),
            MatchupSide::new(&opponent, &opponent_record),
        )
        .await;
    println!();
    println!("{}", render_outcome(&result));
    println!();
}

async fn configure_side(app: &mut App, message: &str) -> Option<(Arc<PokemonRecord>, PokemonLoadout)> {
    let record = loop {
        let name = prompt_pokemon_name(app, message).await?;
        match app.client.get_pokemon(&name).await {
            Ok(record) => break record,
            Err(_) => println!("❌ Pokemon not found!"),
        }
    };
    if let Some(sprite) = battle_sprite(&record) {
        println!("  {} {}", title_case(&record.name), sprite);
    }

    let moves = prompt_moves(&record);

    let item = Select::new("Held item:", ITEMS.choices())
        .with_page_size(10)
        .prompt()
        .ok();

    let nature_names: Vec<String> = NATURES.all().iter().map(|n| n.to_string()).collect();
    let nature = Select::new("Nature:", nature_names.clone())
        .with_page_size(10)
        .prompt()
        .ok()
        .and_then(|choice| nature_names.iter().position(|n| *n == choice))
        .map(|pos| NATURES.all()[pos].name.clone())
        .unwrap_or_else(|| DEFAULT_NATURE.to_string());

    let evs = prompt_evs();

    let options = CreateLoadoutOptions {
        moves: Some(moves),
        item,
        nature: Some(nature),
        evs: Some(*evs.as_table()),
    };
    match create_loadout(&record, options, &ITEMS, &NATURES) {
        Ok(loadout) => Some((record, loadout)),
        Err(err) => {
            println!("❌ {}", err);
            None
        }
    }
}

fn prompt_moves(record: &PokemonRecord) -> Vec<String> {
    let mut learnable = record.move_names();
    learnable.sort();
    if learnable.is_empty() {
        return Vec::new();
    }

    let validator = |selected: &[ListOption<&String>]| -> Result<Validation, CustomUserError> {
        if selected.len() > MAX_MOVES {
            Ok(Validation::Invalid(format!("Select at most {} moves", MAX_MOVES).into()))
        } else {
            Ok(Validation::Valid)
        }
    };

    MultiSelect::new(
        &format!("Moves for {} (space to toggle, enter to confirm):", title_case(&record.name)),
        learnable,
    )
    .with_page_size(10)
    .with_validator(validator)
    .prompt()
    .unwrap_or_default()
}

fn prompt_evs() -> EffortValues {
    let mut evs = EffortValues::default();
    loop {
        let mut options: Vec<String> = StatName::ALL
            .iter()
            .map(|&stat| format!("{} ({})", stat.label(), evs.get(stat)))
            .collect();
        options.push(format!("✅ Done ({} EVs left)", evs.remaining()));

        let choice = match Select::new("Effort values:", options.clone()).prompt() {
            Ok(choice) => choice,
            Err(_) => return evs,
        };
        let Some(stat) = options
            .iter()
            .position(|o| *o == choice)
            .and_then(|pos| StatName::ALL.get(pos).copied())
        else {
            return evs;
        };

        let requested = CustomType::<u32>::new(&format!("{} EVs (0-{}):", stat.label(), MAX_EV_PER_STAT))
            .with_error_message("Please enter a whole number")
            .prompt();
        if let Ok(requested) = requested {
            let applied = evs.adjust(stat, requested);
            if applied != requested {
                println!("ℹ️  Capped at {}", applied);
            }
        }
    }
}
