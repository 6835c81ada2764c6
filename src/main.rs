use std::time::Duration;

use anyhow::{Context, Result};
use boggle_duel::{
    config::{Config, ReportFormat},
    dictionary::DictionaryIndex,
    game::{Round, RoundOutcome, Winner, WordVerdict},
    models::Player,
    session::{ask_turn_duration, await_ready, collect_submissions, Console},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing on stderr; stdout is the game console
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "boggle_duel=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // A missing word list is fatal; there is nothing to play without it
    let dictionary = DictionaryIndex::load(&config.game.dictionary_path)
        .await
        .with_context(|| {
            format!(
                "Download a word list to {} or set DICTIONARY_PATH",
                config.game.dictionary_path
            )
        })?;

    let mut console = Console::stdin();
    let [first_name, second_name] = &config.players.names;

    let Some(turn_duration) = (match config.game.turn_duration {
        Some(duration) => Some(duration),
        None => ask_turn_duration(&mut console).await,
    }) else {
        tracing::info!("Input closed during setup");
        return Ok(());
    };
    println!("Each turn will last {} seconds", turn_duration.as_secs());

    println!("\nBoth players must type 'READY' to start the game");
    if !await_ready(&mut console, [first_name.as_str(), second_name.as_str()]).await {
        tracing::info!("Input closed before both players were ready");
        return Ok(());
    }
    println!("\nBoth players ready");

    let round = Round::generate(&dictionary, &config.round_settings())?;
    println!("\nBoggle Grid:\n{}", round.grid);

    let first = play_turn(&mut console, first_name, turn_duration).await;
    let second = play_turn(&mut console, second_name, turn_duration).await;
    let outcome = round.resolve(&dictionary, first, second);

    match config.report {
        ReportFormat::Text => print_report(&outcome),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
    }

    Ok(())
}

async fn play_turn(console: &mut Console, name: &str, turn_duration: Duration) -> Player {
    println!(
        "{name}'s turn: enter words one at a time ({} seconds)",
        turn_duration.as_secs()
    );
    let words = collect_submissions(console.lines(), turn_duration).await;
    println!("Time's up\n");
    Player::new(name, words)
}

fn print_report(outcome: &RoundOutcome) {
    println!("Words found in the grid:");
    println!("{}\n", outcome.found_words.join(", "));

    for player in &outcome.players {
        println!("{}'s total points: {}", player.name, player.score);
        println!("  Words scored: {}", player.words.join(", "));
        for (word, verdict) in &player.verdicts {
            match verdict {
                WordVerdict::Scored { .. } => {}
                WordVerdict::Shared => println!("  '{word}' was found by both players"),
                WordVerdict::NotInDictionary => println!("  '{word}' is not in the dictionary"),
                WordVerdict::NotOnGrid => println!("  '{word}' is not valid based on the grid"),
            }
        }
    }

    match &outcome.winner {
        Winner::Player { name } => println!("\nCongratulations {name} is the winner!"),
        Winner::Tie => println!("\nIt's a tie!"),
    }
}
