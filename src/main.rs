use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread::sleep;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use color_war::{
    AuthorizedPlayers, Card, EventSink, GameConfig, GameEngine, GameError, GameEvent, GameMode,
    GameResult, Leaderboard, LeaderboardSink, PlayerId, ScoringPolicy,
};
use tracing::{info, Level};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Scoring {
    CardCount,
    LastRound,
}

impl From<Scoring> for ScoringPolicy {
    fn from(scoring: Scoring) -> Self {
        match scoring {
            Scoring::CardCount => ScoringPolicy::CardCount,
            Scoring::LastRound => ScoringPolicy::LastRound,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "color-war")]
#[command(about = "Two-player color war card game")]
struct Args {
    /// Game mode (fast, normal, slow). Prompted for when omitted
    #[arg(short, long)]
    mode: Option<String>,

    /// JSON array of authorized player names
    #[arg(short, long, default_value = "authorized_players.json")]
    players: PathBuf,

    /// Leaderboard file. Results are only recorded when set
    #[arg(short, long)]
    leaderboard: Option<PathBuf>,

    /// Number of unique cards in the deck
    #[arg(long, default_value_t = color_war::core::DEFAULT_DECK_SIZE)]
    deck_size: usize,

    /// How the overall winner is decided
    #[arg(long, value_enum, default_value_t = Scoring::CardCount)]
    scoring: Scoring,

    /// Deck seed, for replaying a game
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the pauses between narrated rounds
    #[arg(long)]
    no_delay: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: Level,
}

/// Renders engine events as terminal narration.
struct Narrator {
    names: [String; 2],
    delay: bool,
}

impl Narrator {
    fn name(&self, player: PlayerId) -> String {
        capitalize(&self.names[player.index()])
    }

    fn pause(&self, millis: u64) {
        if self.delay {
            sleep(Duration::from_millis(millis));
        }
    }
}

impl EventSink for Narrator {
    fn emit(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Rejected { .. } => {
                println!(
                    "Sorry, either {} or {}, or both of you are not authorized to play",
                    self.names[0], self.names[1]
                );
            }
            GameEvent::GameStarted { deck_size, seed } => {
                println!("Dealing {deck_size} cards (seed {seed})");
            }
            GameEvent::CardDrawn { player, card } => {
                println!("{} draws card: {card}", self.name(*player));
                self.pause(2500);
            }
            GameEvent::RoundResolved { winner, .. } => {
                println!("{} is the winner of this round.", self.name(*winner));
                println!("{}", "-".repeat(72));
            }
            GameEvent::GameFinished { .. } => self.pause(2000),
        }
    }
}

fn capitalize(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn prompt(question: &str) -> anyhow::Result<String> {
    print!("{question}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_owned())
}

fn format_hand(cards: &[Card]) -> String {
    let cards: Vec<String> = cards.iter().map(Card::to_string).collect();
    format!("[{}]", cards.join(", "))
}

fn print_results(engine: &GameEngine, narrator: &Narrator) -> anyhow::Result<()> {
    for (id, player) in engine.players().iter() {
        println!(
            "{} had these cards: {}",
            narrator.name(id),
            format_hand(player.hand.as_slice())
        );
        println!("Overall, they had {} cards!", player.card_count());
        println!("{}", "-".repeat(72));
        narrator.pause(2000);
    }

    let outcome = engine.outcome()?;
    match outcome.result {
        GameResult::Winner(winner) => {
            println!("{} is the winner of this game!", narrator.name(winner));
            narrator.pause(2000);
            println!("Better luck next time, {}!", narrator.name(winner.opponent()));
        }
        GameResult::Draw => println!("It's a draw!"),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .init();

    let first = prompt("What is your name player 1?: ")?;
    let second = prompt("What is your name player 2?: ")?;
    let mode: GameMode = match &args.mode {
        Some(mode) => mode.parse()?,
        None => match prompt("Choose a game (fast/normal/slow): ")?.parse() {
            Ok(mode) => mode,
            Err(GameError::UnknownMode(mode)) => {
                println!("I don't think that \"{mode}\" was one of the options...");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        },
    };

    let authorized = AuthorizedPlayers::load(&args.players)
        .with_context(|| format!("could not load {}", args.players.display()))?;
    let mut leaderboard = args
        .leaderboard
        .as_ref()
        .map(Leaderboard::load)
        .transpose()
        .context("could not load leaderboard")?;

    let mut config = GameConfig::new()
        .with_deck_size(args.deck_size)
        .with_scoring(args.scoring.into());
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    info!(?mode, deck_size = args.deck_size, "configured game");

    let mut narrator = Narrator {
        names: [first.clone(), second.clone()],
        delay: mode == GameMode::Normal && !args.no_delay,
    };
    let mut engine = GameEngine::new(config, first, second);
    let board = leaderboard
        .as_mut()
        .map(|board| board as &mut dyn LeaderboardSink);

    match mode.play(&mut engine, &authorized, &mut narrator, board) {
        Ok(_) => print_results(&engine, &narrator)?,
        Err(GameError::Unauthorized { .. }) => return Ok(()),
        Err(err) => return Err(err.into()),
    }

    if let Some(board) = &leaderboard {
        println!("Leaderboard:");
        for (rank, entry) in board.top(5).iter().enumerate() {
            println!("{:>2}. {} - {} cards", rank + 1, capitalize(&entry.name), entry.cards);
        }
    }
    Ok(())
}
