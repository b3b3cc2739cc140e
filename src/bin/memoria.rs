//! Terminal front end: play the memory game from a line prompt.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use memory_match::{
    CardIndex, ClickOutcome, Difficulty, GameConfig, MemoryGame, Phase, RoundSnapshot, Standings,
};

#[derive(Parser, Debug)]
#[command(name = "memoria", about = "Juego de memoria para 2-4 jugadores")]
struct Args {
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fixed shuffle seed
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds a mismatched pair stays face up
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Starting difficulty: easy, medium or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,
}

#[derive(Debug, PartialEq)]
enum Command {
    Flip(CardIndex),
    Restart,
    Difficulty(Difficulty),
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    match words.next()? {
        "q" | "salir" => Some(Command::Quit),
        "r" | "reiniciar" => Some(Command::Restart),
        "d" => words.next()?.parse().ok().map(Command::Difficulty),
        n => n
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|n| CardIndex::try_from(n).ok())
            .map(Command::Flip),
    }
}

fn config_from(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path).context("loading config")?,
        None => GameConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(ms) = args.delay_ms {
        config = config.with_mismatch_delay(Duration::from_millis(ms));
    }
    if let Some(difficulty) = args.difficulty {
        config = config.with_difficulty(difficulty);
    }
    Ok(config)
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    text: &str,
) -> Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    lines.next().transpose().context("reading input")
}

/// Collect player count and names. Returns `false` if input ended.
fn run_setup(
    game: &mut MemoryGame,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<bool> {
    println!("Configuración del Juego");
    loop {
        let Some(line) = prompt(lines, "Número de Jugadores (2-4): ")? else {
            return Ok(false);
        };
        match game.set_player_count_text(&line) {
            Ok(count) => {
                println!("{count} jugadores");
                break;
            }
            Err(err) => println!("{err}"),
        }
    }

    loop {
        for seat in 0..game.setup().player_count() {
            if !game.setup().names()[seat].trim().is_empty() {
                continue;
            }
            let Some(name) = prompt(lines, &format!("Jugador {}: ", seat + 1))? else {
                return Ok(false);
            };
            game.set_name(seat, &name)?;
        }
        match game.start() {
            Ok(_) => return Ok(true),
            Err(err) => println!("{err}"),
        }
    }
}

fn render_round(round: &RoundSnapshot, difficulty: Difficulty) {
    println!();
    println!("Juego de Memoria [{difficulty}]");
    for (seat, player) in round.players.iter().enumerate() {
        let marker = if seat == round.active_player.index() { "▶" } else { " " };
        println!("{marker} {}: {} pares", player.name, player.matches);
    }
    println!("Movimientos: {}", round.moves);
    for row in round.cards.chunks(round.columns) {
        let cells: Vec<_> = row
            .iter()
            .map(|card| format!("{:>2} {}", card.index.index() + 1, card.face()))
            .collect();
        println!("{}", cells.join("   "));
    }
}

fn render_standings(standings: &Standings) {
    println!();
    println!("🎉 ¡Juego Terminado! 🎉");
    for row in standings.ranking() {
        let crown = if standings.result().is_winner(row.player) { "🏆 " } else { "" };
        println!("{crown}{}: {} pares", row.name, row.matches);
    }
}

fn render(game: &MemoryGame) {
    let snapshot = game.snapshot();
    if let Some(round) = &snapshot.round {
        render_round(round, snapshot.difficulty);
    }
    if let Some(standings) = &snapshot.standings {
        render_standings(standings);
    }
}

fn run_play(
    game: &mut MemoryGame,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<()> {
    render(game);
    loop {
        let Some(line) = prompt(lines, "\n[n] voltear, r reiniciar, d <nivel>, q salir > ")? else {
            return Ok(());
        };
        match parse_command(&line) {
            Some(Command::Quit) => return Ok(()),
            Some(Command::Restart) => {
                game.restart();
            }
            Some(Command::Difficulty(difficulty)) => {
                game.select_difficulty(difficulty);
            }
            Some(Command::Flip(card)) => {
                if let ClickOutcome::Mismatched { .. } = game.click(card) {
                    render(game);
                    let delay = game.config().mismatch_delay();
                    std::thread::sleep(delay);
                    game.advance(delay);
                }
            }
            None => {
                println!("?");
                continue;
            }
        }
        render(game);
        if matches!(game.phase(), Phase::Finished(_)) {
            println!("\nr reiniciar, d <nivel> para otro nivel, q salir");
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = config_from(&args)?;
    let mut game = MemoryGame::new(config);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    if run_setup(&mut game, &mut lines)? {
        run_play(&mut game, &mut lines)?;
    }
    Ok(())
}
