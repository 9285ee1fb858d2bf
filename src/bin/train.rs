//! Interactive strategy trainer.
//!
//! Deals hands in the terminal and shows the recommended action mix. In
//! training mode the mix stays hidden until you guess.
//!
//! ```text
//! cargo run --release --bin train -- --mode training --game-mode turn-river --players 6
//! ```

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use dialoguer::{Input, Select};
use log::{error, info, LevelFilter};

use gto_trainer::strategy::{Action, Position};
use gto_trainer::trainer::{render, GameMode, Mode, Session, TrainerConfig, MAX_PLAYERS, MIN_PLAYERS};

#[derive(Parser, Debug)]
#[command(name = "train", about = "Interactive poker strategy trainer")]
struct Args {
    /// JSON config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// practice | training
    #[arg(long)]
    mode: Option<Mode>,
    /// preflop | postflop | turn-river
    #[arg(long)]
    game_mode: Option<GameMode>,
    /// Players at the table (2-9)
    #[arg(long)]
    players: Option<u8>,
    /// UTG | CO | BTN | SB | BB
    #[arg(long)]
    position: Option<Position>,
    /// Seed for reproducible deals
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

enum Choice {
    Guess(Action),
    NextStreet,
    NewHand,
    Settings,
    Quit,
}

fn main() {
    let args = Args::parse();
    gto_trainer::init_logging(args.log_level);

    if let Err(e) = run(args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = load_config(&args)?;
    info!("starting session: {:?}", config);
    let mut session = Session::new(config)?;

    println!("{}", "=== GTO Trainer ===".bold());

    loop {
        println!();
        print!("{}", render::table(&session));
        if session.is_revealed() {
            print!("{}", render::advice(&session.advice()));
        }
        if session.config().mode == Mode::Training {
            println!("{}", render::score(&session.score()).dimmed());
        }

        match prompt(&session)? {
            Choice::Guess(action) => {
                let outcome = session.guess(action)?;
                println!("{}", render::outcome(&outcome));
            }
            Choice::NextStreet => {
                session.advance_street()?;
            }
            Choice::NewHand => session.new_hand(),
            Choice::Settings => settings(&mut session)?,
            Choice::Quit => break,
        }
    }

    if session.score().total > 0 {
        println!("\nFinal {}", render::score(&session.score()));
    }
    Ok(())
}

fn load_config(args: &Args) -> Result<TrainerConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => {
            info!("loading config from {}", path.display());
            TrainerConfig::from_json_file(path)?
        }
        None => TrainerConfig::default(),
    };
    if let Some(mode) = args.mode {
        config = config.with_mode(mode);
    }
    if let Some(game_mode) = args.game_mode {
        config = config.with_game_mode(game_mode);
    }
    if let Some(players) = args.players {
        config = config.with_players(players);
    }
    if let Some(position) = args.position {
        config = config.with_position(position);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    config.validate()?;
    Ok(config)
}

fn prompt(session: &Session) -> Result<Choice, Box<dyn Error>> {
    let mut choices = Vec::new();
    if session.config().mode == Mode::Training && session.current_guess().is_none() {
        for &action in session.options() {
            choices.push((format!("Guess: {}", action.title()), Choice::Guess(action)));
        }
    }
    if session.can_advance() {
        choices.push((String::from("Next street"), Choice::NextStreet));
    }
    choices.push((String::from("New hand"), Choice::NewHand));
    choices.push((String::from("Settings"), Choice::Settings));
    choices.push((String::from("Quit"), Choice::Quit));

    let labels: Vec<&str> = choices.iter().map(|(label, _)| label.as_str()).collect();
    let index = Select::new()
        .with_prompt("Action")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(choices.swap_remove(index).1)
}

fn settings(session: &mut Session) -> Result<(), Box<dyn Error>> {
    let items = ["Mode", "Game mode", "Players", "Position", "Back"];
    let choice = Select::new()
        .with_prompt("Settings")
        .items(&items)
        .default(0)
        .interact()?;

    match choice {
        0 => {
            let names: Vec<&str> = Mode::ALL.iter().map(Mode::name).collect();
            let i = Select::new().with_prompt("Mode").items(&names).interact()?;
            session.set_mode(Mode::ALL[i]);
        }
        1 => {
            let names: Vec<&str> = GameMode::ALL.iter().map(GameMode::title).collect();
            let i = Select::new().with_prompt("Game mode").items(&names).interact()?;
            session.set_game_mode(GameMode::ALL[i]);
        }
        2 => {
            let players: u8 = Input::new()
                .with_prompt(format!("Players [{}-{}]", MIN_PLAYERS, MAX_PLAYERS))
                .default(session.config().player_count)
                .validate_with(|n: &u8| -> Result<(), String> {
                    if (MIN_PLAYERS..=MAX_PLAYERS).contains(n) {
                        Ok(())
                    } else {
                        Err(format!("Enter a number from {} to {}", MIN_PLAYERS, MAX_PLAYERS))
                    }
                })
                .interact_text()?;
            session.set_player_count(players)?;
        }
        3 => {
            let names: Vec<&str> = Position::ALL.iter().map(Position::name).collect();
            let i = Select::new().with_prompt("Position").items(&names).interact()?;
            session.set_position(Position::ALL[i]);
        }
        _ => {}
    }
    Ok(())
}
