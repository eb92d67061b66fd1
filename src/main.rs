use anyhow::Result;
use clap::{Parser, Subcommand};

use std::io::{stdin, stdout, Write};
use std::time::Duration;

use connect4_minimax::arena::{self, ArenaConfig, Opponent};
use connect4_minimax::heuristic::Weights;
use connect4_minimax::*;

mod display;

#[derive(Debug, Parser)]
#[command(name = "connect4", about = "Play Connect 4 against a minimax agent")]
struct Args {
    /// Number of rows on the board
    #[arg(long, default_value_t = ROWS)]
    rows: usize,

    /// Number of columns on the board
    #[arg(long, default_value_t = COLUMNS)]
    columns: usize,

    /// Search depth of the AI in plies
    #[arg(short, long, default_value_t = SEARCH_DEPTH)]
    depth: usize,

    /// Let the AI make the first move
    #[arg(long)]
    ai_first: bool,

    /// Stop each AI search after this many milliseconds
    #[arg(long)]
    time_limit_ms: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play the AI against a weaker opponent from every short opening
    Arena {
        /// Search depth of the opponent; the greedy picker is used when omitted
        #[arg(long)]
        opponent_depth: Option<usize>,

        /// Number of opening moves to enumerate
        #[arg(long, default_value_t = 2)]
        plies: usize,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let dimensions = Dimensions::new(args.rows, args.columns)?;
    let mut config = EngineConfig::default().with_depth(args.depth);
    if let Some(ms) = args.time_limit_ms {
        config = config.with_time_limit(Duration::from_millis(ms));
    }

    match args.command {
        Some(Command::Arena {
            opponent_depth,
            plies,
        }) => run_arena(dimensions, config, opponent_depth, plies),
        None => {
            let first = if args.ai_first { Piece::Ai } else { Piece::Player };
            play(Game::new(dimensions, first), Engine::new(config))
        }
    }
}

fn run_arena(
    dimensions: Dimensions,
    engine: EngineConfig,
    opponent_depth: Option<usize>,
    plies: usize,
) -> Result<()> {
    let opponent = match opponent_depth {
        Some(depth) => Opponent::Engine(EngineConfig::default().with_depth(depth)),
        None => Opponent::Greedy(Weights::default()),
    };
    let report = arena::run(&ArenaConfig {
        dimensions,
        engine,
        opponent,
        plies,
        show_progress: true,
    })?;

    println!(
        "{} games: {} won, {} drawn, {} lost",
        report.games(),
        report.wins,
        report.draws,
        report.losses
    );
    Ok(())
}

fn play(mut game: Game, mut engine: Engine) -> Result<()> {
    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // game loop
    loop {
        display::draw(game.board())?;

        match game.state() {
            GameState::Playing => {
                let next_move = match game.to_move() {
                    // AI player
                    Piece::Ai => {
                        println!("AI is thinking...");
                        stdout().flush()?;

                        let (column, score) = engine.best_move(game.board())?;
                        println!("AI plays {} (score {})", column + 1, score);
                        column + 1
                    }
                    // human player
                    _ => {
                        print!("Move input > ");
                        stdout().flush()?;
                        let mut input_str = String::new();
                        if stdin.read_line(&mut input_str)? == 0 {
                            return Ok(());
                        }

                        match input_str.trim().parse::<usize>() {
                            Err(_) => {
                                println!("Invalid number: {}", input_str.trim());
                                continue;
                            }
                            Ok(column) => column,
                        }
                    }
                };

                if let Err(err) = game.play_checked(next_move) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            GameState::PlayerWin => {
                println!("Player wins!");
                break;
            }
            GameState::AiWin => {
                println!("AI wins!");
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}
