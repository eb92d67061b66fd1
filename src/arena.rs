//! Batch matches between the engine and a weaker opponent
//!
//! Every opening of a fixed number of plies is played out twice, once with
//! each side moving first after the opening. Games are independent, so they
//! run in parallel; each game's search stays single-threaded.

use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;

use std::time::Instant;

use crate::board::{Board, Dimensions, Piece};
use crate::error::Result;
use crate::game::Game;
use crate::greedy;
use crate::heuristic::Weights;
use crate::search::{Engine, EngineConfig};
use crate::terminal::GameState;

/// Who the engine plays against. The engine always plays the AI pieces.
#[derive(Copy, Clone, Debug)]
pub enum Opponent {
    Greedy(Weights),
    Engine(EngineConfig),
}

#[derive(Copy, Clone, Debug)]
pub struct ArenaConfig {
    pub dimensions: Dimensions,
    pub engine: EngineConfig,
    pub opponent: Opponent,
    /// length of the openings played before the engines take over
    pub plies: usize,
    pub show_progress: bool,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::default(),
            engine: EngineConfig::default(),
            opponent: Opponent::Greedy(Weights::default()),
            plies: 2,
            show_progress: false,
        }
    }
}

/// Results from the engine's point of view
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug)]
pub struct ArenaReport {
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
}

impl ArenaReport {
    pub fn games(&self) -> usize {
        self.wins + self.draws + self.losses
    }

    fn record(mut self, state: GameState) -> Self {
        match state {
            GameState::AiWin => self.wins += 1,
            GameState::PlayerWin => self.losses += 1,
            GameState::Draw => self.draws += 1,
            GameState::Playing => {}
        }
        self
    }
}

/// All move sequences of `plies` columns that are legal and leave the game
/// undecided, alternating pieces starting with the player
pub fn openings(dimensions: Dimensions, plies: usize) -> Vec<Vec<usize>> {
    let mut sequences: Vec<Vec<usize>> = vec![Vec::new()];
    for _ in 0..plies {
        sequences = sequences
            .into_iter()
            .flat_map(|sequence| {
                (0..dimensions.columns).map(move |column| {
                    let mut next = sequence.clone();
                    next.push(column);
                    next
                })
            })
            .filter(|sequence| opening_position(dimensions, sequence).is_some())
            .collect();
    }
    sequences
}

fn opening_position(dimensions: Dimensions, opening: &[usize]) -> Option<Board> {
    let mut game = Game::new(dimensions, Piece::Player);
    for &column in opening {
        match game.play(column) {
            Ok(GameState::Playing) => {}
            _ => return None,
        }
    }
    Some(game.board().clone())
}

enum Contender {
    Greedy(Weights),
    Engine(Engine),
}

/// Plays one game from `opening` with `first` to move afterwards
pub fn play_match(config: &ArenaConfig, opening: &[usize], first: Piece) -> Result<GameState> {
    let mut game = Game::new(config.dimensions, Piece::Player);
    for &column in opening {
        game.play(column)?;
    }
    let mut game = Game::from_board(game.board().clone(), first);

    let mut engine = Engine::new(config.engine);
    let mut opponent = match config.opponent {
        Opponent::Engine(opponent_config) => Contender::Engine(Engine::new(opponent_config)),
        Opponent::Greedy(weights) => Contender::Greedy(weights),
    };

    while !game.state().is_over() {
        let column = match (game.to_move(), &mut opponent) {
            (Piece::Ai, _) => engine.best_move(game.board())?.0,
            (_, Contender::Engine(opponent)) => {
                opponent.best_move_for(game.board(), Piece::Player)?.0
            }
            (_, Contender::Greedy(weights)) => {
                greedy::pick_best_move(game.board(), Piece::Player, weights)?
            }
        };
        game.play(column)?;
    }
    Ok(game.state())
}

/// Plays every opening from both sides and tallies the results
pub fn run(config: &ArenaConfig) -> Result<ArenaReport> {
    let start = Instant::now();
    let games: Vec<(Vec<usize>, Piece)> = openings(config.dimensions, config.plies)
        .into_iter()
        .flat_map(|opening| vec![(opening.clone(), Piece::Player), (opening, Piece::Ai)])
        .collect();

    let progress = if config.show_progress {
        ProgressBar::new(games.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Playing games: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    let results = games
        .par_iter()
        .map(|(opening, first)| {
            let state = play_match(config, opening, *first);
            progress.inc(1);
            state
        })
        .collect::<Result<Vec<_>>>()?;
    progress.finish();

    let report = results
        .into_iter()
        .fold(ArenaReport::default(), ArenaReport::record);
    info!(
        "arena finished {} games in {:.2}s: {} wins, {} draws, {} losses",
        report.games(),
        start.elapsed().as_secs_f64(),
        report.wins,
        report.draws,
        report.losses
    );
    Ok(report)
}
