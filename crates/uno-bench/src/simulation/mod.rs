use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rand::{RngCore, SeedableRng, rngs::StdRng};
use serde::Serialize;
use thiserror::Error;
use tracing::{Level, event};

use uno_bot::policy::{EnginePolicy, FirstLegalPolicy, Policy, TurnView};
use uno_core::game::state::{GameError, GameState, PlayOutcome};
use uno_core::model::score::Scoreboard;

use crate::config::{AgentKind, BenchConfig, ResolvedOutputs};
use crate::report::{AgentStanding, WinReport};

/// Hard stop for a single game; a healthy game ends in well under a
/// thousand turns, so hitting this means the table is wedged.
const MAX_TURNS_PER_GAME: usize = 5_000;

/// Primary entry point for running win-rate simulations.
pub struct SimulationRunner {
    config: BenchConfig,
    outputs: ResolvedOutputs,
}

/// Summary details returned after a run.
pub struct RunSummary {
    pub simulations: usize,
    pub games_per_simulation: usize,
    pub rows_written: usize,
    pub stalled_games: usize,
    pub jsonl_path: PathBuf,
    pub summary_path: PathBuf,
    pub report: WinReport,
}

#[derive(Debug, Serialize)]
struct GameLogRow {
    run_id: String,
    game_id: String,
    simulation_index: usize,
    game_index: usize,
    game_seed: u64,
    went_out: Option<usize>,
    forfeit_points: u32,
    leader: String,
    turns: usize,
}

struct GameOutcome {
    went_out: Option<usize>,
    forfeit_points: u32,
    turns: usize,
}

impl SimulationRunner {
    pub fn new(config: BenchConfig, outputs: ResolvedOutputs) -> Self {
        Self { config, outputs }
    }

    /// Execute every configured simulation, streaming one JSONL row per
    /// game and aggregating leader counts into the final report.
    ///
    /// Within a simulation the match score carries from game to game, and
    /// the seat leading the cumulative score after each game collects the
    /// win for that game. Each simulation starts from a clean slate with
    /// fresh policy instances.
    pub fn run(&self) -> Result<RunSummary, RunnerError> {
        ensure_parent(self.outputs.jsonl.parent())?;
        ensure_parent(self.outputs.summary_md.parent())?;

        let mut writer = BufWriter::new(File::create(&self.outputs.jsonl)?);
        let mut rng = StdRng::seed_from_u64(self.config.simulation.seed.unwrap_or(0));
        let seats = self.config.agents.len();
        let mut wins = vec![0usize; seats];
        let mut rows_written = 0usize;
        let mut stalled_games = 0usize;

        for simulation_index in 0..self.config.simulation.simulations {
            let mut scoreboard = Scoreboard::new(seats);

            for game_index in 0..self.config.simulation.games_per_simulation {
                let game_seed = rng.next_u64();
                let mut policies = self.build_policies();
                let outcome = play_game(game_seed, seats, &mut policies, &scoreboard)?;

                if let Some(winner) = outcome.went_out {
                    scoreboard.record_game(winner, outcome.forfeit_points);
                } else {
                    stalled_games += 1;
                }
                let leader = scoreboard.winner();
                wins[leader] += 1;

                event!(
                    Level::DEBUG,
                    simulation_index,
                    game_index,
                    game_seed,
                    went_out = ?outcome.went_out,
                    leader,
                    turns = outcome.turns,
                    "game finished"
                );

                let row = GameLogRow {
                    run_id: self.config.run_id.clone(),
                    game_id: format!("S{simulation_index:03}_G{game_index:05}"),
                    simulation_index,
                    game_index,
                    game_seed,
                    went_out: outcome.went_out,
                    forfeit_points: outcome.forfeit_points,
                    leader: self.config.agents[leader].name.clone(),
                    turns: outcome.turns,
                };
                serde_json::to_writer(&mut writer, &row)?;
                writer.write_all(b"\n")?;
                rows_written += 1;
            }

            event!(
                Level::INFO,
                simulation_index,
                standings = ?scoreboard.standings(),
                "simulation finished"
            );
        }

        writer.flush()?;

        let total_games =
            self.config.simulation.simulations * self.config.simulation.games_per_simulation;
        let standings = self
            .config
            .agents
            .iter()
            .zip(&wins)
            .map(|(agent, &won)| AgentStanding {
                name: agent.name.clone(),
                wins: won,
            })
            .collect();
        let report = WinReport {
            total_games,
            standings,
        };
        report.write_markdown(&self.outputs.summary_md)?;

        Ok(RunSummary {
            simulations: self.config.simulation.simulations,
            games_per_simulation: self.config.simulation.games_per_simulation,
            rows_written,
            stalled_games,
            jsonl_path: self.outputs.jsonl.clone(),
            summary_path: self.outputs.summary_md.clone(),
            report,
        })
    }

    fn build_policies(&self) -> Vec<Box<dyn Policy>> {
        self.config
            .agents
            .iter()
            .map(|agent| match agent.kind {
                AgentKind::Engine => Box::new(EnginePolicy::default()) as Box<dyn Policy>,
                AgentKind::FirstLegal => Box::new(FirstLegalPolicy) as Box<dyn Policy>,
            })
            .collect()
    }
}

/// Drive one game to completion. Every seat follows the same protocol:
/// play the policy's pick, otherwise draw once and play the drawn card if
/// it is legal, otherwise pass.
fn play_game(
    seed: u64,
    seats: usize,
    policies: &mut [Box<dyn Policy>],
    scoreboard: &Scoreboard,
) -> Result<GameOutcome, RunnerError> {
    let mut game = GameState::deal(seats, seed)?;
    let mut turns = 0usize;

    while !game.is_over() {
        if turns >= MAX_TURNS_PER_GAME {
            event!(Level::WARN, seed, turns, "game stalled, abandoning it");
            return Ok(GameOutcome {
                went_out: None,
                forfeit_points: 0,
                turns,
            });
        }
        turns += 1;

        let seat = game.current_player();
        let snapshot = game.snapshot_for(seat, scoreboard);
        let policy = &mut policies[seat];

        let (choice, call) = {
            let view = TurnView {
                hand: game.hand(seat),
                up_card: game.upcard(),
                called_color: game.called_color(),
                snapshot: &snapshot,
            };
            let choice = policy.choose_card(&view);
            let call = match choice {
                Some(index) if view.hand[index].rank.is_wild() => Some(policy.call_color(&view)),
                _ => None,
            };
            (choice, call)
        };

        if let Some(index) = choice {
            if game.play_from_hand(seat, index, call)? == PlayOutcome::WentOut {
                break;
            }
            continue;
        }

        match game.take_draw(seat) {
            Ok(drawn) => {
                if drawn.can_play_on(game.upcard(), game.called_color()) {
                    let index = game.hand(seat).len() - 1;
                    let call = if drawn.rank.is_wild() {
                        let view = TurnView {
                            hand: game.hand(seat),
                            up_card: game.upcard(),
                            called_color: game.called_color(),
                            snapshot: &snapshot,
                        };
                        Some(policy.call_color(&view))
                    } else {
                        None
                    };
                    if game.play_from_hand(seat, index, call)? == PlayOutcome::WentOut {
                        break;
                    }
                } else {
                    game.pass_turn(seat)?;
                }
            }
            Err(GameError::DrawPileExhausted) => game.pass_turn(seat)?,
            Err(other) => return Err(other.into()),
        }
    }

    match game.winner() {
        Some(winner) => Ok(GameOutcome {
            went_out: Some(winner),
            forfeit_points: game.forfeit_total_against(winner),
            turns,
        }),
        None => Ok(GameOutcome {
            went_out: None,
            forfeit_points: 0,
            turns,
        }),
    }
}

fn ensure_parent(path: Option<&Path>) -> Result<(), RunnerError> {
    if let Some(dir) = path.filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("I/O failure during simulation: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize game row: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("game rules violated: {0}")]
    Game(#[from] GameError),
}
