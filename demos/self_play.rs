use clap::{Parser, ValueEnum};
use connect4_agents::agent::{Agent, GameOutcome, RandomAgent, play_game};
use connect4_agents::board::Player;
use connect4_agents::mcts::{
    Budget, DEFAULT_BRANCHING, DEFAULT_ITERATIONS, MonteCarloTreeSearch, RolloutPolicy,
};
use connect4_agents::minimax::{DEFAULT_DEPTH, MinimaxAgent};
use connect4_agents::random::StandardRandomGenerator;
use flexi_logger::Logger;
use log::info;
use std::error::Error;
use std::time::Duration;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AgentKind {
    Mcts,
    Minimax,
    Random,
}

/// Plays Connect Four games between two agents.
#[derive(Debug, Parser)]
struct Args {
    /// Agent moving first.
    #[arg(long, value_enum, default_value_t = AgentKind::Mcts)]
    first: AgentKind,
    /// Agent moving second.
    #[arg(long, value_enum, default_value_t = AgentKind::Minimax)]
    second: AgentKind,
    /// Minimax search depth.
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: u32,
    /// MCTS iterations per move.
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: u32,
    /// MCTS thinking time per move in milliseconds, replaces --iterations.
    #[arg(long)]
    millis: Option<u64>,
    /// Use the static evaluation instead of random play inside MCTS.
    #[arg(long)]
    heuristic: bool,
    /// Random opponent replies per engine move when MCTS expands a node.
    #[arg(long, default_value_t = DEFAULT_BRANCHING)]
    branching: usize,
    /// Number of games to play.
    #[arg(long, default_value_t = 1)]
    games: u32,
}

fn build_agent(kind: AgentKind, player: Player, args: &Args) -> Box<dyn Agent> {
    match kind {
        AgentKind::Mcts => {
            let budget = match args.millis {
                Some(millis) => Budget::Time(Duration::from_millis(millis)),
                None => Budget::Iterations(args.iterations),
            };
            let policy = if args.heuristic {
                RolloutPolicy::Heuristic
            } else {
                RolloutPolicy::Random
            };
            Box::new(
                MonteCarloTreeSearch::<StandardRandomGenerator>::builder(player)
                    .with_budget(budget)
                    .with_rollout_policy(policy)
                    .with_branching(args.branching)
                    .build(),
            )
        }
        AgentKind::Minimax => Box::new(MinimaxAgent::<StandardRandomGenerator>::new(args.depth)),
        AgentKind::Random => Box::new(RandomAgent::<StandardRandomGenerator>::default()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let _logger = Logger::try_with_env_or_str("info")?.start()?;
    let args = Args::parse();

    let mut first = build_agent(args.first, Player::One, &args);
    let mut second = build_agent(args.second, Player::Two, &args);
    let (mut first_wins, mut second_wins, mut draws) = (0, 0, 0);

    for game in 1..=args.games {
        let record = play_game(first.as_mut(), second.as_mut())?;
        match record.outcome {
            GameOutcome::Winner(Player::One) => first_wins += 1,
            GameOutcome::Winner(Player::Two) => second_wins += 1,
            GameOutcome::Draw => draws += 1,
        }
        info!(
            "game {game}: {:?} after {} moves {:?}",
            record.outcome,
            record.moves.len(),
            record.moves
        );
        println!("{}\n", record.board);
    }

    info!(
        "{} (first) {first_wins} - {second_wins} {} (second), {draws} draws",
        first.name(),
        second.name()
    );
    Ok(())
}
