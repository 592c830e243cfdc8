use clap::{Parser, ValueEnum};
use mlr_player::{
    do_turn, init_logging, Direction, FixedDirectionPlayer, Player, PlayerNode, RandomPlayer,
    SessionConfig, SessionMode, StdioTransport, WallFollower,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Reference player for the mlr turn protocol", long_about = None)]
struct Cli {
    #[arg(long, value_enum, default_value_t = Strategy::Random)]
    strategy: Strategy,
    /// Also print the decoded input and encoded output as plain lines.
    #[arg(long)]
    debug: bool,
    /// Keep answering turns until stdin closes instead of stopping after one.
    #[arg(long)]
    persistent: bool,
    #[arg(long, help = "Fix RNG seed for reproducible moves (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Strategy {
    Random,
    Left,
    Right,
    Up,
    Down,
    WallFollower,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let env = SessionConfig::from_env();
    let mode = if cli.persistent {
        SessionMode::Persistent
    } else {
        env.mode
    };
    let config = SessionConfig::new(cli.debug || env.debug, mode);

    let rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    match cli.strategy {
        Strategy::Random => play(RandomPlayer::new(rng), config),
        Strategy::Left => play_fixed(Direction::Left, config),
        Strategy::Right => play_fixed(Direction::Right, config),
        Strategy::Up => play_fixed(Direction::Up, config),
        Strategy::Down => play_fixed(Direction::Down, config),
        Strategy::WallFollower => play(WallFollower::new(rng), config),
    }
}

fn play_fixed(direction: Direction, config: SessionConfig) -> anyhow::Result<()> {
    let mut player = FixedDirectionPlayer::new(direction);
    let turns = do_turn(|input| player.turn(input), config)?;
    log::info!("session finished after {} turn(s)", turns);
    Ok(())
}

fn play<P: Player>(player: P, config: SessionConfig) -> anyhow::Result<()> {
    let mut node = PlayerNode::new(player, StdioTransport::stdio(), config);
    let turns = node.run()?;
    log::info!("session finished after {} turn(s)", turns);
    Ok(())
}
