use std::path::PathBuf;

use clap::{Parser, Subcommand};
use minesweeper_bot::{command, persist, render};
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "minesweeper-bot",
    about = "Issue-comment driven minesweeper for a repository README"
)]
struct Cli {
    /// Path to the persisted game state
    #[arg(long, default_value = "game-state.json")]
    state: PathBuf,

    #[command(subcommand)]
    command: BotCommand,
}

#[derive(Subcommand)]
enum BotCommand {
    /// Apply one issue comment to the saved game
    Process {
        /// Raw comment body, e.g. "click A1"
        #[arg(long)]
        comment: String,
    },
    /// Render the saved game into the README board section
    Render {
        #[arg(long, default_value = "README.md")]
        readme: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        BotCommand::Process { comment } => {
            let mut state = persist::load_state(&cli.state);

            // Malformed comments leave the game untouched; the state file
            // is rewritten either way, one transaction per invocation.
            match command::parse_comment(&comment) {
                Ok(cmd) => {
                    info!("applying {cmd:?}");
                    state.apply(cmd);
                }
                Err(err) => warn!("ignoring comment {comment:?}: {err}"),
            }

            persist::store_state(&cli.state, &state)?;
        }
        BotCommand::Render { readme } => {
            let state = persist::load_state(&cli.state);
            render::update_readme(&readme, &state)?;
        }
    }

    Ok(())
}
