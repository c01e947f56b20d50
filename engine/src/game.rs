use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::Board;
use crate::coords::Coord;

/// One move, already validated. Parsing comment text into a `Command` is
/// the driver's job.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    NewGame,
    Click(Coord),
    Flag(Coord),
}

/// The unit of persistence: one board plus the won/lost flags. A finished
/// game only leaves its terminal state through [`Command::NewGame`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    board: Board,
    game_over: bool,
    win: bool,
}

impl GameState {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_board(Board::generate(rng))
    }

    pub fn random() -> Self {
        Self::with_board(Board::random())
    }

    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            game_over: false,
            win: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_won(&self) -> bool {
        self.win
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::NewGame => self.reset(),
            Command::Click(coord) => self.click(coord),
            Command::Flag(coord) => self.flag(coord),
        }
    }

    /// Discards the current game and starts a fresh one. This is the only
    /// command that is honored once the game is over.
    pub fn reset(&mut self) {
        info!("starting a new game");
        *self = Self::random();
    }

    pub fn click(&mut self, coord: Coord) {
        if self.game_over {
            return;
        }

        let cell = *self.board.cell(coord);
        if cell.revealed || cell.flagged {
            debug!("click on {coord} ignored, cell is revealed or flagged");
            return;
        }

        if cell.has_mine {
            info!("mine hit at {coord}, game over");
            self.board.reveal_mines();
            self.game_over = true;
            return;
        }

        self.flood_reveal(coord);
        self.check_win();
    }

    pub fn flag(&mut self, coord: Coord) {
        if self.game_over {
            return;
        }

        let cell = self.board.cell_mut(coord);
        if cell.revealed {
            debug!("flag on {coord} ignored, cell is already revealed");
            return;
        }

        cell.flagged = !cell.flagged;
        // The win check also runs after flag moves, matching the original
        // bot, even though flagging alone can never newly satisfy it.
        self.check_win();
    }

    /// Reveals `start` and, through a work-list, the whole connected region
    /// of zero-adjacency cells around it plus the numbered border. Flagged
    /// cells block the fill; every cell is revealed at most once.
    fn flood_reveal(&mut self, start: Coord) {
        let mut pending = vec![start];

        while let Some(coord) = pending.pop() {
            let cell = self.board.cell_mut(coord);
            if cell.revealed || cell.flagged {
                continue;
            }
            cell.revealed = true;

            if cell.adjacent_mines == 0 {
                pending.extend(coord.neighbors());
            }
        }
    }

    fn check_win(&mut self) {
        if self.board.all_safe_revealed() {
            info!("all safe cells revealed, game won");
            self.game_over = true;
            self.win = true;
        }
    }
}
