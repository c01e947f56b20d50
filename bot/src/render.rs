use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::Context;
use minesweeper_engine::GameState;
use tracing::warn;

/// README section that gets replaced with the rendered board.
pub const BOARD_MARKER: &str = "<!-- MINESWEEPER-BOARD -->";

/// Text colors for the revealed numerals 1 through 8.
const NUMBER_COLORS: [&str; 8] = [
    "blue",
    "green",
    "red",
    "purple",
    "maroon",
    "turquoise",
    "black",
    "gray",
];

/// Renders the game as a markdown table, one glyph per cell: 🚩 for flags,
/// ⬜ for unrevealed cells (with the matching `click` command as hover
/// text), 💣 for revealed mines, blanks and colored numerals for the rest.
pub fn board_markdown(state: &GameState) -> String {
    let mut md = String::new();

    if state.is_game_over() {
        md.push_str(if state.is_won() {
            "## 🎉 You Win! 🎉\n\n"
        } else {
            "## 💥 Game Over 💥\n\n"
        });
        md.push_str("Comment `new game` to start a new game.\n\n");
    } else {
        md.push_str("## Game in Progress\n\n");
    }

    md.push_str("|   | A | B | C | D | E | F | G | H |\n");
    md.push_str("|---|---|---|---|---|---|---|---|---|\n");

    for (row, cells) in state.board().rows().enumerate() {
        let _ = write!(md, "| {} |", row + 1);

        for (col, cell) in cells.iter().enumerate() {
            if cell.flagged && !cell.revealed {
                md.push_str(" 🚩 |");
            } else if !cell.revealed {
                let _ = write!(
                    md,
                    " <a href=\"javascript:void(0)\" title=\"Click {}{}\">⬜</a> |",
                    (b'A' + col as u8) as char,
                    row + 1
                );
            } else if cell.has_mine {
                md.push_str(" 💣 |");
            } else if cell.adjacent_mines == 0 {
                md.push_str("   |");
            } else {
                let _ = write!(
                    md,
                    " <span style=\"color:{}\">{}</span> |",
                    NUMBER_COLORS[cell.adjacent_mines as usize - 1],
                    cell.adjacent_mines
                );
            }
        }

        md.push('\n');
    }

    md.push_str("\n### How to Play\n");
    md.push_str("- Comment `click A1` to reveal a tile\n");
    md.push_str("- Comment `flag B4` to flag a tile as a mine\n");
    md.push_str("- Comment `new game` to start a new game\n");

    md
}

/// Replaces everything between the board marker and the next HTML comment
/// (or the end of the file) with `board_md`. Returns `None` when the README
/// has no marker.
pub fn splice_readme(readme: &str, board_md: &str) -> Option<String> {
    let marker_end = readme.find(BOARD_MARKER)? + BOARD_MARKER.len();
    let section_end = readme[marker_end..]
        .find("<!--")
        .map(|offset| marker_end + offset)
        .unwrap_or(readme.len());

    let mut spliced = String::with_capacity(readme.len() + board_md.len());
    spliced.push_str(&readme[..marker_end]);
    spliced.push('\n');
    spliced.push_str(board_md);
    spliced.push('\n');
    spliced.push_str(&readme[section_end..]);
    Some(spliced)
}

pub fn update_readme(path: &Path, state: &GameState) -> anyhow::Result<()> {
    let readme =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    match splice_readme(&readme, &board_markdown(state)) {
        Some(updated) => {
            fs::write(path, updated).with_context(|| format!("writing {}", path.display()))
        }
        None => {
            warn!(
                "no {BOARD_MARKER} marker in {}, leaving it unchanged",
                path.display()
            );
            Ok(())
        }
    }
}
