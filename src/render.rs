//! Rendering and filesystem collaborators.
//!
//! Strategies themselves stay pure; the orchestration layer uses this
//! module to persist solution artifacts. Each strategy's artifacts go
//! into a directory named `<strategy>_solutions_<N>`, one SVG board
//! per solution. Rendering is fire-and-forget: nothing in the core
//! inspects the written files.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::board::Board;

const CELL: usize = 40;

/// Failure while writing a solution artifact.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write board artifact: {0}")]
    Io(#[from] io::Error),
}

/// Creates (if needed) and returns the per-strategy artifact directory
/// `<slug>_solutions_<n>` under `root`.
pub fn solutions_dir(root: &Path, slug: &str, n: usize) -> io::Result<PathBuf> {
    let dir = root.join(format!("{slug}_solutions_{n}"));
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Renders a board as an SVG chessboard with queen markers and writes
/// it to `path`.
///
/// Accepts any board; unassigned rows simply render without a marker.
pub fn render_solution(board: &Board, path: &Path) -> Result<(), RenderError> {
    fs::write(path, board_svg(board))?;
    Ok(())
}

fn board_svg(board: &Board) -> String {
    let n = board.n();
    let side = n * CELL;
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{side}" height="{side}" viewBox="0 0 {side} {side}">"#
    );
    for row in 0..n {
        for col in 0..n {
            let fill = if (row + col) % 2 == 0 { "#f0d9b5" } else { "#b58863" };
            let _ = writeln!(
                svg,
                r#"  <rect x="{}" y="{}" width="{CELL}" height="{CELL}" fill="{fill}"/>"#,
                col * CELL,
                row * CELL
            );
        }
        let queen_col = board.column(row);
        if queen_col >= 0 {
            let _ = writeln!(
                svg,
                r#"  <text x="{}" y="{}" font-size="{}" text-anchor="middle" dominant-baseline="central">&#9819;</text>"#,
                queen_col as usize * CELL + CELL / 2,
                row * CELL + CELL / 2,
                CELL * 3 / 4
            );
        }
    }
    svg.push_str("</svg>\n");
    svg
}
