use std::fmt::Write;

use memfire_core::{Session, Snapshot, TileView};

const HIDDEN_LABEL: &str = "❓";

/// Renders the board as a square-ish grid followed by the status line and score.
pub fn render_board(snapshot: &Snapshot, reveal: bool) -> String {
    let mut out = String::new();

    if snapshot.is_board_visible() {
        let columns = columns_for(snapshot.tiles.len());
        for row in snapshot.tiles.chunks(columns) {
            let cells: Vec<String> = row.iter().map(|tile| render_tile(tile, reveal)).collect();
            let _ = writeln!(out, "{}", cells.join(" "));
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "{}", snapshot.status);
    let _ = write!(out, "score: {}", snapshot.score);
    out
}

pub fn render_sets(session: &Session) -> String {
    let active = &session.active_set().name;
    session
        .symbol_sets()
        .map(|set| {
            let marker = if &set.name == active { "*" } else { " " };
            format!("{marker} {:<12} {}", set.name, set.preview())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_tile(tile: &TileView, reveal: bool) -> String {
    let face = if tile.face_up || reveal {
        tile.content.as_str()
    } else {
        HIDDEN_LABEL
    };
    let label = match (&tile.score_label, tile.face_up) {
        (Some(label), true) => label.as_str(),
        _ => "",
    };
    format!("[{:>2} {face} {label:<3}]", tile.key)
}

fn columns_for(tiles: usize) -> usize {
    let mut columns = 1;
    while columns * columns < tiles {
        columns += 1;
    }
    columns
}
