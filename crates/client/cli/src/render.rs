//! Plain-text views of a session.
use std::fmt::Write as _;

use chase_core::{CellPos, MapLayout};
use chase_runtime::{Session, SessionSummary};

/// Glyph priority: player, enemy, smoke, flag, wall, floor.
///
/// Rows run from `y = 0` downwards, the same orientation
/// [`MapLayout::from_ascii`] reads, so an untouched session renders back to
/// its source map.
pub fn render_grid(session: &Session) -> String {
    let layout = session.layout();
    let cell_size = session.config().cell_size;
    let width = layout.width as usize;
    let height = layout.height as usize;

    let mut grid = vec![vec!['.'; width]; height];
    let mut put = |cell: CellPos, glyph: char| {
        if layout.contains(cell) {
            grid[cell.y as usize][cell.x as usize] = glyph;
        }
    };

    for &wall in &layout.walls {
        put(wall, '#');
    }
    for flag in session.flags() {
        put(flag.cell, 'F');
    }
    for smoke in session.smokes() {
        put(MapLayout::cell_at(smoke.bounds.center, cell_size), '~');
    }
    for enemy in session.enemies() {
        let glyph = if enemy.is_stunned() { 'z' } else { 'E' };
        put(MapLayout::cell_at(enemy.position(), cell_size), glyph);
    }
    put(MapLayout::cell_at(session.player().position(), cell_size), 'P');

    let mut out = String::with_capacity((width + 1) * height);
    for row in grid {
        out.extend(row);
        out.push('\n');
    }
    out
}

pub fn render_summary(summary: &SessionSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "outcome : {}", summary.outcome);
    let _ = writeln!(out, "score   : {}", summary.score);
    let _ = writeln!(
        out,
        "flags   : {}/{}",
        summary.flags_collected, summary.flags_total
    );
    let _ = writeln!(out, "fuel    : {:.1}", summary.fuel);
    let _ = writeln!(out, "stunned : {}", summary.stunned_enemies);
    let _ = writeln!(
        out,
        "time    : {:.2}s ({} frames)",
        summary.elapsed, summary.frame
    );
    let _ = writeln!(out, "digest  : {}", summary.digest);
    out
}
