/// Rendering layer. All terminal output lives here.
///
/// Each function receives a mutable writer and an immutable render feed.
/// No game logic is performed; world coordinates (origin bottom-left, y up)
/// are only mapped onto terminal cells inside the border.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use space_survivor::config::GameConfig;
use space_survivor::entities::{RenderFeed, Sprite, SpriteKind};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_HEALTH: Color = Color::Red;
const C_PLAYER: Color = Color::White;
const C_MONSTER: Color = Color::DarkYellow;
const C_BULLET: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;

/// Player glyph per 45° sector, clockwise from up.
const HEADINGS: [&str; 8] = ["↑", "↗", "→", "↘", "↓", "↙", "←", "↖"];

/// Terminal size in cells.
#[derive(Clone, Copy, Debug)]
pub struct Screen {
    pub cols: u16,
    pub rows: u16,
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    feed: &RenderFeed,
    config: &GameConfig,
    screen: Screen,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, screen)?;
    draw_hud(out, feed, screen)?;

    // Player comes first in the feed; draw it last so it stays on top.
    for sprite in feed.sprites.iter().rev() {
        draw_sprite(out, sprite, config, screen)?;
    }

    draw_controls_hint(out, screen)?;

    if feed.game_over {
        draw_game_over(out, feed, screen)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, screen.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, screen: Screen) -> std::io::Result<()> {
    let w = screen.cols as usize;
    let h = screen.rows;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1: top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2: bottom bar
    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(screen.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, feed: &RenderFeed, screen: Screen) -> std::io::Result<()> {
    // Score: left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {}", feed.score)))?;

    // Health: right
    let health_text = format!("Health: {}", feed.health);
    let rx = screen
        .cols
        .saturating_sub(health_text.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_HEALTH))?;
    out.queue(Print(&health_text))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Map a world position to a cell inside the border, or `None` when it lies
/// outside the window.
pub fn to_cell(x: f32, y: f32, config: &GameConfig, screen: Screen) -> Option<(u16, u16)> {
    let (w, h) = (config.width(), config.height());
    if !(0.0..w).contains(&x) || !(0.0..h).contains(&y) {
        return None;
    }

    let inner_cols = screen.cols.saturating_sub(2).max(1);
    let inner_rows = screen.rows.saturating_sub(4).max(1);

    let col = ((x / w * inner_cols as f32) as u16).min(inner_cols - 1);
    let row = (((1.0 - y / h) * inner_rows as f32) as u16).min(inner_rows - 1);
    Some((1 + col, 2 + row))
}

/// Glyph for a heading in degrees (0 = up, clockwise).
pub fn heading_glyph(rotation: f32) -> &'static str {
    let sector = ((rotation.rem_euclid(360.0) + 22.5) / 45.0) as usize % HEADINGS.len();
    HEADINGS[sector]
}

fn draw_sprite<W: Write>(
    out: &mut W,
    sprite: &Sprite,
    config: &GameConfig,
    screen: Screen,
) -> std::io::Result<()> {
    let Some((col, row)) = to_cell(sprite.x, sprite.y, config, screen) else {
        return Ok(());
    };

    let (glyph, color) = match sprite.kind {
        SpriteKind::Player => (heading_glyph(sprite.rotation), C_PLAYER),
        SpriteKind::Monster => ("@", C_MONSTER),
        SpriteKind::Bullet => ("•", C_BULLET),
    };

    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(glyph))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, screen: Screen) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, screen.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("WASD / arrows : Move   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, feed: &RenderFeed, screen: Screen) -> std::io::Result<()> {
    let score_line = format!("Game Over Score: {}", feed.final_score.unwrap_or(feed.score));
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", Color::Red),
        ("║    GAME  OVER    ║", Color::Red),
        ("╚══════════════════╝", Color::Red),
        (&score_line, Color::Yellow),
        ("R - Play Again  Q - Quit", Color::White),
    ];

    let cx = screen.cols / 2;
    let start_row = (screen.rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
