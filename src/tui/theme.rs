//! Centralized color theme for the apothecary TUI.
//!
//! All color constants are RGB truecolor. Views import from here
//! instead of using inline `Color::*` literals.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

use crate::core::alchemy::Rarity;

// ── Primary palette ─────────────────────────────────────────────────────────

/// Herb green — primary accent, focused borders.
pub const PRIMARY: Color = Color::Rgb(0x2E, 0x7D, 0x32);
/// Light green — highlights, hints.
pub const PRIMARY_LIGHT: Color = Color::Rgb(0x66, 0xBB, 0x6A);

/// Amber — titles, potion names.
pub const ACCENT: Color = Color::Rgb(0xFF, 0xB3, 0x00);

// ── Backgrounds ─────────────────────────────────────────────────────────────

pub const BG_BASE: Color = Color::Rgb(0x10, 0x14, 0x10);

// ── Text ────────────────────────────────────────────────────────────────────

pub const TEXT: Color = Color::Rgb(0xE0, 0xE0, 0xE0);
pub const TEXT_MUTED: Color = Color::Rgb(0x80, 0x80, 0x80);
pub const TEXT_DIM: Color = Color::Rgb(0x50, 0x50, 0x50);

// ── Semantic ────────────────────────────────────────────────────────────────

pub const ERROR: Color = Color::Rgb(0xEF, 0x53, 0x50);
pub const SUCCESS: Color = Color::Rgb(0x66, 0xBB, 0x6A);
pub const WARNING: Color = Color::Rgb(0xFF, 0xA7, 0x26);
pub const INFO: Color = Color::Rgb(0x42, 0xA5, 0xF5);

// ── Rarity ──────────────────────────────────────────────────────────────────

pub const RARITY_COMMON: Color = Color::Rgb(0xBD, 0xBD, 0xBD);
pub const RARITY_UNCOMMON: Color = Color::Rgb(0x4C, 0xAF, 0x50);
pub const RARITY_RARE: Color = Color::Rgb(0x21, 0x96, 0xF3);
pub const RARITY_LEGENDARY: Color = Color::Rgb(0xFF, 0x98, 0x00);

/// Display color for a rarity tier.
pub fn rarity_color(rarity: &Rarity) -> Color {
    match rarity {
        Rarity::Common => RARITY_COMMON,
        Rarity::Uncommon => RARITY_UNCOMMON,
        Rarity::Rare => RARITY_RARE,
        Rarity::Legendary => RARITY_LEGENDARY,
        Rarity::Unrecognized(_) => TEXT_MUTED,
    }
}

/// Bold style in the tier's color; legendary items are also underlined.
pub fn rarity_style(rarity: &Rarity) -> Style {
    let style = Style::default()
        .fg(rarity_color(rarity))
        .add_modifier(Modifier::BOLD);
    if *rarity == Rarity::Legendary {
        style.add_modifier(Modifier::UNDERLINED)
    } else {
        style
    }
}

// ── Style helpers ───────────────────────────────────────────────────────────

/// Accent-colored bold text (titles, potion names).
pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Section header style.
pub fn heading() -> Style {
    Style::default().fg(PRIMARY_LIGHT).add_modifier(Modifier::BOLD)
}

/// Muted label text.
pub fn muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

/// Key hint style (e.g., "[q]:quit").
pub fn key_hint() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Status bar brand badge.
pub fn brand_badge() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

// ── Block builders ──────────────────────────────────────────────────────────

/// A bordered block with focused styling.
pub fn block_focused(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PRIMARY))
}

/// A bordered block with default styling.
pub fn block_default(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(TEXT_DIM))
}
