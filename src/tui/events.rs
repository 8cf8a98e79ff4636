use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

use crate::core::alchemy::{PoolKind, Rarity};

/// High-level actions resolved from key presses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Roll(PoolKind),
    Brew,
    HistoryBack,
    HistoryForward,
    IncreaseCount,
    DecreaseCount,
    ToggleRarity(Rarity),
    CycleHabitat(PoolKind),
    ToggleSeed,
    ResetSeen,
    ToggleHelp,
    Quit,
}

/// Severity of a status-line message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Short message shown in the status area until its TTL runs out.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub ttl_ticks: u32,
}

impl Notification {
    pub fn new(message: impl Into<String>, level: NotificationLevel) -> Self {
        Self {
            message: message.into(),
            level,
            ttl_ticks: 40,
        }
    }
}

/// Map a terminal event to an action.
pub fn map_input(event: &Event) -> Option<Action> {
    let Event::Key(KeyEvent {
        code,
        kind: KeyEventKind::Press,
        ..
    }) = event
    else {
        return None;
    };

    let action = match code {
        KeyCode::Char('p') => Action::Roll(PoolKind::Plants),
        KeyCode::Char('a') => Action::Roll(PoolKind::Animals),
        KeyCode::Char('c') | KeyCode::Enter => Action::Brew,
        KeyCode::Left | KeyCode::Char('h') => Action::HistoryBack,
        KeyCode::Right | KeyCode::Char('l') => Action::HistoryForward,
        KeyCode::Char('+') | KeyCode::Char('=') => Action::IncreaseCount,
        KeyCode::Char('-') => Action::DecreaseCount,
        KeyCode::Char('1') => Action::ToggleRarity(Rarity::Common),
        KeyCode::Char('2') => Action::ToggleRarity(Rarity::Uncommon),
        KeyCode::Char('3') => Action::ToggleRarity(Rarity::Rare),
        KeyCode::Char('4') => Action::ToggleRarity(Rarity::Legendary),
        KeyCode::Char('f') => Action::CycleHabitat(PoolKind::Plants),
        KeyCode::Char('F') => Action::CycleHabitat(PoolKind::Animals),
        KeyCode::Char('s') => Action::ToggleSeed,
        KeyCode::Char('r') => Action::ResetSeen,
        KeyCode::Char('?') => Action::ToggleHelp,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}
