use std::io;
use std::time::Duration;

use crossterm::event;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame, Terminal,
};

use super::events::{map_input, Action, Notification, NotificationLevel};
use super::theme;
use crate::core::alchemy::{GeneratorError, Item, PoolKind, Potion, Rarity, Roll};
use crate::core::session::{RollOutcome, Session};

/// Maximum notifications shown at once.
const MAX_NOTIFICATIONS: usize = 3;

/// UI state wrapped around one [`Session`].
pub struct AppState {
    pub session: Session,
    notifications: Vec<Notification>,
    show_help: bool,
    /// Seed applied when reproducible mode is switched on
    seed_value: u64,
    should_quit: bool,
}

impl AppState {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            notifications: Vec::new(),
            show_help: false,
            seed_value: rand::random::<u16>() as u64,
            should_quit: false,
        }
    }

    /// Run the draw/input loop until the user quits.
    pub fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(tick_rate)? {
                let input = event::read()?;
                if let Some(action) = map_input(&input) {
                    self.handle_action(action);
                }
            }
            self.on_tick();
        }
        Ok(())
    }

    // ── Actions ─────────────────────────────────────────────────────────

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Roll(kind) => {
                let result = self.session.roll(kind).map(|entry| entry.summary());
                self.report(result);
            }
            Action::Brew => {
                let result = self.session.brew().map(|entry| entry.summary());
                self.report(result);
            }
            Action::HistoryBack => {
                self.session.back();
            }
            Action::HistoryForward => {
                self.session.forward();
            }
            Action::IncreaseCount => {
                let count = self.session.count() + 1;
                self.session.set_count(count);
            }
            Action::DecreaseCount => {
                let count = self.session.count().saturating_sub(1);
                self.session.set_count(count);
            }
            Action::ToggleRarity(rarity) => {
                self.session.plant_filter.toggle_rarity(rarity.clone());
                self.session.animal_filter.toggle_rarity(rarity);
            }
            Action::CycleHabitat(kind) => {
                let message = match self.session.cycle_habitat(kind) {
                    Some(habitat) => format!("{}: среда «{habitat}»", kind.title()),
                    None => format!("{}: любая среда", kind.title()),
                };
                self.push_notification(message, NotificationLevel::Info);
            }
            Action::ToggleSeed => {
                let seed = match self.session.seed() {
                    Some(_) => None,
                    None => Some(self.seed_value),
                };
                self.session.set_seed(seed);
            }
            Action::ResetSeen => {
                self.session.reset_seen();
                self.push_notification(
                    "Список выпавших сочетаний очищен".to_string(),
                    NotificationLevel::Info,
                );
            }
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::Quit => self.should_quit = true,
        }
    }

    fn report(&mut self, result: Result<String, GeneratorError>) {
        match result {
            Ok(summary) => {
                tracing::debug!(%summary, "New result");
            }
            Err(e) => {
                let level = if e.is_recoverable() {
                    NotificationLevel::Warning
                } else {
                    NotificationLevel::Error
                };
                let message = match &e {
                    GeneratorError::EmptyPool { .. } => {
                        format!("{e}. Ослабьте фильтры.")
                    }
                    GeneratorError::CombinationExhausted { .. } => {
                        format!("{e}. Нажмите r, чтобы начать заново.")
                    }
                    GeneratorError::InvalidWeight { .. } => e.to_string(),
                };
                self.push_notification(message, level);
            }
        }
    }

    // ── Notifications ───────────────────────────────────────────────────

    /// Push a notification (dedup by message, max 3).
    pub fn push_notification(&mut self, message: String, level: NotificationLevel) {
        if self.notifications.iter().any(|n| n.message == message) {
            return;
        }
        self.notifications.push(Notification::new(message, level));
        while self.notifications.len() > MAX_NOTIFICATIONS {
            self.notifications.remove(0);
        }
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    fn on_tick(&mut self) {
        for n in &mut self.notifications {
            n.ttl_ticks = n.ttl_ticks.saturating_sub(1);
        }
        self.notifications.retain(|n| n.ttl_ticks > 0);
    }

    // ── Rendering ───────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

        self.render_filters(frame, chunks[0]);
        self.render_content(frame, chunks[1]);
        self.render_status_bar(frame, chunks[2]);
        self.render_notifications(frame, area);

        if self.show_help {
            render_help_modal(frame, area);
        }
    }

    fn render_filters(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled("Редкость: ", theme::muted())];
        for (i, rarity) in Rarity::canonical().iter().enumerate() {
            let enabled = self.session.plant_filter.allows_rarity(rarity);
            let style = if enabled {
                theme::rarity_style(rarity)
            } else {
                Style::default().fg(theme::TEXT_DIM).add_modifier(Modifier::CROSSED_OUT)
            };
            spans.push(Span::styled(format!("[{}] {} ", i + 1, rarity.label()), style));
        }
        for kind in [PoolKind::Plants, PoolKind::Animals] {
            if let Some(habitat) = &self.session.filter(kind).habitat {
                spans.push(Span::raw(" │ "));
                spans.push(Span::styled(format!("{}: {habitat}", kind.title()), theme::heading()));
            }
        }
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!("Кол-во: {}", self.session.count()),
            theme::heading(),
        ));
        spans.push(Span::raw(" │ "));
        let seed_text = match self.session.seed() {
            Some(seed) => format!("Сид: {seed}"),
            None => "Сид: —".to_string(),
        };
        spans.push(Span::styled(seed_text, theme::muted()));
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!(
                "Доступно: {} / {}",
                self.session.eligible_count(PoolKind::Plants),
                self.session.eligible_count(PoolKind::Animals)
            ),
            theme::muted(),
        ));

        frame.render_widget(
            Paragraph::new(Line::from(spans)).block(theme::block_default("Фильтры")),
            area,
        );
    }

    fn render_content(&self, frame: &mut Frame, area: Rect) {
        let Some(entry) = self.session.current() else {
            let hint = Paragraph::new(vec![
                Line::raw(""),
                Line::raw("  p — случайное растение, a — случайное животное, c — сварить зелье"),
                Line::raw("  ? — справка"),
            ])
            .block(theme::block_focused("Аптекарь"));
            frame.render_widget(hint, area);
            return;
        };

        match &entry.outcome {
            RollOutcome::Roll(roll) => self.render_roll(frame, area, roll),
            RollOutcome::Potion(potion) => self.render_potion(frame, area, potion),
        }
    }

    fn render_roll(&self, frame: &mut Frame, area: Rect, roll: &Roll) {
        let mut lines = Vec::new();
        for item in &roll.items {
            lines.extend(item_lines(item, roll.kind));
            lines.push(Line::raw(""));
        }
        let title = format!("{} ×{}", roll.kind.title(), roll.len());
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(theme::block_focused(&title)),
            area,
        );
    }

    fn render_potion(&self, frame: &mut Frame, area: Rect, potion: &Potion) {
        let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).split(area);
        let title = Paragraph::new(Line::from(Span::styled(&potion.name, theme::title())))
            .block(theme::block_focused("Зелье"));
        frame.render_widget(title, chunks[0]);

        let halves =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(chunks[1]);
        let plant = Paragraph::new(item_lines(potion.plant(), PoolKind::Plants))
            .wrap(Wrap { trim: false })
            .block(theme::block_default(PoolKind::Plants.title()));
        let animal = Paragraph::new(item_lines(potion.animal(), PoolKind::Animals))
            .wrap(Wrap { trim: false })
            .block(theme::block_default(PoolKind::Animals.title()));
        frame.render_widget(plant, halves[0]);
        frame.render_widget(animal, halves[1]);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let history = self.session.history();
        let position = match history.position() {
            Some(pos) => format!("{pos}/{}", history.len()),
            None => "0/0".to_string(),
        };
        let status = Line::from(vec![
            Span::styled(" APOTHECARY ", theme::brand_badge()),
            Span::raw(" "),
            Span::styled("История:", theme::key_hint()),
            Span::raw(format!(" {position} ")),
            Span::styled(
                format!("Сочетаний: {} ", self.session.seen().len()),
                theme::key_hint(),
            ),
            Span::raw("│ "),
            Span::styled("←/→", theme::key_hint()),
            Span::raw(":история "),
            Span::styled("?", theme::key_hint()),
            Span::raw(":справка "),
            Span::styled("q", theme::key_hint()),
            Span::raw(":выход"),
        ]);
        frame.render_widget(Paragraph::new(status), area);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect) {
        if self.notifications.is_empty() {
            return;
        }

        let max_width = 70.min(area.width.saturating_sub(2));
        let height = self.notifications.len() as u16;
        let x = area.width.saturating_sub(max_width + 1);
        let notification_area = Rect::new(x, 1, max_width, height);

        let lines: Vec<Line> = self
            .notifications
            .iter()
            .map(|n| {
                let (prefix, color) = match n.level {
                    NotificationLevel::Info => ("ℹ", theme::INFO),
                    NotificationLevel::Success => ("✓", theme::SUCCESS),
                    NotificationLevel::Warning => ("⚠", theme::WARNING),
                    NotificationLevel::Error => ("✗", theme::ERROR),
                };
                Line::from(vec![
                    Span::styled(format!(" {prefix} "), Style::default().fg(color).bold()),
                    Span::raw(n.message.as_str()),
                ])
            })
            .collect();

        frame.render_widget(Clear, notification_area);
        frame.render_widget(Paragraph::new(lines), notification_area);
    }
}

/// Card lines for one item: name with rarity, then payload rows.
fn item_lines(item: &Item, kind: PoolKind) -> Vec<Line<'_>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(item.name.as_str(), theme::rarity_style(&item.rarity)),
        Span::styled(format!(" ({})", item.rarity), theme::muted()),
    ])];
    for (label, value) in item.detail_rows(kind) {
        lines.push(Line::from(vec![
            Span::styled(format!("  {label}: "), theme::heading()),
            Span::styled(value, Style::default().fg(theme::TEXT)),
        ]));
    }
    lines
}

fn render_help_modal(frame: &mut Frame, area: Rect) {
    let modal = centered_rect(60, 70, area);
    let keybindings = [
        ("p", "Бросок по растениям"),
        ("a", "Бросок по животным"),
        ("c / Enter", "Сварить зелье"),
        ("← / →", "Назад / вперёд по истории"),
        ("+ / -", "Изменить количество"),
        ("1-4", "Переключить редкость"),
        ("f / F", "Среда обитания: растения / животные"),
        ("s", "Воспроизводимый сид вкл/выкл"),
        ("r", "Сбросить выпавшие сочетания"),
        ("?", "Справка"),
        ("q / Esc", "Выход"),
    ];
    let lines: Vec<Line> = keybindings
        .iter()
        .map(|(key, description)| {
            Line::from(vec![
                Span::styled(format!("  {key:<12}"), theme::title()),
                Span::raw(*description),
            ])
        })
        .collect();

    frame.render_widget(Clear, modal);
    frame.render_widget(Paragraph::new(lines).block(theme::block_focused("Справка")), modal);
}

/// Rectangle centered in `area` taking the given percentages.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);
    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1])[1]
}
