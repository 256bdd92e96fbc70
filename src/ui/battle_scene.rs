use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::combat::moves::moves_for;
use crate::combatant::Combatant;
use crate::core::battle::{Battle, BattlePhase, Outcome, Side};
use crate::core::events::BattleEvent;

/// Whether number keys pick a move or an inventory slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Move,
    Item,
}

/// The interactive battle view: stat panels, scrolling log, action menu.
pub struct BattleScreen {
    pub log: Vec<String>,
    mode: InputMode,
    error: Option<String>,
}

impl BattleScreen {
    pub fn new() -> Self {
        Self {
            log: Vec::new(),
            mode: InputMode::Move,
            error: None,
        }
    }

    /// Append the narration for a batch of events and reset the menu.
    pub fn absorb(&mut self, battle: &Battle, events: &[BattleEvent]) {
        for event in events {
            self.log.push(event.narrate(
                &battle.combatant(Side::PlayerOne).name,
                &battle.combatant(Side::PlayerTwo).name,
            ));
        }
        self.error = None;
        self.mode = InputMode::Move;
    }

    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn in_item_mode(&self) -> bool {
        self.mode == InputMode::Item
    }

    pub fn enter_item_mode(&mut self) {
        self.mode = InputMode::Item;
    }

    pub fn exit_item_mode(&mut self) {
        self.mode = InputMode::Move;
    }

    pub fn draw(&self, f: &mut Frame, area: Rect, battle: &Battle) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(5), // Combatant panels
                Constraint::Min(5),    // Battle log
                Constraint::Length(9), // Action menu
            ])
            .split(area);

        self.draw_header(f, chunks[0], battle);
        self.draw_panels(f, chunks[1], battle);
        self.draw_log(f, chunks[2]);
        self.draw_menu(f, chunks[3], battle);
    }

    fn draw_header(&self, f: &mut Frame, area: Rect, battle: &Battle) {
        let text = match battle.phase() {
            BattlePhase::AwaitingAction(_) => format!("⚔ Round {} ⚔", battle.round() + 1),
            BattlePhase::Finished(_) => "⚔ Battle Over ⚔".to_string(),
        };
        let header = Paragraph::new(text)
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(header, area);
    }

    fn draw_panels(&self, f: &mut Frame, area: Rect, battle: &Battle) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        for (side, half) in Side::all().into_iter().zip(halves.iter()) {
            self.draw_combatant(f, *half, battle.combatant(side));
        }
    }

    fn draw_combatant(&self, f: &mut Frame, area: Rect, combatant: &Combatant) {
        let block = Block::default().borders(Borders::ALL).title(format!(
            "{} ({}, Lv {})",
            combatant.name,
            combatant.class.name(),
            combatant.level
        ));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // HP
                Constraint::Length(1), // MP
                Constraint::Length(1), // Statuses
            ])
            .split(inner);

        // Health can go negative in the last exchange; the gauge floors at 0.
        let hp_ratio = (combatant.current_health.max(0) as f64
            / combatant.max_health.max(1) as f64)
            .min(1.0);
        let hp_color = if hp_ratio > 0.66 {
            Color::Green
        } else if hp_ratio > 0.33 {
            Color::Yellow
        } else {
            Color::Red
        };
        let hp_gauge = Gauge::default()
            .gauge_style(Style::default().fg(hp_color).add_modifier(Modifier::BOLD))
            .label(format!(
                "HP {}/{}",
                combatant.current_health, combatant.max_health
            ))
            .ratio(hp_ratio);
        f.render_widget(hp_gauge, rows[0]);

        let mp_ratio = (combatant.current_mana as f64 / combatant.max_mana.max(1) as f64).min(1.0);
        let mp_gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD))
            .label(format!(
                "MP {}/{}",
                combatant.current_mana, combatant.max_mana
            ))
            .ratio(mp_ratio);
        f.render_widget(mp_gauge, rows[1]);

        let statuses = if combatant.statuses.is_empty() {
            "Statuses: none".to_string()
        } else {
            let names: Vec<&str> = combatant.statuses.iter().map(|s| s.name()).collect();
            format!("Statuses: {}", names.join(", "))
        };
        let status_widget =
            Paragraph::new(statuses).style(Style::default().fg(Color::Magenta));
        f.render_widget(status_widget, rows[2]);
    }

    fn draw_log(&self, f: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Battle Log");
        let visible = area.height.saturating_sub(2) as usize;
        let start = self.log.len().saturating_sub(visible);
        let lines: Vec<Line> = self.log[start..]
            .iter()
            .map(|entry| Line::from(entry.as_str()))
            .collect();
        let log_widget = Paragraph::new(lines).block(block);
        f.render_widget(log_widget, area);
    }

    fn draw_menu(&self, f: &mut Frame, area: Rect, battle: &Battle) {
        let (title, mut lines) = match battle.phase() {
            BattlePhase::Finished(outcome) => {
                let verdict = match outcome {
                    Outcome::Victory(side) => {
                        format!("{} wins!", battle.combatant(side).name)
                    }
                    Outcome::Draw => {
                        "It's a draw! Both players have been defeated.".to_string()
                    }
                };
                let lines = vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        verdict,
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                    Line::from(Span::styled(
                        "[Q] Quit",
                        Style::default().fg(Color::Gray),
                    )),
                ];
                ("Result".to_string(), lines)
            }
            BattlePhase::AwaitingAction(side) => {
                let combatant = battle.combatant(side);
                let title = format!("{}'s Turn", combatant.name);
                let lines = match self.mode {
                    InputMode::Move => self.move_menu(combatant),
                    InputMode::Item => self.item_menu(combatant),
                };
                (title, lines)
            }
        };

        if let Some(error) = &self.error {
            lines.push(Line::from(Span::styled(
                format!("✗ {}", error),
                Style::default().fg(Color::Red),
            )));
        }

        let menu = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(menu, area);
    }

    fn move_menu(&self, combatant: &Combatant) -> Vec<Line<'static>> {
        let mut lines: Vec<Line> = moves_for(combatant.class)
            .iter()
            .enumerate()
            .map(|(i, mv)| {
                let text = format!(
                    "{}. {:<14} {:>3} PWR  {:>3} MP  {}",
                    i + 1,
                    mv.name,
                    mv.power,
                    mv.mana_cost,
                    mv.move_type.label()
                );
                if mv.mana_cost > combatant.current_mana {
                    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
                } else {
                    Line::from(text)
                }
            })
            .collect();
        lines.push(Line::from("6. Use Item"));
        lines.push(Line::from(Span::styled(
            "[1-5] Move    [6/I] Item    [Q] Quit",
            Style::default().fg(Color::Gray),
        )));
        lines
    }

    fn item_menu(&self, combatant: &Combatant) -> Vec<Line<'static>> {
        let mut lines: Vec<Line> = combatant
            .inventory
            .slots()
            .iter()
            .enumerate()
            .map(|(slot, item)| match item {
                Some(kind) => Line::from(format!("{}. {}", slot + 1, kind.name())),
                None => Line::from(Span::styled(
                    format!("{}. (used)", slot + 1),
                    Style::default().fg(Color::DarkGray),
                )),
            })
            .collect();
        lines.push(Line::from(Span::styled(
            "[1-5] Use slot    [Esc] Back to moves",
            Style::default().fg(Color::Gray),
        )));
        lines
    }
}

impl Default for BattleScreen {
    fn default() -> Self {
        Self::new()
    }
}
