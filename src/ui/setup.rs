use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::combat::moves::moves_for;
use crate::combatant::{ClassKind, Combatant};
use crate::core::battle::Side;

/// Collects a name and class for each side in turn, then hands both
/// combatants to the caller.
pub struct SetupScreen {
    pub side: Side,
    pub name_input: String,
    pub selected_class: usize,
    player_one: Option<(String, ClassKind)>,
}

impl SetupScreen {
    pub fn new() -> Self {
        Self {
            side: Side::PlayerOne,
            name_input: String::new(),
            selected_class: 0,
            player_one: None,
        }
    }

    pub fn selected(&self) -> ClassKind {
        ClassKind::all()[self.selected_class]
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Name label + field
                Constraint::Length(1), // Spacer
                Constraint::Length(6), // Class list
                Constraint::Length(2), // Stats preview
                Constraint::Length(7), // Moves preview
                Constraint::Min(0),    // Filler
                Constraint::Length(3), // Controls
            ])
            .split(area);

        // Title
        let title = Paragraph::new(format!("{} Setup", self.side.label()))
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        // Name label
        let label = Paragraph::new("Name (blank for default):");
        f.render_widget(label, chunks[1]);

        // Input field with cursor
        let input_area = Rect {
            x: chunks[1].x,
            y: chunks[1].y + 1,
            width: chunks[1].width,
            height: 1,
        };
        let input_widget = Paragraph::new(format!("{}_", self.name_input))
            .style(Style::default().fg(Color::White));
        f.render_widget(input_widget, input_area);

        // Class list
        let class_lines: Vec<Line> = ClassKind::all()
            .iter()
            .enumerate()
            .map(|(i, class)| {
                if i == self.selected_class {
                    Line::from(Span::styled(
                        format!("▶ {}", class.name()),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(format!("  {}", class.name()))
                }
            })
            .collect();
        let class_widget = Paragraph::new(class_lines)
            .block(Block::default().borders(Borders::ALL).title("Class"));
        f.render_widget(class_widget, chunks[3]);

        // Stats preview
        let stats = self.selected().base_stats();
        let stats_line = Line::from(Span::styled(
            format!(
                "HP {}   MP {}   STR {}   INT {}   AGI {}",
                stats.max_health, stats.max_mana, stats.strength, stats.intelligence, stats.agility
            ),
            Style::default().fg(Color::Gray),
        ));
        f.render_widget(Paragraph::new(stats_line), chunks[4]);

        // Moves preview
        let move_lines: Vec<Line> = moves_for(self.selected())
            .iter()
            .map(|mv| {
                Line::from(format!(
                    "  {:<14} {:>3} PWR  {:>3} MP  {}",
                    mv.name,
                    mv.power,
                    mv.mana_cost,
                    mv.move_type.label()
                ))
            })
            .collect();
        let moves_widget = Paragraph::new(move_lines)
            .block(Block::default().borders(Borders::ALL).title("Moves"))
            .style(Style::default().fg(Color::Gray));
        f.render_widget(moves_widget, chunks[5]);

        // Controls
        let controls = Paragraph::new("[↑/↓] Class    [Enter] Confirm    [Esc] Quit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(controls, chunks[7]);
    }

    pub fn handle_char_input(&mut self, c: char) {
        if self.name_input.chars().count() < 16 {
            self.name_input.push(c);
        }
    }

    pub fn handle_backspace(&mut self) {
        self.name_input.pop();
    }

    pub fn next_class(&mut self) {
        self.selected_class = (self.selected_class + 1) % ClassKind::all().len();
    }

    pub fn prev_class(&mut self) {
        let count = ClassKind::all().len();
        self.selected_class = (self.selected_class + count - 1) % count;
    }

    /// Locks in the current side. Returns both combatants once the second
    /// side confirms.
    pub fn confirm(&mut self) -> Option<(Combatant, Combatant)> {
        let name = {
            let trimmed = self.name_input.trim();
            if trimmed.is_empty() {
                self.side.label().to_string()
            } else {
                trimmed.to_string()
            }
        };
        let class = self.selected();

        match self.side {
            Side::PlayerOne => {
                self.player_one = Some((name, class));
                self.name_input.clear();
                self.selected_class = 0;
                self.side = Side::PlayerTwo;
                None
            }
            Side::PlayerTwo => {
                let (one_name, one_class) = self.player_one.take()?;
                Some((
                    Combatant::new(one_name, one_class),
                    Combatant::new(name, class),
                ))
            }
        }
    }
}

impl Default for SetupScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_collects_both_sides() {
        let mut screen = SetupScreen::new();
        screen.name_input = "Korg".to_string();
        screen.next_class(); // Mage

        assert!(screen.confirm().is_none());
        assert_eq!(screen.side, Side::PlayerTwo);
        assert!(screen.name_input.is_empty());

        screen.name_input = "Zan".to_string();
        screen.next_class();
        screen.next_class(); // Rogue

        let (one, two) = screen.confirm().unwrap();
        assert_eq!(one.name, "Korg");
        assert_eq!(one.class, ClassKind::Mage);
        assert_eq!(two.name, "Zan");
        assert_eq!(two.class, ClassKind::Rogue);
    }

    #[test]
    fn test_blank_name_falls_back_to_side_label() {
        let mut screen = SetupScreen::new();
        screen.name_input = "   ".to_string();
        assert!(screen.confirm().is_none());

        let (one, two) = screen.confirm().unwrap();
        assert_eq!(one.name, "Player 1");
        assert_eq!(two.name, "Player 2");
    }

    #[test]
    fn test_class_selection_wraps() {
        let mut screen = SetupScreen::new();
        screen.prev_class();
        assert_eq!(screen.selected(), ClassKind::Cleric);
        screen.next_class();
        assert_eq!(screen.selected(), ClassKind::Warrior);
    }

    #[test]
    fn test_name_input_caps_at_sixteen_chars() {
        let mut screen = SetupScreen::new();
        for _ in 0..40 {
            screen.handle_char_input('x');
        }
        assert_eq!(screen.name_input.chars().count(), 16);
        screen.handle_backspace();
        assert_eq!(screen.name_input.chars().count(), 15);
    }
}
