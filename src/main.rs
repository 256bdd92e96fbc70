use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::{backend::CrosstermBackend, Terminal};

use duel::build_info;
use duel::core::battle::{Action, Battle};
use duel::ui::battle_scene::BattleScreen;
use duel::ui::setup::SetupScreen;

enum Screen {
    Setup,
    Battle,
}

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "duel {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Duel - Terminal-Based Battle Game\n");
                println!("Usage: duel\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'duel --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Screen state variables
    let mut current_screen = Screen::Setup;
    let mut setup_screen = SetupScreen::new();
    let mut battle_screen = BattleScreen::new();
    let mut battle: Option<Battle> = None;
    let mut rng = ChaCha8Rng::from_entropy();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    loop {
        match current_screen {
            Screen::Setup => {
                terminal.draw(|f| {
                    let area = f.size();
                    setup_screen.draw(f, area);
                })?;

                if event::poll(Duration::from_millis(50))? {
                    if let Event::Key(key_event) = event::read()? {
                        match key_event.code {
                            KeyCode::Esc => break,
                            KeyCode::Up | KeyCode::Left => setup_screen.prev_class(),
                            KeyCode::Down | KeyCode::Right | KeyCode::Tab => {
                                setup_screen.next_class()
                            }
                            KeyCode::Backspace => setup_screen.handle_backspace(),
                            KeyCode::Enter => {
                                if let Some((one, two)) = setup_screen.confirm() {
                                    battle = Some(Battle::new(one, two));
                                    battle_screen = BattleScreen::new();
                                    current_screen = Screen::Battle;
                                }
                            }
                            KeyCode::Char(c) => setup_screen.handle_char_input(c),
                            _ => {}
                        }
                    }
                }
            }

            Screen::Battle => {
                if let Some(state) = battle.as_mut() {
                    terminal.draw(|f| {
                        let area = f.size();
                        battle_screen.draw(f, area, state);
                    })?;

                    if event::poll(Duration::from_millis(50))? {
                        if let Event::Key(key_event) = event::read()? {
                            match key_event.code {
                                KeyCode::Char('q') | KeyCode::Char('Q') => break,
                                KeyCode::Esc => {
                                    if battle_screen.in_item_mode() {
                                        battle_screen.exit_item_mode();
                                    } else {
                                        break;
                                    }
                                }
                                KeyCode::Char('i') | KeyCode::Char('I') | KeyCode::Char('6') => {
                                    if !state.is_finished() {
                                        battle_screen.enter_item_mode();
                                    }
                                }
                                KeyCode::Char(c @ '1'..='5') => {
                                    if !state.is_finished() {
                                        let index = c as usize - '1' as usize;
                                        let action = if battle_screen.in_item_mode() {
                                            Action::UseItem(index)
                                        } else {
                                            Action::UseMove(index)
                                        };
                                        match state.submit(action, &mut rng) {
                                            Ok(events) => battle_screen.absorb(state, &events),
                                            Err(e) => battle_screen.set_error(e.to_string()),
                                        }
                                    }
                                }
                                _ => {}
                            }
                        }
                    }
                } else {
                    // Nothing to show; back to setup.
                    setup_screen = SetupScreen::new();
                    current_screen = Screen::Setup;
                }
            }
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    println!("Goodbye!");

    Ok(())
}
