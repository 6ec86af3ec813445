//! Command handler for browser navigation
//!
//! Parses one-line commands and drives the view, the settings store and
//! the display

use anyhow::Result;
use colored::*;

use crate::pager::PageEvent;
use crate::settings::SettingsManager;
use crate::viewer::display::DisplayManager;
use crate::viewer::ListView;

/// Browser command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    First,
    Last,
    Goto { page: usize },
    Size { size: usize },
    Reload,
    Info,
    Help,
    Clear,
    Quit,
    Unknown { input: String },
}

/// Command handler for parsing and executing browser commands
pub struct CommandHandler {
    remember: bool,
}

impl CommandHandler {
    /// Create new command handler
    ///
    /// `remember` controls whether page-size choices are persisted.
    pub fn new(remember: bool) -> Self {
        CommandHandler { remember }
    }

    /// Parse input string into a command
    ///
    /// A bare page number is a jump; everything else matches on the
    /// first token. Complexity: O(1) string matching.
    pub fn parse(&self, input: &str) -> Command {
        let parts: Vec<&str> = input.trim().split_whitespace().collect();
        if parts.is_empty() {
            return Command::Unknown { input: input.to_string() };
        }

        if let Ok(page) = parts[0].parse::<usize>() {
            return Command::Goto { page };
        }

        match parts[0].to_lowercase().as_str() {
            "n" | "next" => Command::Next,
            "p" | "prev" | "previous" => Command::Previous,
            "f" | "first" => Command::First,
            "l" | "last" => Command::Last,
            "g" | "goto" => match parts.get(1).and_then(|s| s.parse().ok()) {
                Some(page) => Command::Goto { page },
                None => Command::Unknown { input: input.to_string() },
            },
            "s" | "size" => match parts.get(1).and_then(|s| s.parse().ok()) {
                Some(size) => Command::Size { size },
                None => Command::Unknown { input: input.to_string() },
            },
            "r" | "reload" => Command::Reload,
            "i" | "info" => Command::Info,
            "h" | "help" | "?" => Command::Help,
            "c" | "clear" | "cls" => Command::Clear,
            "q" | "quit" | "exit" => Command::Quit,
            _ => Command::Unknown { input: input.to_string() },
        }
    }

    /// Execute a command
    ///
    /// Returns true if the session should continue, false if it should
    /// exit.
    pub fn execute(
        &mut self,
        command: Command,
        view: &mut ListView,
        settings: &mut SettingsManager,
        display: &DisplayManager,
    ) -> Result<bool> {
        if command_needs_rows(&command) && view.pager().window().is_empty() {
            display.show_warning("No rows to navigate.");
            return Ok(true);
        }

        match command {
            Command::Next => {
                match view.next() {
                    Some(_) => display.show_page(view),
                    None => display.show_warning("Already on the last page."),
                }
                Ok(true)
            }
            Command::Previous => {
                match view.previous() {
                    Some(_) => display.show_page(view),
                    None => display.show_warning("Already on the first page."),
                }
                Ok(true)
            }
            Command::First => {
                match view.first() {
                    Some(_) => display.show_page(view),
                    None => display.show_info("Already on the first page."),
                }
                Ok(true)
            }
            Command::Last => {
                match view.last() {
                    Some(_) => display.show_page(view),
                    None => display.show_info("Already on the last page."),
                }
                Ok(true)
            }
            Command::Goto { page } => {
                if page == view.pager().current_page() {
                    display.show_info(&format!("Already on page {}.", page));
                } else if view.go_to_page(page).is_some() {
                    display.show_page(view);
                } else {
                    display.show_warning(&format!(
                        "Page {} is out of range (1-{}).",
                        page,
                        view.pager().total_pages()
                    ));
                }
                Ok(true)
            }
            Command::Size { size } => {
                self.change_size(size, view, settings, display);
                Ok(true)
            }
            Command::Reload => {
                match view.reload() {
                    Ok(count) => {
                        display.show_info(&format!("Reloaded {} rows.", count));
                        display.show_page(view);
                    }
                    Err(e) => display.show_error(&format!("Reload failed: {}", e)),
                }
                Ok(true)
            }
            Command::Info => {
                display.show_view_info(view);
                Ok(true)
            }
            Command::Help => {
                self.show_help();
                Ok(true)
            }
            Command::Clear => {
                display.clear_screen()?;
                display.show_page(view);
                Ok(true)
            }
            Command::Quit => {
                println!("{}", "Goodbye!".green());
                Ok(false)
            }
            Command::Unknown { input } => {
                println!("{}", format!("Unknown command: {}", input).red());
                println!("Type {} for available commands", "h".cyan());
                Ok(true)
            }
        }
    }

    /// Apply a page-size change, enforcing the configured menu
    fn change_size(
        &self,
        size: usize,
        view: &mut ListView,
        settings: &mut SettingsManager,
        display: &DisplayManager,
    ) {
        if !view.page_sizes().contains(&size) {
            let menu = view
                .page_sizes()
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join("/");
            display.show_warning(&format!("Size {} is not available. Choose from: {}", size, menu));
            return;
        }

        let event = view.change_size(size);
        if let PageEvent::PageSizeChanged { items_per_page, page } = event {
            display.show_info(&format!(
                "Rows per page set to {}, back to page {}.",
                items_per_page, page
            ));
        }

        if self.remember {
            if let Err(e) = settings.remember(view.name(), size) {
                display.show_warning(&format!("Could not save page size: {}", e));
            }
        }

        display.show_page(view);
    }

    /// Display help information
    fn show_help(&self) {
        println!("\n{}", "Available Commands:".bold().cyan());
        println!("{}", "=".repeat(60).cyan());

        let commands = vec![
            ("n, next", "Go to the next page"),
            ("p, prev", "Go to the previous page"),
            ("g N, goto N", "Jump to page N (a bare number works too)"),
            ("f, first", "Jump to the first page"),
            ("l, last", "Jump to the last page"),
            ("s N, size N", "Set rows per page"),
            ("r, reload", "Reload rows from the source"),
            ("i, info", "Show view details and navigation counters"),
            ("c, clear", "Clear screen"),
            ("h, help", "Show this help message"),
            ("q, quit", "Exit the browser"),
        ];

        for (cmd, desc) in commands {
            println!("  {:<20} {}", cmd.green(), desc);
        }
        println!();
    }
}

/// True for commands that move through pages
fn command_needs_rows(command: &Command) -> bool {
    matches!(
        command,
        Command::Next | Command::Previous | Command::First | Command::Last | Command::Goto { .. }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::pager::PageManager;
    use crate::store::MemoryStore;

    fn test_setup(total_items: usize, items_per_page: usize) -> (ListView, SettingsManager, DisplayManager) {
        let mut pager = PageManager::new();
        pager.set_items_per_page(items_per_page);
        let view = ListView::new("test", Dataset::sample(total_items), pager);
        let settings = SettingsManager::new(Box::new(MemoryStore::new()));
        (view, settings, DisplayManager::new())
    }

    #[test]
    fn test_parse_navigation() {
        let handler = CommandHandler::new(true);
        assert_eq!(handler.parse("n"), Command::Next);
        assert_eq!(handler.parse("next"), Command::Next);
        assert_eq!(handler.parse("p"), Command::Previous);
        assert_eq!(handler.parse("previous"), Command::Previous);
        assert_eq!(handler.parse("f"), Command::First);
        assert_eq!(handler.parse("l"), Command::Last);
    }

    #[test]
    fn test_parse_goto() {
        let handler = CommandHandler::new(true);
        assert_eq!(handler.parse("g 13"), Command::Goto { page: 13 });
        assert_eq!(handler.parse("goto 5"), Command::Goto { page: 5 });
    }

    #[test]
    fn test_parse_bare_number_is_goto() {
        let handler = CommandHandler::new(true);
        assert_eq!(handler.parse("13"), Command::Goto { page: 13 });
    }

    #[test]
    fn test_parse_goto_without_page() {
        let handler = CommandHandler::new(true);
        match handler.parse("goto") {
            Command::Unknown { .. } => {}
            other => panic!("Expected Unknown, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_size() {
        let handler = CommandHandler::new(true);
        assert_eq!(handler.parse("s 50"), Command::Size { size: 50 });
        assert_eq!(handler.parse("size 25"), Command::Size { size: 25 });
    }

    #[test]
    fn test_parse_size_with_junk_argument() {
        let handler = CommandHandler::new(true);
        match handler.parse("size lots") {
            Command::Unknown { .. } => {}
            other => panic!("Expected Unknown, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let handler = CommandHandler::new(true);
        assert_eq!(handler.parse("NEXT"), Command::Next);
        assert_eq!(handler.parse("Quit"), Command::Quit);
    }

    #[test]
    fn test_parse_remaining_commands() {
        let handler = CommandHandler::new(true);
        assert_eq!(handler.parse("r"), Command::Reload);
        assert_eq!(handler.parse("i"), Command::Info);
        assert_eq!(handler.parse("h"), Command::Help);
        assert_eq!(handler.parse("?"), Command::Help);
        assert_eq!(handler.parse("clear"), Command::Clear);
        assert_eq!(handler.parse("q"), Command::Quit);
        assert_eq!(handler.parse("exit"), Command::Quit);
    }

    #[test]
    fn test_parse_unknown() {
        let handler = CommandHandler::new(true);
        match handler.parse("wat") {
            Command::Unknown { input } => assert!(input.contains("wat")),
            other => panic!("Expected Unknown, got {:?}", other),
        }
    }

    #[test]
    fn test_execute_quit() {
        let mut handler = CommandHandler::new(true);
        let (mut view, mut settings, display) = test_setup(47, 10);
        let result = handler.execute(Command::Quit, &mut view, &mut settings, &display).unwrap();
        assert!(!result);
    }

    #[test]
    fn test_execute_help_continues() {
        let mut handler = CommandHandler::new(true);
        let (mut view, mut settings, display) = test_setup(47, 10);
        let result = handler.execute(Command::Help, &mut view, &mut settings, &display).unwrap();
        assert!(result);
    }

    #[test]
    fn test_execute_next_moves_page() {
        let mut handler = CommandHandler::new(true);
        let (mut view, mut settings, display) = test_setup(47, 10);
        handler.execute(Command::Next, &mut view, &mut settings, &display).unwrap();
        assert_eq!(view.pager().current_page(), 2);
    }

    #[test]
    fn test_execute_next_at_end_stays() {
        let mut handler = CommandHandler::new(true);
        let (mut view, mut settings, display) = test_setup(47, 10);
        view.go_to_page(5);
        handler.execute(Command::Next, &mut view, &mut settings, &display).unwrap();
        assert_eq!(view.pager().current_page(), 5);
    }

    #[test]
    fn test_execute_goto_out_of_range_stays() {
        let mut handler = CommandHandler::new(true);
        let (mut view, mut settings, display) = test_setup(47, 10);
        handler.execute(Command::Goto { page: 99 }, &mut view, &mut settings, &display).unwrap();
        assert_eq!(view.pager().current_page(), 1);
    }

    #[test]
    fn test_execute_size_outside_menu_keeps_size() {
        let mut handler = CommandHandler::new(true);
        let (mut view, mut settings, display) = test_setup(47, 10);
        handler.execute(Command::Size { size: 33 }, &mut view, &mut settings, &display).unwrap();
        assert_eq!(view.pager().items_per_page(), 10);
        assert!(settings.load_view("test").unwrap().is_none());
    }

    #[test]
    fn test_execute_size_resets_page_and_persists() {
        let mut handler = CommandHandler::new(true);
        let (mut view, mut settings, display) = test_setup(250, 10);
        view.go_to_page(13);

        handler.execute(Command::Size { size: 25 }, &mut view, &mut settings, &display).unwrap();

        assert_eq!(view.pager().items_per_page(), 25);
        assert_eq!(view.pager().current_page(), 1);
        let saved = settings.load_view("test").unwrap();
        assert_eq!(saved.map(|s| s.items_per_page), Some(25));
    }

    #[test]
    fn test_execute_size_without_remember_skips_persistence() {
        let mut handler = CommandHandler::new(false);
        let (mut view, mut settings, display) = test_setup(250, 10);

        handler.execute(Command::Size { size: 25 }, &mut view, &mut settings, &display).unwrap();

        assert_eq!(view.pager().items_per_page(), 25);
        assert!(settings.load_view("test").unwrap().is_none());
    }

    #[test]
    fn test_execute_reload_continues() {
        let mut handler = CommandHandler::new(true);
        let (mut view, mut settings, display) = test_setup(47, 10);
        let result = handler.execute(Command::Reload, &mut view, &mut settings, &display).unwrap();
        assert!(result);
        assert_eq!(view.pager().total_items(), 47);
    }

    #[test]
    fn test_execute_navigation_on_empty_view() {
        let mut handler = CommandHandler::new(true);
        let (mut view, mut settings, display) = test_setup(0, 10);
        let result = handler.execute(Command::Next, &mut view, &mut settings, &display).unwrap();
        assert!(result);
        assert_eq!(view.pager().current_page(), 1);
        assert_eq!(view.stats().pages_visited, 0);
    }

    #[test]
    fn test_command_needs_rows() {
        assert!(command_needs_rows(&Command::Next));
        assert!(command_needs_rows(&Command::Goto { page: 3 }));
        assert!(!command_needs_rows(&Command::Info));
        assert!(!command_needs_rows(&Command::Size { size: 10 }));
        assert!(!command_needs_rows(&Command::Quit));
    }
}
