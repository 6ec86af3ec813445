//! Interactive list browser
//!
//! Renders one page of rows at a time and takes navigation commands,
//! with input history and per-view settings persistence.

pub mod commands;
pub mod display;

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

use crate::config::Config;
use crate::dataset::Dataset;
use crate::pager::{PageEvent, PageManager};
use crate::settings::SettingsManager;
use crate::viewer::commands::CommandHandler;
pub use crate::viewer::display::DisplayManager;

/// Navigation counters surfaced by the info command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavStats {
    /// Successful page transitions of any kind
    pub pages_visited: usize,

    /// Direct jumps (goto, first, last)
    pub jumps: usize,

    /// Page size changes
    pub size_changes: usize,

    /// Dataset reloads
    pub reloads: usize,
}

/// One named dataset wired to its paging state
///
/// Navigation goes through the view so the counters stay honest; failed
/// moves count nothing.
pub struct ListView {
    name: String,
    dataset: Dataset,
    pager: PageManager,
    stats: NavStats,
}

impl ListView {
    /// Bind a dataset to a paging manager under a view name
    pub fn new(name: &str, dataset: Dataset, mut pager: PageManager) -> Self {
        pager.set_total_items(dataset.len());
        ListView {
            name: name.to_string(),
            dataset,
            pager,
            stats: NavStats::default(),
        }
    }

    /// View name, used as the settings key
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rows behind the view
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Paging state
    pub fn pager(&self) -> &PageManager {
        &self.pager
    }

    /// Navigation counters
    pub fn stats(&self) -> &NavStats {
        &self.stats
    }

    /// Allowed page sizes for this view
    pub fn page_sizes(&self) -> &[usize] {
        &self.pager.config().page_sizes
    }

    /// Rows of the active page
    pub fn current_rows(&self) -> &[String] {
        let (start, end) = self.pager.visible_range();
        self.dataset.page_slice(start, end)
    }

    /// Step forward one page
    pub fn next(&mut self) -> Option<PageEvent> {
        self.count_move(|pager| pager.next_page())
    }

    /// Step back one page
    pub fn previous(&mut self) -> Option<PageEvent> {
        self.count_move(|pager| pager.previous_page())
    }

    /// Jump to a page number
    pub fn go_to_page(&mut self, page: usize) -> Option<PageEvent> {
        self.count_jump(|pager| pager.go_to_page(page))
    }

    /// Jump to the first page
    pub fn first(&mut self) -> Option<PageEvent> {
        self.count_jump(|pager| pager.first_page())
    }

    /// Jump to the last page
    pub fn last(&mut self) -> Option<PageEvent> {
        self.count_jump(|pager| pager.last_page())
    }

    /// Change the page size; the view returns to page 1
    pub fn change_size(&mut self, size: usize) -> PageEvent {
        self.stats.size_changes += 1;
        self.pager.set_items_per_page(size)
    }

    /// Reload the dataset and refit the paging state to the new count
    pub fn reload(&mut self) -> Result<usize> {
        let count = self.dataset.reload()?;
        self.pager.set_total_items(count);
        self.stats.reloads += 1;
        Ok(count)
    }

    fn count_move(&mut self, go: impl FnOnce(&mut PageManager) -> Option<PageEvent>) -> Option<PageEvent> {
        let event = go(&mut self.pager);
        if event.is_some() {
            self.stats.pages_visited += 1;
        }
        event
    }

    fn count_jump(&mut self, go: impl FnOnce(&mut PageManager) -> Option<PageEvent>) -> Option<PageEvent> {
        let event = self.count_move(go);
        if event.is_some() {
            self.stats.jumps += 1;
        }
        event
    }
}

/// Interactive browse session
///
/// Owns the readline editor, the command handler, the display and the
/// view. Loop shape: render, prompt, parse, execute.
pub struct BrowseSession {
    editor: DefaultEditor,
    history_path: PathBuf,
    prompt: String,
    handler: CommandHandler,
    display: DisplayManager,
    show_banner: bool,
    view: ListView,
    settings: SettingsManager,
}

impl BrowseSession {
    /// Create a session over a view and its settings manager
    pub fn new(view: ListView, settings: SettingsManager, config: &Config) -> Result<Self> {
        let mut editor = DefaultEditor::new()?;

        let history_path = config.history_file();
        if history_path.exists() {
            let _ = editor.load_history(&history_path);
        }

        let prompt = format!("{}> ", view.name());

        Ok(BrowseSession {
            editor,
            history_path,
            prompt,
            handler: CommandHandler::new(config.viewer.remember_page_size),
            display: DisplayManager::new(),
            show_banner: config.viewer.show_banner,
            view,
            settings,
        })
    }

    /// Run the interactive loop until quit or EOF
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.display
                .show_banner(env!("CARGO_PKG_VERSION"), &self.view.dataset().source_label());
        }
        self.display.show_page(&self.view);

        loop {
            let line = match self.read_line()? {
                Some(line) => line,
                None => break,
            };

            if line.is_empty() {
                continue;
            }

            let command = self.handler.parse(&line);
            if !self
                .handler
                .execute(command, &mut self.view, &mut self.settings, &self.display)?
            {
                break;
            }
        }

        self.save_history()
    }

    /// The view under this session
    pub fn view(&self) -> &ListView {
        &self.view
    }

    /// Display manager
    pub fn display(&self) -> &DisplayManager {
        &self.display
    }

    /// Read one trimmed input line
    ///
    /// Returns `Ok(None)` on EOF or interrupt, both of which end the
    /// session.
    fn read_line(&mut self) -> Result<Option<String>> {
        match self.editor.readline(&self.prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = self.editor.add_history_entry(trimmed);
                }
                Ok(Some(trimmed.to_string()))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(anyhow::anyhow!("Readline error: {}", err)),
        }
    }

    fn save_history(&mut self) -> Result<()> {
        if let Some(parent) = self.history_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        self.editor.save_history(&self.history_path)?;
        Ok(())
    }
}
