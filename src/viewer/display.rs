//! Display manager for the browser terminal UI
//!
//! Renders page bodies, the page-selector bar, range lines and
//! color-coded messages

use colored::*;
use crossterm::{
    cursor,
    execute,
    terminal::{Clear, ClearType},
};
use std::io;

use crate::pager::{PageManager, PageMarker};
use crate::viewer::ListView;

/// Display manager for the browser UI
///
/// Features:
/// - Page body with global row numbers
/// - Selector bar rendered from the marker sequence
/// - Range line ("Showing 11-20 of 47 rows")
/// - Color-coded messages
pub struct DisplayManager;

impl DisplayManager {
    /// Create new display manager
    pub fn new() -> Self {
        DisplayManager
    }

    /// Show welcome banner
    pub fn show_banner(&self, version: &str, source: &str) {
        let width = 64;

        println!("\n{}", "=".repeat(width).cyan());
        println!(
            "{}",
            format!("  pagebuddy {} - Paginated Data Browser", version)
                .bold()
                .cyan()
        );
        println!("{}", format!("  Source: {}", source).dimmed());
        println!("{}\n", "=".repeat(width).cyan());
        println!(
            "Type {} for commands, {} to quit\n",
            "h".green(),
            "q".green()
        );
    }

    /// Render the active page: rows, selector bar, range line
    pub fn show_page(&self, view: &ListView) {
        println!();

        if view.pager().window().is_empty() {
            println!("  {}", "No rows to display.".yellow());
            println!();
            return;
        }

        let (start, _) = view.pager().visible_range();
        for (offset, row) in view.current_rows().iter().enumerate() {
            println!("  {}  {}", format!("{:>5}", start + offset).dimmed(), row);
        }

        println!();
        println!("  {}", self.selector_line(view.pager()));
        println!("  {}", self.range_line(view.pager()).dimmed());
        println!();
    }

    /// Display view details and navigation counters
    pub fn show_view_info(&self, view: &ListView) {
        println!("\n{}", "View Status:".bold().cyan());
        println!("{}", "=".repeat(60).cyan());

        let pager = view.pager();
        let menu = view
            .page_sizes()
            .iter()
            .map(|size| size.to_string())
            .collect::<Vec<_>>()
            .join("/");
        let stats = view.stats();

        println!("  View Name:        {}", view.name().green());
        println!("  Source:           {}", view.dataset().source_label().green());
        println!("  Total Rows:       {}", pager.total_items().to_string().green());
        println!(
            "  Current Page:     {} of {}",
            pager.current_page().to_string().green(),
            pager.total_pages()
        );
        println!(
            "  Rows Per Page:    {} (available: {})",
            pager.items_per_page().to_string().green(),
            menu
        );
        println!("  Pages Visited:    {}", stats.pages_visited.to_string().green());
        println!("  Jumps:            {}", stats.jumps.to_string().green());
        println!("  Size Changes:     {}", stats.size_changes.to_string().green());
        println!("  Reloads:          {}", stats.reloads.to_string().green());
        println!();
    }

    /// Display error message
    pub fn show_error(&self, error: &str) {
        println!("{} {}", "Error:".red().bold(), error.red());
    }

    /// Display warning message
    pub fn show_warning(&self, warning: &str) {
        println!("{} {}", "Warning:".yellow().bold(), warning.yellow());
    }

    /// Display info message
    pub fn show_info(&self, info: &str) {
        println!("{} {}", "Info:".cyan(), info);
    }

    /// Clear screen
    pub fn clear_screen(&self) -> io::Result<()> {
        execute!(
            io::stdout(),
            Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )
    }

    /// Selector bar: arrows, page numbers, ellipsis gaps
    ///
    /// The current page is bracketed; disabled arrows and gaps render
    /// dimmed.
    fn selector_line(&self, pager: &PageManager) -> String {
        let mut parts: Vec<String> = Vec::new();

        let prev = "◀ prev";
        parts.push(if pager.has_previous() {
            prev.cyan().to_string()
        } else {
            prev.dimmed().to_string()
        });

        for marker in &pager.window().markers {
            let part = match marker {
                PageMarker::Page(n) if *n == pager.current_page() => {
                    format!("[{}]", n).bold().cyan().to_string()
                }
                PageMarker::Page(n) => n.to_string(),
                PageMarker::Ellipsis => "…".dimmed().to_string(),
            };
            parts.push(part);
        }

        let next = "next ▶";
        parts.push(if pager.has_next() {
            next.cyan().to_string()
        } else {
            next.dimmed().to_string()
        });

        parts.join("  ")
    }

    fn range_line(&self, pager: &PageManager) -> String {
        let (start, end) = pager.visible_range();
        format!(
            "Showing {}-{} of {} rows (page {} of {})",
            start,
            end,
            pager.total_items(),
            pager.current_page(),
            pager.total_pages()
        )
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new()
    }
}
