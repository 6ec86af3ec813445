//! pagebuddy - Main CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use pagebuddy::{
    cli::{sanitize_view_name, Args, Commands},
    config::Config,
    dataset::Dataset,
    pager::PageManager,
    settings::SettingsManager,
    store::FileStore,
    viewer::{BrowseSession, ListView},
};

fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(message) = args.validate() {
        eprintln!("{} {}", "Error:".red().bold(), message);
        std::process::exit(2);
    }

    let mut config = Config::load(args.config.clone())?;
    if let Some(data_dir) = &args.data_dir {
        config.paths.state_dir = data_dir.display().to_string();
    }

    if args.plain || !config.viewer.color_output {
        colored::control::set_override(false);
    }

    match &args.command {
        Some(Commands::Config) => {
            show_config(&config)?;
        }
        Some(Commands::Clean { view }) => {
            clean_settings(&config, view.as_deref())?;
        }
        None => {
            browse(&args, &config)?;
        }
    }

    Ok(())
}

/// Open the data source and hand it to the interactive browser
fn browse(args: &Args, config: &Config) -> Result<()> {
    let dataset = match (&args.file, args.sample) {
        (Some(path), _) => Dataset::from_file(path)
            .with_context(|| format!("Failed to open {}", path.display()))?,
        (None, Some(count)) => Dataset::sample(count),
        (None, None) => anyhow::bail!("Data source required. Pass a FILE or --sample N."),
    };

    let view_name = args.view_name();
    let store = FileStore::new(config.views_dir())?;
    let settings = SettingsManager::new(Box::new(store));

    // Page size precedence: run flag, then the remembered size, then the
    // configured default already inside the pager
    let mut pager = PageManager::with_config(config.pagination.clone());
    let page_size = match args.page_size {
        Some(size) => Some(size),
        None => remembered_page_size(&settings, &view_name, config),
    };
    if let Some(size) = page_size {
        pager.set_items_per_page(size);
    }

    let view = ListView::new(&view_name, dataset, pager);
    let mut session = BrowseSession::new(view, settings, config)?;
    session.run()
}

/// Look up the saved page size for a view, tolerating a corrupt entry
fn remembered_page_size(
    settings: &SettingsManager,
    view_name: &str,
    config: &Config,
) -> Option<usize> {
    if !config.viewer.remember_page_size {
        return None;
    }

    match settings.load_view(view_name) {
        Ok(saved) => saved.map(|s| s.items_per_page),
        Err(e) => {
            eprintln!(
                "{} Ignoring saved settings for '{}': {}",
                "Warning:".yellow().bold(),
                view_name,
                e
            );
            None
        }
    }
}

/// Print the effective configuration as TOML
fn show_config(config: &Config) -> Result<()> {
    let rendered = toml::to_string_pretty(config)?;

    println!("{}", "pagebuddy configuration".bold().cyan());
    println!("{}", "=".repeat(40).cyan());
    println!("{}", rendered.trim_end());
    println!();
    println!("State directory:   {}", config.state_dir().display());
    println!("Saved views:       {}", config.views_dir().display());
    println!("Input history:     {}", config.history_file().display());

    Ok(())
}

/// Remove saved view settings, one view or all of them
fn clean_settings(config: &Config, view: Option<&str>) -> Result<()> {
    let store = FileStore::new(config.views_dir())?;
    let mut settings = SettingsManager::new(Box::new(store));

    match view {
        Some(raw) => {
            let name = sanitize_view_name(raw);
            // A corrupt entry still gets removed here
            match settings.load_view(&name) {
                Ok(None) => println!("No saved settings for '{}'.", name),
                _ => {
                    settings.clear_view(&name)?;
                    println!("{} Removed saved settings for '{}'.", "✓".green(), name);
                }
            }
        }
        None => {
            let removed = settings.clear_all()?;
            if removed == 0 {
                println!("No saved view settings found.");
            } else {
                println!("{} Removed settings for {} view(s).", "✓".green(), removed);
            }
        }
    }

    Ok(())
}
