use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{
    load_settings_from, BirthdayStore, DateSelection, HttpBirthdaySource, Toggle,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Parser, Debug)]
#[command(about = "Browse notable birthdays by date and keep favourites")]
struct Args {
    /// Settings file (flat TOML).
    #[arg(long, default_value = client_core::config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    /// Overrides the feed base URL from settings.
    #[arg(long)]
    api_base_url: Option<String>,
    /// Load this date (YYYY-MM-DD or MM/DD/YYYY) before reading commands.
    #[arg(long)]
    date: Option<String>,
    /// Print the list for --date and exit.
    #[arg(long, requires = "date")]
    once: bool,
}

const HELP: &str = "commands: date <YYYY-MM-DD|MM/DD/YYYY> | toggle <n> | list | favs | help | quit";

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings_from(&args.config);
    if let Some(url) = args.api_base_url {
        settings.api_base_url = url;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_filter.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(api_base_url = %settings.api_base_url, "starting birthdays client");
    let source = HttpBirthdaySource::from_settings(&settings)
        .context("failed to build births client")?;
    let store = BirthdayStore::new(Arc::new(source));

    if let Some(raw) = args.date.as_deref() {
        select_and_show(&store, raw).await?;
        if args.once {
            return Ok(());
        }
    }

    println!("{HELP}");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let mut parts = line.trim().splitn(2, ' ');
        let command = parts.next().unwrap_or_default();
        let rest = parts.next().unwrap_or_default().trim();

        match command {
            "" => {}
            "date" => select_and_show(&store, rest).await?,
            "toggle" => toggle(&store, rest).await,
            "list" => show_births(&store).await,
            "favs" => print!("{}", render::render_favourites(&store.grouped_view().await)),
            "help" => println!("{HELP}"),
            "quit" | "exit" => break,
            other => println!("unknown command '{other}'; {HELP}"),
        }
    }

    Ok(())
}

async fn select_and_show(store: &Arc<BirthdayStore>, raw: &str) -> Result<()> {
    let selection = DateSelection::parse(raw);
    if selection.is_none() {
        println!("'{raw}' is not a date; selection unchanged");
    }

    if let Some(pending) = store.select_date(selection.map(|s| s.date)).await {
        show_births(store).await;
        pending.await.context("births lookup task failed")?;
    }
    show_births(store).await;
    Ok(())
}

async fn show_births(store: &BirthdayStore) {
    let selection = store.selection().await;
    let state = store.fetch_state().await;
    let marked = store.marked_birthdays().await;
    print!("{}", render::render_births(selection.as_ref(), &state, &marked));
}

async fn toggle(store: &BirthdayStore, raw: &str) {
    let Ok(index) = raw.parse::<usize>() else {
        println!("usage: toggle <n>");
        return;
    };
    let marked = store.marked_birthdays().await;
    let Some((birthday, _)) = index.checked_sub(1).and_then(|i| marked.get(i)) else {
        println!("no birthday #{index} in the current list");
        return;
    };

    match store.toggle_favourite(birthday).await {
        Some(Toggle::Added(f)) => println!("added {} ({})", f.display_line(), f.date),
        Some(Toggle::Removed(f)) => println!("removed {}", f.display_line()),
        None => println!("pick a date first"),
    }
}
