//! Dining menu terminal page
//!
//! Fetches the menu for a meal and location, applies the requested dietary filters and prints
//! the filter buttons and the visible menu.

use std::{
    io::{self, Write},
    time::Instant,
};

use anyhow::Result;
use humanize_duration::{Truncate, prelude::DurationExt};
use tracing::{error, info, warn};

use dining_menu::{
    client::MenuClient,
    fixtures::Fixture,
    payload::{MenuPayload, MenuRequest},
    render::{write_filter_buttons, write_header, write_menu, write_nutrition},
    session::MenuSession,
};

use crate::config::MenuConfig;

mod config;
mod logging;

/// Dining menu entry point
#[tokio::main]
pub async fn main() -> Result<()> {
    let config = MenuConfig::load().unwrap_or_else(|err| err.exit());

    logging::init_subscriber(&config)?;

    let client = MenuClient::new(config.server.as_str());

    if config.list {
        return list_routes(&client, config.meal.as_deref()).await;
    }

    let start = Instant::now();

    let (header, payload) = if let Some(name) = config.fixture.as_deref() {
        let header = config
            .page_params()
            .map_or_else(|_err| name.to_string(), |params| params.header_text());

        let payload = Fixture::with_base_path(&config.fixtures_dir).load_menu(name)?;

        (header, payload)
    } else {
        let params = config.page_params()?;

        let Some(payload) = fetch_menu(&client, &params.menu_request()).await else {
            return Ok(());
        };

        (params.header_text(), payload)
    };

    info!(elapsed = %start.elapsed().human(Truncate::Nano), "menu ready");

    let mut session = MenuSession::new(payload).with_empty_categories(config.empty_categories());

    for key in &config.filters {
        if let Err(err) = session.toggle_filter(key) {
            warn!(%err, "skipping filter");
        }
    }

    let visible = session.visible();

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    if config.json {
        serde_json::to_writer_pretty(&mut handle, &visible)?;
        writeln!(handle)?;

        return Ok(());
    }

    write_header(&mut handle, &header)?;
    write_filter_buttons(&mut handle, &session.filter_buttons())?;
    write_menu(&mut handle, &visible)?;

    if config.nutrition {
        write_nutrition(&mut handle, &visible, session.nutrition())?;
    }

    Ok(())
}

/// Fetch the menu, logging failures. Nothing is rendered when the fetch fails.
async fn fetch_menu(client: &MenuClient, request: &MenuRequest) -> Option<MenuPayload> {
    match client.menu(request).await {
        Ok(payload) => Some(payload),
        Err(err) => {
            error!(%err, server = client.base_url(), "failed to fetch menu");
            None
        }
    }
}

async fn list_routes(client: &MenuClient, meal: Option<&str>) -> Result<()> {
    let routes = match meal {
        Some(meal) => client.locations(meal).await?,
        None => client.meals().await?,
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    for name in routes.names() {
        writeln!(handle, "{name}")?;
    }

    Ok(())
}
