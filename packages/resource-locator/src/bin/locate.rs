//! Command-line resource lookup
//!
//! Drives the same query machine as the web page: mounts, applies the
//! requested filters and search term, waits for the result to settle, then
//! prints what the page would show.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use resource_locator::view::{self, ResourceView, ViewBody};
use resource_locator::{LocatorConfig, LocatorRuntime};
use resources_client::{Resource, ResourcesClient};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "locate")]
#[command(about = "Find community support resources")]
struct Cli {
    /// Category filter (e.g. housing, legal-aid)
    #[arg(long)]
    category: Option<String>,

    /// Location filter (e.g. "New York", National)
    #[arg(long)]
    location: Option<String>,

    /// Keyword matched against name and description
    #[arg(long)]
    search: Option<String>,

    /// Print the available filter options as well
    #[arg(long)]
    options: bool,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

// ============================================================================
// JSON Response Types
// ============================================================================

#[derive(Serialize)]
struct Response<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
    total: usize,
    resources: Vec<Resource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    categories: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    locations: Option<&'a [String]>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,resource_locator=debug,resources_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = LocatorConfig::from_env().context("Failed to load configuration")?;
    tracing::debug!(base_url = %config.api_base_url, "Loaded configuration");

    let api = Arc::new(ResourcesClient::new(&config.api_base_url));
    let runtime = LocatorRuntime::new(api, &config);

    runtime.mount();
    if let Some(category) = cli.category {
        runtime.select_category(category);
    }
    if let Some(location) = cli.location {
        runtime.select_location(location);
    }
    if let Some(term) = cli.search {
        runtime.set_search(term);
    }

    let state = runtime.settled().await;
    let view = state.view();
    let categories = state.category_options();
    let locations = state.location_options();

    if cli.json {
        let response = to_response(&view, cli.options.then_some((&categories, &locations)));
        println!(
            "{}",
            serde_json::to_string_pretty(&response).context("Failed to serialize response")?
        );
        return Ok(());
    }

    print_view(&view);
    if cli.options {
        println!();
        println!("{} {}", "Categories:".bold(), categories.join(", "));
        println!("{} {}", "Locations:".bold(), locations.join(", "));
    }

    Ok(())
}

fn to_response<'a>(
    view: &ResourceView,
    options: Option<(&'a Vec<String>, &'a Vec<String>)>,
) -> Response<'a> {
    let (resources, total, message) = match &view.body {
        ViewBody::Loading => (Vec::new(), 0, Some(view::LOADING_TEXT)),
        ViewBody::Grid { resources, total } => (resources.clone(), *total, None),
        ViewBody::NoResources => (Vec::new(), 0, Some(view::NO_RESOURCES_TITLE)),
        ViewBody::NoMatches { total } => (Vec::new(), *total, Some(view::NO_MATCHES_TITLE)),
    };

    Response {
        error: view.banner.as_ref().map(|b| b.error.clone()),
        message,
        total,
        resources,
        categories: options.map(|(c, _)| c.as_slice()),
        locations: options.map(|(_, l)| l.as_slice()),
    }
}

fn print_view(view: &ResourceView) {
    if let Some(banner) = &view.banner {
        println!("{}", format!("⚠ {}", banner.title()).yellow().bold());
        println!("{}", banner.message().yellow());
        println!();
    }

    if let Some(summary) = view.summary() {
        println!("{}", summary.dimmed());
        println!();
    }

    match &view.body {
        ViewBody::Loading => println!("{}", view::LOADING_TEXT),
        ViewBody::Grid { resources, .. } => {
            for resource in resources {
                print_card(resource);
            }
        }
        ViewBody::NoResources => {
            println!("{}", view::NO_RESOURCES_TITLE.bold());
            println!("{}", view::NO_RESOURCES_DETAIL);
        }
        ViewBody::NoMatches { .. } => {
            println!("{}", view::NO_MATCHES_TITLE.bold());
            println!("{}", view::NO_MATCHES_DETAIL);
        }
    }
}

fn print_card(resource: &Resource) {
    let mut badges = format!("[{}] [{}]", resource.category, resource.location);
    if resource.available_24h {
        badges.push_str(&" [24/7]".red().to_string());
    }

    println!("{}  {}", resource.name.bright_cyan().bold(), badges);
    if !resource.description.is_empty() {
        println!("  {}", resource.description);
    }
    println!("  ☎ {}", resource.phone);
    if let Some(website) = &resource.website {
        println!("  🌐 {}", website.underline());
    }
    println!("  🕒 {}", resource.availability_label());
    println!();
}
