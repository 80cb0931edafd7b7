use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use plot_showcase::catalogue::Catalogue;
use plot_showcase::comparison::ComparisonWindow;
use plot_showcase::config::load_config;
use plot_showcase::models::format_rupees;
use plot_showcase::mortgage::MortgageInputs;
use plot_showcase::render::{LogSink, RenderSink, Scene, ViewMode};
use plot_showcase::reservation::TimeRemaining;
use plot_showcase::showcase::run_carousel;
use tokio::sync::watch;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config().context("Failed to load configuration")?;

    // Initialize logging
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("Invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    info!("🏡 Plot Showcase - RK Adarsh Nagar, Bhimavaram");
    info!("==============================================");

    let source = config.catalogue.source()?;
    info!("Loading catalogue from {} source...", source.source_name());
    let mut catalogue = Catalogue::load(source.as_ref())
        .await
        .context("Failed to load catalogue")?;

    let now = Utc::now();
    for id in &config.reserve {
        if catalogue.toggle_reservation(id, now).is_none() {
            warn!("No property with id {}, reservation skipped", id);
        }
    }

    if config.auto_release_expired {
        catalogue.release_expired(now);
    }

    info!(
        "Searching: text='{}', status={}, size='{}'",
        config.query.search, config.query.status, config.query.size
    );
    let listed = catalogue.filter(&config.query);

    if listed.is_empty() {
        println!("No properties found matching your criteria.");
    }

    let sink = LogSink;
    for (i, property) in listed.iter().enumerate() {
        println!("{}. {} ({})", i + 1, property.title, format_rupees(property.price));
        println!("   {} · facing {} · {}", property.size, property.facing, property.location);

        let (shown, more) = property.amenity_preview();
        if more > 0 {
            println!("   Amenities: {} +{} more", shown.join(", "), more);
        } else {
            println!("   Amenities: {}", shown.join(", "));
        }

        match property.reservation_status(now) {
            Some(TimeRemaining::Remaining { days, hours }) => println!(
                "   Status: Booked, reservation expires in {} days and {} hours",
                days, hours
            ),
            Some(TimeRemaining::Expired) => println!("   Status: Booked (reservation window over)"),
            None => println!("   Status: Available"),
        }

        let quote = MortgageInputs::for_price(property.price).quote();
        println!(
            "   Mortgage (20% down, 8.5%, 20y): {}/month, {} total interest",
            format_rupees(quote.monthly_payment.round() as u64),
            format_rupees(quote.total_interest.round() as u64)
        );
        println!(
            "   5-year projection: {}",
            format_rupees(property.five_year_projection())
        );
        println!("   ID: {}", property.id);
        println!();

        for scene in [
            Scene::model(property, ViewMode::House),
            Scene::model(property, ViewMode::Plot),
            Scene::map(property),
        ] {
            sink.render(&scene)?;
        }
    }

    let window = ComparisonWindow::new(listed);
    if !window.is_empty() {
        println!("Compare Properties");
        for (label, cells) in window.rows() {
            if cells.is_empty() {
                println!("== {}", label);
            } else {
                println!("   {:<10} | {}", label, cells.join(" | "));
            }
        }
        println!();
    }

    if config.showcase_ticks > 0 {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let mut carousel = tokio::spawn(run_carousel(
            catalogue.snapshot(),
            config.rotation_period,
            Arc::new(LogSink),
            Some(config.showcase_ticks),
            shutdown_rx,
        ));

        tokio::select! {
            result = &mut carousel => {
                result.context("Carousel task failed")?;
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, stopping carousel");
                let _ = shutdown_tx.send(true);
                carousel.await.context("Carousel task failed")?;
            }
        }
    }

    // Save the session's final state
    let json = serde_json::to_string_pretty(catalogue.properties())?;
    tokio::fs::write(&config.export_path, json)
        .await
        .with_context(|| format!("Failed to write {}", config.export_path))?;
    info!("💾 Saved {} properties to {}", catalogue.len(), config.export_path);

    Ok(())
}
