use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gendex_api::{RosterEvent, Settings};

use crate::CliError;
use crate::commands::make_client;
use crate::spinner;

/// Run the roster command.
pub(crate) fn run_roster(
    settings: &Settings,
    generation: u8,
    filter: Option<String>,
    sprites: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let descriptor = gendex_api::catalog::describe(generation)?;
    let client = make_client(settings)?;

    log::info!(
        "{}",
        descriptor.display_name.if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

    let (roster, failed) = rt.block_on(async {
        let pb = spinner::spinner(quiet, "Fetching species list...");
        let (event_tx, event_rx) = tokio::sync::mpsc::unbounded_channel::<RosterEvent>();

        // The sender moves into the load future so the channel closes as
        // soon as the load finishes and the drain below can't stall.
        let load = {
            let client = &client;
            async move {
                gendex_api::load_roster(client, descriptor, settings.max_in_flight, &event_tx).await
            }
        };

        let mut total = 0usize;
        let mut done = 0usize;
        let mut failed: Vec<(String, String)> = Vec::new();

        let result = gendex_api::async_util::run_with_events(load, event_rx, |event| match event {
            RosterEvent::ListFetched { total: n } => {
                total = n;
                pb.set_message(format!("Fetching details... 0/{}", n));
            }
            RosterEvent::EntryFetched { name, .. } => {
                done += 1;
                pb.set_message(format!("Fetching details... {}/{} ({})", done, total, name));
            }
            RosterEvent::EntryFailed { species, reason } => {
                done += 1;
                failed.push((species, reason));
                pb.set_message(format!("Fetching details... {}/{}", done, total));
            }
            RosterEvent::Done => {}
        })
        .await;

        pb.finish_and_clear();
        result.map(|roster| (roster, failed))
    })?;

    if roster.is_empty() {
        log::info!(
            "  {}",
            "No species resolved for this generation".if_supports_color(Stdout, |t| t.dimmed()),
        );
    } else {
        let query = filter.as_deref().unwrap_or("");
        let shown = gendex_api::filter_roster(&roster, query);

        if !query.is_empty() {
            log::info!(
                "{}",
                format!(
                    "Filter \"{}\": {} of {} match",
                    query,
                    shown.len(),
                    roster.len()
                )
                .if_supports_color(Stdout, |t| t.dimmed()),
            );
            crate::log_blank();
        }

        for p in &shown {
            log::info!(
                "  {} {}",
                gendex_api::format::dex_number(p.id).if_supports_color(Stdout, |t| t.cyan()),
                gendex_api::format::title_case_tag(&p.name),
            );
            if sprites {
                match &p.sprite {
                    Some(url) => {
                        log::info!("       {}", url.if_supports_color(Stdout, |t| t.dimmed()));
                    }
                    None => {
                        log::info!(
                            "       {}",
                            "(no sprite)".if_supports_color(Stdout, |t| t.dimmed()),
                        );
                    }
                }
            }
        }

        crate::log_blank();
        log::info!(
            "{} {} Pokémon listed",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            shown.len(),
        );
    }

    if !failed.is_empty() {
        log::warn!(
            "{} {} species failed to load:",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            failed.len(),
        );
        for (species, reason) in &failed {
            log::warn!("    {}: {}", species, reason);
        }
    }

    Ok(())
}
