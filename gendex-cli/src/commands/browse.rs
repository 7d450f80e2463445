//! Interactive browse loop: generation menu -> roster list -> details.
//!
//! Drives a `BrowseSession`. The prompt UI prints directly since it is the
//! interface itself, not log output; `--quiet` only hides the spinners.

use std::io::Write;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use tokio::runtime::Runtime;

use gendex_api::format::{dex_number, method_label, title_case_tag};
use gendex_api::{BrowseSession, PokeApiClient, RosterEvent, Settings, ViewState};

use crate::CliError;
use crate::commands::make_client;
use crate::spinner;

/// Roster rows printed before the rest is elided behind a filter hint.
const LIST_LIMIT: usize = 20;

/// Run the browse command.
pub(crate) fn run_browse(
    settings: &Settings,
    generation: Option<u8>,
    quiet: bool,
) -> Result<(), CliError> {
    let client = make_client(settings)?;
    let rt = Runtime::new().expect("Failed to create tokio runtime");

    let mut session = BrowseSession::new();

    if let Some(key) = generation {
        if let Err(e) = load_generation(&rt, &client, settings, &mut session, key, quiet) {
            print_problem(&e);
            session.back();
        }
    }

    loop {
        match session.view() {
            ViewState::GenerationMenu => {
                print_menu();
                let Some(input) = prompt("Generation (1-9), q to quit") else {
                    break;
                };
                match input.as_str() {
                    "" => {}
                    "q" | "quit" => break,
                    other => match other.parse::<u8>() {
                        Ok(key) => {
                            if let Err(e) =
                                load_generation(&rt, &client, settings, &mut session, key, quiet)
                            {
                                print_problem(&e);
                                session.back();
                            }
                        }
                        Err(_) => println!("  Enter a number between 1 and 9."),
                    },
                }
            }
            ViewState::PokemonList => {
                print_roster(&session);
                let Some(input) = prompt("#dex to view, /text to filter, b for menu, q to quit")
                else {
                    break;
                };
                match input.as_str() {
                    "" => {}
                    "q" | "quit" => break,
                    "b" | "back" => session.back(),
                    other if other.starts_with('/') => {
                        session.set_query(other.trim_start_matches('/'));
                    }
                    other => match other.trim_start_matches('#').parse::<u32>() {
                        Ok(id) => {
                            if session.select_species(id).is_some() {
                                show_details(&rt, &client, &session, quiet);
                            } else {
                                println!("  No entry #{} in this roster.", id);
                            }
                        }
                        Err(_) => println!("  Enter a dex number, /text, b, or q."),
                    },
                }
            }
            ViewState::PokemonDetails => {
                let Some(input) = prompt("b for the list, q to quit") else {
                    break;
                };
                match input.as_str() {
                    "q" | "quit" => break,
                    _ => session.back(),
                }
            }
        }
    }

    Ok(())
}

/// Select a generation and load its roster into the session.
fn load_generation(
    rt: &Runtime,
    client: &PokeApiClient,
    settings: &Settings,
    session: &mut BrowseSession,
    key: u8,
    quiet: bool,
) -> Result<(), CliError> {
    let (descriptor, token) = session.select_generation(key)?;

    println!();
    println!(
        "{}",
        descriptor.display_name.if_supports_color(Stdout, |t| t.bold()),
    );

    let roster = rt.block_on(async {
        let pb = spinner::spinner(quiet, "Fetching species list...");
        let (event_tx, event_rx) = tokio::sync::mpsc::unbounded_channel::<RosterEvent>();

        // The sender moves into the load future so the channel closes as
        // soon as the load finishes.
        let load = async move {
            gendex_api::load_roster(client, descriptor, settings.max_in_flight, &event_tx).await
        };

        let mut total = 0usize;
        let mut done = 0usize;

        let result = gendex_api::async_util::run_with_events(load, event_rx, |event| match event {
            RosterEvent::ListFetched { total: n } => {
                total = n;
                pb.set_message(format!("Fetching details... 0/{}", n));
            }
            RosterEvent::EntryFetched { .. } | RosterEvent::EntryFailed { .. } => {
                done += 1;
                pb.set_message(format!("Fetching details... {}/{}", done, total));
            }
            RosterEvent::Done => {}
        })
        .await;

        pb.finish_and_clear();
        result
    })?;

    let count = roster.len();
    if session.install_roster(token, roster) {
        println!(
            "{} {} Pokémon loaded",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            count,
        );
    }
    Ok(())
}

fn print_menu() {
    println!();
    println!("{}", "Generations".if_supports_color(Stdout, |t| t.bold()));
    for g in gendex_api::catalog::all() {
        println!(
            "  {} {}",
            format!("{}.", g.key).if_supports_color(Stdout, |t| t.cyan()),
            g.display_name,
        );
    }
    println!();
}

fn print_roster(session: &BrowseSession) {
    println!();
    if let Some(descriptor) = session.generation() {
        println!(
            "{}",
            descriptor.display_name.if_supports_color(Stdout, |t| t.bold()),
        );
    }

    let visible = session.visible();
    if !session.query().is_empty() {
        println!(
            "{}",
            format!(
                "Filter \"{}\": {} of {} match",
                session.query(),
                visible.len(),
                session.roster().len()
            )
            .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    if visible.is_empty() {
        println!(
            "  {}",
            "No entries".if_supports_color(Stdout, |t| t.dimmed()),
        );
        println!();
        return;
    }

    for p in visible.iter().take(LIST_LIMIT) {
        println!(
            "  {} {}",
            dex_number(p.id).if_supports_color(Stdout, |t| t.cyan()),
            title_case_tag(&p.name),
        );
    }
    if visible.len() > LIST_LIMIT {
        println!(
            "  {}",
            format!(
                "... and {} more (type /text to narrow)",
                visible.len() - LIST_LIMIT
            )
            .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    println!();
}

/// Print the details pane for the selected entry, encounters included.
fn show_details(rt: &Runtime, client: &PokeApiClient, session: &BrowseSession, quiet: bool) {
    let (Some(entry), Some(descriptor)) = (session.selected(), session.generation()) else {
        return;
    };

    println!();
    println!(
        "{} {}",
        dex_number(entry.id).if_supports_color(Stdout, |t| t.cyan()),
        title_case_tag(&entry.name).if_supports_color(Stdout, |t| t.bold()),
    );
    if let Some(sprite) = &entry.sprite {
        println!(
            "  Sprite: {}",
            sprite.if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    println!();

    let result = rt.block_on(async {
        let pb = spinner::spinner(quiet, "Fetching encounter data...");
        let groups = gendex_api::resolve_encounters(client, entry.id, descriptor).await;
        pb.finish_and_clear();
        groups
    });

    match result {
        Ok(groups) if groups.is_empty() => {
            println!(
                "  {}",
                "Not found in the wild in this generation"
                    .if_supports_color(Stdout, |t| t.dimmed()),
            );
            println!("  (May be an evolution, starter, gift, or trade exclusive.)");
        }
        Ok(groups) => {
            for group in &groups {
                println!(
                    "  {}",
                    title_case_tag(&group.location_area).if_supports_color(Stdout, |t| t.bold()),
                );
                for vg in &group.versions {
                    println!(
                        "    {}",
                        title_case_tag(&vg.version).if_supports_color(Stdout, |t| t.cyan()),
                    );
                    for slot in &vg.encounters {
                        println!(
                            "      {:<28} {:>3}%  Lv. {}-{}",
                            method_label(&slot.method),
                            slot.chance,
                            slot.min_level,
                            slot.max_level,
                        );
                    }
                }
            }
        }
        Err(e) => {
            println!(
                "  {} Could not fetch encounters: {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                e,
            );
        }
    }
    println!();
}

/// Read one trimmed line from stdin. `None` means EOF (treated as quit).
fn prompt(text: &str) -> Option<String> {
    print!("{} > ", text);
    let _ = std::io::stdout().flush();

    let mut input = String::new();
    match std::io::stdin().read_line(&mut input) {
        Ok(0) => None,
        Ok(_) => Some(input.trim().to_string()),
        Err(_) => None,
    }
}

fn print_problem(e: &CliError) {
    println!(
        "  {} {}",
        "\u{2718}".if_supports_color(Stdout, |t| t.red()),
        e,
    );
}
