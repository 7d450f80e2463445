use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gendex_api::Settings;
use gendex_api::format::{dex_number, method_label, title_case_tag};

use crate::CliError;
use crate::commands::make_client;
use crate::spinner;

/// Run the locations command.
pub(crate) fn run_locations(
    settings: &Settings,
    generation: u8,
    species: &str,
    quiet: bool,
) -> Result<(), CliError> {
    let descriptor = gendex_api::catalog::describe(generation)?;
    let client = make_client(settings)?;

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

    rt.block_on(async {
        // A bare dex number skips the name lookup
        let (id, label) = match species.parse::<u32>() {
            Ok(id) => (id, dex_number(id)),
            Err(_) => {
                let pb = spinner::spinner(quiet, "Resolving species name...");
                let list = gendex_api::fetch_species_list(&client, descriptor).await;
                pb.finish_and_clear();

                let id = gendex_api::species_id_by_name(&list?, species).ok_or_else(|| {
                    CliError::not_found(format!(
                        "Species \"{}\" not found in {}",
                        species, descriptor.display_name
                    ))
                })?;
                (id, title_case_tag(species))
            }
        };

        let pb = spinner::spinner(quiet, "Fetching encounter data...");
        let groups = gendex_api::resolve_encounters(&client, id, descriptor).await;
        pb.finish_and_clear();
        let groups = groups?;

        log::info!(
            "{}",
            format!("Wild locations for {} in {}", label, descriptor.display_name)
                .if_supports_color(Stdout, |t| t.bold()),
        );
        crate::log_blank();

        if groups.is_empty() {
            log::info!(
                "  {}",
                "Not found in the wild in this generation"
                    .if_supports_color(Stdout, |t| t.dimmed()),
            );
            log::info!("  (May be an evolution, starter, gift, or trade exclusive.)");
            return Ok(());
        }

        for group in &groups {
            log::info!(
                "  {}",
                title_case_tag(&group.location_area).if_supports_color(Stdout, |t| t.bold()),
            );
            for vg in &group.versions {
                log::info!(
                    "    {}",
                    title_case_tag(&vg.version).if_supports_color(Stdout, |t| t.cyan()),
                );
                for slot in &vg.encounters {
                    log::info!(
                        "      {:<28} {:>3}%  Lv. {}-{}",
                        method_label(&slot.method),
                        slot.chance,
                        slot.min_level,
                        slot.max_level,
                    );
                }
            }
            crate::log_blank();
        }

        log::info!(
            "{} {} location areas",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            groups.len(),
        );

        Ok(())
    })
}
