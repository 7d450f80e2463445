use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

pub(crate) fn run_generations() -> Result<(), CliError> {
    log::info!(
        "{}",
        "Supported generations:".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    for g in gendex_api::catalog::all() {
        log::info!(
            "  {} {}",
            format!("{}.", g.key).if_supports_color(Stdout, |t| t.cyan()),
            g.display_name,
        );
        log::info!(
            "     {}",
            format!("Versions: {}", g.version_tags.join(", "))
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    Ok(())
}
