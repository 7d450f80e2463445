//! Spinner helper shared across commands.

use std::borrow::Cow;

use indicatif::{ProgressBar, ProgressStyle};

/// Create the standard spinner with an initial message.
///
/// Hidden in quiet mode; callers still update and clear it the same way.
pub(crate) fn spinner(quiet: bool, msg: impl Into<Cow<'static, str>>) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|"),
    );
    pb.set_message(msg);
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
