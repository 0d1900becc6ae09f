use std::io::Write;

use crate::errors::AppResult;
use crate::ui::messages;

/// Write the activity summary for `username`.
///
/// Shows at most `limit` lines, in the order given. An empty list prints a
/// single explanatory sentence instead of a header.
pub fn display_activity<W: Write>(
    out: &mut W,
    username: &str,
    activities: &[String],
    limit: usize,
    tty: bool,
) -> AppResult<()> {
    if activities.is_empty() {
        writeln!(
            out,
            "No recent activity found for {} or the account is private.",
            username
        )?;
        return Ok(());
    }

    writeln!(out)?;
    writeln!(
        out,
        "{}",
        messages::header(format!("Recent activity for {}:", username), tty)
    )?;
    writeln!(out)?;
    for line in activities.iter().take(limit) {
        writeln!(out, "{}", line)?;
    }
    writeln!(out)?;
    writeln!(out)?;
    Ok(())
}
