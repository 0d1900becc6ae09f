//! github-activity main entrypoint.

use github_activity::run;
use github_activity::ui::messages;

fn main() {
    if let Err(e) = run() {
        if e.is_usage() {
            eprint!("{}", e);
        } else {
            messages::error(format!("Error: {}", e));
        }
        std::process::exit(1);
    }
}
