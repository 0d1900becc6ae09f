//! Turns raw activity events into one readable line each.

use crate::models::event::Event;
use crate::models::event_type::EventKind;
use crate::models::payload::{
    CreatePayload, ForkPayload, IssuesPayload, PullRequestPayload, PushPayload,
};
use crate::utils::{capitalize, format_created_at, pluralize};

pub const UNKNOWN_REPOSITORY: &str = "unknown repository";
pub const UNKNOWN_EVENT: &str = "an unknown event";

/// Format every event, keeping the order the API returned them in.
pub fn format_events(events: &[Event]) -> Vec<String> {
    events.iter().map(format_event).collect()
}

/// `- {message} (on {date})`
pub fn format_event(event: &Event) -> String {
    let date = format_created_at(event.created_at.as_deref());
    format!("- {} (on {})", describe(event), date)
}

/// Build the message body for a single event, without date or bullet.
pub fn describe(event: &Event) -> String {
    let repo = event.repo_name().unwrap_or(UNKNOWN_REPOSITORY);

    match event.event_kind() {
        EventKind::Push => {
            let p: PushPayload = event.payload_as();
            format!(
                "Pushed {} to {}",
                pluralize(p.commit_count(), "commit", "commits"),
                repo
            )
        }
        EventKind::Issues => {
            let p: IssuesPayload = event.payload_as();
            let action = p.action.as_deref().unwrap_or("did something with an issue");
            let title = p
                .issue
                .and_then(|i| i.title)
                .unwrap_or_else(|| "untitled issue".to_string());
            format!("{} issue '{}' in {}", capitalize(action), title, repo)
        }
        EventKind::PullRequest => {
            let p: PullRequestPayload = event.payload_as();
            let action = p
                .action
                .as_deref()
                .unwrap_or("did something with a pull request");
            let title = p
                .pull_request
                .and_then(|pr| pr.title)
                .unwrap_or_else(|| "untitled pull request".to_string());
            format!("{} pull request '{}' in {}", capitalize(action), title, repo)
        }
        EventKind::Watch => format!("Starred {}", repo),
        EventKind::Fork => {
            let p: ForkPayload = event.payload_as();
            let target = p
                .forkee
                .and_then(|f| f.html_url)
                .unwrap_or_else(|| "a repository".to_string());
            format!("Forked {} to {}", repo, target)
        }
        EventKind::Create => {
            let p: CreatePayload = event.payload_as();
            let ref_type = p.ref_type.as_deref().unwrap_or("repository");
            format!("Created a {} in {}", ref_type, repo)
        }
        EventKind::Other(tag) => format!("Performed {} on {}", tag, repo),
        EventKind::Missing => format!("Performed {} on {}", UNKNOWN_EVENT, repo),
    }
}
