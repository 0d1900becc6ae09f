/// Kind of a GitHub activity event, taken from its `type` tag.
///
/// Tags this tool has no dedicated wording for are kept verbatim in
/// `Other` so they can still be reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Push,
    Issues,
    PullRequest,
    Watch,
    Fork,
    Create,
    Other(String),
    Missing,
}

impl EventKind {
    /// Convert an optional API tag → enum. Never fails.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("PushEvent") => Self::Push,
            Some("IssuesEvent") => Self::Issues,
            Some("PullRequestEvent") => Self::PullRequest,
            Some("WatchEvent") => Self::Watch,
            Some("ForkEvent") => Self::Fork,
            Some("CreateEvent") => Self::Create,
            Some(other) => Self::Other(other.to_string()),
            None => Self::Missing,
        }
    }
}
