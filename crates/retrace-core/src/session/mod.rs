mod group;

pub use group::{GroupQuery, HostGroup, UNKNOWN_HOST, group_by_host};

use crate::har::{Entry, Har};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Matches asset URLs by extension, with or without a trailing query string.
    // Applied to the lowercased URL, so the extension list stays lowercase.
    static ref ASSET_URL: Regex = Regex::new(
        r"\.(css|js|png|jpg|jpeg|gif|svg|woff|woff2|ico|ttf|eot)(\?.*)?$"
    )
    .unwrap();
}

/// Methods that represent user-driven actions.
///
/// The match is case-sensitive on purpose: captures that record
/// lowercase methods are dropped rather than normalized.
const ACTION_METHODS: [&str; 5] = ["GET", "POST", "PUT", "PATCH", "DELETE"];

/// Whether an entry belongs in the reconstructed session.
///
/// Static asset fetches (stylesheets, scripts, images, fonts) are noise
/// for session reconstruction; everything else with an action method is
/// kept.
pub fn is_session_relevant(entry: &Entry) -> bool {
    let url = entry.request.url.to_lowercase();
    let is_asset = ASSET_URL.is_match(&url);
    let is_action = ACTION_METHODS.contains(&entry.request.method.as_str());
    !is_asset && is_action
}

/// The filtered, ordered sequence of entries a capture reduces to.
///
/// Entry indices handed out by [`Session::entry`] and
/// [`group_by_host`] refer to positions in this filtered sequence.
#[derive(Debug, Clone)]
pub struct Session {
    entries: Vec<Entry>,
}

impl Session {
    /// Reduce a loaded capture to its session-relevant entries,
    /// preserving capture order.
    pub fn from_har(har: &Har) -> Self {
        let entries: Vec<Entry> = har
            .log
            .entries
            .iter()
            .filter(|e| is_session_relevant(e))
            .cloned()
            .collect();

        tracing::info!(
            "Session holds {} of {} captured entries",
            entries.len(),
            har.log.entries.len()
        );

        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Look up one entry by its index in the filtered sequence.
    pub fn entry(&self, index: usize) -> crate::Result<&Entry> {
        self.entries
            .get(index)
            .ok_or(crate::Error::EntryNotFound(index))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the session, yielding the filtered entries.
    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }
}
