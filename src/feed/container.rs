//! Feed container and the page that hosts it.
//!
//! # Invariants
//! - Entries are ordered newest first
//! - After every insertion `len() <= capacity()`; the oldest entries go first

use std::collections::{HashSet, VecDeque};

use crate::config::schema::{FEED_ELEMENT_ID, TABLE_BODY_ELEMENT_ID};
use crate::feed::render::escape_html;

/// CSS class carried by every rendered entry.
pub const ENTRY_CLASS: &str = "feed-item";

/// One rendered event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    html: String,
}

impl FeedEntry {
    pub fn new(html: String) -> Self {
        Self { html }
    }

    /// Inner HTML of the entry.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// The entry wrapped in its `feed-item` element.
    pub fn to_html(&self) -> String {
        format!("<div class=\"{}\">{}</div>", ENTRY_CLASS, self.html)
    }
}

/// Bounded, newest-first list of entries.
#[derive(Debug, Clone)]
pub struct Feed {
    entries: VecDeque<FeedEntry>,
    capacity: usize,
}

impl Feed {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Insert at the front, then evict from the back until the cap holds.
    /// Returns the number of evicted entries.
    pub fn prepend(&mut self, entry: FeedEntry) -> usize {
        self.entries.push_front(entry);
        let mut evicted = 0;
        while self.entries.len() > self.capacity {
            self.entries.pop_back();
            evicted += 1;
        }
        evicted
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Newest entry, if any.
    pub fn first(&self) -> Option<&FeedEntry> {
        self.entries.front()
    }

    /// Entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &FeedEntry> {
        self.entries.iter()
    }

    /// The whole container as HTML.
    pub fn to_html(&self) -> String {
        let mut out = format!("<div id=\"{}\">", FEED_ELEMENT_ID);
        for entry in &self.entries {
            out.push_str(&entry.to_html());
        }
        out.push_str("</div>");
        out
    }
}

/// The elements a page exposes to the client.
#[derive(Debug, Clone)]
pub struct Page {
    elements: HashSet<String>,
    feed: Option<Feed>,
}

impl Page {
    /// Build a page from the ids of the elements it contains. A feed
    /// container exists only if `activity-feed` is among them.
    pub fn new<I, S>(element_ids: I, feed_capacity: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let elements: HashSet<String> = element_ids.into_iter().map(Into::into).collect();
        let feed = elements
            .contains(FEED_ELEMENT_ID)
            .then(|| Feed::new(feed_capacity));
        Self { elements, feed }
    }

    pub fn has_element(&self, id: &str) -> bool {
        self.elements.contains(id)
    }

    /// Whether the page shows live data at all. The client stays inert otherwise.
    pub fn is_live_feed_page(&self) -> bool {
        self.has_element(FEED_ELEMENT_ID) || self.has_element(TABLE_BODY_ELEMENT_ID)
    }

    pub fn feed(&self) -> Option<&Feed> {
        self.feed.as_ref()
    }

    pub fn feed_mut(&mut self) -> Option<&mut Feed> {
        self.feed.as_mut()
    }

    /// Standalone HTML document showing the feed container.
    pub fn to_document(&self, title: &str) -> String {
        let body = self.feed.as_ref().map(Feed::to_html).unwrap_or_default();
        format!(
            "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n{}\n</body>\n</html>\n",
            escape_html(title),
            body
        )
    }
}
