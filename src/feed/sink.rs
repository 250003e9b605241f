//! Output surfaces notified after each feed update.

use std::io::Write;
use std::path::PathBuf;

use tokio::sync::mpsc;

use crate::feed::container::{FeedEntry, Page};

/// Receives every entry the client adds to the feed.
pub trait FeedSink: Send {
    fn entry_added(&mut self, entry: &FeedEntry, page: &Page);
}

/// Prints each new entry on its own line.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl FeedSink for StdoutSink {
    fn entry_added(&mut self, entry: &FeedEntry, _page: &Page) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", entry.to_html()) {
            tracing::warn!(error = %e, "Failed to write entry to stdout");
        }
    }
}

/// Rewrites an HTML document with the whole feed after every update.
#[derive(Debug)]
pub struct SnapshotSink {
    path: PathBuf,
}

impl SnapshotSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FeedSink for SnapshotSink {
    fn entry_added(&mut self, _entry: &FeedEntry, page: &Page) {
        let document = page.to_document("Live feed");
        if let Err(e) = self.replace(&document) {
            tracing::warn!(path = ?self.path, error = %e, "Failed to write feed snapshot");
        }
    }
}

impl SnapshotSink {
    /// Sibling file the document is staged in before the rename.
    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Write to the staging file, then rename it over the target so readers
    /// only ever see a complete document.
    fn replace(&self, document: &str) -> std::io::Result<()> {
        let staging = self.staging_path();
        std::fs::write(&staging, document)?;
        std::fs::rename(&staging, &self.path)
    }
}

/// Forwards entries to a channel, for embedding the client in another task.
#[derive(Debug)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<FeedEntry>,
}

impl ChannelSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<FeedEntry>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl FeedSink for ChannelSink {
    fn entry_added(&mut self, entry: &FeedEntry, _page: &Page) {
        // Receiver gone means nobody is listening any more.
        let _ = self.tx.send(entry.clone());
    }
}
