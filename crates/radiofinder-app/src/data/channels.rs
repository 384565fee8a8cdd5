//! Saved channel list
//!
//! User favorites as (name, url) pairs, persisted as a flat section-based
//! text file:
//!
//! ```text
//! [Radio One]
//! url=http://stream.example/one
//! ```

use std::fmt;
use std::path::Path;

use tracing::warn;

use crate::config::files::CHANNELS_FILE;
use crate::data::storage;
use crate::data::types::ChannelListEntry;
use crate::error::{AppError, Result};

/// Ordered list of saved channels, unique by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelList {
    entries: Vec<ChannelListEntry>,
    /// Whether there are unsaved changes
    dirty: bool,
}

impl ChannelList {
    /// Create a new empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the section/key text format.
    ///
    /// Blank lines and `#`/`;` comments are skipped, keys other than `url`
    /// are ignored, a section without `url` is dropped, and a repeated
    /// section name replaces the earlier entry.
    pub fn parse(content: &str) -> Self {
        let mut list = Self::new();
        let mut section: Option<(String, Option<String>)> = None;

        for (lineno, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(name) = section_header(line) {
                list.flush_section(section.take());
                section = Some((name.to_string(), None));
                continue;
            }

            let Some((key, value)) = split_key_value(line) else {
                warn!(line = lineno + 1, "ignoring malformed channel line");
                continue;
            };

            match section.as_mut() {
                Some((_, url)) if key.eq_ignore_ascii_case("url") => {
                    *url = Some(value.to_string());
                }
                Some(_) => {}
                None => warn!(line = lineno + 1, "key outside of any channel section"),
            }
        }
        list.flush_section(section);

        list.dirty = false;
        list
    }

    fn flush_section(&mut self, section: Option<(String, Option<String>)>) {
        match section {
            Some((name, Some(url))) => {
                if let Some(existing) = self.entries.iter_mut().find(|e| e.name == name) {
                    warn!(%name, "duplicate channel section, keeping the last one");
                    existing.url = url;
                } else {
                    self.entries.push(ChannelListEntry::new(name, url));
                }
            }
            Some((name, None)) => warn!(%name, "channel section without url, skipped"),
            None => {}
        }
    }

    /// Render to the section/key text format
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("[{}]\nurl={}\n", e.name, e.url))
            .collect()
    }

    /// Load from the default storage location
    pub fn load() -> Result<Self> {
        let path = storage::data_path(CHANNELS_FILE)?;
        Self::load_from(&path)
    }

    /// Load from a specific path. A missing file is an empty list.
    pub fn load_from(path: &Path) -> Result<Self> {
        Ok(storage::read_text(path)?
            .map(|content| Self::parse(&content))
            .unwrap_or_default())
    }

    /// Save to the default storage location
    pub fn save(&mut self) -> Result<()> {
        let path = storage::data_path(CHANNELS_FILE)?;
        self.save_to(&path)
    }

    /// Save to a specific path
    pub fn save_to(&mut self, path: &Path) -> Result<()> {
        storage::write_text(path, &self.render())?;
        self.dirty = false;
        Ok(())
    }

    /// Check if there are unsaved changes
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Append a channel. Names are unique.
    pub fn add(&mut self, entry: ChannelListEntry) -> Result<()> {
        if entry.name.trim().is_empty() {
            return Err(AppError::configuration("channel name must not be empty"));
        }
        if self.contains(&entry.name) {
            return Err(AppError::Duplicate(format!(
                "a channel named '{}' is already saved",
                entry.name
            )));
        }
        self.entries.push(entry);
        self.dirty = true;
        Ok(())
    }

    /// Remove a channel by name
    pub fn remove(&mut self, name: &str) -> Result<ChannelListEntry> {
        let index = self
            .entries
            .iter()
            .position(|e| e.name == name)
            .ok_or_else(|| AppError::NotFound(format!("no channel named '{}'", name)))?;
        self.dirty = true;
        Ok(self.entries.remove(index))
    }

    pub fn get(&self, name: &str) -> Option<&ChannelListEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Channels whose name contains `query`, ignoring case
    pub fn filter(&self, query: &str) -> Vec<&ChannelListEntry> {
        let query = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.name.to_lowercase().contains(&query))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChannelListEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for ChannelList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// `[name]` → `name`, up to the last `]`
fn section_header(line: &str) -> Option<&str> {
    let inner = line.strip_prefix('[')?;
    let end = inner.rfind(']')?;
    let name = inner[..end].trim();
    (!name.is_empty()).then_some(name)
}

/// Split at whichever of `=` or `:` comes first
fn split_key_value(line: &str) -> Option<(&str, &str)> {
    let pos = line.find(['=', ':'])?;
    Some((line[..pos].trim(), line[pos + 1..].trim()))
}
