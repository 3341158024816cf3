//! Recording catalog

use super::{MixLength, RecordingDescriptor, RecordingId};

/// Message shown when the catalog has no entries
pub const EMPTY_CATALOG_MESSAGE: &str = "No recordings yet. Start mixing and hit record!";

/// Ordered collection of recordings. Keeps insertion order; never sorts.
#[derive(Debug, Clone, Default)]
pub struct RecordingCatalog {
    entries: Vec<RecordingDescriptor>,
}

impl RecordingCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog seeded with the five built-in mixes
    pub fn seeded() -> Self {
        let entries = vec![
            RecordingDescriptor::new(
                1u32,
                "Summer House Mix 2023",
                "2023-06-15",
                MixLength::from_hms(1, 23, 45),
                "127.4 MB",
            ),
            RecordingDescriptor::new(
                2u32,
                "Deep House Session #4",
                "2023-05-22",
                MixLength::from_hms(0, 45, 12),
                "54.8 MB",
            ),
            RecordingDescriptor::new(
                3u32,
                "EDM Club Mix",
                "2023-05-10",
                MixLength::from_hms(1, 12, 30),
                "86.3 MB",
            ),
            RecordingDescriptor::new(
                4u32,
                "Chill Lofi Beats",
                "2023-04-28",
                MixLength::from_hms(0, 32, 15),
                "38.9 MB",
            ),
            RecordingDescriptor::new(
                5u32,
                "Techno Underground",
                "2023-04-15",
                MixLength::from_hms(1, 45, 20),
                "126.7 MB",
            ),
        ];
        Self { entries }
    }

    /// Build a catalog from arbitrary entries, keeping their order
    pub fn from_entries(entries: Vec<RecordingDescriptor>) -> Self {
        Self { entries }
    }

    pub fn list(&self) -> &[RecordingDescriptor] {
        &self.entries
    }

    pub fn get(&self, id: RecordingId) -> Option<&RecordingDescriptor> {
        self.entries.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: RecordingId) -> bool {
        self.get(id).is_some()
    }

    /// Remove a recording, preserving the order of the rest
    pub fn remove(&mut self, id: RecordingId) -> Option<RecordingDescriptor> {
        let index = self.entries.iter().position(|r| r.id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
