//! Playback selection

use super::recording::RecordingId;

/// Outcome of a playback toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// `id` became the selected recording; `replaced` was selected before it
    Started {
        id: RecordingId,
        replaced: Option<RecordingId>,
    },
    /// `id` was selected and has been cleared
    Stopped { id: RecordingId },
}

/// At most one recording is selected for playback at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaybackSelection {
    selected: Option<RecordingId>,
}

impl PlaybackSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<RecordingId> {
        self.selected
    }

    pub fn is_playing(&self, id: RecordingId) -> bool {
        self.selected == Some(id)
    }

    /// Clear the selection if `id` is selected, otherwise select `id`
    pub fn toggle(&mut self, id: RecordingId) -> PlaybackEvent {
        if self.is_playing(id) {
            self.selected = None;
            PlaybackEvent::Stopped { id }
        } else {
            let replaced = self.selected.replace(id);
            PlaybackEvent::Started { id, replaced }
        }
    }

    /// Clear the selection if it points at `id`. Returns whether it did.
    pub fn clear_if(&mut self, id: RecordingId) -> bool {
        if self.is_playing(id) {
            self.selected = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_selects_then_clears() {
        let mut playback = PlaybackSelection::new();
        let id = RecordingId::new(1);

        assert_eq!(
            playback.toggle(id),
            PlaybackEvent::Started { id, replaced: None }
        );
        assert_eq!(playback.selected(), Some(id));

        assert_eq!(playback.toggle(id), PlaybackEvent::Stopped { id });
        assert_eq!(playback.selected(), None);
    }

    #[test]
    fn selecting_another_replaces() {
        let mut playback = PlaybackSelection::new();
        let first = RecordingId::new(1);
        let second = RecordingId::new(4);

        playback.toggle(first);
        let event = playback.toggle(second);

        assert_eq!(
            event,
            PlaybackEvent::Started {
                id: second,
                replaced: Some(first)
            }
        );
        assert!(playback.is_playing(second));
        assert!(!playback.is_playing(first));
    }

    #[test]
    fn clear_if_only_matches_selected() {
        let mut playback = PlaybackSelection::new();
        playback.toggle(RecordingId::new(2));

        assert!(!playback.clear_if(RecordingId::new(3)));
        assert_eq!(playback.selected(), Some(RecordingId::new(2)));
        assert!(playback.clear_if(RecordingId::new(2)));
        assert_eq!(playback.selected(), None);
    }
}
