//! Outward notifications from the editor to its parent.

use serde::{Deserialize, Serialize};

/// An event emitted by [`super::ColumnIdentifierEditor`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditorEvent {
    NewColumnName(String),
    NewColumnLabel(String),
    IsValid(bool),
}

impl EditorEvent {
    /// Wire-style event name, as a parent would subscribe to it.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NewColumnName(_) => "newColumnName",
            Self::NewColumnLabel(_) => "newColumnLabel",
            Self::IsValid(_) => "isValid",
        }
    }
}

impl std::fmt::Display for EditorEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NewColumnName(value) | Self::NewColumnLabel(value) => {
                write!(f, "{}({value:?})", self.name())
            }
            Self::IsValid(valid) => write!(f, "{}({valid})", self.name()),
        }
    }
}

/// Receives editor events.
pub trait EditorListener {
    fn on_event(&mut self, event: EditorEvent);
}

impl<F> EditorListener for F
where
    F: FnMut(EditorEvent),
{
    fn on_event(&mut self, event: EditorEvent) {
        self(event);
    }
}

/// Forwards events over a channel so the parent can poll them.
#[derive(Clone, Debug)]
pub struct ChannelListener {
    tx: crossbeam_channel::Sender<EditorEvent>,
}

impl ChannelListener {
    pub fn channel() -> (Self, crossbeam_channel::Receiver<EditorEvent>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (Self { tx }, rx)
    }
}

impl EditorListener for ChannelListener {
    fn on_event(&mut self, event: EditorEvent) {
        if let Err(e) = self.tx.send(event) {
            log::warn!("Dropped editor event, receiver is gone: {}", e.into_inner());
        }
    }
}

/// In-memory recorder of events, drained by the parent once per frame.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<EditorEvent>,
}

impl EventLog {
    pub fn events(&self) -> &[EditorEvent] {
        &self.events
    }

    pub fn drain(&mut self) -> Vec<EditorEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn contains(&self, event: &EditorEvent) -> bool {
        self.events.contains(event)
    }

    /// All `isValid` values, in emission order.
    pub fn validity_history(&self) -> Vec<bool> {
        self.events
            .iter()
            .filter_map(|e| match e {
                EditorEvent::IsValid(valid) => Some(*valid),
                EditorEvent::NewColumnName(_) | EditorEvent::NewColumnLabel(_) => None,
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl EditorListener for EventLog {
    fn on_event(&mut self, event: EditorEvent) {
        self.events.push(event);
    }
}

/// Observer over the derived validity flag.
///
/// Emits only when the observed value differs from the last one it saw. The
/// very first observation always emits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidityWatch {
    last: Option<bool>,
}

impl ValidityWatch {
    /// Records `valid` and returns it if it should be emitted.
    pub fn observe(&mut self, valid: bool) -> Option<bool> {
        if self.last == Some(valid) {
            None
        } else {
            self.last = Some(valid);
            Some(valid)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_emits_first_then_changes_only() {
        let mut watch = ValidityWatch::default();
        assert_eq!(watch.observe(false), Some(false));
        assert_eq!(watch.observe(false), None);
        assert_eq!(watch.observe(true), Some(true));
        assert_eq!(watch.observe(true), None);
        assert_eq!(watch.observe(false), Some(false));
    }

    #[test]
    fn test_event_display() {
        assert_eq!(
            EditorEvent::NewColumnName("orders".to_owned()).to_string(),
            "newColumnName(\"orders\")"
        );
        assert_eq!(EditorEvent::IsValid(true).to_string(), "isValid(true)");
    }

    #[test]
    fn test_event_log_drain() {
        let mut log = EventLog::default();
        log.on_event(EditorEvent::IsValid(false));
        log.on_event(EditorEvent::NewColumnLabel("A".to_owned()));
        assert_eq!(log.len(), 2);
        assert_eq!(log.validity_history(), vec![false]);

        let drained = log.drain();
        assert_eq!(drained.len(), 2);
        assert!(log.is_empty());
    }

    #[test]
    fn test_channel_listener() {
        let (mut tx, rx) = ChannelListener::channel();
        tx.on_event(EditorEvent::IsValid(true));
        assert_eq!(rx.try_recv().ok(), Some(EditorEvent::IsValid(true)));
    }

    #[test]
    fn test_closure_listener() {
        let mut seen = Vec::new();
        {
            let mut listener = |e: EditorEvent| seen.push(e);
            listener.on_event(EditorEvent::IsValid(false));
        }
        assert_eq!(seen, vec![EditorEvent::IsValid(false)]);
    }
}
