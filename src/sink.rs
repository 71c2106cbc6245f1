use std::sync::{Arc, Mutex};

use crate::filter::Visibility;
use crate::record::Record;

/// Presentation layer fed by the controller.
pub trait RenderSink {
    /// Paint the records one page added. Called once per committed page, possibly with none.
    fn on_page_appended(&mut self, records: &[Record]);

    /// Apply a full hide/show decision. Called once per query change.
    fn on_visibility_update(&mut self, visibility: &Visibility);

    /// Busy indicator: `true` when a page request starts, `false` once it resolves.
    fn on_busy_changed(&mut self, _busy: bool) {}
}

impl<S: RenderSink + ?Sized> RenderSink for Box<S> {
    fn on_page_appended(&mut self, records: &[Record]) {
        (**self).on_page_appended(records)
    }

    fn on_visibility_update(&mut self, visibility: &Visibility) {
        (**self).on_visibility_update(visibility)
    }

    fn on_busy_changed(&mut self, busy: bool) {
        (**self).on_busy_changed(busy)
    }
}

/// Renders cards as log lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl LogSink {
    pub fn new() -> Self {
        LogSink
    }
}

/// One-line text rendering of a card.
pub fn card_line(record: &Record) -> String {
    let attributes = &record.attributes;
    let mut line = format!(
        "{} [Nr: {}] {}",
        record.name,
        attributes.number.as_deref().unwrap_or("-"),
        attributes.supertype.as_deref().unwrap_or("-"),
    );
    if let Some(subtype) = &attributes.subtype {
        line.push_str(&format!(" / {}", subtype));
    }
    if let Some(rarity) = &attributes.rarity {
        line.push_str(&format!(" ({})", rarity));
    }
    line
}

impl RenderSink for LogSink {
    fn on_page_appended(&mut self, records: &[Record]) {
        if records.is_empty() {
            tracing::info!("page appended no cards");
        }
        for record in records {
            tracing::info!(id = %record.id, "{}", card_line(record));
        }
    }

    fn on_visibility_update(&mut self, visibility: &Visibility) {
        if visibility.all_hidden {
            tracing::info!("no cards match the search");
        } else {
            tracing::info!(hidden = visibility.hidden_count(), "visibility updated");
        }
    }

    fn on_busy_changed(&mut self, busy: bool) {
        tracing::debug!(busy, "loader toggled");
    }
}

/// A call observed by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    PageAppended(Vec<Record>),
    VisibilityUpdated(Visibility),
    BusyChanged(bool),
}

/// Buffers every sink call for later inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    buffer: Arc<Mutex<Vec<SinkEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_buffer(buffer: Arc<Mutex<Vec<SinkEvent>>>) -> Self {
        Self { buffer }
    }

    pub fn events(&self) -> Vec<SinkEvent> {
        self.buffer
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Record batches passed to `on_page_appended`, in call order.
    pub fn appended_pages(&self) -> Vec<Vec<Record>> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                SinkEvent::PageAppended(records) => Some(records),
                _ => None,
            })
            .collect()
    }

    pub fn last_visibility(&self) -> Option<Visibility> {
        self.events().into_iter().rev().find_map(|event| match event {
            SinkEvent::VisibilityUpdated(visibility) => Some(visibility),
            _ => None,
        })
    }

    fn push(&self, event: SinkEvent) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(event);
        }
    }
}

impl RenderSink for RecordingSink {
    fn on_page_appended(&mut self, records: &[Record]) {
        self.push(SinkEvent::PageAppended(records.to_vec()));
    }

    fn on_visibility_update(&mut self, visibility: &Visibility) {
        self.push(SinkEvent::VisibilityUpdated(visibility.clone()));
    }

    fn on_busy_changed(&mut self, busy: bool) {
        self.push(SinkEvent::BusyChanged(busy));
    }
}
