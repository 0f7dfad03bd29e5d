use crate::domain::model::{Diagnostic, DiagnosticKind};
use crate::domain::ports::DiagnosticSink;
use std::sync::Mutex;

/// Writes every diagnostic as a `tracing` warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        tracing::warn!(
            capability = diagnostic.capability,
            model = %diagnostic.model,
            kind = ?diagnostic.kind,
            "{}",
            diagnostic.message
        );
    }
}

/// Keeps diagnostics in memory so callers can inspect them after a check.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<Diagnostic>>,
    forward: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records and also forwards each diagnostic to [`TracingSink`].
    pub fn forwarding() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            forward: true,
        }
    }

    pub fn events(&self) -> Vec<Diagnostic> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn take(&self) -> Vec<Diagnostic> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    pub fn kinds(&self) -> Vec<DiagnosticKind> {
        self.events().into_iter().map(|d| d.kind).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.events().is_empty()
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        if self.forward {
            TracingSink.emit(diagnostic.clone());
        }
        match self.events.lock() {
            Ok(mut events) => events.push(diagnostic),
            Err(poisoned) => poisoned.into_inner().push(diagnostic),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(kind: DiagnosticKind) -> Diagnostic {
        Diagnostic {
            kind,
            capability: "ProducesNumber",
            model: "ConstModel".to_string(),
            message: "test".to_string(),
        }
    }

    #[test]
    fn test_recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        sink.emit(sample(DiagnosticKind::StructuralMismatch));
        sink.emit(sample(DiagnosticKind::IndeterminateSource));

        assert_eq!(
            sink.kinds(),
            vec![
                DiagnosticKind::StructuralMismatch,
                DiagnosticKind::IndeterminateSource
            ]
        );
    }

    #[test]
    fn test_take_drains_events() {
        let sink = RecordingSink::forwarding();
        sink.emit(sample(DiagnosticKind::BehavioralMismatch));

        assert_eq!(sink.take().len(), 1);
        assert!(sink.is_empty());
    }
}
