#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))] // This is all test code, no need to test it.

//! Private helpers for testing and examples in Folo packages.

use std::fmt::Debug;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// A warning-level `tracing` event recorded by [`capture_warnings()`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CapturedWarning {
    message: String,
    fields: Vec<(String, String)>,
}

impl CapturedWarning {
    /// The message of the event.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The value of a structured field, rendered as text.
    ///
    /// Numbers are rendered in decimal, strings without quotes, everything else with `Debug`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field_name, _)| field_name == name)
            .map(|(_, value)| value.as_str())
    }
}

impl Visit for CapturedWarning {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_text(field, value.to_owned());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_text(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.record_text(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        self.record_text(field, format!("{value:?}"));
    }
}

impl CapturedWarning {
    fn record_text(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.message = value;
        } else {
            self.fields.push((field.name().to_owned(), value));
        }
    }
}

#[derive(Clone, Debug, Default)]
struct WarningRecorder {
    warnings: Arc<Mutex<Vec<CapturedWarning>>>,
}

impl<S: Subscriber> Layer<S> for WarningRecorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() != Level::WARN {
            return;
        }

        let mut warning = CapturedWarning::default();
        event.record(&mut warning);

        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(warning);
    }
}

/// Runs `f` with a `tracing` subscriber that records warning-level events emitted on the
/// current thread, returning the result of `f` together with the recorded warnings.
///
/// Events of other levels are ignored. Events emitted on other threads are not recorded.
///
/// # Example
///
/// ```rust
/// use testing::capture_warnings;
///
/// let (value, warnings) = capture_warnings(|| {
///     tracing::warn!(answer = 42, "something is off");
///     tracing::info!("this one is not recorded");
///     5
/// });
///
/// assert_eq!(value, 5);
/// assert_eq!(warnings.len(), 1);
/// assert_eq!(warnings[0].message(), "something is off");
/// assert_eq!(warnings[0].field("answer"), Some("42"));
/// ```
pub fn capture_warnings<F, R>(f: F) -> (R, Vec<CapturedWarning>)
where
    F: FnOnce() -> R,
{
    let recorder = WarningRecorder::default();
    let subscriber = tracing_subscriber::registry().with(recorder.clone());

    let result = tracing::subscriber::with_default(subscriber, f);

    let warnings = recorder
        .warnings
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();

    (result, warnings)
}
