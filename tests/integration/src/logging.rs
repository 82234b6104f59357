//! Captures tracing events emitted while a closure runs

use std::sync::{Arc, Mutex};
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

/// A tracing layer that captures log messages to a Vec<String>
struct LogCapture {
	logs: Arc<Mutex<Vec<String>>>,
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for LogCapture {
	fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
		struct MessageVisitor {
			message: String,
		}

		impl tracing::field::Visit for MessageVisitor {
			fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
				if field.name() == "message" {
					self.message = format!("{:?}", value);
				}
			}
		}

		let mut visitor = MessageVisitor {
			message: String::new(),
		};
		event.record(&mut visitor);

		self.logs.lock().unwrap().push(format!(
			"[{}] {}",
			event.metadata().level(),
			visitor.message
		));
	}
}

/// Runs `f` with a thread-local subscriber and returns its result together
/// with every captured event, formatted as `[LEVEL] message`.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, Vec<String>) {
	let logs = Arc::new(Mutex::new(Vec::new()));
	let capture = LogCapture {
		logs: Arc::clone(&logs),
	};

	let result = {
		let _guard = tracing_subscriber::registry().with(capture).set_default();
		f()
	};

	let captured = logs.lock().unwrap().clone();
	(result, captured)
}
