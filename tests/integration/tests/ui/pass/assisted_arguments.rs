use reinhardt_wiring::{Assisted, Inject, injectable};
use std::sync::Arc;

struct Clock;

struct Report {
	title: String,
	pages: u32,
}

#[injectable]
impl Report {
	#[inject]
	fn create(_clock: Arc<Clock>, #[assisted] title: String, #[assisted] pages: u32) -> Report {
		Report { title, pages }
	}
}

fn main() {
	let report = Report::construct((
		Arc::new(Clock),
		Assisted("quarterly".to_string()),
		Assisted(12),
	));
	assert_eq!(report.title, "quarterly");
	assert_eq!(report.pages, 12);
	assert_eq!(Report::signature().args().len(), 3);
}
