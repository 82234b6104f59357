#![allow(dead_code)]

use reinhardt_wiring::injectable;
use std::sync::Arc;

struct Settings;
struct Cache;

struct Service;

#[injectable]
impl Service {
	#[inject]
	fn new(_settings: Arc<Settings>) -> Cache {
		Cache
	}
}

fn main() {}
