#![allow(dead_code)]

use reinhardt_wiring::injectable;
use std::sync::Arc;

struct Clock;
struct Database;

struct Service;

#[injectable]
impl Service {
	#[inject]
	fn new(_deps: (Arc<Clock>, Arc<Database>)) -> Self {
		Service
	}
}

fn main() {}
