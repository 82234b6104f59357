use reinhardt_wiring::{Injector, ModuleBuilder};

struct Settings;
struct Clock;

fn main() {
	let module = ModuleBuilder::new().bind_instance(Settings).build().unwrap();
	let injector: Injector<(Settings,)> = Injector::new(module).unwrap();
	let _clock = injector.get::<Clock, _>();
}
