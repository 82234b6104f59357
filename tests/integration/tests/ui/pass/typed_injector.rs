use reinhardt_wiring::{Injector, ModuleBuilder, Scope};
use std::sync::Arc;

struct Port(u16);
struct Host(&'static str);
struct Address(String);

fn main() {
	let module = ModuleBuilder::new()
		.bind_instance(Port(8000))
		.bind_instance(Host("127.0.0.1"))
		.register_provider(Scope::Singleton, |(host, port): (Arc<Host>, Arc<Port>)| {
			Address(format!("{}:{}", host.0, port.0))
		})
		.build()
		.unwrap();
	let injector: Injector<(Address, Port, Host)> = Injector::new(module).unwrap();

	let address: Arc<Address> = injector.get().unwrap();
	let port: Arc<Port> = injector.get().unwrap();
	assert_eq!(address.0, "127.0.0.1:8000");
	assert_eq!(port.0, 8000);
}
