//! Wiring macro compile-time tests
//!
//! Tests that valid `#[injectable]` usage compiles and that rejected
//! constructors and injector accesses fail with clear messages, using
//! trybuild.

/// Test: Compile-pass cases
///
/// Tests that valid wiring code compiles successfully.
#[test]
fn test_compile_pass_cases() {
	let t = trybuild::TestCases::new();

	// Test: Basic injectable constructor
	t.pass("integration/tests/ui/pass/basic_injectable.rs");

	// Test: Assisted arguments and explicit return type
	t.pass("integration/tests/ui/pass/assisted_arguments.rs");

	// Test: Injector gets inferred from the binding site
	t.pass("integration/tests/ui/pass/typed_injector.rs");
}

/// Test: Compile-fail cases
///
/// Tests that rejected wiring code reports the expected error.
#[test]
fn test_compile_fail_cases() {
	let t = trybuild::TestCases::new();

	// Test: Getting a type the injector does not provide
	t.compile_fail("integration/tests/ui/fail/injector_not_provided.rs");

	// Test: Constructor returning another type than Self
	t.compile_fail("integration/tests/ui/fail/wrong_return_type.rs");

	// Test: Tuple argument in an injectable constructor
	t.compile_fail("integration/tests/ui/fail/tuple_argument.rs");

	// Test: Injected argument not wrapped in Arc
	t.compile_fail("integration/tests/ui/fail/non_arc_argument.rs");
}
