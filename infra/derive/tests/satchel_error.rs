#[test]
fn satchel_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/satchel_error_pass.rs");
    t.pass("tests/ui/satchel_error_fallback.rs");
    t.pass("tests/ui/satchel_error_with_context.rs");
}
