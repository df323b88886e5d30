/// Routes `tracing` output of the crate into the test harness' captured output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .without_time()
        .compact()
        .try_init();
}
