mod memory;
pub use memory::{ColumnState, ForeignKeyState, IndexState, MemoryConnection, TableState};

/// Routes engine debug events to the test output.
///
/// Honors `RUST_LOG`; repeated calls are fine, only the first registers.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
