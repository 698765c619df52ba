pub mod env;
pub mod tracing_init;

pub use env::{parse_row_threshold, AppConfig, DEFAULT_ROW_THRESHOLD, DEFAULT_TOP_N};
pub use tracing_init::init_tracing;
