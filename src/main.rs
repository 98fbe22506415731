//! Configure the root logger and emit one sample message per level.

use basic_logging::demo::{demo_config, emit_samples};
use basic_logging::Result;

fn main() -> Result<()> {
    basic_logging::basic_config(demo_config())?;

    emit_samples(&basic_logging::root());

    basic_logging::shutdown()
}
