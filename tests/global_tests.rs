//! Tests for the process-wide default logger
//!
//! Kept in a single test so nothing else in this binary races on the shared
//! instance.

use tripwire::prelude::*;

#[test]
fn test_default_logger_functions_and_macros() {
    let logger = default_logger();
    assert_eq!(logger.level(), LogLevel::Info);
    assert!(logger.show_caller());

    let buffer = BufferSink::new();
    tripwire::global::set_output(buffer.clone());
    tripwire::global::set_color_mode(ColorMode::Never);

    tripwire::global::debug("filtered by default");
    tripwire::global::info("plain function");
    let info_line = line!() - 1;
    tripwire::warn!("macro {} with {}", "call", "args");
    let warn_line = line!() - 1;

    let lines = buffer.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(&format!(
        "INFO  (tests/global_tests.rs:{}) plain function",
        info_line
    )));
    assert!(lines[1].ends_with(&format!(
        "WARN  (tests/global_tests.rs:{}) macro call with args",
        warn_line
    )));

    buffer.clear();
    tripwire::global::set_level(LogLevel::Debug);
    tripwire::global::set_show_caller(false);
    tripwire::debug!("now visible");
    tripwire::global::log(LogLevel::Error, format_args!("code {}", 7));
    assert_eq!(buffer.lines().len(), 2);
    assert!(buffer.lines()[0].ends_with("DEBUG now visible"));
    assert!(buffer.lines()[1].ends_with("ERROR code 7"));

    buffer.clear();
    let result = std::panic::catch_unwind(|| {
        tripwire::check(Err::<(), _>("connection refused"), "dialing upstream")
    });
    assert!(result.is_err());
    assert!(buffer
        .contents()
        .ends_with("ERROR dialing upstream: connection refused\n"));
}
