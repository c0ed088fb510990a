//! Property-based tests for tripwire using proptest

use proptest::prelude::*;
use tripwire::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]
}

fn quiet_logger(level: LogLevel) -> (Logger, BufferSink) {
    let buffer = BufferSink::new();
    let logger = Logger::builder()
        .level(level)
        .show_caller(false)
        .color_mode(ColorMode::Never)
        .output(buffer.clone())
        .build();
    (logger, buffer)
}

proptest! {
    /// Ordering of levels matches their numeric discriminants
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
        prop_assert_eq!(level1 == level2, val1 == val2);
    }

    /// Parsing accepts any casing of the level name
    #[test]
    fn test_log_level_parse_any_case(level in any_level(), use_lower in any::<bool>()) {
        let input = if use_lower {
            level.to_str().to_lowercase()
        } else {
            level.to_str().to_string()
        };
        prop_assert_eq!(input.parse::<LogLevel>().unwrap(), level);
    }

    /// An event is written exactly when its level is at or above the threshold
    #[test]
    fn test_filtering_matches_threshold(
        threshold in any_level(),
        event in prop_oneof![
            Just(LogLevel::Debug),
            Just(LogLevel::Info),
            Just(LogLevel::Warn),
            Just(LogLevel::Error),
        ],
        message in "[a-zA-Z0-9 ]{0,40}",
    ) {
        let (logger, buffer) = quiet_logger(threshold);
        logger.log(event, &message);

        if event >= threshold {
            let contents = buffer.contents();
            prop_assert_eq!(contents.matches('\n').count(), 1);
            let expected_suffix = format!("{} {}\n", event.label(), message);
            prop_assert!(contents.ends_with(&expected_suffix));
        } else {
            prop_assert!(buffer.is_empty());
        }
    }

    /// The message is written verbatim after the level column
    #[test]
    fn test_message_verbatim(message in "[^\n\r]{0,80}") {
        let (logger, buffer) = quiet_logger(LogLevel::Debug);
        logger.info(&message);

        let line = buffer.contents();
        let (_, rest) = line.split_once("] INFO  ").unwrap();
        prop_assert_eq!(rest, format!("{}\n", message));
    }

    /// Short caller paths keep at most the parent directory and file name
    #[test]
    fn test_caller_short_form(
        dirs in prop::collection::vec("[a-z]{1,8}", 0..5),
        file in "[a-z_]{1,12}\\.rs",
        line in 1u32..10_000,
    ) {
        let mut path = dirs.join("/");
        if !path.is_empty() {
            path.push('/');
        }
        path.push_str(&file);
        let leaked: &'static str = Box::leak(path.into_boxed_str());

        let short = CallerLocation::new(leaked, line).short();
        let expected = match dirs.last() {
            Some(parent) => format!("{}/{}:{}", parent, file, line),
            None => format!("{}:{}", file, line),
        };
        prop_assert_eq!(short, expected);
    }
}
