//! Property-based tests for flg using proptest

use flg::format::{join, join_line};
use flg::prelude::*;
use proptest::prelude::*;

fn captured(prefix: &str, time_format: &str) -> (Logger, MemorySink) {
    let sink = MemorySink::new();
    let logger = Logger::builder()
        .sink(sink.clone())
        .prefix(prefix)
        .time_format(time_format)
        .build();
    (logger, sink)
}

// ============================================================================
// Line Layout
// ============================================================================

proptest! {
    /// Without timestamp or prefix the sink receives the message bytes unchanged
    #[test]
    fn test_bare_message_is_exact(message in ".*") {
        let (logger, sink) = captured("", "");
        logger.write(&message).unwrap();
        prop_assert_eq!(sink.contents(), message.as_bytes().to_vec());
    }

    /// Prefix and message are concatenated with nothing in between
    #[test]
    fn test_prefix_then_message(prefix in ".*", message in ".*") {
        let (logger, sink) = captured(&prefix, "");
        logger.write(&message).unwrap();
        prop_assert_eq!(sink.contents_string(), format!("{}{}", prefix, message));
    }

    /// A literal-only time format renders verbatim, followed by exactly one space
    #[test]
    fn test_timestamp_separator(stamp in "[A-Za-z0-9:/-]{1,16}", message in "[^\n]*") {
        let (logger, sink) = captured("", &stamp);
        logger.write(&message).unwrap();
        prop_assert_eq!(sink.contents_string(), format!("{} {}", stamp, message));
    }

    /// Each write appends exactly one record, in call order on a single thread
    #[test]
    fn test_records_concatenate(messages in prop::collection::vec("[a-z]{0,8}", 0..20)) {
        let (logger, sink) = captured(">", "");
        for message in &messages {
            logger.write(message).unwrap();
        }
        let expected: String = messages.iter().map(|m| format!(">{}", m)).collect();
        prop_assert_eq!(sink.contents_string(), expected);
    }
}

// ============================================================================
// Rendering
// ============================================================================

proptest! {
    /// Joined values are separated by exactly one space
    #[test]
    fn test_join_separators(words in prop::collection::vec("[a-z]{1,6}", 1..10)) {
        let values: Vec<&dyn std::fmt::Display> =
            words.iter().map(|w| w as &dyn std::fmt::Display).collect();
        prop_assert_eq!(join(&values), words.join(" "));
        prop_assert_eq!(join_line(&values), format!("{}\n", words.join(" ")));
    }

    /// The line-terminated format variant always ends with exactly the newline it needs
    #[test]
    fn test_println_terminates_once(message in "[^\n]*", terminated in any::<bool>()) {
        let (logger, sink) = captured("", "");
        let input = if terminated { format!("{}\n", message) } else { message.clone() };
        logger.println(format_args!("{}", input)).unwrap();
        prop_assert_eq!(sink.contents_string(), format!("{}\n", message));
    }
}
