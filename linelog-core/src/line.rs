use colored::Color;

use crate::severity::Severity;

// `colored` drops escapes unless stdout is a terminal, whatever the sink
fn colored_level(severity: Severity) -> String {
    let (color, bold) = match severity {
        Severity::Trace => (Color::Magenta, false),
        Severity::Debug => (Color::Blue, false),
        Severity::Info => (Color::Green, false),
        Severity::Warn => (Color::Yellow, false),
        Severity::Error => (Color::Red, false),
        Severity::Fatal => (Color::BrightRed, true),
    };
    let weight = if bold { "1;" } else { "" };
    format!(
        "\x1b[{weight}{}m{}\x1b[0m",
        color.to_fg_str(),
        severity.as_str()
    )
}

/// Lays out one complete output line, terminator included:
/// `[<timestamp> ][<LEVEL>] <message>\n`.
pub fn format_line(
    timestamp: Option<&str>,
    severity: Severity,
    message: &str,
    color: bool,
) -> String {
    let level = if color {
        colored_level(severity)
    } else {
        severity.as_str().to_string()
    };
    match timestamp {
        Some(time) => format!("{time} [{level}] {message}\n"),
        None => format!("[{level}] {message}\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_without_timestamp() {
        assert_eq!(
            format_line(None, Severity::Info, "Hello world", false),
            "[INFO] Hello world\n"
        );
        assert_eq!(
            format_line(None, Severity::Fatal, "", false),
            "[FATAL] \n"
        );
    }

    #[test]
    fn test_line_with_timestamp() {
        assert_eq!(
            format_line(
                Some("2024-03-09 07:05:03.042"),
                Severity::Warn,
                "disk almost full",
                false
            ),
            "2024-03-09 07:05:03.042 [WARN] disk almost full\n"
        );
    }

    #[test]
    fn test_colored_line_always_has_escapes() {
        assert_eq!(
            format_line(None, Severity::Error, "boom", true),
            "[\u{1b}[31mERROR\u{1b}[0m] boom\n"
        );
        assert_eq!(
            format_line(Some("2024-03-09 07:05:03.042"), Severity::Fatal, "down", true),
            "2024-03-09 07:05:03.042 [\u{1b}[1;91mFATAL\u{1b}[0m] down\n"
        );
        for severity in Severity::ALL {
            let line = format_line(None, severity, "m", true);
            assert!(line.contains("\u{1b}["), "{line:?}");
            assert!(line.contains(severity.as_str()));
        }
    }
}
