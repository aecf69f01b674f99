use std::fmt::{Display, Write};

/// Positional placeholder substituted by the next argument.
pub const PLACEHOLDER: &str = "{}";

/// Substitutes each `{}` of `template`, left to right, with the next argument.
///
/// Extra arguments are dropped. When the arguments run out, the rest of the
/// template is copied verbatim, so unmatched `{}` stay in the output as is.
pub fn format_message(template: &str, args: &[&dyn Display]) -> String {
    let mut message = String::with_capacity(template.len());
    let mut rest = template;
    for arg in args {
        let Some(pos) = rest.find(PLACEHOLDER) else {
            break;
        };
        message.push_str(&rest[..pos]);
        // a failing Display impl keeps whatever it managed to write
        let _ = write!(message, "{arg}");
        rest = &rest[pos + PLACEHOLDER.len()..];
    }
    message.push_str(rest);
    message
}
