use std::sync::LazyLock;

use regex::Regex;

pub mod field;
pub mod relay;
pub mod submission;
pub mod validation;

/// Element id of the form root.
pub const FORM_ELEMENT_ID: &str = "contact-form";

/// Element id of the submit button.
pub const SUBMIT_ELEMENT_ID: &str = "sendBtn";

/// Element id of the shared status message.
pub const STATUS_ELEMENT_ID: &str = "status-message";

/// Loose email pattern: a run without whitespace or `@`, an `@`, another such
/// run, a `.` and a trailing run. Anything stricter is left to the relay.
pub static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
