//! Log record handed from the logger to a handler

use super::attr::{collect_attrs, Arg, Attr};
use super::caller::CallSite;
use super::severity::Severity;
use chrono::{DateTime, Local};

#[derive(Debug, Clone)]
pub struct Record {
    pub time: DateTime<Local>,
    pub level: Severity,
    pub message: String,
    pub attrs: Vec<Attr>,
    pub call_site: CallSite,
}

impl Record {
    /// Sanitize the message so one record always renders as one line
    ///
    /// Newlines, carriage returns and tabs become escape sequences, which also
    /// stops a message from forging extra log lines.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: Severity, message: impl Into<String>, call_site: CallSite) -> Self {
        let message = message.into();
        Self {
            time: Local::now(),
            level,
            message: Self::sanitize_message(&message),
            attrs: Vec::new(),
            call_site,
        }
    }

    pub fn with_args(mut self, args: &[Arg]) -> Self {
        self.attrs.extend(collect_attrs(args));
        self
    }

    pub fn with_attrs(mut self, attrs: impl IntoIterator<Item = Attr>) -> Self {
        self.attrs.extend(attrs);
        self
    }

    pub fn with_time(mut self, time: DateTime<Local>) -> Self {
        self.time = time;
        self
    }
}
