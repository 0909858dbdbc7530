//! Logger port used by the user service.
//!
//! Messages are passed as a template with positional `{n}` placeholders plus
//! an ordered argument list, never pre-formatted. Adapters decide how to
//! render them; [`TracingLogger`] forwards to `tracing`.

use std::fmt;
use uuid::Uuid;

use crate::error::StorageError;

/// A single positional log argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogArg {
    Id(Uuid),
    Text(String),
    Millis(u64),
}

impl fmt::Display for LogArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogArg::Id(id) => write!(f, "{}", id),
            LogArg::Text(text) => f.write_str(text),
            LogArg::Millis(ms) => write!(f, "{}", ms),
        }
    }
}

impl From<Uuid> for LogArg {
    fn from(id: Uuid) -> Self {
        LogArg::Id(id)
    }
}

impl From<&str> for LogArg {
    fn from(text: &str) -> Self {
        LogArg::Text(text.to_string())
    }
}

impl From<String> for LogArg {
    fn from(text: String) -> Self {
        LogArg::Text(text)
    }
}

/// Logger port
#[cfg_attr(test, mockall::automock)]
pub trait LoggerAdapter: Send + Sync {
    fn log_information(&self, template: &str, args: &[LogArg]);

    fn log_error(&self, error: &StorageError, template: &str, args: &[LogArg]);
}

/// Substitute `{n}` placeholders with the matching argument.
///
/// Placeholders whose index has no argument are left untouched.
pub fn render_template(template: &str, args: &[LogArg]) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        rendered.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        let substituted = after_open.find('}').and_then(|close| {
            let index: usize = after_open[..close].parse().ok()?;
            let arg = args.get(index)?;
            Some((arg, close))
        });

        match substituted {
            Some((arg, close)) => {
                rendered.push_str(&arg.to_string());
                rest = &after_open[close + 1..];
            }
            None => {
                rendered.push('{');
                rest = after_open;
            }
        }
    }

    rendered.push_str(rest);
    rendered
}

/// [`LoggerAdapter`] backed by `tracing` events.
///
/// The raw template is kept as a structured field next to the rendered
/// message, so log aggregation can group by template.
#[derive(Debug, Clone, Copy)]
pub struct TracingLogger {
    category: &'static str,
}

impl TracingLogger {
    pub fn new(category: &'static str) -> Self {
        Self { category }
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new("UserService")
    }
}

impl LoggerAdapter for TracingLogger {
    fn log_information(&self, template: &str, args: &[LogArg]) {
        let message = render_template(template, args);
        tracing::info!(category = self.category, template, "{}", message);
    }

    fn log_error(&self, error: &StorageError, template: &str, args: &[LogArg]) {
        let message = render_template(template, args);
        tracing::error!(
            category = self.category,
            template,
            error = %error,
            "{}",
            message
        );
    }
}
