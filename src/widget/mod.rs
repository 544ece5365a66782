//! The widget seam consumed by host frameworks.
//!
//! A [`Widget`] renders itself into a [`Rendered`] value: the HTML fragment
//! plus an optional [`ClientBinding`] telling the host which client-side
//! behavior to attach to the markup. The host owns script delivery and
//! activation; this crate only declares what should happen.
use serde::Serialize;

use crate::common::Result;

/// A server-side widget that renders to an HTML fragment.
///
/// Rendering is a pure, one-shot transformation: no state survives a call,
/// and identical configuration (including an explicit root id) produces
/// identical output.
pub trait Widget {
    /// Render the widget, validating its configuration on the way.
    fn run(&self) -> Result<Rendered>;
}

/// Output of a widget render.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    /// The HTML fragment
    pub html: String,
    /// Client-side behavior to attach to the fragment, if any
    pub binding: Option<ClientBinding>,
}

/// Declarative instruction to attach a named client-side behavior to a
/// rendered element.
///
/// The host resolves `behavior` to a script (see [`crate::asset`]) and
/// initializes it on the element whose id is `target`, passing `options`
/// through as the script's configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientBinding {
    /// Behavior name, e.g. `"carousel"`
    pub behavior: String,
    /// Id of the element the behavior attaches to
    pub target: String,
    /// Options payload forwarded to the client script
    pub options: serde_json::Value,
}

impl ClientBinding {
    /// Build a binding, serializing `options` to its JSON payload.
    pub fn new<T: Serialize>(
        behavior: impl Into<String>,
        target: impl Into<String>,
        options: &T,
    ) -> Result<Self> {
        Ok(Self {
            behavior: behavior.into(),
            target: target.into(),
            options: serde_json::to_value(options)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Options {
        period: u32,
    }

    #[test]
    fn test_binding_serializes_options() {
        let binding = ClientBinding::new("carousel", "w0", &Options { period: 6000 }).unwrap();
        assert_eq!(binding.behavior, "carousel");
        assert_eq!(binding.target, "w0");
        assert_eq!(binding.options, serde_json::json!({ "period": 6000 }));
    }
}
