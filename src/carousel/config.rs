//! Configuration types for the carousel widget.
//!
//! Slides come in two shapes, mirroring the loosely-typed configuration the
//! widget historically accepted: a raw HTML string, or a record carrying
//! content plus optional caption and container attributes. The record shape
//! without content is a configuration error, surfaced when converting a
//! [`SlideConfig`] into a [`Slide`].
use std::fmt;

use serde::de::{SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::common::{Error, Result};
use crate::html::Attributes;

/// A single carousel item.
///
/// Deserializes from either form:
///
/// ```rust
/// use tilework::Slide;
///
/// let raw: Slide = serde_json::from_str("\"<img src=\\\"/a.jpg\\\"/>\"").unwrap();
/// let detailed: Slide =
///     serde_json::from_str("{\"content\": \"<img src=\\\"/b.jpg\\\"/>\"}").unwrap();
/// assert!(matches!(raw, Slide::Raw(_)));
/// assert!(matches!(detailed, Slide::Detailed(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Slide {
    /// Raw HTML content with no caption and no extra attributes
    Raw(String),
    /// Content with optional caption and container attributes
    Detailed(DetailedSlide),
}

/// The record form of a slide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedSlide {
    /// Slide content (HTML), such as an image tag
    pub content: String,
    /// Optional caption (HTML), rendered below the content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// HTML attributes of the slide container
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub options: Attributes,
}

impl DetailedSlide {
    /// Create a slide from its content.
    #[inline]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            caption: None,
            options: Attributes::new(),
        }
    }

    /// Set the caption.
    #[inline]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Set the container attributes.
    #[inline]
    pub fn with_options(mut self, options: Attributes) -> Self {
        self.options = options;
        self
    }
}

impl From<&str> for Slide {
    fn from(content: &str) -> Self {
        Slide::Raw(content.to_string())
    }
}

impl From<String> for Slide {
    fn from(content: String) -> Self {
        Slide::Raw(content)
    }
}

impl From<DetailedSlide> for Slide {
    fn from(detail: DetailedSlide) -> Self {
        Slide::Detailed(detail)
    }
}

/// Loosely-typed slide record as accepted from host configuration, where
/// every field is optional. Converting into a [`Slide`] enforces that
/// content is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideConfig {
    /// Slide content (HTML); required for the conversion to succeed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Optional caption (HTML)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// HTML attributes of the slide container
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub options: Attributes,
}

impl TryFrom<SlideConfig> for Slide {
    type Error = Error;

    fn try_from(config: SlideConfig) -> Result<Self> {
        let Some(content) = config.content else {
            return Err(Error::configuration("content is required"));
        };
        Ok(Slide::Detailed(DetailedSlide {
            content,
            caption: config.caption,
            options: config.options,
        }))
    }
}

/// Labels for the previous and next control buttons.
///
/// Defaults to the `&lsaquo;` / `&rsaquo;` glyph entities. [`Hidden`] means
/// the control buttons are not displayed at all. Label arity is validated at
/// render time: anything but exactly two labels is a configuration error.
///
/// [`Hidden`]: Controls::Hidden
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Controls {
    /// Do not render previous/next controls
    Hidden,
    /// Raw HTML labels for the previous and next controls
    Labels(Vec<String>),
}

impl Controls {
    /// Controls with a previous and a next label.
    pub fn pair(previous: impl Into<String>, next: impl Into<String>) -> Self {
        Controls::Labels(vec![previous.into(), next.into()])
    }
}

impl Default for Controls {
    fn default() -> Self {
        Controls::pair("&lsaquo;", "&rsaquo;")
    }
}

impl Serialize for Controls {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Controls::Hidden => serializer.serialize_bool(false),
            Controls::Labels(labels) => labels.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Controls {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        struct ControlsVisitor;

        impl<'de> Visitor<'de> for ControlsVisitor {
            type Value = Controls;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("`false` or an array of control labels")
            }

            fn visit_bool<E: serde::de::Error>(
                self,
                hidden: bool,
            ) -> std::result::Result<Self::Value, E> {
                if hidden {
                    return Err(E::custom(
                        "controls must be false or a two-element array",
                    ));
                }
                Ok(Controls::Hidden)
            }

            fn visit_seq<A: SeqAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut labels = Vec::with_capacity(access.size_hint().unwrap_or(2));
                while let Some(label) = access.next_element::<String>()? {
                    labels.push(label);
                }
                Ok(Controls::Labels(labels))
            }
        }

        deserializer.deserialize_any(ControlsVisitor)
    }
}

/// Client-side slideshow parameters.
///
/// These mirror the knobs understood by the client script and travel in the
/// widget's [`ClientBinding`] payload; they do not affect the rendered
/// markup.
///
/// [`ClientBinding`]: crate::widget::ClientBinding
///
/// # Examples
///
/// ```rust
/// use tilework::{Effect, SlideshowOptions};
///
/// let options = SlideshowOptions::new()
///     .with_period(4000)
///     .with_effect(Effect::Fade)
///     .with_markers(false);
/// assert_eq!(options.period, 4000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideshowOptions {
    /// Start sliding automatically
    pub auto: bool,
    /// Slide change period in milliseconds
    pub period: u32,
    /// Effect duration in milliseconds
    pub duration: u32,
    /// Animation effect
    pub effect: Effect,
    /// Animation direction
    pub direction: SlideDirection,
    /// Show slide markers
    pub markers: bool,
    /// Show slide arrows
    pub arrows: bool,
    /// Stop the animation on mouse over
    pub stop: bool,
}

impl Default for SlideshowOptions {
    fn default() -> Self {
        Self {
            auto: true,
            period: 6000,
            duration: 1000,
            effect: Effect::Slide,
            direction: SlideDirection::Left,
            markers: true,
            arrows: true,
            stop: true,
        }
    }
}

impl SlideshowOptions {
    /// Create options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether sliding starts automatically.
    #[inline]
    pub fn with_auto(mut self, auto: bool) -> Self {
        self.auto = auto;
        self
    }

    /// Set the slide change period in milliseconds.
    #[inline]
    pub fn with_period(mut self, period: u32) -> Self {
        self.period = period;
        self
    }

    /// Set the effect duration in milliseconds.
    #[inline]
    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = duration;
        self
    }

    /// Set the animation effect.
    #[inline]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = effect;
        self
    }

    /// Set the animation direction.
    #[inline]
    pub fn with_direction(mut self, direction: SlideDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Set whether slide markers are shown.
    #[inline]
    pub fn with_markers(mut self, markers: bool) -> Self {
        self.markers = markers;
        self
    }

    /// Set whether slide arrows are shown.
    #[inline]
    pub fn with_arrows(mut self, arrows: bool) -> Self {
        self.arrows = arrows;
        self
    }

    /// Set whether the animation stops on mouse over.
    #[inline]
    pub fn with_stop(mut self, stop: bool) -> Self {
        self.stop = stop;
        self
    }
}

/// Slide animation effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    /// Slide the next item in
    Slide,
    /// Cross-fade between items
    Fade,
    /// Slide with deceleration
    Slowdown,
    /// Switch without animation
    Switch,
}

/// Slide animation directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideDirection {
    /// Slide leftwards
    Left,
    /// Slide rightwards
    Right,
}
