//! Carousel widget rendering.
use serde::{Deserialize, Serialize};

use crate::common::{Error, Result, id};
use crate::html::{self, Attributes};
use crate::widget::{ClientBinding, Rendered, Widget};

use super::config::{Controls, Slide, SlideshowOptions};

/// Name of the client-side behavior bound to the rendered root element.
pub const BEHAVIOR: &str = "carousel";

/// A slide carousel widget.
///
/// Renders an ordered sequence of [`Slide`]s into a Metro-style carousel
/// fragment with optional previous/next controls, and declares the
/// `"carousel"` client behavior for the host to attach.
///
/// # Examples
///
/// ```rust
/// use tilework::{Carousel, DetailedSlide, Widget};
///
/// let rendered = Carousel::new()
///     .with_slide("<img src=\"/img/one.jpg\"/>")
///     .with_slide(
///         DetailedSlide::new("<img src=\"/img/two.jpg\"/>")
///             .with_caption("<h4>Two</h4>"),
///     )
///     .with_id("gallery")
///     .run()?;
/// assert!(rendered.html.starts_with(
///     "<div id=\"gallery\" data-role=\"carousel\" class=\"carousel\">"
/// ));
/// # Ok::<(), tilework::Error>(())
/// ```
///
/// Widgets also deserialize from host configuration, with slides accepted in
/// both their string and record forms:
///
/// ```rust
/// use tilework::{Carousel, Widget};
///
/// let carousel: Carousel = serde_json::from_str(
///     r#"{
///         "items": ["<img src=\"/a.jpg\"/>", {"content": "<img src=\"/b.jpg\"/>"}],
///         "controls": false,
///         "options": {"id": "gallery"}
///     }"#,
/// )?;
/// let rendered = carousel.run().unwrap();
/// assert!(!rendered.html.contains("control left"));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Carousel {
    /// Ordered list of slides
    items: Vec<Slide>,
    /// Previous/next control labels, or [`Controls::Hidden`]
    controls: Controls,
    /// HTML attributes of the root element
    options: Attributes,
    /// Client-side slideshow parameters
    slideshow: SlideshowOptions,
}

impl Carousel {
    /// Create an empty carousel with default controls.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a slide.
    #[inline]
    pub fn with_slide(mut self, slide: impl Into<Slide>) -> Self {
        self.items.push(slide.into());
        self
    }

    /// Append several slides, preserving their order.
    #[inline]
    pub fn with_slides<I, S>(mut self, slides: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Slide>,
    {
        self.items.extend(slides.into_iter().map(Into::into));
        self
    }

    /// Set the previous/next controls.
    #[inline]
    pub fn with_controls(mut self, controls: Controls) -> Self {
        self.controls = controls;
        self
    }

    /// Set one root element attribute.
    #[inline]
    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.set(name, value);
        self
    }

    /// Replace the root element attributes.
    #[inline]
    pub fn with_options(mut self, options: Attributes) -> Self {
        self.options = options;
        self
    }

    /// Set the root element id.
    #[inline]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.options.set("id", id);
        self
    }

    /// Set the client-side slideshow parameters.
    #[inline]
    pub fn with_slideshow(mut self, slideshow: SlideshowOptions) -> Self {
        self.slideshow = slideshow;
        self
    }

    /// Root attributes as they appear on the rendered element: the caller's
    /// attributes plus `data-role="carousel"`, the `carousel` CSS class, and
    /// an id (auto-generated when the caller supplied none).
    pub fn finalized_options(&self) -> Attributes {
        let mut options = self.options.clone();
        options.set("data-role", "carousel");
        options.add_class("carousel");
        if !options.contains("id") {
            options.set("id", id::next_widget_id());
        }
        options
    }

    /// Render all slides, newline-joined inside the `slides` container.
    ///
    /// Output order matches item order exactly; an empty item list renders an
    /// empty container.
    pub fn render_items(&self) -> Result<String> {
        let mut body = String::new();
        for (index, slide) in self.items.iter().enumerate() {
            if index > 0 {
                body.push('\n');
            }
            body.push_str(&Self::render_item(slide, index)?);
        }
        let mut container = Attributes::new();
        container.set("class", "slides");
        Ok(html::tag("div", &body, &container))
    }

    /// Render a single slide.
    ///
    /// The item index is positional only and not reflected in the markup; in
    /// particular, no slide is marked active.
    pub fn render_item(slide: &Slide, _index: usize) -> Result<String> {
        let (content, caption, mut options) = match slide {
            Slide::Raw(content) => (content.as_str(), None, Attributes::new()),
            Slide::Detailed(detail) => {
                let caption = detail.caption.as_deref().map(|caption| {
                    let mut attrs = Attributes::new();
                    attrs.set("class", "description");
                    html::tag("div", caption, &attrs)
                });
                (detail.content.as_str(), caption, detail.options.clone())
            }
        };
        options.add_class("slide image");

        let caption = caption.unwrap_or_default();
        let mut body = String::with_capacity(content.len() + caption.len() + 1);
        body.push_str(content);
        body.push('\n');
        body.push_str(&caption);
        Ok(html::tag("div", &body, &options))
    }

    /// Render the previous and next control buttons.
    ///
    /// Both controls carry `id="#<root-id>"`, the selector-shaped value the
    /// client script resolves its target carousel by.
    pub fn render_controls(&self, root_id: &str) -> Result<String> {
        match &self.controls {
            Controls::Labels(labels) if labels.len() == 2 => {
                let mut reference = String::with_capacity(root_id.len() + 1);
                reference.push('#');
                reference.push_str(root_id);

                let mut previous = Attributes::new();
                previous.set("class", "control left");
                previous.set("id", reference.as_str());
                let mut next = Attributes::new();
                next.set("class", "control right");
                next.set("id", reference);

                let mut rendered = html::tag("span", &labels[0], &previous);
                rendered.push('\n');
                rendered.push_str(&html::tag("span", &labels[1], &next));
                Ok(rendered)
            }
            Controls::Hidden => Ok(String::new()),
            Controls::Labels(_) => Err(Error::configuration(
                "controls must be false or a two-element array",
            )),
        }
    }
}

impl Widget for Carousel {
    fn run(&self) -> Result<Rendered> {
        let options = self.finalized_options();
        let root_id = options.get("id").unwrap_or_default().to_string();

        let mut fragment = html::begin_tag("div", &options);
        fragment.push('\n');
        fragment.push_str(&self.render_items()?);
        fragment.push('\n');
        fragment.push_str(&self.render_controls(&root_id)?);
        fragment.push('\n');
        fragment.push_str(&html::end_tag("div"));
        fragment.push('\n');

        let binding = ClientBinding::new(BEHAVIOR, root_id, &self.slideshow)?;
        Ok(Rendered {
            html: fragment,
            binding: Some(binding),
        })
    }
}
