//! Tilework - server-side rendering of Metro-style HTML widgets
//!
//! This library turns typed widget configuration into HTML fragments plus a
//! declarative client-binding instruction for the host web framework. The
//! host stays responsible for delivering assets and activating client-side
//! behavior; Tilework only renders markup and declares what should be
//! attached to it.
//!
//! # Features
//!
//! - **Carousel widget**: ordered slides with optional captions and
//!   per-slide attributes, optional previous/next controls
//! - **Deterministic markup**: insertion-ordered attributes, idempotent CSS
//!   class merging, escaped attribute values
//! - **Client bindings**: slideshow parameters serialized to JSON for the
//!   host's behavior-activation layer
//! - **Asset bundles**: declarative descriptors for the scripts widgets rely
//!   on
//!
//! # Example - Rendering a carousel
//!
//! ```rust
//! use tilework::{Carousel, DetailedSlide, Widget};
//!
//! # fn main() -> tilework::Result<()> {
//! let rendered = Carousel::new()
//!     .with_slide("<img src=\"/img/one.jpg\"/>")
//!     .with_slide(
//!         DetailedSlide::new("<img src=\"/img/two.jpg\"/>")
//!             .with_caption("<h4>This is the caption</h4>"),
//!     )
//!     .with_id("gallery")
//!     .run()?;
//!
//! assert!(rendered.html.contains("data-role=\"carousel\""));
//! let binding = rendered.binding.unwrap();
//! assert_eq!(binding.behavior, "carousel");
//! assert_eq!(binding.target, "gallery");
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Config-driven construction
//!
//! Widgets deserialize from host configuration; slides are accepted both as
//! raw HTML strings and as content/caption records:
//!
//! ```rust
//! use tilework::{Carousel, Widget};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let carousel: Carousel = serde_json::from_str(
//!     r#"{
//!         "items": [
//!             "<img src=\"/img/one.jpg\"/>",
//!             {"content": "<img src=\"/img/two.jpg\"/>", "caption": "<p>Two</p>"}
//!         ],
//!         "options": {"id": "gallery"}
//!     }"#,
//! )?;
//! let rendered = carousel.run()?;
//! assert!(rendered.html.contains("<p>Two</p>"));
//! # Ok(())
//! # }
//! ```

/// Declarative asset-bundle descriptors for the client-side files widgets
/// depend on.
pub mod asset;

/// The slide carousel widget.
pub mod carousel;

/// Common types: errors and widget id generation.
pub mod common;

/// HTML rendering support: escaping, attribute maps, and tag builders.
pub mod html;

/// The widget seam consumed by host frameworks.
pub mod widget;

// Re-export commonly used types for convenience
pub use asset::{AssetBundle, TILE_DRAG_BUNDLE, WIDGET_BUNDLE};
pub use carousel::{
    Carousel, Controls, DetailedSlide, Effect, Slide, SlideConfig, SlideDirection,
    SlideshowOptions,
};
pub use common::{Error, Result};
pub use html::Attributes;
pub use widget::{ClientBinding, Rendered, Widget};
