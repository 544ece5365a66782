//! Slide carousel widget.
//!
//! A carousel renders an ordered sequence of slides (raw HTML snippets or
//! content/caption records) into a Metro-style fragment:
//!
//! ```text
//! <div id="gallery" data-role="carousel" class="carousel">
//! <div class="slides">…one div per slide…</div>
//! <span class="control left" id="#gallery">&lsaquo;</span>
//! <span class="control right" id="#gallery">&rsaquo;</span>
//! </div>
//! ```
//!
//! The widget also declares the `"carousel"` client behavior together with
//! its [`SlideshowOptions`] payload; the host attaches the behavior when it
//! delivers the page.

// Module declarations
mod config;
mod widget;

// Re-export public API
pub use config::{
    Controls, DetailedSlide, Effect, Slide, SlideConfig, SlideDirection, SlideshowOptions,
};
pub use widget::{BEHAVIOR, Carousel};
