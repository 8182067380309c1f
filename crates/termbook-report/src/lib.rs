//! termbook-report — HTML rendering for termbook.
//!
//! Turns core results into self-contained HTML pages and manages the
//! directory of rendered pages.

pub mod html;
pub mod site;

pub use site::RenderedSite;
