/// Interaction state for the portfolio window
///
/// This module owns the in-memory UI state:
/// - Which page section is currently in view (section.rs)
/// - Whether the image lightbox is open and on what (lightbox.rs)
/// - In-flight smooth-scroll animation (scroll.rs)
///
/// Everything here is plain data, mutated only from the update loop.

pub mod lightbox;
pub mod scroll;
pub mod section;
