//! Leptos UI components for the conference page.
//!
//! Every component here is stateless: plain values in, view out. The
//! static renderer composes them through [`PageDocument`]; the browser
//! shell mounts the same components and re-renders the two stateful
//! spots (header backdrop, session sections) when its signals change.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! ├── Header            (backdrop flag from the scroll state)
//! ├── MainVisual
//! ├── NewsSection
//! ├── AboutSection
//! ├── SessionSections   (query lifecycle gate)
//! │   ├── ContentSection
//! │   │   └── ContentCard
//! │   │       └── ContentCardSpeaker
//! │   └── TimetableSection
//! ├── AccessSection
//! └── Footer
//! ```

mod about;
mod access;
mod content_card;
mod document;
mod footer;
mod header;
mod icons;
mod main_visual;
mod news;
mod sessions;
mod timetable;

pub use about::AboutSection;
pub use access::AccessSection;
pub use content_card::{ContentCard, ContentCardSpeaker, ContentSection};
pub use document::PageDocument;
pub use footer::Footer;
pub use header::Header;
pub use icons::*;
pub use main_visual::MainVisual;
pub use news::NewsSection;
pub use sessions::SessionSections;
pub use timetable::TimetableSection;
