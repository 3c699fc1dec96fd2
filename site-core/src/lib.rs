//! Host-independent state for the NEXTGEN 9 brochure site.
//!
//! Everything in here is plain data plus state transitions driven by
//! explicit inputs (scroll offsets, visibility ratios, elapsed
//! milliseconds, pointer positions). The Yew frontend measures the browser
//! and feeds these types; tests drive them with a virtual clock.
//!
//! - [`sections`] / [`viewport`] - which section is active
//! - [`nav`] - hide-on-scroll navigation bar
//! - [`carousel`] - hero slide scheduler
//! - [`count_up`] - stat counters
//! - [`contact`] / [`mail`] - contact form and mail delivery payload
//! - [`config`] - tunables, loadable from JSON
//! - [`content`] - page copy

pub mod carousel;
pub mod config;
pub mod contact;
pub mod content;
pub mod count_up;
pub mod error;
pub mod mail;
pub mod nav;
pub mod sections;
pub mod viewport;

pub use config::SiteConfig;
pub use error::{
    CarouselError, ConfigError, ContactError, CountUpError, MailError, TrackerError,
    ValidationError,
};
