//! geofeed-view: presentation session state for the map and list views.
//!
//! The rendering widgets themselves live outside this workspace. This crate
//! models their contracts: the props they consume ([`MapProps`],
//! [`ListProps`]), the events they emit ([`ViewEvent`]) and the single
//! [`Session`] object that owns everything in between.

pub mod event;
pub mod geojson;
pub mod session;

pub use event::ViewEvent;
pub use session::{ListProps, MapProps, Session};
