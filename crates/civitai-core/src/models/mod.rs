//! Domain records returned by the Civitai client.
//!
//! Records are plain values built by [`crate::normalize`]; none of them hold
//! references back to the client or to each other beyond the numeric ids the
//! API provides.

mod creator;
mod enums;
mod image;
mod model;
mod model_version;
mod page;
mod tag;

pub use creator::*;
pub use enums::*;
pub use image::*;
pub use model::*;
pub use model_version::*;
pub use page::*;
pub use tag::*;
