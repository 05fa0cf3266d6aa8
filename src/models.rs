//! Boundary data contracts mirrored from the platform's API schema.
//!
//! These types reproduce the external wire shapes faithfully; they are not a place for
//! redesign. Serialization follows the platform's conventions: camelCase member names,
//! `type`-tagged polymorphic unions, and optional members omitted when absent.

pub mod action;
pub mod audience;
pub mod bot;
pub mod insight;
pub mod message;
pub mod narrowcast;
pub mod richmenu;

pub use action::*;
pub use audience::*;
pub use bot::*;
pub use insight::*;
pub use message::*;
pub use narrowcast::*;
pub use richmenu::*;
