//! Profile card: renders a three-field profile record into a view tree.

pub mod app;
pub mod card;
pub mod config;
pub mod error;
pub mod profile;
pub mod theme;
pub mod ui;
pub mod view;

pub use card::ProfileCard;
pub use error::ProfileError;
pub use profile::{FieldValue, Profile};
pub use view::{Tag, ViewNode};
