//! Form logic for the fraud prediction page.
//!
//! Everything in this crate is plain Rust with no browser types, so the whole
//! submit pipeline runs under native tests: [`validate::validate`] turns form
//! text into a request payload, [`response::interpret_reply`] maps the HTTP
//! exchange onto an outcome, and [`view::ScoreView`] plus [`chart`] shape
//! that outcome for display.

pub mod chart;
pub mod error;
pub mod response;
pub mod sample;
pub mod testing;
pub mod validate;
pub mod view;

pub use error::{Result, SubmitError, ValidationError};
