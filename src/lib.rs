//! This crate provides a local store for calendar events and todo items.
//!
//! Every item (a dated event, a dated task or a task without any date) is an [`Appointment`], kept in an
//! [`AppointmentStore`](store::AppointmentStore) together with its [`Properties`] (completed / has a date / is an event).
//! The store is persisted to a single JSON file after every change.
//!
//! The todo list is a projection of this store: it contains the appointments that are not events. It is computed on
//! demand, and mirrored into a second file by the [`todo`] module.
//!
//! UI code is expected to go through a [`Coordinator`], that validates requests and keeps both files consistent. \
//! Changes can be observed by subscribing to the [`change`] channel.

pub mod traits;

pub mod error;
pub use error::{Error, Result, ValidationError};
pub mod item;
pub use item::{ItemId, Properties};
pub mod color;
pub use color::{Background, Palette};
mod appointment;
pub use appointment::Appointment;
pub mod record;
pub mod change;
pub use change::Change;

pub mod store;
pub mod todo;
pub use todo::{TodoFilter, TodoItem};
pub mod coordinator;
pub use coordinator::Coordinator;

pub mod config;
pub mod utils;
