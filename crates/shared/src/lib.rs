//! Tomebound wire contract.
//!
//! Types exchanged with the layers around the content engine:
//! - [`ContentEntry`]: the raw entry delivered by the query layer
//! - [`ContentResponse`]: the resolved envelope handed to renderers
//!
//! No business logic lives here; resolution is the engine's job.

pub mod entry;
pub mod response;

pub use entry::{ContentEntry, EntryError};
pub use response::ContentResponse;
