//! The streaming mapper boundary.
//!
//! A mapper is fed one [`RecordAndContext`] at a time by the driving
//! pipeline, ending with the end-of-stream marker (`record: None`), and
//! emits zero or more outputs per input on its channel. A mapper that
//! buffers must flush on the marker and then forward a marker of its own,
//! carrying the last context it saw.

use std::sync::mpsc::Sender;

use thiserror::Error;

use crate::record::RecordAndContext;

mod tac;

pub use tac::Tac;

/// Failure surfaced by a mapper when the stream around it has gone away.
/// Mappers never panic; a closed output channel is the pipeline's way of
/// cancelling them.
#[derive(Debug, Error)]
pub enum StreamError {
    #[error("output channel closed")]
    ChannelClosed,
}

/// A record-stream transformer. Instances are driven single-threaded;
/// state lives in the implementor.
pub trait RecordMapper {
    fn map(
        &mut self,
        input: RecordAndContext,
        out: &Sender<RecordAndContext>,
    ) -> Result<(), StreamError>;
}
