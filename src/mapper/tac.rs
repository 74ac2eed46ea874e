use std::sync::mpsc::Sender;

use super::{RecordMapper, StreamError};
use crate::record::RecordAndContext;
use crate::trace::trace_log;

/// Emits records in reverse of the order they arrived: everything is
/// buffered until end-of-stream, then drained back to front.
#[derive(Debug, Default)]
pub struct Tac {
    buffered: Vec<RecordAndContext>,
}

impl Tac {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordMapper for Tac {
    fn map(
        &mut self,
        input: RecordAndContext,
        out: &Sender<RecordAndContext>,
    ) -> Result<(), StreamError> {
        if input.record.is_some() {
            self.buffered.push(input);
            return Ok(());
        }

        trace_log!("mapper", "tac: draining {} buffered records", self.buffered.len());
        for rc in self.buffered.drain(..).rev() {
            out.send(rc).map_err(|_| StreamError::ChannelClosed)?;
        }
        out.send(RecordAndContext::end_of_stream(input.context))
            .map_err(|_| StreamError::ChannelClosed)
    }
}
