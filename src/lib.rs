//! Core of a tabular-record stream processor: a polymorphic scalar value
//! algebra dispatched through dense per-operator disposition tables, plus
//! the streaming-mapper boundary the algebra is embedded into.
//!
//! The algebra is pure: operator kernels take read-only operands and
//! return fresh values, so evaluation is safe from any number of threads.
//! Type mismatches, missing fields, and empty fields travel in-band as the
//! Error/Absent/Void values rather than as host-language errors, and no
//! operator pairing can abort the process — integer division by zero, for
//! example, yields an IEEE infinity.

pub mod mapper;
pub mod ops;
pub mod record;
mod trace;
pub mod value;

pub use mapper::{RecordMapper, StreamError, Tac};
pub use record::{Context, Record, RecordAndContext};
pub use value::{TYPE_DIM, Value, ValueType};
