//! Env-driven diagnostics. `RILLET_TRACE=1` enables every phase;
//! `RILLET_TRACE=mapper,infer` enables a comma-separated subset.

use std::collections::HashSet;
use std::sync::OnceLock;

enum Filter {
    Off,
    All,
    Phases(HashSet<String>),
}

static FILTER: OnceLock<Filter> = OnceLock::new();

pub fn is_enabled(phase: &str) -> bool {
    match FILTER.get_or_init(read_env) {
        Filter::Off => false,
        Filter::All => true,
        Filter::Phases(phases) => phases.contains(phase),
    }
}

fn read_env() -> Filter {
    match std::env::var("RILLET_TRACE") {
        Err(_) => Filter::Off,
        Ok(v) if v.is_empty() || v == "0" => Filter::Off,
        Ok(v) if v == "1" => Filter::All,
        Ok(v) => Filter::Phases(v.split(',').map(str::to_string).collect()),
    }
}

macro_rules! trace_log {
    ($phase:expr, $($arg:tt)*) => {
        if $crate::trace::is_enabled($phase) {
            eprintln!("[{}] {}", $phase, format!($($arg)*));
        }
    };
}
pub(crate) use trace_log;
