//! Shared test handlers.

#![allow(dead_code, unused_imports)]

use cmdtree::{Execute, Handler, HandlerError, OptionDef, Usage};
use parking_lot::Mutex;
use std::sync::Arc;

/// Every argument list a recorder was executed with.
pub type CallLog = Arc<Mutex<Vec<Vec<String>>>>;

pub fn args(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

/// Executable handler that records the args it receives.
pub struct Recorder {
    pub calls: CallLog,
    pub options: Vec<OptionDef>,
}

impl Recorder {
    pub fn new() -> (Self, CallLog) {
        let calls = CallLog::default();
        (
            Self {
                calls: calls.clone(),
                options: Vec::new(),
            },
            calls,
        )
    }
}

impl Execute for Recorder {
    fn execute(&mut self, args: &[String]) -> Result<(), HandlerError> {
        self.calls.lock().push(args.to_vec());
        Ok(())
    }
}

impl Handler for Recorder {
    fn options(&self) -> Vec<OptionDef> {
        self.options.clone()
    }

    fn as_execute(&mut self) -> Option<&mut dyn Execute> {
        Some(self)
    }
}

/// Error returned by [`Failing`].
#[derive(Debug, PartialEq, Eq)]
pub struct BoomError(pub String);

impl std::fmt::Display for BoomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "boom: {}", self.0)
    }
}

impl std::error::Error for BoomError {}

/// Executable handler that always fails.
pub struct Failing;

impl Execute for Failing {
    fn execute(&mut self, args: &[String]) -> Result<(), HandlerError> {
        Err(Box::new(BoomError(args.join(","))))
    }
}

impl Handler for Failing {
    fn as_execute(&mut self) -> Option<&mut dyn Execute> {
        Some(self)
    }
}

/// Non-executable handler declaring the given options.
pub struct Declares(pub Vec<OptionDef>);

impl Handler for Declares {
    fn options(&self) -> Vec<OptionDef> {
        self.0.clone()
    }
}

/// Non-executable handler with a custom usage line.
pub struct WithUsage(pub &'static str);

impl Usage for WithUsage {
    fn usage(&self) -> String {
        self.0.to_string()
    }
}

impl Handler for WithUsage {
    fn as_usage(&self) -> Option<&dyn Usage> {
        Some(self)
    }
}
