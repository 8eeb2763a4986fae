// src/exit.rs
//! Process exit codes for `tsdocgen`.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum DocgenExit {
    /// Records written.
    Success = 0,
    /// Bad arguments, missing input, unreadable config, or a failed run.
    Error = 1,
}

impl DocgenExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for DocgenExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
