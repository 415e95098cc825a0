#![warn(missing_docs)]

//! FIR kernel for a memory-mapped user-project coprocessor, together with the
//! firmware image and the testbench that drives it.
//!
//! The numeric core lives in [`firdsp`] and is `no_std`. This crate adds what
//! the host side needs:
//! * **Image**: the reference taps and signal, and a process-wide kernel
//!   instance behind a lock.
//! * **Testbench**: the checkbits protocol the firmware reports through, and
//!   verification against golden outputs.
//! * **Runtime**: configuration, logging and errors.
//!
//! ## Example
//! Run the reference image and check it against the golden output:
//! ```
//! use mprj_fir::image;
//! use mprj_fir::testbench::RecordingMailbox;
//! use mprj_fir::testbench::Testbench;
//!
//! let mut mailbox = RecordingMailbox::default();
//! Testbench::new(&mut mailbox).run(&image::SIGNAL);
//! mprj_fir::testbench::verify(mailbox.words(), &image::GOLDEN).unwrap();
//! ```

/// Logging macro
#[macro_use]
pub extern crate tracing;

// re-exports
pub use anyhow;
pub use firdsp;

pub mod image;
pub mod runtime;
pub mod testbench;

/// Prelude with the types most harness code needs.
pub mod prelude {
    pub use crate::anyhow;
    pub use crate::firdsp::prelude::*;
    pub use crate::image;
    pub use crate::runtime::Error;
    pub use crate::runtime::config;
    pub use crate::testbench::Mailbox;
    pub use crate::testbench::RecordingMailbox;
    pub use crate::testbench::Testbench;
}
