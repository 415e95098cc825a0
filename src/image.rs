//! Reference Firmware Image
//!
//! The tap set, the input signal and the kernel storage the firmware runs
//! with. The kernel is process-wide, as on the target, and every access goes
//! through one lock so that loading a signal and computing over it cannot
//! interleave with another caller.
use firdsp::Boundary;
use firdsp::Filter;
use firdsp::FirFilter;
use firdsp::FirKernel;
use once_cell::sync::Lazy;
use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::runtime::Error;
use crate::runtime::config;

/// Number of taps, and length of every buffer.
pub const N: usize = 11;

/// Reference tap set.
pub const TAPS: [i32; N] = [0, -10, -9, 23, 56, 63, 56, 23, -9, -10, 0];

/// Reference input signal.
pub const SIGNAL: [i32; N] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];

/// Output of the reference signal through the reference taps, with nothing
/// before the start of the sequence.
pub const GOLDEN: [i32; N] = [0, -10, -29, -25, 35, 158, 337, 539, 732, 915, 1098];

/// Kernel type of the image.
pub type ImageKernel = FirKernel<i32, N>;

/// What lies before the history buffer of the image kernel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BoundaryKind {
    /// Nothing. Reads before the sequence contribute zero.
    #[default]
    Zero,
    /// The tap array, which precedes the history buffer in the image layout.
    Taps,
}

impl BoundaryKind {
    /// Bounds policy for the image kernel.
    pub fn boundary(self) -> Boundary<i32, N> {
        match self {
            BoundaryKind::Zero => Boundary::Zero,
            BoundaryKind::Taps => Boundary::Preceding(TAPS),
        }
    }
}

impl FromStr for BoundaryKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero" => Ok(BoundaryKind::Zero),
            "taps" => Ok(BoundaryKind::Taps),
            _ => Err(Error::UnknownBoundary(s.to_string())),
        }
    }
}

impl fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryKind::Zero => write!(f, "zero"),
            BoundaryKind::Taps => write!(f, "taps"),
        }
    }
}

#[cfg_attr(feature = "mprjram", unsafe(link_section = ".mprjram"))]
static KERNEL: Lazy<Mutex<ImageKernel>> =
    Lazy::new(|| Mutex::new(kernel(config::config().boundary)));

fn kernel(kind: BoundaryKind) -> ImageKernel {
    debug!("image kernel: {N} taps, boundary {kind}");
    FirKernel::with_boundary(TAPS, kind.boundary())
}

// a panic while holding the lock leaves the buffers in an unknown state
fn get_kernel() -> MutexGuard<'static, ImageKernel> {
    KERNEL.lock().unwrap_or_else(|poison| {
        warn!("image kernel poisoned, resetting buffers");
        let mut k = poison.into_inner();
        k.reset();
        KERNEL.clear_poison();
        k
    })
}

/// Run `f` with exclusive access to the image kernel.
pub fn with_kernel<R>(f: impl FnOnce(&mut ImageKernel) -> R) -> R {
    f(&mut get_kernel())
}

/// Rebuild the image kernel with another boundary. The signal buffer is
/// carried over.
pub fn set_boundary(kind: BoundaryKind) {
    let mut k = get_kernel();
    if k.boundary() != &kind.boundary() {
        let signal = *k.signal();
        *k = kernel(kind);
        k.load_signal(&signal);
    }
}

/// Zero the history and output buffers of the image kernel.
pub fn reset() {
    get_kernel().reset();
}

/// Populate the signal buffer of the image kernel.
pub fn load_signal(signal: &[i32; N]) {
    get_kernel().load_signal(signal);
}

/// Run the image kernel over its current signal buffer.
pub fn fir() -> [i32; N] {
    *get_kernel().compute()
}

/// Load `signal` and run the image kernel over it, under one lock.
pub fn run(signal: &[i32; N]) -> [i32; N] {
    with_kernel(|k| {
        k.load_signal(signal);
        *k.compute()
    })
}

/// Expected output of `signal` through the reference taps, computed without
/// the image kernel.
pub fn expected(signal: &[i32; N], kind: BoundaryKind) -> [i32; N] {
    match kind {
        BoundaryKind::Zero => {
            let mut out = [0; N];
            FirFilter::<i32, _>::new(&TAPS).filter(signal, &mut out);
            out
        }
        BoundaryKind::Taps => {
            let mut k = kernel(kind);
            k.load_signal(signal);
            *k.compute()
        }
    }
}

/// Convert a slice to a signal, checking its length.
pub fn signal_from(samples: &[i32]) -> Result<[i32; N], Error> {
    samples.try_into().map_err(|_| Error::SignalLength {
        expected: N,
        got: samples.len(),
    })
}

/// Parse a comma-separated signal, e.g. `"1, 2, -3, ..."`.
pub fn parse_signal(s: &str) -> Result<[i32; N], Error> {
    let samples = s
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| v.parse::<i32>().map_err(|_| Error::ParseSample(v.to_string())))
        .collect::<Result<Vec<_>, _>>()?;
    signal_from(&samples)
}
