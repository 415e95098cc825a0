//! Firmware Testbench
//!
//! The firmware reports through a single 32-bit checkbits register. A run
//! of the kernel is framed as
//!
//! ```text
//! START_MARK, out[0] << 16, out[1] << 16, ..., out[N - 1] << 16, END_MARK
//! ```
//!
//! and only the upper half-word carries data, so a monitor sees the low 16
//! bits of every output sample.
use crate::image;
use crate::image::N;
use crate::runtime::Error;

/// Written before the outputs of a kernel run.
pub const START_MARK: u32 = 0xAB40_0000;
/// Written after the outputs of a kernel run.
pub const END_MARK: u32 = 0xAB51_0000;

/// Checkbits register the firmware writes to.
pub trait Mailbox {
    /// Write one word.
    fn write(&mut self, word: u32);
}

impl<M: Mailbox + ?Sized> Mailbox for &mut M {
    fn write(&mut self, word: u32) {
        (**self).write(word);
    }
}

/// Mailbox that keeps every word written.
#[derive(Debug, Clone, Default)]
pub struct RecordingMailbox {
    words: Vec<u32>,
}

impl RecordingMailbox {
    /// All words written so far.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Forget the recorded words.
    pub fn clear(&mut self) {
        self.words.clear();
    }
}

impl Mailbox for RecordingMailbox {
    fn write(&mut self, word: u32) {
        self.words.push(word);
    }
}

/// Checkbits word for an output sample.
pub fn encode(sample: i32) -> u32 {
    (sample as u32) << 16
}

/// Output sample carried by a checkbits word.
pub fn decode(word: u32) -> i16 {
    (word >> 16) as u16 as i16
}

/// Drives the image kernel and reports its outputs through a [`Mailbox`].
pub struct Testbench<M> {
    mailbox: M,
    iterations: usize,
}

impl<M: Mailbox> Testbench<M> {
    /// Testbench running the kernel once per [`run`](Self::run).
    pub fn new(mailbox: M) -> Self {
        Self {
            mailbox,
            iterations: 1,
        }
    }

    /// Number of kernel invocations per run.
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Run the image kernel over `signal`, writing one frame per iteration.
    ///
    /// Returns the outputs of the last iteration, or zeros if there was none.
    pub fn run(&mut self, signal: &[i32; N]) -> [i32; N] {
        let mut output = [0; N];
        for iteration in 0..self.iterations {
            self.mailbox.write(START_MARK);
            output = image::run(signal);
            for sample in output {
                self.mailbox.write(encode(sample));
            }
            self.mailbox.write(END_MARK);
            debug!("testbench: iteration {iteration} done");
        }
        info!("testbench: {} frames written", self.iterations);
        output
    }

    /// The mailbox.
    pub fn mailbox(&self) -> &M {
        &self.mailbox
    }

    /// Consume the testbench, returning the mailbox.
    pub fn into_inner(self) -> M {
        self.mailbox
    }
}

/// Check a recorded word stream against the expected outputs.
///
/// The stream must consist of one or more complete frames. Returns the
/// number of frames checked.
pub fn verify(words: &[u32], expected: &[i32]) -> Result<usize, Error> {
    let n = expected.len();
    let mut rest = words;
    let mut frames = 0;

    loop {
        match rest.split_first() {
            Some((&START_MARK, body)) => {
                if body.get(n) != Some(&END_MARK) {
                    return Err(match body.iter().position(|w| *w == END_MARK) {
                        Some(got) => Error::OutputCount { expected: n, got },
                        None => Error::MissingEndMark,
                    });
                }

                for (index, (word, want)) in body.iter().zip(expected).enumerate() {
                    let (got, want) = (decode(*word), *want as i16);
                    if got != want {
                        return Err(Error::Mismatch {
                            index,
                            expected: want,
                            got,
                        });
                    }
                }

                rest = &body[n + 1..];
                frames += 1;
                if rest.is_empty() {
                    return Ok(frames);
                }
            }
            _ => return Err(Error::MissingStartMark),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(samples: &[i32]) -> Vec<u32> {
        let mut words = vec![START_MARK];
        words.extend(samples.iter().map(|s| encode(*s)));
        words.push(END_MARK);
        words
    }

    #[test]
    fn encode_decode() {
        assert_eq!(encode(1098), 0x044A_0000);
        assert_eq!(decode(encode(-29)), -29);
        assert_eq!(decode(encode(70000)), 70000i32 as i16);
    }

    #[test]
    fn verify_frames() {
        let mut words = frame(&[1, -2, 3]);
        assert_eq!(verify(&words, &[1, -2, 3]), Ok(1));
        words.extend(frame(&[1, -2, 3]));
        assert_eq!(verify(&words, &[1, -2, 3]), Ok(2));
    }

    #[test]
    fn verify_errors() {
        assert_eq!(verify(&[], &[1]), Err(Error::MissingStartMark));
        assert_eq!(
            verify(&frame(&[1, 5, 3]), &[1, 2, 3]),
            Err(Error::Mismatch {
                index: 1,
                expected: 2,
                got: 5
            })
        );
        assert_eq!(
            verify(&frame(&[1, 2]), &[1, 2, 3]),
            Err(Error::OutputCount {
                expected: 3,
                got: 2
            })
        );
        assert_eq!(
            verify(&[START_MARK, encode(1)], &[1]),
            Err(Error::MissingEndMark)
        );

        let mut words = frame(&[1]);
        words.push(encode(1));
        assert_eq!(verify(&words, &[1]), Err(Error::MissingStartMark));
    }

    #[test]
    fn mailbox_by_reference() {
        let mut mailbox = RecordingMailbox::default();
        {
            let mut tb = Testbench::new(&mut mailbox).iterations(2);
            let out = tb.run(&image::SIGNAL);
            assert_eq!(out, image::GOLDEN);
        }
        assert_eq!(mailbox.words().len(), 2 * (N + 2));
        assert_eq!(verify(mailbox.words(), &image::GOLDEN), Ok(2));
    }
}
