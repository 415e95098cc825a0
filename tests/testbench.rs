use mprj_fir::image;
use mprj_fir::runtime::Error;
use mprj_fir::testbench;
use mprj_fir::testbench::END_MARK;
use mprj_fir::testbench::Mailbox;
use mprj_fir::testbench::RecordingMailbox;
use mprj_fir::testbench::START_MARK;
use mprj_fir::testbench::Testbench;

#[test]
fn reference_run_passes() {
    let mut tb = Testbench::new(RecordingMailbox::default());
    let out = tb.run(&image::SIGNAL);
    assert_eq!(out, image::GOLDEN);

    let words = tb.into_inner();
    let words = words.words();
    assert_eq!(words.len(), image::N + 2);
    assert_eq!(words[0], START_MARK);
    assert_eq!(words[image::N + 1], END_MARK);
    assert_eq!(testbench::verify(words, &image::GOLDEN), Ok(1));
}

#[test]
fn repeated_runs() {
    let mut tb = Testbench::new(RecordingMailbox::default()).iterations(4);
    tb.run(&image::SIGNAL);
    assert_eq!(testbench::verify(tb.mailbox().words(), &image::GOLDEN), Ok(4));
}

#[test]
fn no_iterations() {
    let mut tb = Testbench::new(RecordingMailbox::default()).iterations(0);
    assert_eq!(tb.run(&image::SIGNAL), [0; image::N]);
    assert!(tb.mailbox().words().is_empty());
}

#[test]
fn wrong_golden_is_reported() {
    let mut tb = Testbench::new(RecordingMailbox::default());
    tb.run(&image::SIGNAL);

    let mut golden = image::GOLDEN;
    golden[7] += 1;
    assert_eq!(
        testbench::verify(tb.mailbox().words(), &golden),
        Err(Error::Mismatch {
            index: 7,
            expected: 540,
            got: 539
        })
    );
}

struct Counter(usize);

impl Mailbox for Counter {
    fn write(&mut self, _word: u32) {
        self.0 += 1;
    }
}

#[test]
fn custom_mailbox() {
    let mut tb = Testbench::new(Counter(0)).iterations(3);
    tb.run(&image::SIGNAL);
    assert_eq!(tb.mailbox().0, 3 * (image::N + 2));
}
