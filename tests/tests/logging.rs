//! Diagnostic events carry sizes and parameters, never secrets or messages

use dfpe::prelude::*;
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Capture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn captured<F: FnOnce()>(f: F) -> String {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(capture.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    capture.contents()
}

#[test]
fn construction_and_calls_are_traced() {
    let key = hex::decode("2B7E151628AED2A6ABF7158809CF4F3C").unwrap();
    let logs = captured(|| {
        let cipher = Ff1Cipher::new(&key, "0123456789", b"").unwrap();
        let ct = cipher.encrypt("5551234567").unwrap();
        cipher.decrypt(&ct).unwrap();
    });

    assert!(logs.contains("format-preserving cipher ready"));
    assert!(logs.contains("min_len=6"));
    assert!(logs.contains("max_len=4096"));
    assert!(logs.contains("WARN"));
    assert!(logs.contains("empty default tweak"));
    assert_eq!(logs.matches("feistel call").count(), 2);

    assert!(!logs.contains("5551234567"));
    assert!(!logs.to_uppercase().contains("2B7E1516"));
}

#[test]
fn ff3_1_tweak_is_not_logged() {
    let logs = captured(|| {
        Ff3_1Cipher::new(&[1u8; 16], "0123456789", b"SECRET7").unwrap();
    });
    assert!(logs.contains("tweak_len=7"));
    assert!(!logs.contains("SECRET7"));
    assert!(!logs.contains("WARN"));
}
