//! Line-oriented output shared between the demo driver and visit hooks.

use std::cell::RefCell;
use std::fmt::Display;
use std::io::{self, Write};
use std::rc::Rc;

use crate::error::Result;

/// A clonable handle onto one writer.
///
/// Visit hooks run inside iterator `next()` calls and cannot return errors, so
/// the first write failure is kept and every later line is dropped. It is
/// reported by [`finish`](Console::finish).
pub struct Console<W> {
    inner: Rc<RefCell<Inner<W>>>,
}

struct Inner<W> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Console {
            inner: Rc::new(RefCell::new(Inner { out, error: None })),
        }
    }

    /// Writes `text` followed by a newline.
    pub fn line(&self, text: impl Display) {
        let inner = &mut *self.inner.borrow_mut();
        if inner.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(inner.out, "{text}") {
            inner.error = Some(err);
        }
    }

    /// Flushes, then returns the first write error if there was one.
    pub fn finish(&self) -> Result<()> {
        let inner = &mut *self.inner.borrow_mut();
        if let Some(err) = inner.error.take() {
            return Err(err.into());
        }
        inner.out.flush()?;
        Ok(())
    }

    /// Runs `f` against the underlying writer.
    pub fn with_output<R>(&self, f: impl FnOnce(&W) -> R) -> R {
        f(&self.inner.borrow().out)
    }
}

impl<W> Clone for Console<W> {
    fn clone(&self) -> Self {
        Console {
            inner: Rc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn clones_write_to_the_same_buffer() {
        let console = Console::new(Vec::new());
        let hook = console.clone();
        console.line("first");
        hook.line(format_args!("second {}", 2));

        console.finish().unwrap();
        let text = console.with_output(|buf| String::from_utf8(buf.clone()).unwrap());
        assert_eq!(text, "first\nsecond 2\n");
    }

    #[test]
    fn first_write_error_is_reported_once() {
        let console = Console::new(Broken);
        console.line("lost");
        console.line("also lost");

        let err = console.finish().unwrap_err();
        assert!(matches!(err, RosterError::Output(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
        assert!(console.finish().is_ok());
    }
}
