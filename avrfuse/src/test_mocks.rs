#![cfg(test)]
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

#[derive(Default)]
struct Inner {
    data: Vec<u8>,
    flushes: usize,
}

/// In-memory sink that stays readable after the writer is consumed.
#[derive(Clone, Default)]
pub(crate) struct SharedBuf(Rc<RefCell<Inner>>);

impl SharedBuf {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().data.clone()).unwrap()
    }

    pub(crate) fn flushes(&self) -> usize {
        self.0.borrow().flushes
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().data.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.borrow_mut().flushes += 1;
        Ok(())
    }
}

/// Sink that rejects every write, like a full disk.
pub(crate) struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("no space left"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
