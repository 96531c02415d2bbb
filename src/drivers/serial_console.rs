use ufmt::{uWrite, uwrite};

/// Line-oriented logger over any `uWrite` sink.
///
/// Write errors are dropped: the console is diagnostics only and the display
/// keeps running without it.
pub struct SerialConsole<W> {
    out: W,
}

impl<W: uWrite> SerialConsole<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn write_str(&mut self, s: &str) {
        self.out.write_str(s).ok();
    }

    pub fn write_line(&mut self, s: &str) {
        self.write_str(s);
        self.write_str("\r\n");
    }

    /// `[TAG] msg`
    pub fn info(&mut self, tag: &str, msg: &str) {
        uwrite!(self.out, "[{}] {}\r\n", tag, msg).ok();
    }

    // Print formatted debug info
    pub fn debug(&mut self, msg: &str, val: u16) {
        uwrite!(self.out, "[DBG] {}: {}\r\n", msg, val).ok();
    }

    /// Direct access for `uwrite!` with custom formats
    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn release(self) -> W {
        self.out
    }
}
