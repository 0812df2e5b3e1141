//! Output plumbing shared by the binary

use derive_new::new;
use minus::Pager;
use std::io::{self, Write};

/// Routes repository output into a `minus` pager
///
/// The pager only accepts text, so non UTF-8 writes are rejected with
/// `InvalidData`. Output is buffered by the pager until `minus::page_all`.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(text).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
