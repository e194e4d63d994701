use std::io::{self, ErrorKind, Read};

use crate::config::READ_BUFFER_SIZE;

/// Count `\n` bytes in `reader`, streaming in fixed-size chunks.
///
/// A trailing segment without a newline is not counted. Interrupted reads are
/// retried; any other read error is returned as-is.
pub fn count_lines<R: Read>(mut reader: R) -> io::Result<u64> {
    let mut buf = vec![0u8; READ_BUFFER_SIZE];
    let mut lines = 0u64;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => return Ok(lines),
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        lines += bytecount::count(&buf[..n], b'\n') as u64;
    }
}

#[cfg(test)]
#[path = "counter_tests.rs"]
mod tests;
