// file: src/parser/segments.rs
// description: splits a child process stream on carriage returns and newlines
// reference: std::io::BufRead

use std::io::{self, BufRead};

/// Reads up to and including the next `\r` or `\n`, appending to `buf`.
/// Returns the number of bytes consumed; zero means end of stream.
pub fn read_segment<R: BufRead + ?Sized>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<usize> {
    let mut total = 0;

    loop {
        let (found, used) = {
            let available = match reader.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            if available.is_empty() {
                return Ok(total);
            }

            match available.iter().position(|&b| b == b'\r' || b == b'\n') {
                Some(i) => {
                    buf.extend_from_slice(&available[..=i]);
                    (true, i + 1)
                }
                None => {
                    buf.extend_from_slice(available);
                    (false, available.len())
                }
            }
        };

        reader.consume(used);
        total += used;

        if found {
            return Ok(total);
        }
    }
}

/// Iterator over non-empty text segments. HandBrakeCLI rewrites its status
/// line with `\r`, so a plain `lines()` would only yield at exit.
pub struct Segments<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> Segments<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(256),
        }
    }
}

impl<R: BufRead> Iterator for Segments<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match read_segment(&mut self.reader, &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {
                    let text = String::from_utf8_lossy(&self.buf);
                    let text = text.trim_end_matches(['\r', '\n']);
                    if !text.is_empty() {
                        return Some(Ok(text.to_string()));
                    }
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
