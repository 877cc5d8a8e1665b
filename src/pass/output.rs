//! Password output to terminal, file, or clipboard buffer.
//!
//! Password material that passes through here is wiped once written, in
//! line buffers, writer buffers and the joined clipboard string. The copy
//! handed to the clipboard provider is owned by it and not wiped.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use zeroize::{Zeroize, Zeroizing};

use super::Password;

const BUF_CAPACITY: usize = 8 * 1024;

/// Buffered writer that zeroes its buffer after every flush and on drop.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(BUF_CAPACITY),
        }
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let result = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        result
    }

    #[cfg(test)]
    pub fn get_ref(&self) -> &W {
        &self.inner
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > BUF_CAPACITY {
            self.flush_buf()?;
        }
        // Oversized writes bypass the buffer so it never reallocates
        if data.len() >= BUF_CAPACITY {
            return self.inner.write(data);
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush_buf();
        let _ = self.inner.flush();
        self.buf.zeroize();
    }
}

/// Write one password per line. Returns how many were written.
pub fn write_lines<W, I>(out: &mut W, passwords: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = Password>,
{
    let mut line: Vec<u8> = Vec::new();
    let mut written = 0;

    for pass in passwords {
        line.extend_from_slice(pass.as_bytes());
        line.push(b'\n');
        let result = out.write_all(&line);
        line.zeroize();
        result?;
        written += 1;
    }

    out.flush()?;
    Ok(written)
}

/// Join passwords with newlines for the clipboard.
pub fn join_lines<I>(passwords: I) -> Zeroizing<String>
where
    I: IntoIterator<Item = Password>,
{
    let mut joined = Zeroizing::new(String::new());
    for pass in passwords {
        if !joined.is_empty() {
            joined.push('\n');
        }
        joined.push_str(pass.as_str());
    }
    joined
}

/// Open `path` for appending, creating missing parent directories.
pub fn open_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::OsRandom;
    use crate::pass::{ClassSet, GenerationRequest, generate_batch};

    fn batch(count: usize) -> Vec<Password> {
        let request = GenerationRequest::new(16, ClassSet::all(), false);
        let mut rng = OsRandom;
        generate_batch(&request, count, &mut rng).unwrap().collect()
    }

    #[test]
    fn writes_one_line_per_password() {
        let mut out = Vec::new();
        let written = write_lines(&mut out, batch(5)).unwrap();
        assert_eq!(written, 5);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l.len() == 16));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn joined_lines_have_no_trailing_newline() {
        // Stays wrapped so our side of the clipboard copy is wiped on drop
        let joined: Zeroizing<String> = join_lines(batch(3));
        assert_eq!(joined.lines().count(), 3);
        assert!(!joined.ends_with('\n'));
        assert_eq!(joined.len(), 3 * 16 + 2);
    }

    #[test]
    fn secure_writer_buffers_until_flush() {
        let mut writer = SecureBufWriter::new(Vec::new());
        writer.write_all(b"abc").unwrap();
        assert!(writer.get_ref().is_empty());
        writer.flush().unwrap();
        assert_eq!(writer.get_ref().as_slice(), b"abc");
        assert!(writer.buf.is_empty());
    }

    #[test]
    fn secure_writer_passes_large_writes_through() {
        let mut writer = SecureBufWriter::new(Vec::new());
        writer.write_all(b"head").unwrap();
        let big = vec![b'x'; BUF_CAPACITY * 2];
        writer.write_all(&big).unwrap();
        writer.flush().unwrap();

        let out = writer.get_ref();
        assert_eq!(out.len(), 4 + big.len());
        assert_eq!(&out[..4], b"head");
        assert!(writer.buf.capacity() <= BUF_CAPACITY);
    }

    #[test]
    fn secure_writer_flushes_on_drop() {
        let mut out = Vec::new();
        {
            let mut writer = SecureBufWriter::new(&mut out);
            writer.write_all(b"tail\n").unwrap();
        }
        assert_eq!(out, b"tail\n");
    }

    #[test]
    fn open_append_creates_parents_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/out.txt");

        {
            let mut file = open_append(&path).unwrap();
            file.write_all(b"one\n").unwrap();
        }
        {
            let mut file = open_append(&path).unwrap();
            file.write_all(b"two\n").unwrap();
        }

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }
}
