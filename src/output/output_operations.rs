//! Output Operations - Pure DOP Functions

use super::output_data::SharedLineWriter;
use crate::error::GreeterResult;
use parking_lot::Mutex;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn create_line_writer<W: Write + Send>(writer: W) -> SharedLineWriter<W> {
    SharedLineWriter {
        inner: Mutex::new(writer),
        lines_written: AtomicUsize::new(0),
    }
}

/// Write `line` plus a newline as one critical section, then flush
pub fn write_line<W: Write + Send>(sink: &SharedLineWriter<W>, line: &str) -> GreeterResult<()> {
    let mut buf = String::with_capacity(line.len() + 1);
    buf.push_str(line);
    buf.push('\n');

    let mut writer = sink.inner.lock();
    writer.write_all(buf.as_bytes())?;
    writer.flush()?;
    sink.lines_written.fetch_add(1, Ordering::Relaxed);
    Ok(())
}

pub fn lines_written<W: Write + Send>(sink: &SharedLineWriter<W>) -> usize {
    sink.lines_written.load(Ordering::Relaxed)
}

pub fn into_inner<W: Write + Send>(sink: SharedLineWriter<W>) -> W {
    sink.inner.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    /// Writes one byte per call to make torn lines likely if locking is broken
    struct ByteAtATime(Vec<u8>);

    impl Write for ByteAtATime {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            match buf.first() {
                Some(&b) => {
                    self.0.push(b);
                    thread::yield_now();
                    Ok(1)
                }
                None => Ok(0),
            }
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_line_appends_newline() {
        let sink = create_line_writer(Vec::new());
        write_line(&sink, "first").expect("write");
        write_line(&sink, "second").expect("write");

        assert_eq!(lines_written(&sink), 2);
        assert_eq!(into_inner(sink), b"first\nsecond\n");
    }

    #[test]
    fn test_concurrent_lines_are_not_torn() {
        let sink = create_line_writer(ByteAtATime(Vec::new()));
        let writers = 8;
        let per_writer = 25;

        thread::scope(|s| {
            for w in 0..writers {
                let sink = &sink;
                s.spawn(move || {
                    for n in 0..per_writer {
                        write_line(sink, &format!("writer {} line {}", w, n)).expect("write");
                    }
                });
            }
        });

        assert_eq!(lines_written(&sink), writers * per_writer);

        let output = String::from_utf8(into_inner(sink).0).expect("utf8");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), writers * per_writer);
        for line in lines {
            let parts: Vec<&str> = line.split(' ').collect();
            assert_eq!(parts.len(), 4, "torn line: {:?}", line);
            assert_eq!(parts[0], "writer");
            assert_eq!(parts[2], "line");
        }
    }

    #[test]
    fn test_write_failure_is_reported() {
        let sink = create_line_writer(Broken);
        let err = write_line(&sink, "lost").unwrap_err();
        assert!(matches!(err, crate::error::GreeterError::Output { .. }));
        assert_eq!(lines_written(&sink), 0);
    }
}
