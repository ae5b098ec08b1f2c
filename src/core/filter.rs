use crate::core::rule::{is_triggered, rewrite_line};
use crate::domain::model::FilterStats;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// Streams lines from a reader to a writer, truncating woff2 lines.
///
/// Each line is read together with its terminator, so untouched lines are
/// copied byte for byte (`\r\n` included) and a missing final newline stays
/// missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFilter;

impl LineFilter {
    pub fn new() -> Self {
        Self
    }

    pub fn filter<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        mut writer: W,
    ) -> Result<FilterStats> {
        let mut stats = FilterStats::default();
        let mut line = String::new();

        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                break;
            }
            stats.lines_read += 1;

            if is_triggered(&line) {
                let rewritten = rewrite_line(&line);
                tracing::debug!("Line {}: truncated to {:?}", stats.lines_read, rewritten);
                writer.write_all(rewritten.as_bytes())?;
                stats.lines_rewritten += 1;
            } else {
                writer.write_all(line.as_bytes())?;
                stats.lines_copied += 1;
            }
            stats.lines_written += 1;
        }

        writer.flush()?;
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::FilterError;
    use std::io::{self, Cursor};

    fn run(input: &str) -> (String, FilterStats) {
        let mut out = Vec::new();
        let stats = LineFilter::new()
            .filter(Cursor::new(input.as_bytes()), &mut out)
            .unwrap();
        (String::from_utf8(out).unwrap(), stats)
    }

    #[test]
    fn test_empty_input_produces_empty_output() {
        let (out, stats) = run("");
        assert!(out.is_empty());
        assert_eq!(stats, FilterStats::default());
    }

    #[test]
    fn test_without_woff2_output_is_identical() {
        let input = "@font-face {\r\n  font-family: KaTeX_AMS;\n  src: url(a.ttf), url(a.woff);\n}";
        let (out, stats) = run(input);
        assert_eq!(out, input);
        assert_eq!(stats.lines_read, 4);
        assert_eq!(stats.lines_copied, 4);
        assert_eq!(stats.lines_rewritten, 0);
    }

    #[test]
    fn test_mixed_stylesheet() {
        let input = concat!(
            "@font-face{font-family:KaTeX_AMS;\n",
            "src:url(fonts/KaTeX_AMS-Regular.woff2) format(\"woff2\"),url(fonts/KaTeX_AMS-Regular.woff) format(\"woff\");\n",
            "font-style:normal}\n",
        );
        let (out, stats) = run(input);
        assert_eq!(
            out,
            concat!(
                "@font-face{font-family:KaTeX_AMS;\n",
                "src:url(fonts/KaTeX_AMS-Regular.woff2) format(\"woff2\");",
                "font-style:normal}\n",
            )
        );
        assert_eq!(stats.lines_read, 3);
        assert_eq!(stats.lines_written, 3);
        assert_eq!(stats.lines_rewritten, 1);
        assert_eq!(stats.lines_copied, 2);
    }

    #[test]
    fn test_invalid_utf8_is_an_io_error() {
        let input: &[u8] = b"ok\n\xff\xfe woff2\n";
        let mut out = Vec::new();
        let err = LineFilter::new().filter(input, &mut out).unwrap_err();
        match err {
            FilterError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::InvalidData),
            other => panic!("unexpected error: {other:?}"),
        }
        // 先前的行已寫出
        assert_eq!(out, b"ok\n");
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_aborts() {
        let err = LineFilter::new()
            .filter(Cursor::new("a\nb\n"), FailingWriter)
            .unwrap_err();
        assert!(matches!(err, FilterError::Io(_)));
    }
}
