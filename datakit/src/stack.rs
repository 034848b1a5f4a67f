//! Call-stack capture.
//!
//! [`get_stack`] walks the current thread's stack with the `backtrace` crate
//! and returns symbolised frames starting at its caller. Frame detail depends
//! on the platform and on available debug information; missing pieces are
//! reported as `None` rather than failing.

use std::fmt;
use std::path::{Path, PathBuf};

use backtrace::{Backtrace, BacktraceFrame};
use serde::Serialize;

const CAPTURE_FN: &str = concat!(module_path!(), "::get_stack");

/// One entry of a captured call stack, innermost first.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct StackFrame {
    function: Option<String>,
    file: Option<PathBuf>,
    line: Option<u32>,
    column: Option<u32>,
    ip: usize,
}

impl StackFrame {
    /// Demangled function name without the symbol hash.
    #[must_use]
    pub fn function_name(&self) -> Option<&str> {
        self.function.as_deref()
    }

    /// Source file containing the frame.
    #[must_use]
    pub fn file_name(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// One-based source line.
    #[must_use]
    pub const fn line_number(&self) -> Option<u32> {
        self.line
    }

    /// One-based source column.
    #[must_use]
    pub const fn column_number(&self) -> Option<u32> {
        self.column
    }

    /// Instruction pointer of the frame.
    #[must_use]
    pub const fn instruction_pointer(&self) -> usize {
        self.ip
    }

    fn is_capture_site(&self) -> bool {
        self.function.as_deref() == Some(CAPTURE_FN)
    }
}

impl fmt::Display for StackFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.function.as_deref().unwrap_or("<anonymous>");
        let Some(file) = &self.file else {
            return write!(f, "{name} ({:#x})", self.ip);
        };
        write!(f, "{name} ({}", file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
            if let Some(column) = self.column {
                write!(f, ":{column}")?;
            }
        }
        f.write_str(")")
    }
}

/// Expand one raw frame into a descriptor per symbol; inlined calls share an
/// instruction pointer.
fn describe(frame: &BacktraceFrame) -> Vec<StackFrame> {
    let ip = frame.ip().addr();
    let symbols = frame.symbols();
    if symbols.is_empty() {
        return vec![StackFrame {
            function: None,
            file: None,
            line: None,
            column: None,
            ip,
        }];
    }
    symbols
        .iter()
        .map(|symbol| StackFrame {
            function: symbol.name().map(|name| format!("{name:#}")),
            file: symbol.filename().map(Path::to_path_buf),
            line: symbol.lineno(),
            column: symbol.colno(),
            ip,
        })
        .collect()
}

/// Capture the current call stack.
///
/// The returned frames start at the function that called `get_stack`; frames
/// of the capture machinery are dropped. When the capture frame cannot be
/// identified (for example in binaries stripped of symbols) the whole trace
/// is returned and a warning is logged.
///
/// # Examples
///
/// ```rust
/// let frames = datakit::get_stack();
/// for frame in &frames {
///     let _ = frame.to_string();
/// }
/// ```
#[inline(never)]
#[must_use]
pub fn get_stack() -> Vec<StackFrame> {
    let trace = Backtrace::new();
    let frames: Vec<StackFrame> = trace.frames().iter().flat_map(describe).collect();
    match frames.iter().position(StackFrame::is_capture_site) {
        Some(index) => frames.into_iter().skip(index + 1).collect(),
        None => {
            tracing::warn!(
                marker = CAPTURE_FN,
                frames = frames.len(),
                "capture frame not found; returning unfiltered stack"
            );
            frames
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CAPTURE_FN, StackFrame, get_stack};
    use rstest::rstest;
    use std::path::PathBuf;

    #[inline(never)]
    fn probe() -> Vec<StackFrame> {
        get_stack()
    }

    #[test]
    fn first_frame_is_the_caller() {
        let frames = probe();
        let first = frames
            .first()
            .and_then(StackFrame::function_name)
            .expect("symbolised caller frame");
        assert!(first.ends_with("tests::probe"), "unexpected first frame {first}");
    }

    #[test]
    fn capture_frames_are_dropped() {
        let frames = probe();
        assert!(
            frames
                .iter()
                .all(|frame| frame.function_name() != Some(CAPTURE_FN)),
            "capture frame leaked into the trace"
        );
        assert!(
            frames.iter().any(|frame| frame
                .function_name()
                .is_some_and(|name| name.contains("capture_frames_are_dropped"))),
            "test function missing from the trace"
        );
    }

    fn frame(file: Option<&str>, line: Option<u32>, column: Option<u32>) -> StackFrame {
        StackFrame {
            function: Some("app::run".to_owned()),
            file: file.map(PathBuf::from),
            line,
            column,
            ip: 0x2a,
        }
    }

    #[rstest]
    #[case(frame(Some("src/main.rs"), Some(12), Some(5)), "app::run (src/main.rs:12:5)")]
    #[case(frame(Some("src/main.rs"), Some(12), None), "app::run (src/main.rs:12)")]
    #[case(frame(Some("src/main.rs"), None, Some(5)), "app::run (src/main.rs)")]
    #[case(frame(None, None, None), "app::run (0x2a)")]
    fn frames_render_like_call_sites(#[case] site: StackFrame, #[case] expected: &str) {
        assert_eq!(site.to_string(), expected);
    }

    #[test]
    fn anonymous_frames_have_a_placeholder_name() {
        let anonymous = StackFrame {
            function: None,
            ..frame(None, None, None)
        };
        assert_eq!(anonymous.to_string(), "<anonymous> (0x2a)");
    }
}
