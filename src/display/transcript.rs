// Sequential record of render calls

use super::DisplaySink;
use std::fmt;

/// One `print` as it reached the sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderCall {
    pub row: i32,
    pub col: i32,
    pub text: String,
}

impl fmt::Display for RenderCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.row, self.col, self.text)
    }
}

/// Sink that keeps every call, in order
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    pub calls: Vec<RenderCall>,
}

impl Transcript {
    pub fn new() -> Self {
        Transcript { calls: Vec::new() }
    }

    /// Get all calls as `"row col text"` lines
    pub fn get_output(&self) -> Vec<String> {
        self.calls.iter().map(|call| call.to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}

impl DisplaySink for Transcript {
    fn render(&mut self, row: i32, col: i32, text: &str) {
        self.calls.push(RenderCall {
            row,
            col,
            text: text.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut transcript = Transcript::new();
        transcript.render(5, 5, "hi");
        transcript.render(-1, 0, "edge");

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.get_output(), vec!["5 5 hi", "-1 0 edge"]);
    }

    #[test]
    fn test_forwarding_through_reference() {
        fn emit<S: DisplaySink>(mut sink: S) {
            sink.render(1, 2, "x");
        }

        let mut transcript = Transcript::new();
        emit(&mut transcript);
        assert_eq!(
            transcript.calls,
            vec![RenderCall {
                row: 1,
                col: 2,
                text: "x".to_string()
            }]
        );
    }
}
