// Character grid written by `print` and drawn by the UI

use super::DisplaySink;
use crate::interpreter::constants::SCREEN_SIZE;
use rustc_hash::FxHashMap;

/// Sparse square character grid. Rows grow on demand up to `size`; unwritten
/// cells are blank.
#[derive(Debug, Clone)]
pub struct ScreenBuffer {
    rows: FxHashMap<usize, Vec<char>>,
    size: usize,
    height: usize,
    width: usize,
}

impl ScreenBuffer {
    pub fn new() -> Self {
        Self::with_size(SCREEN_SIZE)
    }

    /// Grid of `size` rows by `size` columns
    pub fn with_size(size: usize) -> Self {
        ScreenBuffer {
            rows: FxHashMap::default(),
            size,
            height: 0,
            width: 0,
        }
    }

    /// Write `text` starting at (row, col), overwriting what was there.
    ///
    /// Characters that would land outside the grid are dropped; a row
    /// outside it drops the whole write.
    pub fn write(&mut self, row: i32, col: i32, text: &str) {
        let row = match usize::try_from(row) {
            Ok(row) if row < self.size => row,
            _ => return,
        };

        let visible: Vec<(usize, char)> = text
            .chars()
            .enumerate()
            .filter_map(|(offset, ch)| {
                let col = usize::try_from(i64::from(col) + offset as i64).ok()?;
                (col < self.size).then_some((col, ch))
            })
            .collect();
        let Some(&(last, _)) = visible.last() else {
            return;
        };

        let cells = self.rows.entry(row).or_default();
        if cells.len() <= last {
            cells.resize(last + 1, ' ');
        }
        for (col, ch) in visible {
            cells[col] = ch;
        }

        self.height = self.height.max(row + 1);
        self.width = self.width.max(cells.len());
    }

    /// Text of one row with trailing blanks trimmed
    pub fn line(&self, row: usize) -> String {
        self.rows
            .get(&row)
            .map(|cells| cells.iter().collect::<String>().trim_end().to_string())
            .unwrap_or_default()
    }

    /// All rows from 0 up to the lowest one written
    pub fn lines(&self) -> Vec<String> {
        (0..self.height).map(|row| self.line(row)).collect()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        self.rows.get(&row).and_then(|cells| cells.get(col)).copied()
    }

    /// Rows (and columns) the grid can hold
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.height == 0
    }
}

impl Default for ScreenBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySink for ScreenBuffer {
    fn render(&mut self, row: i32, col: i32, text: &str) {
        self.write(row, col, text);
    }
}
