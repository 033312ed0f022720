//! This module defines the `Tape`, the machine's storage. The tape is conceptually infinite in
//! both directions but only the visited segment is materialized.

use std::collections::{BTreeMap, VecDeque};
use std::fmt;
use std::ops::Index;

/// An extensible sequence of symbols.
///
/// Cells are addressed by their position in the materialized segment. Reading just past
/// either end materializes one blank cell on that side; after a left extension every
/// existing cell shifts one position to the right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: VecDeque<char>,
    blank: char,
}

impl Tape {
    /// Creates a tape holding one cell per character of `input`.
    pub fn new(input: &str, blank: char) -> Self {
        Self {
            cells: input.chars().collect(),
            blank,
        }
    }

    /// Returns the blank symbol of this tape.
    pub fn blank(&self) -> char {
        self.blank
    }

    /// Returns the number of materialized cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if no cell has been materialized yet.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Maps a possibly out-of-bounds `index` to a valid cell, growing the tape if needed.
    ///
    /// A negative index prepends exactly one blank cell and yields `0`. An index at or
    /// past the end appends exactly one blank cell and yields the new last position.
    /// The tape never grows by more than one cell per call, even when `index` is further
    /// out.
    pub fn index_after_extension(&mut self, index: isize) -> usize {
        if index < 0 {
            self.cells.push_front(self.blank);
            tracing::trace!(len = self.cells.len(), "extended tape to the left");
            return 0;
        }

        let index = index as usize;
        if index >= self.cells.len() {
            self.cells.push_back(self.blank);
            tracing::trace!(len = self.cells.len(), "extended tape to the right");
            return self.cells.len() - 1;
        }

        index
    }

    /// Reads the symbol at `index`, extending the tape by one blank cell if `index` is
    /// outside the materialized segment.
    pub fn read(&mut self, index: isize) -> char {
        let index = self.index_after_extension(index);
        self.cells[index]
    }

    /// Overwrites the cell at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the materialized segment. Callers obtain valid
    /// positions from [`Tape::index_after_extension`].
    pub fn write(&mut self, index: usize, symbol: char) {
        self.cells[index] = symbol;
    }

    /// Returns an iterator over the materialized cells, left to right.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.cells.iter().copied()
    }

    /// Returns every materialized cell, blanks included.
    pub fn contents(&self) -> String {
        self.cells.iter().collect()
    }

    /// Returns the tape contents with all blank cells removed.
    pub fn stripped(&self) -> String {
        self.iter().filter(|&symbol| symbol != self.blank).collect()
    }

    /// Counts how often each non-blank symbol appears on the tape.
    pub fn occurrences(&self) -> BTreeMap<char, usize> {
        let mut occurrences = BTreeMap::new();
        for symbol in self.iter().filter(|&symbol| symbol != self.blank) {
            *occurrences.entry(symbol).or_insert(0) += 1;
        }
        occurrences
    }
}

impl Index<usize> for Tape {
    type Output = char;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

impl fmt::Display for Tape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.cells {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}
