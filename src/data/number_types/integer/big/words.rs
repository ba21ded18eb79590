//! # Word storage
//!
//! Growable little-endian sequence of words that stays inline for small magnitudes.
use std::ops::{Index, IndexMut};
use std::slice;

use smallvec::SmallVec;

use crate::data::number_types::integer::big::{STARTING_WORD_SIZE, Word};

/// Words of a magnitude, least significant first.
///
/// Up to `STARTING_WORD_SIZE` words live inline, longer sequences grow geometrically on the heap.
/// Which backing is active is not observable through this interface.
///
/// The physical length can exceed the significant length: leading (high) zero words may be kept
/// around for reuse. Anything that depends on the value should go through `trimmed`.
#[derive(Clone, Debug, Default)]
pub struct Words {
    data: SmallVec<[Word; STARTING_WORD_SIZE]>,
}

impl Words {
    /// Empty storage.
    pub fn new() -> Self {
        Self { data: SmallVec::new() }
    }

    /// Storage of `len` zero words.
    pub fn with_len(len: usize) -> Self {
        Self { data: SmallVec::from_elem(0, len) }
    }

    pub fn from_slice(words: &[Word]) -> Self {
        Self { data: SmallVec::from_slice(words) }
    }

    /// Physical amount of words.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Amount of words without the insignificant high zero words.
    pub fn trimmed_len(&self) -> usize {
        self.data.iter().rposition(|&word| word != 0).map_or(0, |index| index + 1)
    }

    /// The significant words.
    ///
    /// The last word, if any, is not zero.
    pub fn trimmed(&self) -> &[Word] {
        &self.data[..self.trimmed_len()]
    }

    /// Drop the insignificant high zero words from the storage.
    pub fn trim(&mut self) {
        let len = self.trimmed_len();
        self.data.truncate(len);
    }

    pub fn as_slice(&self) -> &[Word] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [Word] {
        &mut self.data
    }

    /// Word at `index`, or zero when past the end.
    pub fn get(&self, index: usize) -> Word {
        self.data.get(index).copied().unwrap_or(0)
    }

    /// Grow (with zero words) or shrink to `len` words.
    pub fn resize(&mut self, len: usize) {
        self.data.resize(len, 0);
    }

    pub fn push(&mut self, word: Word) {
        self.data.push(word);
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn iter(&self) -> slice::Iter<'_, Word> {
        self.data.iter()
    }

    /// Whether the storage moved to the heap.
    pub fn spilled(&self) -> bool {
        self.data.spilled()
    }
}

impl Index<usize> for Words {
    type Output = Word;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl IndexMut<usize> for Words {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl From<&[Word]> for Words {
    fn from(words: &[Word]) -> Self {
        Self::from_slice(words)
    }
}

impl From<Vec<Word>> for Words {
    fn from(words: Vec<Word>) -> Self {
        Self { data: SmallVec::from_vec(words) }
    }
}

impl std::iter::FromIterator<Word> for Words {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self { data: iter.into_iter().collect() }
    }
}
