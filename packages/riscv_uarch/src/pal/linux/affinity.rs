use std::collections::TryReserveError;
use std::ffi::c_ulong;

use crate::ProcessorId;

const BITS_PER_WORD: usize = c_ulong::BITS as usize;

/// An owned CPU set in the layout the Linux kernel expects (`CPU_ALLOC` compatible), sized to
/// cover processors `0..=processor` and addressing exactly one processor.
///
/// The memory is released when the value is dropped.
#[derive(Debug, Eq, PartialEq)]
pub(crate) struct AffinityDescriptor {
    words: Vec<c_ulong>,
}

impl AffinityDescriptor {
    /// Allocates a CPU set with only `processor` flagged.
    ///
    /// Allocation is fallible because the size of the set depends on the processor ID.
    pub(crate) fn for_processor(processor: ProcessorId) -> Result<Self, TryReserveError> {
        let index = processor as usize;

        #[expect(
            clippy::integer_division,
            reason = "we want the index of the word containing the bit"
        )]
        let word_index = index / BITS_PER_WORD;

        #[expect(
            clippy::arithmetic_side_effects,
            reason = "word index is a small fraction of usize::MAX"
        )]
        let word_count = word_index + 1;

        let mut words = Vec::new();
        words.try_reserve_exact(word_count)?;
        words.resize(word_count, 0);

        // The word holding the target bit is always the last one.
        if let Some(word) = words.last_mut() {
            *word = 1 << (index % BITS_PER_WORD);
        }

        Ok(Self { words })
    }

    /// The size of the set in bytes, as `CPU_ALLOC_SIZE()` would report it.
    pub(crate) fn size_in_bytes(&self) -> usize {
        size_of_val(self.words.as_slice())
    }

    /// The number of processors the set can address.
    #[cfg(test)]
    pub(crate) fn capacity_in_bits(&self) -> usize {
        self.words.len().saturating_mul(BITS_PER_WORD)
    }

    /// The number of processors flagged in the set.
    #[cfg(test)]
    pub(crate) fn cardinality(&self) -> usize {
        self.words
            .iter()
            .map(|word| word.count_ones() as usize)
            .sum()
    }

    /// Whether `processor` is flagged in the set.
    #[cfg(test)]
    pub(crate) fn contains(&self, processor: ProcessorId) -> bool {
        let index = processor as usize;

        #[expect(
            clippy::integer_division,
            reason = "we want the index of the word containing the bit"
        )]
        let word_index = index / BITS_PER_WORD;

        self.words
            .get(word_index)
            .is_some_and(|word| *word & (1 << (index % BITS_PER_WORD)) != 0)
    }

    /// The lowest flagged processor, if any.
    #[cfg(test)]
    pub(crate) fn first(&self) -> Option<ProcessorId> {
        let (word_index, word) = self
            .words
            .iter()
            .enumerate()
            .find(|(_, word)| **word != 0)?;

        let index = word_index
            .checked_mul(BITS_PER_WORD)?
            .checked_add(word.trailing_zeros() as usize)?;

        ProcessorId::try_from(index).ok()
    }

    /// Pointer to the first word, for passing to the kernel.
    pub(crate) fn as_mut_ptr(&mut self) -> *mut c_ulong {
        self.words.as_mut_ptr()
    }
}
