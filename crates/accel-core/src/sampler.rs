//! Fixed-capacity FIFO sampler with a running accumulator
//!
//! A [`Sampler`] holds the most recent `capacity` readings of one
//! accelerometer axis in a circular buffer. Once full, every push evicts the
//! oldest reading. The sum of the held readings is kept incrementally, so
//! [`Sampler::sum`] and [`Sampler::mean`] never walk the buffer.
//!
//! ## Layout
//!
//! Storage is a boxed slice allocated once in [`Sampler::new`] and never
//! resized. `head` indexes the newest reading; walking backwards from it
//! (wrapping to `len - 1` below zero) visits readings newest to oldest.
//!
//! ```rust,ignore
//! let mut sampler = Sampler::new(2500)?;
//! sampler.push(-12);
//! sampler.push(40);
//! assert_eq!(sampler.newest(), Some(40));
//! assert_eq!(sampler.sum(), 28);
//! ```

extern crate alloc;
use alloc::boxed::Box;
use alloc::vec::Vec;

use thiserror_no_std::Error;

/// Largest capacity whose running sum is guaranteed to fit the `i32`
/// accumulator (`65535 * 32768 < i32::MAX`).
pub const MAX_CAPACITY: usize = u16::MAX as usize;

/// Error types for sampler construction
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SamplerError {
    /// Capacity of zero was requested
    #[error("Sampler capacity must be non-zero")]
    ZeroCapacity,

    /// Capacity would let the accumulator overflow
    #[error("Sampler capacity {capacity} exceeds maximum {max}")]
    CapacityTooLarge {
        /// Requested capacity
        capacity: usize,
        /// Maximum supported capacity
        max: usize,
    },

    /// Sample storage could not be allocated
    #[error("Failed to allocate storage for {capacity} samples")]
    Allocation {
        /// Requested capacity
        capacity: usize,
    },
}

/// Result type for sampler operations
pub type SamplerResult<T> = Result<T, SamplerError>;

/// Circular buffer of signed 16-bit readings with a running sum
pub struct Sampler {
    /// Backing storage, `capacity` slots
    samples: Box<[i16]>,
    /// Number of readings currently held
    len: usize,
    /// Slot of the newest reading (meaningless while empty)
    head: usize,
    /// Sum of the readings currently held
    sum: i32,
}

impl Sampler {
    /// Allocate an empty sampler able to hold `capacity` readings.
    ///
    /// Allocation is fallible: on a heap too small for the buffer this
    /// returns [`SamplerError::Allocation`] instead of aborting.
    pub fn new(capacity: usize) -> SamplerResult<Self> {
        if capacity == 0 {
            return Err(SamplerError::ZeroCapacity);
        }
        if capacity > MAX_CAPACITY {
            return Err(SamplerError::CapacityTooLarge {
                capacity,
                max: MAX_CAPACITY,
            });
        }

        let mut storage = Vec::new();
        storage
            .try_reserve_exact(capacity)
            .map_err(|_| SamplerError::Allocation { capacity })?;
        storage.resize(capacity, 0);

        Ok(Self {
            samples: storage.into_boxed_slice(),
            len: 0,
            head: 0,
            sum: 0,
        })
    }

    /// Empty the sampler and zero its storage, keeping the allocation.
    pub fn reset(&mut self) {
        self.samples.fill(0);
        self.len = 0;
        self.head = 0;
        self.sum = 0;
    }

    /// Append a reading, evicting the oldest one when full.
    pub fn push(&mut self, sample: i16) {
        let capacity = self.samples.len();

        if self.len < capacity {
            self.head = self.len;
            self.len += 1;
            self.sum += i32::from(sample);
        } else {
            self.head += 1;
            if self.head == capacity {
                self.head = 0;
            }
            // The slot under the new head holds the oldest reading.
            self.sum += i32::from(sample) - i32::from(self.samples[self.head]);
        }

        self.samples[self.head] = sample;
    }

    /// Maximum number of readings held
    pub fn capacity(&self) -> usize {
        self.samples.len()
    }

    /// Number of readings currently held
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if no readings are held
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if the next push will evict a reading
    pub fn is_full(&self) -> bool {
        self.len == self.samples.len()
    }

    /// Slot index of the newest reading, `None` while empty
    pub fn head(&self) -> Option<usize> {
        (self.len > 0).then_some(self.head)
    }

    /// Running sum of the held readings
    pub fn sum(&self) -> i32 {
        self.sum
    }

    /// Mean of the held readings, `None` while empty
    pub fn mean(&self) -> Option<f32> {
        if self.len == 0 {
            return None;
        }
        Some(self.sum as f32 / self.len as f32)
    }

    /// The most recently pushed reading
    pub fn newest(&self) -> Option<i16> {
        self.get_back(0)
    }

    /// The reading `lag` pushes before the newest one
    pub fn get_back(&self, lag: usize) -> Option<i16> {
        self.iter_from_lag(lag).next()
    }

    /// Iterate all held readings from newest to oldest
    pub fn iter_newest_first(&self) -> SampleIter<'_> {
        self.iter_from_lag(0)
    }

    /// Iterate from the reading `lag` back from the newest towards the
    /// oldest.
    ///
    /// Yields `len - lag` readings; nothing if `lag >= len`.
    pub fn iter_from_lag(&self, lag: usize) -> SampleIter<'_> {
        if lag >= self.len {
            return SampleIter {
                samples: &self.samples[..self.len],
                index: 0,
                remaining: 0,
            };
        }

        SampleIter {
            samples: &self.samples[..self.len],
            index: (self.head + self.len - lag) % self.len,
            remaining: self.len - lag,
        }
    }
}

/// Newest-to-oldest walk over a [`Sampler`]'s logical contents
pub struct SampleIter<'a> {
    /// Occupied slots only, so wrapping never leaves `[0, len)`
    samples: &'a [i16],
    index: usize,
    remaining: usize,
}

impl Iterator for SampleIter<'_> {
    type Item = i16;

    fn next(&mut self) -> Option<i16> {
        if self.remaining == 0 {
            return None;
        }

        let sample = self.samples[self.index];
        self.remaining -= 1;
        self.index = if self.index == 0 {
            self.samples.len() - 1
        } else {
            self.index - 1
        };

        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for SampleIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn filled(capacity: usize, values: impl IntoIterator<Item = i16>) -> Sampler {
        let mut sampler = Sampler::new(capacity).unwrap();
        for value in values {
            sampler.push(value);
        }
        sampler
    }

    fn oldest_first(sampler: &Sampler) -> Vec<i16> {
        let mut values: Vec<i16> = sampler.iter_newest_first().collect();
        values.reverse();
        values
    }

    #[test]
    fn test_new_sampler_is_empty() {
        let sampler = Sampler::new(8).unwrap();

        assert_eq!(sampler.capacity(), 8);
        assert!(sampler.is_empty());
        assert!(!sampler.is_full());
        assert_eq!(sampler.head(), None);
        assert_eq!(sampler.sum(), 0);
        assert_eq!(sampler.mean(), None);
        assert_eq!(sampler.newest(), None);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(matches!(Sampler::new(0), Err(SamplerError::ZeroCapacity)));
    }

    #[test]
    fn test_oversized_capacity_rejected() {
        assert!(matches!(
            Sampler::new(MAX_CAPACITY + 1),
            Err(SamplerError::CapacityTooLarge { .. })
        ));
    }

    #[test]
    fn test_push_until_full_tracks_head() {
        let sampler = filled(4, [1, 2, 3, 4]);

        assert!(sampler.is_full());
        assert_eq!(sampler.head(), Some(3));
        assert_eq!(sampler.newest(), Some(4));
        assert_eq!(sampler.sum(), 10);
    }

    #[test]
    fn test_accumulator_matches_contents_after_eviction() {
        let values = [
            120, -3000, 45, 32767, -32768, 0, 17, -1, 900, -450, 333, 2,
        ];
        let mut sampler = Sampler::new(5).unwrap();

        for value in values {
            sampler.push(value);
            let expected: i32 = sampler.iter_newest_first().map(i32::from).sum();
            assert_eq!(sampler.sum(), expected, "sum drifted after pushing {value}");
        }
    }

    #[test]
    fn test_fifo_keeps_last_capacity_values() {
        let capacity = 6;
        let k = 4;
        let sampler = filled(capacity, (0..(capacity + k) as i16).map(|v| v * 10));

        assert_eq!(sampler.len(), capacity);
        assert_eq!(oldest_first(&sampler), [40, 50, 60, 70, 80, 90]);
        // Oldest surviving slot is the one after head.
        assert_eq!(sampler.head(), Some((capacity + k - 1) % capacity));
    }

    #[test]
    fn test_reset_behaves_like_fresh_sampler() {
        let capacity = 5;
        let mut reused = filled(capacity, [9, 8, 7, 6, 5, 4, 3]);
        reused.reset();

        assert!(reused.is_empty());
        assert_eq!(reused.capacity(), capacity);

        let mut fresh = Sampler::new(capacity).unwrap();
        for value in [-2, 4, -6, 8, -10] {
            reused.push(value);
            fresh.push(value);
        }

        assert_eq!(oldest_first(&reused), oldest_first(&fresh));
        assert_eq!(reused.sum(), fresh.sum());
        assert_eq!(reused.head(), fresh.head());
    }

    #[test]
    fn test_get_back_walks_towards_oldest() {
        let sampler = filled(3, [1, 2, 3, 4, 5]);

        assert_eq!(sampler.get_back(0), Some(5));
        assert_eq!(sampler.get_back(1), Some(4));
        assert_eq!(sampler.get_back(2), Some(3));
        assert_eq!(sampler.get_back(3), None);
    }

    #[test]
    fn test_iter_from_lag_wraps_within_len() {
        let sampler = filled(4, [1, 2, 3, 4, 5, 6]);
        // Slots: [5, 6, 3, 4], head = 1
        let values: Vec<i16> = sampler.iter_from_lag(1).collect();

        assert_eq!(values, [5, 4, 3]);
        assert_eq!(sampler.iter_from_lag(1).len(), 3);
    }

    #[test]
    fn test_partial_fill_iteration() {
        let sampler = filled(10, [7, 8, 9]);
        let values: Vec<i16> = sampler.iter_newest_first().collect();

        assert_eq!(values, [9, 8, 7]);
        assert_eq!(sampler.mean(), Some(8.0));
    }
}
