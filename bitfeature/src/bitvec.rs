use rand::Rng;
use ref_cast::RefCast;
use std::ops::Deref;

/// A block of bits. This is an alias for [`u64`]
pub type BitBlock = u64;

/// Number of bits in a [`BitBlock`]
pub const BLOCKSIZE: usize = 64;

/// Bitwise AND with this constant to set most signficant bit to zero
pub const MSB_OFF: BitBlock = 0x7fffffffffffffff;

/// Bitwise OR with this constant to set most signficant bit to one
pub const MSB_ON: BitBlock = 0x8000000000000000;

/// Returns the minimum number of [`BitBlock`]s required to store the given number of bits.
///
/// If `bits` is not a multiple of [`BLOCKSIZE`], the result is rounded up to ensure all bits fit.
#[inline]
pub fn min_blocks(bits: usize) -> usize {
    bits / BLOCKSIZE + if bits % BLOCKSIZE == 0 { 0 } else { 1 }
}

/// Mask selecting the bit positions `[start, end)` of a block, counted from the most
/// significant bit. Requires `start <= end <= BLOCKSIZE`.
#[inline]
fn range_mask(start: usize, end: usize) -> BitBlock {
    let hi = if start >= BLOCKSIZE { 0 } else { BitBlock::MAX >> start };
    let lo = if end >= BLOCKSIZE { 0 } else { BitBlock::MAX >> end };
    hi & !lo
}

/// A growable set of bits, stored as a vector of [`BitBlock`]s (which alias to `u64`).
///
/// `BitVec` behaves like an unbounded bit set: every index past the stored blocks reads as
/// zero, and setting such an index grows the storage. Bit `i` lives in block `i / 64`, at
/// position `i % 64` counted from the most significant bit.
///
/// # Examples
///
/// ```
/// use bitfeature::bitvec::*;
///
/// let mut bv = BitVec::zeros(1);
/// bv.set_bit(5, true);
/// bv.set_bit(200, true);
/// assert!(bv.bit(5));
/// assert_eq!(bv.len(), 4);
/// assert_eq!(bv.ones().collect::<Vec<_>>(), vec![5, 200]);
/// ```
///
/// # Note
///
/// Read-only methods are implemented via dereferencing to [`BitSlice`].
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct BitVec(Vec<BitBlock>);

/// A run of bits, represented as a slice of [`BitBlock`]s.
#[derive(RefCast, PartialEq, Eq, PartialOrd, Ord, Debug)]
#[repr(transparent)]
pub struct BitSlice([BitBlock]);

/// Lazy iterator over the indices of the set bits in a [`BitSlice`], in ascending order.
pub struct Ones<'a> {
    slice: &'a BitSlice,
    from: usize,
}

impl Iterator for Ones<'_> {
    type Item = usize;
    fn next(&mut self) -> Option<Self::Item> {
        let i = self.slice.next_one(self.from)?;
        self.from = i + 1;
        Some(i)
    }
}

impl BitSlice {
    /// Returns an iterator over the [`BitBlock`]s in this slice.
    #[inline]
    pub fn block_iter(&self) -> impl Iterator<Item = BitBlock> + '_ {
        self.0.iter().copied()
    }

    /// Returns a lazy iterator over the indices of all set bits, in ascending order.
    #[inline]
    pub fn ones(&self) -> Ones<'_> {
        Ones {
            slice: self,
            from: 0,
        }
    }

    /// Counts the number of bits set to 1.
    #[inline]
    pub fn count_ones(&self) -> u32 {
        self.block_iter().fold(0, |c, bits| c + bits.count_ones())
    }

    /// Returns the value of the bit at the specified index.
    ///
    /// Indices past the stored blocks are not an error: they read as `false`.
    #[inline]
    pub fn bit(&self, index: usize) -> bool {
        let block_index = index / BLOCKSIZE;
        let bit_index = (index % BLOCKSIZE) as u32;
        match self.0.get(block_index) {
            Some(block) => block.rotate_left(bit_index) & MSB_ON == MSB_ON,
            None => false,
        }
    }

    /// Returns the index of the first set bit at or after `from`, if any.
    pub fn next_one(&self, from: usize) -> Option<usize> {
        let first = from / BLOCKSIZE;
        if first >= self.0.len() {
            return None;
        }
        let masked = self.0[first] & range_mask(from % BLOCKSIZE, BLOCKSIZE);
        if masked != 0 {
            return Some(first * BLOCKSIZE + masked.leading_zeros() as usize);
        }
        for i in (first + 1)..self.0.len() {
            if self.0[i] != 0 {
                return Some(i * BLOCKSIZE + self.0[i].leading_zeros() as usize);
            }
        }
        None
    }

    /// Returns the index of the highest set bit, if any.
    pub fn last_one(&self) -> Option<usize> {
        self.0
            .iter()
            .enumerate()
            .rev()
            .find(|(_, block)| **block != 0)
            .map(|(i, block)| i * BLOCKSIZE + (BLOCKSIZE - 1 - block.trailing_zeros() as usize))
    }

    /// The logical length of the bit set: one past the highest set bit, or 0 if no bit is set.
    #[inline]
    pub fn bit_length(&self) -> usize {
        self.last_one().map_or(0, |i| i + 1)
    }

    /// Checks whether two slices hold the same set bits, treating missing blocks as zero.
    pub fn same_bits(&self, other: &BitSlice) -> bool {
        let n = self.0.len().max(other.0.len());
        (0..n).all(|i| self.0.get(i).unwrap_or(&0) == other.0.get(i).unwrap_or(&0))
    }

    /// Number of blocks in this slice
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of bits that fit in the stored blocks
    #[inline]
    pub fn num_bits(&self) -> usize {
        self.0.len() * BLOCKSIZE
    }
}

impl BitVec {
    /// A `BitVec` of `num_blocks` zero blocks.
    #[inline]
    pub fn zeros(num_blocks: usize) -> Self {
        BitVec(vec![0; num_blocks])
    }

    #[inline]
    pub fn random(rng: &mut impl Rng, num_blocks: usize) -> Self {
        (0..num_blocks).map(|_| rng.random::<BitBlock>()).collect()
    }

    /// Clears every bit at or above `num_bits` and drops the blocks that become unused.
    pub fn truncate(&mut self, num_bits: usize) {
        self.0.truncate(min_blocks(num_bits));
        let rem = num_bits % BLOCKSIZE;
        if rem != 0 {
            if let Some(last) = self.0.last_mut() {
                *last &= range_mask(0, rem);
            }
        }
    }

    /// Builds a `BitVec` with exactly the given bits set.
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        let mut v = BitVec::default();
        for i in indices {
            v.set_bit(i, true);
        }
        v
    }

    /// Grows the storage with zero blocks so that it holds at least `num_blocks` blocks.
    #[inline]
    fn grow_to(&mut self, num_blocks: usize) {
        if self.0.len() < num_blocks {
            self.0.resize(num_blocks, 0);
        }
    }

    /// Sets the bit at the given index to the provided value, growing the storage if a bit
    /// past the end is set.
    #[inline]
    pub fn set_bit(&mut self, index: usize, value: bool) {
        let block_index = index / BLOCKSIZE;
        if block_index >= self.0.len() {
            if !value {
                return;
            }
            self.grow_to(block_index + 1);
        }
        let bit_index = (index % BLOCKSIZE) as u32;
        let mut block = self.0[block_index].rotate_left(bit_index);
        if value {
            block |= MSB_ON;
        } else {
            block &= MSB_OFF;
        }
        self.0[block_index] = block.rotate_right(bit_index);
    }

    /// Flips every bit in `[from, to)`, growing the storage as required.
    pub fn flip_range(&mut self, from: usize, to: usize) {
        if from >= to {
            return;
        }
        self.grow_to(min_blocks(to));
        for b in (from / BLOCKSIZE)..=((to - 1) / BLOCKSIZE) {
            let offset = b * BLOCKSIZE;
            let start = from.max(offset) - offset;
            let end = to.min(offset + BLOCKSIZE) - offset;
            self.0[b] ^= range_mask(start, end);
        }
    }

    /// XORs `source` into this vector, growing it to the longer of the two.
    pub fn xor_in(&mut self, source: &BitSlice) {
        self.grow_to(source.len());
        for (bits0, bits1) in self.0.iter_mut().zip(source.block_iter()) {
            *bits0 ^= bits1;
        }
    }
}

impl From<Vec<BitBlock>> for BitVec {
    fn from(value: Vec<BitBlock>) -> Self {
        BitVec(value)
    }
}

impl FromIterator<BitBlock> for BitVec {
    fn from_iter<T: IntoIterator<Item = BitBlock>>(iter: T) -> Self {
        Vec::from_iter(iter).into()
    }
}

impl FromIterator<bool> for BitVec {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        let mut v = vec![];
        let mut c = 0;
        let mut block: BitBlock = 0;
        for bit in iter {
            if bit {
                block |= 1;
            }
            c += 1;
            if c == BLOCKSIZE {
                c = 0;
                v.push(block);
                block = 0;
            } else {
                block <<= 1;
            }
        }

        if c != 0 {
            block <<= BLOCKSIZE - c - 1;
            v.push(block);
        }

        BitVec(v)
    }
}

impl Deref for BitVec {
    type Target = BitSlice;
    fn deref(&self) -> &Self::Target {
        BitSlice::ref_cast(&self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn bit_get_set() {
        let sz = 4;
        let bits = vec![0, 3, 100, 201, 255];

        let mut vec0 = BitVec::zeros(sz);
        for &b in &bits {
            vec0.set_bit(b, true);
        }

        for i in 0..(sz * BLOCKSIZE) {
            assert_eq!(vec0.bit(i), bits.contains(&i));
        }

        let mut vec1: BitVec = vec![BitBlock::MAX; sz].into();
        for &b in &bits {
            vec1.set_bit(b, false);
        }

        for i in 0..(sz * BLOCKSIZE) {
            assert_eq!(vec1.bit(i), !bits.contains(&i));
        }
    }

    #[test]
    fn reads_past_end_are_zero() {
        let vec: BitVec = vec![BitBlock::MAX].into();
        assert!(vec.bit(63));
        assert!(!vec.bit(64));
        assert!(!vec.bit(10_000));
        assert!(!BitVec::default().bit(0));
    }

    #[test]
    fn set_bit_grows() {
        let mut vec = BitVec::default();
        vec.set_bit(130, false);
        assert_eq!(vec.len(), 0);
        vec.set_bit(130, true);
        assert_eq!(vec.len(), 3);
        assert!(vec.bit(130));
        assert_eq!(vec.bit_length(), 131);
    }

    #[test]
    fn bool_iter() {
        let mut rng = SmallRng::seed_from_u64(1);
        let bools: Vec<bool> = (0..300).map(|_| rng.random()).collect();
        let vec: BitVec = bools.iter().copied().collect();

        // collecting pads to a multiple of BLOCKSIZE...
        assert_eq!(vec.num_bits(), 320);
        for (i, &b) in bools.iter().enumerate() {
            assert_eq!((i, vec.bit(i)), (i, b));
        }

        // ...so the remaining bits should be 0
        for i in bools.len()..vec.num_bits() {
            assert_eq!((i, vec.bit(i)), (i, false));
        }
    }

    #[test]
    fn ones_matches_bits() {
        let mut rng = SmallRng::seed_from_u64(7);
        let vec = BitVec::random(&mut rng, 5);
        let expected: Vec<usize> = (0..vec.num_bits()).filter(|&i| vec.bit(i)).collect();
        assert_eq!(vec.ones().collect::<Vec<_>>(), expected);
        assert_eq!(vec.count_ones() as usize, expected.len());
    }

    #[test]
    fn next_and_last_one() {
        let vec = BitVec::from_indices([3, 64, 65, 190]);
        assert_eq!(vec.next_one(0), Some(3));
        assert_eq!(vec.next_one(3), Some(3));
        assert_eq!(vec.next_one(4), Some(64));
        assert_eq!(vec.next_one(66), Some(190));
        assert_eq!(vec.next_one(191), None);
        assert_eq!(vec.next_one(1000), None);
        assert_eq!(vec.last_one(), Some(190));
        assert_eq!(vec.bit_length(), 191);
        assert_eq!(vec.ones().collect::<Vec<_>>(), vec![3, 64, 65, 190]);

        let empty = BitVec::zeros(3);
        assert_eq!(empty.last_one(), None);
        assert_eq!(empty.bit_length(), 0);
        assert_eq!(empty.next_one(0), None);
        assert_eq!(empty.ones().next(), None);
    }

    #[test]
    fn last_bit_of_block() {
        let vec = BitVec::from_indices([63, 127]);
        assert_eq!(vec.ones().collect::<Vec<_>>(), vec![63, 127]);
        assert_eq!(vec.next_one(64), Some(127));
    }

    #[test]
    fn flip_range_across_blocks() {
        let mut vec = BitVec::default();
        vec.flip_range(60, 130);
        assert_eq!(vec.len(), 3);
        for i in 0..vec.num_bits() {
            assert_eq!((i, vec.bit(i)), (i, (60..130).contains(&i)));
        }

        vec.flip_range(0, 192);
        for i in 0..vec.num_bits() {
            assert_eq!((i, vec.bit(i)), (i, !(60..130).contains(&i)));
        }

        let before = vec.clone();
        vec.flip_range(5, 5);
        assert_eq!(vec, before);
    }

    #[test]
    fn truncate_clears_tail() {
        let mut rng = SmallRng::seed_from_u64(3);
        let full = BitVec::random(&mut rng, 3);
        let mut vec = full.clone();
        vec.truncate(70);
        assert_eq!(vec.len(), 2);
        for i in 0..192 {
            assert_eq!((i, vec.bit(i)), (i, i < 70 && full.bit(i)));
        }

        vec.truncate(0);
        assert!(vec.is_empty());
    }

    #[test]
    fn xor_in_grows() {
        let mut vec0 = BitVec::from_indices([1, 2]);
        let vec1 = BitVec::from_indices([2, 150]);
        vec0.xor_in(&vec1);
        assert_eq!(vec0.ones().collect::<Vec<_>>(), vec![1, 150]);

        let mut vec2 = vec1.clone();
        vec2.xor_in(&vec1);
        assert_eq!(vec2, BitVec::zeros(vec1.len()));
    }

    #[test]
    fn same_bits_ignores_trailing_blocks() {
        let vec0 = BitVec::from_indices([4]);
        let mut vec1 = BitVec::zeros(4);
        vec1.set_bit(4, true);
        assert_ne!(vec0, vec1);
        assert!(vec0.same_bits(&vec1));
        assert!(vec1.same_bits(&vec0));
        vec1.set_bit(200, true);
        assert!(!vec0.same_bits(&vec1));
    }
}
