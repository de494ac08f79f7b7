use crate::error::{Result, XYCutError};

/// Reading sequence of a page: `order[k]` is the input position read k-th.
///
/// Always a permutation of `0..len`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReadingOrder {
    order: Vec<usize>,
}

impl ReadingOrder {
    pub(crate) fn new_unchecked(order: Vec<usize>) -> Self {
        debug_assert!(Self::check(&order).is_ok());
        Self { order }
    }

    /// Wrap caller-supplied indices, rejecting anything that is not a
    /// permutation of `0..indices.len()`
    pub fn from_indices(indices: Vec<usize>) -> Result<Self> {
        Self::check(&indices)?;
        Ok(Self { order: indices })
    }

    fn check(indices: &[usize]) -> Result<()> {
        let mut seen = vec![false; indices.len()];
        for &index in indices {
            match seen.get_mut(index) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(XYCutError::NotAPermutation { index }),
            }
        }
        Ok(())
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.order.iter()
    }

    /// Inverse permutation: `ranks()[i]` is the reading rank of input `i`
    pub fn ranks(&self) -> Vec<usize> {
        let mut ranks = vec![0; self.order.len()];
        for (rank, &index) in self.order.iter().enumerate() {
            ranks[index] = rank;
        }
        ranks
    }

    /// Rearrange `elements` (in input order) into reading order
    pub fn apply<T>(&self, elements: Vec<T>) -> Result<Vec<T>> {
        if elements.len() != self.order.len() {
            return Err(XYCutError::LengthMismatch {
                expected: self.order.len(),
                actual: elements.len(),
            });
        }

        let mut slots: Vec<Option<T>> = elements.into_iter().map(Some).collect();
        let mut sorted = Vec::with_capacity(slots.len());
        for &index in &self.order {
            match slots[index].take() {
                Some(element) => sorted.push(element),
                None => return Err(XYCutError::NotAPermutation { index }),
            }
        }
        Ok(sorted)
    }
}

impl AsRef<[usize]> for ReadingOrder {
    fn as_ref(&self) -> &[usize] {
        &self.order
    }
}

impl<'a> IntoIterator for &'a ReadingOrder {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

impl IntoIterator for ReadingOrder {
    type Item = usize;
    type IntoIter = std::vec::IntoIter<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.into_iter()
    }
}

impl From<ReadingOrder> for Vec<usize> {
    fn from(order: ReadingOrder) -> Self {
        order.order
    }
}
