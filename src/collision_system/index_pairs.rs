/// all index pairs (i, j) with i < j < n, in lexicographic order
///
/// (0, 1), (0, 2), .., (0, n - 1), (1, 2), .., (n - 2, n - 1)
pub struct IndexPairs {
    n: usize,
    i: usize,
    j: usize,
}

impl IndexPairs {
    pub fn new(n: usize) -> IndexPairs {
        IndexPairs { n, i: 0, j: 1 }
    }
}

impl Iterator for IndexPairs {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.j >= self.n {
            self.i += 1;
            self.j = self.i + 1;
            if self.j >= self.n {
                return None;
            }
        }
        let res = (self.i, self.j);
        self.j += 1;
        Some(res)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.i + 1 >= self.n {
            0
        } else {
            // rest of the current row plus all following rows
            let row = self.n.saturating_sub(self.j);
            row + crate::utils::pair_count(self.n - self.i - 1)
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for IndexPairs {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::pair_count;

    #[test]
    fn lexicographic_order() {
        let pairs: Vec<(usize, usize)> = IndexPairs::new(4).collect();
        assert_eq!(
            pairs,
            vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]
        );
    }

    #[test]
    fn too_few_items() {
        assert_eq!(IndexPairs::new(0).next(), None);
        assert_eq!(IndexPairs::new(1).next(), None);
        assert_eq!(IndexPairs::new(2).collect::<Vec<_>>(), vec![(0, 1)]);
    }

    #[test]
    fn exhausted_iterator_stays_exhausted() {
        let mut pairs = IndexPairs::new(2);
        assert_eq!(pairs.next(), Some((0, 1)));
        assert_eq!(pairs.next(), None);
        assert_eq!(pairs.next(), None);
        assert_eq!(pairs.len(), 0);
    }

    #[test]
    fn len_tracks_progress() {
        let mut pairs = IndexPairs::new(5);
        assert_eq!(pairs.len(), 10);
        pairs.next();
        pairs.next();
        assert_eq!(pairs.len(), 8);
        for _ in 0..4 {
            pairs.next();
        }
        assert_eq!(pairs.len(), 4);
    }

    #[quickcheck]
    fn yields_every_pair_once(n: u8) -> bool {
        let n = (n % 64) as usize;
        let pairs: Vec<(usize, usize)> = IndexPairs::new(n).collect();
        pairs.len() == pair_count(n)
            && pairs.iter().all(|&(i, j)| i < j && j < n)
            && pairs.windows(2).all(|w| w[0] < w[1])
    }
}
