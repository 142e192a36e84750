/// Strictly increasing index tuples of length `k` drawn from `0..n`, in
/// lexicographic order. There are C(n, k) of them; none when `k > n`.
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Combinations {
            n,
            indices: (0..k).collect(),
            started: false,
            done: k > n,
        }
    }

    // move the rightmost index that still has room, reset the ones after it
    fn advance(&mut self) -> bool {
        let k = self.indices.len();
        let mut i = k;
        while i > 0 {
            i -= 1;
            if self.indices[i] != i + self.n - k {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                return true;
            }
        }
        false
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
        } else if !self.advance() {
            self.done = true;
            return None;
        }
        Some(self.indices.clone())
    }
}
