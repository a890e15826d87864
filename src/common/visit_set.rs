use fixedbitset::FixedBitSet;

/// Set of already processed node indices.
pub trait VisitSet {
    /// Marks the index as visited and returns true if it was not visited
    /// before.
    fn visit(&mut self, index: usize) -> bool;
    fn is_visited(&self, index: usize) -> bool;
    fn visited_count(&self) -> usize;
}

impl VisitSet for FixedBitSet {
    fn visit(&mut self, index: usize) -> bool {
        if self.len() <= index {
            self.grow(index + 1);
        }
        !self.put(index)
    }

    fn is_visited(&self, index: usize) -> bool {
        self.contains(index)
    }

    fn visited_count(&self) -> usize {
        self.count_ones(..)
    }
}
