//! [Disjoint-set](https://en.wikipedia.org/wiki/Disjoint-set_data_structure)
//! (union-find) over integer indices `0..n`.
//!
//! Uses path compression in [`find`](DisjointSet::find) and union by rank in
//! [`union`](DisjointSet::union), which gives amortized near-constant time per
//! operation.

/// A single element of the [`DisjointSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    pub parent: usize,
    pub rank: u32,
}

#[derive(Debug, Clone)]
pub struct DisjointSet {
    elements: Vec<Element>,
}

impl DisjointSet {
    /// Creates `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            elements: (0..n).map(|parent| Element { parent, rank: 0 }).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn element(&self, index: usize) -> &Element {
        &self.elements[index]
    }

    /// Returns the representative of the set containing `index`.
    ///
    /// All elements visited on the way to the root are relinked directly to
    /// the root.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn find(&mut self, index: usize) -> usize {
        let mut root = index;
        while self.elements[root].parent != root {
            root = self.elements[root].parent;
        }

        let mut curr = index;
        while curr != root {
            let next = self.elements[curr].parent;
            self.elements[curr].parent = root;
            curr = next;
        }

        root
    }

    /// Merges the sets containing `x` and `y`. Returns false if they were
    /// already in the same set.
    ///
    /// The root with lower rank is attached under the other one. On equal
    /// ranks, the root of `y` is attached under the root of `x`.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        let rank_x = self.elements[root_x].rank;
        let rank_y = self.elements[root_y].rank;

        if rank_x < rank_y {
            self.elements[root_x].parent = root_y;
        } else if rank_x > rank_y {
            self.elements[root_y].parent = root_x;
        } else {
            self.elements[root_y].parent = root_x;
            self.elements[root_x].rank += 1;
        }

        true
    }

    pub fn same(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.elements
            .iter()
            .enumerate()
            .filter(|(index, element)| element.parent == *index)
            .count()
    }
}
