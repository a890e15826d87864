/// A graph node.
///
/// The name is the external identifier used by edges. The position of the node
/// in the node list is its index in matrices and results.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Node {
    pub name: String,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<&str> for Node {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Node {
    fn from(name: String) -> Self {
        Self { name }
    }
}

/// A weighted connection between two named nodes.
///
/// The direction given by `from` and `to` is kept as is in the results that
/// return input edges, but all algorithms treat the graph as undirected.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<W = f64> {
    pub from: String,
    pub to: String,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: W) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

impl<F, T, W> From<(F, T, W)> for Edge<W>
where
    F: Into<String>,
    T: Into<String>,
{
    fn from((from, to, weight): (F, T, W)) -> Self {
        Self::new(from, to, weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_tuple() {
        let edge: Edge<u32> = ("A", String::from("B"), 7).into();
        assert_eq!(edge, Edge::new("A", "B", 7));
    }
}
