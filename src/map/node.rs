use crate::{Cost, NodeID, Point};

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub label: String,
    pub pos: Option<Point>,
    /// outgoing edges in declaration order
    pub edges: Vec<(NodeID, Cost)>,
}

impl Node {
    pub fn new(label: String) -> Node {
        Node {
            label,
            pos: None,
            edges: Vec::new(),
        }
    }
}
