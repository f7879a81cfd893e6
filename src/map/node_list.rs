use super::Node;
use crate::{Cost, NodeID, Point};

use hashbrown::HashMap;

#[derive(Clone, Debug, Default)]
pub(crate) struct NodeList {
    nodes: slab::Slab<Node>,
    label_map: HashMap<String, NodeID>,
}

impl NodeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.label_map.len()
    }

    /// Returns the id of `label`, inserting a Node without coordinate or edges if necessary.
    /// `label` is expected to be canonical already.
    pub fn add_node(&mut self, label: &str) -> NodeID {
        if let Some(&id) = self.label_map.get(label) {
            return id;
        }
        let id = self.nodes.insert(Node::new(label.to_owned()));
        self.label_map.insert(label.to_owned(), id);
        id
    }

    pub fn set_pos(&mut self, id: NodeID, pos: Point) {
        self[id].pos = Some(pos);
    }

    /// Adds the directed edge `src -> target`. Declaring the same edge twice keeps its position
    /// in the neighbor order and replaces the weight.
    pub fn add_edge(&mut self, src: NodeID, target: NodeID, cost: Cost) {
        let edges = &mut self[src].edges;
        if let Some(existing) = edges.iter_mut().find(|(id, _)| *id == target) {
            existing.1 = cost;
            return;
        }
        edges.push((target, cost));
    }

    pub fn iter(&self) -> slab::Iter<Node> {
        self.nodes.iter()
    }

    pub fn id_of(&self, label: &str) -> Option<NodeID> {
        self.label_map.get(label).copied()
    }
}

use std::ops::{Index, IndexMut};
impl Index<NodeID> for NodeList {
    type Output = Node;
    #[track_caller]
    fn index(&self, index: NodeID) -> &Node {
        &self.nodes[index]
    }
}
impl IndexMut<NodeID> for NodeList {
    #[track_caller]
    fn index_mut(&mut self, index: NodeID) -> &mut Node {
        &mut self.nodes[index]
    }
}

#[test]
fn duplicate_edges() {
    let mut nodes = NodeList::new();
    let a = nodes.add_node("A");
    let b = nodes.add_node("B");
    let c = nodes.add_node("C");
    nodes.add_edge(a, b, 2.0);
    nodes.add_edge(a, c, 1.0);
    nodes.add_edge(a, b, 5.0);

    assert_eq!(nodes.add_node("A"), a);
    assert_eq!(nodes.len(), 3);
    assert_eq!(nodes[a].edges, vec![(b, 5.0), (c, 1.0)]);
    assert!(nodes[b].edges.is_empty());
}
