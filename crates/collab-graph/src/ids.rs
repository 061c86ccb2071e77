use collab_core::NodeId;

/// Converts a [`NodeId`] into its underlying index within per-node arrays.
pub(crate) fn node_index(id: NodeId) -> usize {
    id.index()
}

/// Creates a [`NodeId`] from an index.
pub(crate) fn make_node(index: usize) -> NodeId {
    NodeId::from_raw(index as u32)
}

/// Orders the endpoints of an undirected edge by index.
pub(crate) fn canonical_pair(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
