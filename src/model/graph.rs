use std::collections::HashMap;
use std::hash::Hash;
use std::hash::Hasher;

use petgraph::graph::DiGraph;
use petgraph::prelude::*;
use tracing::debug;

use super::TransactionTable;
use super::WalletAddress;

#[derive(Debug, Clone, PartialEq)]
pub struct AddressNode {
    pub address: WalletAddress,
}

/// Every transfer from `from` to `to` collapsed into one edge.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferEdge {
    pub from: WalletAddress,
    pub to: WalletAddress,
    pub weight: f64,
    pub transfer_count: usize,
}

/// Directed transfer network: one node per address, one edge per ordered
/// (from, to) pair weighted by the summed transfer value. Self-transfers are
/// kept as self-loops.
#[derive(Debug, Clone, Default)]
pub struct TransactionGraph {
    graph: DiGraph<AddressNode, TransferEdge>,
    node_indices: HashMap<WalletAddress, NodeIndex>,
    edge_indices: HashMap<(NodeIndex, NodeIndex), EdgeIndex>,
}

impl TransactionGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_indices: HashMap::new(),
            edge_indices: HashMap::new(),
        }
    }

    /// Single pass over the table; O(records) time, O(edges) space.
    pub fn from_table(table: &TransactionTable) -> Self {
        let mut graph = Self::new();
        for record in table {
            graph.add_transfer(&record.from, &record.to, record.value);
        }
        debug!(
            "transaction_graph::built::records::{}::nodes::{}::edges::{}",
            table.len(),
            graph.node_count(),
            graph.edge_count()
        );
        graph
    }

    pub fn add_node(
        &mut self,
        address: &WalletAddress,
    ) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(address) {
            return idx;
        }

        let idx = self.graph.add_node(AddressNode {
            address: address.clone(),
        });
        self.node_indices.insert(address.clone(), idx);

        idx
    }

    /// Folds one transfer into the graph: the first transfer for a pair
    /// creates the edge, later ones add to its weight.
    pub fn add_transfer(
        &mut self,
        from: &WalletAddress,
        to: &WalletAddress,
        value: f64,
    ) {
        let from_idx = self.add_node(from);
        let to_idx = self.add_node(to);

        match self.edge_indices.get(&(from_idx, to_idx)) {
            Some(&edge_idx) => {
                let edge = &mut self.graph[edge_idx];
                edge.weight += value;
                edge.transfer_count += 1;
            },
            None => {
                let edge = TransferEdge {
                    from: from.clone(),
                    to: to.clone(),
                    weight: value,
                    transfer_count: 1,
                };
                let edge_idx = self.graph.add_edge(from_idx, to_idx, edge);
                self.edge_indices.insert((from_idx, to_idx), edge_idx);
            },
        }
    }

    pub fn contains(
        &self,
        address: &WalletAddress,
    ) -> bool {
        self.node_indices.contains_key(address)
    }

    pub fn node_index(
        &self,
        address: &WalletAddress,
    ) -> Option<NodeIndex> {
        self.node_indices.get(address).copied()
    }

    pub fn node(
        &self,
        address: &WalletAddress,
    ) -> Option<&AddressNode> {
        self.node_index(address).and_then(|idx| self.graph.node_weight(idx))
    }

    pub fn edge(
        &self,
        from: &WalletAddress,
        to: &WalletAddress,
    ) -> Option<&TransferEdge> {
        let from_idx = self.node_index(from)?;
        let to_idx = self.node_index(to)?;
        self.graph.find_edge(from_idx, to_idx).and_then(|idx| self.graph.edge_weight(idx))
    }

    pub fn edge_weight(
        &self,
        from: &WalletAddress,
        to: &WalletAddress,
    ) -> Option<f64> {
        self.edge(from, to).map(|edge| edge.weight)
    }

    pub fn node_count(&self) -> usize { self.graph.node_count() }

    pub fn edge_count(&self) -> usize { self.graph.edge_count() }

    pub fn total_weight(&self) -> f64 { self.graph.edge_weights().map(|edge| edge.weight).sum() }

    pub fn inner(&self) -> &DiGraph<AddressNode, TransferEdge> { &self.graph }

    pub fn addresses(&self) -> impl Iterator<Item = &WalletAddress> { self.graph.node_weights().map(|node| &node.address) }

    // Get all edges in the graph
    pub fn get_edges(&self) -> Vec<TransferEdge> { self.graph.edge_weights().cloned().collect() }

    /// Stable digest of the node set and edge weights. Two graphs built from
    /// the same table share a fingerprint; used as the centrality cache key.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        self.graph.node_count().hash(&mut hasher);
        for node in self.graph.node_weights() {
            node.address.hash(&mut hasher);
        }
        for edge in self.graph.edge_references() {
            edge.source().index().hash(&mut hasher);
            edge.target().index().hash(&mut hasher);
            edge.weight().weight.to_bits().hash(&mut hasher);
        }
        hasher.finish()
    }
}
