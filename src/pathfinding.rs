//! Priority-queue graph searches over anything implementing [`Graph`].
//!
//! Costs are paid when *entering* a node, so a path's cost never includes its start. Heap ties
//! are broken by the node's [`Ord`] implementation which keeps the searches deterministic.
//! Costs saturate at `u32::MAX` instead of overflowing.

use std::{cmp::Reverse, collections::BinaryHeap, hash::Hash, marker::PhantomData};

use petgraph::{
    graph::{IndexType, NodeIndex},
    visit::EdgeRef,
    EdgeType,
};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

pub trait Graph {
    type Node: Copy + Eq + Hash + Ord;

    /// Nodes reachable from `node` together with the cost of entering them. Directed graphs may
    /// report asymmetric neighbours.
    fn neighbors(&self, node: Self::Node) -> impl Iterator<Item = (Self::Node, u32)>;

    /// Estimated cost from `from` to `to`. Must not overestimate for [`a_star`] to stay optimal;
    /// the default makes it behave like [`dijkstra`].
    fn heuristic(&self, _from: Self::Node, _to: Self::Node) -> u32 {
        0
    }
}

/// Graph defined by a successor closure, for searching implicit state spaces.
pub struct FnGraph<N, F> {
    successors: F,
    _node: PhantomData<fn() -> N>,
}

impl<N, F> FnGraph<N, F> {
    pub fn new(successors: F) -> Self {
        Self {
            successors,
            _node: PhantomData,
        }
    }
}

impl<N, F, I> Graph for FnGraph<N, F>
where
    N: Copy + Eq + Hash + Ord,
    F: Fn(N) -> I,
    I: IntoIterator<Item = (N, u32)>,
{
    type Node = N;

    fn neighbors(&self, node: N) -> impl Iterator<Item = (N, u32)> {
        (self.successors)(node).into_iter()
    }
}

/// Edge weights are the cost of crossing the edge. Undirected edges can be crossed both ways.
impl<N, E, Ty, Ix> Graph for petgraph::Graph<N, E, Ty, Ix>
where
    E: Copy + Into<u32>,
    Ty: EdgeType,
    Ix: IndexType,
{
    type Node = NodeIndex<Ix>;

    fn neighbors(&self, node: NodeIndex<Ix>) -> impl Iterator<Item = (NodeIndex<Ix>, u32)> {
        self.edges(node).map(move |edge| {
            let other = if edge.source() == node {
                edge.target()
            } else {
                edge.source()
            };
            (other, (*edge.weight()).into())
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<N> {
    /// From the first step to the goal. The start is not included.
    pub nodes: Vec<N>,
    pub cost: u32,
}

impl<N: Copy> Path<N> {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn goal(&self) -> Option<N> {
        self.nodes.last().copied()
    }
}

/// Shortest path from `start` to `goal`, or `None` when the goal is unreachable.
///
/// The open set is ordered by `g + h`, then by `h` so that nodes closer to the goal are preferred,
/// then by node order.
pub fn a_star<G: Graph>(graph: &G, start: G::Node, goal: G::Node) -> Option<Path<G::Node>> {
    let mut open = BinaryHeap::new();
    let mut g_costs = FxHashMap::default();
    let mut parents = FxHashMap::default();
    let mut closed = FxHashSet::default();

    let h = graph.heuristic(start, goal);
    g_costs.insert(start, 0);
    open.push(Reverse((h, h, start)));

    while let Some(Reverse((_, _, current))) = open.pop() {
        if !closed.insert(current) {
            continue;
        }
        let g = g_costs[&current];
        if current == goal {
            debug!(expanded = closed.len(), cost = g, "a* reached goal");
            return Some(backtrack(&parents, start, goal, g));
        }

        for (neighbor, cost) in graph.neighbors(current) {
            if closed.contains(&neighbor) {
                continue;
            }
            let tentative = g.saturating_add(cost);
            if g_costs.get(&neighbor).map_or(true, |&known| tentative < known) {
                g_costs.insert(neighbor, tentative);
                parents.insert(neighbor, current);
                let h = graph.heuristic(neighbor, goal);
                open.push(Reverse((tentative.saturating_add(h), h, neighbor)));
            }
        }
    }

    debug!(expanded = closed.len(), "a* exhausted the graph");
    None
}

/// Cheapest path from `start` to the first node satisfying `is_goal`. With uniform costs this is a
/// breadth-first flood fill.
pub fn dijkstra<G, F>(graph: &G, start: G::Node, mut is_goal: F) -> Option<Path<G::Node>>
where
    G: Graph,
    F: FnMut(G::Node) -> bool,
{
    let mut goal = None;
    let (costs, parents) = explore(graph, start, |node| {
        let found = is_goal(node);
        if found {
            goal = Some(node);
        }
        found
    });
    let goal = goal?;
    debug!(expanded = costs.len(), cost = costs[&goal], "dijkstra reached goal");
    Some(backtrack(&parents, start, goal, costs[&goal]))
}

/// Cheapest cost to every node reachable from `start`, `start` itself included at 0.
pub fn flood_fill<G: Graph>(graph: &G, start: G::Node) -> FxHashMap<G::Node, u32> {
    let (costs, _) = explore(graph, start, |_| false);
    costs
}

type Explored<N> = (FxHashMap<N, u32>, FxHashMap<N, N>);

/// Dijkstra until `stop` accepts a settled node or the graph runs out. Only settled nodes are
/// returned in the cost map.
fn explore<G, F>(graph: &G, start: G::Node, mut stop: F) -> Explored<G::Node>
where
    G: Graph,
    F: FnMut(G::Node) -> bool,
{
    let mut open = BinaryHeap::new();
    let mut best = FxHashMap::default();
    let mut settled = FxHashMap::default();
    let mut parents = FxHashMap::default();

    best.insert(start, 0);
    open.push(Reverse((0u32, start)));

    while let Some(Reverse((g, current))) = open.pop() {
        if settled.contains_key(&current) {
            continue;
        }
        settled.insert(current, g);
        if stop(current) {
            break;
        }

        for (neighbor, cost) in graph.neighbors(current) {
            if settled.contains_key(&neighbor) {
                continue;
            }
            let tentative = g.saturating_add(cost);
            if best.get(&neighbor).map_or(true, |&known| tentative < known) {
                best.insert(neighbor, tentative);
                parents.insert(neighbor, current);
                open.push(Reverse((tentative, neighbor)));
            }
        }
    }

    (settled, parents)
}

fn backtrack<N: Copy + Eq + Hash>(
    parents: &FxHashMap<N, N>,
    start: N,
    goal: N,
    cost: u32,
) -> Path<N> {
    let mut nodes = Vec::new();
    let mut current = goal;
    while current != start {
        nodes.push(current);
        current = parents[&current];
    }
    nodes.reverse();
    Path { nodes, cost }
}

#[cfg(test)]
mod tests {
    use super::*;

    use petgraph::graph::{DiGraph, UnGraph};

    // 0 -1-> 1 -1-> 3, 0 -5-> 3, 1 -1-> 2 -1-> 3
    fn diamond() -> FnGraph<u8, impl Fn(u8) -> Vec<(u8, u32)>> {
        FnGraph::new(|n: u8| match n {
            0 => vec![(1, 1), (3, 5)],
            1 => vec![(2, 1), (3, 3)],
            2 => vec![(3, 1)],
            _ => vec![],
        })
    }

    #[test]
    fn test_a_star_picks_cheapest() {
        let path = a_star(&diamond(), 0, 3).unwrap();
        assert_eq!(path.nodes, vec![1, 2, 3]);
        assert_eq!(path.cost, 3);
        assert_eq!(path.goal(), Some(3));
    }

    #[test]
    fn test_start_is_goal() {
        let path = a_star(&diamond(), 2, 2).unwrap();
        assert!(path.is_empty());
        assert_eq!(path.cost, 0);
        assert_eq!(dijkstra(&diamond(), 1, |n| n == 1).unwrap().len(), 0);
    }

    #[test]
    fn test_unreachable() {
        assert_eq!(a_star(&diamond(), 3, 0), None);
        assert_eq!(dijkstra(&diamond(), 2, |n| n == 1), None);
    }

    #[test]
    fn test_dijkstra_predicate() {
        let path = dijkstra(&diamond(), 0, |n| n >= 2).unwrap();
        assert_eq!(path.nodes, vec![1, 2]);
        assert_eq!(path.cost, 2);
    }

    #[test]
    fn test_flood_fill() {
        let costs = flood_fill(&diamond(), 0);
        assert_eq!(costs.len(), 4);
        assert_eq!(costs[&0], 0);
        assert_eq!(costs[&3], 3);
        assert_eq!(flood_fill(&diamond(), 3).len(), 1);
    }

    #[test]
    fn test_ties_are_deterministic() {
        // two equal routes around a square, the lower node wins
        let square = FnGraph::new(|n: u8| match n {
            0 => vec![(2, 1), (1, 1)],
            1 | 2 => vec![(3, 1)],
            _ => vec![],
        });
        assert_eq!(a_star(&square, 0, 3).unwrap().nodes, vec![1, 3]);
        assert_eq!(dijkstra(&square, 0, |n| n == 3).unwrap().nodes, vec![1, 3]);
    }

    #[test]
    fn test_huge_costs_saturate() {
        let line = FnGraph::new(|n: u8| match n {
            0 => vec![(1, u32::MAX - 1)],
            1 => vec![(2, 5)],
            _ => vec![],
        });
        assert_eq!(a_star(&line, 0, 2).unwrap().cost, u32::MAX);
        assert_eq!(flood_fill(&line, 0)[&2], u32::MAX);
    }

    #[test]
    fn test_petgraph_directed() {
        let mut graph = DiGraph::<&str, u8>::new();
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        let c = graph.add_node("c");
        graph.add_edge(a, b, 4);
        graph.add_edge(b, c, 4);
        graph.add_edge(a, c, 9);

        let path = a_star(&graph, a, c).unwrap();
        assert_eq!(path.nodes, vec![b, c]);
        assert_eq!(path.cost, 8);
        assert_eq!(a_star(&graph, c, a), None);
    }

    #[test]
    fn test_petgraph_undirected() {
        let mut graph = UnGraph::<(), u8>::new_undirected();
        let nodes: Vec<_> = (0..4).map(|_| graph.add_node(())).collect();
        graph.add_edge(nodes[1], nodes[0], 1);
        graph.add_edge(nodes[2], nodes[1], 1);
        graph.add_edge(nodes[3], nodes[2], 1);

        let path = dijkstra(&graph, nodes[0], |n| n == nodes[3]).unwrap();
        assert_eq!(path.nodes, &nodes[1..]);
        let back = a_star(&graph, nodes[3], nodes[0]).unwrap();
        assert_eq!(back.cost, 3);
    }
}
