use crate::graph::*;
use ahash::RandomState;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Gray,
    Black,
}

struct Frame {
    vertex: VertexId,
    via: Option<EdgeId>,
    successors: std::vec::IntoIter<Edge>,
}

/// Cycle detection by three-colored depth-first search.
///
/// A vertex is white before it is reached, gray while on the search stack and black afterwards.
/// Reaching a gray vertex again closes a cycle.
/// On undirected graphs the edge a vertex was entered by does not count as a way back,
/// so only self-loops and genuine cycles are reported.
pub trait HasCycle
where
    Self: QueryableGraph + DirectedOrNot + Sized,
{
    fn has_cycle(&self) -> bool {
        let mut colors: HashMap<VertexId, Color, RandomState> = HashMap::default();
        for root in self.iter_vertices() {
            if colors.contains_key(&root) {
                continue;
            }
            let mut stack = vec![enter(self, root, None, &mut colors)];
            while let Some(top) = stack.last_mut() {
                match top.successors.next() {
                    Some(e) => {
                        if !Self::DIRECTED_OR_NOT && top.via == Some(e.id) {
                            continue;
                        }
                        match colors.get(&e.sink) {
                            Some(Color::Gray) => {
                                tracing::debug!(from = ?e.source, to = ?e.sink, "back edge found");
                                return true;
                            }
                            Some(Color::Black) => {}
                            None => {
                                let frame = enter(self, e.sink, Some(e.id), &mut colors);
                                stack.push(frame);
                            }
                        }
                    }
                    None => {
                        colors.insert(top.vertex, Color::Black);
                        stack.pop();
                    }
                }
            }
        }
        false
    }
}

impl<G: QueryableGraph + DirectedOrNot> HasCycle for G {}

fn enter<G: QueryableGraph>(
    graph: &G,
    vertex: VertexId,
    via: Option<EdgeId>,
    colors: &mut HashMap<VertexId, Color, RandomState>,
) -> Frame {
    colors.insert(vertex, Color::Gray);
    let successors: Vec<_> = graph.out_edges(&vertex).collect();
    Frame {
        vertex,
        via,
        successors: successors.into_iter(),
    }
}
