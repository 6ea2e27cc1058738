use crate::graph::*;
use std::fmt::{Debug, Formatter, Result as FmtResult};

/// How [`GraphDebug`] names a vertex.
pub type VertexLabel = fn(&VertexId, &mut Formatter<'_>) -> FmtResult;

fn label_by_id(vid: &VertexId, f: &mut Formatter<'_>) -> FmtResult {
    write!(f, "{:?}", vid)
}

/// An adjacency dump of a graph, one vertex per line followed by its out-edges.
///
/// Directed edges print as `--(weight)-> sink` and undirected ones as `--(weight)-- other`.
/// Vertices print as their ids unless [`with_labels`](Self::with_labels) says otherwise.
pub struct GraphDebug<'a, G, L = VertexLabel> {
    graph: &'a G,
    label: L,
    init_indent: usize,
    indent_step: usize,
}

impl<'a, G> GraphDebug<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            label: label_by_id,
            init_indent: 0,
            indent_step: 2,
        }
    }
}

impl<'a, G, L> GraphDebug<'a, G, L> {
    pub fn indent(mut self, init: usize, step: usize) -> Self {
        self.init_indent = init;
        self.indent_step = step;
        self
    }

    /// Prints vertices through `label` instead of their ids.
    pub fn with_labels<M>(self, label: M) -> GraphDebug<'a, G, M>
    where
        M: Fn(&VertexId, &mut Formatter<'_>) -> FmtResult,
    {
        GraphDebug {
            graph: self.graph,
            label,
            init_indent: self.init_indent,
            indent_step: self.indent_step,
        }
    }

    fn pad(&self, f: &mut Formatter<'_>, level: usize) -> FmtResult {
        let width = self.init_indent + self.indent_step * level;
        write!(f, "{:width$}", "", width = width)
    }
}

impl<'a, G, L> Debug for GraphDebug<'a, G, L>
where
    G: QueryableGraph + DirectedOrNot,
    L: Fn(&VertexId, &mut Formatter<'_>) -> FmtResult,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let tip = if G::DIRECTED_OR_NOT { "->" } else { "--" };
        for v in self.graph.iter_vertices() {
            self.pad(f, 0)?;
            (self.label)(&v, f)?;
            writeln!(f)?;
            for e in self.graph.out_edges(&v) {
                self.pad(f, 1)?;
                write!(f, "--({}){} ", e.weight, tip)?;
                (self.label)(&e.sink, f)?;
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
