//! Implementations of low-level directed graphs

mod tree_backed;
pub use self::tree_backed::*;

#[cfg(test)]
pub use self::tests::*;

#[cfg(test)]
mod tests {
    use crate::graph::*;
    use quickcheck::Arbitrary;
    use rs_quickcheck_util::*;
    use std::collections::BTreeSet;

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum Op {
        AddVertex(VertexId),
        RemoveVertex(VertexId),
        AddEdge((VertexId, VertexId, f64)),
        RemoveEdge((VertexId, VertexId)),
    }

    #[derive(Clone)]
    pub struct Ops {
        pub ops: Vec<Op>,
    }

    impl std::fmt::Debug for Ops {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self.ops)
        }
    }

    impl Ops {
        pub fn iter(&self) -> impl Iterator<Item = &Op> + '_ {
            self.ops.iter()
        }

        /// Replays the operations on a fresh graph.
        pub fn build<G>(&self) -> G
        where
            G: GrowableGraph + VertexShrinkableGraph + QueryableGraph,
        {
            let mut g = G::new();
            for op in self.iter() {
                match op {
                    Op::AddVertex(v) => {
                        g.add_vertex(*v);
                    }
                    Op::RemoveVertex(v) => {
                        let _ = g.remove_vertex(v);
                    }
                    Op::AddEdge((src, snk, w)) => {
                        g.add_edge(*src, *snk, *w);
                    }
                    Op::RemoveEdge((src, snk)) => {
                        if let Some(e) = g.edge_connecting(src, snk) {
                            g.remove_edge(&e.id);
                        }
                    }
                }
            }
            g
        }
    }

    fn pick(g: &mut quickcheck::Gen, known: &BTreeSet<VertexId>) -> VertexId {
        let idx = usize::arbitrary(g) % known.len();
        *known.iter().nth(idx).unwrap()
    }

    impl quickcheck::Arbitrary for Ops {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            let mut vid_factory = VertexIdFactory::new();
            let mut known_vid = BTreeSet::new();
            let mut known_edges = BTreeSet::new();
            let ops = gen_bytes(g, b"abcd.", b'.', 0..)
                .iter()
                .filter_map(|_| match u8::arbitrary(g) % 4 {
                    0 => {
                        let vid = vid_factory.one_more();
                        known_vid.insert(vid);
                        Some(Op::AddVertex(vid))
                    }
                    1 => {
                        if known_vid.is_empty() {
                            None
                        } else {
                            let vid = pick(g, &known_vid);
                            known_vid.remove(&vid);
                            known_edges.retain(|(src, snk)| *src != vid && *snk != vid);
                            Some(Op::RemoveVertex(vid))
                        }
                    }
                    2 => {
                        if known_vid.is_empty() {
                            None
                        } else {
                            let src_vid = pick(g, &known_vid);
                            let sink_vid = pick(g, &known_vid);
                            let weight = f64::from(u8::arbitrary(g) % 16);
                            known_edges.insert((src_vid, sink_vid));
                            Some(Op::AddEdge((src_vid, sink_vid, weight)))
                        }
                    }
                    3 => {
                        if known_edges.is_empty() {
                            None
                        } else {
                            let idx = usize::arbitrary(g) % known_edges.len();
                            let edge = *known_edges.iter().nth(idx).unwrap();
                            known_edges.remove(&edge);
                            Some(Op::RemoveEdge(edge))
                        }
                    }
                    _ => unreachable!(),
                })
                .collect();
            Self { ops }
        }

        fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
            let l = self.ops.len();
            let me = self.clone();
            let it = std::iter::successors(Some(l / 2), move |n| {
                let nxt = (n + l) / 2 + 1;
                if nxt >= l {
                    None
                } else {
                    Some(nxt)
                }
            })
            .map(move |n| {
                let mut res = me.clone();
                res.ops = me.ops[0..n].to_vec();
                res
            });
            Box::new(it)
        }
    }
}
