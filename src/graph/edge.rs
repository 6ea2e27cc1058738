use super::VertexId;
use std::hash::{Hash, Hasher};

/// Weight given to edges added without an explicit one.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// ID for edges, which are essentially `usize`.
///
/// Edge ids grow with insertion, so ordering by `EdgeId` is ordering by insertion.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

/// A factory to generate `EdgeId` uniquely.
#[derive(Debug, Clone)]
pub struct EdgeIdFactory(usize);

/// Information about a low-level edge.
///
/// Two edges are equal iff their sources, sinks and weights are.
/// The id only records where the edge sits in insertion order.
/// Weights are compared bitwise, so `NaN` weights are equal to themselves.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub id: EdgeId,
    pub source: VertexId,
    pub sink: VertexId,
    pub weight: f64,
}

/// An edge without orientation.
///
/// `(a, b)` and `(b, a)` are the same undirected edge:
/// endpoints are stored smaller first and only they take part in equality and hashing.
#[derive(Debug, Clone, Copy)]
pub struct UndirectedEdge {
    low: VertexId,
    high: VertexId,
    weight: f64,
}

impl Default for EdgeIdFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeIdFactory {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn one_more(&mut self) -> EdgeId {
        let cur = self.0;
        self.0 += 1;
        EdgeId(cur)
    }

    /// Number of ids generated so far. Every id ever handed out is below it.
    pub fn issued(&self) -> usize {
        self.0
    }
}

impl EdgeId {
    pub const MIN: EdgeId = EdgeId(0);

    pub fn to_raw(&self) -> usize {
        self.0
    }
}

impl Edge {
    /// The same edge seen from its sink.
    pub fn reversed(&self) -> Self {
        Self {
            id: self.id,
            source: self.sink,
            sink: self.source,
            weight: self.weight,
        }
    }

    /// Forgets the orientation.
    pub fn undirected(&self) -> UndirectedEdge {
        UndirectedEdge::new(self.source, self.sink, self.weight)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
            && self.sink == other.sink
            && self.weight.to_bits() == other.weight.to_bits()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        self.sink.hash(state);
        self.weight.to_bits().hash(state);
    }
}

impl UndirectedEdge {
    pub fn new(a: VertexId, b: VertexId, weight: f64) -> Self {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        Self { low, high, weight }
    }

    /// Both endpoints, the smaller one first.
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.low, self.high)
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl PartialEq for UndirectedEdge {
    fn eq(&self, other: &Self) -> bool {
        self.low == other.low && self.high == other.high
    }
}

impl Eq for UndirectedEdge {}

impl Hash for UndirectedEdge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.low.hash(state);
        self.high.hash(state);
    }
}
