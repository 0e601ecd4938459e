//! Biconnected components and articulation points of an implicit undirected graph.
//!
//! The graph is never materialised: it is described by a start vertex and a function listing the neighbours of a vertex,
//! and only the component reachable from the start is examined.
//!
//! The depth-first search is iterative, keeping its own stack, since search trees over puzzle positions get far deeper than
//! a native call stack allows. It runs from a virtual root whose only neighbour is the start vertex, so the start needs no
//! special treatment in the lowpoint rule: a vertex `v` with DFS child `c` separates `c`'s subtree from the rest exactly when
//! `depth(v) <= lowpoint(c)`, where `lowpoint(v)` is the least of `depth(v)`, the depths of `v`'s non-tree neighbours, and the
//! lowpoints of `v`'s children.
//!
//! A second pass walks the DFS tree and starts a new component below every separating tree edge.

use std::collections::HashMap;
use std::hash::Hash;

use itertools::Itertools;

/// Identifier of one biconnected component, dense from 0.
pub type ComponentId = usize;

// the virtual root always sits in slot 0, the start vertex in slot 1
const ROOT: usize = 0;
const START: usize = 1;

struct Vertex<N> {
    key: Option<N>,
    parent: Option<usize>,
    // neighbours are listed the first time the vertex reaches the top of the stack
    expanded: bool,
    pending: Vec<N>,
    cursor: usize,
    children: Vec<usize>,
    // tree children whose subtree this vertex cuts off
    separates: Vec<bool>,
    // already-visited, non-parent neighbours
    others: Vec<usize>,
    depth: usize,
    lowpoint: usize,
}

impl<N> Vertex<N> {
    fn discovered(key: Option<N>, parent: Option<usize>, depth: usize) -> Self {
        Self {
            key,
            parent,
            expanded: false,
            pending: Vec::new(),
            cursor: 0,
            children: Vec::new(),
            separates: Vec::new(),
            others: Vec::new(),
            depth,
            lowpoint: depth,
        }
    }
}

/// The result of [`hopcroft_tarjan`]: the DFS tree over the component of the start vertex, and its biconnected components.
#[derive(Clone, Debug)]
pub struct Biconnectivity<N> {
    // DFS discovery order; slot 0 is the start vertex
    vertices: Vec<N>,
    index: HashMap<N, usize>,
    parents: Vec<Option<usize>>,
    depths: Vec<usize>,
    lowpoints: Vec<usize>,
    membership: Vec<Vec<ComponentId>>,
    component_count: usize,
}

impl<N> Biconnectivity<N>
where
    N: Eq + Hash,
{
    /// Number of vertices reachable from the start, the start included.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of biconnected components.
    pub fn component_count(&self) -> usize {
        self.component_count
    }

    /// Whether `vertex` is reachable from the start.
    pub fn contains(&self, vertex: &N) -> bool {
        self.index.contains_key(vertex)
    }

    /// Vertices in DFS discovery order, starting with the start vertex.
    pub fn vertices(&self) -> &[N] {
        &self.vertices
    }

    /// Components `vertex` belongs to. Articulation points belong to two or more.
    pub fn components_of(&self, vertex: &N) -> Option<&[ComponentId]> {
        self.index.get(vertex).map(|slot| self.membership[*slot].as_slice())
    }

    /// Whether removing `vertex` would disconnect the component.
    pub fn is_articulation_point(&self, vertex: &N) -> bool {
        self.components_of(vertex).is_some_and(|components| components.len() >= 2)
    }

    /// All articulation points, in DFS discovery order.
    pub fn articulation_points(&self) -> impl Iterator<Item = &N> {
        self.vertices.iter()
            .zip(self.membership.iter())
            .filter(|(_, components)| components.len() >= 2)
            .map(|(vertex, _)| vertex)
    }

    /// Members of every component, indexed by [`ComponentId`], each in DFS discovery order.
    pub fn components(&self) -> Vec<Vec<&N>> {
        let mut members = vec![Vec::new(); self.component_count];
        for (vertex, components) in self.vertices.iter().zip(self.membership.iter()) {
            for component in components {
                members[*component].push(vertex);
            }
        }
        members
    }

    /// Depth of `vertex` in the DFS tree; the start vertex has depth 0.
    pub fn depth(&self, vertex: &N) -> Option<usize> {
        self.index.get(vertex).map(|slot| self.depths[*slot])
    }

    /// Lowpoint of `vertex`, on the same scale as [`depth`](Self::depth).
    pub fn lowpoint(&self, vertex: &N) -> Option<usize> {
        self.index.get(vertex).map(|slot| self.lowpoints[*slot])
    }

    /// Parent of `vertex` in the DFS tree; [`None`] for the start vertex and for unknown vertices.
    pub fn parent(&self, vertex: &N) -> Option<&N> {
        let slot = self.index.get(vertex)?;
        self.parents[*slot].map(|parent| &self.vertices[parent])
    }
}

/// Compute the biconnected components and articulation points of the component containing `start`.
///
/// `neighbors` lists the vertices adjacent to a vertex. It is called exactly once per reachable vertex,
/// and is expected to describe an undirected graph without self-loops.
/// The edge back to a vertex's DFS parent is ignored, every other edge is examined.
pub fn hopcroft_tarjan<N, F, I>(start: N, mut neighbors: F) -> Biconnectivity<N>
where
    N: Clone + Eq + Hash,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    // depths are shifted up by one so the virtual root can sit at 0
    let mut tree: Vec<Vertex<N>> = vec![Vertex::discovered(None, None, 0)];
    let mut index: HashMap<N, usize> = HashMap::new();
    let mut to_explore = vec![ROOT];

    // first pass: DFS tree and lowpoints
    while let Some(&slot) = to_explore.last() {
        if !tree[slot].expanded {
            let listed = match &tree[slot].key {
                None => vec![start.clone()],
                Some(key) => {
                    let father = tree[slot].parent.and_then(|parent| tree[parent].key.as_ref());
                    neighbors(key).into_iter()
                        .filter(|neighbor| Some(neighbor) != father)
                        .collect_vec()
                }
            };
            let vertex = &mut tree[slot];
            vertex.pending = listed;
            vertex.expanded = true;
        }

        let mut descend = None;
        while tree[slot].cursor < tree[slot].pending.len() {
            let neighbor = tree[slot].pending[tree[slot].cursor].clone();
            tree[slot].cursor += 1;
            match index.get(&neighbor) {
                Some(&seen) => tree[slot].others.push(seen),
                None => {
                    descend = Some(neighbor);
                    break;
                }
            }
        }

        match descend {
            Some(neighbor) => {
                let child = tree.len();
                let depth = tree[slot].depth + 1;
                index.insert(neighbor.clone(), child);
                tree.push(Vertex::discovered(Some(neighbor), Some(slot), depth));
                tree[slot].children.push(child);
                to_explore.push(child);
            }
            None => {
                // every neighbour handled: settle the lowpoint before popping out
                let depth = tree[slot].depth;
                let mut lowpoint = tree[slot].others.iter()
                    .map(|other| tree[*other].depth)
                    .fold(depth, usize::min);
                let mut separates = Vec::with_capacity(tree[slot].children.len());
                for child in &tree[slot].children {
                    let child_lowpoint = tree[*child].lowpoint;
                    lowpoint = lowpoint.min(child_lowpoint);
                    separates.push(depth <= child_lowpoint);
                }
                let vertex = &mut tree[slot];
                vertex.lowpoint = lowpoint;
                vertex.separates = separates;
                vertex.pending = Vec::new();
                vertex.others = Vec::new();
                to_explore.pop();
            }
        }
    }

    // second pass: components, starting a new one below every separating edge.
    // The virtual root's own component (its edge to the start) is never numbered.
    let mut membership: Vec<Vec<ComponentId>> = vec![Vec::new(); tree.len()];
    let mut component_count = 0;
    let mut launches: Vec<(usize, Option<ComponentId>)> = vec![(START, None)];
    while let Some((head, component)) = launches.pop() {
        membership[head].extend(component);
        let mut to_visit = vec![head];
        while let Some(slot) = to_visit.pop() {
            for (child, separated) in tree[slot].children.iter().zip(tree[slot].separates.iter()) {
                if *separated {
                    membership[slot].push(component_count);
                    launches.push((*child, Some(component_count)));
                    component_count += 1;
                } else {
                    membership[*child].extend(component);
                    to_visit.push(*child);
                }
            }
        }
    }

    let mut vertices = Vec::with_capacity(tree.len() - 1);
    let mut parents = Vec::with_capacity(tree.len() - 1);
    let mut depths = Vec::with_capacity(tree.len() - 1);
    let mut lowpoints = Vec::with_capacity(tree.len() - 1);
    for vertex in tree.into_iter().skip(START) {
        let Some(key) = vertex.key else {
            continue;
        };
        vertices.push(key);
        parents.push(vertex.parent.filter(|parent| *parent != ROOT).map(|parent| parent - START));
        depths.push(vertex.depth - 1);
        lowpoints.push(vertex.lowpoint - 1);
    }
    let index = index.into_iter().map(|(key, slot)| (key, slot - START)).collect();
    let membership = membership.into_iter().skip(START).collect_vec();

    let articulation_count = membership.iter().filter(|components| components.len() >= 2).count();
    log::debug!("biconnectivity: {} vertices, {} components, {} articulation points",
        vertices.len(), component_count, articulation_count);

    Biconnectivity {
        vertices,
        index,
        parents,
        depths,
        lowpoints,
        membership,
        component_count,
    }
}
