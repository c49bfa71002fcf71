/// Bookkeeping for a depth-first traversal over a fixed number of
/// vertices. An excluded vertex is never entered and is not required
/// to be visited for the traversal to be complete.
#[derive(Default, Debug, Clone)]
pub struct State {
    pub visited: Vec<bool>,
    pub order: Vec<usize>,
    pub excluded: Option<usize>,
}

impl State {
    pub fn initialize(num_vertices: usize, excluded: Option<usize>) -> State {
        State {
            visited: vec![false; num_vertices],
            order: Vec::with_capacity(num_vertices),
            excluded,
        }
    }

    /// Marks `v` as visited. Returns false if `v` was already visited
    /// or is the excluded vertex.
    pub fn visit(&mut self, v: usize) -> bool {
        if self.visited[v] || self.is_excluded(v) {
            false
        } else {
            self.visited[v] = true;
            self.order.push(v);
            true
        }
    }

    pub fn is_excluded(&self, v: usize) -> bool {
        self.excluded == Some(v)
    }

    pub fn is_visited(&self, v: usize) -> bool {
        self.visited[v]
    }

    /// The lowest vertex that is neither visited nor excluded
    pub fn first_unvisited(&self) -> Option<usize> {
        (0..self.visited.len())
            .find(|&v| !self.visited[v] && !self.is_excluded(v))
    }

    /// True if every vertex, save the excluded one, has been visited
    pub fn all_visited(&self) -> bool {
        self.first_unvisited().is_none()
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }
}
