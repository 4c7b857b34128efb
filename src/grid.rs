use std::{
    fmt::{self, Display},
    iter,
    ops::{Index, IndexMut},
    sync::Arc,
};

use memchr::memchr_iter;

use crate::{
    bounds::Bounds,
    error::{Error, Result},
    pathfinding::Graph,
    vector2::Vector2Int,
};

/// A grid cell: where it is and what it holds.
#[derive(Debug)]
pub struct Node<'a, T> {
    pub pos: Vector2Int,
    pub value: &'a T,
}

impl<T> Clone for Node<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Node<'_, T> {}

/// Estimate used by [`a_star`](crate::pathfinding::a_star) on a [`Grid`]. The scale has to match
/// the magnitude of the grid's cell costs, e.g. `Euclidean(10)` with the default cost of 10, or
/// `Manhattan(1)` with unit costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    Zero,
    Manhattan(u32),
    Chebyshev(u32),
    Euclidean(u32),
}

impl Default for Heuristic {
    fn default() -> Self {
        Self::Euclidean(DEFAULT_COST)
    }
}

impl Heuristic {
    pub fn estimate(self, from: Vector2Int, to: Vector2Int) -> u32 {
        match self {
            Self::Zero => 0,
            Self::Manhattan(scale) => {
                scale.saturating_mul(from.distance_manhattan(to).unsigned_abs())
            }
            Self::Chebyshev(scale) => {
                scale.saturating_mul(from.distance_chebyshev(to).unsigned_abs())
            }
            Self::Euclidean(scale) => {
                (f64::from(scale) * from.distance_euclidean(to)).round_ties_even() as u32
            }
        }
    }
}

const DEFAULT_COST: u32 = 10;

type NeighborCheck<T> = Arc<dyn Fn(Node<'_, T>, Node<'_, T>) -> bool + Send + Sync>;
type CostFn<T> = Arc<dyn Fn(Node<'_, T>) -> u32 + Send + Sync>;

/// Rectangular row-major grid. Positions are `Vector2Int { x: row, y: column }`.
///
/// Besides storage the grid decides connectivity for searches: which directions count as
/// neighbours, an extra predicate on `(node, candidate)` pairs, the cost of entering a cell and
/// the heuristic.
#[derive(Clone)]
pub struct Grid<T> {
    cells: Vec<T>,
    rows: usize,
    cols: usize,
    neighbor_directions: Vec<Vector2Int>,
    neighbor_check: NeighborCheck<T>,
    cost: CostFn<T>,
    heuristic: Heuristic,
}

fn always_connected<T>(_: Node<'_, T>, _: Node<'_, T>) -> bool {
    true
}

fn default_cost<T>(_: Node<'_, T>) -> u32 {
    DEFAULT_COST
}

impl<T: 'static> Grid<T> {
    fn from_cells(cells: Vec<T>, rows: usize, cols: usize) -> Self {
        Self {
            cells,
            rows,
            cols,
            neighbor_directions: Vector2Int::CARDINAL.to_vec(),
            neighbor_check: Arc::new(always_connected::<T>),
            cost: Arc::new(default_cost::<T>),
            heuristic: Heuristic::default(),
        }
    }

    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(Error::EmptyGrid);
        }
        let height = rows.len();
        let mut cells = Vec::with_capacity(height * cols);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != cols {
                return Err(Error::RaggedRows {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }
        Ok(Self::from_cells(cells, height, cols))
    }

    /// Maps every character of every non-empty line.
    pub fn parse_with<F>(input: &str, mut f: F) -> Result<Self>
    where
        F: FnMut(char) -> Result<T>,
    {
        let rows = input
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().map(&mut f).collect::<Result<Vec<_>>>())
            .collect::<Result<Vec<_>>>()?;
        Self::from_rows(rows)
    }

    pub fn with_neighbor_directions(mut self, directions: &[Vector2Int]) -> Self {
        self.neighbor_directions = directions.to_vec();
        self
    }

    /// Extra connectivity constraint. Receives the current node first and the prospective
    /// neighbour second.
    pub fn with_neighbor_check<F>(mut self, check: F) -> Self
    where
        F: Fn(Node<'_, T>, Node<'_, T>) -> bool + Send + Sync + 'static,
    {
        self.neighbor_check = Arc::new(check);
        self
    }

    /// Cost of entering a cell.
    pub fn with_cost<F>(mut self, cost: F) -> Self
    where
        F: Fn(Node<'_, T>) -> u32 + Send + Sync + 'static,
    {
        self.cost = Arc::new(cost);
        self
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }
}

impl<T> Grid<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(0, self.rows as i32 - 1, 0, self.cols as i32 - 1)
    }

    pub fn contains(&self, pos: Vector2Int) -> bool {
        self.offset(pos).is_some()
    }

    fn offset(&self, pos: Vector2Int) -> Option<usize> {
        let row = usize::try_from(pos.x).ok().filter(|&r| r < self.rows)?;
        let col = usize::try_from(pos.y).ok().filter(|&c| c < self.cols)?;
        Some(row * self.cols + col)
    }

    pub fn get(&self, pos: Vector2Int) -> Option<&T> {
        self.offset(pos).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, pos: Vector2Int) -> Option<&mut T> {
        self.offset(pos).map(|i| &mut self.cells[i])
    }

    pub fn node(&self, pos: Vector2Int) -> Option<Node<'_, T>> {
        self.get(pos).map(|value| Node { pos, value })
    }

    pub fn positions(&self) -> impl Iterator<Item = Vector2Int> {
        let cols = self.cols as i32;
        (0..self.rows as i32).flat_map(move |row| (0..cols).map(move |col| Vector2Int::new(row, col)))
    }

    pub fn iter(&self) -> impl Iterator<Item = Node<'_, T>> {
        self.positions()
            .zip(&self.cells)
            .map(|(pos, value)| Node { pos, value })
    }

    pub fn find<P>(&self, mut predicate: P) -> Option<Vector2Int>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|node| predicate(node.value)).map(|node| node.pos)
    }

    /// Connected neighbours of `pos`, in direction order. Empty when `pos` lies outside the grid.
    pub fn neighbors_of(&self, pos: Vector2Int) -> impl Iterator<Item = Node<'_, T>> {
        let origin = self.node(pos);
        origin
            .into_iter()
            .flat_map(move |node| {
                self.neighbor_directions
                    .iter()
                    .filter_map(move |&dir| self.node(node.pos + dir))
                    .filter(move |&neighbor| (self.neighbor_check)(node, neighbor))
            })
    }

    pub fn cost_of(&self, node: Node<'_, T>) -> u32 {
        (self.cost)(node)
    }
}

impl Grid<char> {
    pub fn parse_chars(input: &str) -> Result<Self> {
        Self::parse_with(input, Ok)
    }
}

impl Grid<u8> {
    /// Raw byte grid. Line breaks may be `\n` or `\r\n`, empty lines are skipped.
    pub fn from_bytes(input: &[u8]) -> Result<Self> {
        let mut cells = Vec::with_capacity(input.len());
        let mut rows = 0;
        let mut cols = None;
        let mut start = 0;
        for end in memchr_iter(b'\n', input).chain(iter::once(input.len())) {
            let line = &input[start..end];
            start = end + 1;
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            if line.is_empty() {
                continue;
            }
            match cols {
                None => cols = Some(line.len()),
                Some(expected) if expected != line.len() => {
                    return Err(Error::RaggedRows {
                        row: rows,
                        expected,
                        found: line.len(),
                    })
                }
                Some(_) => {}
            }
            cells.extend_from_slice(line);
            rows += 1;
        }
        let cols = cols.ok_or(Error::EmptyGrid)?;
        Ok(Self::from_cells(cells, rows, cols))
    }
}

impl<T> Graph for Grid<T> {
    type Node = Vector2Int;

    fn neighbors(&self, node: Vector2Int) -> impl Iterator<Item = (Vector2Int, u32)> {
        self.neighbors_of(node)
            .map(move |neighbor| (neighbor.pos, self.cost_of(neighbor)))
    }

    fn heuristic(&self, from: Vector2Int, to: Vector2Int) -> u32 {
        self.heuristic.estimate(from, to)
    }
}

impl<T> Index<Vector2Int> for Grid<T> {
    type Output = T;

    fn index(&self, pos: Vector2Int) -> &T {
        match self.offset(pos) {
            Some(i) => &self.cells[i],
            None => panic!("{pos} is outside of the {}x{} grid", self.rows, self.cols),
        }
    }
}

impl<T> IndexMut<Vector2Int> for Grid<T> {
    fn index_mut(&mut self, pos: Vector2Int) -> &mut T {
        match self.offset(pos) {
            Some(i) => &mut self.cells[i],
            None => panic!("{pos} is outside of the {}x{} grid", self.rows, self.cols),
        }
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.rows, "row {row} is outside of the grid");
        assert!(col < self.cols, "column {col} is outside of the grid");
        &self.cells[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(row < self.rows, "row {row} is outside of the grid");
        assert!(col < self.cols, "column {col} is outside of the grid");
        &mut self.cells[row * self.cols + col]
    }
}

impl<T: fmt::Debug> fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("cells", &self.cells)
            .field("neighbor_directions", &self.neighbor_directions)
            .field("heuristic", &self.heuristic)
            .finish_non_exhaustive()
    }
}

impl<T: Display> Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for value in row {
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}
