//! Grid module - recursive grid-of-grids layout
//!
//! The play area is a self-similar maze: a `size × size` grid whose cells each
//! hold another `size × size` grid, repeated [`GridSize::recursion_depth`]
//! times. Small sizes get many fine levels, large sizes get few coarse ones,
//! so every difficulty lands on a comparable visual density.
//!
//! The tree is pure data. Rendering it is the terminal layer's job.

use crate::types::GridSize;

/// One cell of a grid. Owns at most one nested grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    child: Option<Box<GridNode>>,
}

impl Cell {
    pub fn child(&self) -> Option<&GridNode> {
        self.child.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.child.is_none()
    }
}

/// A `size × size` grid container, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridNode {
    size: GridSize,
    rows: Vec<Vec<Cell>>,
}

impl GridNode {
    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flat_map(|row| row.iter())
    }

    fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.rows.iter_mut().flat_map(|row| row.iter_mut())
    }

    /// Number of nested levels below this node (0 for a flat grid).
    pub fn depth(&self) -> u32 {
        self.cells()
            .filter_map(Cell::child)
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Deepest-level leaf cells, i.e. the working set a further subdivision
    /// round would start from.
    pub fn leaves(&self) -> Vec<&Cell> {
        let mut level: Vec<&Cell> = self.cells().collect();
        loop {
            let next: Vec<&Cell> = level
                .iter()
                .filter_map(|cell| cell.child())
                .flat_map(GridNode::cells)
                .collect();
            if next.is_empty() {
                return level;
            }
            level = next;
        }
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves().len()
    }

    /// Total grid containers in the tree, this one included.
    pub fn node_count(&self) -> usize {
        1 + self
            .cells()
            .filter_map(Cell::child)
            .map(GridNode::node_count)
            .sum::<usize>()
    }
}

/// Create a single flat grid with `size` rows of `size` empty cells.
pub fn create_grid(size: GridSize) -> GridNode {
    let n = size.dimension();
    let rows = (0..n).map(|_| vec![Cell::default(); n]).collect();
    GridNode { size, rows }
}

/// Build the full nested layout for a difficulty level.
///
/// Works breadth-first: each round gives every cell of the previous round a
/// fresh sub-grid and collects the new cells as the next round's working set.
pub fn build_grid_layer(size: GridSize) -> GridNode {
    let levels = size.recursion_depth();
    let mut root = create_grid(size);

    {
        let mut frontier: Vec<&mut Cell> = root.cells_mut().collect();
        for _ in 0..levels {
            let per_grid = size.dimension() * size.dimension();
            let mut next = Vec::with_capacity(frontier.len() * per_grid);
            for cell in frontier {
                let sub_grid = cell.child.insert(Box::new(create_grid(size)));
                next.extend(sub_grid.cells_mut());
            }
            frontier = next;
        }
    }

    root
}
