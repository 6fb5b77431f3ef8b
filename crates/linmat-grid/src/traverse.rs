use crate::grid::Grid;

/// The order in which a grid is read or written at its boundary.
///
/// Storage inside a [`Grid`] is always row-major; the order only matters when
/// values cross the API boundary (construction, export and traversal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Rows first: `(0,0), (0,1), ..., (1,0), ...`
    #[default]
    RowMajor,
    /// Columns first: `(0,0), (1,0), ..., (0,1), ...`
    ColumnMajor,
}

/// Iterator over the cells of a grid, yielding `(value, row, col)` triples.
///
/// Created by [`Grid::traverse`]. The iterator is finite and cheap to clone, so
/// a traversal can be restarted by cloning it before consumption or by calling
/// [`Grid::traverse`] again.
#[derive(Debug, Clone)]
pub struct Traverse<'a, T> {
    grid: &'a Grid<T>,
    order: Order,
    position: usize,
}

impl<'a, T> Traverse<'a, T> {
    pub(crate) fn new(grid: &'a Grid<T>, order: Order) -> Self {
        Self {
            grid,
            order,
            position: 0,
        }
    }

    /// The order this traversal follows.
    pub fn order(&self) -> Order {
        self.order
    }
}

impl<'a, T> Iterator for Traverse<'a, T> {
    type Item = (&'a T, usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.grid.numel() {
            return None;
        }

        let [rows, cols] = self.grid.shape();
        let (row, col) = match self.order {
            Order::RowMajor => (self.position / cols, self.position % cols),
            Order::ColumnMajor => (self.position % rows, self.position / rows),
        };
        self.position += 1;

        Some((&self.grid[[row, col]], row, col))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.numel().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Traverse<'_, T> {}
