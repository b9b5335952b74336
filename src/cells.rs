use image::Rgba;

/// A recorded grid cell and the color it was painted with.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PaintedCell {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    color: Rgba<u8>,
}

impl PaintedCell {
    pub fn new(x: u32, y: u32, width: u32, height: u32, color: Rgba<u8>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            color,
        }
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn color(&self) -> Rgba<u8> {
        self.color
    }

    pub fn set_color(&mut self, color: Rgba<u8>) {
        self.color = color;
    }

    #[cfg(test)]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Append-only list of painted cells, oldest first.
///
/// Cells are never removed or merged. Repainting a cell pushes another entry,
/// and rendering in insertion order makes the most recent paint win.
// TODO: switch to a map keyed by grid coordinate if long sessions make
// redraws slow; that needs `color_at` semantics preserved.
#[derive(Clone, Default)]
pub struct CellStore {
    cells: Vec<PaintedCell>,
}

impl CellStore {
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    pub fn push(&mut self, cell: PaintedCell) {
        self.cells.push(cell);
    }

    pub fn iter(&self) -> impl Iterator<Item = &PaintedCell> {
        self.cells.iter()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Color of the most recent cell covering the pixel, if any.
    #[cfg(test)]
    pub fn color_at(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.cells
            .iter()
            .rev()
            .find(|cell| cell.contains(x, y))
            .map(PaintedCell::color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    #[test]
    fn test_push_keeps_insertion_order() {
        let mut store = CellStore::new();
        assert!(store.is_empty());
        store.push(PaintedCell::new(0, 0, 25, 25, RED));
        store.push(PaintedCell::new(25, 0, 25, 25, BLUE));
        store.push(PaintedCell::new(0, 0, 25, 25, BLUE));

        let xs: Vec<u32> = store.iter().map(|c| c.x()).collect();
        assert_eq!(xs, vec![0, 25, 0]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_latest_paint_wins() {
        let mut store = CellStore::new();
        store.push(PaintedCell::new(0, 0, 25, 25, RED));
        store.push(PaintedCell::new(0, 0, 25, 25, BLUE));
        assert_eq!(store.color_at(10, 10), Some(BLUE));
        assert_eq!(store.color_at(25, 10), None);
    }

    #[test]
    fn test_cell_bounds_are_half_open() {
        let cell = PaintedCell::new(25, 50, 25, 25, RED);
        assert!(cell.contains(25, 50));
        assert!(cell.contains(49, 74));
        assert!(!cell.contains(50, 50));
        assert!(!cell.contains(25, 75));
    }

    #[test]
    fn test_set_color() {
        let mut cell = PaintedCell::new(0, 0, 25, 25, RED);
        cell.set_color(BLUE);
        assert_eq!(cell.color(), BLUE);
    }
}
