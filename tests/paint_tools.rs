use pixel_paint::{apply_tool, CanvasError, Color, PixelGrid, ToolState, ToolType};

const RED: Color = Color::rgb(255, 0, 0);
const BLUE: Color = Color::rgb(0, 0, 255);

fn changed_cells(before: &PixelGrid, after: &PixelGrid) -> usize {
    before
        .cells()
        .iter()
        .zip(after.cells())
        .filter(|(a, b)| a != b)
        .count()
}

#[test]
fn test_new_grid_is_empty() {
    let grid = PixelGrid::new(32);
    assert_eq!(grid.dimensions(), 32);
    assert_eq!(grid.cells().len(), 32 * 32);
    assert_eq!(grid.painted_count(), 0);
    assert_eq!(grid.get(31, 31).unwrap(), Color::Empty);
}

#[test]
fn test_largest_grid_is_addressable() {
    let mut grid = PixelGrid::new(PixelGrid::MAX_SIZE);
    let last = PixelGrid::MAX_SIZE as i32 - 1;
    grid.set(last, last, RED).unwrap();
    assert_eq!(grid.get(last, last).unwrap(), RED);
}

#[test]
#[should_panic(expected = "exceeds the maximum")]
fn test_oversized_grid_panics() {
    PixelGrid::new(PixelGrid::MAX_SIZE + 1);
}

#[test]
fn test_grid_range_enforcement() {
    let mut grid = PixelGrid::new(8);
    let before = grid.clone();

    for (x, y) in [(-1, 0), (0, -1), (8, 0), (0, 8), (8, 8)] {
        let expected = Err(CanvasError::OutOfRange { x, y, size: 8 });
        assert_eq!(grid.get(x, y), expected);
        assert_eq!(grid.set(x, y, RED).map(|_| ()), expected.map(|_| ()));
        assert_eq!(grid.clear(x, y).map(|_| ()), expected.map(|_| ()));
    }

    assert_eq!(grid, before);
    assert_eq!(grid.revision(), 0);
}

#[test]
fn test_pencil_sets_exactly_one_cell() {
    let mut grid = PixelGrid::new(8);
    let before = grid.clone();

    apply_tool(&mut grid, 3, 5, ToolType::Pencil, RED).unwrap();

    assert_eq!(grid.get(3, 5).unwrap(), RED);
    assert_eq!(changed_cells(&before, &grid), 1);
}

#[test]
fn test_eraser_clears_exactly_one_cell() {
    let mut grid = PixelGrid::new(4);
    apply_tool(&mut grid, 0, 0, ToolType::Bucket, RED).unwrap();
    let before = grid.clone();

    // The color argument is ignored by the eraser
    apply_tool(&mut grid, 2, 1, ToolType::Eraser, BLUE).unwrap();

    assert_eq!(grid.get(2, 1).unwrap(), Color::Empty);
    assert_eq!(changed_cells(&before, &grid), 1);
}

#[test]
fn test_bucket_delegates_to_fill() {
    let mut grid = PixelGrid::new(4);
    for y in 0..4 {
        apply_tool(&mut grid, 2, y, ToolType::Pencil, RED).unwrap();
    }

    apply_tool(&mut grid, 0, 0, ToolType::Bucket, BLUE).unwrap();

    for y in 0..4 {
        assert_eq!(grid.get(0, y).unwrap(), BLUE);
        assert_eq!(grid.get(1, y).unwrap(), BLUE);
        assert_eq!(grid.get(2, y).unwrap(), RED);
        assert_eq!(grid.get(3, y).unwrap(), Color::Empty);
    }
}

#[test]
fn test_tools_propagate_out_of_range() {
    let mut grid = PixelGrid::new(4);
    for tool in ToolType::ALL {
        assert_eq!(
            apply_tool(&mut grid, 4, 0, tool, RED),
            Err(CanvasError::OutOfRange { x: 4, y: 0, size: 4 })
        );
    }
    assert_eq!(grid.painted_count(), 0);
}

#[test]
fn test_failed_write_does_not_corrupt_later_writes() {
    let mut grid = PixelGrid::new(4);
    apply_tool(&mut grid, 1, 1, ToolType::Pencil, RED).unwrap();
    assert!(apply_tool(&mut grid, -1, 1, ToolType::Pencil, BLUE).is_err());
    apply_tool(&mut grid, 2, 2, ToolType::Pencil, BLUE).unwrap();

    assert_eq!(grid.get(1, 1).unwrap(), RED);
    assert_eq!(grid.get(2, 2).unwrap(), BLUE);
    assert_eq!(grid.painted_count(), 2);
}

#[test]
fn test_switching_tools_keeps_grid_and_ends_drawing() {
    let mut grid = PixelGrid::new(4);
    apply_tool(&mut grid, 1, 1, ToolType::Pencil, RED).unwrap();
    let before = grid.clone();

    let mut state = ToolState::default();
    assert_eq!(state.tool(), ToolType::Pencil);
    state.press();
    state.set_tool(ToolType::Bucket);

    assert_eq!(state.tool(), ToolType::Bucket);
    assert!(!state.is_drawing());
    assert_eq!(grid, before);
}

#[test]
fn test_only_bucket_ignores_drags() {
    assert!(ToolType::Pencil.paints_while_dragging());
    assert!(ToolType::Eraser.paints_while_dragging());
    assert!(!ToolType::Bucket.paints_while_dragging());
}
