use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};
use hitzone::zone::{ZoneMap, PLANE_SIZE};

/// Prints the score grid as an ASCII table, one cell per box. Positive
/// (hit-dominant) scores are red, negative (strike-dominant) blue.
pub fn print_zone_grid(map: &ZoneMap) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for row in &map.cells {
        let cells: Vec<Cell> = row
            .iter()
            .map(|&score| {
                let cell = Cell::new(score).set_alignment(CellAlignment::Center);
                match score.signum() {
                    1 => cell.fg(Color::Red),
                    -1 => cell.fg(Color::Blue),
                    _ => cell,
                }
            })
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}

pub fn print_summary(map: &ZoneMap, hit_count: usize, strike_count: usize) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.add_row(vec![
        Cell::new("Boxes per side").add_attribute(Attribute::Bold),
        Cell::new(map.boxes_per_side),
    ]);
    table.add_row(vec![
        Cell::new("Cell span").add_attribute(Attribute::Bold),
        Cell::new(PLANE_SIZE / map.boxes_per_side),
    ]);
    table.add_row(vec![
        Cell::new("Hits").add_attribute(Attribute::Bold),
        Cell::new(hit_count).fg(Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Strikes").add_attribute(Attribute::Bold),
        Cell::new(strike_count).fg(Color::Blue),
    ]);
    table.add_row(vec![
        Cell::new("Max score").add_attribute(Attribute::Bold),
        Cell::new(map.bounds.max),
    ]);
    table.add_row(vec![
        Cell::new("Min score").add_attribute(Attribute::Bold),
        Cell::new(map.bounds.min),
    ]);
    println!("{}", table);
}
