use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use strum::IntoEnumIterator;
use ttrscore::catalog::Catalog;
use ttrscore::scorer::{Category, ScoreItem};
use ttrscore::session::ScoreSession;

pub fn print_catalog(catalog: &Catalog) {
    println!("\nCatalog: {}", catalog.map);
    if catalog.is_empty() {
        println!("⚠️  No options available.");
    }

    print_option_table("Long destinations", &catalog.long_destinations);
    print_option_table("Destinations", &catalog.destinations);
    print_option_table("Roads", &catalog.roads);
    if !catalog.train_stations.is_empty() {
        print_option_table("Train stations", &catalog.train_stations);
    }
}

fn print_option_table(title: &str, items: &[ScoreItem]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new(format!("{} ({})", title, items.len())).add_attribute(Attribute::Bold),
        Cell::new("Points"),
    ]);
    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for item in items {
        table.add_row(vec![Cell::new(item.name()), Cell::new(item.points)]);
    }
    println!("{}", table);
}

pub fn print_scoreboard(session: &ScoreSession) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("Player").add_attribute(Attribute::Bold)];
    header.extend(Category::iter().map(|c| Cell::new(c.to_string())));
    header.push(Cell::new("Longest"));
    header.push(Cell::new("Total").fg(Color::Cyan));
    table.set_header(header);

    for i in 1..=Category::iter().count() + 2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let store = session.store();
    for player in 0..session.player_count() {
        let mut row = vec![Cell::new(format!("Player {}", player + 1))];

        for category in Category::iter() {
            let value = store.contribution(player, category);
            let mut cell = Cell::new(value);
            if category.has_toggle() && store.long_destination_failed(player) {
                cell = cell.fg(Color::Red);
            }
            row.push(cell);
        }

        let bonus = if session.longest_route_holder() == Some(player) {
            session.rules().longest_route_bonus
        } else {
            0
        };
        row.push(Cell::new(bonus));
        row.push(
            Cell::new(format!("Total: {}", session.total_score(player)))
                .add_attribute(Attribute::Bold),
        );
        table.add_row(row);
    }

    println!("\nScores on {}:", session.map());
    println!("{}", table);
}
