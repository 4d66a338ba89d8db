use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use mce_catalog::{CatalogEntry, ReferenceData};
use mce_model::{Author, EntryRecord, Labeled, Resolved, Variable};

pub fn print_catalog(catalog: &ReferenceData) {
    if catalog.is_empty() {
        println!("Catalog is empty.");
        return;
    }
    print_entries("Authors", catalog.authors());
    print_entries("Variables", catalog.variables());
    print_entries("Units", catalog.units());
    print_entries("Licenses", catalog.licenses());

    if !catalog.keywords().is_empty() {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Key"), header_cell("Keyword")]);
        apply_table_style(&mut table);
        for (key, label) in catalog.keywords() {
            table.add_row(vec![dim_cell(key), Cell::new(label)]);
        }
        println!("Keywords:");
        println!("{table}");
    }
}

fn print_entries(title: &str, entries: &[CatalogEntry]) {
    if entries.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("ID"), header_cell("Label")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for entry in entries {
        table.add_row(vec![Cell::new(&entry.id), Cell::new(&entry.label)]);
    }
    println!("{title}:");
    println!("{table}");
}

/// Short overview of a finished entry, written next to file output.
pub fn print_entry_summary(record: &EntryRecord, catalog: &ReferenceData) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_summary_table_style(&mut table);
    table.add_row(vec![Cell::new("Title"), Cell::new(&record.title)]);
    table.add_row(vec![
        Cell::new("Author"),
        resolved_cell(&record.author, author_name),
    ]);
    for coauthor in &record.coauthors {
        table.add_row(vec![
            dim_cell("Co-author"),
            resolved_cell(coauthor, author_name),
        ]);
    }
    table.add_row(vec![
        Cell::new("Variable"),
        resolved_cell(&record.variable, variable_name),
    ]);
    let license = record
        .license
        .id
        .as_ref()
        .and_then(|id| catalog.license_label(id))
        .unwrap_or("-");
    table.add_row(vec![Cell::new("License"), Cell::new(license)]);
    table.add_row(vec![Cell::new("Location"), Cell::new(record.location)]);
    table.add_row(vec![
        Cell::new("Embargo"),
        if record.embargo {
            Cell::new("yes").fg(Color::Yellow).add_attribute(Attribute::Bold)
        } else {
            dim_cell("no")
        },
    ]);
    table.add_row(vec![
        Cell::new("Keywords"),
        Cell::new(record.keywords.len()),
    ]);
    table.add_row(vec![Cell::new("Details"), Cell::new(record.details.len())]);
    eprintln!("{table}");
}

fn author_name(author: &Author) -> String {
    author.label()
}

fn variable_name(variable: &Variable) -> String {
    variable.label()
}

fn resolved_cell<T>(resolved: &Resolved<T>, describe: fn(&T) -> String) -> Cell {
    match resolved {
        Resolved::Reference { id } => Cell::new(format!("catalog #{id}")),
        Resolved::Inline(record) => Cell::new(format!("{} (new)", describe(record)))
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(text: T) -> Cell {
    Cell::new(text.to_string()).add_attribute(Attribute::Dim)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
