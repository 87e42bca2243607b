use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(catalog_path: &Path) -> Result<(), String> {
    let catalog = super::load_catalog(catalog_path)?;

    if catalog.is_empty() {
        println!("  The catalog is empty.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Category"]);

    for character in catalog.characters() {
        table.add_row(vec![
            character.id.to_string(),
            character.name.clone(),
            character.category.label().to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} characters", catalog.len());

    Ok(())
}
