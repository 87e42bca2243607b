use std::path::Path;

pub fn run(catalog_path: &Path) -> Result<(), String> {
    let catalog = super::load_catalog(catalog_path)?;

    println!("  Catalog '{}' is valid.", catalog_path.display());
    println!();
    println!("  {} characters", catalog.len());
    for (category, count) in catalog.counts_by_category() {
        println!("    {count:>4} {}", category.label());
    }

    if catalog.is_empty() {
        println!();
        println!("  Note: an empty catalog loads, but there is nothing to play.");
    }

    Ok(())
}
