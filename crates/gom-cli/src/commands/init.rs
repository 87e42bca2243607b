use std::fs;
use std::path::Path;

use gom_core::{Category, CharacterRecord};

/// The classic roster the original game shipped with.
fn starter_roster() -> Vec<CharacterRecord> {
    let entries: [(&str, Category, &str); 6] = [
        (
            "Leonardo da Vinci",
            Category::Genius,
            "Is a **Genius**. Specifically: he painted the Mona Lisa and filled \
             notebooks with flying machines.",
        ),
        (
            "Giuseppe Garibaldi",
            Category::Freemason,
            "Is a **Freemason**. In fact, he was initiated in 1844 and later \
             served as Grand Master of the Grande Oriente d'Italia.",
        ),
        (
            "Wolfgang Amadeus Mozart",
            Category::Both,
            "Is **Both**. Specifically: a prodigy composer and a member of the \
             Viennese lodge Zur Wohltätigkeit.",
        ),
        (
            "Una Persona Qualunque",
            Category::Common,
            "An ordinary name drawn from the register; no portrait, no lodge, \
             no legacy.",
        ),
        (
            "Galileo Galilei",
            Category::Genius,
            "Is a **Genius**. In fact, he turned a telescope to the sky and \
             changed what counts as a fact.",
        ),
        (
            "Lord Byron",
            Category::Freemason,
            "Is a **Freemason**. Specifically: the poet's name appears in the \
             rolls of a London lodge.",
        ),
    ];

    entries
        .into_iter()
        .map(|(name, category, biography)| CharacterRecord {
            name: name.to_string(),
            category,
            biography: biography.to_string(),
        })
        .collect()
}

pub fn run(dir: &Path) -> Result<(), String> {
    let path = dir.join("characters.json");
    if path.exists() {
        return Err(format!("'{}' already exists", path.display()));
    }

    fs::create_dir_all(dir).map_err(|e| format!("cannot create directory: {e}"))?;

    let json = serde_json::to_string_pretty(&starter_roster())
        .map_err(|e| format!("cannot encode starter catalog: {e}"))?;
    fs::write(&path, json).map_err(|e| format!("cannot write catalog: {e}"))?;

    println!("Created starter catalog at {}", path.display());
    println!();
    println!("Get started:");
    println!("  gom list  --catalog {}", path.display());
    println!("  gom play  --catalog {}", path.display());

    Ok(())
}
