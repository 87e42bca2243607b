pub mod check;
pub mod init;
pub mod list;
pub mod play;

use std::path::Path;

use gom_core::Catalog;

/// Load a catalog, mapping every failure to the user-visible
/// "no characters available" treatment.
fn load_catalog(path: &Path) -> Result<Catalog, String> {
    Catalog::load(path).map_err(|e| format!("no characters available ({e})"))
}
