//! Operand normalisation.

use std::path::{Path, PathBuf};

/// Normalises a path operand before it is queued.
///
/// Trailing separators are dropped so `Déjà/` names the directory `Déjà`
/// itself, and the final segment can be transliterated. Bare roots such as
/// `/` are kept as they are.
///
/// ```
/// use std::path::{Path, PathBuf};
/// use engine::normalize_operand;
///
/// assert_eq!(normalize_operand(Path::new("Déjà/")), PathBuf::from("Déjà"));
/// assert_eq!(normalize_operand(Path::new("/")), PathBuf::from("/"));
/// ```
#[must_use]
pub fn normalize_operand(operand: &Path) -> PathBuf {
    let trimmed: PathBuf = operand.components().collect();
    if trimmed.as_os_str().is_empty() {
        return operand.to_path_buf();
    }
    trimmed
}
