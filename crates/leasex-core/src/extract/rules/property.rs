//! Property label derived from a document's file name.

use std::path::Path;

/// File name without directory or extension, e.g. `חוזה תובל 22.pdf`
/// becomes `חוזה תובל 22`. Windows separators are honoured on every
/// platform since scanned folders often come from Windows machines.
pub fn property_label(path: impl AsRef<Path>) -> String {
    let raw = path.as_ref().to_string_lossy();
    let base = raw.rsplit(['/', '\\']).next().unwrap_or_default();

    Path::new(base)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| base.to_string())
}
