use crate::upload::types::SelectedFile;

/// Merges newly picked files into the queue, keyed by file name. The first
/// occurrence of a name wins; later picks with the same name are dropped.
/// Insertion order is preserved for display.
pub fn merge_by_name(queue: Vec<SelectedFile>, picked: Vec<SelectedFile>) -> Vec<SelectedFile> {
    let mut merged = queue;
    for file in picked {
        if merged.iter().any(|queued| queued.name == file.name) {
            continue;
        }
        merged.push(file);
    }
    merged
}
