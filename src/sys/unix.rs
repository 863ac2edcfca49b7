use std::os::unix::fs::MetadataExt;

use super::*;

/// Bytes of storage actually allocated to the file at path.
pub fn path_disk_allocation(path: &Path) -> io::Result<u64> {
    let metadata = std::fs::metadata(path)?;
    Ok(metadata.blocks() * 512)
}
