use std::os::unix::fs::MetadataExt;

use super::*;

/// Recommended minimum hole size for sparse files for an open file. There's no _PC_MIN_HOLE_SIZE
/// here, the preferred I/O block size is the closest thing.
pub fn min_hole_size(file: &File) -> io::Result<u64> {
    Ok(file.metadata()?.blksize())
}

pub fn path_min_hole_size(path: &Path) -> io::Result<u64> {
    Ok(std::fs::metadata(path)?.blksize())
}
