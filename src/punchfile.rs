//! The hole punching capability: a handle that is either a working platform implementation or
//! absent, resolved once per process.

use num::Integer;
use once_cell::sync::Lazy;
use tracing::debug;

use super::*;

/// Deallocates the storage backing `[offset, offset+length)` of a file opened for writing. The
/// file keeps its size and the range reads back as zeroes.
pub type PunchFn = fn(file: &File, offset: u64, length: u64) -> io::Result<()>;

static PUNCH_HOLE: Lazy<Option<PunchFn>> = Lazy::new(|| {
    if env::punching_disabled() {
        debug!("hole punching disabled by {}", env::DISABLE_VAR);
        return None;
    }
    debug!(available = sys::PUNCHFILE.is_some(), "resolved hole punching");
    sys::PUNCHFILE
});

/// Returns the hole punching implementation for this platform, or None if there isn't one or
/// `PUNCHHOLE_DISABLE` was set when this was first called. The result is fixed for the life of
/// the process.
pub fn punch_hole() -> Option<PunchFn> {
    *PUNCH_HOLE
}

pub fn punch_supported() -> bool {
    punch_hole().is_some()
}

/// Punches a hole, treating a missing implementation as an error.
pub fn try_punch(file: &File, offset: u64, length: u64) -> PubResult<()> {
    let punch = punch_hole().ok_or(Error::Unsupported)?;
    punch(file, offset, length)?;
    Ok(())
}

/// Shrinks `[offset, offset+length)` inward to the largest range with both ends on a multiple of
/// `block_size`. Returns (offset, length) or None if nothing aligned remains.
pub fn aligned_range(offset: u64, length: u64, block_size: u64) -> Option<(u64, u64)> {
    assert_ne!(block_size, 0);
    let end = offset.saturating_add(length);
    if offset > u64::MAX - (block_size - 1) {
        return None;
    }
    let start = ceil_multiple(offset, block_size);
    let end = floored_multiple(end, block_size);
    if end <= start {
        return None;
    }
    Some((start, end - start))
}

fn floored_multiple<T>(value: T, multiple: T) -> T
where
    T: Integer + Copy,
{
    multiple * (value / multiple)
}

fn ceil_multiple<T>(value: T, multiple: T) -> T
where
    T: Integer + Copy,
{
    (value + multiple - T::one()) / multiple * multiple
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test;

    #[test]
    fn aligned_ranges() {
        assert_eq!(aligned_range(0, 8192, 4096), Some((0, 8192)));
        assert_eq!(aligned_range(1, 8192, 4096), Some((4096, 4096)));
        assert_eq!(aligned_range(31, 31, 4096), None);
        assert_eq!(aligned_range(4095, 4098, 4096), Some((4096, 4096)));
        assert_eq!(aligned_range(0, 0, 1), None);
        assert_eq!(aligned_range(31, 31, 1), Some((31, 31)));
        assert_eq!(aligned_range(u64::MAX - 1, 10, 4096), None);
    }

    #[test]
    fn capability_is_stable() {
        let first = punch_hole().map(|f| f as usize);
        for _ in 0..3 {
            assert_eq!(punch_hole().map(|f| f as usize), first);
        }
        assert_eq!(punch_supported(), first.is_some());
    }

    #[test]
    fn try_punch_follows_capability() -> anyhow::Result<()> {
        let temp_file = tempfile::NamedTempFile::new()?;
        let file = temp_file.as_file();
        file.set_len(2)?;
        match try_punch(file, 0, 1) {
            Err(Error::Unsupported) => assert!(!punch_supported()),
            // Some filesystems don't do holes, that's still a resolved capability.
            Ok(()) | Err(Error::Io(_)) => assert!(punch_supported()),
            Err(err) => panic!("unexpected error: {}", err),
        }
        Ok(())
    }
}
