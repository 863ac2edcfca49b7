use super::*;

pub fn seek_hole_whence(
    file: &File,
    offset: RegionOffset,
    whence: RegionType,
) -> io::Result<Option<RegionOffset>> {
    let offset = off_io(offset)?;
    let mut output = Vec::with_capacity(1);
    query_allocated_ranges(
        file,
        &[FILE_ALLOCATED_RANGE_BUFFER {
            FileOffset: offset,
            // Invalid parameter if FileOffset+Length > i64::MAX.
            Length: i64::MAX - offset,
        }],
        &mut output,
    )?;
    // The first range returned may start before offset if offset is inside it.
    let next = match (whence, &output[..]) {
        (Hole, [range, ..]) if range.FileOffset <= offset => Some(range.FileOffset + range.Length),
        (Hole, _) => Some(offset),
        (Data, [range, ..]) => Some(range.FileOffset.max(offset)),
        (Data, []) => None,
    };
    Ok(next.map(|some| some as RegionOffset))
}
