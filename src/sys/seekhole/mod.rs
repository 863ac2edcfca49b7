//! Hole seeking ( ͡° ͜ʖ ͡°). Lists the hole and data regions of a file, which is how a punch can be
//! checked from the storage side rather than by reading zeroes back.

pub use RegionType::*;

use super::*;

cfg_if! {
    if #[cfg(unix)] {
        mod unix;
        pub use self::unix::*;
    } else if #[cfg(windows)] {
        mod windows;
        pub use self::windows::*;
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RegionType {
    Hole,
    Data,
}

impl std::ops::Not for RegionType {
    type Output = RegionType;

    fn not(self) -> Self::Output {
        match self {
            Hole => Data,
            Data => Hole,
        }
    }
}

pub type RegionOffset = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub region_type: RegionType,
    pub start: RegionOffset,
    pub end: RegionOffset,
}

impl Region {
    pub fn length(&self) -> RegionOffset {
        self.end - self.start
    }
}

pub fn file_regions(file: &File) -> io::Result<Vec<Region>> {
    Iter::new(file).collect()
}

pub struct Iter<'a> {
    last_whence: RegionType,
    offset: RegionOffset,
    file: &'a File,
}

impl<'a> Iter<'a> {
    pub fn new(file: &'a File) -> Self {
        Self {
            // We want to start with whatever will most likely result in a positive seek on the
            // first next. Most files start with Data.
            last_whence: Data,
            offset: 0,
            file,
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = io::Result<Region>;

    // There's no final state. It's valid for an iterator to start working again if the file
    // changes.
    fn next(&mut self) -> Option<Self::Item> {
        let first_whence = !self.last_whence;
        let mut whence = first_whence;
        // This only runs twice. Once with each whence, starting with the one we didn't try last.
        loop {
            match seek_hole_whence(self.file, self.offset, whence) {
                Ok(Some(offset)) if offset != self.offset => {
                    let region = Region {
                        region_type: !whence,
                        start: self.offset,
                        end: offset,
                    };
                    self.last_whence = whence;
                    self.offset = offset;
                    return Some(Ok(region));
                }
                Err(err) => return Some(Err(err)),
                Ok(None | Some(_)) => {}
            }
            whence = !whence;
            if whence == first_whence {
                break;
            }
        }
        // Both whences failed to move the offset. If a file ends in data, SEEK_HOLE will always
        // get to the end, but if it ends in a hole, SEEK_HOLE will get stuck. The file size
        // progresses past a final hole.
        match self.file.metadata() {
            Err(err) => Some(Err(err)),
            Ok(metadata) => {
                let end = metadata.len();
                if end <= self.offset {
                    None
                } else {
                    let region = Region {
                        region_type: Hole,
                        start: self.offset,
                        end,
                    };
                    // At the end of the file, further successful seeks most likely mean new
                    // data, so try SEEK_DATA first.
                    self.last_whence = Hole;
                    self.offset = end;
                    Some(Ok(region))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test;
    use crate::testing::write_random_tempfile;

    #[test]
    fn all_data() -> anyhow::Result<()> {
        let temp_file = write_random_tempfile(3000)?;
        assert_eq!(
            file_regions(temp_file.as_file())?,
            vec![Region {
                region_type: Data,
                start: 0,
                end: 3000
            }]
        );
        Ok(())
    }

    #[test]
    fn empty_file() -> anyhow::Result<()> {
        let temp_file = tempfile::NamedTempFile::new()?;
        assert_eq!(file_regions(temp_file.as_file())?, vec![]);
        Ok(())
    }

    #[test]
    fn just_a_hole() -> anyhow::Result<()> {
        let Some(punch) = crate::punch_hole() else {
            return Ok(());
        };
        let mut min_hole_size = path_min_hole_size(&std::env::temp_dir())?;
        if min_hole_size <= 1 {
            min_hole_size = 2;
        }
        let temp_file = write_random_tempfile(2 * min_hole_size)?;
        let file = temp_file.as_file();
        file.set_sparse(true)?;
        punch(file, 0, min_hole_size)?;
        assert_eq!(
            file_regions(file)?,
            vec![
                Region {
                    region_type: Hole,
                    start: 0,
                    end: min_hole_size
                },
                Region {
                    region_type: Data,
                    start: min_hole_size,
                    end: 2 * min_hole_size,
                }
            ]
        );
        Ok(())
    }
}
