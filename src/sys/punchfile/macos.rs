use std::io::Error;

use super::*;

pub fn punchfile(file: &File, offset: u64, length: u64) -> io::Result<()> {
    // APFS wants offset and length aligned to the block size, see min_hole_size.
    let punchhole = libc::fpunchhole_t {
        fp_flags: 0,
        reserved: 0,
        fp_offset: off_io(offset)?,
        fp_length: off_io(length)?,
    };
    let fcntl_res = unsafe { libc::fcntl(file.as_fd().as_raw_fd(), libc::F_PUNCHHOLE, &punchhole) };
    if fcntl_res == -1 {
        return Err(Error::last_os_error());
    }
    Ok(())
}
