//! Windows specific APIs

use std::mem::{size_of, size_of_val};

use super::*;

type AllocatedRanges = Vec<FILE_ALLOCATED_RANGE_BUFFER>;

/// Fills output with the allocated ranges of file that intersect the input range. Output's
/// capacity bounds how many ranges are returned.
pub fn query_allocated_ranges(
    file: &File,
    input: &[FILE_ALLOCATED_RANGE_BUFFER],
    output: &mut AllocatedRanges,
) -> io::Result<()> {
    let handle = std_handle_to_windows(file.as_raw_handle());
    output.clear();
    let mut bytes_returned: u32 = 0;
    let res = unsafe {
        DeviceIoControl(
            handle,
            FSCTL_QUERY_ALLOCATED_RANGES,
            Some(input.as_ptr() as _),
            size_of_val(input) as u32,
            Some(output.as_mut_ptr() as _),
            (output.capacity() * size_of::<FILE_ALLOCATED_RANGE_BUFFER>()) as u32,
            Some(&mut bytes_returned as *mut _),
            None,
        )
    };
    // ERROR_MORE_DATA still fills the buffer, and the caller only asked for that many.
    if let Err(err) = res {
        if err.code() != ERROR_MORE_DATA.to_hresult() {
            return Err(err.into());
        }
    }
    let out_len = bytes_returned as usize / size_of::<FILE_ALLOCATED_RANGE_BUFFER>();
    unsafe { output.set_len(out_len) };
    Ok(())
}

pub fn std_handle_to_windows(std: std::os::windows::io::RawHandle) -> HANDLE {
    HANDLE(std as isize)
}

pub fn file_disk_allocation(file: &File) -> io::Result<u64> {
    let handle = std_handle_to_windows(file.as_raw_handle());
    let mut stream_info: FILE_STREAM_INFO = Default::default();
    unsafe {
        GetFileInformationByHandleEx(
            handle,
            FileStreamInfo,
            &mut stream_info as *mut _ as _,
            size_of_val(&stream_info) as u32,
        )
    }?;
    Ok(stream_info.StreamAllocationSize as u64)
}

/// Bytes of storage actually allocated to the file at path.
pub fn path_disk_allocation(path: &Path) -> io::Result<u64> {
    file_disk_allocation(&File::open(path)?)
}
