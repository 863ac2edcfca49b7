use super::*;

pub fn punchfile(file: &File, offset: u64, length: u64) -> io::Result<()> {
    let handle = std_handle_to_windows(file.as_raw_handle());
    let end = offset.checked_add(length).ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "punch range end overflows")
    })?;
    // FILE_ZERO_DATA_INFORMATION_EX exists but it's for drivers.
    let input = FILE_ZERO_DATA_INFORMATION {
        FileOffset: off_io(offset)?,
        BeyondFinalZero: off_io(end)?,
    };
    let mut bytes_returned: u32 = 0;
    unsafe {
        DeviceIoControl(
            handle,
            FSCTL_SET_ZERO_DATA,
            Some(&input as *const _ as _),
            std::mem::size_of_val(&input) as u32,
            None,
            0,
            Some(&mut bytes_returned as *mut u32),
            None,
        )
    }?;
    Ok(())
}

pub fn set_file_sparse(file: &File, set_sparse: bool) -> io::Result<()> {
    let handle = std_handle_to_windows(file.as_raw_handle());
    let input = FILE_SET_SPARSE_BUFFER {
        SetSparse: set_sparse.into(),
    };
    let mut bytes_returned: u32 = 0;
    unsafe {
        DeviceIoControl(
            handle,
            FSCTL_SET_SPARSE,
            Some(&input as *const _ as _),
            std::mem::size_of_val(&input) as u32,
            None,
            0,
            Some(&mut bytes_returned as *mut u32),
            None,
        )
    }?;
    Ok(())
}

impl SparseFile for File {
    fn set_sparse(&self, set_sparse: bool) -> io::Result<()> {
        set_file_sparse(self, set_sparse)
    }
}
