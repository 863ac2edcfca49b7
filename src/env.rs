use once_cell::sync::OnceCell;

pub(crate) const DISABLE_VAR: &str = "PUNCHHOLE_DISABLE";

/// Pretend this platform has no hole punching. Read once, like the capability it feeds.
pub(crate) fn punching_disabled() -> bool {
    static CELL: OnceCell<bool> = OnceCell::new();
    *CELL.get_or_init(|| {
        !matches!(
            std::env::var(DISABLE_VAR),
            Err(std::env::VarError::NotPresent)
        )
    })
}
