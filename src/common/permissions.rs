use std::fs::{Metadata, Permissions};
use std::path::Path;
use tracing::debug;

use super::errors::WritabilityError;

/// Predict whether `try_make_writable` would succeed, without touching the file
pub fn check_writable(path: &Path) -> Result<(), WritabilityError> {
    let meta = read_metadata(path)?;
    if can_change_mode(&meta) {
        Ok(())
    } else {
        Err(WritabilityError::NotOwner)
    }
}

/// Make sure the file exists and carries the user-write permission
///
/// Files the current user may not chmod are rejected even when their mode
/// already allows writing. Files that are already writable are left untouched.
pub fn try_make_writable(path: &Path) -> Result<(), WritabilityError> {
    let meta = read_metadata(path)?;
    if !can_change_mode(&meta) {
        return Err(WritabilityError::NotOwner);
    }
    if is_user_writable(&meta) {
        return Ok(());
    }

    std::fs::set_permissions(path, with_user_write(meta.permissions()))
        .map_err(WritabilityError::Denied)?;
    debug!("made writable: {}", path.display());
    Ok(())
}

/// Hint shown after a batch with permission failures
pub fn permission_hint() -> &'static str {
    if cfg!(windows) {
        "If permission errors persist, close programs using these files or run as Administrator."
    } else {
        "If permission errors persist, check file ownership or re-run with sudo."
    }
}

fn read_metadata(path: &Path) -> Result<Metadata, WritabilityError> {
    std::fs::metadata(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => WritabilityError::Missing,
        _ => WritabilityError::Denied(e),
    })
}

#[cfg(unix)]
fn is_user_writable(meta: &Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o200 != 0
}

#[cfg(not(unix))]
fn is_user_writable(meta: &Metadata) -> bool {
    !meta.permissions().readonly()
}

#[cfg(unix)]
fn with_user_write(mut perms: Permissions) -> Permissions {
    use std::os::unix::fs::PermissionsExt;
    perms.set_mode(perms.mode() | 0o200);
    perms
}

#[cfg(not(unix))]
#[allow(clippy::permissions_set_readonly_false)]
fn with_user_write(mut perms: Permissions) -> Permissions {
    perms.set_readonly(false);
    perms
}

#[cfg(unix)]
fn can_change_mode(meta: &Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;
    owner_may_chmod(meta.uid(), current_euid())
}

/// Only the owner (or root) may chmod a file
#[cfg(unix)]
fn owner_may_chmod(owner: u32, euid: u32) -> bool {
    euid == 0 || euid == owner
}

#[cfg(unix)]
fn current_euid() -> u32 {
    unsafe { libc::geteuid() }
}

#[cfg(not(unix))]
fn can_change_mode(_meta: &Metadata) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("gone(1).txt");
        assert!(matches!(check_writable(&path), Err(WritabilityError::Missing)));
        assert!(matches!(try_make_writable(&path), Err(WritabilityError::Missing)));
    }

    #[test]
    fn test_writable_file_untouched() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("a(1).txt");
        std::fs::write(&path, "x").unwrap();
        let before = std::fs::metadata(&path).unwrap().permissions();

        assert!(check_writable(&path).is_ok());
        assert!(try_make_writable(&path).is_ok());
        assert_eq!(std::fs::metadata(&path).unwrap().permissions(), before);
    }

    #[test]
    fn test_readonly_own_file_becomes_writable() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("a(2).txt");
        std::fs::write(&path, "x").unwrap();
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_readonly(true);
        std::fs::set_permissions(&path, perms).unwrap();

        assert!(check_writable(&path).is_ok());
        try_make_writable(&path).unwrap();
        assert!(is_user_writable(&std::fs::metadata(&path).unwrap()));
    }

    #[cfg(unix)]
    #[test]
    fn test_owner_may_chmod() {
        assert!(owner_may_chmod(1000, 1000));
        assert!(owner_may_chmod(1000, 0));
        assert!(!owner_may_chmod(0, 65534));
        assert!(!owner_may_chmod(1000, 1001));
    }

    /// A file owned by someone else is refused before any chmod is tried
    #[cfg(unix)]
    #[test]
    fn test_foreign_file_is_not_owner() {
        use std::os::unix::fs::MetadataExt;

        let foreign = Path::new("/etc/passwd");
        let Ok(meta) = std::fs::metadata(foreign) else {
            return;
        };
        if current_euid() == 0 || meta.uid() == current_euid() {
            return;
        }
        let before = meta.permissions();

        assert!(matches!(check_writable(foreign), Err(WritabilityError::NotOwner)));
        assert!(matches!(try_make_writable(foreign), Err(WritabilityError::NotOwner)));
        assert_eq!(std::fs::metadata(foreign).unwrap().permissions(), before);
    }
}
