use std::io::{Error, Result};

/// Fails unless all `required` capabilities are in the effective set of the
/// current process.
pub fn check_capabilities(required: &[caps::Capability]) -> Result<()> {
    let effective = caps::read(None, caps::CapSet::Effective)
        .map_err(|e| Error::other(format!("Failed to read capabilities: {e}")))?;
    let missing: Vec<String> = required
        .iter()
        .filter(|cap| !effective.contains(*cap))
        .map(|cap| cap.to_string())
        .collect();
    if missing.is_empty() {
        log::debug!("capabilities present: {required:?}");
        Ok(())
    } else {
        Err(Error::new(
            std::io::ErrorKind::PermissionDenied,
            format!("missing capabilities: {} (run as root or use setcap)", missing.join(", ")),
        ))
    }
}
