//! Label lookup for values that arrive as untyped strings.

use tracing::error;

use super::{Label, Labelled};
use crate::object::ObjectStatus;
use crate::version::VersionType;

/// Badge for a status string. Unknown values are a data-integrity defect:
/// they are logged and rendered with a visible marker.
pub(crate) fn label_for_raw_status(raw: &str) -> Label {
    match raw.parse::<ObjectStatus>() {
        Ok(status) => status.label(),
        Err(_) => {
            error!(value = %raw, "Unmapped object status reached the label mapper");
            Label::unmapped(raw)
        }
    }
}

/// Badge for a release type string. Same contract as [`label_for_raw_status`].
pub(crate) fn label_for_raw_version_type(raw: &str) -> Label {
    match raw.parse::<VersionType>() {
        Ok(kind) => kind.label(),
        Err(_) => {
            error!(value = %raw, "Unmapped version type reached the label mapper");
            Label::unmapped(raw)
        }
    }
}
