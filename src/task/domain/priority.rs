//! Priority flags carried by every task record.

use serde::{Deserialize, Serialize};

/// Priority flags on a task record.
///
/// Reserved surface: records are materialised with every flag false and
/// no operation mutates them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityFlags {
    /// Low priority.
    pub low: bool,
    /// Medium priority.
    pub medium: bool,
    /// High priority.
    pub high: bool,
}
