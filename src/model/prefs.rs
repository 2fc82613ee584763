use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

/// Lower bound for the task limit setting
pub const TASK_LIMIT_MIN: usize = 1;
/// Upper bound for the task limit setting
pub const TASK_LIMIT_MAX: usize = 1000;
/// Default task limit when nothing is configured
pub const TASK_LIMIT_DEFAULT: usize = 100;

/// The six-way display filter for the task panel.
///
/// `Inbox`, `Next`, `Waiting`, and `Someday` select by tag; `Completed`
/// selects by checkbox marker; `All` shows everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Inbox,
    Next,
    Waiting,
    Someday,
    Completed,
}

impl Filter {
    /// Display order of the filter buttons
    pub const ALL: [Filter; 6] = [
        Filter::All,
        Filter::Inbox,
        Filter::Next,
        Filter::Waiting,
        Filter::Someday,
        Filter::Completed,
    ];

    /// Parse a filter key. Unrecognized strings fall back to `All`.
    pub fn parse(s: &str) -> Filter {
        match s {
            "inbox" => Filter::Inbox,
            "next" => Filter::Next,
            "waiting" => Filter::Waiting,
            "someday" => Filter::Someday,
            "completed" => Filter::Completed,
            _ => Filter::All,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Inbox => "inbox",
            Filter::Next => "next",
            Filter::Waiting => "waiting",
            Filter::Someday => "someday",
            Filter::Completed => "completed",
        }
    }

    /// Label shown on the filter button / settings row
    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Inbox => "Inbox",
            Filter::Next => "Next",
            Filter::Waiting => "Waiting",
            Filter::Someday => "Someday",
            Filter::Completed => "Completed",
        }
    }
}

// Malformed settings degrade instead of failing, so unknown strings must
// deserialize to the default rather than error.
impl<'de> Deserialize<'de> for Filter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Filter::parse(&s))
    }
}

/// Ordering applied to the filtered task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Descending by position offset — later in the vault first
    #[default]
    Modified,
    /// Ascending by position offset
    Created,
    /// Case-insensitive by task text
    Alphabetical,
}

impl SortOrder {
    /// Cycle order used by the TUI sort key
    pub const ALL: [SortOrder; 3] = [
        SortOrder::Modified,
        SortOrder::Created,
        SortOrder::Alphabetical,
    ];

    /// Parse a sort key. Unrecognized strings fall back to `Modified`.
    pub fn parse(s: &str) -> SortOrder {
        match s {
            "created" => SortOrder::Created,
            "alphabetical" => SortOrder::Alphabetical,
            _ => SortOrder::Modified,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Modified => "modified",
            SortOrder::Created => "created",
            SortOrder::Alphabetical => "alphabetical",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Modified => "Last modified",
            SortOrder::Created => "Created",
            SortOrder::Alphabetical => "Alphabetical",
        }
    }
}

impl<'de> Deserialize<'de> for SortOrder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SortOrder::parse(&s))
    }
}

/// Persisted user preferences (`.sift/settings.toml`).
///
/// Every field has a default so a missing or partial file always loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub default_filter: Filter,
    pub sort_by: SortOrder,
    pub show_file_path: bool,
    pub task_limit: usize,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            default_filter: Filter::All,
            sort_by: SortOrder::Modified,
            show_file_path: false,
            task_limit: TASK_LIMIT_DEFAULT,
        }
    }
}

impl Preferences {
    /// Force `task_limit` into [TASK_LIMIT_MIN, TASK_LIMIT_MAX].
    pub fn clamp(mut self) -> Self {
        self.task_limit = self.task_limit.clamp(TASK_LIMIT_MIN, TASK_LIMIT_MAX);
        self
    }
}

/// A partial preferences update. `None` fields leave the stored value
/// untouched — updates merge into the record, they never replace it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefsPatch {
    pub default_filter: Option<Filter>,
    pub sort_by: Option<SortOrder>,
    pub show_file_path: Option<bool>,
    pub task_limit: Option<usize>,
}

impl PrefsPatch {
    pub fn is_empty(&self) -> bool {
        self.default_filter.is_none()
            && self.sort_by.is_none()
            && self.show_file_path.is_none()
            && self.task_limit.is_none()
    }
}
