//! Listing parameters for user queries.
//!
//! A [`UserListQuery`] narrows records by exact name, orders them by age and
//! pages through the ordered result with `skip`/`take`. Rows sharing an age
//! keep insertion order regardless of direction.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::{User, UserName};

/// Name used by the canonical listing query.
pub const DEFAULT_FILTER_NAME: &str = "Sally";
/// Rows skipped by the canonical listing query.
pub const DEFAULT_SKIP: u32 = 1;
/// Rows returned at most by the canonical listing query.
pub const DEFAULT_TAKE: u32 = 2;

/// Ordering applied to the `age` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Youngest first.
    #[default]
    Ascending,
    /// Oldest first.
    Descending,
}

impl SortDirection {
    /// Apply the direction to an ascending comparison.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    /// Short form accepted by [`FromStr`]: `asc` or `desc`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a direction string is neither `asc` nor `desc`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("sort direction must be 'asc' or 'desc', got '{0}'")]
pub struct ParseSortDirectionError(pub String);

impl FromStr for SortDirection {
    type Err = ParseSortDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(ParseSortDirectionError(s.to_owned())),
        }
    }
}

/// Filter, order and page parameters for listing users.
///
/// # Examples
/// ```
/// use seedling::domain::{SortDirection, UserListQuery};
///
/// let query = UserListQuery::default();
/// assert_eq!(query.name.as_ref().map(|name| name.as_str()), Some("Sally"));
/// assert_eq!(query.direction, SortDirection::Ascending);
/// assert_eq!((query.skip, query.take), (1, Some(2)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserListQuery {
    /// Exact name match; `None` lists every record.
    pub name: Option<UserName>,
    /// Direction of the age ordering.
    pub direction: SortDirection,
    /// Matching rows discarded from the front of the ordered result.
    pub skip: u32,
    /// Upper bound on returned rows; `None` means unbounded.
    pub take: Option<u32>,
}

impl UserListQuery {
    /// Query returning every record in ascending age order.
    pub fn all() -> Self {
        Self {
            name: None,
            direction: SortDirection::Ascending,
            skip: 0,
            take: None,
        }
    }

    /// Restrict the listing to users with exactly this name.
    #[must_use]
    pub fn named(mut self, name: UserName) -> Self {
        self.name = Some(name);
        self
    }

    /// Set the age ordering.
    #[must_use]
    pub fn with_direction(mut self, direction: SortDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Discard this many matching rows before the page starts.
    #[must_use]
    pub fn with_skip(mut self, skip: u32) -> Self {
        self.skip = skip;
        self
    }

    /// Bound the page size; `None` returns every remaining row.
    #[must_use]
    pub fn with_take(mut self, take: Option<u32>) -> Self {
        self.take = take;
        self
    }

    /// Whether `user` passes the name filter.
    pub fn matches(&self, user: &User) -> bool {
        self.name.as_ref().is_none_or(|name| user.name() == name)
    }

    /// Apply the query to records held in insertion order.
    ///
    /// Adapters that cannot push the query down to their store use this to
    /// get the same semantics as the SQL implementation.
    pub fn apply<'a, I>(&self, records: I) -> Vec<User>
    where
        I: IntoIterator<Item = &'a User>,
    {
        let mut matching: Vec<&User> = records.into_iter().filter(|u| self.matches(u)).collect();
        // Stable sort keeps insertion order among equal ages.
        matching.sort_by(|a, b| self.direction.apply(a.age().cmp(&b.age())));

        let skipped = matching
            .into_iter()
            .skip(usize::try_from(self.skip).unwrap_or(usize::MAX));
        match self.take {
            Some(take) => skipped
                .take(usize::try_from(take).unwrap_or(usize::MAX))
                .cloned()
                .collect(),
            None => skipped.cloned().collect(),
        }
    }
}

impl Default for UserListQuery {
    fn default() -> Self {
        Self::all()
            .named(UserName::default_filter())
            .with_skip(DEFAULT_SKIP)
            .with_take(Some(DEFAULT_TAKE))
    }
}
