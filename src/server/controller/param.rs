use serde::Deserialize;
use utoipa::IntoParams;

/// Largest page a list endpoint returns.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Largest offset the database accepts; SQLite binds offsets as signed 64-bit.
const MAX_SKIP: u64 = i64::MAX as u64;

fn default_take() -> u64 {
    10
}

/// Offset pagination query parameters.
#[derive(Deserialize, IntoParams, Debug, Clone, Copy, PartialEq)]
#[into_params(parameter_in = Query)]
pub struct PaginationParam {
    /// Number of entries to skip (default: 0)
    #[serde(default)]
    pub skip: u64,
    /// Maximum number of entries to return (default: 10, at most 100)
    #[serde(default = "default_take")]
    pub take: u64,
}

impl PaginationParam {
    /// Returns `(skip, take)` with `take` capped at `MAX_PAGE_SIZE` and `skip`
    /// capped at the largest offset the database can bind.
    pub fn bounded(&self) -> (u64, u64) {
        (self.skip.min(MAX_SKIP), self.take.min(MAX_PAGE_SIZE))
    }
}

/// Query parameters for listing clubs.
///
/// Fields are repeated rather than flattened from `PaginationParam`: query strings
/// deserialize through `serde_urlencoded`, which cannot parse numbers inside a
/// flattened struct.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ClubListParam {
    /// Number of clubs to skip (default: 0)
    #[serde(default)]
    pub skip: u64,
    /// Maximum number of clubs to return (default: 10, at most 100)
    #[serde(default = "default_take")]
    pub take: u64,
    /// Include soft-deleted clubs (default: false)
    #[serde(default)]
    pub include_deleted: bool,
}

impl ClubListParam {
    pub fn pagination(&self) -> PaginationParam {
        PaginationParam {
            skip: self.skip,
            take: self.take,
        }
    }
}

/// Query parameters for reading a single club.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IncludeDeletedParam {
    /// Return the club even if it is soft-deleted (default: false)
    #[serde(default)]
    pub include_deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_values_in_range() {
        let page = PaginationParam { skip: 20, take: 10 };

        assert_eq!(page.bounded(), (20, 10));
    }

    #[test]
    fn caps_take_and_skip() {
        let page = PaginationParam {
            skip: u64::MAX,
            take: u64::MAX,
        };

        assert_eq!(page.bounded(), (i64::MAX as u64, MAX_PAGE_SIZE));
    }

    #[test]
    fn club_list_shares_pagination_bounds() {
        let params = ClubListParam {
            skip: u64::MAX,
            take: 1_000,
            include_deleted: true,
        };

        assert_eq!(params.pagination().bounded(), (i64::MAX as u64, MAX_PAGE_SIZE));
    }
}
