//! The closed namespace of persisted-preference keys.
//!
//! Every entry this crate reads or writes lives under one of the
//! identifiers below. The split into [`ActiveKey`] and [`DeprecatedKey`]
//! is load-bearing: write paths accept only `ActiveKey`, so writing
//! through a retired key is a compile error rather than a runtime check.

use std::fmt;
use std::str::FromStr;

use crate::error::StorageError;

/// Keys open to reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActiveKey {
    /// Query autocomplete toggle.
    Autocomplete,
    /// Bypass of the server-side response cache.
    NoCache,
    /// Per-query tracing toggle.
    QueryTracing,
    /// Series display limits per panel type.
    SeriesLimits,
    /// Compact table rendering toggle.
    TableCompact,
    /// Preferred display timezone.
    Timezone,
    /// Suppression flag for the default-timezone hint.
    DisabledDefaultTimezone,
    /// Color theme name.
    Theme,
    /// Visibility of the metrics exploration tips panel.
    ExploreMetricsTips,
    /// Recent metric queries.
    MetricsQueryHistory,
    /// Base URL of the backing server.
    ServerUrl,
    /// Raw JSON live view toggle.
    RawJsonLiveView,
}

impl ActiveKey {
    /// Every active key, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::Autocomplete,
        Self::NoCache,
        Self::QueryTracing,
        Self::SeriesLimits,
        Self::TableCompact,
        Self::Timezone,
        Self::DisabledDefaultTimezone,
        Self::Theme,
        Self::ExploreMetricsTips,
        Self::MetricsQueryHistory,
        Self::ServerUrl,
        Self::RawJsonLiveView,
    ];

    /// The identifier the entry is stored under.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Autocomplete => "AUTOCOMPLETE",
            Self::NoCache => "NO_CACHE",
            Self::QueryTracing => "QUERY_TRACING",
            Self::SeriesLimits => "SERIES_LIMITS",
            Self::TableCompact => "TABLE_COMPACT",
            Self::Timezone => "TIMEZONE",
            Self::DisabledDefaultTimezone => "DISABLED_DEFAULT_TIMEZONE",
            Self::Theme => "THEME",
            Self::ExploreMetricsTips => "EXPLORE_METRICS_TIPS",
            Self::MetricsQueryHistory => "METRICS_QUERY_HISTORY",
            Self::ServerUrl => "SERVER_URL",
            Self::RawJsonLiveView => "RAW_JSON_LIVE_VIEW",
        }
    }
}

impl fmt::Display for ActiveKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keys kept readable for data written by earlier releases, but closed
/// to new writes.
///
/// Entries under these keys are still decoded on read and can be removed
/// by cleanup code; they can never be written through the typed API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeprecatedKey {
    /// Superseded by [`ActiveKey::MetricsQueryHistory`].
    QueryHistory,
    /// Retired favorites list.
    QueryFavorites,
}

impl DeprecatedKey {
    /// Every deprecated key, in declaration order.
    pub const ALL: [Self; 2] = [Self::QueryHistory, Self::QueryFavorites];

    /// The identifier the entry is stored under.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::QueryHistory => "QUERY_HISTORY",
            Self::QueryFavorites => "QUERY_FAVORITES",
        }
    }
}

impl fmt::Display for DeprecatedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any member of the key namespace, usable for reads and removals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// A key open to writes.
    Active(ActiveKey),
    /// A read-only key from an earlier release.
    Deprecated(DeprecatedKey),
}

impl StorageKey {
    /// The identifier the entry is stored under.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active(key) => key.as_str(),
            Self::Deprecated(key) => key.as_str(),
        }
    }

    /// Whether this key is closed to new writes.
    #[must_use]
    pub const fn is_deprecated(self) -> bool {
        matches!(self, Self::Deprecated(_))
    }
}

impl From<ActiveKey> for StorageKey {
    fn from(key: ActiveKey) -> Self {
        Self::Active(key)
    }
}

impl From<DeprecatedKey> for StorageKey {
    fn from(key: DeprecatedKey) -> Self {
        Self::Deprecated(key)
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageKey {
    type Err = StorageError;

    /// Parse a stored identifier back into the namespace.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::UnknownKey`] for identifiers outside the
    /// namespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for key in ActiveKey::ALL {
            if key.as_str() == s {
                return Ok(Self::Active(key));
            }
        }
        for key in DeprecatedKey::ALL {
            if key.as_str() == s {
                return Ok(Self::Deprecated(key));
            }
        }
        Err(StorageError::UnknownKey(s.to_string()))
    }
}

impl TryFrom<StorageKey> for ActiveKey {
    type Error = StorageError;

    /// Narrow a parsed key to one accepted by write operations.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::DeprecatedKey`] when the key is read-only.
    fn try_from(key: StorageKey) -> Result<Self, Self::Error> {
        match key {
            StorageKey::Active(key) => Ok(key),
            StorageKey::Deprecated(key) => Err(StorageError::DeprecatedKey(key.as_str())),
        }
    }
}
