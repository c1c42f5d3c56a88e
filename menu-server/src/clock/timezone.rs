//! Supported time zones
//!
//! Brazil only. Unknown or missing names fall back to the configured default.

use chrono_tz::Tz;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported timezone: {0:?}")]
pub struct UnsupportedTimezone(pub String);

/// Closed set of IANA zones the menu can be rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SupportedTimezone {
    #[default]
    SaoPaulo,
    Manaus,
    RioBranco,
    Noronha,
}

impl SupportedTimezone {
    pub const ALL: [SupportedTimezone; 4] = [
        SupportedTimezone::SaoPaulo,
        SupportedTimezone::Manaus,
        SupportedTimezone::RioBranco,
        SupportedTimezone::Noronha,
    ];

    /// IANA name
    pub fn name(&self) -> &'static str {
        match self {
            SupportedTimezone::SaoPaulo => "America/Sao_Paulo",
            SupportedTimezone::Manaus => "America/Manaus",
            SupportedTimezone::RioBranco => "America/Rio_Branco",
            SupportedTimezone::Noronha => "America/Noronha",
        }
    }

    pub fn tz(&self) -> Tz {
        match self {
            SupportedTimezone::SaoPaulo => chrono_tz::America::Sao_Paulo,
            SupportedTimezone::Manaus => chrono_tz::America::Manaus,
            SupportedTimezone::RioBranco => chrono_tz::America::Rio_Branco,
            SupportedTimezone::Noronha => chrono_tz::America::Noronha,
        }
    }

    /// Resolve a requested zone name against `fallback`
    pub fn resolve(requested: Option<&str>, fallback: SupportedTimezone) -> SupportedTimezone {
        match requested {
            Some(name) => name.parse().unwrap_or_else(|_| {
                tracing::debug!(
                    requested = %name,
                    fallback = %fallback,
                    "Unsupported timezone requested, using fallback"
                );
                fallback
            }),
            None => fallback,
        }
    }

    /// [`resolve`](Self::resolve) against the default zone (São Paulo)
    pub fn normalize(requested: Option<&str>) -> SupportedTimezone {
        Self::resolve(requested, SupportedTimezone::default())
    }
}

impl FromStr for SupportedTimezone {
    type Err = UnsupportedTimezone;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SupportedTimezone::ALL
            .into_iter()
            .find(|tz| tz.name() == s)
            .ok_or_else(|| UnsupportedTimezone(s.to_string()))
    }
}

impl fmt::Display for SupportedTimezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
