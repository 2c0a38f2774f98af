use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// The string form is also the serde representation.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(RiskLevel {
    Low => "Low Risk",
    Medium => "Medium Risk",
    High => "High Risk",
});

str_enum!(TimeRange {
    All => "all",
    Week => "week",
    Month => "month",
    Quarter => "quarter",
});

str_enum!(SortKey {
    Name => "name",
    PatientId => "id",
    Timestamp => "timestamp",
    RiskScore => "riskScore",
    RiskLevel => "riskLevel",
});

str_enum!(SortDirection {
    Asc => "asc",
    Desc => "desc",
});

/// Score at which an assessment stops being low risk.
pub const MEDIUM_RISK_MIN_SCORE: u8 = 25;
/// Score at which an assessment becomes high risk.
pub const HIGH_RISK_MIN_SCORE: u8 = 75;

impl RiskLevel {
    /// Classify a clamped 0–100 score.
    pub fn from_score(score: u8) -> Self {
        if score < MEDIUM_RISK_MIN_SCORE {
            Self::Low
        } else if score < HIGH_RISK_MIN_SCORE {
            Self::Medium
        } else {
            Self::High
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn risk_level_round_trip() {
        for (variant, s) in [
            (RiskLevel::Low, "Low Risk"),
            (RiskLevel::Medium, "Medium Risk"),
            (RiskLevel::High, "High Risk"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(RiskLevel::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn risk_level_thresholds() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(24), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(25), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(74), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(75), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(100), RiskLevel::High);
    }

    #[test]
    fn risk_level_orders_by_severity() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }

    #[test]
    fn risk_level_serializes_as_label() {
        let json = serde_json::to_string(&RiskLevel::Medium).unwrap();
        assert_eq!(json, "\"Medium Risk\"");
        let back: RiskLevel = serde_json::from_str("\"High Risk\"").unwrap();
        assert_eq!(back, RiskLevel::High);
    }

    #[test]
    fn time_range_round_trip() {
        for (variant, s) in [
            (TimeRange::All, "all"),
            (TimeRange::Week, "week"),
            (TimeRange::Month, "month"),
            (TimeRange::Quarter, "quarter"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(TimeRange::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn sort_key_uses_record_field_names() {
        assert_eq!(SortKey::from_str("riskScore").unwrap(), SortKey::RiskScore);
        assert_eq!(SortKey::from_str("id").unwrap(), SortKey::PatientId);
    }

    #[test]
    fn invalid_enum_value_errors() {
        let err = TimeRange::from_str("decade").unwrap_err();
        match err {
            ModelError::InvalidEnum { field, value } => {
                assert_eq!(field, "TimeRange");
                assert_eq!(value, "decade");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
