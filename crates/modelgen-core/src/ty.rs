use crate::{Error, Result};

use regex::Regex;
use std::sync::LazyLock;

/// The closed set of Rust types a column can map to.
///
/// Each variant maps to exactly one Rust spelling via [`ScalarType::rust_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    Int,
    Float,
    Bool,
    String,
    Time(TemporalKind),
    NullInt,
    NullFloat,
    NullBool,
    NullString,
}

/// Sub-kind of a temporal column. Selects the text format used for
/// text⇄time conversion in generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalKind {
    DateTime,
    Date,
    Time,
}

/// Matches declared types of the shape `name(size[,scale])`, e.g.
/// `int(11)` or `decimal(10,2)`.
static COLUMN_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-zA-Z_]+)\(([0-9]+)(,[0-9]+)?\)$").unwrap());

impl ScalarType {
    /// Maps a raw MySQL column type to its Rust representation.
    ///
    /// Unknown type names degrade to `String` rather than erroring. The one
    /// rejected combination is a nullable temporal column: there is no safe
    /// representation for it, so resolution fails instead of silently
    /// producing incorrect code.
    pub fn resolve(raw: &str, nullable: bool) -> Result<ScalarType> {
        let mut name = raw;
        let mut size: i64 = -1;

        if let Some(caps) = COLUMN_TYPE.captures(raw) {
            name = caps.get(1).expect("group 1 always captures").as_str();
            size = caps[2].parse().unwrap_or(-1);
        }

        Ok(match name {
            "int" | "smallint" | "tinyint" | "mediumint" | "bigint" | "bool" => {
                if size == 1 || name == "bool" {
                    Self::Bool.nullable_if(nullable)
                } else {
                    Self::Int.nullable_if(nullable)
                }
            }
            // Timestamps are exposed as epoch integers, not temporal values.
            "timestamp" => Self::Int.nullable_if(nullable),
            "float" | "double" | "decimal" => Self::Float.nullable_if(nullable),
            "text" | "enum" | "set" => Self::String.nullable_if(nullable),
            "datetime" => Self::temporal(TemporalKind::DateTime, raw, nullable)?,
            "date" => Self::temporal(TemporalKind::Date, raw, nullable)?,
            "time" => Self::temporal(TemporalKind::Time, raw, nullable)?,
            _ => Self::String,
        })
    }

    fn temporal(kind: TemporalKind, raw: &str, nullable: bool) -> Result<ScalarType> {
        if nullable {
            return Err(Error::unsupported_column(format!("nullable {raw}")));
        }
        Ok(Self::Time(kind))
    }

    fn nullable_if(self, nullable: bool) -> ScalarType {
        if !nullable {
            return self;
        }
        match self {
            Self::Int => Self::NullInt,
            Self::Float => Self::NullFloat,
            Self::Bool => Self::NullBool,
            Self::String => Self::NullString,
            other => other,
        }
    }

    /// The Rust spelling used for this type in generated code.
    pub fn rust_type(self) -> &'static str {
        match self {
            Self::Int => "i64",
            Self::Float => "f64",
            Self::Bool => "bool",
            Self::String => "String",
            Self::Time(TemporalKind::DateTime) => "NaiveDateTime",
            Self::Time(TemporalKind::Date) => "NaiveDate",
            Self::Time(TemporalKind::Time) => "NaiveTime",
            Self::NullInt => "Option<i64>",
            Self::NullFloat => "Option<f64>",
            Self::NullBool => "Option<bool>",
            Self::NullString => "Option<String>",
        }
    }

    /// Import path the generated source must declare for this type, if any.
    pub fn import(self) -> Option<&'static str> {
        match self {
            Self::Time(TemporalKind::DateTime) => Some("chrono::NaiveDateTime"),
            Self::Time(TemporalKind::Date) => Some("chrono::NaiveDate"),
            Self::Time(TemporalKind::Time) => Some("chrono::NaiveTime"),
            _ => None,
        }
    }

    pub fn temporal_kind(self) -> Option<TemporalKind> {
        match self {
            Self::Time(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn is_nullable(self) -> bool {
        matches!(
            self,
            Self::NullInt | Self::NullFloat | Self::NullBool | Self::NullString
        )
    }
}

impl TemporalKind {
    /// The chrono format pattern used for text⇄time conversion.
    pub fn format(self) -> &'static str {
        match self {
            TemporalKind::DateTime => "%Y-%m-%d %H:%M:%S",
            TemporalKind::Date => "%Y-%m-%d",
            TemporalKind::Time => "%H:%M:%S",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(raw: &str, nullable: bool) -> ScalarType {
        ScalarType::resolve(raw, nullable).unwrap()
    }

    #[test]
    fn integer_family() {
        assert_eq!(resolve("int(11)", false), ScalarType::Int);
        assert_eq!(resolve("int(11)", true), ScalarType::NullInt);
        assert_eq!(resolve("smallint(6)", false), ScalarType::Int);
        assert_eq!(resolve("bigint(20)", false), ScalarType::Int);
        assert_eq!(resolve("tinyint(4)", false), ScalarType::Int);
    }

    #[test]
    fn single_width_integers_are_booleans() {
        assert_eq!(resolve("tinyint(1)", false), ScalarType::Bool);
        assert_eq!(resolve("tinyint(1)", true), ScalarType::NullBool);
        assert_eq!(resolve("int(1)", false), ScalarType::Bool);
        assert_eq!(resolve("bool", false), ScalarType::Bool);
        assert_eq!(resolve("bool", true), ScalarType::NullBool);
    }

    #[test]
    fn timestamps_are_epoch_integers() {
        assert_eq!(resolve("timestamp", false), ScalarType::Int);
        assert_eq!(resolve("timestamp", true), ScalarType::NullInt);
    }

    #[test]
    fn float_family() {
        assert_eq!(resolve("float", false), ScalarType::Float);
        assert_eq!(resolve("double", true), ScalarType::NullFloat);
        assert_eq!(resolve("decimal(10,2)", false), ScalarType::Float);
    }

    #[test]
    fn string_family() {
        assert_eq!(resolve("text", false), ScalarType::String);
        assert_eq!(resolve("text", true), ScalarType::NullString);
        assert_eq!(resolve("enum", false), ScalarType::String);
        assert_eq!(resolve("set", true), ScalarType::NullString);
    }

    #[test]
    fn unknown_types_degrade_to_string() {
        // Unknown names map to String and never to the nullable variant.
        assert_eq!(resolve("varchar(255)", false), ScalarType::String);
        assert_eq!(resolve("varchar(255)", true), ScalarType::String);
        assert_eq!(resolve("geometry", true), ScalarType::String);
        assert_eq!(resolve("blob", false), ScalarType::String);
        // Parenthesized non-numeric arguments fall outside the
        // `name(size[,scale])` shape and land here too.
        assert_eq!(resolve("enum('a','b')", true), ScalarType::String);
    }

    #[test]
    fn temporal_types_carry_their_format() {
        let datetime = resolve("datetime", false);
        assert_eq!(datetime, ScalarType::Time(TemporalKind::DateTime));
        assert_eq!(datetime.temporal_kind().unwrap().format(), "%Y-%m-%d %H:%M:%S");

        let date = resolve("date", false);
        assert_eq!(date.temporal_kind().unwrap().format(), "%Y-%m-%d");

        let time = resolve("time", false);
        assert_eq!(time.temporal_kind().unwrap().format(), "%H:%M:%S");
    }

    #[test]
    fn nullable_temporal_is_rejected() {
        for raw in ["datetime", "date", "time"] {
            let err = ScalarType::resolve(raw, true).unwrap_err();
            assert!(err.is_unsupported_column(), "{raw} should be rejected");
        }
    }

    #[test]
    fn resolution_is_deterministic() {
        for raw in ["int(11)", "tinyint(1)", "decimal(10,2)", "varchar(64)", "datetime"] {
            for nullable in [false, true] {
                let a = ScalarType::resolve(raw, nullable).ok();
                let b = ScalarType::resolve(raw, nullable).ok();
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn spellings() {
        assert_eq!(ScalarType::Int.rust_type(), "i64");
        assert_eq!(ScalarType::NullString.rust_type(), "Option<String>");
        assert_eq!(
            ScalarType::Time(TemporalKind::DateTime).rust_type(),
            "NaiveDateTime"
        );
        assert_eq!(
            ScalarType::Time(TemporalKind::Date).import(),
            Some("chrono::NaiveDate")
        );
        assert_eq!(ScalarType::Int.import(), None);
    }
}
