//! Row types and table keys

/// Which series a weather row belongs to; primary key is (kind, slot)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Current,
    Hourly,
    Daily,
}

impl RecordKind {
    /// Persisted string form (stable, do not change without a migration)
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Current => "current",
            RecordKind::Hourly => "hourly",
            RecordKind::Daily => "daily",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "current" => Some(RecordKind::Current),
            "hourly" => Some(RecordKind::Hourly),
            "daily" => Some(RecordKind::Daily),
            _ => None,
        }
    }
}

/// A journaled photo, keyed by the category vocabulary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRow {
    pub photo_id: i64,
    pub category: String,
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_kind_round_trip() {
        for kind in [RecordKind::Current, RecordKind::Hourly, RecordKind::Daily] {
            assert_eq!(RecordKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(RecordKind::parse("minutely"), None);
    }
}
