//! Journal entry data types.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use mizan_shared::types::{AccountId, JournalEntryId};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Journal entry status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    /// Entry is still being prepared.
    Draft,
    /// Entry has been posted to the ledger.
    Posted,
}

/// A single debit/credit posting against one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalLine {
    /// Account being posted to.
    pub account_id: AccountId,
    /// Debit amount (never negative).
    #[serde(default)]
    pub debit: Decimal,
    /// Credit amount (never negative).
    #[serde(default)]
    pub credit: Decimal,
}

/// A dated set of postings.
///
/// Posted entries are expected to balance (sum of debits equals sum of
/// credits). That is guaranteed by the posting subsystem and not re-checked
/// here; an unbalanced entry silently skews every total built from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Entry ID.
    pub id: JournalEntryId,
    /// Human-facing entry number.
    pub entry_number: String,
    /// Entry timestamp. A bare calendar day reads as midnight.
    #[serde(deserialize_with = "deserialize_entry_date")]
    pub date: NaiveDateTime,
    /// Free-text memo.
    #[serde(default)]
    pub memo: String,
    /// Entry status.
    pub status: EntryStatus,
    /// Lines in their original order.
    pub items: Vec<JournalLine>,
}

impl JournalEntry {
    /// Lines of this entry that post to `account_id`, in original order.
    pub fn lines_for(&self, account_id: AccountId) -> impl Iterator<Item = &JournalLine> {
        self.items
            .iter()
            .filter(move |line| line.account_id == account_id)
    }

    /// Returns true if debits equal credits across all lines.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        let debit: Decimal = self.items.iter().map(|l| l.debit).sum();
        let credit: Decimal = self.items.iter().map(|l| l.credit).sum();
        debit == credit
    }
}

/// Either form an exported entry date may take.
#[derive(Deserialize)]
#[serde(untagged)]
enum EntryDate {
    Timestamp(NaiveDateTime),
    Day(NaiveDate),
}

fn deserialize_entry_date<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match EntryDate::deserialize(deserializer)? {
        EntryDate::Timestamp(at) => at,
        EntryDate::Day(day) => day.and_time(NaiveTime::MIN),
    })
}

/// Which entries a query includes.
///
/// Callers always pick one explicitly; there is no implicit "posted only".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    /// Every entry regardless of status.
    Any,
    /// Entries with exactly this status.
    Only(EntryStatus),
}

impl StatusFilter {
    /// Posted entries only.
    pub const POSTED: Self = Self::Only(EntryStatus::Posted);
    /// Draft entries only.
    pub const DRAFT: Self = Self::Only(EntryStatus::Draft);

    /// Returns true if an entry with `status` passes the filter.
    #[must_use]
    pub fn matches(self, status: EntryStatus) -> bool {
        match self {
            Self::Any => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

impl From<mizan_shared::config::StatusSetting> for StatusFilter {
    fn from(setting: mizan_shared::config::StatusSetting) -> Self {
        use mizan_shared::config::StatusSetting;
        match setting {
            StatusSetting::Any => Self::Any,
            StatusSetting::Posted => Self::POSTED,
            StatusSetting::Draft => Self::DRAFT,
        }
    }
}
