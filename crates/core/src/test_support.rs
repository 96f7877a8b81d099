//! Fixture builders shared by the unit tests.

use chrono::{NaiveDate, NaiveDateTime};
use mizan_shared::types::{AccountId, JournalEntryId};
use rust_decimal::Decimal;

use crate::account::{Account, AccountCategory};
use crate::journal::{EntryStatus, JournalEntry, JournalLine};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, s).unwrap()
}

pub fn noon(y: i32, m: u32, d: u32) -> NaiveDateTime {
    at(y, m, d, 12, 0, 0)
}

pub fn account(number: &str, name: &str, category: AccountCategory) -> Account {
    Account {
        id: AccountId::new(),
        account_number: number.to_string(),
        name: name.to_string(),
        category,
        parent_id: None,
        balance: Decimal::ZERO,
    }
}

pub fn child(number: &str, name: &str, parent: &Account) -> Account {
    Account {
        parent_id: Some(parent.id),
        ..account(number, name, parent.category)
    }
}

pub fn debit(account: &Account, amount: Decimal) -> JournalLine {
    JournalLine {
        account_id: account.id,
        debit: amount,
        credit: Decimal::ZERO,
    }
}

pub fn credit(account: &Account, amount: Decimal) -> JournalLine {
    JournalLine {
        account_id: account.id,
        debit: Decimal::ZERO,
        credit: amount,
    }
}

pub fn entry(
    number: &str,
    when: NaiveDateTime,
    status: EntryStatus,
    items: Vec<JournalLine>,
) -> JournalEntry {
    JournalEntry {
        id: JournalEntryId::new(),
        entry_number: number.to_string(),
        date: when,
        memo: format!("Yevmiye {number}"),
        status,
        items,
    }
}

pub fn posted(number: &str, when: NaiveDateTime, items: Vec<JournalLine>) -> JournalEntry {
    entry(number, when, EntryStatus::Posted, items)
}

pub fn draft(number: &str, when: NaiveDateTime, items: Vec<JournalLine>) -> JournalEntry {
    entry(number, when, EntryStatus::Draft, items)
}
