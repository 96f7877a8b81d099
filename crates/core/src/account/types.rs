//! Account data types.

use mizan_shared::types::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::side::NormalSide;

/// Account category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountCategory {
    /// Resources owned (debit-normal).
    Asset,
    /// Obligations owed (credit-normal).
    Liability,
    /// Owners' residual interest (credit-normal).
    Equity,
    /// Income earned (credit-normal).
    Revenue,
    /// Costs incurred (debit-normal).
    Expense,
}

impl AccountCategory {
    /// All categories in statement order.
    pub const ALL: [Self; 5] = [
        Self::Asset,
        Self::Liability,
        Self::Equity,
        Self::Revenue,
        Self::Expense,
    ];

    /// Returns the side on which this category's balance increases.
    ///
    /// - Asset/Expense: debit-normal
    /// - Liability/Equity/Revenue: credit-normal
    #[must_use]
    pub const fn normal_side(self) -> NormalSide {
        match self {
            Self::Asset | Self::Expense => NormalSide::Debit,
            Self::Liability | Self::Equity | Self::Revenue => NormalSide::Credit,
        }
    }

    /// Returns true if increases are recorded as debits.
    #[must_use]
    pub const fn is_debit_normal(self) -> bool {
        matches!(self.normal_side(), NormalSide::Debit)
    }

    /// Returns true for categories reported on the balance sheet.
    #[must_use]
    pub const fn is_balance_sheet(self) -> bool {
        matches!(self, Self::Asset | Self::Liability | Self::Equity)
    }
}

impl std::fmt::Display for AccountCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Asset => write!(f, "asset"),
            Self::Liability => write!(f, "liability"),
            Self::Equity => write!(f, "equity"),
            Self::Revenue => write!(f, "revenue"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl std::str::FromStr for AccountCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asset" => Ok(Self::Asset),
            "liability" => Ok(Self::Liability),
            "equity" => Ok(Self::Equity),
            "revenue" => Ok(Self::Revenue),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("Unknown account category: {s}")),
        }
    }
}

/// An entry in the chart of accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Account ID.
    pub id: AccountId,
    /// Account number, sortable as a string (e.g. "100", "100.01").
    pub account_number: String,
    /// Display name.
    pub name: String,
    /// Account category.
    pub category: AccountCategory,
    /// Parent account; `None` for a root.
    #[serde(default)]
    pub parent_id: Option<AccountId>,
    /// Current all-time balance as maintained by the posting subsystem.
    ///
    /// Trusted as-is and never modified here.
    #[serde(default)]
    pub balance: Decimal,
}

impl Account {
    /// Returns the side on which this account's balance increases.
    #[must_use]
    pub const fn normal_side(&self) -> NormalSide {
        self.category.normal_side()
    }

    /// Returns true if this account has no parent.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
