//! Command-line arguments.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use mizan_shared::config::StatusSetting;
use rust_decimal::Decimal;

/// Print financial reports from a ledger snapshot as JSON.
#[derive(Parser, Debug)]
#[command(name = "mizan")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Ledger snapshot file (overrides `snapshot.path`)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub snapshot: Option<PathBuf>,

    /// Entry status filter: any, posted or draft (overrides the configured default)
    #[arg(long, global = true)]
    pub status: Option<StatusSetting>,

    /// Hide statement subtrees below this magnitude (overrides `report.zero_epsilon`)
    #[arg(long, global = true)]
    pub epsilon: Option<Decimal>,

    /// The report to print
    #[command(subcommand)]
    pub report: Report,
}

/// Period selection shared by the range-based reports.
#[derive(clap::Args, Debug, Clone)]
pub struct Period {
    /// First day included (open start when omitted)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub from: Option<NaiveDate>,

    /// Last day included
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub to: NaiveDate,
}

/// Available reports.
#[derive(Subcommand, Debug)]
pub enum Report {
    /// Trial balance over a period
    #[command(alias = "tb")]
    TrialBalance {
        #[command(flatten)]
        period: Period,
    },
    /// Balance sheet as of a date
    #[command(alias = "bs")]
    BalanceSheet {
        /// Last day included
        #[arg(long, value_name = "YYYY-MM-DD")]
        as_of: NaiveDate,
    },
    /// Income statement over a period
    #[command(alias = "is")]
    IncomeStatement {
        #[command(flatten)]
        period: Period,
    },
    /// Ledger detail with opening and running balances for one account
    Ledger {
        /// Account number or id
        #[arg(short, long)]
        account: String,

        #[command(flatten)]
        period: Period,
    },
    /// Budget versus actual
    Budget {
        /// Budget id or name
        #[arg(short, long)]
        budget: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rust_decimal_macros::dec;

    #[test]
    fn test_command_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_ledger_with_globals() {
        let args = Args::try_parse_from([
            "mizan",
            "ledger",
            "--account",
            "100.01",
            "--from",
            "2024-01-01",
            "--to",
            "2024-01-31",
            "--status",
            "posted",
            "--epsilon",
            "0.5",
        ])
        .unwrap();

        assert_eq!(args.status, Some(StatusSetting::Posted));
        assert_eq!(args.epsilon, Some(dec!(0.5)));
        let Report::Ledger { account, period } = args.report else {
            panic!("expected ledger report");
        };
        assert_eq!(account, "100.01");
        assert_eq!(period.from, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(period.to, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
    }

    #[test]
    fn test_parse_alias_and_open_start() {
        let args = Args::try_parse_from(["mizan", "tb", "--to", "2024-12-31"]).unwrap();

        let Report::TrialBalance { period } = args.report else {
            panic!("expected trial balance");
        };
        assert_eq!(period.from, None);
        assert!(args.status.is_none());
    }

    #[test]
    fn test_rejects_bad_status() {
        assert!(Args::try_parse_from(["mizan", "bs", "--as-of", "2024-12-31", "--status", "void"]).is_err());
    }
}
