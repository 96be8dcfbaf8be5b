// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use bank_portfolio::{
    Account, AccountNumber, Branch, Chequing, Client, ContractViolation, Date, FolioNumber, Savings,
};
use clap::Parser;
use csv::{ReaderBuilder, Trim, Writer};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

/// Bank Portfolio - Render client statements from CSV files
///
/// Reads clients and their accounts, then prints every client's statement
/// (or an account summary) to stdout, in folio order.
#[derive(Parser, Debug)]
#[command(name = "bank-portfolio")]
#[command(about = "Renders client account statements from CSV files", long_about = None)]
struct Args {
    /// Path to CSV file with clients
    ///
    /// Expected format: folio,first_name,last_name,phone,birth_date
    #[arg(long, value_name = "FILE")]
    clients: PathBuf,

    /// Path to CSV file with accounts
    ///
    /// Expected format: folio,type,number,rate,balance,description,transactions,min_rate
    /// Example: cargo run -- --clients clients.csv accounts.csv > statements.txt
    #[arg(value_name = "FILE")]
    accounts: PathBuf,

    /// Write a CSV summary of every account instead of statements
    #[arg(long)]
    summary: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut branch = match open(&args.clients).and_then(load_clients) {
        Ok(branch) => branch,
        Err(e) => {
            eprintln!("Error loading clients from '{}': {}", args.clients.display(), e);
            process::exit(1);
        }
    };

    if let Err(e) = open(&args.accounts).and_then(|reader| load_accounts(&mut branch, reader)) {
        eprintln!("Error loading accounts from '{}': {}", args.accounts.display(), e);
        process::exit(1);
    }

    let written = if args.summary {
        write_summary(&branch, io::stdout())
    } else {
        write_statements(&branch, io::stdout()).map_err(csv::Error::from)
    };
    if let Err(e) = written {
        eprintln!("Error writing output: {}", e);
        process::exit(1);
    }
}

fn open(path: &Path) -> Result<BufReader<File>, csv::Error> {
    Ok(BufReader::new(File::open(path)?))
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .has_headers(true)
        .from_reader(reader)
}

/// Raw client row.
///
/// Fields: `folio, first_name, last_name, phone, birth_date`
#[derive(Debug, Deserialize)]
struct ClientRecord {
    folio: u16,
    first_name: String,
    last_name: String,
    phone: String,
    birth_date: String,
}

impl ClientRecord {
    fn into_client(self) -> Result<Client, String> {
        let birth_date: Date = self.birth_date.parse().map_err(|e| format!("{e}"))?;
        Client::new(
            FolioNumber(self.folio),
            &self.first_name,
            &self.last_name,
            &self.phone,
            birth_date,
        )
        .map_err(|violation| violation.to_string())
    }
}

/// Raw account row.
///
/// Fields: `folio, type, number, rate, balance, description, transactions, min_rate`
#[derive(Debug, Deserialize)]
struct AccountRecord {
    folio: u16,
    #[serde(rename = "type")]
    account_type: String,
    number: u32,
    rate: Decimal,
    balance: Decimal,
    #[serde(default)]
    description: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    transactions: Option<u32>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    min_rate: Option<Decimal>,
}

impl AccountRecord {
    /// Converts the row into an account opened today.
    ///
    /// Returns `None` for an unknown account type.
    fn into_account(self) -> Option<Result<Account, ContractViolation>> {
        let number = AccountNumber(self.number);

        let account = match self.account_type.to_lowercase().as_str() {
            "cheque" | "chequing" => Chequing::new(
                number,
                self.transactions.unwrap_or(0),
                self.balance,
                self.rate,
                &self.description,
                self.min_rate.unwrap_or(Chequing::DEFAULT_MIN_RATE),
            )
            .map(Account::from),
            "epargne" | "savings" => {
                Savings::new(number, self.rate, self.balance, &self.description).map(Account::from)
            }
            "generic" => Account::generic(number, self.rate, self.balance, self.description),
            _ => return None,
        };
        Some(account)
    }
}

/// Enrolls every valid client row into a new branch.
///
/// Rows that fail to parse, break a contract or repeat a folio are skipped
/// with a warning.
///
/// # Errors
///
/// Returns a CSV error if the reader fails or the CSV structure is invalid.
fn load_clients<R: Read>(reader: R) -> Result<Branch, csv::Error> {
    let mut branch = Branch::new();

    for result in csv_reader(reader).deserialize::<ClientRecord>() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("skipping malformed client row: {e}");
                continue;
            }
        };

        let folio = record.folio;
        match record.into_client() {
            Ok(client) => {
                if let Err(e) = branch.enroll(client) {
                    tracing::warn!(folio, "skipping client: {e}");
                }
            }
            Err(reason) => tracing::warn!(folio, "skipping invalid client: {reason}"),
        }
    }

    Ok(branch)
}

/// Opens every valid account row in the branch.
///
/// # CSV Format
///
/// ```csv
/// folio,type,number,rate,balance,description,transactions,min_rate
/// 1000,cheque,1280,7.25,-1000,Loyer,25,2.5
/// 1000,epargne,1000,2.5,25000,Etudes,,
/// ```
///
/// Empty `description`, `transactions` and `min_rate` fall back to the
/// account defaults. Invalid rows are skipped with a warning.
///
/// # Errors
///
/// Returns a CSV error if the reader fails or the CSV structure is invalid.
fn load_accounts<R: Read>(branch: &mut Branch, reader: R) -> Result<(), csv::Error> {
    for result in csv_reader(reader).deserialize::<AccountRecord>() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("skipping malformed account row: {e}");
                continue;
            }
        };

        let (folio, number) = (FolioNumber(record.folio), record.number);
        let account = match record.into_account() {
            Some(Ok(account)) => account,
            Some(Err(violation)) => {
                tracing::warn!(%folio, number, "skipping invalid account: {violation}");
                continue;
            }
            None => {
                tracing::warn!(%folio, number, "skipping account of unknown type");
                continue;
            }
        };

        if let Err(e) = branch.open_account(folio, account) {
            tracing::warn!(%folio, number, "skipping account: {e}");
        }
    }

    Ok(())
}

/// Writes every client's statement, separated by blank lines.
fn write_statements<W: Write>(branch: &Branch, mut writer: W) -> io::Result<()> {
    for (i, client) in branch.clients().enumerate() {
        if i > 0 {
            writeln!(writer)?;
        }
        writer.write_all(client.statement().as_bytes())?;
    }
    writer.flush()
}

/// One summary line per account.
#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    folio: FolioNumber,
    number: AccountNumber,
    #[serde(rename = "type")]
    account_type: String,
    description: &'a str,
    rate: Decimal,
    balance: Decimal,
    interest: Decimal,
}

/// Write an account summary as CSV
///
/// # CSV Format
///
/// Columns: `folio, number, type, description, rate, balance, interest`
///
/// Amounts are rendered with [`Account::statement_amount`], as on statements.
///
/// # Errors
///
/// Returns a CSV error if writing fails.
fn write_summary<W: Write>(branch: &Branch, writer: W) -> Result<(), csv::Error> {
    let mut wtr = Writer::from_writer(writer);

    for client in branch.clients() {
        for account in client.accounts() {
            wtr.serialize(SummaryRow {
                folio: client.folio(),
                number: account.number(),
                account_type: account.kind().to_string(),
                description: account.description(),
                rate: Account::statement_amount(account.interest_rate()),
                balance: Account::statement_amount(account.balance()),
                interest: Account::statement_amount(account.calculate_interest()),
            })?;
        }
    }

    wtr.flush()?;
    Ok(())
}
