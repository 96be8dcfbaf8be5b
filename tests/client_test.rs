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

//! Client public API integration tests.

use bank_portfolio::{
    Account, AccountNumber, Chequing, Client, ContractKind, Date, FolioNumber, PortfolioError,
    Savings,
};
use rust_decimal_macros::dec;

// === Helper Functions ===

fn birth_date() -> Date {
    Date::new(20, 1, 1983).unwrap()
}

fn client(folio: u16) -> Client {
    Client::new(FolioNumber(folio), "Carlo", "Ancelotti", "590 234-0342", birth_date()).unwrap()
}

fn savings(number: u32) -> Account {
    Savings::new(AccountNumber(number), dec!(2.5), dec!(10000), "").unwrap().into()
}

fn chequing(number: u32) -> Account {
    Chequing::new(AccountNumber(number), 15, dec!(-1000), dec!(15), "Loyer", dec!(5))
        .unwrap()
        .into()
}

// === Construction ===

#[test]
fn new_client_has_no_accounts() {
    let client = client(2000);
    assert_eq!(client.folio(), FolioNumber(2000));
    assert_eq!(client.first_name(), "Carlo");
    assert_eq!(client.last_name(), "Ancelotti");
    assert_eq!(client.phone(), "590 234-0342");
    assert_eq!(client.birth_date(), &birth_date());
    assert_eq!(client.account_count(), 0);
}

#[test]
fn folio_range_bounds() {
    let phone = "418 656-0235";
    assert!(Client::new(FolioNumber(1000), "Ana", "Lima", phone, birth_date()).is_ok());
    assert!(Client::new(FolioNumber(9999), "Ana", "Lima", phone, birth_date()).is_ok());

    let violation = Client::new(FolioNumber(999), "Ana", "Lima", phone, birth_date()).unwrap_err();
    assert_eq!(violation.kind(), ContractKind::Precondition);
    assert!(Client::new(FolioNumber(10000), "Ana", "Lima", phone, birth_date()).is_err());
}

#[test]
fn names_and_phone_are_checked() {
    let folio = FolioNumber(1500);
    let phone = "418 656-0345";
    assert!(Client::new(folio, "", "Lima", phone, birth_date()).is_err());
    assert!(Client::new(folio, "Ana", "Lima2", phone, birth_date()).is_err());
    assert!(Client::new(folio, "Ana", "Lima-", phone, birth_date()).is_err());
    assert!(Client::new(folio, "Ana", "Lima", "", birth_date()).is_err());
    assert!(Client::new(folio, "Jean-Marc", "De La Tour", phone, birth_date()).is_ok());
}

// === Portfolio ===

#[test]
fn add_and_find_accounts() {
    let mut client = client(2000);
    client.add_account(chequing(12)).unwrap();
    client.add_account(savings(7)).unwrap();

    assert_eq!(client.account_count(), 2);
    assert!(client.contains_account(AccountNumber(12)));
    assert!(!client.contains_account(AccountNumber(13)));
    assert_eq!(client.account(AccountNumber(7)).unwrap().calculate_interest(), dec!(250));

    let numbers: Vec<_> = client.accounts().map(Account::number).collect();
    assert_eq!(numbers, [AccountNumber(12), AccountNumber(7)]);
}

#[test]
fn duplicate_number_leaves_portfolio_unchanged() {
    let mut client = client(2000);
    client.add_account(chequing(12)).unwrap();
    let before = client.statement();

    // Same number, different variant
    let result = client.add_account(savings(12));
    assert_eq!(result, Err(PortfolioError::DuplicateAccount(AccountNumber(12))));
    assert_eq!(client.account_count(), 1);
    assert_eq!(client.statement(), before);
}

#[test]
fn remove_account_returns_it() {
    let mut client = client(2000);
    client.add_account(chequing(12)).unwrap();
    client.add_account(savings(7)).unwrap();

    let removed = client.remove_account(AccountNumber(12)).unwrap();
    assert_eq!(removed.number(), AccountNumber(12));
    assert_eq!(client.account_count(), 1);
    assert!(!client.contains_account(AccountNumber(12)));
}

#[test]
fn remove_missing_account_fails() {
    let mut client = client(2000);
    client.add_account(savings(7)).unwrap();
    assert_eq!(
        client.remove_account(AccountNumber(8)).unwrap_err(),
        PortfolioError::AccountNotFound(AccountNumber(8))
    );
    assert_eq!(client.account_count(), 1);
}

#[test]
fn number_can_be_reused_after_removal() {
    let mut client = client(2000);
    client.add_account(savings(7)).unwrap();
    client.remove_account(AccountNumber(7)).unwrap();
    client.add_account(chequing(7)).unwrap();
    assert!(client.account(AccountNumber(7)).unwrap().as_chequing().is_some());
}

#[test]
fn account_mut_applies_variant_rules() {
    let mut client = client(2000);
    client.add_account(savings(7)).unwrap();

    let account = client.account_mut(AccountNumber(7)).unwrap();
    assert!(account.set_balance(dec!(-5)).is_err());
    account.set_balance(dec!(200)).unwrap();
    assert_eq!(client.account(AccountNumber(7)).unwrap().calculate_interest(), dec!(5));
}

#[test]
fn clone_deep_copies_accounts() {
    let mut original = client(2000);
    original.add_account(savings(7)).unwrap();

    let mut copy = original.clone();
    copy.account_mut(AccountNumber(7))
        .unwrap()
        .set_balance(dec!(1))
        .unwrap();
    copy.add_account(chequing(12)).unwrap();

    assert_eq!(original.account_count(), 1);
    assert_eq!(original.account(AccountNumber(7)).unwrap().balance(), dec!(10000));
    assert_eq!(copy.account_count(), 2);
}

// === Statements ===

#[test]
fn personal_info_block() {
    assert_eq!(
        client(2000).personal_info_formatted(),
        "Client no de folio : 2000\nCarlo Ancelotti\nDate de naissance : Jeudi le 20 janvier 1983\n590 234-0342\n"
    );
}

#[test]
fn statement_lists_accounts_in_insertion_order() {
    let mut client = client(2000);
    client.add_account(savings(7)).unwrap();
    client.add_account(chequing(12)).unwrap();

    let statement = client.statement();
    assert!(statement.starts_with(&client.personal_info_formatted()));

    let savings_at = statement.find("Compte Epargne").unwrap();
    let chequing_at = statement.find("Compte Cheque").unwrap();
    assert!(savings_at < chequing_at);
    assert!(statement.ends_with("Interet : 70 $\n"));
}

#[test]
fn statement_without_accounts_is_personal_info() {
    let client = client(4321);
    assert_eq!(client.statement(), client.personal_info_formatted());
}

// === Ordering ===

#[test]
fn clients_order_by_folio() {
    let mut clients = vec![client(5000), client(1000), client(3000)];
    clients.sort();
    let folios: Vec<_> = clients.iter().map(Client::folio).collect();
    assert_eq!(folios, [FolioNumber(1000), FolioNumber(3000), FolioNumber(5000)]);

    assert!(client(1000) < client(1001));
    assert_eq!(client(1000), client(1000));
}
