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

//! Contract checking.
//!
//! Constructors and mutators state their preconditions, postconditions and
//! invariants with the macros in this module. A failed check returns early
//! with a [`ContractViolation`] naming the failed expression and its source
//! location. Checks are never compiled out.
//!
//! ```
//! use bank_portfolio::{ContractKind, Date};
//!
//! let violation = Date::new(30, 2, 2024).unwrap_err();
//! assert_eq!(violation.kind(), ContractKind::Precondition);
//! ```

use std::fmt;
use thiserror::Error;

/// Which side of a contract was broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractKind {
    Assertion,
    Precondition,
    Postcondition,
    Invariant,
}

impl ContractKind {
    fn heading(self) -> &'static str {
        match self {
            Self::Assertion => "ASSERTION ERROR",
            Self::Precondition => "PRECONDITION ERROR",
            Self::Postcondition => "POSTCONDITION ERROR",
            Self::Invariant => "INVARIANT ERROR",
        }
    }
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Assertion => "assertion",
            Self::Precondition => "precondition",
            Self::Postcondition => "postcondition",
            Self::Invariant => "invariant",
        };
        f.write_str(label)
    }
}

/// A broken contract: a caller bug, not a recoverable business condition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} violated: `{expression}` ({file}:{line})")]
pub struct ContractViolation {
    kind: ContractKind,
    expression: &'static str,
    file: &'static str,
    line: u32,
}

impl ContractViolation {
    /// Records a violation and emits a `warn` event for it.
    ///
    /// Normally reached through the checking macros rather than called
    /// directly.
    pub fn new(kind: ContractKind, expression: &'static str, file: &'static str, line: u32) -> Self {
        tracing::warn!(%kind, expression, file, line, "contract violated");
        Self {
            kind,
            expression,
            file,
            line,
        }
    }

    pub fn kind(&self) -> ContractKind {
        self.kind
    }

    /// The failed condition, as written in the source.
    pub fn expression(&self) -> &'static str {
        self.expression
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// Multi-line diagnostic block.
    ///
    /// ```text
    /// Message : PRECONDITION ERROR
    /// File    : src/date.rs
    /// Line    : 84
    /// Test    : Self::is_valid_date(day, month, year)
    /// ```
    pub fn report(&self) -> String {
        format!(
            "Message : {}\nFile    : {}\nLine    : {}\nTest    : {}\n",
            self.kind.heading(),
            self.file,
            self.line,
            self.expression
        )
    }
}

/// Returns early with a [`ContractViolation`] of the given kind unless the
/// condition holds. The error is converted with `Into`, so the macros work in
/// functions returning any error type that wraps a violation.
macro_rules! contract_check {
    ($kind:ident, $cond:expr) => {
        if !($cond) {
            return Err($crate::contract::ContractViolation::new(
                $crate::contract::ContractKind::$kind,
                stringify!($cond),
                file!(),
                line!(),
            )
            .into());
        }
    };
}

macro_rules! assertion {
    ($cond:expr $(,)?) => {
        $crate::contract::contract_check!(Assertion, $cond)
    };
}

macro_rules! precondition {
    ($cond:expr $(,)?) => {
        $crate::contract::contract_check!(Precondition, $cond)
    };
}

macro_rules! postcondition {
    ($cond:expr $(,)?) => {
        $crate::contract::contract_check!(Postcondition, $cond)
    };
}

macro_rules! invariant {
    ($cond:expr $(,)?) => {
        $crate::contract::contract_check!(Invariant, $cond)
    };
}

pub(crate) use assertion;
pub(crate) use contract_check;
pub(crate) use invariant;
pub(crate) use postcondition;
pub(crate) use precondition;
