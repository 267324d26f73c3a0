//! Account model
//!
//! A named ledger balance with a debit/credit normal balance. The stored
//! balance is positive in the account's own polarity; [`Account::true_balance`]
//! converts it to the debit-positive convention.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::AccountId;
use super::money::Money;
use crate::error::{TaxbookError, TaxbookResult};

/// The side on which an account's balance is conventionally positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalBalance {
    Debit,
    Credit,
}

impl NormalBalance {
    /// Parse a normal balance tag, ignoring case
    pub fn parse(s: &str) -> TaxbookResult<Self> {
        match s.to_lowercase().as_str() {
            "debit" => Ok(Self::Debit),
            "credit" => Ok(Self::Credit),
            _ => Err(TaxbookError::InvalidPolarity(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debit => "debit",
            Self::Credit => "credit",
        }
    }
}

impl FromStr for NormalBalance {
    type Err = TaxbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for NormalBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A ledger account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,

    /// Account name (e.g., "Equipment")
    pub name: String,

    pub normal_balance: NormalBalance,

    /// Balance in the account's own polarity
    pub balance: Money,

    /// Whether the account offsets another account of the same type
    #[serde(default)]
    pub contra: bool,

    /// Optional classification such as "current" or "long-term"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
}

impl Account {
    /// Create a new account
    ///
    /// `normal_balance` must be "debit" or "credit" in any case. Raw numbers
    /// are accepted for the balance through `Into<Money>`.
    ///
    /// # Examples
    /// ```
    /// use taxbook::models::{Account, Money};
    /// let cash = Account::new("Cash", "Debit", 250.0_f64).unwrap();
    /// assert_eq!(cash.true_balance(), Money::from_cents(25_000));
    /// ```
    pub fn new(
        name: impl Into<String>,
        normal_balance: &str,
        balance: impl Into<Money>,
    ) -> TaxbookResult<Self> {
        Ok(Self {
            id: AccountId::new(),
            name: name.into(),
            normal_balance: NormalBalance::parse(normal_balance)?,
            balance: balance.into(),
            contra: false,
            term: None,
        })
    }

    /// Mark the account as a contra account
    pub fn as_contra(mut self) -> Self {
        self.contra = true;
        self
    }

    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    /// Balance under the debit-positive convention
    ///
    /// Credit-normal accounts are negated; the contra flag inverts the sign
    /// again, so a credit-normal contra account reads positive. This sign
    /// table is the contract: do not collapse it to "every credit is -1".
    pub fn true_balance(&self) -> Money {
        let multiplier: i64 = match (self.normal_balance, self.contra) {
            (NormalBalance::Debit, false) | (NormalBalance::Credit, true) => 1,
            (NormalBalance::Debit, true) | (NormalBalance::Credit, false) => -1,
        };
        self.balance * multiplier
    }

    /// Post a debit: increases a debit-normal balance, decreases a credit-normal one
    pub fn debit(&mut self, amount: Money) {
        match self.normal_balance {
            NormalBalance::Debit => self.balance += amount,
            NormalBalance::Credit => self.balance -= amount,
        }
    }

    /// Post a credit: increases a credit-normal balance, decreases a debit-normal one
    pub fn credit(&mut self, amount: Money) {
        match self.normal_balance {
            NormalBalance::Debit => self.balance -= amount,
            NormalBalance::Credit => self.balance += amount,
        }
    }

    /// Render the labeled summary using the given currency symbol
    pub fn render_with_symbol(&self, symbol: &str) -> String {
        let term = self.term.as_deref().unwrap_or("None");
        format!(
            "{}:\n    Normal balance: {}\n    Term: {}\n    Balance: {}",
            self.name,
            self.normal_balance,
            term,
            self.balance.format_with_symbol(symbol)
        )
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with_symbol("$"))
    }
}
