use crate::error::InputError;
use crate::model::Amount;
use crate::Result;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One spending record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub(crate) id: u64,
    pub(crate) description: String,
    pub(crate) amount: Amount,
    pub(crate) category: String,
    pub(crate) date: String,
}

/// The partial form of an `Expense`, used for both inserts and updates. A `None` field means
/// "not supplied": on insert it takes its default, on update it keeps the existing value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseFields {
    pub description: Option<String>,
    pub amount: Option<Amount>,
    pub category: Option<String>,
    pub date: Option<String>,
}

impl Expense {
    /// Builds a new record with the given `id`.
    ///
    /// # Errors
    /// - `InputError::MissingAmount` if `fields.amount` is `None`.
    /// - `InputError::InvalidDate` if `fields.date` is not a `YYYY-MM-DD` date.
    pub(crate) fn create(id: u64, fields: ExpenseFields) -> Result<Self> {
        let amount = fields.amount.ok_or(InputError::MissingAmount)?;
        let date = match fields.date {
            Some(date) => validate_date(date)?,
            None => today(),
        };
        Ok(Self {
            id,
            description: fields.description.unwrap_or_default(),
            amount,
            category: fields.category.unwrap_or_default(),
            date,
        })
    }

    /// Overwrites the fields that are present in `fields`. Nothing is changed if validation fails.
    pub(crate) fn apply(&mut self, fields: ExpenseFields) -> Result<()> {
        let date = fields.date.map(validate_date).transpose()?;
        if let Some(description) = fields.description {
            self.description = description;
        }
        if let Some(amount) = fields.amount {
            self.amount = amount;
        }
        if let Some(category) = fields.category {
            self.category = category;
        }
        if let Some(date) = date {
            self.date = date;
        }
        Ok(())
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn date(&self) -> &str {
        &self.date
    }
}

/// Returns today's local date in YYYY-MM-DD format.
pub(crate) fn today() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

fn validate_date(date: String) -> Result<String> {
    match NaiveDate::parse_from_str(&date, DATE_FORMAT) {
        Ok(_) => Ok(date),
        Err(_) => Err(InputError::InvalidDate(date).into()),
    }
}
