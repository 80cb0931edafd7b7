use serde::{Deserialize, Serialize};

use crate::error::MortgageError;

pub const DEFAULT_DOWN_PAYMENT_RATIO: f64 = 0.2;
pub const DEFAULT_ANNUAL_RATE_PERCENT: f64 = 8.5;
pub const DEFAULT_TERM_YEARS: u32 = 20;

/// Loan parameters for a single plot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MortgageInputs {
    pub price: f64,
    pub down_payment: f64,
    pub annual_rate_percent: f64,
    pub term_years: u32,
}

/// Estimated repayment figures
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MortgageQuote {
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub total_payment: f64,
}

impl MortgageInputs {
    /// 20% down, 8.5% a year over 20 years
    pub fn for_price(price: u64) -> Self {
        let price = price as f64;
        Self {
            price,
            down_payment: price * DEFAULT_DOWN_PAYMENT_RATIO,
            annual_rate_percent: DEFAULT_ANNUAL_RATE_PERCENT,
            term_years: DEFAULT_TERM_YEARS,
        }
    }

    pub fn principal(&self) -> f64 {
        self.price - self.down_payment
    }

    pub fn down_payment_percent(&self) -> f64 {
        if self.price > 0.0 {
            self.down_payment / self.price * 100.0
        } else {
            0.0
        }
    }

    /// Check the ranges the calculator form accepts
    pub fn validate(&self) -> Result<(), MortgageError> {
        if self.down_payment < 0.0 {
            return Err(MortgageError::NegativeDownPayment);
        }
        if self.down_payment > self.price {
            return Err(MortgageError::DownPaymentExceedsPrice {
                down_payment: self.down_payment,
                price: self.price,
            });
        }
        if !(1.0..=20.0).contains(&self.annual_rate_percent) {
            return Err(MortgageError::RateOutOfRange(self.annual_rate_percent));
        }
        if !(5..=30).contains(&self.term_years) {
            return Err(MortgageError::TermOutOfRange(self.term_years));
        }
        Ok(())
    }

    /// Standard amortization: `M = P·r·(1+r)^n / ((1+r)^n − 1)`.
    ///
    /// Never fails; whenever the formula has no finite answer (zero principal,
    /// zero rate, zero term, a term too long to count in months) the whole
    /// quote is zero. A down payment above the price leaves nothing to borrow,
    /// so it also quotes zero; use [`MortgageInputs::validate`] to reject it.
    pub fn quote(&self) -> MortgageQuote {
        let principal = self.principal().max(0.0);
        let monthly_rate = self.annual_rate_percent / 100.0 / 12.0;
        let Some(payments) = self
            .term_years
            .checked_mul(12)
            .and_then(|months| i32::try_from(months).ok())
        else {
            return MortgageQuote::default();
        };

        let growth = (1.0 + monthly_rate).powi(payments);
        let monthly_payment = principal * monthly_rate * growth / (growth - 1.0);

        if !monthly_payment.is_finite() || monthly_payment == 0.0 {
            return MortgageQuote::default();
        }

        let total_payment = monthly_payment * payments as f64;
        MortgageQuote {
            monthly_payment,
            total_interest: total_payment - principal,
            total_payment,
        }
    }
}
