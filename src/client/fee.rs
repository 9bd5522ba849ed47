use crate::config::cfg::Coin;

/// Fee attached to a signed transaction.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Fee {
    /// Simulate the tx and scale the gas by the configured `gas_adjustment`.
    #[default]
    Auto,
    /// Simulate the tx and scale the gas by the given multiplier.
    GasMultiplier(f64),
    /// Use exactly this fee, no simulation.
    Explicit(StdFee),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StdFee {
    pub amount: Vec<Coin>,
    pub gas: u64,
}

impl From<StdFee> for Fee {
    fn from(fee: StdFee) -> Fee {
        Fee::Explicit(fee)
    }
}

pub(crate) fn gas_limit(gas_used: u64, multiplier: f64) -> u64 {
    (gas_used as f64 * multiplier).ceil() as u64
}

pub(crate) fn fee_amount(gas_limit: u64, gas_prices: f64) -> u128 {
    (gas_limit as f64 * gas_prices).ceil() as u128
}
