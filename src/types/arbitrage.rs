//! Arbitrage opportunity types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::utils::safe_ratio;

/// The four arbitrage variants the dashboard can quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArbitrageType {
    Direct,
    Triangular,
    Futures,
    P2P,
}

impl fmt::Display for ArbitrageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArbitrageType::Direct => write!(f, "direct"),
            ArbitrageType::Triangular => write!(f, "triangular"),
            ArbitrageType::Futures => write!(f, "futures"),
            ArbitrageType::P2P => write!(f, "p2p"),
        }
    }
}

impl FromStr for ArbitrageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" => Ok(ArbitrageType::Direct),
            "triangular" => Ok(ArbitrageType::Triangular),
            "futures" => Ok(ArbitrageType::Futures),
            "p2p" => Ok(ArbitrageType::P2P),
            _ => Err(format!("Unknown arbitrage type: {}", s)),
        }
    }
}

/// Buy on one venue, sell on another. Shared by Direct and P2P quotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenuePair {
    pub buy_exchange: String,
    pub sell_exchange: String,
    pub buy_price: Decimal,
    /// May sit below `buy_price`, which yields a negative spread.
    pub sell_price: Decimal,
}

/// One arbitrage opportunity, keyed by its variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Opportunity {
    Direct(VenuePair),
    Triangular {
        exchange_name: String,
        trade_count: u32,
        /// Synthetic return of the whole cycle as a fraction (0.015 = 1.5%).
        flat_return_rate: Decimal,
    },
    Futures {
        spot_exchange: String,
        spot_price: Decimal,
        futures_exchange: String,
        futures_price: Decimal,
    },
    P2P(VenuePair),
}

impl Opportunity {
    pub fn direct(
        buy_exchange: &str,
        sell_exchange: &str,
        buy_price: Decimal,
        sell_price: Decimal,
    ) -> Self {
        Opportunity::Direct(VenuePair {
            buy_exchange: buy_exchange.to_string(),
            sell_exchange: sell_exchange.to_string(),
            buy_price,
            sell_price,
        })
    }

    pub fn p2p(
        buy_exchange: &str,
        sell_exchange: &str,
        buy_price: Decimal,
        sell_price: Decimal,
    ) -> Self {
        Opportunity::P2P(VenuePair {
            buy_exchange: buy_exchange.to_string(),
            sell_exchange: sell_exchange.to_string(),
            buy_price,
            sell_price,
        })
    }

    pub fn triangular(exchange_name: &str, trade_count: u32, flat_return_rate: Decimal) -> Self {
        Opportunity::Triangular {
            exchange_name: exchange_name.to_string(),
            trade_count,
            flat_return_rate,
        }
    }

    pub fn futures(
        spot_exchange: &str,
        spot_price: Decimal,
        futures_exchange: &str,
        futures_price: Decimal,
    ) -> Self {
        Opportunity::Futures {
            spot_exchange: spot_exchange.to_string(),
            spot_price,
            futures_exchange: futures_exchange.to_string(),
            futures_price,
        }
    }

    pub fn arbitrage_type(&self) -> ArbitrageType {
        match self {
            Opportunity::Direct(_) => ArbitrageType::Direct,
            Opportunity::Triangular { .. } => ArbitrageType::Triangular,
            Opportunity::Futures { .. } => ArbitrageType::Futures,
            Opportunity::P2P(_) => ArbitrageType::P2P,
        }
    }

    /// Price spread relative to the base price, in percent.
    ///
    /// Zero when the base price is zero. Triangular quotes report their flat
    /// return rate instead.
    pub fn spread_pct(&self) -> Decimal {
        let hundred = Decimal::ONE_HUNDRED;
        match self {
            Opportunity::Direct(pair) | Opportunity::P2P(pair) => {
                safe_ratio(pair.sell_price.saturating_sub(pair.buy_price), pair.buy_price).saturating_mul(hundred)
            }
            Opportunity::Triangular { flat_return_rate, .. } => flat_return_rate.saturating_mul(hundred),
            Opportunity::Futures { spot_price, futures_price, .. } => {
                safe_ratio(futures_price.saturating_sub(*spot_price), *spot_price).saturating_mul(hundred)
            }
        }
    }

    /// Short route label such as "Binance → Kraken".
    pub fn route(&self) -> String {
        match self {
            Opportunity::Direct(pair) | Opportunity::P2P(pair) => {
                format!("{} → {}", pair.buy_exchange, pair.sell_exchange)
            }
            Opportunity::Triangular { exchange_name, trade_count, .. } => {
                format!("{} ({} legs)", exchange_name, trade_count)
            }
            Opportunity::Futures { spot_exchange, futures_exchange, .. } => {
                format!("{} spot → {} futures", spot_exchange, futures_exchange)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_arbitrage_type_round_trips_through_display() {
        for kind in [
            ArbitrageType::Direct,
            ArbitrageType::Triangular,
            ArbitrageType::Futures,
            ArbitrageType::P2P,
        ] {
            assert_eq!(kind.to_string().parse::<ArbitrageType>().unwrap(), kind);
        }
        assert!("spatial".parse::<ArbitrageType>().is_err());
    }

    #[test]
    fn test_variant_reports_its_type() {
        let opp = Opportunity::p2p("LocalBitcoins", "Binance", dec!(100), dec!(101));
        assert_eq!(opp.arbitrage_type(), ArbitrageType::P2P);
        let opp = Opportunity::triangular("Binance", 3, dec!(0.015));
        assert_eq!(opp.arbitrage_type(), ArbitrageType::Triangular);
    }

    #[test]
    fn test_spread_pct_handles_zero_base_price() {
        let opp = Opportunity::futures("Binance", dec!(0), "Bybit", dec!(100));
        assert_eq!(opp.spread_pct(), Decimal::ZERO);

        let opp = Opportunity::direct("Binance", "Kraken", dec!(100), dec!(102));
        assert_eq!(opp.spread_pct(), dec!(2));

        let opp = Opportunity::direct("Binance", "Kraken", dec!(100), dec!(99));
        assert_eq!(opp.spread_pct(), dec!(-1));
    }

    #[test]
    fn test_opportunity_serializes_with_type_tag() {
        let opp = Opportunity::p2p("Paxful", "Coinbase", dec!(1), dec!(2));
        let json = serde_json::to_value(&opp).unwrap();
        assert_eq!(json["type"], "p2p");
        assert_eq!(json["buy_exchange"], "Paxful");

        let back: Opportunity = serde_json::from_value(json).unwrap();
        assert_eq!(back, opp);
    }
}
