use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ConversionError;
use crate::rates::{RateTable, SymbolTable};

/// An amount expressed in one target currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// ISO 4217 code of the target currency.
    pub currency: String,
    /// Display name of the target currency.
    pub name: String,
    pub amount: Decimal,
}

/// Converts `amount` from `origin` to `target` through the pivot currency.
///
/// Both rates are expressed per unit of the pivot, so the amount is first
/// divided by the origin rate and then multiplied by the target rate.
pub fn convert_amount(
    amount: Decimal,
    origin: &str,
    target: &str,
    rates: &RateTable,
) -> Result<Decimal, ConversionError> {
    let origin_rate = rates
        .get(origin)
        .ok_or_else(|| ConversionError::UnknownCurrency(origin.to_string()))?;
    let target_rate = rates
        .get(target)
        .ok_or_else(|| ConversionError::UnknownCurrency(target.to_string()))?;

    if origin_rate.is_zero() {
        return Err(ConversionError::ZeroRate(origin.to_string()));
    }

    amount
        .checked_div(*origin_rate)
        .and_then(|in_pivot| in_pivot.checked_mul(*target_rate))
        .ok_or(ConversionError::Overflow)
}

/// Converts `amount` into every target currency known to both tables.
///
/// Targets missing from either table are skipped. Repeated targets are
/// converted once, in order of first appearance.
pub fn convert<S: AsRef<str>>(
    amount: Decimal,
    origin: &str,
    rates: &RateTable,
    symbols: &SymbolTable,
    targets: &[S],
) -> Result<Vec<ConversionResult>, ConversionError> {
    let mut results: Vec<ConversionResult> = Vec::with_capacity(targets.len());

    for target in targets.iter().map(AsRef::as_ref) {
        if results.iter().any(|r| r.currency == target) {
            continue;
        }
        let (Some(_), Some(name)) = (rates.get(target), symbols.get(target)) else {
            continue;
        };

        results.push(ConversionResult {
            currency: target.to_string(),
            name: name.clone(),
            amount: convert_amount(amount, origin, target, rates)?,
        });
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn rates() -> RateTable {
        [
            ("EUR", dec!(1)),
            ("BRL", dec!(5.0)),
            ("USD", dec!(1.1)),
            ("JPY", dec!(161.25)),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
    }

    fn symbols() -> SymbolTable {
        [
            ("EUR", "Euro"),
            ("BRL", "Brazilian Real"),
            ("USD", "United States Dollar"),
            ("GBP", "British Pound Sterling"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn test_empty_targets_yield_nothing() {
        let targets: [&str; 0] = [];
        let result = convert(dec!(100), "BRL", &rates(), &symbols(), &targets).unwrap();

        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_targets_ignore_zero_origin_rate() {
        let mut rates = rates();
        rates.insert("BRL".to_string(), Decimal::ZERO);
        let targets: [&str; 0] = [];

        assert!(convert(dec!(100), "BRL", &rates, &symbols(), &targets)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_brl_to_usd_through_euro() {
        let result = convert(dec!(100), "BRL", &rates(), &symbols(), &["USD"]).unwrap();

        assert_eq!(
            result,
            vec![ConversionResult {
                currency: "USD".to_string(),
                name: "United States Dollar".to_string(),
                amount: dec!(22.0),
            }]
        );
    }

    #[test]
    fn test_unknown_targets_are_skipped() {
        // JPY has a rate but no symbol, GBP a symbol but no rate.
        let result = convert(
            dec!(100),
            "BRL",
            &rates(),
            &symbols(),
            &["JPY", "USD", "GBP", "XXX"],
        )
        .unwrap();

        let codes: Vec<_> = result.iter().map(|r| r.currency.as_str()).collect();
        assert_eq!(codes, vec!["USD"]);
    }

    #[test]
    fn test_repeated_targets_convert_once() {
        let result = convert(dec!(10), "EUR", &rates(), &symbols(), &["BRL", "BRL"]).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].amount, dec!(50));
    }

    #[test]
    fn test_zero_origin_rate_is_an_error() {
        let mut rates = rates();
        rates.insert("BRL".to_string(), Decimal::ZERO);

        let result = convert(dec!(100), "BRL", &rates, &symbols(), &["USD"]);

        assert_eq!(result, Err(ConversionError::ZeroRate("BRL".to_string())));
    }

    #[test]
    fn test_missing_origin_rate_is_an_error() {
        let result = convert(dec!(100), "CHF", &rates(), &symbols(), &["USD"]);

        assert_eq!(
            result,
            Err(ConversionError::UnknownCurrency("CHF".to_string()))
        );
    }

    #[test]
    fn test_same_currency_is_identity() {
        for amount in [dec!(100), dec!(0.01), dec!(123456.789)] {
            for code in ["BRL", "USD", "EUR"] {
                let result = convert(amount, code, &rates(), &symbols(), &[code]).unwrap();
                let difference = (result[0].amount - amount).abs();
                assert!(
                    difference < dec!(0.000000000000000001),
                    "{amount} {code} came back as {}",
                    result[0].amount
                );
            }
        }
    }

    #[test]
    fn test_overflow_is_an_error() {
        let mut rates = rates();
        rates.insert("TINY".to_string(), dec!(0.0000000000000000000000000001));

        let result = convert_amount(Decimal::MAX, "TINY", "USD", &rates);

        assert_eq!(result, Err(ConversionError::Overflow));
    }
}
