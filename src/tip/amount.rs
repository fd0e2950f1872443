use ethereum_types::U256;

use crate::constants::USDC_DECIMALS;
use crate::error::AmountError;

/// A validated tip amount in USDC smallest units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAmount {
    pub units: U256,
    pub display: String,
}

/// Parses a decimal USDC amount with at most six fractional digits.
///
/// Accepts `digits` or `digits.` followed by up to six digits. The fraction
/// is right-padded to six places, so `"1.5"` becomes `1_500_000` units.
pub fn parse_amount(input: &str) -> Result<ParsedAmount, AmountError> {
    let display = input.trim();
    if display.is_empty() {
        return Err(AmountError::EmptyInput);
    }

    let (whole, frac) = match display.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (display, ""),
    };
    let decimals = USDC_DECIMALS as usize;
    if whole.is_empty()
        || !whole.bytes().all(|b| b.is_ascii_digit())
        || frac.len() > decimals
        || !frac.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(AmountError::InvalidFormat);
    }

    let frac_padded = format!("{:0<width$}", frac, width = decimals);
    let whole_units = U256::from_dec_str(whole).map_err(|_| AmountError::AmountTooLarge)?;
    let frac_units = U256::from_dec_str(&frac_padded).map_err(|_| AmountError::AmountTooLarge)?;

    let units = whole_units
        .checked_mul(U256::from(10u64.pow(USDC_DECIMALS)))
        .and_then(|scaled| scaled.checked_add(frac_units))
        .ok_or(AmountError::AmountTooLarge)?;

    if units.is_zero() {
        return Err(AmountError::NonPositiveAmount);
    }

    Ok(ParsedAmount {
        units,
        display: display.to_string(),
    })
}
