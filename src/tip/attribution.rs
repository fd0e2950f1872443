use crate::error::TipError;

/// 16-byte marker that closes every ERC-8021 data suffix.
pub const ERC8021_MARKER: &str = "80218021802180218021802180218021";
const SCHEMA_CANONICAL: u8 = 0;

/// Turns builder codes into the opaque suffix attached to a call bundle.
pub trait AttributionEncoder: Send + Sync {
    fn data_suffix(&self, codes: &[&str]) -> Result<String, TipError>;
}

/// ERC-8021 schema 0: `codes ‖ codes_len ‖ schema_id ‖ marker`, read from
/// the end of calldata backwards by indexers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Erc8021;

impl AttributionEncoder for Erc8021 {
    fn data_suffix(&self, codes: &[&str]) -> Result<String, TipError> {
        let joined = codes.join(",");
        let len = u8::try_from(joined.len())
            .map_err(|_| TipError::Provider("Builder codes too long for attribution.".to_string()))?;
        Ok(format!(
            "0x{}{}{}{}",
            hex::encode(joined.as_bytes()),
            hex::encode([len]),
            hex::encode([SCHEMA_CANONICAL]),
            ERC8021_MARKER
        ))
    }
}
