//! JSON output.

use crate::error::AppError;
use serde::Serialize;

/// Pretty-print any serialisable output value.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(AppError::Serialize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CidrBlock;
    use crate::processing::CidrReport;

    #[test]
    fn test_to_json_report() {
        let block = CidrBlock::parse("10.0.0.1/8").unwrap();
        let json = to_json(&CidrReport::from_block(&block)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["cidr"], "10.0.0.1/8");
        assert_eq!(value["broadcast"], "10.255.255.255");
    }
}
