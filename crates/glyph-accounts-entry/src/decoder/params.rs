use serde::{Deserialize, Serialize};

/// Conventional number of digits per account number.
pub const DEFAULT_ENTRY_WIDTH: usize = 9;

fn default_width() -> usize {
    DEFAULT_ENTRY_WIDTH
}

/// Configuration for the entry decoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoderParams {
    /// Number of digit cells expected per entry.
    ///
    /// Every decoded sequence has exactly this many symbols; missing columns
    /// decode as unknown.
    #[serde(default = "default_width")]
    pub width: usize,
}

impl DecoderParams {
    pub fn with_width(width: usize) -> Self {
        Self { width }
    }
}

impl Default for DecoderParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_ENTRY_WIDTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_width_defaults_to_nine() {
        let params: DecoderParams = serde_json::from_str("{}").expect("params");
        assert_eq!(params, DecoderParams::default());
        assert_eq!(params.width, 9);

        let params: DecoderParams = serde_json::from_str(r#"{"width": 4}"#).expect("params");
        assert_eq!(params.width, 4);
    }
}
