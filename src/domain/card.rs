use serde::{Deserialize, Serialize};

/// Maximum length of `cust_name` accepted by the processor.
pub const MAX_NAME_LENGTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardBrand {
    Visa,
    Master,
    AmericanExpress,
    Discover,
}

impl CardBrand {
    /// Brands the processor accepts.
    pub const SUPPORTED: [CardBrand; 4] = [
        CardBrand::Visa,
        CardBrand::Master,
        CardBrand::AmericanExpress,
        CardBrand::Discover,
    ];
}

/// The card used for purchase, authorize and verify.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCard {
    pub number: String,
    pub verification_value: String,
    pub month: u8,
    pub year: u16,
    pub first_name: String,
    pub last_name: String,
}

impl CreditCard {
    /// Expiry as `MMYY`: zero-padded month followed by the last two digits of
    /// the zero-padded four digit year.
    pub fn expiry(&self) -> String {
        format!("{:02}{:02}", self.month, self.year % 100)
    }

    /// `"first last"`, cut to [`MAX_NAME_LENGTH`] characters.
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .chars()
            .take(MAX_NAME_LENGTH)
            .collect()
    }
}

// Card data stays out of logs and panics.
impl std::fmt::Debug for CreditCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let last_four: String = self
            .number
            .chars()
            .skip(self.number.chars().count().saturating_sub(4))
            .collect();
        f.debug_struct("CreditCard")
            .field("number", &format_args!("XXXX{last_four}"))
            .field("month", &self.month)
            .field("year", &self.year)
            .finish_non_exhaustive()
    }
}
