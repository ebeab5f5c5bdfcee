use serde::{Deserialize, Serialize};

/// Countries the company trades with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    India,
    China,
    Germany,
    #[serde(rename = "UAE")]
    Uae,
    Singapore,
    #[serde(rename = "USA")]
    Usa,
    #[serde(rename = "UK")]
    Uk,
}

impl Country {
    pub const ALL: [Country; 7] = [
        Country::India,
        Country::China,
        Country::Germany,
        Country::Uae,
        Country::Singapore,
        Country::Usa,
        Country::Uk,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Country::India => "India",
            Country::China => "China",
            Country::Germany => "Germany",
            Country::Uae => "UAE",
            Country::Singapore => "Singapore",
            Country::Usa => "USA",
            Country::Uk => "UK",
        }
    }

    /// ISO currency code used on purchase orders from this country.
    ///
    /// Only Germany invoices in a non-dollar currency; everything else is USD.
    /// No conversion is performed anywhere.
    pub fn currency(&self) -> &'static str {
        match self {
            Country::Germany => "EUR",
            _ => "USD",
        }
    }
}

impl core::fmt::Display for Country {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
