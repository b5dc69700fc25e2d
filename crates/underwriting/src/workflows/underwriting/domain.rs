use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Underwriting slot collected over the dialogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    ZipCode,
    PropertyState,
    SalesPrice,
    DownPayment,
    InterestRate,
    OccupancyType,
    LoanTerm,
    TitleInsurance,
    PropertyType,
}

impl Field {
    /// Declaration order, which is also the storage order of the slot store.
    pub const fn ordered() -> [Self; 9] {
        [
            Self::ZipCode,
            Self::PropertyState,
            Self::SalesPrice,
            Self::DownPayment,
            Self::InterestRate,
            Self::OccupancyType,
            Self::LoanTerm,
            Self::TitleInsurance,
            Self::PropertyType,
        ]
    }

    /// Order in which a dialogue asks for the slots: financing first, then property details.
    pub const fn collection_order() -> [Self; 9] {
        [
            Self::SalesPrice,
            Self::DownPayment,
            Self::InterestRate,
            Self::LoanTerm,
            Self::ZipCode,
            Self::PropertyState,
            Self::PropertyType,
            Self::OccupancyType,
            Self::TitleInsurance,
        ]
    }

    /// Fields the summary cannot be rendered without.
    pub const fn required() -> [Self; 3] {
        [Self::SalesPrice, Self::DownPayment, Self::InterestRate]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::ZipCode => "zip_code",
            Self::PropertyState => "property_state",
            Self::SalesPrice => "sales_price",
            Self::DownPayment => "down_payment",
            Self::InterestRate => "interest_rate",
            Self::OccupancyType => "occupancy_type",
            Self::LoanTerm => "loan_term",
            Self::TitleInsurance => "title_insurance",
            Self::PropertyType => "property_type",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ZipCode => "Zip Code",
            Self::PropertyState => "Property State",
            Self::SalesPrice => "Sales Price",
            Self::DownPayment => "Down Payment",
            Self::InterestRate => "Interest Rate",
            Self::OccupancyType => "Occupancy",
            Self::LoanTerm => "Loan Term",
            Self::TitleInsurance => "Title Insurance",
            Self::PropertyType => "Property Type",
        }
    }

    pub const fn kind(self) -> FieldKind {
        match self {
            Self::SalesPrice | Self::DownPayment | Self::InterestRate | Self::LoanTerm => {
                FieldKind::Numeric
            }
            Self::ZipCode => FieldKind::Pattern,
            Self::PropertyState
            | Self::OccupancyType
            | Self::TitleInsurance
            | Self::PropertyType => FieldKind::Enumerated,
        }
    }

    /// Slots that must be committed before this one can be validated.
    pub const fn dependencies(self) -> &'static [Field] {
        match self {
            Self::DownPayment => &[Self::SalesPrice],
            _ => &[],
        }
    }

    /// Question a dialogue asks to collect this slot.
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::ZipCode => "What's the property's zip code?",
            Self::PropertyState => "Which state is the property in?",
            Self::SalesPrice => "What's the sales price of the property?",
            Self::DownPayment => "Next, what's your down payment?",
            Self::InterestRate => "Now, what's the interest rate?",
            Self::OccupancyType => "Will the property be owner-occupied?",
            Self::LoanTerm => "How many years is the loan term?",
            Self::TitleInsurance => "Will you be purchasing title insurance?",
            Self::PropertyType => "What type of property is it?",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        let field = match normalized.as_str() {
            "zip_code" | "zip" | "zipcode" => Self::ZipCode,
            "property_state" | "state" => Self::PropertyState,
            "sales_price" | "price" => Self::SalesPrice,
            "down_payment" | "down" => Self::DownPayment,
            "interest_rate" | "rate" => Self::InterestRate,
            "occupancy_type" | "occupancy" => Self::OccupancyType,
            "loan_term" | "term" => Self::LoanTerm,
            "title_insurance" | "title" => Self::TitleInsurance,
            "property_type" => Self::PropertyType,
            _ => return Err(UnknownField(value.trim().to_string())),
        };
        Ok(field)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown underwriting field '{0}'")]
pub struct UnknownField(pub String);

/// Declared value type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Numeric,
    Enumerated,
    Pattern,
}

/// Normalized value committed to a slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotValue {
    Number(f64),
    Text(String),
}

impl SlotValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            SlotValue::Number(value) => Some(*value),
            SlotValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SlotValue::Number(_) => None,
            SlotValue::Text(value) => Some(value),
        }
    }
}

impl fmt::Display for SlotValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotValue::Number(value) => write!(f, "{value}"),
            SlotValue::Text(value) => f.write_str(value),
        }
    }
}

/// Advisory classification attached to accepted numeric values. `Green < Yellow`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "tier", content = "reason")]
pub enum RiskTier {
    Green,
    Yellow(YellowReason),
}

impl RiskTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Green => "GREEN",
            Self::Yellow(_) => "YELLOW",
        }
    }

    pub const fn reason(self) -> Option<YellowReason> {
        match self {
            Self::Green => None,
            Self::Yellow(reason) => Some(reason),
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Green => "🟢",
            Self::Yellow(_) => "🟡",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum YellowReason {
    BelowMinimum,
    Moderate,
    BelowMarket,
    UsuryWarning,
    ShortTerm,
    LongTerm,
}

impl YellowReason {
    pub const fn label(self) -> &'static str {
        match self {
            Self::BelowMinimum => "below-minimum",
            Self::Moderate => "moderate",
            Self::BelowMarket => "below-market",
            Self::UsuryWarning => "usury-warning",
            Self::ShortTerm => "short-term",
            Self::LongTerm => "long-term",
        }
    }
}
