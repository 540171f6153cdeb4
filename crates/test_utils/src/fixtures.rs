//! Stock test values

use chrono::NaiveDate;
use fake::faker::name::raw::Name;
use fake::locales::PT_BR;
use fake::Fake;

use core_kernel::Money;

/// Common monetary amounts
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// The standard monthly tuition fee
    pub fn monthly_fee() -> Money {
        Money::from_centavos(50_000)
    }

    /// A typical expense amount
    pub fn expense() -> Money {
        Money::from_centavos(12_500)
    }
}

/// Common calendar dates
pub struct DateFixtures;

impl DateFixtures {
    pub fn due_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    pub fn expense_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }
}

/// Common strings
pub struct StringFixtures;

impl StringFixtures {
    /// A random guardian name
    pub fn guardian_name() -> String {
        Name(PT_BR).fake()
    }

    pub fn tuition_description() -> String {
        "Mensalidade".to_string()
    }
}
