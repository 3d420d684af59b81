// Time slice keys - 12 calendar months plus the annual aggregate
use serde::{Deserialize, Serialize};

/// One of the 13 selectable units of data. Month codes follow the source
/// dataset's Spanish abbreviations; `Annual` is the yearly aggregate and is
/// never entered by auto-play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSliceKey {
    #[serde(rename = "ENE")]
    Ene,
    #[serde(rename = "FEB")]
    Feb,
    #[serde(rename = "MAR")]
    Mar,
    #[serde(rename = "ABR")]
    Abr,
    #[serde(rename = "MAY")]
    May,
    #[serde(rename = "JUN")]
    Jun,
    #[serde(rename = "JUL")]
    Jul,
    #[serde(rename = "AGO")]
    Ago,
    #[serde(rename = "SEP")]
    Sep,
    #[serde(rename = "OCT")]
    Oct,
    #[serde(rename = "NOV")]
    Nov,
    #[serde(rename = "DIC")]
    Dic,
    Annual,
}

/// Calendar order used for auto-play advancement.
pub const MONTH_ORDER: [TimeSliceKey; 12] = [
    TimeSliceKey::Ene,
    TimeSliceKey::Feb,
    TimeSliceKey::Mar,
    TimeSliceKey::Abr,
    TimeSliceKey::May,
    TimeSliceKey::Jun,
    TimeSliceKey::Jul,
    TimeSliceKey::Ago,
    TimeSliceKey::Sep,
    TimeSliceKey::Oct,
    TimeSliceKey::Nov,
    TimeSliceKey::Dic,
];

impl TimeSliceKey {
    pub fn code(self) -> &'static str {
        match self {
            TimeSliceKey::Ene => "ENE",
            TimeSliceKey::Feb => "FEB",
            TimeSliceKey::Mar => "MAR",
            TimeSliceKey::Abr => "ABR",
            TimeSliceKey::May => "MAY",
            TimeSliceKey::Jun => "JUN",
            TimeSliceKey::Jul => "JUL",
            TimeSliceKey::Ago => "AGO",
            TimeSliceKey::Sep => "SEP",
            TimeSliceKey::Oct => "OCT",
            TimeSliceKey::Nov => "NOV",
            TimeSliceKey::Dic => "DIC",
            TimeSliceKey::Annual => "Annual",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        if code == "Annual" {
            return Some(TimeSliceKey::Annual);
        }
        MONTH_ORDER.iter().copied().find(|k| k.code() == code)
    }

    /// Position within the 12-month cycle; `None` for `Annual`.
    pub fn month_index(self) -> Option<usize> {
        MONTH_ORDER.iter().position(|k| *k == self)
    }

    /// The slice auto-play advances to next. Wraps DIC back to ENE; from
    /// `Annual` the cycle enters at ENE.
    pub fn next_month(self) -> TimeSliceKey {
        match self.month_index() {
            Some(i) => MONTH_ORDER[(i + 1) % MONTH_ORDER.len()],
            None => MONTH_ORDER[0],
        }
    }
}
