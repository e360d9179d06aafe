use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::DataFrame;

/// One trading day for one security. Numeric fields are optional because
/// the provider may return null cells (suspended trading days and the like).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    pub ts_code: String,

    /// Trade date, parsed from the provider's compact `YYYYMMDD` text.
    #[serde(with = "compact_date")]
    pub trade_date: NaiveDate,

    pub open: Option<f64>,

    pub high: Option<f64>,

    pub low: Option<f64>,

    pub close: Option<f64>,

    pub pre_close: Option<f64>,

    pub change: Option<f64>,

    pub pct_chg: Option<f64>,

    pub vol: Option<f64>,

    pub amount: Option<f64>,
}

/// Daily bars keyed by trade date. The provider returns rows newest-first;
/// building the series re-keys them into a sorted map, so iteration is
/// strictly ascending by date and there is at most one bar per date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailySeries {
    bars: BTreeMap<NaiveDate, DailyBar>,
}

impl DailySeries {
    /// Decodes a columnar frame into a date-indexed series. A row whose
    /// date repeats an earlier row replaces it.
    pub fn from_frame(frame: &DataFrame) -> Result<Self, serde_json::Error> {
        let mut bars = BTreeMap::new();
        for bar in frame.deserialize_rows::<DailyBar>()? {
            bars.insert(bar.trade_date, bar);
        }
        Ok(Self { bars })
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Looks up the bar for an exact trade date.
    pub fn get(&self, date: NaiveDate) -> Option<&DailyBar> {
        self.bars.get(&date)
    }

    /// Iterates bars in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = &DailyBar> {
        self.bars.values()
    }

    /// Iterates trade dates in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.bars.keys().copied()
    }

    /// The earliest bar, if any.
    pub fn first(&self) -> Option<&DailyBar> {
        self.bars.values().next()
    }

    /// The latest bar, if any.
    pub fn last(&self) -> Option<&DailyBar> {
        self.bars.values().next_back()
    }
}

impl IntoIterator for DailySeries {
    type Item = DailyBar;
    type IntoIter = std::collections::btree_map::IntoValues<NaiveDate, DailyBar>;

    fn into_iter(self) -> Self::IntoIter {
        self.bars.into_values()
    }
}

mod compact_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y%m%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
