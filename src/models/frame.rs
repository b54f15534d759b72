//! Tabular market-data model shared by the indicator pipeline and signals.
//!
//! A [`MarketFrame`] is a schema (the columns the loader actually supplied)
//! plus typed rows. Cells use `Option` as the null: loaders apply a
//! coerce-or-null policy up front, mapping non-numeric or absent input to
//! `None`, so the engine never parses strings into numbers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{EngineError, Result};

/// Column names of the upstream daily-data provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    Code,
    Date,
    AdjustmentOpen,
    AdjustmentHigh,
    AdjustmentLow,
    AdjustmentClose,
    AdjustmentVolume,
    Close,
    Sector33Code,
    LongMarginTradeVolume,
    ForeignersBalance,
    ShortPositionsToSharesOutstandingRatio,
    EquityToAssetRatio,
    OperatingProfit,
    NetSales,
    EarningsPerShare,
    BookValuePerShare,
}

impl Column {
    /// Provider spelling of the column name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Code => "Code",
            Column::Date => "Date",
            Column::AdjustmentOpen => "AdjustmentOpen",
            Column::AdjustmentHigh => "AdjustmentHigh",
            Column::AdjustmentLow => "AdjustmentLow",
            Column::AdjustmentClose => "AdjustmentClose",
            Column::AdjustmentVolume => "AdjustmentVolume",
            Column::Close => "Close",
            Column::Sector33Code => "Sector33Code",
            Column::LongMarginTradeVolume => "LongMarginTradeVolume",
            Column::ForeignersBalance => "ForeignersBalance",
            Column::ShortPositionsToSharesOutstandingRatio => {
                "ShortPositionsToSharesOutstandingRatio"
            }
            Column::EquityToAssetRatio => "EquityToAssetRatio",
            Column::OperatingProfit => "OperatingProfit",
            Column::NetSales => "NetSales",
            Column::EarningsPerShare => "EarningsPerShare",
            Column::BookValuePerShare => "BookValuePerShare",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Columns every price frame must carry before the aggregator runs.
pub const PRICE_COLUMNS: &[Column] = &[
    Column::Code,
    Column::Date,
    Column::AdjustmentOpen,
    Column::AdjustmentHigh,
    Column::AdjustmentLow,
    Column::AdjustmentClose,
    Column::AdjustmentVolume,
];

/// One daily record. Adjusted OHLCV fields come from the price endpoint;
/// the remaining fields are joined in from margin, short-interest and
/// statement data when a signal needs them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketRow {
    pub code: Option<String>,
    pub date: Option<NaiveDate>,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<f64>,
    /// Unadjusted close, as joined onto statement rows.
    pub raw_close: Option<f64>,
    pub sector_code: Option<String>,
    pub long_margin_volume: Option<f64>,
    pub foreigners_balance: Option<f64>,
    pub short_ratio: Option<f64>,
    pub equity_to_asset_ratio: Option<f64>,
    pub operating_profit: Option<f64>,
    pub net_sales: Option<f64>,
    pub earnings_per_share: Option<f64>,
    pub book_value_per_share: Option<f64>,
}

impl MarketRow {
    /// Build a plain daily quote row.
    pub fn quote(
        code: &str,
        date: NaiveDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        Self {
            code: Some(code.to_string()),
            date: Some(date),
            open: Some(open),
            high: Some(high),
            low: Some(low),
            close: Some(close),
            volume: Some(volume),
            ..Self::default()
        }
    }
}

/// A multi-security table: declared schema plus rows.
///
/// The schema records which columns the loader supplied; a `None` cell in
/// a supplied column is ordinary missing data, while an undeclared column
/// is a configuration error for any component that requires it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketFrame {
    columns: Vec<Column>,
    rows: Vec<MarketRow>,
}

impl MarketFrame {
    pub fn new(columns: Vec<Column>, rows: Vec<MarketRow>) -> Self {
        Self { columns, rows }
    }

    /// Build a frame carrying the standard daily-price schema.
    pub fn prices(rows: Vec<MarketRow>) -> Self {
        Self::new(PRICE_COLUMNS.to_vec(), rows)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[MarketRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, column: Column) -> bool {
        self.columns.contains(&column)
    }

    /// Fail with the first missing column, before any per-row work.
    pub fn require(&self, columns: &[Column]) -> Result<()> {
        for &column in columns {
            if !self.has_column(column) {
                return Err(EngineError::MissingColumn(column));
            }
        }
        Ok(())
    }
}
