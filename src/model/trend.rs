use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub volume: f64,
}

/// Daily activity volume for a wallet, one point per calendar day from the
/// first to the last active day, inactive days at 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    points: Vec<TrendPoint>,
}

impl TrendSeries {
    pub fn new(points: Vec<TrendPoint>) -> Self { Self { points } }

    pub fn points(&self) -> &[TrendPoint] { &self.points }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn first_date(&self) -> Option<NaiveDate> { self.points.first().map(|point| point.date) }

    pub fn last_date(&self) -> Option<NaiveDate> { self.points.last().map(|point| point.date) }

    pub fn max_volume(&self) -> f64 { self.points.iter().map(|point| point.volume).fold(0.0, f64::max) }

    pub fn total_volume(&self) -> f64 { self.points.iter().map(|point| point.volume).sum() }

    pub fn volume_on(
        &self,
        date: NaiveDate,
    ) -> Option<f64> {
        self.points.iter().find(|point| point.date == date).map(|point| point.volume)
    }
}
