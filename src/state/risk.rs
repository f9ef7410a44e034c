//! Landslide risk summary shown by the summary card and location popup.
//!
//! There is no risk model. [`MockRiskProvider`] returns the same literal for
//! every location; a real model plugs in behind [`RiskProvider`].

use super::coordinate::Coordinate;

/// Risk data displayed for a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskSummary {
    /// Display name of the area.
    pub location_name: &'static str,
    /// Rainfall in millimetres.
    pub rainfall_mm: u32,
    pub soil_type: &'static str,
    pub status: RiskStatus,
}

/// Risk classification. The mock data only ever reports high risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskStatus {
    High,
}

impl RiskStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RiskStatus::High => "High Risk",
        }
    }
}

impl RiskSummary {
    /// Rainfall formatted the way the panels show it, e.g. `120mm`.
    pub fn rainfall_label(&self) -> String {
        format!("{}mm", self.rainfall_mm)
    }
}

/// Placeholder values displayed for every location.
pub const MOCK_RISK_SUMMARY: RiskSummary = RiskSummary {
    location_name: "Idukki",
    rainfall_mm: 120,
    soil_type: "Clay",
    status: RiskStatus::High,
};

/// Source of risk data for a coordinate.
pub trait RiskProvider {
    fn summary_for(&self, coordinate: Coordinate) -> RiskSummary;
}

/// Returns [`MOCK_RISK_SUMMARY`] regardless of location.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockRiskProvider;

impl RiskProvider for MockRiskProvider {
    fn summary_for(&self, _coordinate: Coordinate) -> RiskSummary {
        MOCK_RISK_SUMMARY
    }
}
