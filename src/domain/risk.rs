use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Tier thresholds: 70 and above is high, 40 and above is medium.
    pub fn from_score(score: u32) -> Self {
        if score >= 70 {
            RiskLevel::High
        } else if score >= 40 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

/// Heuristic risk estimate for one invoice. The score is the sum of the
/// triggered factor penalties and the level is a pure function of the score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub risk_score: u32,
    pub risk_level: RiskLevel,
    pub risk_factors: Vec<String>,
}

impl RiskAssessment {
    pub fn new(risk_score: u32, risk_factors: Vec<String>) -> Self {
        Self {
            risk_score,
            risk_level: RiskLevel::from_score(risk_score),
            risk_factors,
        }
    }
}
