//! Request and response DTOs for the analysis endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::ahp::{
    AhpResult, Alternative, ConsistencyReport, Criterion, CriterionPair, CriterionSpec, Intensity,
    JudgmentSet, ScoredAlternative, CRITERIA,
};
use crate::domain::foundation::{AlternativeId, Timestamp};
use crate::domain::workflow::{AlternativeEntry, AlternativeField, AnalysisSession, WorkflowStep};

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/ahp/compute`.
#[derive(Debug, Clone, Deserialize)]
pub struct ComputeAhpRequest {
    pub alternatives: Vec<Alternative>,
    pub judgments: JudgmentSet,
}

/// Body of `PATCH /api/sessions/:id/alternatives/:alt_id`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAlternativeRequest {
    pub field: AlternativeField,
    #[serde(default)]
    pub value: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriterionWeightResponse {
    pub criterion: Criterion,
    pub label: String,
    pub weight: f64,
}

/// Output of one computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AhpResultResponse {
    pub weights: Vec<CriterionWeightResponse>,
    pub ranking: Vec<ScoredAlternative>,
    pub consistency: ConsistencyReport,
    pub computed_at: Timestamp,
}

impl AhpResultResponse {
    pub fn new(result: &AhpResult, computed_at: Timestamp) -> Self {
        Self {
            weights: result
                .weights
                .iter()
                .map(|w| CriterionWeightResponse {
                    criterion: w.criterion,
                    label: w.criterion.spec().label.to_string(),
                    weight: w.weight,
                })
                .collect(),
            ranking: result.ranking.clone(),
            consistency: result.consistency,
            computed_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlternativeEntryResponse {
    pub id: AlternativeId,
    pub name: String,
    pub price: String,
    pub performance: String,
    pub battery: String,
    pub screen: String,
    pub filled_fields: Vec<AlternativeField>,
    pub is_complete: bool,
}

impl From<&AlternativeEntry> for AlternativeEntryResponse {
    fn from(entry: &AlternativeEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name.clone(),
            price: entry.price.clone(),
            performance: entry.performance.clone(),
            battery: entry.battery.clone(),
            screen: entry.screen.clone(),
            filled_fields: entry.filled_fields(),
            is_complete: entry.is_complete(),
        }
    }
}

/// Full view of a wizard session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub id: String,
    pub step: WorkflowStep,
    pub step_number: u8,
    pub step_label: String,
    pub alternatives: Vec<AlternativeEntryResponse>,
    pub judgments: JudgmentSet,
    pub missing_judgments: Vec<CriterionPair>,
    pub can_add_alternative: bool,
    pub can_proceed: bool,
    pub can_compute: bool,
    pub result: Option<AhpResultResponse>,
    pub version: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&AnalysisSession> for SessionResponse {
    fn from(session: &AnalysisSession) -> Self {
        let computed_at = session.computed_at().unwrap_or(session.updated_at());
        let result = session
            .result()
            .map(|result| AhpResultResponse::new(result, *computed_at));
        Self {
            id: session.id().to_string(),
            step: session.step(),
            step_number: session.step().number(),
            step_label: session.step().label().to_string(),
            alternatives: session.alternatives().iter().map(Into::into).collect(),
            judgments: session.judgments().clone(),
            missing_judgments: session.judgments().missing_pairs(),
            can_add_alternative: session.can_add_alternative(),
            can_proceed: session.can_proceed(),
            can_compute: session.can_compute(),
            result,
            version: session.version(),
            created_at: *session.created_at(),
            updated_at: *session.updated_at(),
        }
    }
}

impl From<AnalysisSession> for SessionResponse {
    fn from(session: AnalysisSession) -> Self {
        Self::from(&session)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddAlternativeResponse {
    pub alternative_id: AlternativeId,
    pub session: SessionResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct IntensityResponse {
    pub value: u8,
    pub label: &'static str,
}

/// Static data the wizard UI needs to render its forms.
#[derive(Debug, Clone, Serialize)]
pub struct CriteriaResponse {
    pub criteria: Vec<CriterionSpec>,
    pub pairs: Vec<CriterionPair>,
    pub intensities: Vec<IntensityResponse>,
}

impl CriteriaResponse {
    pub fn current() -> Self {
        Self {
            criteria: CRITERIA.to_vec(),
            pairs: CriterionPair::canonical(),
            intensities: Intensity::SCALE
                .iter()
                .map(|i| IntensityResponse {
                    value: i.value(),
                    label: i.label(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Standard error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}
