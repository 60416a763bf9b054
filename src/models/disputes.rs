//! Dispute entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Field, models::errors::ApiError, models::money::Money};

/// Lifecycle state of a dispute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisputeState {
    /// Opened by the card network; evidence may be submitted.
    InquiryEvidenceRequired,
    /// Evidence submitted, awaiting a decision.
    Processing,
    /// Decided in the merchant's favor.
    Won,
    /// Decided in the buyer's favor.
    Lost,
    /// Accepted by the merchant without contest.
    Accepted,
}

/// A chargeback dispute against a payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dispute {
    /// Server-assigned dispute identifier.
    pub id: String,
    /// Amount being disputed.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub amount_money: Field<Money>,
    /// Network-supplied reason code, e.g. `NO_KNOWLEDGE`.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub reason: Field<String>,
    /// Lifecycle state.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub state: Field<DisputeState>,
    /// Deadline for submitting evidence (RFC 3339 date).
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub due_at: Field<String>,
    /// Payment under dispute.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub disputed_payment_id: Field<String>,
    /// Creation timestamp, set by the server.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<DateTime<Utc>>,
}

impl Dispute {
    /// Creates a dispute record with the required id.
    #[must_use]
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            amount_money: Field::Unset,
            reason: Field::Unset,
            state: Field::Unset,
            due_at: Field::Unset,
            disputed_payment_id: Field::Unset,
            created_at: Field::Unset,
        }
    }
}

/// Evidence attached to a dispute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisputeEvidence {
    /// Dispute the evidence belongs to.
    pub dispute_id: String,
    /// Server-assigned evidence identifier.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub evidence_id: Field<String>,
    /// Evidence category, e.g. `RECEIPT` or `TRACKING_NUMBER`.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub evidence_type: Field<String>,
    /// Text content for text evidence.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub evidence_text: Field<String>,
    /// Upload timestamp, set by the server.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub uploaded_at: Field<DateTime<Utc>>,
}

impl DisputeEvidence {
    /// Creates evidence attached to the given dispute.
    #[must_use]
    pub fn new<S: Into<String>>(dispute_id: S) -> Self {
        Self {
            dispute_id: dispute_id.into(),
            evidence_id: Field::Unset,
            evidence_type: Field::Unset,
            evidence_text: Field::Unset,
            uploaded_at: Field::Unset,
        }
    }
}

/// Response body for a list-disputes call.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListDisputesResponse {
    /// Errors, if the call failed.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub errors: Field<Vec<ApiError>>,
    /// Disputes in this page.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub disputes: Field<Vec<Dispute>>,
    /// Cursor for the next page; absent on the last page.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub cursor: Field<String>,
}

#[cfg(test)]
mod tests {
    use crate::JsonBody;

    use super::*;

    #[test]
    fn test_dispute_state_wire_names() {
        assert_eq!(
            serde_json::to_value(DisputeState::InquiryEvidenceRequired).unwrap(),
            "INQUIRY_EVIDENCE_REQUIRED"
        );
        assert_eq!(serde_json::to_value(DisputeState::Won).unwrap(), "WON");
    }

    #[test]
    fn test_dispute_minimal_body() {
        let dispute = Dispute::new("dsp-1");
        assert_eq!(dispute.to_body().unwrap().to_string(), r#"{"id":"dsp-1"}"#);
    }

    #[test]
    fn test_dispute_decode() {
        let body = serde_json::json!({
            "id": "dsp-2",
            "state": "LOST",
            "amount_money": {"amount": 4500, "currency": "USD"},
            "reason": "NO_KNOWLEDGE"
        });
        let dispute = Dispute::from_body(body).unwrap();
        assert_eq!(dispute.state.get(), Some(&DisputeState::Lost));
        assert_eq!(dispute.amount_money.get(), Some(&Money::new(4500, "USD")));
        assert!(dispute.due_at.is_unset());
    }

    #[test]
    fn test_evidence_text_body() {
        let mut evidence = DisputeEvidence::new("dsp-1");
        evidence.evidence_type.set("RECEIPT".to_owned());
        evidence.evidence_text.set("Signed receipt attached".to_owned());

        let body = evidence.to_body().unwrap();
        assert_eq!(body["dispute_id"], "dsp-1");
        assert_eq!(body["evidence_type"], "RECEIPT");
        assert!(body.get("uploaded_at").is_none());
    }

    #[test]
    fn test_list_disputes_response_decode() {
        let body = serde_json::json!({
            "disputes": [{"id": "dsp-1", "state": "PROCESSING"}],
        });
        let response = ListDisputesResponse::from_body(body).unwrap();
        assert_eq!(response.disputes.get().unwrap().len(), 1);
        assert!(response.cursor.is_unset());
    }
}
