// src/form/registry.rs
//
// The built-in questionnaire. Option strings are the exact values the
// analyze endpoint's prompt templates key on, so they are not localized
// or reworded here.

use super::{FormSpec, QuestionKind, QuestionSpec, SectionSpec, VisibilityRule};
use crate::store::QuestionId;

const INDUSTRIES: &[&str] = &["Finance", "Healthcare", "Technology", "Manufacturing", "Other"];

const COUNTRIES: &[&str] = &[
    "United States",
    "United Kingdom",
    "Canada",
    "Germany",
    "India",
    "China",
    "Other",
];

const YES_NO: &[&str] = &["Yes", "No"];

static ORGANIZATION_PROFILE: &[QuestionSpec] = &[
    QuestionSpec {
        id: QuestionId::Industry,
        label: "Primary Industry",
        kind: QuestionKind::Select,
        options: INDUSTRIES,
        visible_when: None,
    },
    QuestionSpec {
        id: QuestionId::Headquarters,
        label: "Headquarters Country",
        kind: QuestionKind::Select,
        options: COUNTRIES,
        visible_when: None,
    },
    QuestionSpec {
        id: QuestionId::OperatingCountries,
        label: "Operating Countries",
        kind: QuestionKind::Multi,
        options: COUNTRIES,
        visible_when: None,
    },
    QuestionSpec {
        id: QuestionId::EmployeeSize,
        label: "Employee Size",
        kind: QuestionKind::Radio,
        options: &["Less than 50", "50–250", "250–1000", "More than 1000"],
        visible_when: None,
    },
    QuestionSpec {
        id: QuestionId::AnnualRevenue,
        label: "Annual Revenue",
        kind: QuestionKind::Radio,
        options: &[
            "Less than $10 million",
            "$10–50 million",
            "$50–500 million",
            "More than $500 million",
        ],
        visible_when: None,
    },
    QuestionSpec {
        id: QuestionId::AssessmentMotivation,
        label: "Motivation for Assessment",
        kind: QuestionKind::Multi,
        options: &[
            "Requirement from a joint venture partner",
            "Recent ethics and compliance event",
            "Requirement from the board",
            "Motivated by recent scandals or headlines",
            "Other",
        ],
        visible_when: None,
    },
    QuestionSpec {
        id: QuestionId::AssessmentMotivationOther,
        label: "Please specify",
        kind: QuestionKind::Text,
        options: &[],
        visible_when: Some(VisibilityRule::MultiContains {
            question: QuestionId::AssessmentMotivation,
            option: "Other",
        }),
    },
];

static EXPOSURE_TO_RISKS: &[QuestionSpec] = &[
    QuestionSpec {
        id: QuestionId::HighRiskRegion,
        label: "Operate in high-risk regions for corruption?",
        kind: QuestionKind::Radio,
        options: YES_NO,
        visible_when: None,
    },
    QuestionSpec {
        id: QuestionId::ThirdPartyRisk,
        label: "Engage with third parties in risky areas?",
        kind: QuestionKind::Radio,
        options: YES_NO,
        visible_when: None,
    },
    QuestionSpec {
        id: QuestionId::SanctionsRisk,
        label: "Exposure to sanctions risk?",
        kind: QuestionKind::Radio,
        options: &["Yes", "No", "Not Sure"],
        visible_when: None,
    },
    QuestionSpec {
        id: QuestionId::DataMonitoring,
        label: "Have data privacy monitoring processes?",
        kind: QuestionKind::Radio,
        options: YES_NO,
        visible_when: None,
    },
    QuestionSpec {
        id: QuestionId::ModernSlaveryDueDiligence,
        label: "Due diligence for modern slavery laws?",
        kind: QuestionKind::Radio,
        options: YES_NO,
        visible_when: None,
    },
    QuestionSpec {
        id: QuestionId::EsgConfidence,
        label: "Confidence in ESG policies? (1–5)",
        kind: QuestionKind::Scale { min: 1, max: 5 },
        options: &[],
        visible_when: None,
    },
];

static ETHICS_AND_COMPLIANCE: &[QuestionSpec] = &[
    QuestionSpec {
        id: QuestionId::CodeOfConduct,
        label: "Formal Code of Conduct?",
        kind: QuestionKind::Radio,
        options: &[
            "Strongly Agree",
            "Agree",
            "Neutral",
            "Disagree",
            "Strongly Disagree",
        ],
        visible_when: None,
    },
    QuestionSpec {
        id: QuestionId::CodeUpdateFrequency,
        label: "Code Update Frequency",
        kind: QuestionKind::Select,
        options: &["Annually", "Bi-Annually", "As Needed", "Never"],
        visible_when: None,
    },
    QuestionSpec {
        id: QuestionId::EthicsTraining,
        label: "Ethics Training Frequency",
        kind: QuestionKind::Select,
        options: &["Annually", "Bi-Annually", "Less Frequently", "Never"],
        visible_when: None,
    },
    QuestionSpec {
        id: QuestionId::LeaderTraining,
        label: "Are senior leaders involved in training?",
        kind: QuestionKind::Radio,
        options: YES_NO,
        visible_when: None,
    },
];

static RISK_QUESTIONNAIRE: FormSpec = FormSpec {
    title: "Risk Assessment Questionnaire",
    sections: &[
        SectionSpec {
            title: "Organization Profile",
            questions: ORGANIZATION_PROFILE,
        },
        SectionSpec {
            title: "Exposure to Risks",
            questions: EXPOSURE_TO_RISKS,
        },
        SectionSpec {
            title: "Ethics & Compliance",
            questions: ETHICS_AND_COMPLIANCE,
        },
    ],
};

pub fn risk_questionnaire() -> &'static FormSpec {
    &RISK_QUESTIONNAIRE
}
