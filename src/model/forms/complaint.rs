use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{is_blank, Email, FormError, Phone};
use crate::model::election::ElectionId;

/// What a complaint is about.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplaintType {
    VoterRegistrationIssue,
    EvmMalfunction,
    ElectoralMalpractice,
    VoterIntimidation,
    CandidateMisconduct,
    PollingStationIssue,
    VotingProcess,
    Other,
}

impl ComplaintType {
    pub const ALL: [ComplaintType; 8] = [
        Self::VoterRegistrationIssue,
        Self::EvmMalfunction,
        Self::ElectoralMalpractice,
        Self::VoterIntimidation,
        Self::CandidateMisconduct,
        Self::PollingStationIssue,
        Self::VotingProcess,
        Self::Other,
    ];

    /// The label shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            Self::VoterRegistrationIssue => "Voter Registration Issue",
            Self::EvmMalfunction => "EVM Malfunction",
            Self::ElectoralMalpractice => "Electoral Malpractice",
            Self::VoterIntimidation => "Voter Intimidation",
            Self::CandidateMisconduct => "Candidate Misconduct",
            Self::PollingStationIssue => "Polling Station Issue",
            Self::VotingProcess => "Voting Process",
            Self::Other => "Other",
        }
    }

    /// Short machine name, e.g. `evm-malfunction`.
    pub fn slug(&self) -> String {
        self.label().to_lowercase().replace(' ', "-")
    }
}

impl Display for ComplaintType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts either the label or the slug, ignoring case.
impl FromStr for ComplaintType {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(' ', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.slug() == wanted)
            .ok_or_else(|| FormError::UnknownComplaintType(s.to_string()))
    }
}

/// The complaint form as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplaintForm {
    pub name: String,
    pub phone: String,
    /// Optional; checked only when non-empty.
    pub email: String,
    pub complaint_type: String,
    /// Optional election the complaint concerns.
    pub election_id: String,
    pub details: String,
    /// Optional attachment file name.
    pub attachment: Option<String>,
}

/// A complaint that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complaint {
    pub name: String,
    pub phone: Phone,
    pub email: Option<Email>,
    pub complaint_type: ComplaintType,
    pub election_id: Option<ElectionId>,
    pub details: String,
    pub attachment: Option<String>,
}

impl ComplaintForm {
    /// Name, phone, type and details are required; then the phone number,
    /// the email (if given) and the complaint type are checked.
    pub fn validate(self) -> Result<Complaint, FormError> {
        if [&self.name, &self.phone, &self.complaint_type, &self.details]
            .into_iter()
            .any(|field| is_blank(field))
        {
            return Err(FormError::MissingFields);
        }
        let phone = self.phone.parse()?;
        let email = match self.email.trim() {
            "" => None,
            email => Some(email.parse()?),
        };
        let complaint_type = self.complaint_type.parse()?;
        let election_id = Some(self.election_id.trim().to_string()).filter(|id| !id.is_empty());
        Ok(Complaint {
            name: self.name,
            phone,
            email,
            complaint_type,
            election_id,
            details: self.details,
            attachment: self.attachment.filter(|file| !is_blank(file)),
        })
    }
}
