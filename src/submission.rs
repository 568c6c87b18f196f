//! Simulated form submission. Nothing leaves the process and nothing is
//! stored; the caller just waits a fixed delay and gets a reference back.

use std::thread;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::{
    config::Config,
    logging::SubmissionId,
    model::forms::{Complaint, Login},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SubmissionKind {
    Login,
    Complaint,
}

/// Returned once a simulated submission "completes".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement {
    pub reference: SubmissionId,
    pub kind: SubmissionKind,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Submitter {
    delay: Duration,
}

impl Submitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.submission_delay())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn submit_login(&self, login: &Login) -> Acknowledgement {
        let ack = self.submit(SubmissionKind::Login);
        info!("Login {} accepted for {}", ack.reference, login.name);
        ack
    }

    pub fn submit_complaint(&self, complaint: &Complaint) -> Acknowledgement {
        let ack = self.submit(SubmissionKind::Complaint);
        info!(
            "Complaint {} registered: {} (election {})",
            ack.reference,
            complaint.complaint_type,
            complaint.election_id.as_deref().unwrap_or("unspecified"),
        );
        ack
    }

    fn submit(&self, kind: SubmissionKind) -> Acknowledgement {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        Acknowledgement {
            reference: SubmissionId::next(),
            kind,
            submitted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;
    use crate::model::forms::{ComplaintForm, LoginForm};

    #[test]
    fn acknowledges_each_submission_with_new_reference() {
        log4rs_test_utils::test_logging::init_logging_once_for(["rkv_voting"], None, None);
        let submitter = Submitter::new(Duration::ZERO);

        let login = LoginForm::example().validate().unwrap();
        let first = submitter.submit_login(&login);
        assert_eq!(first.kind, SubmissionKind::Login);

        let complaint = ComplaintForm::example().validate().unwrap();
        let second = submitter.submit_complaint(&complaint);
        assert_eq!(second.kind, SubmissionKind::Complaint);
        assert!(second.reference > first.reference);
        assert!(second.submitted_at >= first.submitted_at);
    }

    #[test]
    fn waits_for_configured_delay() {
        let submitter = Submitter::new(Duration::from_millis(20));
        let login = LoginForm::example().validate().unwrap();

        let started = Instant::now();
        submitter.submit_login(&login);
        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn delay_from_config() {
        assert_eq!(
            Submitter::from_config(&Config::default()).delay(),
            Duration::from_millis(1500)
        );
    }
}
