//! Text in, report out.
//!
//!   text → Extractor → Candidates → VerificationEngine → Schedule → Report
//!
//! The pipeline owns one extractor and one engine and holds no per-call
//! state; a single instance can serve every request in the process.

use tracing::{debug, info};

use rxguard_contracts::{error::RxGuardResult, patient::PatientProfile, prescription::Candidate};
use rxguard_core::{traits::Extractor, VerificationEngine};
use rxguard_extract::CandidateExtractor;
use rxguard_match::FuzzyResolver;
use rxguard_reference::ReferenceData;

use crate::report::{CheckId, PrescriptionReport};

const BUNDLED_REFERENCE: &str = include_str!("../data/reference.toml");

/// Parse the reference dataset compiled into the crate.
pub fn bundled_reference() -> RxGuardResult<ReferenceData> {
    ReferenceData::from_toml_str(BUNDLED_REFERENCE)
}

pub struct Pipeline {
    extractor: Box<dyn Extractor>,
    engine: VerificationEngine,
}

impl Pipeline {
    /// The default extractor and fuzzy resolver over `reference`.
    pub fn new(reference: ReferenceData) -> Self {
        let resolver = FuzzyResolver::new(reference.catalog.clone());
        let engine = VerificationEngine::new(reference, Box::new(resolver));
        Self::with_components(Box::new(CandidateExtractor::new()), engine)
    }

    /// `Pipeline::new` over the bundled reference dataset.
    pub fn with_defaults() -> RxGuardResult<Self> {
        Ok(Self::new(bundled_reference()?))
    }

    pub fn with_components(extractor: Box<dyn Extractor>, engine: VerificationEngine) -> Self {
        Self { extractor, engine }
    }

    pub fn engine(&self) -> &VerificationEngine {
        &self.engine
    }

    pub fn reference(&self) -> &ReferenceData {
        self.engine.reference()
    }

    pub fn extract(&self, text: &str) -> Vec<Candidate> {
        self.extractor.extract(text)
    }

    /// Extract, verify, and schedule `text` for `patient`.
    ///
    /// Never fails: unreadable text produces an empty, `Valid` report.
    pub fn check(&self, text: &str, patient: &PatientProfile) -> PrescriptionReport {
        let check_id = CheckId::new();

        let candidates = self.extractor.extract(text);
        debug!(%check_id, candidates = candidates.len(), "candidates extracted");

        let verification = self.engine.verify(&candidates, patient);
        let report = PrescriptionReport::assemble(check_id, verification, text);

        info!(
            %check_id,
            status = ?report.status,
            issue_count = report.issues.len(),
            verified = report.verified.len(),
            "prescription checked"
        );
        report
    }
}
