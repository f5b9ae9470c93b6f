//! Pre-built Test Fixtures
//!
//! Provides ready-to-use claims for unit and integration tests. The sample
//! register mirrors the bundled dataset shipped with `infra_dataset`.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::Confidence;
use domain_claims::{
    Claim, ClaimCategory, ClaimStatus, Document, DocumentStatus, DocumentType, TimelineEntry,
};

use crate::builders::TestClaimBuilder;

/// Builds a date, panicking on invalid input
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Fixture for dates used across tests
pub struct DateFixtures;

impl DateFixtures {
    /// Default filing date (Mar 15, 2024)
    pub fn filing_date() -> NaiveDate {
        date(2024, 3, 15)
    }

    /// Reference "today" for summary statistics (Sep 2, 2024)
    pub fn as_of() -> NaiveDate {
        date(2024, 9, 2)
    }
}

/// Fixture for claim collections
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// Three claims A, B, C with distinct areas and statuses
    ///
    /// - A: 2.5 acres, approved by DLC
    /// - B: 15.2 acres, pending at SDLC
    /// - C: 1.8 acres, verified by FRC
    pub fn abc() -> Vec<Claim> {
        vec![
            TestClaimBuilder::new("A")
                .claimant("Geeta Verma")
                .village("Khermai")
                .area(dec!(2.5))
                .status(ClaimStatus::ApprovedByDlc)
                .status_date(date(2024, 8, 22))
                .build(),
            TestClaimBuilder::new("B")
                .claimant("Rameshwar Prasad")
                .village("Bargaon")
                .category(ClaimCategory::Cfr)
                .area(dec!(15.2))
                .status(ClaimStatus::PendingAtSdlc)
                .status_date(date(2024, 9, 1))
                .build(),
            TestClaimBuilder::new("C")
                .claimant("Ajay Kumar")
                .village("Pipariya")
                .district("Seoni")
                .area(dec!(1.8))
                .status(ClaimStatus::VerifiedByFrc)
                .status_date(date(2024, 8, 15))
                .build(),
        ]
    }

    /// `count` claims with ids `C0001`, `C0002`, ... and increasing areas
    pub fn numbered(count: usize) -> Vec<Claim> {
        (1..=count)
            .map(|n| {
                TestClaimBuilder::new(format!("C{n:04}"))
                    .claimant(format!("Claimant {n}"))
                    .area(Decimal::new(n as i64, 1))
                    .build()
            })
            .collect()
    }

    /// The five-claim sample register
    pub fn sample_register() -> Vec<Claim> {
        SAMPLE_REGISTER.clone()
    }
}

static SAMPLE_REGISTER: Lazy<Vec<Claim>> = Lazy::new(|| {
    use ClaimStatus::*;
    use DocumentStatus::*;
    use DocumentType::*;

    fn doc(document_type: DocumentType, status: DocumentStatus, confidence: Decimal) -> Document {
        Document::new(
            document_type,
            status,
            Confidence::new(confidence).expect("confidence in [0, 1]"),
        )
    }

    fn step(stage: ClaimStatus, on: NaiveDate, officer: &str) -> TimelineEntry {
        TimelineEntry::new(stage, on, officer)
    }

    vec![
        TestClaimBuilder::new("FRA/MP/BTL/2024/001567")
            .claimant("श्रीमती गीता वर्मा")
            .guardian("स्वर्गीय राम सिंह वर्मा")
            .village("खेरमाई")
            .district("बैतूल")
            .state("मध्य प्रदेश")
            .category(ClaimCategory::Ifr)
            .area(dec!(2.5))
            .filed_on(date(2024, 3, 15))
            .status(ApprovedByDlc)
            .status_date(date(2024, 8, 22))
            .gram_sabha("खेरमाई ग्राम सभा")
            .tribe("गोंड")
            .coordinates(77.8945, 21.9078)
            .confidence(dec!(0.94))
            .documents(vec![
                doc(FormA, Verified, dec!(0.96)),
                doc(SketchMap, Georeferenced, dec!(0.89)),
                doc(EvidenceDoc, Processed, dec!(0.92)),
            ])
            .timeline(vec![
                step(FiledAtGs, date(2024, 3, 15), "Sarpanch"),
                step(VerifiedByFrc, date(2024, 4, 2), "FRC Secretary"),
                step(PendingAtSdlc, date(2024, 4, 15), "Patwari"),
                step(ApprovedByDlc, date(2024, 8, 22), "District Collector"),
            ])
            .build(),
        TestClaimBuilder::new("FRA/MP/BTL/2024/001568")
            .claimant("श्री रामेश्वर प्रसाद")
            .guardian("स्वर्गीय भैरव प्रसाद")
            .village("बरगांव")
            .district("बैतूल")
            .state("मध्य प्रदेश")
            .category(ClaimCategory::Cfr)
            .area(dec!(15.2))
            .filed_on(date(2024, 2, 20))
            .status(PendingAtSdlc)
            .status_date(date(2024, 9, 1))
            .gram_sabha("बरगांव ग्राम सभा")
            .tribe("भील")
            .coordinates(77.9234, 21.8567)
            .confidence(dec!(0.87))
            .documents(vec![
                doc(FormA, Verified, dec!(0.94)),
                doc(SketchMap, Pending, dec!(0.78)),
                doc(EvidenceDoc, Processed, dec!(0.89)),
            ])
            .timeline(vec![
                step(FiledAtGs, date(2024, 2, 20), "Sarpanch"),
                step(VerifiedByFrc, date(2024, 3, 15), "FRC Secretary"),
                step(PendingAtSdlc, date(2024, 9, 1), "SDLC"),
            ])
            .build(),
        TestClaimBuilder::new("FRA/MP/SEO/2024/001234")
            .claimant("श्री अजय कुमार")
            .guardian("श्री सुरेश कुमार")
            .village("पिपरिया")
            .district("सिवनी")
            .state("मध्य प्रदेश")
            .category(ClaimCategory::Ifr)
            .area(dec!(1.8))
            .filed_on(date(2024, 4, 10))
            .status(VerifiedByFrc)
            .status_date(date(2024, 8, 15))
            .gram_sabha("पिपरिया ग्राम सभा")
            .tribe("गोंड")
            .coordinates(79.4567, 22.1234)
            .confidence(dec!(0.91))
            .documents(vec![
                doc(FormA, Verified, dec!(0.93)),
                doc(SketchMap, Georeferenced, dec!(0.88)),
                doc(EvidenceDoc, Pending, dec!(0.85)),
            ])
            .timeline(vec![
                step(FiledAtGs, date(2024, 4, 10), "Sarpanch"),
                step(VerifiedByFrc, date(2024, 8, 15), "FRC Secretary"),
            ])
            .build(),
        TestClaimBuilder::new("FRA/TR/WTL/2024/000456")
            .claimant("श्रीमती सुनीता देबी")
            .guardian("स्वर्गीय मोहन लाल")
            .village("अमतली")
            .district("वेस्ट त्रिपुरा")
            .state("त्रिपुरा")
            .category(ClaimCategory::Cr)
            .area(dec!(0.8))
            .filed_on(date(2024, 1, 25))
            .status(FiledAtGs)
            .status_date(date(2024, 1, 25))
            .gram_sabha("अमतली ग्राम सभा")
            .tribe("त्रिपुरी")
            .coordinates(91.3456, 23.789)
            .confidence(dec!(0.76))
            .documents(vec![
                doc(FormA, Pending, dec!(0.82)),
                doc(SketchMap, Pending, dec!(0.71)),
                doc(EvidenceDoc, Pending, dec!(0.75)),
            ])
            .timeline(vec![step(FiledAtGs, date(2024, 1, 25), "Sarpanch")])
            .build(),
        TestClaimBuilder::new("FRA/OD/MYU/2024/002345")
            .claimant("श्री बिजय कुमार साहू")
            .guardian("श्री हरि साहू")
            .village("कोरापुट")
            .district("मयूरभंज")
            .state("ओडिशा")
            .category(ClaimCategory::Ifr)
            .area(dec!(3.2))
            .filed_on(date(2024, 5, 8))
            .status(Rejected)
            .status_date(date(2024, 9, 2))
            .gram_sabha("कोरापुट ग्राम सभा")
            .tribe("संथाल")
            .coordinates(86.7234, 21.9456)
            .confidence(dec!(0.68))
            .documents(vec![
                doc(FormA, Verified, dec!(0.79)),
                doc(SketchMap, Pending, dec!(0.54)),
                doc(EvidenceDoc, Pending, dec!(0.71)),
            ])
            .timeline(vec![
                step(FiledAtGs, date(2024, 5, 8), "Sarpanch"),
                step(VerifiedByFrc, date(2024, 6, 12), "FRC Secretary"),
                step(Rejected, date(2024, 9, 2), "District Collector"),
            ])
            .build(),
    ]
});
