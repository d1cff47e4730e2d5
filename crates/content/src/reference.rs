use quiz_core::model::{Category, Level, ReferenceEntry};

/// The built-in interview Q&A collection.
#[must_use]
pub fn builtin_reference() -> Vec<ReferenceEntry> {
    vec![
        ReferenceEntry::new(
            Category::QualitySystems,
            Level::Basic,
            "What are the seven quality management principles of ISO 9001:2015?",
            "Customer focus, leadership, engagement of people, process approach, \
             improvement, evidence-based decision making, and relationship \
             management.",
        ),
        ReferenceEntry::new(
            Category::QualitySystems,
            Level::Intermediate,
            "What are the main differences between IATF 16949 and ISO 9001?",
            "IATF 16949 layers automotive-specific requirements on top of ISO \
             9001: APQP advanced product quality planning, the PPAP production \
             part approval process, FMEA, SPC, MSA, and each OEM's customer \
             specific requirements (CSR).",
        ),
        ReferenceEntry::new(
            Category::QualityTools,
            Level::Intermediate,
            "What is an FMEA, and how is the RPN calculated?",
            "Failure Mode and Effects Analysis is a preventive tool that \
             systematically identifies potential failure modes of a product or \
             process. RPN = Severity × Occurrence × Detection, each scored 1-10; \
             higher means riskier, and values above roughly 100 call for priority \
             action.",
        ),
        ReferenceEntry::new(
            Category::SixSigma,
            Level::Intermediate,
            "Explain the difference between Cp and Cpk.",
            "Cp measures inherent capability (specification width over process \
             width) and ignores centring. Cpk accounts for the mean shift: \
             min[(USL - μ) / 3σ, (μ - LSL) / 3σ]. Cp ≥ Cpk always, with equality \
             when the process is centred; industry typically wants Cpk ≥ 1.33.",
        ),
        ReferenceEntry::new(
            Category::SixSigma,
            Level::Basic,
            "What is the goal of each DMAIC phase?",
            "Define scopes the project and the customer needs; Measure baselines \
             current performance; Analyze finds root causes; Improve implements \
             and validates solutions; Control locks in the gains and prevents \
             recurrence.",
        ),
        ReferenceEntry::new(
            Category::QualityTools,
            Level::Advanced,
            "What is MSA, and what does a Gage R&R cover?",
            "Measurement System Analysis evaluates the reliability of the \
             measurement system. Gage R&R is its core: repeatability (same \
             operator, same gauge, repeated measurements) and reproducibility \
             (variation between operators). %R&R under 10% is excellent, 10-30% \
             conditionally acceptable, above 30% unacceptable.",
        ),
        ReferenceEntry::new(
            Category::QualityTools,
            Level::Advanced,
            "What are the eight out-of-control rules for SPC control charts?",
            "1) a point beyond a control limit; 2) nine consecutive points on one \
             side of the centre line; 3) six consecutive rising or falling points; \
             4) fourteen points alternating up and down; 5) two of three points in \
             the 2σ-3σ zone; 6) four of five points beyond 1σ; 7) fifteen points \
             within 1σ (too stable); 8) eight consecutive points beyond 1σ on \
             both sides.",
        ),
        ReferenceEntry::new(
            Category::QualitySystems,
            Level::Intermediate,
            "What is the purpose of an internal audit, and what are its basic steps?",
            "It verifies the quality system operates effectively and surfaces \
             nonconformities and improvement opportunities. Steps: plan the \
             audit, prepare checklists, opening meeting, on-site audit \
             (interviews, observation, evidence), consolidate findings, closing \
             meeting, audit report, and follow-up on corrective actions.",
        ),
        ReferenceEntry::new(
            Category::SixSigma,
            Level::Advanced,
            "What is design of experiments (DOE), and how does it differ from \
             traditional trial methods?",
            "DOE arranges experiments systematically to study several factors at \
             once. Compared with one-factor-at-a-time trials it needs fewer runs, \
             captures interactions between factors, carries statistical \
             significance, and yields a model linking factors to the response. \
             Common designs: full factorial, fractional factorial, central \
             composite, Taguchi.",
        ),
        ReferenceEntry::new(
            Category::QualityTools,
            Level::Basic,
            "What are the steps of the 8D problem-solving method?",
            "D0 prepare; D1 form the team; D2 describe the problem (5W2H); D3 \
             interim containment; D4 identify and verify root causes; D5 select \
             and verify permanent corrective actions; D6 implement and validate \
             them; D7 prevent recurrence; D8 congratulate the team and close out.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_covers_every_category_and_level() {
        let entries = builtin_reference();
        assert_eq!(entries.len(), 10);

        for category in [
            Category::QualitySystems,
            Category::QualityTools,
            Category::SixSigma,
        ] {
            assert!(entries.iter().any(|e| e.category == category));
        }
        for level in [Level::Basic, Level::Intermediate, Level::Advanced] {
            assert!(entries.iter().any(|e| e.level == level));
        }
    }
}
