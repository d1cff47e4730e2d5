use quiz_core::model::{QuestionBank, QuestionDraft, QuestionError};

/// The built-in quality-engineering question bank.
///
/// # Errors
///
/// Returns `QuestionError` if a draft fails validation; with the shipped
/// content this indicates an editing mistake in this module.
pub fn builtin_bank() -> Result<QuestionBank, QuestionError> {
    let questions = drafts()
        .into_iter()
        .map(QuestionDraft::validate)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(QuestionBank::new(questions))
}

fn drafts() -> Vec<QuestionDraft> {
    vec![
        QuestionDraft::new(
            "How many quality management principles is ISO 9001:2015 based on?",
            ["5 principles", "6 principles", "7 principles", "8 principles"],
            2,
            "ISO 9001:2015 rests on 7 principles: customer focus, leadership, \
             engagement of people, process approach, improvement, evidence-based \
             decision making, and relationship management (trimmed from 8 in the \
             2015 revision).",
        ),
        QuestionDraft::new(
            "Roughly how many defects per million opportunities (DPMO) correspond \
             to the Six Sigma level?",
            ["3.4", "34", "340", "3400"],
            0,
            "Six Sigma corresponds to 3.4 DPMO, including the 1.5 sigma long-term \
             shift. That is 3.4 defects per million opportunities, a 99.99966% yield.",
        ),
        QuestionDraft::new(
            "In an FMEA, how is the RPN calculated?",
            ["S + O + D", "S × O × D", "S × O / D", "(S + O + D) / 3"],
            1,
            "The risk priority number is Severity × Occurrence × Detection, each \
             scored 1-10, so the maximum RPN is 1000.",
        ),
        QuestionDraft::new(
            "What Cpk value is usually the minimum requirement for a capable process?",
            ["1.00", "1.33", "1.50", "1.67"],
            1,
            "Industry commonly requires Cpk ≥ 1.33 (a 4 sigma level). Automotive \
             special characteristics often require Cpk ≥ 1.67 (5 sigma).",
        ),
        QuestionDraft::new(
            "In DMAIC, what is the main goal of the Analyze phase?",
            [
                "Collect process data",
                "Identify root causes",
                "Implement solutions",
                "Define the project scope",
            ],
            1,
            "Analyze uses the data (fishbone diagrams, hypothesis tests, \
             regression) to identify the root causes driving the problem, the \
             critical X factors.",
        ),
        QuestionDraft::new(
            "Below which %R&R is a measurement system rated excellent in a Gage \
             R&R study?",
            ["5%", "10%", "20%", "30%"],
            1,
            "%R&R < 10% is excellent; 10-30% may be acceptable depending on the \
             application; above 30% the measurement system needs improvement.",
        ),
        QuestionDraft::new(
            "A Pareto chart is built on which principle?",
            ["50/50 rule", "70/30 rule", "80/20 rule", "90/10 rule"],
            2,
            "The Pareto chart applies the 80/20 rule: roughly 80% of defects come \
             from 20% of the causes, focusing the team on the vital few.",
        ),
        QuestionDraft::new(
            "Which PPAP submission level is the standard, most complete package?",
            ["Level 1", "Level 2", "Level 3", "Level 5"],
            2,
            "PPAP defines 5 submission levels. Level 3 is the default: sample \
             parts plus the complete documentation package. Level 1 is a warrant \
             only; level 5 is reviewed at the supplier's site.",
        ),
        QuestionDraft::new(
            "On a control chart, the UCL and LCL normally sit at the centre line \
             plus or minus how many sigma?",
            ["±1σ", "±2σ", "±3σ", "±6σ"],
            2,
            "Control limits sit at ±3σ, which contains 99.73% of common-cause \
             variation; points beyond them suggest a special cause worth \
             investigating.",
        ),
        QuestionDraft::new(
            "In the 8D method, containment actions belong to which discipline?",
            ["D1", "D2", "D3", "D4"],
            2,
            "D3 implements interim containment actions that protect the customer \
             until the root cause is found and fixed.",
        ),
    ]
}
