//! Property tests for the summary rule.

use crate::report::{assemble, contribution};
use posture_types::{Capability, CheckResult, Verdict};
use proptest::prelude::*;

fn verdict_strategy() -> impl Strategy<Value = Verdict> {
    prop_oneof![
        Just(Verdict::True),
        Just(Verdict::False),
        Just(Verdict::Indeterminate),
    ]
}

proptest! {
    #[test]
    fn summary_follows_the_contribution_lattice(
        verdicts in proptest::collection::vec(verdict_strategy(), 9)
    ) {
        let results: Vec<CheckResult> = Capability::INDIVIDUAL
            .iter()
            .zip(verdicts)
            .map(|(cap, verdict)| CheckResult::new(*cap, verdict))
            .collect();
        let contributions: Vec<Verdict> = results.iter().map(contribution).collect();

        let report = assemble(results);

        if contributions.contains(&Verdict::False) {
            prop_assert_eq!(report.summary, Verdict::False);
        } else if contributions.contains(&Verdict::Indeterminate) {
            prop_assert_eq!(report.summary, Verdict::Indeterminate);
        } else {
            prop_assert_eq!(report.summary, Verdict::True);
        }
    }

    #[test]
    fn indeterminate_checks_never_fail_the_summary(
        indeterminate_mask in proptest::collection::vec(any::<bool>(), 9)
    ) {
        // Every check is either favorable or indeterminate: the summary must
        // never be false, however many signals went missing.
        let results: Vec<CheckResult> = Capability::INDIVIDUAL
            .iter()
            .zip(indeterminate_mask)
            .map(|(cap, missing)| {
                let verdict = if missing {
                    Verdict::Indeterminate
                } else {
                    match cap.polarity() {
                        posture_types::Polarity::FavorableWhenFalse => Verdict::False,
                        _ => Verdict::True,
                    }
                };
                CheckResult::new(*cap, verdict)
            })
            .collect();

        let report = assemble(results);
        prop_assert_ne!(report.summary, Verdict::False);
    }
}
