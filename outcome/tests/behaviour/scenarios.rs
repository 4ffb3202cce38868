//! Binds the feature files to the step registry.

use crate::fixtures::{OutcomeContext, outcome_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/outcome_factories.feature",
    fixtures = [outcome_context: OutcomeContext]
);
scenarios!(
    "tests/features/result_conversion.feature",
    fixtures = [outcome_context: OutcomeContext]
);
