//! Steps converting outcomes into `Result` values.

use crate::fixtures::OutcomeContext;
use anyhow::{Result, anyhow, ensure};
use rstest_bdd_macros::{then, when};

#[when("the outcome is converted into a result")]
fn convert(outcome_context: &OutcomeContext) -> Result<()> {
    let outcome = outcome_context
        .valued
        .take()
        .ok_or_else(|| anyhow!("no value-bearing outcome has been constructed"))?;
    outcome_context.converted.set(outcome.into_result());
    Ok(())
}

#[then("the error lists {count:usize} messages")]
fn error_lists(outcome_context: &OutcomeContext, count: usize) -> Result<()> {
    let err = outcome_context
        .converted
        .take()
        .ok_or_else(|| anyhow!("conversion result unavailable"))?
        .err()
        .ok_or_else(|| anyhow!("expected the conversion to fail"))?;
    let found = err.messages().len();
    ensure!(
        found == count,
        "expected {count} messages, found {found}: {err}"
    );
    Ok(())
}

#[then("the result holds the value {expected:u32}")]
fn result_holds(outcome_context: &OutcomeContext, expected: u32) -> Result<()> {
    let value = outcome_context
        .converted
        .take()
        .ok_or_else(|| anyhow!("conversion result unavailable"))?
        .map_err(|err| anyhow!("conversion failed: {err}"))?;
    ensure!(
        value == Some(expected),
        "unexpected value {value:?}; expected {expected}"
    );
    Ok(())
}
