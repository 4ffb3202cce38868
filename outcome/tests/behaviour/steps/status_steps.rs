//! Steps asserting the status, messages and value of an outcome.

use crate::fixtures::OutcomeContext;
use anyhow::{Result, anyhow, ensure};
use rstest_bdd_macros::then;
use test_helpers::text::message;

#[then("the outcome is successful")]
fn is_successful(outcome_context: &OutcomeContext) -> Result<()> {
    let (successful, failed) =
        outcome_context.inspect(|verdict| (verdict.is_successful(), verdict.is_failed()))?;
    ensure!(successful, "expected a successful outcome");
    ensure!(!failed, "a successful outcome must not report failure");
    Ok(())
}

#[then("the outcome is failed")]
fn is_failed(outcome_context: &OutcomeContext) -> Result<()> {
    let (successful, failed) =
        outcome_context.inspect(|verdict| (verdict.is_successful(), verdict.is_failed()))?;
    ensure!(failed, "expected a failed outcome");
    ensure!(!successful, "a failed outcome must not report success");
    Ok(())
}

#[then("the outcome has no errors")]
fn has_no_errors(outcome_context: &OutcomeContext) -> Result<()> {
    let (count, first) = outcome_context.inspect(|verdict| {
        (verdict.errors().len(), verdict.error().map(str::to_owned))
    })?;
    ensure!(count == 0, "expected no errors, found {count}");
    ensure!(first.is_none(), "unexpected first error {first:?}");
    Ok(())
}

#[then("the first error is {expected}")]
fn first_error(outcome_context: &OutcomeContext, expected: String) -> Result<()> {
    let expected = message(&expected);
    let first = outcome_context.inspect(|verdict| verdict.error().map(str::to_owned))?;
    ensure!(
        first.as_deref() == Some(expected.as_str()),
        "unexpected first error {first:?}; expected {expected:?}"
    );
    Ok(())
}

#[then("the error at position {index:usize} is {expected}")]
fn error_at(outcome_context: &OutcomeContext, index: usize, expected: String) -> Result<()> {
    let expected = message(&expected);
    let found = outcome_context.inspect(|verdict| verdict.errors().get(index).cloned())?;
    ensure!(
        found.as_deref() == Some(expected.as_str()),
        "unexpected error at {index}: {found:?}; expected {expected:?}"
    );
    Ok(())
}

#[then("the outcome holds no value")]
fn holds_no_value(outcome_context: &OutcomeContext) -> Result<()> {
    let value = outcome_context
        .valued
        .with_ref(|outcome| outcome.value().copied())
        .ok_or_else(|| anyhow!("no value-bearing outcome has been constructed"))?;
    ensure!(value.is_none(), "unexpected value {value:?}");
    Ok(())
}

#[then("the outcome holds the value {expected:u32}")]
fn holds_value(outcome_context: &OutcomeContext, expected: u32) -> Result<()> {
    let value = outcome_context
        .valued
        .with_ref(|outcome| outcome.value().copied())
        .ok_or_else(|| anyhow!("no value-bearing outcome has been constructed"))?;
    ensure!(
        value == Some(expected),
        "unexpected value {value:?}; expected {expected}"
    );
    Ok(())
}
