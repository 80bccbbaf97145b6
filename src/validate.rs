//! Accumulate-all validation.
//!
//! Extraction never stops at the first violation: every declaration in a
//! scope is validated independently and all failure messages are reported
//! together, in declaration order.

/// A validation outcome: a value, or the list of messages explaining why
/// there is none. The list is never empty on the `Err` side.
pub type Validated<T> = Result<T, Vec<String>>;

/// Single-message failure.
pub fn fail<T>(message: String) -> Validated<T> {
    Err(vec![message])
}

/// Validate an ordered collection of independent items.
///
/// Successes are kept in order. If any item failed, the result is the
/// concatenation of every failure list — partial successes are dropped.
pub fn all_of<T, I>(items: I) -> Validated<Vec<T>>
where
    I: IntoIterator<Item = Validated<T>>,
{
    let mut values = Vec::new();
    let mut errors = Vec::new();
    for item in items {
        match item {
            Ok(value) => values.push(value),
            Err(mut messages) => errors.append(&mut messages),
        }
    }
    if errors.is_empty() {
        Ok(values)
    } else {
        Err(errors)
    }
}

/// Drain a validation into an error accumulator, keeping the value if any.
///
/// Lets a caller evaluate several independent validations to completion
/// before deciding the combined outcome.
pub fn collect<T>(validated: Validated<T>, errors: &mut Vec<String>) -> Option<T> {
    match validated {
        Ok(value) => Some(value),
        Err(mut messages) => {
            errors.append(&mut messages);
            None
        }
    }
}
