pub type Error = anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Mistakes in caller-supplied data. These travel inside `anyhow::Error` and are recovered with
/// `InputError::find` so that the web layer can answer with a 400 instead of a 500.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("The 'amount' field is required")]
    MissingAmount,

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

impl InputError {
    /// Searches the error chain of `e` for an `InputError`.
    pub fn find(e: &Error) -> Option<&InputError> {
        e.chain().find_map(|cause| cause.downcast_ref::<InputError>())
    }
}

#[test]
fn test_find_input_error_through_context() {
    use anyhow::Context;
    let e: Result<()> = Err(InputError::MissingAmount).context("Unable to insert expense");
    let e = e.unwrap_err();
    assert_eq!(InputError::find(&e), Some(&InputError::MissingAmount));

    let other = anyhow::anyhow!("disk full");
    assert!(InputError::find(&other).is_none());
}
