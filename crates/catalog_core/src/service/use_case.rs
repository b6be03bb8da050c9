//! Use-case contract.

use crate::repo::repository::RepoResult;

/// One application operation: map `Input` to `Output` through exactly one
/// repository call.
pub trait UseCase {
    type Input;
    type Output;

    fn execute(&self, input: Self::Input) -> RepoResult<Self::Output>;
}
