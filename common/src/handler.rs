//! [`Handler`] abstractions.

use std::future::Future;

/// Asynchronous handler of an operation described by `Args`.
///
/// Commands, queries, record sources and caches are all expressed as
/// [`Handler`]s parametrized with the operation they perform.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    ///
    /// Returned [`Future`] is not required to be [`Send`], so handlers may
    /// keep single-threaded state.
    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>>;
}
