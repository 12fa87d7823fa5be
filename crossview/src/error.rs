use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("path {path:?} is registered more than once"))]
    DuplicateRoute { path: &'static str },

    #[snafu(display("a route table needs at least one entry"))]
    EmptyRouteTable,

    #[snafu(display("failed to lock mutex: poisoned"))]
    LockPoisoned,
}

pub type Result<T> = std::result::Result<T, Error>;
