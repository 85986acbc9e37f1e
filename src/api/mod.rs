//! WebHDFS protocol translation: operation catalog, request building,
//! response decoding and remote error classification.

pub mod error;
pub mod operation;
pub mod request;
pub mod response;

pub use error::{RemoteException, RemoteExceptionKind};
pub use operation::{Operation, ParamSpec};
pub use request::{Param, Request};
