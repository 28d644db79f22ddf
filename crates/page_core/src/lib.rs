pub mod error;
pub mod form;
pub mod gate;
pub mod page;
pub mod surface;
pub mod transport;

#[cfg(test)]
#[path = "tests/fakes.rs"]
pub(crate) mod fakes;

pub use error::TransportError;
pub use form::{classify_response, FormController};
pub use gate::{GateController, GateOutcome, GatePhase};
pub use page::{initialize, stamp_year, PageCapabilities, PageControllers};
pub use transport::{
    ContactTransport, HttpContactTransport, MissingContactTransport, TransportResponse,
};
