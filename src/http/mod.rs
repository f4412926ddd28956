//! HTTP layer — `RealEngineHttp` request resolver, backoff policy, envelope
//! decoding and the transport/timer seams.

pub mod client;
pub mod envelope;
pub mod retry;
pub mod timer;
pub mod transport;

pub use client::RealEngineHttp;
pub use envelope::{Envelope, ErrorBody};
pub use retry::{BackoffPolicy, ResponseClass};
pub use timer::{Sleeper, TimerSleeper};
#[cfg(feature = "http")]
pub use transport::ReqwestTransport;
pub use transport::{HttpRequest, HttpResponse, Transport};
