pub mod error;
pub mod store;

use parking_lot::Mutex;
use std::sync::Arc;

pub use error::{Entity, Field, HubError, HubResult, StayError};
pub use store::{HotelHub, Snapshot};

/// Handle to the one store instance of a process. Every operation runs under
/// this single lock, so a check such as "room is unbooked" and the write that
/// follows it can never interleave with another request.
pub type SharedHub = Arc<Mutex<HotelHub>>;

impl HotelHub {
    pub fn into_shared(self) -> SharedHub {
        Arc::new(Mutex::new(self))
    }
}
