//! User domain
//!
//! Contains the signed-in user's profile state and the three flows that
//! change it: fetching the current user, registering, and updating the
//! profile.

pub mod errors;
pub mod messages;
pub mod state;
pub mod store;

pub use errors::UserStoreError;
pub use messages::{Mutation, UserRequest};
pub use state::{RegistrationOutcome, Status, UserState};
pub use store::UserStore;
