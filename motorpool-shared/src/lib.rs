pub mod models;

pub use models::reservation::{Period, PendingReservation, ProposedRide};
