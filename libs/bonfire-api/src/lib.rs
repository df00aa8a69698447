//! Wire models shared by the BonFire HTTP API and its clients.

pub mod models;
