//! FFI surface of the TalentLink vocabulary core.
//! Exposes catalogue and profile-skill queries to the Flutter shell.

pub mod api;
