//! Cloud provider plumbing shared by the synthesis modules.

pub mod azure;
