//! OpenIDM admin console composition root.
//!
//! Wires the `idm-infra` adapters into the `idm-app` views and provides the
//! logging setup used by the binary.

pub mod bootstrap;
