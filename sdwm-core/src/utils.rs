//! Lookup tables shared by the core and the display servers.
pub mod modmask_lookup;
pub mod xkeysym_lookup;
