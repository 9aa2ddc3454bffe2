//! Company aggregate
//!
//! The singleton company profile rendered on the landing and about pages.

pub mod model;

pub use model::{CompanyAbout, CompanyContact, CompanyProfile, COMPANY_KEY};
