//! Individual field generators.
//!
//! Each submodule wraps one kind of value: fake-data text (company names,
//! addresses, emails, people), bounded numbers and day-offset timestamps.
//! All of them take the caller's RNG so a seeded generator stays
//! reproducible end to end.

pub mod address;
pub mod numeric;
pub mod text;
pub mod timestamp;

pub use address::generate_address;
pub use numeric::{generate_amount, generate_bool, generate_int_range};
pub use text::{generate_company_name, generate_email, generate_person_name};
pub use timestamp::{day_offset, random_day_in_window};
