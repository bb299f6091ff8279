//! Fake-data text generators.

use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use rand::Rng;

/// Generate a company name (e.g. "Kuhn and Sons").
pub fn generate_company_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    CompanyName().fake_with_rng(rng)
}

/// Generate a syntactically valid email address on a reserved domain.
pub fn generate_email<R: Rng + ?Sized>(rng: &mut R) -> String {
    SafeEmail().fake_with_rng(rng)
}

/// Generate a personal name ("First Last").
pub fn generate_person_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    Name().fake_with_rng(rng)
}
