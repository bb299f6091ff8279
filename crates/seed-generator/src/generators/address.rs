//! Postal address generator.

use fake::faker::address::en::{BuildingNumber, CityName, StreetName};
use fake::Fake;
use rand::Rng;

/// Generate a street address, e.g. "4821 Maple Street".
pub fn generate_street_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    let number: String = BuildingNumber().fake_with_rng(rng);
    let street: String = StreetName().fake_with_rng(rng);
    format!("{number} {street}")
}

pub fn generate_city<R: Rng + ?Sized>(rng: &mut R) -> String {
    CityName().fake_with_rng(rng)
}

/// Generate `"<street address>, <city>"` as stored on accounts.
pub fn generate_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    let street = generate_street_address(rng);
    let city = generate_city(rng);
    format!("{street}, {city}")
}
