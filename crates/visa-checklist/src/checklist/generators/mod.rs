//! Section generators. Each one is a pure function of the profile and requirement table.

mod basic;
mod family;
mod financial;
mod identity;
mod other;
mod residence;
mod student;

pub(crate) use basic::basic_materials;
pub(crate) use family::family_materials;
pub(crate) use financial::financial_materials;
pub(crate) use identity::identity_materials;
pub(crate) use other::other_materials;
pub(crate) use residence::residence_materials;
pub(crate) use student::StudentTrack;

#[cfg(test)]
pub(crate) use residence::{ALL_REQUIRED_TITLE, CHOOSE_ONE_TITLE};
