//! User profile model and the default template merged under login data.
//!
//! DESIGN
//! ======
//! The persisted session payload is this profile serialized as camelCase
//! JSON, so serde renames mirror the stored layout exactly. Logging in
//! supplies only an identifying field; everything else comes from the
//! placeholder template until a real profile backend exists.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use serde::{Deserialize, Serialize};

/// Whether a person has linked their ABHA health ID.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbhaStatus {
    /// ABHA ID is linked to the account.
    #[serde(rename = "linked")]
    Linked,
    /// No ABHA ID linked yet.
    #[serde(rename = "not-linked")]
    NotLinked,
}

impl AbhaStatus {
    /// Human-readable badge text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Linked => "Linked",
            Self::NotLinked => "Not Linked",
        }
    }
}

/// A dependent family member attached to the primary profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMember {
    /// Unique member identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Relation to the account holder (e.g. `"Wife"`, `"Son"`).
    pub relation: String,
    /// Age in years.
    pub age: u32,
    /// Self-described gender.
    pub gender: String,
    /// ABHA link status for this member.
    pub abha_status: AbhaStatus,
    /// Avatar image URL.
    pub profile_picture: String,
}

/// The full user record held by the session.
///
/// Produced by merging [`UserProfile::template`] with the fields supplied at
/// login; persisted verbatim as the session payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// 10-digit mobile number used to log in.
    pub mobile: String,
    /// Contact email address.
    pub email: String,
    /// Date of birth, ISO 8601 date.
    pub dob: String,
    /// Self-described gender.
    pub gender: String,
    /// Blood group (e.g. `"O+"`).
    pub blood_group: String,
    /// Postal address.
    pub address: String,
    /// ABHA health ID handle.
    pub abha_id: String,
    /// ABHA link status for the account holder.
    pub abha_status: AbhaStatus,
    /// Avatar image URL.
    pub profile_picture: String,
    /// Dependent family members.
    pub family_members: Vec<FamilyMember>,
}

/// Fields supplied by a successful login challenge.
#[derive(Clone, Debug, PartialEq)]
pub struct LoginFields {
    /// Verified 10-digit mobile number.
    pub mobile: String,
}

impl UserProfile {
    /// Placeholder demographic profile merged under real login data.
    #[must_use]
    pub fn template() -> Self {
        Self {
            id: "u123".to_owned(),
            name: "Ravi Kumar".to_owned(),
            mobile: "9876543210".to_owned(),
            email: "ravi.kumar@example.com".to_owned(),
            dob: "1985-05-20".to_owned(),
            gender: "Male".to_owned(),
            blood_group: "O+".to_owned(),
            address: "123, MG Road, Bangalore, 560001".to_owned(),
            abha_id: "ravi.k@ndhm".to_owned(),
            abha_status: AbhaStatus::Linked,
            profile_picture: "https://images.unsplash.com/photo-1599566150163-29194dcaad36".to_owned(),
            family_members: vec![
                FamilyMember {
                    id: "f001".to_owned(),
                    name: "Sunita Kumar".to_owned(),
                    relation: "Wife".to_owned(),
                    age: 35,
                    gender: "Female".to_owned(),
                    abha_status: AbhaStatus::Linked,
                    profile_picture: "https://images.unsplash.com/photo-1494790108377-be9c29b29330".to_owned(),
                },
                FamilyMember {
                    id: "f002".to_owned(),
                    name: "Anil Kumar".to_owned(),
                    relation: "Father".to_owned(),
                    age: 65,
                    gender: "Male".to_owned(),
                    abha_status: AbhaStatus::NotLinked,
                    profile_picture: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d".to_owned(),
                },
                FamilyMember {
                    id: "f003".to_owned(),
                    name: "Aarav Kumar".to_owned(),
                    relation: "Son".to_owned(),
                    age: 10,
                    gender: "Male".to_owned(),
                    abha_status: AbhaStatus::NotLinked,
                    profile_picture: "https://images.unsplash.com/photo-1529699211952-734e80c4d42b".to_owned(),
                },
            ],
        }
    }

    /// Merge login-supplied fields over this profile. Login fields win;
    /// everything else is left as-is.
    #[must_use]
    pub fn merged_with(mut self, fields: &LoginFields) -> Self {
        self.mobile = fields.mobile.clone();
        self
    }
}
