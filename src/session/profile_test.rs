use super::*;

#[test]
fn template_carries_family_members() {
    let profile = UserProfile::template();
    assert_eq!(profile.id, "u123");
    assert_eq!(profile.family_members.len(), 3);
    assert_eq!(profile.family_members[0].relation, "Wife");
    assert_eq!(profile.family_members[1].abha_status, AbhaStatus::NotLinked);
}

#[test]
fn merged_with_overrides_mobile_and_keeps_template_fields() {
    let fields = LoginFields {
        mobile: "9000000001".to_owned(),
    };
    let profile = UserProfile::template().merged_with(&fields);
    assert_eq!(profile.mobile, "9000000001");
    assert_eq!(profile.name, "Ravi Kumar");
    assert_eq!(profile.blood_group, "O+");
    assert_eq!(profile.family_members.len(), 3);
}

#[test]
fn persisted_layout_uses_camel_case_keys() {
    let profile = UserProfile::template();
    let raw = serde_json::to_string(&profile).unwrap();
    assert!(raw.contains("\"bloodGroup\":\"O+\""));
    assert!(raw.contains("\"abhaStatus\":\"linked\""));
    assert!(raw.contains("\"familyMembers\""));
    assert!(raw.contains("\"profilePicture\""));
    assert!(!raw.contains("blood_group"));
}

#[test]
fn profile_round_trips_through_json() {
    let profile = UserProfile::template().merged_with(&LoginFields {
        mobile: "9123456789".to_owned(),
    });
    let raw = serde_json::to_string(&profile).unwrap();
    let back: UserProfile = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, profile);
}

#[test]
fn abha_status_labels_read_for_humans() {
    assert_eq!(AbhaStatus::Linked.label(), "Linked");
    assert_eq!(AbhaStatus::NotLinked.label(), "Not Linked");
}

#[test]
fn abha_status_uses_kebab_case_wire_values() {
    assert_eq!(
        serde_json::to_string(&AbhaStatus::NotLinked).unwrap(),
        "\"not-linked\""
    );
    assert_eq!(
        serde_json::from_str::<AbhaStatus>("\"linked\"").unwrap(),
        AbhaStatus::Linked
    );
}
