use super::*;

#[test]
fn push_appends_newest_last() {
    let mut state = ToastState::default();
    state.push(Toast::new("OTP Sent!", "An OTP has been sent."));
    state.push(Toast::destructive("Invalid OTP", "Please enter the 6-digit OTP."));

    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].title, "OTP Sent!");
    assert_eq!(state.items[1].variant, ToastVariant::Destructive);
}

#[test]
fn toasts_get_distinct_ids() {
    let a = Toast::new("a", "");
    let b = Toast::new("b", "");
    assert_ne!(a.id, b.id);
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = ToastState::default();
    let keep = Toast::new("keep", "");
    let drop = Toast::new("drop", "");
    let drop_id = drop.id.clone();
    state.push(keep.clone());
    state.push(drop);

    state.dismiss(&drop_id);
    assert_eq!(state.items, vec![keep]);

    // Dismissing an id that is already gone is a no-op.
    state.dismiss(&drop_id);
    assert_eq!(state.items.len(), 1);
}
