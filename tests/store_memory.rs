// crates.io
use time::macros;
// self
use signin_bridge::{
	code::{CodeRecord, OneTimeCode},
	identity::{Identity, ProfileRecord, Role, Uid},
	store::{CodeStore, MemoryStore, ProfileStore},
};

fn make_uid(value: &str) -> Uid {
	Uid::new(value).expect("Failed to build uid fixture for memory store tests.")
}

fn build_code_record(uid: &Uid, code: &str) -> CodeRecord {
	CodeRecord::new(
		uid.clone(),
		OneTimeCode::from_value(code),
		macros::datetime!(2026-08-24 12:00 UTC),
	)
}

fn build_profile(uid: &Uid, display_name: &str, role: Role) -> ProfileRecord {
	ProfileRecord::from_identity(&Identity::new(uid.clone()).with_display_name(display_name), role)
}

#[tokio::test]
async fn put_and_fetch_round_trip() {
	let store = MemoryStore::default();
	let uid = make_uid("uid-1");

	store
		.put(build_code_record(&uid, "code-1"))
		.await
		.expect("Saving code record into memory store should succeed.");

	let fetched = CodeStore::fetch(&store, &uid)
		.await
		.expect("Fetching code record from memory store should succeed.")
		.expect("Stored code record should remain present.");

	assert_eq!(fetched.uid, uid);
	assert_eq!(fetched.code, OneTimeCode::from_value("code-1"));
}

#[tokio::test]
async fn second_put_supersedes_the_first() {
	let store = MemoryStore::default();
	let uid = make_uid("uid-1");

	store
		.put(build_code_record(&uid, "code-1"))
		.await
		.expect("Saving first code record should succeed.");
	store
		.put(build_code_record(&uid, "code-2"))
		.await
		.expect("Saving second code record should succeed.");

	let fetched = CodeStore::fetch(&store, &uid)
		.await
		.expect("Fetching superseding code record should succeed.")
		.expect("A live code record should remain present.");

	assert_eq!(fetched.code, OneTimeCode::from_value("code-2"));
}

#[tokio::test]
async fn create_leaves_existing_profiles_untouched() {
	let store = MemoryStore::default();
	let uid = make_uid("uid-1");
	let original = build_profile(&uid, "First Writer", Role::Parent);

	store.create(original.clone()).await.expect("Creating initial profile should succeed.");
	store
		.create(build_profile(&uid, "Second Writer", Role::Student))
		.await
		.expect("A second create for the same uid should be a silent no-op.");

	let fetched = ProfileStore::fetch(&store, &uid)
		.await
		.expect("Fetching profile record should succeed.")
		.expect("Profile record should remain present.");

	assert_eq!(fetched, original);
}

#[tokio::test]
async fn fetch_returns_none_for_unknown_uids() {
	let store = MemoryStore::default();
	let uid = make_uid("uid-unknown");

	assert!(
		CodeStore::fetch(&store, &uid)
			.await
			.expect("Code fetch should not error for unknown uids.")
			.is_none()
	);
	assert!(
		ProfileStore::fetch(&store, &uid)
			.await
			.expect("Profile fetch should not error for unknown uids.")
			.is_none()
	);
}

#[tokio::test]
async fn collections_are_independent_per_uid() {
	let store = MemoryStore::default();
	let uid_a = make_uid("uid-a");
	let uid_b = make_uid("uid-b");

	store
		.put(build_code_record(&uid_a, "code-a"))
		.await
		.expect("Saving code for the first uid should succeed.");
	store
		.create(build_profile(&uid_b, "Other User", Role::Student))
		.await
		.expect("Creating profile for the second uid should succeed.");

	assert!(
		CodeStore::fetch(&store, &uid_b)
			.await
			.expect("Code fetch should not error.")
			.is_none()
	);
	assert!(
		ProfileStore::fetch(&store, &uid_a)
			.await
			.expect("Profile fetch should not error.")
			.is_none()
	);
}
