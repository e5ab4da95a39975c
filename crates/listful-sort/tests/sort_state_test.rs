use listful_sort::{
	Orderable, OrderableConfig, RequestParams, SortDirection, SortEntry, codec, registry,
};
use rstest::*;

fn pair(k: &str, v: &str) -> (String, String) {
	(k.to_string(), v.to_string())
}

/// `allowed = {login, first_name}`, default `login DESC`, not stable
#[fixture]
fn users_config() -> OrderableConfig {
	OrderableConfig::builder(["login", "first_name"])
		.default_order("login", SortDirection::Descending)
		.build()
}

#[rstest]
fn test_explicit_sort_wins_over_default(users_config: OrderableConfig) {
	// Arrange
	let params = RequestParams::from_pairs([pair("order[users][]", "first_name:asc")]);

	// Act
	let resolved = users_config
		.resolve(&codec::parse(&params, "users"))
		.unwrap();

	// Assert
	assert_eq!(resolved, vec![SortEntry::ascending("first_name")]);
}

#[rstest]
fn test_absent_order_falls_back_to_default(users_config: OrderableConfig) {
	let params = RequestParams::from_pairs([pair("page", "1")]);

	let resolved = users_config
		.resolve(&codec::parse(&params, "users"))
		.unwrap();

	assert_eq!(resolved, vec![SortEntry::descending("login")]);
}

#[rstest]
fn test_stable_default_is_appended_as_tiebreaker() {
	let config = OrderableConfig::builder(["id", "name"])
		.default_order("id", SortDirection::Ascending)
		.stable(true)
		.build();
	let params = RequestParams::from_pairs([pair("order[users][]", "name:desc")]);

	let resolved = config.resolve(&codec::parse(&params, "users")).unwrap();

	assert_eq!(
		resolved,
		vec![SortEntry::descending("name"), SortEntry::ascending("id")]
	);
}

#[rstest]
fn test_parse_is_empty_for_any_table_without_order() {
	let params = RequestParams::from_pairs([pair("page", "3"), pair("q", "smith")]);

	assert!(codec::parse(&params, "users").is_empty());
	assert!(codec::parse(&params, "posts").is_empty());
}

#[rstest]
fn test_duplicate_field_last_occurrence_wins() {
	let params = RequestParams::from_pairs([
		pair("order[users][]", "login:asc"),
		pair("order[users][]", "login:desc"),
	]);

	let entries = codec::parse(&params, "users");

	// Both occurrences are kept in order; direction lookups take the last.
	assert_eq!(entries.len(), 2);
	assert_eq!(
		codec::direction_of(&entries, "login"),
		Some(SortDirection::Descending)
	);
	assert_eq!(codec::toggle(&entries, "login"), vec![SortEntry::ascending("login")]);
}

/// Two clicks on an unsorted column: ascending first, then descending,
/// with matching CSS tokens along the way.
#[rstest]
fn test_clicking_a_sort_link_twice() {
	let params = RequestParams::new();

	// Before any click the column is neutral.
	let entries = codec::parse(&params, "users");
	assert_eq!(codec::css_state_token(&entries, "email"), "");

	// First click.
	let params = codec::encode(&params, "users", &codec::toggle(&entries, "email"));
	let entries = codec::parse(&params, "users");
	assert_eq!(entries, vec![SortEntry::ascending("email")]);
	assert_eq!(codec::css_state_token(&entries, "email"), "ascending");

	// Second click.
	let params = codec::encode(&params, "users", &codec::toggle(&entries, "email"));
	let entries = codec::parse(&params, "users");
	assert_eq!(entries, vec![SortEntry::descending("email")]);
	assert_eq!(codec::css_state_token(&entries, "email"), "descending");
}

#[rstest]
fn test_routing_keys_never_survive_encoding() {
	let params = RequestParams::from_pairs([
		pair("action", "index"),
		pair("controller", "users"),
		pair("page", "2"),
		pair("order[users][]", "login:asc"),
	]);

	let encoded = codec::encode(&params, "users", &[SortEntry::descending("login")]);
	let query = encoded.to_query_string();

	assert!(!query.contains("action"));
	assert!(!query.contains("controller"));
	assert!(query.contains("page=2"));
}

#[rstest]
fn test_malformed_tokens_degrade_not_error(users_config: OrderableConfig) {
	let params = RequestParams::from_pairs([
		pair("order[users][]", "first_name"),
		pair("order[users][]", ":desc"),
		pair("order[users][]", "first_name:sideways"),
	]);

	let resolved = users_config
		.resolve(&codec::parse(&params, "users"))
		.unwrap();

	// Bare field sorts ascending, empty field is skipped, an
	// unrecognized direction sorts descending.
	assert_eq!(
		resolved,
		vec![
			SortEntry::ascending("first_name"),
			SortEntry::descending("first_name"),
		]
	);
}

struct Member;

impl Orderable for Member {
	fn table_key() -> &'static str {
		"members"
	}
}

#[rstest]
fn test_ordered_from_end_to_end() {
	registry::register(
		Member::table_key(),
		OrderableConfig::builder(["login", "first_name", "last_name"])
			.default_order("login", SortDirection::Descending)
			.stable(true)
			.build(),
	)
	.unwrap();

	let params = RequestParams::from_query_str(
		"order%5Bmembers%5D%5B%5D=last_name%3Adesc&order%5Bmembers%5D%5B%5D=first_name%3Aasc",
	);

	let clause = Member::ordered_from(&params).unwrap();

	assert_eq!(
		clause.as_deref(),
		Some("last_name DESC, first_name ASC, login DESC")
	);
}
