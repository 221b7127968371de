//! Property tests for the revision marker encoding.

use proptest::prelude::*;

use revsync::domain::ports::RevisionStore;
use revsync::infrastructure::TomlRevisionStore;
use revsync::Revision;

fn revision_map() -> impl Strategy<Value = Vec<(String, String)>> {
    let name = "[A-Za-z0-9 ._\"-]{1,24}";
    let rev = "[A-Za-z0-9./_\\\\-]{0,48}";
    proptest::collection::vec((name, rev), 0..8)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parse(serialize(r)) == r for any revision map.
    #[test]
    fn property_marker_round_trip(entries in revision_map()) {
        let revision: Revision = entries.into_iter().collect();
        let store = TomlRevisionStore::new();

        let parsed = store.parse(&store.serialize(&revision)).unwrap();

        prop_assert_eq!(parsed, revision);
    }

    /// PROPERTY: Parsing arbitrary bytes never panics.
    #[test]
    fn property_parse_never_panics(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        let _ = TomlRevisionStore::new().parse(&data);
    }

    /// PROPERTY: Setting one name leaves every other entry untouched.
    #[test]
    fn property_set_only_touches_named_entry(
        entries in revision_map(),
        name in "[a-z]{1,8}",
        rev in "[a-f0-9]{7}",
    ) {
        let before: Revision = entries.into_iter().collect();
        let mut after = before.clone();
        after.set(name.as_str(), rev.as_str());

        prop_assert_eq!(after.get(&name), Some(rev.as_str()));
        for (other, value) in before.entries().filter(|(other, _)| *other != name) {
            prop_assert_eq!(after.get(other), Some(value));
        }
    }
}
