//! Property tests for authority classification.

use histogis::{Authority, AuthorityTable};
use proptest::prelude::*;

/// Noise that cannot form any authority fragment.
fn noise() -> impl Strategy<Value = String> {
    "[0-9/:?=&#._~ A-Z]{0,24}"
}

fn fragment_and_authority() -> impl Strategy<Value = (&'static str, Authority)> {
    prop_oneof![
        Just(("geonames", Authority::GeoNames)),
        Just(("d-nb", Authority::Gnd)),
        Just(("wikidata", Authority::Wikidata)),
    ]
}

proptest! {
    #[test]
    fn fragment_classifies_regardless_of_noise(
        prefix in noise(),
        suffix in noise(),
        (fragment, authority) in fragment_and_authority(),
    ) {
        let table = AuthorityTable::default();
        let identifier = format!("{prefix}{fragment}{suffix}");
        prop_assert_eq!(table.classify(&identifier), Some(authority));
    }

    #[test]
    fn noise_alone_is_unresolved(text in noise()) {
        let table = AuthorityTable::default();
        prop_assert_eq!(table.classify(&text), None);
    }

    #[test]
    fn declared_authority_always_wins(
        text in ".{0,40}",
        (_, authority) in fragment_and_authority(),
    ) {
        let table = AuthorityTable::default();
        prop_assert_eq!(table.resolve(&text, Some(authority)).unwrap(), authority);
    }
}
