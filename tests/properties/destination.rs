//! Property tests for destination path derivation.

use proptest::prelude::*;
use std::path::{Path, PathBuf};

use css2cpp::derive_destination;

fn stem() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_.-]{1,24}")
        .unwrap()
        .prop_filter("must not end with .css", |s| !s.ends_with(".css"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `<stem>.css` always becomes `<stem>_css.cpp`.
    #[test]
    fn property_css_extension_is_replaced(
        name in stem()
    ) {
        let source = format!("{name}.css");
        prop_assert_eq!(
            derive_destination(Path::new(&source)),
            PathBuf::from(format!("{name}_css.cpp"))
        );
    }

    /// PROPERTY: without a trailing `.css` the full name is kept.
    #[test]
    fn property_other_names_keep_full_name(
        name in stem()
    ) {
        prop_assert_eq!(
            derive_destination(Path::new(&name)),
            PathBuf::from(format!("{name}_css.cpp"))
        );
    }

    /// PROPERTY: the derived destination always ends in `_css.cpp`.
    #[test]
    fn property_destination_suffix(
        s in "[^\u{0}]{1,64}"
    ) {
        let destination = derive_destination(Path::new(&s));
        prop_assert!(destination.to_string_lossy().ends_with("_css.cpp"));
    }
}
