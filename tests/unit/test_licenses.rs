use cobra_scaffold::{copyright_line, LicenseRegistry, LicenseResolver, LicenseSources, ScaffoldError};

/// Test module for the license registry and resolver
mod license_tests {
    use super::*;

    fn explicit(name: &str) -> LicenseSources<'_> {
        LicenseSources {
            explicit: Some(name),
            ..LicenseSources::default()
        }
    }

    /// No alias belongs to two licenses, ignoring case
    #[test]
    fn test_alias_sets_are_disjoint() {
        let registry = LicenseRegistry::builtin();
        let entries: Vec<_> = registry.iter().collect();

        for (i, (key_a, license_a)) in entries.iter().enumerate() {
            assert!(!license_a.possible_matches.is_empty(), "{key_a} has no aliases");

            for (key_b, license_b) in &entries[i + 1..] {
                for alias in &license_a.possible_matches {
                    assert!(
                        !license_b.matches(alias),
                        "alias {alias:?} shared by {key_a} and {key_b}"
                    );
                }
            }
        }
    }

    /// Every alias resolves back to the license that declares it
    #[test]
    fn test_every_alias_resolves_to_its_license() {
        let registry = LicenseRegistry::builtin();
        let resolver = LicenseResolver::new(&registry);

        for (key, license) in registry.iter() {
            for alias in &license.possible_matches {
                assert_eq!(registry.find_by_alias(alias), Some(key));
                assert_eq!(&resolver.resolve(&explicit(alias)).unwrap(), license);
                assert_eq!(
                    &resolver.resolve(&explicit(&alias.to_uppercase())).unwrap(),
                    license
                );
            }
        }
    }

    /// Alias matching ignores case
    #[test]
    fn test_case_insensitive_match() {
        let registry = LicenseRegistry::builtin();
        let resolver = LicenseResolver::new(&registry);

        let upper = resolver.resolve(&explicit("MIT")).unwrap();
        let lower = resolver.resolve(&explicit("mit")).unwrap();
        let mixed = resolver.resolve(&explicit("Mit")).unwrap();
        assert_eq!(upper, lower);
        assert_eq!(lower, mixed);
    }

    /// Explicit name wins over config, custom wins over configured name
    #[test]
    fn test_precedence() {
        let registry = LicenseRegistry::builtin();
        let resolver = LicenseResolver::new(&registry);

        let license = resolver
            .resolve(&LicenseSources {
                explicit: Some("agpl"),
                custom_header: Some("header"),
                custom_text: Some("text"),
                configured: Some("lgpl"),
            })
            .unwrap();
        assert_eq!(license.name, "GNU Affero General Public License");

        let license = resolver
            .resolve(&LicenseSources {
                custom_text: Some("text"),
                configured: Some("lgpl"),
                ..LicenseSources::default()
            })
            .unwrap();
        assert_eq!(license.text, "text");
        assert!(license.name.is_empty());

        let license = resolver
            .resolve(&LicenseSources {
                configured: Some("lgpl"),
                ..LicenseSources::default()
            })
            .unwrap();
        assert_eq!(license.name, "GNU Lesser General Public License");
    }

    /// An unknown explicit name is an error, even when config would resolve
    #[test]
    fn test_unknown_explicit_name_is_fatal() {
        let registry = LicenseRegistry::builtin();
        let resolver = LicenseResolver::new(&registry);

        let err = resolver
            .resolve(&LicenseSources {
                explicit: Some("not-a-real-license"),
                configured: Some("mit"),
                ..LicenseSources::default()
            })
            .unwrap_err();

        match err {
            ScaffoldError::UnknownLicense { name } => assert_eq!(name, "not-a-real-license"),
            other => panic!("unexpected error: {other}"),
        }
    }

    /// The fallback is the empty `none` license
    #[test]
    fn test_default_fallback() {
        let registry = LicenseRegistry::builtin();
        let license = LicenseResolver::new(&registry)
            .resolve(&LicenseSources::default())
            .unwrap();

        assert_eq!(license.name, "None");
        assert!(license.header.is_empty());
        assert!(license.text.is_empty());
    }

    /// A fixed year gives a reproducible copyright line
    #[test]
    fn test_copyright_determinism() {
        assert_eq!(copyright_line("Jane", Some("2020")), "Copyright © 2020 Jane");
    }
}
