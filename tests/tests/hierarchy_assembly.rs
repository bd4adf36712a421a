//! Assembling message trees and driving a whole campaign over them.

use fuzzable_tests::prelude::*;
use pretty_assertions::assert_eq;

fn login() -> HierarchyBuilder {
    let mut builder = HierarchyBuilder::new("login");
    builder.add(Static::new("magic", b"LG".to_vec())).unwrap();
    builder
        .add_block("user")
        .child(
            LengthPrefixed::new("len", 1, Static::new("name", b"root".to_vec()))
                .with_cases(vec![0, 255]),
        )
        .child(Word::new("flags", 0, 1).with_cases(vec![1, 0x80]))
        .done()
        .unwrap();
    builder
        .add_block("padding")
        .child(Static::new("zeros", vec![0u8; 2]))
        .not_fuzzable()
        .done()
        .unwrap();
    builder
}

mod assembly {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tree_is_indexed_by_qualified_name() {
        let request = login().build().unwrap();

        let names: Vec<&str> = request.qualified_names().collect();
        assert_eq!(
            names,
            vec![
                "login",
                "login.magic",
                "login.padding",
                "login.padding.zeros",
                "login.user",
                "login.user.flags",
                "login.user.len",
                "login.user.name",
            ]
        );
    }

    #[test]
    fn test_nested_block_paths() {
        // GIVEN a block nested two levels deep, built bottom-up
        let inner = Block::new("inner").with_child(Word::new("x", 1, 1));
        let mut builder = HierarchyBuilder::new("root");
        builder.add_block("outer").child(inner).done().unwrap();

        // WHEN built
        let request = builder.build().unwrap();

        // THEN the leaf carries the full dotted path
        let x = request.get("root.outer.inner.x").unwrap();
        assert_eq!(x.context_path(), Some("root.outer.inner"));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut builder = login();
        let result = builder.add(Word::new("magic", 0, 1));

        assert_eq!(
            result,
            Err(DefinitionError::duplicate_qualified_name("login.magic"))
        );
    }

    #[test]
    fn test_payload_colliding_with_sibling_rejected_at_build() {
        // GIVEN a payload named like its neighbour
        let mut builder = HierarchyBuilder::new("frame");
        builder
            .add_block("body")
            .child(Word::new("data", 1, 1))
            .child(LengthPrefixed::new("len", 1, Static::new("data", b"x".to_vec())))
            .done()
            .unwrap();

        // WHEN built
        let result = builder.build();

        // THEN the collision is reported
        assert!(matches!(
            result,
            Err(DefinitionError::DuplicateQualifiedName(name)) if name == "frame.body.data"
        ));
    }

    #[test]
    fn test_unnamed_elements_never_collide() {
        let mut builder = HierarchyBuilder::new("auto");
        builder.add(Word::unnamed(1, 1)).unwrap();
        builder.add(Word::unnamed(2, 1)).unwrap();
        builder.add(Static::unnamed(b"z".to_vec())).unwrap();

        let request = builder.build().unwrap();
        assert_eq!(request.element_count(), 4);
    }
}

mod campaign {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_total_mutations() {
        let request = login().build().unwrap();

        // len: 2 own cases, name: static; flags: 2; padding: silenced
        assert_eq!(request.num_mutations(), 4);
        assert_eq!(request.mutations().count(), 4);
    }

    #[test]
    fn test_every_descriptor_renders() {
        let request = login().build().unwrap();

        let cases: Vec<Vec<u8>> = request
            .mutations()
            .map(|mutation| request.render(&mutation).unwrap())
            .collect();

        assert_eq!(
            cases,
            vec![
                b"LG\x00root\x00\x00\x00".to_vec(),
                b"LG\xffroot\x00\x00\x00".to_vec(),
                b"LG\x04root\x01\x00\x00".to_vec(),
                b"LG\x04root\x80\x00\x00".to_vec(),
            ]
        );
    }

    #[test]
    fn test_legacy_cursor_walks_the_same_cases() {
        let mut request = login().build().unwrap();
        let expected: Vec<Vec<u8>> = request
            .mutations()
            .map(|mutation| request.render(&mutation).unwrap())
            .collect();

        let mut stepped = Vec::new();
        while request.mutate() {
            stepped.push(request.render_current().unwrap());
        }

        assert_eq!(stepped, expected);
        assert_eq!(request.mutant_index(), request.num_mutations());

        request.reset();
        assert_eq!(
            request.render_current().unwrap(),
            request.render_original().unwrap()
        );
    }

    #[test]
    fn test_combined_case() {
        let request = login().build().unwrap();
        let first = Mutation::single("login.user.flags", 0x80i64);
        let second = Mutation::single("login.user.name", "admin");

        let rendered = request.render(&first.merge(second)).unwrap();

        assert_eq!(rendered, b"LG\x05admin\x80\x00\x00".to_vec());
    }
}

mod replay {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stored_case_replays_identically() {
        // GIVEN a case picked from the campaign and stored as JSON
        let request = login().build().unwrap();
        let case = request.mutations().nth(1).unwrap();
        let stored = serde_json::to_string(&case).unwrap();

        // WHEN it is loaded against a freshly built tree
        let replayed: Mutation = serde_json::from_str(&stored).unwrap();
        let fresh = login().build().unwrap();

        // THEN it addresses a known element and renders the same bytes
        assert!(fresh.check(&replayed).is_ok());
        assert_eq!(
            fresh.render(&replayed).unwrap(),
            request.render(&case).unwrap()
        );
    }

    #[test]
    fn test_stale_case_is_detected() {
        let request = login().build().unwrap();
        let stale = mutation! { "login.user.password" => "hunter2" };

        assert_eq!(
            request.check(&stale),
            Err(DefinitionError::unknown_target("login.user.password"))
        );
        // Rendering still works; the unknown key is ignored
        assert_eq!(
            request.render(&stale).unwrap(),
            request.render_original().unwrap()
        );
    }
}
