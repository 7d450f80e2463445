use super::*;

#[test]
fn test_describe_all_known_generations() {
    for key in 1..=9u8 {
        let desc = describe(key).unwrap();
        assert_eq!(desc.key, key);
        assert!(!desc.display_name.is_empty());
        assert!(!desc.version_tags.is_empty());
    }
}

#[test]
fn test_describe_unknown_generation() {
    for key in [0u8, 10, 42, 255] {
        match describe(key) {
            Err(ApiError::UnknownGeneration(k)) => assert_eq!(k, key),
            other => panic!("expected UnknownGeneration for {}, got {:?}", key, other),
        }
    }
}

#[test]
fn test_all_in_key_order() {
    let keys: Vec<u8> = all().iter().map(|g| g.key).collect();
    assert_eq!(keys, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn test_api_ids_match_keys() {
    for g in all() {
        assert_eq!(g.api_id, u32::from(g.key));
    }
}

#[test]
fn test_gen_five_includes_sequels() {
    let desc = describe(5).unwrap();
    assert!(desc.has_version("black"));
    assert!(desc.has_version("black-2"));
    assert!(desc.has_version("white-2"));
    assert!(!desc.has_version("gold"));
}

#[test]
fn test_gen_seven_includes_ultra_versions() {
    let desc = describe(7).unwrap();
    assert!(desc.has_version("ultra-sun"));
    assert!(desc.has_version("ultra-moon"));
}

#[test]
fn test_version_tags_unique_across_generations() {
    let mut seen = std::collections::HashSet::new();
    for g in all() {
        for tag in g.version_tags {
            assert!(seen.insert(*tag), "version tag '{}' appears twice", tag);
        }
    }
}
