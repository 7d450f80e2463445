use super::*;

fn summary(id: u32, name: &str) -> PokemonSummary {
    PokemonSummary {
        id,
        name: name.to_string(),
        sprite: None,
        species_url: format!("https://pokeapi.co/api/v2/pokemon-species/{}/", id),
    }
}

fn sample() -> Vec<PokemonSummary> {
    vec![
        summary(4, "charmander"),
        summary(5, "charmeleon"),
        summary(15, "beedrill"),
        summary(25, "pikachu"),
        summary(52, "meowth"),
        summary(122, "mr-mime"),
    ]
}

#[test]
fn test_empty_query_matches_all_in_order() {
    let roster = sample();
    let result = filter_roster(&roster, "");
    let ids: Vec<u32> = result.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![4, 5, 15, 25, 52, 122]);
}

#[test]
fn test_name_match_is_case_insensitive() {
    let roster = sample();
    let result = filter_roster(&roster, "PIKA");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "pikachu");
}

#[test]
fn test_name_substring_match() {
    let roster = sample();
    let result = filter_roster(&roster, "char");
    let names: Vec<&str> = result.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["charmander", "charmeleon"]);
}

#[test]
fn test_id_substring_match() {
    let roster = sample();
    let result = filter_roster(&roster, "5");
    let ids: Vec<u32> = result.iter().map(|p| p.id).collect();
    // 5, 15, 25, 52 all contain "5" in their decimal string; 4 and 122 don't
    assert_eq!(ids, vec![5, 15, 25, 52]);
}

#[test]
fn test_query_25_matches_id_and_name() {
    let mut roster = sample();
    roster.push(summary(300, "unit25"));
    let result = filter_roster(&roster, "25");
    let ids: Vec<u32> = result.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![25, 300]);
}

#[test]
fn test_hyphenated_name_matches() {
    let roster = sample();
    let result = filter_roster(&roster, "mr-m");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, 122);
}

#[test]
fn test_no_match_yields_empty() {
    let roster = sample();
    assert!(filter_roster(&roster, "zzz").is_empty());
    assert!(filter_roster(&roster, "999").is_empty());
}

#[test]
fn test_query_is_not_trimmed() {
    let roster = sample();
    // Leading whitespace is matched literally, not stripped
    assert!(filter_roster(&roster, " pika").is_empty());
}
