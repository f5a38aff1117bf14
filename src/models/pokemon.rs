use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reference to another PokeAPI resource (`{ "name": ..., "url": ... }`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedApiResource {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Paginated list returned by `GET /pokemon?limit=N`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamedApiResourceList {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<NamedApiResource>,
}

impl NamedApiResourceList {
    /// Nomes na ordem em que a API devolveu
    pub fn names(self) -> Vec<String> {
        self.results.into_iter().map(|r| r.name).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PokemonAbility {
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub slot: u32,
    #[serde(default)]
    pub ability: NamedApiResource,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PokemonType {
    #[serde(default)]
    pub slot: u32,
    #[serde(rename = "type", default)]
    pub kind: NamedApiResource,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PokemonStat {
    #[serde(default)]
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    #[serde(default)]
    pub stat: NamedApiResource,
}

/// Full pokemon record as served by PokeAPI.
///
/// Only the commonly used fields are typed; everything else upstream sends
/// (sprites, moves, game indices, ...) lands in `extra` and is written back
/// out unchanged when the record is served.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub abilities: Vec<PokemonAbility>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Pokemon {
    /// True for the zero value, i.e. nothing was ever decoded into it
    pub fn is_empty(&self) -> bool {
        *self == Pokemon::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIKACHU: &str = r#"{
        "id": 25,
        "name": "pikachu",
        "base_experience": 112,
        "height": 4,
        "weight": 60,
        "order": 35,
        "is_default": true,
        "abilities": [
            {"is_hidden": false, "slot": 1, "ability": {"name": "static", "url": "https://pokeapi.co/api/v2/ability/9/"}}
        ],
        "types": [
            {"slot": 1, "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}}
        ],
        "stats": [
            {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/"}}
        ],
        "sprites": {"front_default": "https://example.org/25.png"},
        "species": {"name": "pikachu", "url": "https://pokeapi.co/api/v2/pokemon-species/25/"}
    }"#;

    #[test]
    fn test_decode_pokeapi_payload() {
        let pokemon: Pokemon = serde_json::from_str(PIKACHU).unwrap();

        assert_eq!(pokemon.id, 25);
        assert_eq!(pokemon.name, "pikachu");
        assert_eq!(pokemon.base_experience, Some(112));
        assert_eq!(pokemon.types[0].kind.name, "electric");
        assert_eq!(pokemon.abilities[0].ability.name, "static");
        assert_eq!(pokemon.stats[0].base_stat, 35);
        assert!(pokemon.extra.contains_key("sprites"));
        assert!(pokemon.extra.contains_key("species"));
        assert!(!pokemon.is_empty());
    }

    #[test]
    fn test_untyped_fields_are_served_back() {
        let pokemon: Pokemon = serde_json::from_str(PIKACHU).unwrap();
        let served: Value = serde_json::to_value(&pokemon).unwrap();

        assert_eq!(served["sprites"]["front_default"], "https://example.org/25.png");
        assert_eq!(served["types"][0]["type"]["name"], "electric");
    }

    #[test]
    fn test_default_is_empty() {
        assert!(Pokemon::default().is_empty());

        let named = Pokemon {
            name: "mew".to_string(),
            ..Default::default()
        };
        assert!(!named.is_empty());
    }

    #[test]
    fn test_resource_list_keeps_order() {
        let list: NamedApiResourceList = serde_json::from_str(
            r#"{"count": 2, "next": null, "previous": null, "results": [
                {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
                {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(list.count, 2);
        assert_eq!(list.names(), vec!["bulbasaur", "ivysaur"]);
    }
}
