//! JSON shapes of the catalog API, converted into core types at the boundary.

use pokedex_core::{Entity, ListEntry, ListPage, Stat};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct WireListPage {
    count: u64,
    next: Option<String>,
    previous: Option<String>,
    results: Vec<WireNamedResource>,
}

#[derive(Debug, Deserialize)]
struct WireNamedResource {
    name: String,
    url: String,
}

#[derive(Debug, Deserialize)]
struct WireName {
    name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireEntity {
    id: u32,
    name: String,
    #[serde(default)]
    types: Vec<WireTypeSlot>,
    #[serde(default)]
    stats: Vec<WireStat>,
    #[serde(default)]
    abilities: Vec<WireAbility>,
    #[serde(default)]
    sprites: WireSprites,
    #[serde(default)]
    height: u32,
    #[serde(default)]
    weight: u32,
}

#[derive(Debug, Deserialize)]
struct WireTypeSlot {
    slot: u32,
    #[serde(rename = "type")]
    kind: WireName,
}

#[derive(Debug, Deserialize)]
struct WireStat {
    base_stat: u32,
    stat: WireName,
}

#[derive(Debug, Deserialize)]
struct WireAbility {
    ability: WireName,
}

#[derive(Debug, Default, Deserialize)]
struct WireSprites {
    front_default: Option<String>,
}

impl From<WireListPage> for ListPage {
    fn from(wire: WireListPage) -> Self {
        ListPage {
            count: wire.count,
            next: wire.next,
            previous: wire.previous,
            results: wire
                .results
                .into_iter()
                .map(|r| ListEntry {
                    name: r.name,
                    url: r.url,
                })
                .collect(),
        }
    }
}

impl From<WireEntity> for Entity {
    fn from(wire: WireEntity) -> Self {
        let mut slots = wire.types;
        slots.sort_by_key(|slot| slot.slot);
        Entity {
            id: wire.id,
            name: wire.name,
            types: slots.into_iter().map(|slot| slot.kind.name).collect(),
            stats: wire
                .stats
                .into_iter()
                .map(|s| Stat {
                    name: s.stat.name,
                    value: s.base_stat,
                })
                .collect(),
            abilities: wire.abilities.into_iter().map(|a| a.ability.name).collect(),
            image: wire.sprites.front_default.filter(|url| !url.is_empty()),
            height: wire.height,
            weight: wire.weight,
        }
    }
}
