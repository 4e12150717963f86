//! Bundled sample roster
//!
//! Six rated players used to populate an empty roster for demos and local
//! testing.

use crate::error::Result;
use crate::roster::storage::RosterStore;
use crate::types::{PlayerInput, SkillProfile};
use tracing::info;

fn sample(name: &str, photo_url: Option<&str>, ratings: [u8; 7]) -> PlayerInput {
    let [serve, reception, passing, attack, block, defense, mobility] = ratings;
    PlayerInput {
        name: name.to_string(),
        photo_url: photo_url.map(str::to_string),
        skills: SkillProfile {
            serve,
            reception,
            passing,
            attack,
            block,
            defense,
            mobility,
        },
    }
}

/// The sample players, ratings in record order
pub fn sample_players() -> Vec<PlayerInput> {
    vec![
        sample(
            "Marco Silva",
            Some("https://images.unsplash.com/photo-1566492031773-4f4e44671857?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&h=200"),
            [7, 6, 7, 8, 9, 8, 7],
        ),
        sample(
            "Ana Costa",
            Some("https://images.unsplash.com/photo-1498075702571-ecb018f3752d?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&h=200"),
            [7, 8, 9, 7, 8, 8, 9],
        ),
        sample(
            "Carlos Mendes",
            Some("https://images.unsplash.com/photo-1574271143515-5cddf8da19be?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&h=200"),
            [8, 6, 6, 7, 6, 7, 6],
        ),
        sample("Luisa Fernandes", None, [8, 8, 7, 9, 7, 8, 8]),
        sample("Rodrigo Santos", None, [6, 7, 7, 8, 6, 8, 7]),
        sample("Carla Almeida", None, [9, 8, 9, 8, 8, 9, 8]),
    ]
}

/// Load the sample roster unless the store already has players
///
/// Returns the number of players inserted.
pub async fn seed_if_empty(store: &dyn RosterStore) -> Result<usize> {
    let existing = store.player_count().await?;
    if existing > 0 {
        info!(
            "Roster already contains {} players, skipping sample roster",
            existing
        );
        return Ok(0);
    }

    let samples = sample_players();
    let count = samples.len();
    for input in samples {
        store.create_player(input).await?;
    }

    info!("Seeded {} sample players", count);
    Ok(count)
}
