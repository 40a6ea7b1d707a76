//! Generation of the short opaque ids handed out by the dev server.

use std::sync::{LazyLock, Mutex, PoisonError};

use restartup::id::Id;
use tiny_id::ShortCodeGenerator;

type LazyShortCodeGenerator = LazyLock<Mutex<ShortCodeGenerator<char>>>;

// Games get ids people can read out loud
static GAME_ID_GENERATOR: LazyShortCodeGenerator = LazyLock::new(|| {
    let alphabet: Vec<char> = "123456789ABCDEFGHJKMNPQRSTUVWXYZ".chars().collect();
    Mutex::new(ShortCodeGenerator::with_alphabet(alphabet, 6))
});

static DEFAULT_ID_GENERATOR: LazyShortCodeGenerator = LazyLock::new(|| {
    let alphabet: Vec<char> = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789"
        .chars()
        .collect();
    Mutex::new(ShortCodeGenerator::with_alphabet(alphabet, 8))
});

fn next(generator: &LazyShortCodeGenerator) -> String {
    generator
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .next_string()
}

pub fn game_id<T>() -> Id<T> {
    Id::from_string(next(&GAME_ID_GENERATOR))
}

pub fn generate<T>() -> Id<T> {
    Id::from_string(next(&DEFAULT_ID_GENERATOR))
}
