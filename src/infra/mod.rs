//! Инфраструктура: RNG и хранилище состояния.

pub mod persistence;
pub mod rng;

pub use persistence::{
    decode_state, decode_state_or_default, encode_state, GameStorage, InMemoryStorage,
};
pub use rng::{DeterministicRng, SystemRng};
