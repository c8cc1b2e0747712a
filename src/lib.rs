//! Charter records and deterministic CEI XML serialization.
//!
//! `cei-core` models historical charters and archival charter groups as
//! immutable, validated value objects and serializes them into the CEI
//! dialect (Charters Encoding Initiative, `http://www.monasterium.net/NS/cei`)
//! for import into archive platforms. Serialization is deterministic —
//! identical inputs always produce identical output, byte-for-byte.
//!
//! The pipeline is one-directional: build a [`charter::Charter`] or
//! [`charter::CharterGroup`], hand it to [`cei::CeiSerializer`], render the
//! resulting element tree with [`cei::render`]. Nothing is parsed back, and
//! no call touches the file system or network.

pub mod cei;
pub mod charter;
pub mod types;
