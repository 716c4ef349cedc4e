//! GitHub REST implementations of the relcheck collaborator traits:
//! release listing over `GET /repos/{owner}/{repo}/releases` and release-note
//! rendering over `POST /markdown/raw`.

mod client;
mod markdown;

pub use client::GitHubClient;
