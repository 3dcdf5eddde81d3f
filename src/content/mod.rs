//! Static portfolio content rendered by the shell commands.
//!
//! Everything here is data: the biography, social profiles, project list
//! and the watched-movies dataset. The movie list is refreshed out of band
//! (a Letterboxd export) and embedded as JSON at compile time, so it is
//! decoded once at startup.

use serde::Deserialize;

use crate::error::{ContentError, Result};

/// A social profile link.
#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

/// A project listing entry.
#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub role: &'static str,
    pub stack: &'static [&'static str],
}

/// A watched movie, decoded from the embedded dataset.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Movie {
    pub title: String,
    pub url: String,
}

/// Letterboxd profile shown in the `movies` summary line.
pub const LETTERBOXD_PROFILE: &str = "https://letterboxd.com/icepuma/films/";

/// Short biography shown by the `bio` command.
pub const BIO: &str = "\
I'm a 38-year-old software developer based in Berlin, Germany.
I currently live on a small island with my wife and our 3-year-old black lab.

My interests include:
- 3D printing
- Sci-fi (especially Stargate SG-1 and Warhammer 40k)
- Open Source, with a particular fondness for Rust.

I also contribute to building rawkode.studio (https://rawkode.studio)
for the Rawkode Academy (https://rawkode.academy).";

/// Social profiles shown by the `links` command.
pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        url: "https://github.com/icepuma",
    },
    SocialLink {
        name: "Korora Tech",
        url: "https://github.com/korora-tech",
    },
    SocialLink {
        name: "Rawkode Academy",
        url: "https://github.com/RawkodeAcademy",
    },
    SocialLink {
        name: "Bluesky",
        url: "https://bsky.app/profile/icepuma.dev",
    },
    SocialLink {
        name: "LinkedIn",
        url: "https://www.linkedin.com/in/stefan-ruzitschka/",
    },
    SocialLink {
        name: "Letterboxd",
        url: "https://letterboxd.com/icepuma/",
    },
];

/// Projects shown by the `projects` command.
pub const PROJECTS: &[Project] = &[
    Project {
        name: "cidrrr",
        description: "CLI tool for converting CIDR blocks to IP lists.",
        url: "https://github.com/korora-tech/cidrrr",
        role: "Author",
        stack: &["Rust", "CLI"],
    },
    Project {
        name: "fbtoggl",
        description: "Interact with track.toggl.com via terminal.",
        url: "https://github.com/icepuma/fbtoggl",
        role: "Author",
        stack: &["Rust", "CLI"],
    },
    Project {
        name: "foliosh",
        description: "My personal portfolio as a terminal shell.",
        url: "https://github.com/icepuma/foliosh",
        role: "Author",
        stack: &["Rust", "CLI"],
    },
    Project {
        name: "rawkode.studio",
        description: "A subproject within Rawkode Academy monorepository.",
        url: "https://github.com/RawkodeAcademy/RawkodeAcademy/tree/main/projects/rawkode.studio",
        role: "Maintainer",
        stack: &["TypeScript", "Astro", "Drizzle ORM", "Bun"],
    },
    Project {
        name: "temps",
        description: "Library for parsing human-readable time expressions.",
        url: "https://github.com/korora-tech/temps",
        role: "Author",
        stack: &["Rust", "chrono", "jiff"],
    },
];

/// Raw embedded movies dataset.
const MOVIES_JSON: &str = include_str!("movies.json");

/// Decode the embedded movies dataset.
pub fn load_movies() -> Result<Vec<Movie>> {
    serde_json::from_str(MOVIES_JSON).map_err(|e| {
        ContentError::InvalidDataset {
            name: "movies".to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movies_dataset_decodes() {
        let movies = load_movies().unwrap();
        assert!(!movies.is_empty());
        assert!(movies.iter().all(|m| !m.title.is_empty()));
        assert!(movies.iter().all(|m| m.url.starts_with("https://letterboxd.com/")));
    }

    #[test]
    fn test_projects_have_stacks() {
        assert!(PROJECTS.iter().all(|p| !p.stack.is_empty()));
    }

    #[test]
    fn test_social_links_are_absolute() {
        assert!(SOCIAL_LINKS.iter().all(|l| l.url.starts_with("https://")));
    }
}
