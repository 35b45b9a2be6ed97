use serde::Deserialize;

/// One transcription variant of an album (e.g. "Solo", "Ensemble").
///
/// The catalog document carries either `urls` (page images, viewed one page
/// at a time) or `filePaths` (stacked images, viewed as one continuous
/// scroll). Which list is populated decides the viewer mode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sheet {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub urls: Vec<String>,
    #[serde(default, rename = "filePaths")]
    pub file_paths: Vec<String>,
}

impl Sheet {
    /// Page sources in display order, whichever list the entry carries.
    pub fn pages(&self) -> &[String] {
        if self.file_paths.is_empty() {
            &self.urls
        } else {
            &self.file_paths
        }
    }

    /// Sheets shipped as stacked images open in the continuous-scroll viewer.
    pub fn is_continuous(&self) -> bool {
        !self.file_paths.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Album {
    pub name: String,
    pub artist: String,
    pub youtube: String,
    #[serde(default)]
    pub sheets: Vec<Sheet>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Song {
    pub title: String,
    #[serde(default)]
    pub albums: Vec<Album>,
}

/// Sort songs by title, ascending.
///
/// Keys are Unicode-lowercased so "alpha" and "Alpha" collate together.
/// The sort is stable: equal titles keep their document order.
pub fn sort_by_title(songs: &mut [Song]) {
    songs.sort_by_key(|s| s.title.to_lowercase());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(title: &str) -> Song {
        Song {
            title: title.to_string(),
            albums: Vec::new(),
        }
    }

    #[test]
    fn test_parse_paged_sheet() {
        let json = r#"{
            "title": "Clair de Lune",
            "albums": [{
                "name": "Suite Bergamasque",
                "artist": "Debussy",
                "youtube": "https://youtube.com/watch?v=abc",
                "sheets": [
                    { "type": "Solo", "urls": ["p1.png", "p2.png"] },
                    { "type": "Ensemble", "urls": ["e1.png"] }
                ]
            }]
        }"#;
        let song: Song = serde_json::from_str(json).unwrap();
        assert_eq!(song.title, "Clair de Lune");
        assert_eq!(song.albums.len(), 1);
        let sheet = &song.albums[0].sheets[0];
        assert_eq!(sheet.kind, "Solo");
        assert!(!sheet.is_continuous());
        assert_eq!(sheet.pages(), ["p1.png".to_string(), "p2.png".to_string()]);
    }

    #[test]
    fn test_parse_continuous_sheet() {
        let json = r#"{ "type": "Solo", "filePaths": ["a.svg", "b.svg"] }"#;
        let sheet: Sheet = serde_json::from_str(json).unwrap();
        assert!(sheet.is_continuous());
        assert_eq!(sheet.pages().len(), 2);
        assert!(sheet.urls.is_empty());
    }

    #[test]
    fn test_sort_is_case_insensitive_and_stable() {
        let mut songs = vec![song("beta"), song("Alpha"), song("alpha"), song("Beta")];
        sort_by_title(&mut songs);
        let titles: Vec<&str> = songs.iter().map(|s| s.title.as_str()).collect();
        // Equal keys keep their original relative order
        assert_eq!(titles, ["Alpha", "alpha", "beta", "Beta"]);

        // Re-sorting sorted data is a no-op
        let before = songs.clone();
        sort_by_title(&mut songs);
        assert_eq!(songs, before);
    }
}
